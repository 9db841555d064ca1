//! Term locations recorded in a search hit

use super::null_as_empty;
use serde::{Deserialize, Serialize};

/// A single occurrence of a matched term
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRowLocation {
    pub field: String,
    pub term: String,
    /// Token position within the field
    pub position: u64,
    /// Byte offset where the term starts
    pub start_offset: u64,
    /// Byte offset where the term ends
    pub end_offset: u64,
    /// Positions within nested arrays, empty for scalar fields
    #[serde(default, deserialize_with = "null_as_empty")]
    pub array_positions: Vec<u64>,
}

/// Read-only collection of the term locations of a row
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchRowLocations {
    locations: Vec<SearchRowLocation>,
}

impl SearchRowLocations {
    pub fn new(locations: Vec<SearchRowLocation>) -> Self {
        Self { locations }
    }

    /// All locations, in response order
    pub fn get_all(&self) -> &[SearchRowLocation] {
        &self.locations
    }

    /// Locations recorded for a field
    pub fn get_for_field(&self, field: &str) -> Vec<&SearchRowLocation> {
        self.locations
            .iter()
            .filter(|location| location.field == field)
            .collect()
    }

    /// Locations recorded for a term within a field
    pub fn get_for_field_and_term(&self, field: &str, term: &str) -> Vec<&SearchRowLocation> {
        self.locations
            .iter()
            .filter(|location| location.field == field && location.term == term)
            .collect()
    }

    /// Distinct fields, in first-seen order
    pub fn fields(&self) -> Vec<&str> {
        distinct(self.locations.iter().map(|location| location.field.as_str()))
    }

    /// Distinct terms, in first-seen order
    pub fn terms(&self) -> Vec<&str> {
        distinct(self.locations.iter().map(|location| location.term.as_str()))
    }

    /// Distinct terms of a field, in first-seen order
    pub fn terms_for_field(&self, field: &str) -> Vec<&str> {
        distinct(
            self.locations
                .iter()
                .filter(|location| location.field == field)
                .map(|location| location.term.as_str()),
        )
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn location(field: &str, term: &str, position: u64) -> SearchRowLocation {
        SearchRowLocation {
            field: field.to_string(),
            term: term.to_string(),
            position,
            start_offset: position * 5,
            end_offset: position * 5 + term.len() as u64,
            array_positions: Vec::new(),
        }
    }

    fn fixture() -> SearchRowLocations {
        SearchRowLocations::new(vec![
            location("title", "rust", 1),
            location("title", "cargo", 2),
            location("body", "rust", 7),
        ])
    }

    #[test]
    fn test_fields_are_distinct() {
        let locations = fixture();
        let fields: HashSet<&str> = locations.fields().into_iter().collect();
        assert_eq!(fields, HashSet::from(["title", "body"]));
        assert_eq!(locations.fields().len(), 2);
    }

    #[test]
    fn test_get_for_field() {
        let locations = fixture();
        let title = locations.get_for_field("title");
        assert_eq!(title.len(), 2);
        assert!(title.iter().all(|location| location.field == "title"));
        assert!(locations.get_for_field("missing").is_empty());
    }

    #[test]
    fn test_get_for_field_and_term() {
        let locations = fixture();
        let hits = locations.get_for_field_and_term("body", "rust");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].position, 7);
    }

    #[test]
    fn test_terms() {
        let locations = fixture();
        assert_eq!(locations.terms(), vec!["rust", "cargo"]);
        assert_eq!(locations.terms_for_field("body"), vec!["rust"]);
        assert_eq!(locations.get_all().len(), 3);
    }

    #[test]
    fn test_location_deserialize_defaults_array_positions() {
        let location: SearchRowLocation = serde_json::from_value(serde_json::json!({
            "field": "title",
            "term": "rust",
            "position": 1,
            "start_offset": 0,
            "end_offset": 4
        }))
        .unwrap();
        assert!(location.array_positions.is_empty());

        let location: SearchRowLocation = serde_json::from_value(serde_json::json!({
            "field": "title",
            "term": "rust",
            "position": 1,
            "start_offset": 0,
            "end_offset": 4,
            "array_positions": null
        }))
        .unwrap();
        assert!(location.array_positions.is_empty());
    }
}
