//! Facet results
//!
//! The service keys facet results by the names chosen in the request and does
//! not say which kind of facet each one is. Decoding therefore looks up the
//! [`FacetSpec`] registered under the same name and uses its [`FacetKind`] to
//! pick the result type.

use super::null_as_empty;
use crate::error::FtsError;
use crate::facet::{FacetKind, FacetSpec};
use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Count of documents for one term
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermFacet {
    pub term: String,
    pub count: u64,
}

/// Count of documents for one named numeric range
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NumericRangeFacet {
    pub name: String,
    pub count: u64,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

/// Count of documents for one named date range
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRangeFacet {
    pub name: String,
    pub count: u64,
    #[serde(default, alias = "start_time")]
    pub start: Option<String>,
    #[serde(default, alias = "end_time")]
    pub end: Option<String>,
}

/// Result of a term facet
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TermFacetResult {
    #[serde(default)]
    pub name: String,
    pub field: String,
    pub total: u64,
    #[serde(default)]
    pub missing: u64,
    #[serde(default)]
    pub other: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub terms: Vec<TermFacet>,
}

/// Result of a numeric range facet
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NumericRangeFacetResult {
    #[serde(default)]
    pub name: String,
    pub field: String,
    pub total: u64,
    #[serde(default)]
    pub missing: u64,
    #[serde(default)]
    pub other: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub numeric_ranges: Vec<NumericRangeFacet>,
}

/// Result of a date range facet
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DateRangeFacetResult {
    #[serde(default)]
    pub name: String,
    pub field: String,
    pub total: u64,
    #[serde(default)]
    pub missing: u64,
    #[serde(default)]
    pub other: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date_ranges: Vec<DateRangeFacet>,
}

/// A decoded facet result
#[derive(Clone, Debug, PartialEq)]
pub enum FacetResult {
    Term(TermFacetResult),
    NumericRange(NumericRangeFacetResult),
    DateRange(DateRangeFacetResult),
}

impl FacetResult {
    /// Decode the raw result stored under `key`, as requested by `spec`
    ///
    /// A missing `name` falls back to the response key.
    pub fn decode(key: &str, raw: &Value, spec: &FacetSpec) -> Result<Self> {
        let malformed = |e: serde_json::Error| FtsError::malformed(format!("facet '{}'", key), e);
        let mut result = match spec.kind() {
            FacetKind::Term => {
                FacetResult::Term(TermFacetResult::deserialize(raw).map_err(malformed)?)
            }
            FacetKind::NumericRange => FacetResult::NumericRange(
                NumericRangeFacetResult::deserialize(raw).map_err(malformed)?,
            ),
            FacetKind::DateRange => {
                FacetResult::DateRange(DateRangeFacetResult::deserialize(raw).map_err(malformed)?)
            }
        };
        let name = match &mut result {
            FacetResult::Term(facet) => &mut facet.name,
            FacetResult::NumericRange(facet) => &mut facet.name,
            FacetResult::DateRange(facet) => &mut facet.name,
        };
        if name.is_empty() {
            *name = key.to_string();
        }
        Ok(result)
    }

    pub fn kind(&self) -> FacetKind {
        match self {
            FacetResult::Term(_) => FacetKind::Term,
            FacetResult::NumericRange(_) => FacetKind::NumericRange,
            FacetResult::DateRange(_) => FacetKind::DateRange,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FacetResult::Term(facet) => &facet.name,
            FacetResult::NumericRange(facet) => &facet.name,
            FacetResult::DateRange(facet) => &facet.name,
        }
    }

    pub fn field(&self) -> &str {
        match self {
            FacetResult::Term(facet) => &facet.field,
            FacetResult::NumericRange(facet) => &facet.field,
            FacetResult::DateRange(facet) => &facet.field,
        }
    }

    /// Number of field values seen
    pub fn total(&self) -> u64 {
        match self {
            FacetResult::Term(facet) => facet.total,
            FacetResult::NumericRange(facet) => facet.total,
            FacetResult::DateRange(facet) => facet.total,
        }
    }

    /// Number of documents without the field
    pub fn missing(&self) -> u64 {
        match self {
            FacetResult::Term(facet) => facet.missing,
            FacetResult::NumericRange(facet) => facet.missing,
            FacetResult::DateRange(facet) => facet.missing,
        }
    }

    /// Number of values not covered by the returned buckets
    pub fn other(&self) -> u64 {
        match self {
            FacetResult::Term(facet) => facet.other,
            FacetResult::NumericRange(facet) => facet.other,
            FacetResult::DateRange(facet) => facet.other,
        }
    }

    pub fn as_term(&self) -> Option<&TermFacetResult> {
        match self {
            FacetResult::Term(facet) => Some(facet),
            _ => None,
        }
    }

    pub fn as_numeric_range(&self) -> Option<&NumericRangeFacetResult> {
        match self {
            FacetResult::NumericRange(facet) => Some(facet),
            _ => None,
        }
    }

    pub fn as_date_range(&self) -> Option<&DateRangeFacetResult> {
        match self {
            FacetResult::DateRange(facet) => Some(facet),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_term_facet_result() {
        let raw = json!({
            "name": "colors",
            "field": "color",
            "total": 10,
            "terms": [{"term": "red", "count": 7}]
        });
        let result = FacetResult::decode("colors", &raw, &FacetSpec::term("color")).unwrap();
        let term = result.as_term().unwrap();
        assert_eq!(
            term.terms,
            vec![TermFacet {
                term: "red".to_string(),
                count: 7
            }]
        );
        assert_eq!(result.total(), 10);
        assert_eq!(result.missing(), 0);
        assert_eq!(result.kind(), FacetKind::Term);
    }

    #[test]
    fn test_missing_detail_list_defaults_to_empty() {
        let raw = json!({"field": "abv", "total": 0, "missing": 4, "other": 0});
        let result =
            FacetResult::decode("strength", &raw, &FacetSpec::numeric_range("abv")).unwrap();
        let facet = result.as_numeric_range().unwrap();
        assert!(facet.numeric_ranges.is_empty());
        assert_eq!(facet.missing, 4);
        assert_eq!(result.name(), "strength");

        let raw = json!({"field": "abv", "total": 0, "numeric_ranges": null});
        let result =
            FacetResult::decode("strength", &raw, &FacetSpec::numeric_range("abv")).unwrap();
        assert!(result.as_numeric_range().unwrap().numeric_ranges.is_empty());
    }

    #[test]
    fn test_numeric_range_facet_result() {
        let raw = json!({
            "name": "strength",
            "field": "abv",
            "total": 12,
            "missing": 1,
            "other": 2,
            "numeric_ranges": [
                {"name": "light", "count": 4, "max": 4.5},
                {"name": "strong", "count": 6, "min": 4.5}
            ]
        });
        let result =
            FacetResult::decode("strength", &raw, &FacetSpec::numeric_range("abv")).unwrap();
        let facet = result.as_numeric_range().unwrap();
        assert_eq!(facet.numeric_ranges.len(), 2);
        assert_eq!(facet.numeric_ranges[0].min, None);
        assert_eq!(facet.numeric_ranges[0].max, Some(4.5));
        assert_eq!(result.other(), 2);
    }

    #[test]
    fn test_date_range_facet_result_aliases() {
        let raw = json!({
            "name": "updated",
            "field": "updated",
            "total": 3,
            "date_ranges": [
                {"name": "old", "count": 1, "end": "2020-01-01T00:00:00Z"},
                {"name": "new", "count": 2, "start_time": "2020-01-01T00:00:00Z"}
            ]
        });
        let result =
            FacetResult::decode("updated", &raw, &FacetSpec::date_range("updated")).unwrap();
        let facet = result.as_date_range().unwrap();
        assert_eq!(facet.date_ranges[0].end.as_deref(), Some("2020-01-01T00:00:00Z"));
        assert_eq!(facet.date_ranges[1].start.as_deref(), Some("2020-01-01T00:00:00Z"));
        assert!(result.as_term().is_none());
    }

    #[test]
    fn test_facet_kind_comes_from_request() {
        // The same payload decodes differently depending on what was requested
        let raw = json!({"field": "color", "total": 1, "terms": [{"term": "red", "count": 1}]});
        let result = FacetResult::decode("f", &raw, &FacetSpec::date_range("color")).unwrap();
        assert_eq!(result.kind(), FacetKind::DateRange);
        assert!(result.as_date_range().unwrap().date_ranges.is_empty());
    }

    #[test]
    fn test_malformed_facet() {
        let raw = json!({"field": "color"});
        let err = FacetResult::decode("colors", &raw, &FacetSpec::term("color")).unwrap_err();
        assert!(matches!(err, FtsError::MalformedResponse(ref msg) if msg.contains("colors")));
    }
}
