//! Facet requests
//!
//! Facets are server-side aggregations requested alongside a query. The caller
//! names each facet; the response echoes results under the same names without
//! saying what kind of facet they are, so [`FacetSpecs`] is kept around to
//! decode the response (see [`crate::models::FacetResult`]).

use crate::error::FtsError;
use crate::query::types::DateTimeBound;
use crate::Result;
use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Kind tag shared by facet requests and facet results
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FacetKind {
    Term,
    NumericRange,
    DateRange,
}

impl FacetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FacetKind::Term => "term_facet",
            FacetKind::NumericRange => "numeric_range_facet",
            FacetKind::DateRange => "date_range_facet",
        }
    }
}

impl std::fmt::Display for FacetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregation directive for a single facet
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FacetSpec {
    /// Most frequent terms of a field
    Term(TermFacetSpec),
    /// Document counts per numeric range
    NumericRange(NumericRangeFacetSpec),
    /// Document counts per date range
    DateRange(DateRangeFacetSpec),
}

impl FacetSpec {
    pub fn term(field: impl Into<String>) -> Self {
        FacetSpec::Term(TermFacetSpec::new(field))
    }

    pub fn numeric_range(field: impl Into<String>) -> Self {
        FacetSpec::NumericRange(NumericRangeFacetSpec::new(field))
    }

    pub fn date_range(field: impl Into<String>) -> Self {
        FacetSpec::DateRange(DateRangeFacetSpec::new(field))
    }

    /// Get the kind tag used to decode the matching result
    pub fn kind(&self) -> FacetKind {
        match self {
            FacetSpec::Term(_) => FacetKind::Term,
            FacetSpec::NumericRange(_) => FacetKind::NumericRange,
            FacetSpec::DateRange(_) => FacetKind::DateRange,
        }
    }

    pub fn field(&self) -> &str {
        match self {
            FacetSpec::Term(facet) => &facet.field,
            FacetSpec::NumericRange(facet) => &facet.field,
            FacetSpec::DateRange(facet) => &facet.field,
        }
    }

    pub fn encode(&self) -> Result<Value> {
        if let FacetSpec::NumericRange(facet) = self {
            let non_finite = facet.numeric_ranges.iter().find(|range| {
                !range.min.map_or(true, f64::is_finite) || !range.max.map_or(true, f64::is_finite)
            });
            if let Some(range) = non_finite {
                return Err(FtsError::NonFiniteNumber {
                    key: format!("numeric_ranges.{}", range.name),
                });
            }
        }
        Ok(serde_json::to_value(self)?)
    }
}

impl From<TermFacetSpec> for FacetSpec {
    fn from(facet: TermFacetSpec) -> Self {
        FacetSpec::Term(facet)
    }
}

impl From<NumericRangeFacetSpec> for FacetSpec {
    fn from(facet: NumericRangeFacetSpec) -> Self {
        FacetSpec::NumericRange(facet)
    }
}

impl From<DateRangeFacetSpec> for FacetSpec {
    fn from(facet: DateRangeFacetSpec) -> Self {
        FacetSpec::DateRange(facet)
    }
}

/// Term facet: the most frequent terms of a field
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TermFacetSpec {
    pub field: String,
    /// Maximum number of terms to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

impl TermFacetSpec {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            size: None,
        }
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }
}

/// A named numeric bucket; an absent bound leaves that side open
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NumericRange {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

/// Numeric range facet: document counts for named numeric buckets
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NumericRangeFacetSpec {
    pub field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    pub numeric_ranges: Vec<NumericRange>,
}

impl NumericRangeFacetSpec {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            size: None,
            numeric_ranges: Vec::new(),
        }
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Add a named bucket
    pub fn add(mut self, name: impl Into<String>, min: Option<f64>, max: Option<f64>) -> Self {
        self.numeric_ranges.push(NumericRange {
            name: name.into(),
            min,
            max,
        });
        self
    }
}

/// A named date bucket; an absent bound leaves that side open
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DateRange {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTimeBound>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTimeBound>,
}

/// Date range facet: document counts for named date buckets
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DateRangeFacetSpec {
    pub field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    pub date_ranges: Vec<DateRange>,
}

impl DateRangeFacetSpec {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            size: None,
            date_ranges: Vec::new(),
        }
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Add a named bucket; instants are rendered as RFC 3339 like date range queries
    pub fn add(
        mut self,
        name: impl Into<String>,
        start: Option<DateTimeBound>,
        end: Option<DateTimeBound>,
    ) -> Self {
        self.date_ranges.push(DateRange {
            name: name.into(),
            start,
            end,
        });
        self
    }
}

/// Named facet requests, in insertion order
///
/// Order only matters for display; results are matched back by name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FacetSpecs {
    entries: IndexMap<String, FacetSpec>,
}

impl FacetSpecs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a facet, returning the previous facet registered under the same name
    ///
    /// A replaced facet keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, facet: impl Into<FacetSpec>) -> Option<FacetSpec> {
        self.entries.insert(name.into(), facet.into())
    }

    /// Builder form of [`FacetSpecs::insert`]
    pub fn with(mut self, name: impl Into<String>, facet: impl Into<FacetSpec>) -> Self {
        self.insert(name, facet);
        self
    }

    pub fn get(&self, name: &str) -> Option<&FacetSpec> {
        self.entries.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FacetSpec)> {
        self.entries.iter().map(|(name, facet)| (name.as_str(), facet))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn encode(&self) -> Result<Value> {
        let mut encoded = Map::with_capacity(self.entries.len());
        for (name, facet) in &self.entries {
            encoded.insert(name.clone(), facet.encode()?);
        }
        Ok(Value::Object(encoded))
    }
}

impl Serialize for FacetSpecs {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, facet) in &self.entries {
            map.serialize_entry(name, facet)?;
        }
        map.end()
    }
}

impl<N: Into<String>, F: Into<FacetSpec>> FromIterator<(N, F)> for FacetSpecs {
    fn from_iter<I: IntoIterator<Item = (N, F)>>(iter: I) -> Self {
        let mut facets = FacetSpecs::new();
        for (name, facet) in iter {
            facets.insert(name, facet);
        }
        facets
    }
}
