//! Sort specifications for search results
//!
//! Each spec encodes to `{"by": ..., "desc": ...}` plus the kind-specific keys.
//! `desc` is always sent; the remaining optional keys are left out when unset.

use crate::error::FtsError;
use crate::query::types::GeoPoint;
use crate::Result;
use serde::Serialize;
use serde_json::Value;

/// Ordering directive for search results
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "by", rename_all = "snake_case")]
pub enum SortSpec {
    /// Order by relevance score
    Score { desc: bool },
    /// Order by document ID
    Id { desc: bool },
    /// Order by the value of a field
    Field(FieldSort),
    /// Order by distance from a point
    GeoDistance(GeoDistanceSort),
}

impl SortSpec {
    /// Sort by score, ascending
    pub fn score() -> Self {
        SortSpec::Score { desc: false }
    }

    /// Sort by document ID, ascending
    pub fn id() -> Self {
        SortSpec::Id { desc: false }
    }

    /// Sort by a field with default options
    pub fn field(field: impl Into<String>) -> Self {
        SortSpec::Field(FieldSort::new(field))
    }

    /// Sort by distance of a geo point field from the given location
    pub fn geo_distance(field: impl Into<String>, longitude: f64, latitude: f64) -> Self {
        SortSpec::GeoDistance(GeoDistanceSort::new(field, longitude, latitude))
    }

    /// Set the descending flag
    pub fn with_desc(mut self, descending: bool) -> Self {
        match &mut self {
            SortSpec::Score { desc } | SortSpec::Id { desc } => *desc = descending,
            SortSpec::Field(sort) => sort.desc = descending,
            SortSpec::GeoDistance(sort) => sort.desc = descending,
        }
        self
    }

    /// Check if the sort is descending
    pub fn is_descending(&self) -> bool {
        match self {
            SortSpec::Score { desc } | SortSpec::Id { desc } => *desc,
            SortSpec::Field(sort) => sort.desc,
            SortSpec::GeoDistance(sort) => sort.desc,
        }
    }

    pub fn encode(&self) -> Result<Value> {
        if let SortSpec::GeoDistance(sort) = self {
            if !sort.location.is_finite() {
                return Err(FtsError::NonFiniteNumber {
                    key: "location".to_string(),
                });
            }
        }
        Ok(serde_json::to_value(self)?)
    }
}

/// Parses the service's short sort syntax: `_score`, `_id` or a field name,
/// with a leading `-` for descending order
impl From<&str> for SortSpec {
    fn from(spec: &str) -> Self {
        let (descending, name) = match spec.strip_prefix('-') {
            Some(name) => (true, name),
            None => (false, spec),
        };
        let sort = match name {
            "_score" => SortSpec::score(),
            "_id" => SortSpec::id(),
            field => SortSpec::field(field),
        };
        sort.with_desc(descending)
    }
}

impl From<FieldSort> for SortSpec {
    fn from(sort: FieldSort) -> Self {
        SortSpec::Field(sort)
    }
}

impl From<GeoDistanceSort> for SortSpec {
    fn from(sort: GeoDistanceSort) -> Self {
        SortSpec::GeoDistance(sort)
    }
}

/// How field values are interpreted for sorting
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortType {
    Auto,
    String,
    Number,
    Date,
}

/// Where documents without the field are placed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMissing {
    First,
    Last,
}

/// Which value is used when a field holds several
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    Default,
    Min,
    Max,
}

/// Sort by the value of a field
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FieldSort {
    pub field: String,
    pub desc: bool,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub sort_type: Option<SortType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing: Option<SortMissing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<SortMode>,
}

impl FieldSort {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            desc: false,
            sort_type: None,
            missing: None,
            mode: None,
        }
    }

    pub fn with_desc(mut self, desc: bool) -> Self {
        self.desc = desc;
        self
    }

    pub fn with_type(mut self, sort_type: SortType) -> Self {
        self.sort_type = Some(sort_type);
        self
    }

    pub fn with_missing(mut self, missing: SortMissing) -> Self {
        self.missing = Some(missing);
        self
    }

    pub fn with_mode(mut self, mode: SortMode) -> Self {
        self.mode = Some(mode);
        self
    }
}

/// Unit for geo distance sorting
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    Meters,
    Miles,
    Centimeters,
    Millimeters,
    NauticalMiles,
    Kilometers,
    Feet,
    Yards,
    Inch,
}

/// Sort by distance from a location
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GeoDistanceSort {
    pub field: String,
    pub desc: bool,
    pub location: GeoPoint,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<DistanceUnit>,
}

impl GeoDistanceSort {
    pub fn new(field: impl Into<String>, longitude: f64, latitude: f64) -> Self {
        Self {
            field: field.into(),
            desc: false,
            location: GeoPoint::new(longitude, latitude),
            unit: None,
        }
    }

    pub fn with_desc(mut self, desc: bool) -> Self {
        self.desc = desc;
        self
    }

    pub fn with_unit(mut self, unit: DistanceUnit) -> Self {
        self.unit = Some(unit);
        self
    }
}
