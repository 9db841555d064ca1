//! Range queries - match field values within numeric, term or date bounds
//!
//! All three share the same shape: an optional lower bound and an optional
//! upper bound, each with its own inclusive flag. At least one bound must be
//! present by the time the query is encoded. When an inclusive flag is left
//! unset the server default applies (lower inclusive, upper exclusive).

use crate::error::FtsError;
use crate::query::types::{DateTimeBound, QueryBody, RangeBound, RangeValue};
use crate::Result;
use serde_json::Value;

/// Query that matches numeric field values within a range
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NumericRangeQuery {
    /// Lower bound
    pub min: Option<RangeBound<RangeValue>>,
    /// Upper bound
    pub max: Option<RangeBound<RangeValue>>,
    /// Boost factor for scoring
    pub boost: Option<f64>,
    /// Field to search in
    pub field: Option<String>,
}

impl NumericRangeQuery {
    /// Create a new, unbounded numeric range query
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lower bound
    pub fn with_min(mut self, min: impl Into<RangeValue>, inclusive: Option<bool>) -> Self {
        self.min = Some(RangeBound::new(min.into(), inclusive));
        self
    }

    /// Set the upper bound
    pub fn with_max(mut self, max: impl Into<RangeValue>, inclusive: Option<bool>) -> Self {
        self.max = Some(RangeBound::new(max.into(), inclusive));
        self
    }

    /// Set the boost factor
    pub fn with_boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }

    /// Set the field to search in
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn encode(&self) -> Result<Value> {
        if self.min.is_none() && self.max.is_none() {
            return Err(FtsError::MissingRangeBound {
                query: "numeric_range",
            });
        }
        let mut body = QueryBody::new();
        body.common(self.boost, self.field.as_ref())
            .bound("min", "inclusive_min", self.min.as_ref())
            .bound("max", "inclusive_max", self.max.as_ref());
        body.finish()
    }
}

/// Query that matches terms within a lexical range
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TermRangeQuery {
    /// Lower bound
    pub min: Option<RangeBound<String>>,
    /// Upper bound
    pub max: Option<RangeBound<String>>,
    /// Boost factor for scoring
    pub boost: Option<f64>,
    /// Field to search in
    pub field: Option<String>,
}

impl TermRangeQuery {
    /// Create a new, unbounded term range query
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lower bound
    pub fn with_min(mut self, min: impl Into<String>, inclusive: Option<bool>) -> Self {
        self.min = Some(RangeBound::new(min.into(), inclusive));
        self
    }

    /// Set the upper bound
    pub fn with_max(mut self, max: impl Into<String>, inclusive: Option<bool>) -> Self {
        self.max = Some(RangeBound::new(max.into(), inclusive));
        self
    }

    /// Set the boost factor
    pub fn with_boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }

    /// Set the field to search in
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn encode(&self) -> Result<Value> {
        if self.min.is_none() && self.max.is_none() {
            return Err(FtsError::MissingRangeBound {
                query: "term_range",
            });
        }
        let mut body = QueryBody::new();
        body.common(self.boost, self.field.as_ref())
            .bound("min", "inclusive_min", self.min.as_ref())
            .bound("max", "inclusive_max", self.max.as_ref());
        body.finish()
    }
}

/// Query that matches date values within a range
///
/// Bounds given as calendar instants are rendered as RFC 3339 with an explicit
/// offset; string bounds are passed through for the server's date parser.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DateRangeQuery {
    /// Lower bound
    pub start: Option<RangeBound<DateTimeBound>>,
    /// Upper bound
    pub end: Option<RangeBound<DateTimeBound>>,
    /// Name of a custom date/time parser configured on the index
    pub datetime_parser: Option<String>,
    /// Boost factor for scoring
    pub boost: Option<f64>,
    /// Field to search in
    pub field: Option<String>,
}

impl DateRangeQuery {
    /// Create a new, unbounded date range query
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lower bound
    pub fn with_start(
        mut self,
        start: impl Into<DateTimeBound>,
        inclusive: Option<bool>,
    ) -> Self {
        self.start = Some(RangeBound::new(start.into(), inclusive));
        self
    }

    /// Set the upper bound
    pub fn with_end(mut self, end: impl Into<DateTimeBound>, inclusive: Option<bool>) -> Self {
        self.end = Some(RangeBound::new(end.into(), inclusive));
        self
    }

    /// Set the date/time parser used by the server for string bounds
    pub fn with_datetime_parser(mut self, parser: impl Into<String>) -> Self {
        self.datetime_parser = Some(parser.into());
        self
    }

    /// Set the boost factor
    pub fn with_boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }

    /// Set the field to search in
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn encode(&self) -> Result<Value> {
        if self.start.is_none() && self.end.is_none() {
            return Err(FtsError::MissingRangeBound {
                query: "date_range",
            });
        }
        let mut body = QueryBody::new();
        body.common(self.boost, self.field.as_ref())
            .insert_opt("datetime_parser", self.datetime_parser.clone())
            .bound("start", "inclusive_start", self.start.as_ref())
            .bound("end", "inclusive_end", self.end.as_ref());
        body.finish()
    }
}
