//! Pattern queries - wildcard and regular expression term matching

use crate::query::types::QueryBody;
use crate::Result;
use serde_json::Value;

/// Query that matches terms against a wildcard pattern
///
/// Supports `*` (any sequence) and `?` (any single character).
#[derive(Clone, Debug, PartialEq)]
pub struct WildcardQuery {
    /// Wildcard pattern
    pub pattern: String,
    /// Boost factor for scoring
    pub boost: Option<f64>,
    /// Field to search in
    pub field: Option<String>,
}

impl WildcardQuery {
    /// Create a new wildcard query
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            boost: None,
            field: None,
        }
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
        let mut body = QueryBody::with("wildcard", self.pattern.as_str());
        body.common(self.boost, self.field.as_ref());
        body.finish()
    }
}

/// Query that matches terms against a regular expression
#[derive(Clone, Debug, PartialEq)]
pub struct RegexpQuery {
    /// Regular expression, evaluated by the server
    pub regexp: String,
    /// Boost factor for scoring
    pub boost: Option<f64>,
    /// Field to search in
    pub field: Option<String>,
}

impl RegexpQuery {
    /// Create a new regexp query
    pub fn new(regexp: impl Into<String>) -> Self {
        Self {
            regexp: regexp.into(),
            boost: None,
            field: None,
        }
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
        let mut body = QueryBody::with("regexp", self.regexp.as_str());
        body.common(self.boost, self.field.as_ref());
        body.finish()
    }
}
