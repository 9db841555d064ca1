//! Match-all and match-none queries

use crate::query::types::QueryBody;
use crate::Result;
use serde_json::Value;

/// Query that matches every document in the index
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MatchAllQuery {
    /// Boost factor for scoring
    pub boost: Option<f64>,
}

impl MatchAllQuery {
    /// Create a new match all query
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the boost factor
    pub fn with_boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }

    pub fn encode(&self) -> Result<Value> {
        let mut body = QueryBody::with("match_all", Value::Null);
        body.boost(self.boost);
        body.finish()
    }
}

/// Query that matches no documents
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MatchNoneQuery {
    /// Boost factor for scoring
    pub boost: Option<f64>,
}

impl MatchNoneQuery {
    /// Create a new match none query
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the boost factor
    pub fn with_boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }

    pub fn encode(&self) -> Result<Value> {
        let mut body = QueryBody::with("match_none", Value::Null);
        body.boost(self.boost);
        body.finish()
    }
}
