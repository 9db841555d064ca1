//! Boolean query - combines `must`, `must_not` and `should` clauses
//!
//! # Example
//!
//! ```json
//! {
//!   "must": { "conjuncts": [ { "match": "rust", "field": "content" } ] },
//!   "must_not": { "disjuncts": [ { "term": "draft", "field": "status" } ] },
//!   "should": { "disjuncts": [ { "term": "tutorial", "field": "tags" } ], "min": 1 }
//! }
//! ```

use crate::error::FtsError;
use crate::query::ast::QueryNode;
use crate::query::nodes::{ConjunctionQuery, DisjunctionQuery};
use crate::query::types::QueryBody;
use crate::Result;
use serde_json::Value;

/// Boolean query combining three clause groups
///
/// - `must`: all children must match (conjunction)
/// - `must_not`: no child may match (disjunction)
/// - `should`: at least `should_min` children should match (disjunction)
///
/// Empty clause groups are left out of the encoded query; at least one group
/// must be non-empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BooleanQuery {
    /// Clauses that must match
    pub must: ConjunctionQuery,
    /// Clauses that must not match
    pub must_not: DisjunctionQuery,
    /// Clauses that should match
    pub should: DisjunctionQuery,
    /// Boost factor for scoring
    pub boost: Option<f64>,
}

impl BooleanQuery {
    /// Create a new empty boolean query
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a must clause
    pub fn must(mut self, query: impl Into<QueryNode>) -> Self {
        self.must.conjuncts.insert(query);
        self
    }

    /// Add a must_not clause
    pub fn must_not(mut self, query: impl Into<QueryNode>) -> Self {
        self.must_not.disjuncts.insert(query);
        self
    }

    /// Add a should clause
    pub fn should(mut self, query: impl Into<QueryNode>) -> Self {
        self.should.disjuncts.insert(query);
        self
    }

    /// Set the minimum number of should clauses that must match
    pub fn should_min(mut self, min: usize) -> Self {
        self.should.min = Some(min);
        self
    }

    /// Set boost factor
    pub fn with_boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }

    /// Check if all clause groups are empty
    pub fn is_empty(&self) -> bool {
        self.must.is_empty() && self.must_not.is_empty() && self.should.is_empty()
    }

    /// Get total number of clauses
    pub fn clause_count(&self) -> usize {
        self.must.len() + self.must_not.len() + self.should.len()
    }

    pub fn encode(&self) -> Result<Value> {
        if self.is_empty() {
            return Err(FtsError::EmptyBooleanQuery);
        }
        let mut body = QueryBody::new();
        if !self.must.is_empty() {
            body.insert("must", self.must.encode()?);
        }
        if !self.must_not.is_empty() {
            body.insert("must_not", self.must_not.encode()?);
        }
        if !self.should.is_empty() {
            body.insert("should", self.should.encode()?);
        }
        body.boost(self.boost);
        body.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::nodes::{MatchQuery, TermQuery};
    use serde_json::json;

    #[test]
    fn test_bool_query_creation() {
        let query = BooleanQuery::new()
            .must(MatchQuery::new("rust").with_field("content"))
            .should(TermQuery::new("tutorial").with_field("tags"))
            .must_not(TermQuery::new("draft").with_field("status"));

        assert_eq!(query.must.len(), 1);
        assert_eq!(query.should.len(), 1);
        assert_eq!(query.must_not.len(), 1);
        assert_eq!(query.clause_count(), 3);
    }

    #[test]
    fn test_bool_query_empty() {
        let err = BooleanQuery::new().with_boost(1.0).encode().unwrap_err();
        assert!(matches!(err, FtsError::EmptyBooleanQuery));
    }

    #[test]
    fn test_bool_query_single_must() {
        let query = BooleanQuery::new().must(TermQuery::new("rust"));
        assert_eq!(
            query.encode().unwrap(),
            json!({"must": {"conjuncts": [{"term": "rust"}]}})
        );
    }

    #[test]
    fn test_bool_query_should_min() {
        let query = BooleanQuery::new()
            .should(TermQuery::new("rust"))
            .should(TermQuery::new("cargo"))
            .should_min(1);
        assert_eq!(
            query.encode().unwrap(),
            json!({"should": {"disjuncts": [{"term": "rust"}, {"term": "cargo"}], "min": 1}})
        );

        let too_strict = BooleanQuery::new().should(TermQuery::new("rust")).should_min(2);
        assert!(matches!(
            too_strict.encode().unwrap_err(),
            FtsError::InvalidMinimumMatch { min: 2, available: 1 }
        ));
    }

    #[test]
    fn test_bool_query_dedups_clauses() {
        let query = BooleanQuery::new()
            .must_not(TermQuery::new("draft"))
            .must_not(TermQuery::new("draft"));
        assert_eq!(query.must_not.len(), 1);
    }

    #[test]
    fn test_bool_query_should_min_without_should_clauses() {
        let query = BooleanQuery::new().must(TermQuery::new("rust")).should_min(5);
        assert_eq!(
            query.encode().unwrap(),
            json!({"must": {"conjuncts": [{"term": "rust"}]}})
        );
    }
}
