//! Compound queries - conjunction (AND) and disjunction (OR) of child queries
//!
//! Children are held in a [`QuerySet`], so adding a query that is structurally
//! equal to an existing child keeps a single copy at its first position.
//! Children that differ as builders but encode to the same JSON are collapsed
//! when the query is encoded. Emptiness and the disjunction minimum are
//! checked at that point too, against the distinct encoded children.

use crate::error::FtsError;
use crate::query::ast::QueryNode;
use crate::query::types::{QueryBody, QuerySet};
use crate::Result;
use serde_json::Value;

/// Query that requires all of its children to match
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConjunctionQuery {
    /// Child queries
    pub conjuncts: QuerySet,
    /// Boost factor for scoring
    pub boost: Option<f64>,
}

impl ConjunctionQuery {
    /// Create a conjunction of the given queries
    pub fn new<I, Q>(queries: I) -> Self
    where
        I: IntoIterator<Item = Q>,
        Q: Into<QueryNode>,
    {
        Self {
            conjuncts: queries.into_iter().collect(),
            boost: None,
        }
    }

    /// Add more queries to the conjunction
    pub fn and_also<I, Q>(mut self, queries: I) -> Self
    where
        I: IntoIterator<Item = Q>,
        Q: Into<QueryNode>,
    {
        self.conjuncts.merge(queries);
        self
    }

    /// Set the boost factor
    pub fn with_boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }

    /// Check if the conjunction has no children yet
    pub fn is_empty(&self) -> bool {
        self.conjuncts.is_empty()
    }

    /// Get the number of children
    pub fn len(&self) -> usize {
        self.conjuncts.len()
    }

    pub fn encode(&self) -> Result<Value> {
        if self.conjuncts.is_empty() {
            return Err(FtsError::EmptyCompoundQuery {
                query: "conjunction",
            });
        }
        let conjuncts = encode_children(&self.conjuncts)?;
        let mut body = QueryBody::with("conjuncts", conjuncts);
        body.boost(self.boost);
        body.finish()
    }
}

/// Query that requires at least `min` (default one) of its children to match
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisjunctionQuery {
    /// Child queries
    pub disjuncts: QuerySet,
    /// Minimum number of children that must match
    pub min: Option<usize>,
    /// Boost factor for scoring
    pub boost: Option<f64>,
}

impl DisjunctionQuery {
    /// Create a disjunction of the given queries
    pub fn new<I, Q>(queries: I) -> Self
    where
        I: IntoIterator<Item = Q>,
        Q: Into<QueryNode>,
    {
        Self {
            disjuncts: queries.into_iter().collect(),
            min: None,
            boost: None,
        }
    }

    /// Add more queries to the disjunction
    pub fn or_else<I, Q>(mut self, queries: I) -> Self
    where
        I: IntoIterator<Item = Q>,
        Q: Into<QueryNode>,
    {
        self.disjuncts.merge(queries);
        self
    }

    /// Set the minimum number of children that must match
    pub fn with_min(mut self, min: usize) -> Self {
        self.min = Some(min);
        self
    }

    /// Set the boost factor
    pub fn with_boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }

    /// Check if the disjunction has no children yet
    pub fn is_empty(&self) -> bool {
        self.disjuncts.is_empty()
    }

    /// Get the number of children
    pub fn len(&self) -> usize {
        self.disjuncts.len()
    }

    pub fn encode(&self) -> Result<Value> {
        if self.disjuncts.is_empty() {
            return Err(FtsError::EmptyCompoundQuery {
                query: "disjunction",
            });
        }
        let disjuncts = encode_children(&self.disjuncts)?;
        if let Some(min) = self.min {
            if min > disjuncts.len() {
                return Err(FtsError::InvalidMinimumMatch {
                    min,
                    available: disjuncts.len(),
                });
            }
        }
        let mut body = QueryBody::with("disjuncts", disjuncts);
        body.insert_opt("min", self.min).boost(self.boost);
        body.finish()
    }
}

/// Encode children in order, dropping any whose JSON repeats an earlier child
fn encode_children(children: &QuerySet) -> Result<Vec<Value>> {
    let mut encoded: Vec<Value> = Vec::with_capacity(children.len());
    for child in children {
        let value = child.encode()?;
        if !encoded.contains(&value) {
            encoded.push(value);
        }
    }
    Ok(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::nodes::{DateRangeQuery, MatchQuery, NumericRangeQuery, TermQuery};
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn test_conjunction_empty() {
        let err = ConjunctionQuery::default().encode().unwrap_err();
        assert!(matches!(
            err,
            FtsError::EmptyCompoundQuery {
                query: "conjunction"
            }
        ));
    }

    #[test]
    fn test_conjunction_and_also_dedup() {
        let q1 = TermQuery::new("rust");
        let query = ConjunctionQuery::new([q1.clone()]).and_also([q1]);
        assert_eq!(query.len(), 1);
        assert_eq!(query.encode().unwrap(), json!({"conjuncts": [{"term": "rust"}]}));
    }

    #[test]
    fn test_conjunction_preserves_order() {
        let query = ConjunctionQuery::new([TermQuery::new("b"), TermQuery::new("a")])
            .and_also([TermQuery::new("c"), TermQuery::new("b")])
            .with_boost(2.0);
        assert_eq!(
            query.encode().unwrap(),
            json!({
                "conjuncts": [{"term": "b"}, {"term": "a"}, {"term": "c"}],
                "boost": 2.0
            })
        );
    }

    #[test]
    fn test_conjunction_propagates_child_errors() {
        let query = ConjunctionQuery::new([QueryNode::from(NumericRangeQuery::new())]);
        let err = query.encode().unwrap_err();
        assert!(matches!(err, FtsError::MissingRangeBound { .. }));
    }

    #[test]
    fn test_disjunction_min_exceeds_children() {
        let query = DisjunctionQuery::new([TermQuery::new("a"), TermQuery::new("b")]).with_min(3);
        let err = query.encode().unwrap_err();
        assert!(matches!(
            err,
            FtsError::InvalidMinimumMatch {
                min: 3,
                available: 2
            }
        ));
    }

    #[test]
    fn test_disjunction_min_equal_children() {
        let query = DisjunctionQuery::new([QueryNode::from(TermQuery::new("a"))])
            .or_else([QueryNode::from(MatchQuery::new("b"))])
            .with_min(2);
        assert_eq!(
            query.encode().unwrap(),
            json!({"disjuncts": [{"term": "a"}, {"match": "b"}], "min": 2})
        );
    }

    #[test]
    fn test_disjunction_empty_checked_before_min() {
        let err = DisjunctionQuery::default().with_min(1).encode().unwrap_err();
        assert!(matches!(
            err,
            FtsError::EmptyCompoundQuery {
                query: "disjunction"
            }
        ));
    }

    #[test]
    fn test_conjunction_collapses_equal_encodings() {
        let query = ConjunctionQuery::new([
            MatchQuery::new("x"),
            MatchQuery::new("x").with_prefix_length(3),
        ]);
        assert_eq!(query.len(), 2);
        assert_eq!(query.encode().unwrap(), json!({"conjuncts": [{"match": "x"}]}));
    }

    #[test]
    fn test_conjunction_collapses_equal_date_bounds() {
        let instant = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let query = ConjunctionQuery::new([
            DateRangeQuery::new().with_start(instant, None),
            DateRangeQuery::new().with_start("2020-01-01T00:00:00+00:00", None),
        ]);
        assert_eq!(
            query.encode().unwrap(),
            json!({"conjuncts": [{"start": "2020-01-01T00:00:00+00:00"}]})
        );
    }

    #[test]
    fn test_disjunction_min_counts_distinct_encodings() {
        let query = DisjunctionQuery::new([
            TermQuery::new("a"),
            TermQuery::new("a").with_prefix_length(1),
        ])
        .with_min(2);
        let err = query.encode().unwrap_err();
        assert!(matches!(
            err,
            FtsError::InvalidMinimumMatch {
                min: 2,
                available: 1
            }
        ));
    }
}
