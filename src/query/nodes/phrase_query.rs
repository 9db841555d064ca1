//! Phrase query - matches an exact sequence of already-analyzed terms
//!
//! Unlike `match_phrase`, the terms are not analyzed by the server, so they
//! must be given exactly as they appear in the index.
//!
//! # Example
//!
//! ```rust
//! use ftsquery::query::nodes::PhraseQuery;
//!
//! let query = PhraseQuery::new(["rust", "programming"]).with_field("content");
//! assert_eq!(query.terms, vec!["rust", "programming"]);
//! ```

use crate::query::types::{push_unique, QueryBody};
use crate::Result;
use serde_json::Value;

/// Query that matches an exact phrase of terms
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PhraseQuery {
    /// Terms of the phrase, de-duplicated in first-seen order
    pub terms: Vec<String>,
    /// Boost factor for scoring
    pub boost: Option<f64>,
    /// Field to search in
    pub field: Option<String>,
}

impl PhraseQuery {
    /// Create a new phrase query
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut query = Self::default();
        push_unique(&mut query.terms, terms);
        query
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
        let mut body = QueryBody::with("terms", self.terms.clone());
        body.common(self.boost, self.field.as_ref());
        body.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_phrase_query_dedup() {
        let query = PhraseQuery::new(["a", "a", "b"]);
        assert_eq!(query.encode().unwrap(), json!({"terms": ["a", "b"]}));
    }

    #[test]
    fn test_phrase_query_field() {
        let query = PhraseQuery::new(["search", "engine"]).with_field("title").with_boost(2.0);
        assert_eq!(
            query.encode().unwrap(),
            json!({"terms": ["search", "engine"], "field": "title", "boost": 2.0})
        );
    }
}
