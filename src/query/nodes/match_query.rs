//! Match queries - analyzed full-text matching
//!
//! Both queries run the input through an analyzer before looking it up in the
//! index. `match` combines the resulting terms freely, `match_phrase` requires
//! them to appear as a phrase.

use crate::query::types::QueryBody;
use crate::Result;
use serde_json::Value;

/// Query that analyzes the input text and matches the resulting terms
#[derive(Clone, Debug, PartialEq)]
pub struct MatchQuery {
    /// Text to analyze and match
    pub text: String,
    /// Boost factor for scoring
    pub boost: Option<f64>,
    /// Field to search in (index default when absent)
    pub field: Option<String>,
    /// Analyzer to apply to the text (field default when absent)
    pub analyzer: Option<String>,
    /// Maximum edit distance for fuzzy matching
    pub fuzziness: Option<u32>,
    /// Number of leading characters that must match exactly when fuzzy
    pub prefix_length: Option<u32>,
}

impl MatchQuery {
    /// Create a new match query
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            boost: None,
            field: None,
            analyzer: None,
            fuzziness: None,
            prefix_length: None,
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

    /// Set the analyzer
    pub fn with_analyzer(mut self, analyzer: impl Into<String>) -> Self {
        self.analyzer = Some(analyzer.into());
        self
    }

    /// Set the fuzziness (maximum edit distance)
    pub fn with_fuzziness(mut self, fuzziness: u32) -> Self {
        self.fuzziness = Some(fuzziness);
        self
    }

    /// Set the exact-match prefix length; ignored unless fuzziness is also set
    pub fn with_prefix_length(mut self, prefix_length: u32) -> Self {
        self.prefix_length = Some(prefix_length);
        self
    }

    pub fn encode(&self) -> Result<Value> {
        let mut body = QueryBody::with("match", self.text.as_str());
        body.common(self.boost, self.field.as_ref())
            .insert_opt("analyzer", self.analyzer.clone())
            .fuzziness(self.fuzziness, self.prefix_length);
        body.finish()
    }
}

/// Query that analyzes the input text and matches the terms as a phrase
#[derive(Clone, Debug, PartialEq)]
pub struct MatchPhraseQuery {
    /// Phrase to analyze and match
    pub phrase: String,
    /// Boost factor for scoring
    pub boost: Option<f64>,
    /// Field to search in
    pub field: Option<String>,
    /// Analyzer to apply to the phrase
    pub analyzer: Option<String>,
}

impl MatchPhraseQuery {
    /// Create a new match phrase query
    pub fn new(phrase: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into(),
            boost: None,
            field: None,
            analyzer: None,
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

    /// Set the analyzer
    pub fn with_analyzer(mut self, analyzer: impl Into<String>) -> Self {
        self.analyzer = Some(analyzer.into());
        self
    }

    pub fn encode(&self) -> Result<Value> {
        let mut body = QueryBody::with("match_phrase", self.phrase.as_str());
        body.common(self.boost, self.field.as_ref())
            .insert_opt("analyzer", self.analyzer.clone());
        body.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FtsError;
    use serde_json::json;

    #[test]
    fn test_match_query_rejects_non_finite_boost() {
        let err = MatchQuery::new("x").with_boost(f64::NAN).encode().unwrap_err();
        assert!(matches!(err, FtsError::NonFiniteNumber { ref key } if key == "boost"));
        assert!(err.is_validation_error());
    }

    #[test]
    fn test_match_query_minimal() {
        let query = MatchQuery::new("rust programming");
        assert_eq!(query.encode().unwrap(), json!({"match": "rust programming"}));
    }

    #[test]
    fn test_match_query_builder() {
        let query = MatchQuery::new("rust")
            .with_field("content")
            .with_boost(2.0)
            .with_analyzer("standard")
            .with_fuzziness(1)
            .with_prefix_length(2);

        assert_eq!(
            query.encode().unwrap(),
            json!({
                "match": "rust",
                "field": "content",
                "boost": 2.0,
                "analyzer": "standard",
                "fuzziness": 1,
                "prefix_length": 2
            })
        );
    }

    #[test]
    fn test_match_query_prefix_length_requires_fuzziness() {
        let query = MatchQuery::new("rust").with_prefix_length(3);
        let encoded = query.encode().unwrap();
        assert!(encoded.get("prefix_length").is_none());
        assert!(encoded.get("fuzziness").is_none());
    }

    #[test]
    fn test_match_query_zero_fuzziness_is_set() {
        let encoded = MatchQuery::new("rust").with_fuzziness(0).encode().unwrap();
        assert_eq!(encoded["fuzziness"], json!(0));
    }

    #[test]
    fn test_match_phrase_query() {
        let query = MatchPhraseQuery::new("search engine")
            .with_field("title")
            .with_analyzer("en");
        assert_eq!(
            query.encode().unwrap(),
            json!({"match_phrase": "search engine", "field": "title", "analyzer": "en"})
        );
    }
}
