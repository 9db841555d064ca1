//! Term and prefix queries - exact, unanalyzed term lookups

use crate::query::types::QueryBody;
use crate::Result;
use serde_json::Value;

/// Query that matches an exact term, without analysis
///
/// Optional fuzziness turns it into an edit-distance lookup.
#[derive(Clone, Debug, PartialEq)]
pub struct TermQuery {
    /// Exact term to match
    pub term: String,
    /// Boost factor for scoring
    pub boost: Option<f64>,
    /// Field to search in
    pub field: Option<String>,
    /// Maximum edit distance
    pub fuzziness: Option<u32>,
    /// Exact-match prefix length when fuzzy
    pub prefix_length: Option<u32>,
}

impl TermQuery {
    /// Create a new term query
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            boost: None,
            field: None,
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

    /// Set the fuzziness
    pub fn with_fuzziness(mut self, fuzziness: u32) -> Self {
        self.fuzziness = Some(fuzziness);
        self
    }

    /// Set the prefix length; ignored unless fuzziness is also set
    pub fn with_prefix_length(mut self, prefix_length: u32) -> Self {
        self.prefix_length = Some(prefix_length);
        self
    }

    pub fn encode(&self) -> Result<Value> {
        let mut body = QueryBody::with("term", self.term.as_str());
        body.common(self.boost, self.field.as_ref())
            .fuzziness(self.fuzziness, self.prefix_length);
        body.finish()
    }
}

/// Query that matches terms starting with a prefix
#[derive(Clone, Debug, PartialEq)]
pub struct PrefixQuery {
    /// Prefix to match
    pub prefix: String,
    /// Boost factor for scoring
    pub boost: Option<f64>,
    /// Field to search in
    pub field: Option<String>,
}

impl PrefixQuery {
    /// Create a new prefix query
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
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
        let mut body = QueryBody::with("prefix", self.prefix.as_str());
        body.common(self.boost, self.field.as_ref());
        body.finish()
    }
}
