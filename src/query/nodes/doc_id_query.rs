//! Document ID query - restricts matches to a set of document IDs

use crate::query::types::{push_unique, QueryBody};
use crate::Result;
use serde_json::Value;

/// Query that matches only the listed documents
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocIdQuery {
    /// Document IDs, de-duplicated in first-seen order
    pub doc_ids: Vec<String>,
    /// Boost factor for scoring
    pub boost: Option<f64>,
    /// Field override
    pub field: Option<String>,
}

impl DocIdQuery {
    /// Create a new document ID query
    pub fn new<I, S>(doc_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::default().with_doc_ids(doc_ids)
    }

    /// Add more document IDs; IDs already present are skipped
    pub fn with_doc_ids<I, S>(mut self, doc_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        push_unique(&mut self.doc_ids, doc_ids);
        self
    }

    /// Set the boost factor
    pub fn with_boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }

    /// Set the field
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn encode(&self) -> Result<Value> {
        let mut body = QueryBody::with("doc_ids", self.doc_ids.clone());
        body.common(self.boost, self.field.as_ref());
        body.finish()
    }
}
