//! Query string query - human-written query syntax parsed by the server

use crate::query::types::QueryBody;
use crate::Result;
use serde_json::Value;

/// Query expressed in the service's query string syntax, e.g. `+title:rust -tags:draft`
///
/// The string is sent verbatim; it is not parsed client-side.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryStringQuery {
    pub query: String,
    pub boost: Option<f64>,
}

impl QueryStringQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            boost: None,
        }
    }

    pub fn with_boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }

    pub fn encode(&self) -> Result<Value> {
        let mut body = QueryBody::with("query", self.query.as_str());
        body.boost(self.boost);
        body.finish()
    }
}
