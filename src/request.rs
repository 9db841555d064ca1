//! Assembly of the complete search request body

use crate::config::SearchOptions;
use crate::query::types::QueryBody;
use crate::query::QueryNode;
use crate::Result;
use serde_json::Value;

/// A search against one index, ready to be encoded
#[derive(Clone, Copy, Debug)]
pub struct SearchRequest<'a> {
    index_name: &'a str,
    query: &'a QueryNode,
    options: &'a SearchOptions,
}

impl<'a> SearchRequest<'a> {
    pub fn new(index_name: &'a str, query: &'a QueryNode, options: &'a SearchOptions) -> Self {
        Self {
            index_name,
            query,
            options,
        }
    }

    pub fn index_name(&self) -> &str {
        self.index_name
    }

    /// Encode the request body
    ///
    /// The index name is not part of the body; it addresses the request.
    pub fn to_json(&self) -> Result<Value> {
        let options = self.options;
        let mut body = QueryBody::with("query", self.query.encode()?);
        body.insert("explain", options.explain)
            .insert_opt("size", options.limit)
            .insert_opt("from", options.skip);

        if options.highlight_style.is_some() || !options.highlight_fields.is_empty() {
            let mut highlight = QueryBody::new();
            let style = options.highlight_style.map(serde_json::to_value).transpose()?;
            highlight.insert_opt("style", style);
            if !options.highlight_fields.is_empty() {
                highlight.insert("fields", options.highlight_fields.clone());
            }
            body.insert("highlight", highlight.finish()?);
        }
        if !options.fields.is_empty() {
            body.insert("fields", options.fields.clone());
        }
        if !options.sort.is_empty() {
            let sort = options
                .sort
                .iter()
                .map(|sort| sort.encode())
                .collect::<Result<Vec<_>>>()?;
            body.insert("sort", sort);
        }
        if !options.facets.is_empty() {
            body.insert("facets", options.facets.encode()?);
        }
        if options.disable_scoring {
            body.insert("score", "none");
        }
        if let Some(timeout) = options.timeout {
            let timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
            body.insert("ctl", QueryBody::with("timeout", timeout_ms).finish()?);
        }
        body.finish()
    }
}
