use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::facet::{FacetSpec, FacetSpecs};
use crate::sort::SortSpec;
use crate::transcoder::{JsonTranscoder, Transcoder};

/// Markup used for highlighted fragments
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightStyle {
    Html,
    Ansi,
}

/// Per-request search options
#[derive(Clone, Debug)]
pub struct SearchOptions {
    /// Server-side timeout
    pub timeout: Option<Duration>,
    /// Maximum number of rows to return
    pub limit: Option<u32>,
    /// Number of rows to skip
    pub skip: Option<u32>,
    /// Return score explanations with each row
    pub explain: bool,
    /// Skip scoring; rows come back with a score of zero
    pub disable_scoring: bool,
    pub highlight_style: Option<HighlightStyle>,
    /// Fields to highlight; all matched fields when empty
    pub highlight_fields: Vec<String>,
    /// Stored fields to return with each row
    pub fields: Vec<String>,
    pub sort: Vec<SortSpec>,
    /// Named facets; kept to decode the facet results
    pub facets: FacetSpecs,
    /// Decoder for the stored fields of each row
    pub transcoder: Arc<dyn Transcoder>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            timeout: None,
            limit: None,
            skip: None,
            explain: false,
            disable_scoring: false,
            highlight_style: None,
            highlight_fields: Vec::new(),
            fields: Vec::new(),
            sort: Vec::new(),
            facets: FacetSpecs::new(),
            transcoder: Arc::new(JsonTranscoder),
        }
    }
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_skip(mut self, skip: u32) -> Self {
        self.skip = Some(skip);
        self
    }

    pub fn with_explain(mut self, explain: bool) -> Self {
        self.explain = explain;
        self
    }

    pub fn with_disable_scoring(mut self, disable_scoring: bool) -> Self {
        self.disable_scoring = disable_scoring;
        self
    }

    /// Enable highlighting with the given style, restricted to `fields` when non-empty
    pub fn with_highlight<I, S>(mut self, style: HighlightStyle, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.highlight_style = Some(style);
        self.highlight_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_sort(mut self, sort: impl Into<SortSpec>) -> Self {
        self.sort.push(sort.into());
        self
    }

    /// Replace all facet requests
    pub fn with_facets(mut self, facets: FacetSpecs) -> Self {
        self.facets = facets;
        self
    }

    /// Add a single named facet request
    pub fn with_facet(mut self, name: impl Into<String>, facet: impl Into<FacetSpec>) -> Self {
        self.facets.insert(name, facet);
        self
    }

    pub fn with_transcoder(mut self, transcoder: Arc<dyn Transcoder>) -> Self {
        self.transcoder = transcoder;
        self
    }
}
