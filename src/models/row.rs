//! Search result rows

use crate::error::FtsError;
use crate::models::location::{SearchRowLocation, SearchRowLocations};
use crate::transcoder::Transcoder;
use crate::Result;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// A single search hit
#[derive(Clone, Debug)]
pub struct SearchRow {
    /// Name of the index partition that produced the hit
    pub index: String,
    /// Document ID
    pub id: String,
    /// Relevance score
    pub score: f64,
    /// Score explanation, present when requested with `explain`
    pub explanation: Option<Value>,
    /// Term locations of the hit
    pub locations: SearchRowLocations,
    /// Highlighted excerpts per field
    pub fragments: HashMap<String, Vec<String>>,
    raw_fields: Option<Vec<u8>>,
    transcoder: Arc<dyn Transcoder>,
}

/// Row as sent by the service
#[derive(Debug, Deserialize)]
pub(crate) struct RawRow {
    index: String,
    id: String,
    score: f64,
    #[serde(default)]
    locations: Option<Vec<SearchRowLocation>>,
    #[serde(default)]
    fragments: Option<HashMap<String, Vec<String>>>,
    #[serde(default)]
    fields: Option<Value>,
    #[serde(default)]
    explanation: Option<Value>,
}

impl SearchRow {
    pub(crate) fn decode(raw: RawRow, transcoder: Arc<dyn Transcoder>) -> Result<Self> {
        let explanation = match raw.explanation {
            Some(Value::String(text)) => Some(serde_json::from_str(&text).map_err(|e| {
                FtsError::malformed(format!("explanation of row '{}'", raw.id), e)
            })?),
            Some(Value::Null) | None => None,
            Some(value) => Some(value),
        };
        let raw_fields = match raw.fields {
            Some(Value::String(text)) => Some(text.into_bytes()),
            Some(Value::Null) | None => None,
            Some(value) => Some(serde_json::to_vec(&value)?),
        };

        Ok(Self {
            index: raw.index,
            id: raw.id,
            score: raw.score,
            explanation,
            locations: SearchRowLocations::new(raw.locations.unwrap_or_default()),
            fragments: raw.fragments.unwrap_or_default(),
            raw_fields,
            transcoder,
        })
    }

    /// Decode the stored fields of the hit with the configured transcoder
    ///
    /// Returns `Ok(None)` when no fields were requested or returned.
    pub fn fields(&self) -> Result<Option<Value>> {
        match &self.raw_fields {
            Some(bytes) => self.transcoder.decode(bytes).map(Some),
            None => Ok(None),
        }
    }

    /// Stored fields exactly as received
    pub fn raw_fields(&self) -> Option<&[u8]> {
        self.raw_fields.as_deref()
    }
}
