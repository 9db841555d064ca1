//! Decoding of stored field payloads returned with search rows

use crate::error::FtsError;
use crate::Result;
use serde_json::Value;
use std::fmt::Debug;

/// Turns the raw `fields` payload of a search row into a structured value
pub trait Transcoder: Send + Sync + Debug {
    fn decode(&self, bytes: &[u8]) -> Result<Value>;
}

/// Transcoder for JSON payloads
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonTranscoder;

impl Transcoder for JsonTranscoder {
    fn decode(&self, bytes: &[u8]) -> Result<Value> {
        serde_json::from_slice(bytes).map_err(|e| FtsError::Transcoder(e.to_string()))
    }
}
