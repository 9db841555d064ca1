//! Decoding of complete search responses

use crate::config::SearchOptions;
use crate::error::FtsError;
use crate::models::facet_result::FacetResult;
use crate::models::metadata::SearchMetaData;
use crate::models::row::{RawRow, SearchRow};
use crate::Result;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Decoded result of a search request
#[derive(Clone, Debug)]
pub struct SearchResult {
    pub rows: Vec<SearchRow>,
    /// Facet results by the names used in the request
    pub facets: HashMap<String, FacetResult>,
    pub meta_data: SearchMetaData,
}

/// Response as sent by the service
#[derive(Debug, Deserialize)]
struct RawResponse {
    rows: Vec<RawRow>,
    #[serde(default)]
    facets: Option<Map<String, Value>>,
    meta_data: SearchMetaData,
}

impl SearchResult {
    /// Decode a response for a request built with `options`
    ///
    /// Facets are resolved through `options.facets`; a facet key the request
    /// did not ask for is skipped rather than treated as an error.
    pub fn decode(response: &Value, options: &SearchOptions) -> Result<Self> {
        let raw = RawResponse::deserialize(response)
            .map_err(|e| FtsError::malformed("search response", e))?;

        let rows = raw
            .rows
            .into_iter()
            .map(|row| SearchRow::decode(row, options.transcoder.clone()))
            .collect::<Result<Vec<_>>>()?;

        let mut facets = HashMap::new();
        for (key, value) in raw.facets.unwrap_or_default() {
            let Some(spec) = options.facets.get(&key) else {
                debug!(facet = %key, "ignoring facet result that was not requested");
                continue;
            };
            let facet = FacetResult::decode(&key, &value, spec)?;
            trace!(facet = %key, kind = %facet.kind(), "decoded facet result");
            facets.insert(key, facet);
        }

        Ok(Self {
            rows,
            facets,
            meta_data: raw.meta_data,
        })
    }

    pub fn facet(&self, name: &str) -> Option<&FacetResult> {
        self.facets.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facet::{FacetSpec, FacetSpecs};
    use serde_json::json;

    fn metrics() -> Value {
        json!({
            "metrics": {
                "took": 1,
                "total_rows": 0,
                "max_score": 0.0,
                "success_partition_count": 1,
                "error_partition_count": 0
            }
        })
    }

    #[test]
    fn test_decode_empty_response() {
        let response = json!({"rows": [], "meta_data": metrics()});
        let result = SearchResult::decode(&response, &SearchOptions::default()).unwrap();
        assert!(result.rows.is_empty());
        assert!(result.facets.is_empty());
        assert_eq!(result.meta_data.metrics.total_partition_count(), 1);
    }

    #[test]
    fn test_decode_requires_rows_and_meta_data() {
        let err = SearchResult::decode(&json!({"rows": []}), &SearchOptions::default()).unwrap_err();
        assert!(matches!(err, FtsError::MalformedResponse(_)));

        let err = SearchResult::decode(&json!({"meta_data": metrics()}), &SearchOptions::default())
            .unwrap_err();
        assert!(matches!(err, FtsError::MalformedResponse(_)));
    }

    #[test]
    fn test_decode_skips_unrequested_facets() {
        let options = SearchOptions::default()
            .with_facets(FacetSpecs::new().with("colors", FacetSpec::term("color")));
        let response = json!({
            "rows": [],
            "facets": {
                "colors": {"name": "colors", "field": "color", "total": 10, "terms": [{"term": "red", "count": 7}]},
                "sizes": {"name": "sizes", "field": "size", "total": 3}
            },
            "meta_data": metrics()
        });
        let result = SearchResult::decode(&response, &options).unwrap();
        assert_eq!(result.facets.len(), 1);
        assert_eq!(result.facet("colors").unwrap().total(), 10);
        assert!(result.facet("sizes").is_none());
    }

    #[test]
    fn test_decode_row_uses_options_transcoder() {
        let response = json!({
            "rows": [{"index": "i", "id": "d", "score": 1.0, "fields": {"a": 1}}],
            "meta_data": metrics()
        });
        let result = SearchResult::decode(&response, &SearchOptions::default()).unwrap();
        assert_eq!(result.rows[0].fields().unwrap(), Some(json!({"a": 1})));
    }
}
