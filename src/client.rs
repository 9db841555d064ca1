//! Entry point tying request encoding, transport and response decoding together

use crate::config::SearchOptions;
use crate::models::SearchResult;
use crate::query::QueryNode;
use crate::request::SearchRequest;
use crate::Result;
use serde_json::Value;
use tracing::{debug, warn};

/// Transport that executes an encoded search against an index
///
/// Implementations own connection handling and retries. Failures that are
/// not about the payload should be reported as [`crate::FtsError::Backend`].
pub trait SearchBackend {
    fn document_search(&self, index_name: &str, payload: &Value) -> Result<Value>;
}

impl<B: SearchBackend + ?Sized> SearchBackend for &B {
    fn document_search(&self, index_name: &str, payload: &Value) -> Result<Value> {
        (**self).document_search(index_name, payload)
    }
}

/// Search client over a [`SearchBackend`]
#[derive(Debug)]
pub struct SearchClient<B> {
    backend: B,
}

impl<B: SearchBackend> SearchClient<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Run `query` against `index_name`
    ///
    /// The query is validated and encoded before the backend is called, so an
    /// invalid query never reaches the service.
    pub fn search_query(
        &self,
        index_name: &str,
        query: &QueryNode,
        options: &SearchOptions,
    ) -> Result<SearchResult> {
        let payload = SearchRequest::new(index_name, query, options).to_json()?;
        debug!(index = index_name, query_type = query.query_type(), "executing search");

        let response = self.backend.document_search(index_name, &payload)?;
        let result = SearchResult::decode(&response, options)?;

        if result.meta_data.is_partial() {
            warn!(
                index = index_name,
                errors = result.meta_data.errors.len(),
                "search returned partial results"
            );
        }
        debug!(
            index = index_name,
            rows = result.rows.len(),
            total_rows = result.meta_data.metrics.total_rows,
            "search completed"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FtsError;
    use crate::query::{ConjunctionQuery, MatchQuery};
    use serde_json::json;
    use std::cell::RefCell;

    #[derive(Debug, Default)]
    struct RecordingBackend {
        requests: RefCell<Vec<(String, Value)>>,
    }

    impl SearchBackend for RecordingBackend {
        fn document_search(&self, index_name: &str, payload: &Value) -> Result<Value> {
            self.requests
                .borrow_mut()
                .push((index_name.to_string(), payload.clone()));
            Ok(json!({
                "rows": [{"index": "beers_1", "id": "b1", "score": 1.5}],
                "meta_data": {
                    "metrics": {
                        "took": 12,
                        "total_rows": 1,
                        "max_score": 1.5,
                        "success_partition_count": 1,
                        "error_partition_count": 0
                    },
                    "errors": {}
                }
            }))
        }
    }

    struct FailingBackend;

    impl SearchBackend for FailingBackend {
        fn document_search(&self, _index_name: &str, _payload: &Value) -> Result<Value> {
            Err(FtsError::Backend("connection refused".to_string()))
        }
    }

    #[test]
    fn test_search_query() {
        let backend = RecordingBackend::default();
        let client = SearchClient::new(&backend);
        let query: QueryNode = MatchQuery::new("ipa").into();

        let result = client
            .search_query("beers", &query, &SearchOptions::new().with_limit(5))
            .unwrap();

        assert_eq!(result.rows.len(), 1);
        assert_eq!(result.rows[0].id, "b1");
        assert_eq!(result.meta_data.metrics.total_rows, 1);

        let requests = backend.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, "beers");
        assert_eq!(requests[0].1["query"], json!({"match": "ipa"}));
        assert_eq!(requests[0].1["size"], json!(5));
    }

    #[test]
    fn test_invalid_query_not_sent() {
        let backend = RecordingBackend::default();
        let client = SearchClient::new(&backend);
        let query: QueryNode = ConjunctionQuery::new(Vec::<QueryNode>::new()).into();

        let err = client
            .search_query("beers", &query, &SearchOptions::default())
            .unwrap_err();

        assert!(err.is_validation_error());
        assert!(backend.requests.borrow().is_empty());
    }

    #[test]
    fn test_backend_error_propagates() {
        let client = SearchClient::new(FailingBackend);
        let query: QueryNode = MatchQuery::new("ipa").into();
        let err = client
            .search_query("beers", &query, &SearchOptions::default())
            .unwrap_err();
        assert!(matches!(err, FtsError::Backend(_)));
    }
}
