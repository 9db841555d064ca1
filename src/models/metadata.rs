//! Response metadata: timing, hit counts and partition health

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Execution metrics reported by the service
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchMetrics {
    /// Time the service spent on the query, as reported by the service
    pub took: u64,
    /// Total number of matching documents, not just the returned page
    pub total_rows: u64,
    /// Highest score among the matching documents
    pub max_score: f64,
    /// Number of index partitions that answered
    pub success_partition_count: u64,
    /// Number of index partitions that failed
    pub error_partition_count: u64,
}

impl SearchMetrics {
    /// Total number of index partitions queried
    ///
    /// Always derived from the success and error counts; saturates at `u64::MAX`.
    pub fn total_partition_count(&self) -> u64 {
        self.success_partition_count
            .saturating_add(self.error_partition_count)
    }
}

/// Metadata of a search response
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchMetaData {
    pub metrics: SearchMetrics,
    /// Error message per failed partition
    #[serde(default)]
    pub errors: HashMap<String, String>,
}

impl SearchMetaData {
    /// Whether some partitions failed, making the result partial
    pub fn is_partial(&self) -> bool {
        self.metrics.error_partition_count > 0 || !self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_total_partition_count() {
        let mut metrics = SearchMetrics::default();
        assert_eq!(metrics.total_partition_count(), 0);

        metrics.success_partition_count = 5;
        metrics.error_partition_count = 1;
        assert_eq!(metrics.total_partition_count(), 6);

        metrics.error_partition_count = 3;
        assert_eq!(metrics.total_partition_count(), 8);
    }

    #[test]
    fn test_total_partition_count_saturates() {
        let metrics: SearchMetrics = serde_json::from_value(json!({
            "took": 1,
            "total_rows": 0,
            "max_score": 0.0,
            "success_partition_count": u64::MAX,
            "error_partition_count": 1
        }))
        .unwrap();
        assert_eq!(metrics.total_partition_count(), u64::MAX);
    }

    #[test]
    fn test_meta_data_deserialize() {
        let meta: SearchMetaData = serde_json::from_value(json!({
            "metrics": {
                "took": 1500,
                "total_rows": 42,
                "max_score": 3.5,
                "success_partition_count": 6,
                "error_partition_count": 0
            }
        }))
        .unwrap();
        assert_eq!(meta.metrics.total_rows, 42);
        assert!(meta.errors.is_empty());
        assert!(!meta.is_partial());
    }

    #[test]
    fn test_meta_data_partial() {
        let meta: SearchMetaData = serde_json::from_value(json!({
            "metrics": {
                "took": 10,
                "total_rows": 1,
                "max_score": 1.0,
                "success_partition_count": 5,
                "error_partition_count": 1
            },
            "errors": {"pindex_3": "context deadline exceeded"}
        }))
        .unwrap();
        assert!(meta.is_partial());
        assert_eq!(meta.metrics.total_partition_count(), 6);
    }
}
