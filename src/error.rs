use thiserror::Error;

/// Main error type for search query construction and result decoding
#[derive(Error, Debug)]
pub enum FtsError {
    #[error("{query} query requires at least one range bound")]
    MissingRangeBound { query: &'static str },

    #[error("compound {query} query must have sub-queries")]
    EmptyCompoundQuery { query: &'static str },

    #[error("disjunction query has {available} sub-queries, fewer than the configured minimum of {min}")]
    InvalidMinimumMatch { min: usize, available: usize },

    #[error("boolean query must have at least one non-empty clause")]
    EmptyBooleanQuery,

    #[error("{key} must be a finite number")]
    NonFiniteNumber { key: String },

    #[error("Malformed search response: {0}")]
    MalformedResponse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Transcoder error: {0}")]
    Transcoder(String),

    #[error("Backend error: {0}")]
    Backend(String),
}

/// Result type alias for search operations
pub type Result<T> = std::result::Result<T, FtsError>;

impl FtsError {
    /// Check if this error was caused by an invalid query, sort or facet built by the caller
    ///
    /// Validation errors are raised locally before anything is sent to the service.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            FtsError::MissingRangeBound { .. }
                | FtsError::EmptyCompoundQuery { .. }
                | FtsError::InvalidMinimumMatch { .. }
                | FtsError::EmptyBooleanQuery
                | FtsError::NonFiniteNumber { .. }
        )
    }

    pub(crate) fn malformed(context: impl std::fmt::Display, err: impl std::fmt::Display) -> Self {
        FtsError::MalformedResponse(format!("{}: {}", context, err))
    }
}
