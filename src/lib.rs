//! Client-side model for full-text search requests and responses
//!
//! Queries are composed from [`QueryNode`] values and encoded to the JSON
//! query language of the search service. Responses are decoded into a
//! [`SearchResult`] with typed rows, facets and metadata.

pub mod client;
pub mod config;
pub mod error;
pub mod facet;
pub mod models;
pub mod query;
pub mod request;
pub mod sort;
pub mod transcoder;

pub use client::{SearchBackend, SearchClient};
pub use config::{HighlightStyle, SearchOptions};
pub use error::{FtsError, Result};
pub use facet::{
    DateRange, DateRangeFacetSpec, FacetKind, FacetSpec, FacetSpecs, NumericRange,
    NumericRangeFacetSpec, TermFacetSpec,
};
pub use models::*;
pub use query::QueryNode;
pub use request::SearchRequest;
pub use sort::{DistanceUnit, FieldSort, GeoDistanceSort, SortMissing, SortMode, SortSpec, SortType};
pub use transcoder::{JsonTranscoder, Transcoder};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
