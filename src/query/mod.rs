//! Search query model
//!
//! This module provides the query tree sent to the search service, supporting:
//! - Analyzed text queries (match, match_phrase, query_string)
//! - Term-level queries (term, prefix, phrase, wildcard, regexp, doc_id, bool field)
//! - Range queries (numeric, term, date)
//! - Geo queries (distance, bounding box)
//! - Compound queries (conjunction, disjunction, boolean)
//!
//! # Example
//!
//! ```rust
//! use ftsquery::query::{BooleanQuery, MatchQuery, QueryNode, TermQuery};
//!
//! let query: QueryNode = BooleanQuery::new()
//!     .must(MatchQuery::new("rust").with_field("content"))
//!     .must_not(TermQuery::new("draft").with_field("status"))
//!     .into();
//! let payload = query.encode().unwrap();
//! assert!(payload.get("must").is_some());
//! ```

pub mod ast;
pub mod nodes;
pub mod types;

pub use ast::QueryNode;
pub use nodes::*;
pub use types::*;
