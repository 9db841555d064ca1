//! Concrete query node implementations
//!
//! Each node is a plain builder struct that knows how to encode itself into
//! the service's JSON query format. [`QueryNode`](crate::query::QueryNode)
//! wraps them into a single closed type.

mod all_docs;
mod bool_field_query;
mod bool_query;
mod compound_query;
mod doc_id_query;
mod geo_query;
mod match_query;
mod phrase_query;
mod query_string;
mod range_query;
mod term_query;
mod wildcard_query;

pub use all_docs::{MatchAllQuery, MatchNoneQuery};
pub use bool_field_query::BooleanFieldQuery;
pub use bool_query::BooleanQuery;
pub use compound_query::{ConjunctionQuery, DisjunctionQuery};
pub use doc_id_query::DocIdQuery;
pub use geo_query::{GeoBoundingBoxQuery, GeoDistanceQuery};
pub use match_query::{MatchPhraseQuery, MatchQuery};
pub use phrase_query::PhraseQuery;
pub use query_string::QueryStringQuery;
pub use range_query::{DateRangeQuery, NumericRangeQuery, TermRangeQuery};
pub use term_query::{PrefixQuery, TermQuery};
pub use wildcard_query::{RegexpQuery, WildcardQuery};
