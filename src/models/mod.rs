//! Typed search results
//!
//! Everything here is built once from a service response and then only read.

pub mod facet_result;
pub mod location;
pub mod metadata;
pub mod result;
pub mod row;

pub use facet_result::{
    DateRangeFacet, DateRangeFacetResult, FacetResult, NumericRangeFacet, NumericRangeFacetResult,
    TermFacet, TermFacetResult,
};
pub use location::{SearchRowLocation, SearchRowLocations};
pub use metadata::{SearchMetaData, SearchMetrics};
pub use result::SearchResult;
pub use row::SearchRow;

use serde::{Deserialize, Deserializer};

/// Treat an explicit `null` list like an absent one
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
