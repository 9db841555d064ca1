//! Query tree representation
//!
//! `QueryNode` is the closed set of query kinds the search service understands.
//! Encoding is an exhaustive match, so a new kind cannot be added without
//! teaching the encoder about it.

use crate::query::nodes::{
    BooleanFieldQuery, BooleanQuery, ConjunctionQuery, DateRangeQuery, DisjunctionQuery,
    DocIdQuery, GeoBoundingBoxQuery, GeoDistanceQuery, MatchAllQuery, MatchNoneQuery,
    MatchPhraseQuery, MatchQuery, NumericRangeQuery, PhraseQuery, PrefixQuery, QueryStringQuery,
    RegexpQuery, TermQuery, TermRangeQuery, WildcardQuery,
};
use crate::Result;
use serde::{ser, Serialize, Serializer};
use serde_json::Value;

/// A node of a search query tree
///
/// Nodes are built with the builder methods of the wrapped query types and
/// then converted with `into()`. Once a tree is handed out for encoding it is
/// only read, so the same tree can be shared between concurrent searches.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryNode {
    Match(MatchQuery),
    MatchPhrase(MatchPhraseQuery),
    Regexp(RegexpQuery),
    QueryString(QueryStringQuery),
    Wildcard(WildcardQuery),
    DocId(DocIdQuery),
    BooleanField(BooleanFieldQuery),
    DateRange(DateRangeQuery),
    NumericRange(NumericRangeQuery),
    TermRange(TermRangeQuery),
    GeoDistance(GeoDistanceQuery),
    GeoBoundingBox(GeoBoundingBoxQuery),
    Term(TermQuery),
    Prefix(PrefixQuery),
    Phrase(PhraseQuery),
    MatchAll(MatchAllQuery),
    MatchNone(MatchNoneQuery),
    Conjunction(ConjunctionQuery),
    Disjunction(DisjunctionQuery),
    Boolean(BooleanQuery),
}

impl QueryNode {
    /// Encode the tree into the service's JSON query format
    ///
    /// Fails on the first node that violates its structural invariants
    /// (missing range bound, empty compound, unsatisfiable minimum, empty
    /// boolean query).
    pub fn encode(&self) -> Result<Value> {
        match self {
            QueryNode::Match(q) => q.encode(),
            QueryNode::MatchPhrase(q) => q.encode(),
            QueryNode::Regexp(q) => q.encode(),
            QueryNode::QueryString(q) => q.encode(),
            QueryNode::Wildcard(q) => q.encode(),
            QueryNode::DocId(q) => q.encode(),
            QueryNode::BooleanField(q) => q.encode(),
            QueryNode::DateRange(q) => q.encode(),
            QueryNode::NumericRange(q) => q.encode(),
            QueryNode::TermRange(q) => q.encode(),
            QueryNode::GeoDistance(q) => q.encode(),
            QueryNode::GeoBoundingBox(q) => q.encode(),
            QueryNode::Term(q) => q.encode(),
            QueryNode::Prefix(q) => q.encode(),
            QueryNode::Phrase(q) => q.encode(),
            QueryNode::MatchAll(q) => q.encode(),
            QueryNode::MatchNone(q) => q.encode(),
            QueryNode::Conjunction(q) => q.encode(),
            QueryNode::Disjunction(q) => q.encode(),
            QueryNode::Boolean(q) => q.encode(),
        }
    }

    /// Encode the tree into a JSON string
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.encode()?)?)
    }

    /// Get the query type name for debugging and logging
    pub fn query_type(&self) -> &'static str {
        match self {
            QueryNode::Match(_) => "match",
            QueryNode::MatchPhrase(_) => "match_phrase",
            QueryNode::Regexp(_) => "regexp",
            QueryNode::QueryString(_) => "query_string",
            QueryNode::Wildcard(_) => "wildcard",
            QueryNode::DocId(_) => "doc_id",
            QueryNode::BooleanField(_) => "bool_field",
            QueryNode::DateRange(_) => "date_range",
            QueryNode::NumericRange(_) => "numeric_range",
            QueryNode::TermRange(_) => "term_range",
            QueryNode::GeoDistance(_) => "geo_distance",
            QueryNode::GeoBoundingBox(_) => "geo_bbox",
            QueryNode::Term(_) => "term",
            QueryNode::Prefix(_) => "prefix",
            QueryNode::Phrase(_) => "phrase",
            QueryNode::MatchAll(_) => "match_all",
            QueryNode::MatchNone(_) => "match_none",
            QueryNode::Conjunction(_) => "conjuncts",
            QueryNode::Disjunction(_) => "disjuncts",
            QueryNode::Boolean(_) => "boolean",
        }
    }

    /// Whether this node combines child queries
    pub fn is_compound(&self) -> bool {
        matches!(
            self,
            QueryNode::Conjunction(_) | QueryNode::Disjunction(_) | QueryNode::Boolean(_)
        )
    }
}

impl Serialize for QueryNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.encode()
            .map_err(<S::Error as ser::Error>::custom)?
            .serialize(serializer)
    }
}

macro_rules! impl_from_query {
    ($($variant:ident($query:ty)),* $(,)?) => {
        $(
            impl From<$query> for QueryNode {
                fn from(query: $query) -> Self {
                    QueryNode::$variant(query)
                }
            }
        )*
    };
}

impl_from_query!(
    Match(MatchQuery),
    MatchPhrase(MatchPhraseQuery),
    Regexp(RegexpQuery),
    QueryString(QueryStringQuery),
    Wildcard(WildcardQuery),
    DocId(DocIdQuery),
    BooleanField(BooleanFieldQuery),
    DateRange(DateRangeQuery),
    NumericRange(NumericRangeQuery),
    TermRange(TermRangeQuery),
    GeoDistance(GeoDistanceQuery),
    GeoBoundingBox(GeoBoundingBoxQuery),
    Term(TermQuery),
    Prefix(PrefixQuery),
    Phrase(PhraseQuery),
    MatchAll(MatchAllQuery),
    MatchNone(MatchNoneQuery),
    Conjunction(ConjunctionQuery),
    Disjunction(DisjunctionQuery),
    Boolean(BooleanQuery),
);
