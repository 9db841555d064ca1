//! Core types shared by query nodes, sort specs and facet specs

use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::ast::QueryNode;
use crate::error::FtsError;
use crate::Result;

/// Wire format for structured date/time bounds (RFC 3339, explicit offset, whole seconds)
pub const DATE_FORMAT_RFC3339: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Value type for numeric range bounds
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RangeValue {
    /// 64-bit integer
    Long(i64),
    /// 64-bit floating point
    Double(f64),
}

impl RangeValue {
    /// Convert to f64
    pub fn as_f64(&self) -> f64 {
        match self {
            RangeValue::Long(v) => *v as f64,
            RangeValue::Double(v) => *v,
        }
    }
}

impl From<i64> for RangeValue {
    fn from(value: i64) -> Self {
        RangeValue::Long(value)
    }
}

impl From<i32> for RangeValue {
    fn from(value: i32) -> Self {
        RangeValue::Long(value.into())
    }
}

impl From<u32> for RangeValue {
    fn from(value: u32) -> Self {
        RangeValue::Long(value.into())
    }
}

impl From<f64> for RangeValue {
    fn from(value: f64) -> Self {
        RangeValue::Double(value)
    }
}

impl From<RangeValue> for Value {
    fn from(value: RangeValue) -> Self {
        match value {
            RangeValue::Long(v) => Value::from(v),
            RangeValue::Double(v) => Value::from(v),
        }
    }
}

/// A date/time range bound: either passed through verbatim or rendered from a calendar instant
#[derive(Clone, Debug, PartialEq)]
pub enum DateTimeBound {
    /// Pre-formatted string, interpreted by the server's date/time parser
    Text(String),
    /// Calendar instant, rendered with [`DATE_FORMAT_RFC3339`]
    Instant(DateTime<FixedOffset>),
}

impl DateTimeBound {
    /// Render the bound in its wire form
    pub fn render(&self) -> String {
        match self {
            DateTimeBound::Text(text) => text.clone(),
            DateTimeBound::Instant(instant) => instant.format(DATE_FORMAT_RFC3339).to_string(),
        }
    }
}

impl From<&str> for DateTimeBound {
    fn from(value: &str) -> Self {
        DateTimeBound::Text(value.to_string())
    }
}

impl From<String> for DateTimeBound {
    fn from(value: String) -> Self {
        DateTimeBound::Text(value)
    }
}

impl From<DateTime<FixedOffset>> for DateTimeBound {
    fn from(value: DateTime<FixedOffset>) -> Self {
        DateTimeBound::Instant(value)
    }
}

impl From<DateTime<Utc>> for DateTimeBound {
    fn from(value: DateTime<Utc>) -> Self {
        DateTimeBound::Instant(value.with_timezone(&value.offset().fix()))
    }
}

impl From<DateTimeBound> for Value {
    fn from(value: DateTimeBound) -> Self {
        Value::String(value.render())
    }
}

impl Serialize for DateTimeBound {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.render())
    }
}

/// One end of a range; `inclusive` is omitted from the wire when unset so the server default applies
#[derive(Clone, Debug, PartialEq)]
pub struct RangeBound<T> {
    pub value: T,
    pub inclusive: Option<bool>,
}

impl<T> RangeBound<T> {
    pub fn new(value: T, inclusive: Option<bool>) -> Self {
        Self { value, inclusive }
    }
}

/// Geographic point, encoded as `[longitude, latitude]`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    pub longitude: f64,
    pub latitude: f64,
}

impl GeoPoint {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Check that both coordinates can be sent as JSON numbers
    pub fn is_finite(&self) -> bool {
        self.longitude.is_finite() && self.latitude.is_finite()
    }
}

impl Serialize for GeoPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        [self.longitude, self.latitude].serialize(serializer)
    }
}

impl From<GeoPoint> for Value {
    fn from(point: GeoPoint) -> Self {
        Value::Array(vec![point.longitude.into(), point.latitude.into()])
    }
}

/// JSON object under construction for a single query node
///
/// Optional attributes are only inserted when present, never as `null`.
/// Floating point attributes go through [`QueryBody::boost`],
/// [`QueryBody::point`] or [`QueryBody::bound`]: JSON cannot carry NaN or
/// infinity, so the first non-finite key is recorded and reported by
/// [`QueryBody::finish`].
#[derive(Debug, Default)]
pub(crate) struct QueryBody {
    map: Map<String, Value>,
    non_finite: Option<String>,
}

impl QueryBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(key: &str, value: impl Into<Value>) -> Self {
        let mut body = Self::new();
        body.insert(key, value);
        body
    }

    pub fn insert(&mut self, key: &str, value: impl Into<Value>) -> &mut Self {
        self.map.insert(key.to_string(), value.into());
        self
    }

    pub fn insert_opt<V: Into<Value>>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.insert(key, value);
        }
        self
    }

    pub fn boost(&mut self, boost: Option<f64>) -> &mut Self {
        if let Some(boost) = boost {
            self.check_finite("boost", boost.is_finite());
            self.insert("boost", boost);
        }
        self
    }

    pub fn point(&mut self, key: &str, point: GeoPoint) -> &mut Self {
        self.check_finite(key, point.is_finite());
        self.insert(key, point)
    }

    /// Insert the `boost` and `field` attributes most nodes carry
    pub fn common(&mut self, boost: Option<f64>, field: Option<&String>) -> &mut Self {
        self.boost(boost);
        self.insert_opt("field", field.cloned());
        self
    }

    /// `prefix_length` only means something for fuzzy matching, so it is dropped without `fuzziness`
    pub fn fuzziness(&mut self, fuzziness: Option<u32>, prefix_length: Option<u32>) -> &mut Self {
        if let Some(fuzziness) = fuzziness {
            self.insert("fuzziness", fuzziness);
            self.insert_opt("prefix_length", prefix_length);
        }
        self
    }

    pub fn bound<T: Clone + Into<Value>>(
        &mut self,
        key: &str,
        inclusive_key: &str,
        bound: Option<&RangeBound<T>>,
    ) -> &mut Self {
        if let Some(bound) = bound {
            let value = bound.value.clone().into();
            self.check_finite(key, !value.is_null());
            self.insert(key, value);
            self.insert_opt(inclusive_key, bound.inclusive);
        }
        self
    }

    fn check_finite(&mut self, key: &str, finite: bool) {
        if !finite && self.non_finite.is_none() {
            self.non_finite = Some(key.to_string());
        }
    }

    pub fn finish(self) -> Result<Value> {
        match self.non_finite {
            Some(key) => Err(FtsError::NonFiniteNumber { key }),
            None => Ok(Value::Object(self.map)),
        }
    }
}

/// Insertion-ordered set of child queries
///
/// Adding a query that is structurally equal to one already held is a no-op,
/// so the first occurrence keeps its position. Builders can still differ in
/// ways their JSON does not show, so compound queries collapse children again
/// on the encoded form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuerySet {
    nodes: Vec<QueryNode>,
}

impl QuerySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query, returning false if an equal query was already present
    pub fn insert(&mut self, node: impl Into<QueryNode>) -> bool {
        let node = node.into();
        if self.nodes.contains(&node) {
            return false;
        }
        self.nodes.push(node);
        true
    }

    /// Merge a batch of queries, skipping duplicates
    pub fn merge<I, Q>(&mut self, nodes: I)
    where
        I: IntoIterator<Item = Q>,
        Q: Into<QueryNode>,
    {
        for node in nodes {
            self.insert(node);
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QueryNode> {
        self.nodes.iter()
    }
}

impl<Q: Into<QueryNode>> FromIterator<Q> for QuerySet {
    fn from_iter<I: IntoIterator<Item = Q>>(iter: I) -> Self {
        let mut set = QuerySet::new();
        set.merge(iter);
        set
    }
}

impl<'a> IntoIterator for &'a QuerySet {
    type Item = &'a QueryNode;
    type IntoIter = std::slice::Iter<'a, QueryNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// Append strings to `target`, keeping the first occurrence of each
pub(crate) fn push_unique<I, S>(target: &mut Vec<String>, items: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    for item in items {
        let item = item.into();
        if !target.contains(&item) {
            target.push(item);
        }
    }
}
