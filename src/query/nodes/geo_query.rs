//! Geo queries - match documents by location
//!
//! Coordinates are always encoded longitude first: `[lon, lat]`.

use crate::query::types::{GeoPoint, QueryBody};
use crate::Result;
use serde_json::Value;

/// Query that matches locations within a distance of a point
#[derive(Clone, Debug, PartialEq)]
pub struct GeoDistanceQuery {
    /// Center point
    pub location: GeoPoint,
    /// Distance with unit suffix, e.g. `"10mi"` or `"2.5km"`
    pub distance: String,
    /// Boost factor for scoring
    pub boost: Option<f64>,
    /// Geo point field to search in
    pub field: Option<String>,
}

impl GeoDistanceQuery {
    /// Create a new geo distance query
    pub fn new(longitude: f64, latitude: f64, distance: impl Into<String>) -> Self {
        Self {
            location: GeoPoint::new(longitude, latitude),
            distance: distance.into(),
            boost: None,
            field: None,
        }
    }

    /// Set the boost factor
    pub fn with_boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }

    /// Set the field to search in
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn encode(&self) -> Result<Value> {
        let mut body = QueryBody::new();
        body.point("location", self.location)
            .insert("distance", self.distance.as_str())
            .common(self.boost, self.field.as_ref());
        body.finish()
    }
}

/// Query that matches locations inside a rectangle
#[derive(Clone, Debug, PartialEq)]
pub struct GeoBoundingBoxQuery {
    /// North-west corner
    pub top_left: GeoPoint,
    /// South-east corner
    pub bottom_right: GeoPoint,
    /// Boost factor for scoring
    pub boost: Option<f64>,
    /// Geo point field to search in
    pub field: Option<String>,
}

impl GeoBoundingBoxQuery {
    /// Create a new bounding box query
    pub fn new(top_left: GeoPoint, bottom_right: GeoPoint) -> Self {
        Self {
            top_left,
            bottom_right,
            boost: None,
            field: None,
        }
    }

    /// Set the boost factor
    pub fn with_boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }

    /// Set the field to search in
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn encode(&self) -> Result<Value> {
        let mut body = QueryBody::new();
        body.point("top_left", self.top_left)
            .point("bottom_right", self.bottom_right)
            .common(self.boost, self.field.as_ref());
        body.finish()
    }
}
