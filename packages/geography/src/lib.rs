#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Platform-neutral coordinate and region types.
//!
//! The upstream API only holds data for Great Britain, so services that take
//! a coordinate test it against [`AVAILABLE_DATA_REGION`] before issuing a
//! request that is known to fail. Conversions to and from the [`geo`] crate's
//! types keep these core types independent of any particular geo ecosystem.

use serde::{Deserialize, Serialize};

/// A WGS-84 latitude/longitude pair.
///
/// Values are passed through to the upstream API uninterpreted; no range
/// validation happens here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinate {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate from decimal degrees.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Formats as `latitude,longitude`, the upstream query encoding for a single
/// coordinate value.
impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

impl From<Coordinate> for geo::Point<f64> {
    fn from(coordinate: Coordinate) -> Self {
        Self::new(coordinate.longitude, coordinate.latitude)
    }
}

impl From<geo::Point<f64>> for Coordinate {
    fn from(point: geo::Point<f64>) -> Self {
        Self::new(point.y(), point.x())
    }
}

/// Width and height of a [`CoordinateRegion`] in decimal degrees.
///
/// Deltas must be non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinateSpan {
    /// North-to-south extent of the region.
    pub latitude_delta: f64,
    /// East-to-west extent of the region.
    pub longitude_delta: f64,
}

impl CoordinateSpan {
    /// Creates a span from non-negative degree deltas.
    #[must_use]
    pub const fn new(latitude_delta: f64, longitude_delta: f64) -> Self {
        Self {
            latitude_delta,
            longitude_delta,
        }
    }
}

/// A rectangular geographic region described by a center and a span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinateRegion {
    /// Center of the region.
    pub center: Coordinate,
    /// Extent of the region around the center.
    pub span: CoordinateSpan,
}

impl CoordinateRegion {
    /// Creates a region from a center and a span.
    #[must_use]
    pub const fn new(center: Coordinate, span: CoordinateSpan) -> Self {
        Self { center, span }
    }

    /// Whether the coordinate lies within the region, edges included.
    #[must_use]
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.contains_with_margin(coordinate, 0.0)
    }

    /// Whether the coordinate lies within the region after expanding every
    /// edge outward by `margin` degrees. Edges are inclusive.
    #[must_use]
    pub fn contains_with_margin(&self, coordinate: Coordinate, margin: f64) -> bool {
        let half_latitude = self.span.latitude_delta / 2.0 + margin;
        let half_longitude = self.span.longitude_delta / 2.0 + margin;

        (coordinate.latitude - self.center.latitude).abs() <= half_latitude
            && (coordinate.longitude - self.center.longitude).abs() <= half_longitude
    }
}

/// Bounding region of the upstream data set, covering Great Britain.
///
/// Requests for coordinates outside this box are rejected upstream, so gated
/// services check it locally and skip the network round-trip.
pub const AVAILABLE_DATA_REGION: CoordinateRegion = CoordinateRegion::new(
    Coordinate::new(54.4661645479556, -3.276575),
    CoordinateSpan::new(10.7916, 10.654),
);

#[cfg(test)]
mod tests {
    use super::*;

    const fn unit_region() -> CoordinateRegion {
        CoordinateRegion::new(Coordinate::new(0.0, 0.0), CoordinateSpan::new(1.0, 1.0))
    }

    #[test]
    fn contains_interior_and_center() {
        let region = unit_region();
        assert!(region.contains(Coordinate::new(0.0, 0.0)));
        assert!(region.contains(Coordinate::new(0.25, -0.25)));
    }

    #[test]
    fn contains_is_inclusive_at_edges() {
        let region = unit_region();
        assert!(region.contains(Coordinate::new(0.5, 0.5)));
        assert!(region.contains(Coordinate::new(-0.5, -0.5)));
        assert!(region.contains(Coordinate::new(0.5, -0.5)));
    }

    #[test]
    fn rejects_points_past_half_span() {
        let region = unit_region();
        assert!(!region.contains(Coordinate::new(0.51, 0.0)));
        assert!(!region.contains(Coordinate::new(0.0, -0.51)));
    }

    #[test]
    fn margin_expands_every_edge() {
        let region = unit_region();
        assert!(region.contains_with_margin(Coordinate::new(0.6, 0.0), 0.1));
        assert!(region.contains_with_margin(Coordinate::new(0.0, -0.6), 0.1));
        assert!(!region.contains_with_margin(Coordinate::new(0.61, 0.0), 0.1));
    }

    #[test]
    fn available_data_region_covers_britain() {
        assert!(AVAILABLE_DATA_REGION.contains(Coordinate::new(51.500617, -0.124629)));
        assert!(AVAILABLE_DATA_REGION.contains(Coordinate::new(55.953251, -3.188267)));
        assert!(!AVAILABLE_DATA_REGION.contains(Coordinate::new(48.856614, 2.352222)));
        assert!(!AVAILABLE_DATA_REGION.contains(Coordinate::new(40.712728, -74.006015)));
    }

    #[test]
    fn display_is_comma_separated() {
        assert_eq!(
            Coordinate::new(52.6389, -1.13619).to_string(),
            "52.6389,-1.13619"
        );
    }

    #[test]
    fn geo_point_roundtrip() {
        let coordinate = Coordinate::new(52.6389, -1.13619);
        let point = geo::Point::from(coordinate);
        assert!((point.x() - coordinate.longitude).abs() < f64::EPSILON);
        assert!((point.y() - coordinate.latitude).abs() < f64::EPSILON);
        assert_eq!(Coordinate::from(point), coordinate);
    }
}
