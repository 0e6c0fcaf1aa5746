//! Query parameter encoding shared by endpoint builders and cache keys.

use chrono::NaiveDate;
use police_uk_geography::Coordinate;

/// Formats a date at the upstream API's month granularity (`yyyy-MM`).
///
/// Any two dates within the same calendar month encode identically.
#[must_use]
pub fn month(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// Formats a latitude or longitude for a query parameter.
#[must_use]
pub fn degrees(value: f64) -> String {
    value.to_string()
}

/// Encodes a coordinate as its `lat`/`lng` parameter pair.
#[must_use]
pub fn coordinate_pair(coordinate: Coordinate) -> (String, String) {
    (
        degrees(coordinate.latitude),
        degrees(coordinate.longitude),
    )
}

/// Encodes a boundary as `lat,lng` pairs joined by `:`, preserving input
/// order. Coordinates are not deduplicated and the ring is not closed;
/// callers wanting a closed polygon repeat the first coordinate themselves.
#[must_use]
pub fn polygon(coordinates: &[Coordinate]) -> String {
    coordinates
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(":")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_truncates_to_calendar_month() {
        let first = NaiveDate::from_ymd_opt(2021, 5, 1).unwrap();
        let last = NaiveDate::from_ymd_opt(2021, 5, 31).unwrap();

        assert_eq!(month(first), "2021-05");
        assert_eq!(month(first), month(last));
    }

    #[test]
    fn coordinate_pair_uses_plain_decimal_form() {
        let (lat, lng) = coordinate_pair(Coordinate::new(52.6389, -1.13619));
        assert_eq!(lat, "52.6389");
        assert_eq!(lng, "-1.13619");
    }

    #[test]
    fn polygon_preserves_order_without_closing() {
        let boundary = [
            Coordinate::new(52.268, 0.543),
            Coordinate::new(52.794, 0.238),
            Coordinate::new(52.130, 0.478),
        ];

        assert_eq!(
            polygon(&boundary),
            "52.268,0.543:52.794,0.238:52.13,0.478"
        );
    }

    #[test]
    fn empty_polygon_encodes_empty() {
        assert_eq!(polygon(&[]), "");
    }
}
