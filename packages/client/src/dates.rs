//! Month-granularity date handling.
//!
//! The upstream API publishes crime data at monthly resolution: query
//! parameters, cache keys, and record `month` fields all use `yyyy-MM`.
//! Domain models pin months to the first day of the month.

use chrono::{Datelike as _, NaiveDate, Utc};
use serde::{Deserialize as _, Deserializer};

/// Parses an upstream `yyyy-MM` string to the first day of that month.
#[must_use]
pub fn parse_month(value: &str) -> Option<NaiveDate> {
    let (year, month) = value.split_once('-')?;
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
}

/// Truncates a date to the first day of its calendar month.
#[must_use]
pub fn truncate_to_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

/// Today's date in UTC.
///
/// Services resolve an omitted date parameter to this before building
/// endpoints, so cache keys always carry a concrete month.
#[must_use]
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Deserializes an upstream `yyyy-MM` month field.
///
/// # Errors
///
/// Fails deserialization when the value is not a valid year-month, so a
/// malformed month surfaces as a decode error at the client layer rather
/// than inside a wire-to-domain mapper.
pub fn deserialize_month<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_month(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid year-month value: {raw:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_year_month() {
        assert_eq!(
            parse_month("2023-03"),
            NaiveDate::from_ymd_opt(2023, 3, 1)
        );
    }

    #[test]
    fn rejects_malformed_months() {
        assert_eq!(parse_month("2023"), None);
        assert_eq!(parse_month("2023-13"), None);
        assert_eq!(parse_month("2023-03-05"), None);
        assert_eq!(parse_month("march 2023"), None);
    }

    #[test]
    fn truncation_is_idempotent_within_a_month() {
        let early = NaiveDate::from_ymd_opt(2021, 5, 1).unwrap();
        let late = NaiveDate::from_ymd_opt(2021, 5, 31).unwrap();

        assert_eq!(truncate_to_month(early), truncate_to_month(late));
        assert_eq!(
            truncate_to_month(late),
            NaiveDate::from_ymd_opt(2021, 5, 1).unwrap()
        );
    }
}
