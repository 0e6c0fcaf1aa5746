//! Wire-format crime records as returned by the upstream API.
//!
//! Field names mirror the upstream JSON keys exactly. Conversion into the
//! domain models in [`crate::models`] is total; the single lossy path is
//! that malformed latitude/longitude strings coalesce to an absent
//! coordinate. These records are public because sibling resources embed
//! crimes in their own responses.

use chrono::NaiveDate;
use police_uk_client::dates;
use police_uk_geography::Coordinate;
use serde::Deserialize;

use crate::models::{Crime, CrimeCategory, Location, OutcomeStatus, Street};

/// A crime as serialised by the upstream API.
#[derive(Debug, Deserialize)]
pub struct CrimeRecord {
    pub id: i64,
    #[serde(default)]
    pub persistent_id: Option<String>,
    pub category: String,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(deserialize_with = "dates::deserialize_month")]
    pub month: NaiveDate,
    #[serde(default)]
    pub location: Option<LocationRecord>,
    #[serde(default)]
    pub location_type: Option<String>,
    #[serde(default)]
    pub location_subtype: Option<String>,
    #[serde(default)]
    pub outcome_status: Option<OutcomeStatusRecord>,
}

/// A snap-point location. The upstream serialises coordinates as strings.
#[derive(Debug, Deserialize)]
pub struct LocationRecord {
    pub latitude: String,
    pub longitude: String,
    pub street: StreetRecord,
}

#[derive(Debug, Deserialize)]
pub struct StreetRecord {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct OutcomeStatusRecord {
    pub category: String,
    #[serde(deserialize_with = "dates::deserialize_month")]
    pub date: NaiveDate,
}

/// A crime category; the upstream uses `url` as the identifier key.
#[derive(Debug, Deserialize)]
pub struct CrimeCategoryRecord {
    pub url: String,
    pub name: String,
}

impl From<CrimeRecord> for Crime {
    fn from(record: CrimeRecord) -> Self {
        Self {
            id: record.id,
            crime_id: record.persistent_id.unwrap_or_default(),
            category: record.category,
            context: record.context,
            month: record.month,
            location: record.location.map(Location::from),
            location_type: record.location_type,
            location_subtype: record.location_subtype,
            outcome_status: record.outcome_status.map(OutcomeStatus::from),
        }
    }
}

impl From<LocationRecord> for Location {
    fn from(record: LocationRecord) -> Self {
        let coordinate = match (record.latitude.parse(), record.longitude.parse()) {
            (Ok(latitude), Ok(longitude)) => Some(Coordinate::new(latitude, longitude)),
            _ => None,
        };

        Self {
            coordinate,
            street: record.street.into(),
        }
    }
}

impl From<StreetRecord> for Street {
    fn from(record: StreetRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
        }
    }
}

impl From<OutcomeStatusRecord> for OutcomeStatus {
    fn from(record: OutcomeStatusRecord) -> Self {
        Self {
            category: record.category,
            date: record.date,
        }
    }
}

impl From<CrimeCategoryRecord> for CrimeCategory {
    fn from(record: CrimeCategoryRecord) -> Self {
        Self {
            id: record.url,
            name: record.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_a_full_record() {
        let record: CrimeRecord = serde_json::from_value(serde_json::json!({
            "category": "anti-social-behaviour",
            "location_type": "Force",
            "location": {
                "latitude": "52.6394",
                "street": {"id": 883_425, "name": "On or near Orchard Street"},
                "longitude": "-1.13119"
            },
            "context": "",
            "outcome_status": {
                "category": "Under investigation",
                "date": "2023-03"
            },
            "persistent_id": "4d83433f3117b3a4d2c80510c69ea188a145bd7e3e3ac267a1da72e1f3d4a7bc",
            "id": 54_164_419,
            "location_subtype": "",
            "month": "2023-03"
        }))
        .unwrap();

        let crime = Crime::from(record);

        assert_eq!(crime.id, 54_164_419);
        assert_eq!(crime.category, "anti-social-behaviour");
        assert_eq!(crime.month, NaiveDate::from_ymd_opt(2023, 3, 1).unwrap());

        let location = crime.location.unwrap();
        assert_eq!(location.street.id, 883_425);
        assert_eq!(
            location.coordinate,
            Some(Coordinate::new(52.6394, -1.13119))
        );
        assert_eq!(
            crime.outcome_status.unwrap().date,
            NaiveDate::from_ymd_opt(2023, 3, 1).unwrap()
        );
    }

    #[test]
    fn missing_persistent_id_maps_to_empty_crime_id() {
        let record: CrimeRecord = serde_json::from_value(serde_json::json!({
            "category": "burglary",
            "id": 1,
            "month": "2023-03"
        }))
        .unwrap();

        let crime = Crime::from(record);
        assert_eq!(crime.crime_id, "");
        assert_eq!(crime.location, None);
    }

    #[test]
    fn malformed_coordinate_strings_coalesce_to_none() {
        let record: LocationRecord = serde_json::from_value(serde_json::json!({
            "latitude": "not-a-number",
            "longitude": "-1.13119",
            "street": {"id": 1, "name": "On or near Orchard Street"}
        }))
        .unwrap();

        let location = Location::from(record);
        assert_eq!(location.coordinate, None);
        assert_eq!(location.street.name, "On or near Orchard Street");
    }

    #[test]
    fn malformed_month_fails_deserialization() {
        let result: Result<CrimeRecord, _> = serde_json::from_value(serde_json::json!({
            "category": "burglary",
            "id": 1,
            "month": "last march"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn category_record_uses_url_as_id() {
        let record: CrimeCategoryRecord = serde_json::from_value(serde_json::json!({
            "url": "all-crime",
            "name": "All crime and ASB"
        }))
        .unwrap();

        let category = CrimeCategory::from(record);
        assert_eq!(category.id, "all-crime");
        assert_eq!(category.name, "All crime and ASB");
    }
}
