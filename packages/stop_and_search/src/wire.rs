//! Wire-format stop and search records as returned by the upstream API.
//!
//! Field names mirror the upstream JSON keys exactly; the embedded
//! location reuses the crime location record.

use chrono::{DateTime, Utc};
use police_uk_crime::models::Location;
use police_uk_crime::wire::LocationRecord;
use serde::Deserialize;

use crate::models::{Gender, StopAndSearch, StopAndSearchType};

#[derive(Debug, Deserialize)]
pub(crate) struct StopAndSearchRecord {
    #[serde(rename = "type")]
    pub search_type: StopAndSearchType,
    pub involved_person: bool,
    pub datetime: DateTime<Utc>,
    #[serde(default)]
    pub operation: Option<bool>,
    #[serde(default)]
    pub operation_name: Option<String>,
    #[serde(default)]
    pub location: Option<LocationRecord>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub age_range: Option<String>,
    #[serde(default)]
    pub self_defined_ethnicity: Option<String>,
    #[serde(default)]
    pub officer_defined_ethnicity: Option<String>,
    #[serde(default)]
    pub legislation: Option<String>,
    #[serde(default)]
    pub object_of_search: Option<String>,
    #[serde(default)]
    pub outcome: Option<String>,
    #[serde(default)]
    pub outcome_linked_to_object_of_search: Option<bool>,
    #[serde(default)]
    pub removal_of_more_than_outer_clothing: Option<bool>,
}

impl From<StopAndSearchRecord> for StopAndSearch {
    fn from(record: StopAndSearchRecord) -> Self {
        Self {
            search_type: record.search_type,
            involved_person: record.involved_person,
            datetime: record.datetime,
            operation: record.operation,
            operation_name: record.operation_name,
            location: record.location.map(Location::from),
            gender: record.gender,
            age_range: record.age_range,
            self_defined_ethnicity: record.self_defined_ethnicity,
            officer_defined_ethnicity: record.officer_defined_ethnicity,
            legislation: record.legislation,
            object_of_search: record.object_of_search,
            outcome: record.outcome,
            outcome_linked_to_object_of_search: record.outcome_linked_to_object_of_search,
            removal_of_more_than_outer_clothing: record.removal_of_more_than_outer_clothing,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone as _;

    use super::*;

    #[test]
    fn maps_a_full_record() {
        let record: StopAndSearchRecord = serde_json::from_value(serde_json::json!({
            "age_range": "over 34",
            "officer_defined_ethnicity": "White",
            "involved_person": true,
            "self_defined_ethnicity": "White - English/Welsh/Scottish/Northern Irish/British",
            "gender": "Male",
            "legislation": "Police and Criminal Evidence Act 1984 (section 1)",
            "outcome_linked_to_object_of_search": null,
            "datetime": "2023-01-24T17:26:00+00:00",
            "removal_of_more_than_outer_clothing": false,
            "outcome": "A no further action disposal",
            "location": {
                "latitude": "52.634407",
                "street": {"id": 883_345, "name": "On or near Marquis Street"},
                "longitude": "-1.133653"
            },
            "object_of_search": "Article for use in theft",
            "operation": null,
            "operation_name": null,
            "type": "Person search"
        }))
        .unwrap();

        let stop = StopAndSearch::from(record);

        assert_eq!(stop.search_type, StopAndSearchType::Person);
        assert_eq!(stop.gender, Some(Gender::Male));
        assert_eq!(
            stop.datetime,
            Utc.with_ymd_and_hms(2023, 1, 24, 17, 26, 0).unwrap()
        );
        assert!(stop.involved_person);
        assert_eq!(stop.operation, None);
        assert_eq!(
            stop.location.unwrap().street.name,
            "On or near Marquis Street"
        );
    }

    #[test]
    fn search_type_rejects_unknown_values() {
        let result: Result<StopAndSearchType, _> =
            serde_json::from_value(serde_json::json!("Drone search"));
        assert!(result.is_err());
    }

    #[test]
    fn search_type_display_matches_the_wire_spelling() {
        assert_eq!(
            StopAndSearchType::PersonAndVehicle.to_string(),
            "Person and Vehicle search"
        );
    }
}
