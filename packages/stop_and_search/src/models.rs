//! Domain models for stop and search data.

use chrono::{DateTime, Utc};
use police_uk_crime::models::Location;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// What was searched.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum StopAndSearchType {
    /// A person was searched.
    #[serde(rename = "Person search")]
    #[strum(serialize = "Person search")]
    Person,
    /// A vehicle was searched.
    #[serde(rename = "Vehicle search")]
    #[strum(serialize = "Vehicle search")]
    Vehicle,
    /// Both a person and a vehicle were searched.
    #[serde(rename = "Person and Vehicle search")]
    #[strum(serialize = "Person and Vehicle search")]
    PersonAndVehicle,
}

/// Gender of the person stopped, as recorded by the officer.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum Gender {
    /// Recorded as male.
    Male,
    /// Recorded as female.
    Female,
    /// Recorded as another gender.
    Other,
}

/// A stop and search incident.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopAndSearch {
    /// What was searched.
    pub search_type: StopAndSearchType,
    /// Whether a person was searched (as opposed to a vehicle only).
    pub involved_person: bool,
    /// When the stop happened.
    pub datetime: DateTime<Utc>,
    /// Whether the stop was part of a policing operation, when recorded.
    pub operation: Option<bool>,
    /// Name of the policing operation, when recorded.
    pub operation_name: Option<String>,
    /// Approximate location of the stop.
    pub location: Option<Location>,
    /// Gender of the person stopped, when recorded.
    pub gender: Option<Gender>,
    /// Age range of the person stopped, when recorded (e.g. `"18-24"`).
    pub age_range: Option<String>,
    /// Ethnicity as described by the person stopped.
    pub self_defined_ethnicity: Option<String>,
    /// Ethnicity as recorded by the officer.
    pub officer_defined_ethnicity: Option<String>,
    /// The power used to carry out the stop.
    pub legislation: Option<String>,
    /// What the officer searched for.
    pub object_of_search: Option<String>,
    /// Outcome of the stop, when recorded.
    pub outcome: Option<String>,
    /// Whether the outcome was related to the object of the search, when
    /// recorded.
    pub outcome_linked_to_object_of_search: Option<bool>,
    /// Whether more than outer clothing was removed, when recorded.
    pub removal_of_more_than_outer_clothing: Option<bool>,
}
