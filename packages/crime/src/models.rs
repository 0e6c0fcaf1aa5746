//! Domain models for street-level crime data.
//!
//! These are the fully-populated, immutable values exposed to library
//! consumers, assembled from the wire records in [`crate::wire`]. Optional
//! fields reflect nullability in the upstream API.

use chrono::NaiveDate;
use police_uk_geography::Coordinate;
use serde::{Deserialize, Serialize};

/// A reported crime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crime {
    /// Upstream numeric identifier for this record.
    pub id: i64,
    /// 64-character stable identifier; empty when the upstream has not yet
    /// assigned one.
    pub crime_id: String,
    /// Crime category identifier (e.g. `"anti-social-behaviour"`).
    pub category: String,
    /// Extra context supplied by the reporting force.
    pub context: Option<String>,
    /// The month the crime was reported, pinned to the first day.
    pub month: NaiveDate,
    /// Anonymised location the report was snapped to.
    pub location: Option<Location>,
    /// Granularity of the location snap (e.g. `"Force"` or `"BTP"`).
    pub location_type: Option<String>,
    /// Location subtype for British Transport Police records.
    pub location_subtype: Option<String>,
    /// Latest outcome recorded against the crime, if any.
    pub outcome_status: Option<OutcomeStatus>,
}

/// An anonymised snap-point location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Snap-point coordinate; absent when the upstream values do not parse
    /// as numbers.
    pub coordinate: Option<Coordinate>,
    /// The street of the snap point.
    pub street: Street,
}

/// The approximate street a location was snapped to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Street {
    /// Upstream street identifier.
    pub id: i64,
    /// Street description (e.g. `"On or near Marquis Street"`).
    pub name: String,
}

/// Latest outcome recorded against a crime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeStatus {
    /// Human-readable outcome category.
    pub category: String,
    /// The month the outcome was recorded, pinned to the first day.
    pub date: NaiveDate,
}

/// A crime category known to the upstream API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrimeCategory {
    /// Category identifier used in query parameters (e.g. `"burglary"`).
    pub id: String,
    /// Human-readable name (e.g. `"Burglary"`).
    pub name: String,
}
