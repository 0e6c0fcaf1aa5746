//! Domain models for neighbourhood policing data.

use chrono::NaiveDateTime;
use police_uk_force::models::ContactDetails;
use police_uk_geography::Coordinate;
use serde::{Deserialize, Serialize};

/// A neighbourhood as listed by `/{force}/neighbourhoods`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeighbourhoodReference {
    /// Neighbourhood identifier within its force (e.g. `"NC04"`).
    pub id: String,
    /// Human-readable name.
    pub name: String,
}

/// Full details of a neighbourhood.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Neighbourhood {
    /// Neighbourhood identifier within its force.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Free-text description, when published. May contain HTML.
    pub description: Option<String>,
    /// Website of the neighbourhood's police force page.
    pub force_url: Option<String>,
    /// Resident population; absent when the upstream value does not parse
    /// as a number.
    pub population: Option<u32>,
    /// Ways of contacting the policing team.
    pub contact_details: ContactDetails,
    /// Approximate centre of the neighbourhood.
    pub centre: Option<Coordinate>,
    /// Related links published for the neighbourhood.
    pub links: Vec<Link>,
    /// Physical locations attached to the policing team.
    pub locations: Vec<NeighbourhoodLocation>,
}

/// A link published for a neighbourhood.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    /// Link title.
    pub title: String,
    /// Free-text description, when published.
    pub description: Option<String>,
    /// Target URL.
    pub url: Option<String>,
}

/// A physical location attached to a neighbourhood policing team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeighbourhoodLocation {
    /// Location name (e.g. a station name), when published.
    pub name: Option<String>,
    /// Location kind (e.g. `"station"`), when published.
    pub kind: Option<String>,
    /// Coordinate of the location; absent when the upstream values do not
    /// parse as numbers.
    pub coordinate: Option<Coordinate>,
    /// Postcode, when published.
    pub postcode: Option<String>,
    /// Postal address, when published.
    pub address: Option<String>,
    /// Telephone number, when published.
    pub telephone: Option<String>,
    /// Free-text description, when published.
    pub description: Option<String>,
}

/// An event organised by a neighbourhood policing team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeighbourhoodEvent {
    /// Event title.
    pub title: String,
    /// Event kind (e.g. `"meeting"`), when published.
    pub kind: Option<String>,
    /// Free-text description, when published.
    pub description: Option<String>,
    /// Event address, when published.
    pub address: Option<String>,
    /// When the event starts.
    pub start_date: NaiveDateTime,
    /// When the event ends, when published.
    pub end_date: Option<NaiveDateTime>,
    /// Ways of contacting the organisers.
    pub contact_details: ContactDetails,
}

/// A policing priority set for a neighbourhood.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeighbourhoodPriority {
    /// The issue being addressed. May contain HTML.
    pub issue: String,
    /// Action taken against the issue, when published. May contain HTML.
    pub action: Option<String>,
    /// When the issue was raised, when published.
    pub issue_date: Option<NaiveDateTime>,
    /// When the action was recorded, when published.
    pub action_date: Option<NaiveDateTime>,
}

/// The policing team responsible for a coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeighbourhoodPolicingTeam {
    /// Identifier of the force covering the coordinate.
    pub force: String,
    /// Identifier of the neighbourhood covering the coordinate.
    pub neighbourhood: String,
}
