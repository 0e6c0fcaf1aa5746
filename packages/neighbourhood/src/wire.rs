//! Wire-format neighbourhood records as returned by the upstream API.
//!
//! Field names mirror the upstream JSON keys exactly, including the
//! hyphenated priority date keys and the `url_force` website key.
//! Coordinates and populations arrive as strings; values that do not parse
//! coalesce to absent fields, and boundary points that do not parse are
//! dropped.

use chrono::NaiveDateTime;
use police_uk_force::models::{ContactDetails, PoliceOfficer};
use police_uk_force::wire::{ContactDetailsRecord, PoliceOfficerRecord};
use police_uk_geography::Coordinate;
use serde::Deserialize;

use crate::models::{
    Link, Neighbourhood, NeighbourhoodEvent, NeighbourhoodLocation, NeighbourhoodPolicingTeam,
    NeighbourhoodPriority, NeighbourhoodReference,
};

#[derive(Debug, Deserialize)]
pub(crate) struct NeighbourhoodReferenceRecord {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NeighbourhoodRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url_force: Option<String>,
    #[serde(default)]
    pub population: Option<String>,
    #[serde(default)]
    pub contact_details: ContactDetailsRecord,
    #[serde(default)]
    pub centre: Option<CentrePointRecord>,
    #[serde(default)]
    pub links: Vec<LinkRecord>,
    #[serde(default)]
    pub locations: Vec<NeighbourhoodLocationRecord>,
}

/// A bare coordinate pair serialised as strings.
#[derive(Debug, Deserialize)]
pub(crate) struct CentrePointRecord {
    pub latitude: String,
    pub longitude: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LinkRecord {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NeighbourhoodLocationRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
    #[serde(default)]
    pub postcode: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub telephone: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NeighbourhoodEventRecord {
    pub title: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub start_date: NaiveDateTime,
    #[serde(default)]
    pub end_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub contact_details: ContactDetailsRecord,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NeighbourhoodPriorityRecord {
    pub issue: String,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default, rename = "issue-date")]
    pub issue_date: Option<NaiveDateTime>,
    #[serde(default, rename = "action-date")]
    pub action_date: Option<NaiveDateTime>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PolicingTeamRecord {
    pub force: String,
    pub neighbourhood: String,
}

fn parse_coordinate(latitude: &str, longitude: &str) -> Option<Coordinate> {
    match (latitude.parse(), longitude.parse()) {
        (Ok(latitude), Ok(longitude)) => Some(Coordinate::new(latitude, longitude)),
        _ => None,
    }
}

/// Converts a boundary response into coordinates, dropping points whose
/// values do not parse.
pub(crate) fn boundary_coordinates(points: Vec<CentrePointRecord>) -> Vec<Coordinate> {
    points
        .into_iter()
        .filter_map(|point| parse_coordinate(&point.latitude, &point.longitude))
        .collect()
}

impl From<NeighbourhoodReferenceRecord> for NeighbourhoodReference {
    fn from(record: NeighbourhoodReferenceRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
        }
    }
}

impl From<NeighbourhoodRecord> for Neighbourhood {
    fn from(record: NeighbourhoodRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            description: record.description,
            force_url: record.url_force,
            population: record.population.and_then(|value| value.parse().ok()),
            contact_details: ContactDetails::from(record.contact_details),
            centre: record
                .centre
                .and_then(|centre| parse_coordinate(&centre.latitude, &centre.longitude)),
            links: record.links.into_iter().map(Link::from).collect(),
            locations: record
                .locations
                .into_iter()
                .map(NeighbourhoodLocation::from)
                .collect(),
        }
    }
}

impl From<LinkRecord> for Link {
    fn from(record: LinkRecord) -> Self {
        Self {
            title: record.title,
            description: record.description,
            url: record.url,
        }
    }
}

impl From<NeighbourhoodLocationRecord> for NeighbourhoodLocation {
    fn from(record: NeighbourhoodLocationRecord) -> Self {
        let coordinate = match (&record.latitude, &record.longitude) {
            (Some(latitude), Some(longitude)) => parse_coordinate(latitude, longitude),
            _ => None,
        };

        Self {
            name: record.name,
            kind: record.kind,
            coordinate,
            postcode: record.postcode,
            address: record.address,
            telephone: record.telephone,
            description: record.description,
        }
    }
}

impl From<NeighbourhoodEventRecord> for NeighbourhoodEvent {
    fn from(record: NeighbourhoodEventRecord) -> Self {
        Self {
            title: record.title,
            kind: record.kind,
            description: record.description,
            address: record.address,
            start_date: record.start_date,
            end_date: record.end_date,
            contact_details: ContactDetails::from(record.contact_details),
        }
    }
}

impl From<NeighbourhoodPriorityRecord> for NeighbourhoodPriority {
    fn from(record: NeighbourhoodPriorityRecord) -> Self {
        Self {
            issue: record.issue,
            action: record.action,
            issue_date: record.issue_date,
            action_date: record.action_date,
        }
    }
}

impl From<PolicingTeamRecord> for NeighbourhoodPolicingTeam {
    fn from(record: PolicingTeamRecord) -> Self {
        Self {
            force: record.force,
            neighbourhood: record.neighbourhood,
        }
    }
}

pub(crate) fn officers(records: Vec<PoliceOfficerRecord>) -> Vec<PoliceOfficer> {
    records.into_iter().map(PoliceOfficer::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_a_neighbourhood_detail() {
        let record: NeighbourhoodRecord = serde_json::from_value(serde_json::json!({
            "url_force": "http://www.leics.police.uk/local-policing/city-centre",
            "contact_details": {
                "twitter": "http://www.twitter.com/centralleicsNPA",
                "telephone": "101",
                "email": "centralleicester.npa@leicestershire.pnn.police.uk"
            },
            "name": "City Centre",
            "links": [{
                "url": "http://www.leicester.gov.uk/",
                "description": null,
                "title": "Leicester City Council"
            }],
            "centre": {"latitude": "52.6389", "longitude": "-1.13619"},
            "locations": [{
                "name": "Mansfield House",
                "longitude": "-1.12978",
                "postcode": "LE1 3GG",
                "address": "74 Belgrave Gate, Leicester",
                "latitude": "52.6404",
                "type": "station",
                "description": null,
                "telephone": null
            }],
            "description": "<p>The Castle neighbourhood covers the city centre.</p>",
            "id": "NC04",
            "population": "9056"
        }))
        .unwrap();

        let neighbourhood = Neighbourhood::from(record);

        assert_eq!(neighbourhood.id, "NC04");
        assert_eq!(neighbourhood.population, Some(9056));
        assert_eq!(
            neighbourhood.centre,
            Some(Coordinate::new(52.6389, -1.13619))
        );
        assert_eq!(
            neighbourhood.contact_details.telephone.as_deref(),
            Some("101")
        );
        assert_eq!(neighbourhood.locations[0].kind.as_deref(), Some("station"));
        assert_eq!(neighbourhood.links[0].title, "Leicester City Council");
    }

    #[test]
    fn unparseable_population_and_centre_coalesce_to_none() {
        let record: NeighbourhoodRecord = serde_json::from_value(serde_json::json!({
            "id": "NC04",
            "name": "City Centre",
            "population": "unknown",
            "centre": {"latitude": "n/a", "longitude": "-1.13619"}
        }))
        .unwrap();

        let neighbourhood = Neighbourhood::from(record);
        assert_eq!(neighbourhood.population, None);
        assert_eq!(neighbourhood.centre, None);
    }

    #[test]
    fn boundary_drops_unparseable_points() {
        let points: Vec<CentrePointRecord> = serde_json::from_value(serde_json::json!([
            {"latitude": "52.6394", "longitude": "-1.1458"},
            {"latitude": "bad", "longitude": "-1.1457"},
            {"latitude": "52.6389", "longitude": "-1.1456"}
        ]))
        .unwrap();

        let boundary = boundary_coordinates(points);

        assert_eq!(
            boundary,
            vec![
                Coordinate::new(52.6394, -1.1458),
                Coordinate::new(52.6389, -1.1456),
            ]
        );
    }

    #[test]
    fn maps_priorities_with_hyphenated_date_keys() {
        let record: NeighbourhoodPriorityRecord = serde_json::from_value(serde_json::json!({
            "action": null,
            "issue": "<p>To reduce street drinking in the city centre</p>",
            "issue-date": "2023-04-14T00:00:00",
            "action-date": null
        }))
        .unwrap();

        let priority = NeighbourhoodPriority::from(record);

        assert_eq!(priority.action, None);
        assert_eq!(
            priority.issue_date,
            Some(
                chrono::NaiveDate::from_ymd_opt(2023, 4, 14)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap()
            )
        );
    }

    #[test]
    fn maps_an_event() {
        let record: NeighbourhoodEventRecord = serde_json::from_value(serde_json::json!({
            "contact_details": {},
            "description": null,
            "title": "Beat surgery",
            "address": "Town Hall, Leicester",
            "type": "meeting",
            "start_date": "2023-09-17T12:00:00",
            "end_date": "2023-09-17T14:00:00"
        }))
        .unwrap();

        let event = NeighbourhoodEvent::from(record);

        assert_eq!(event.kind.as_deref(), Some("meeting"));
        assert!(event.end_date.is_some());
    }
}
