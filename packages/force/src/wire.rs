//! Wire-format police force records as returned by the upstream API.
//!
//! Field names mirror the upstream JSON keys exactly. These records are
//! public because the neighbourhood resource embeds officers and contact
//! details in its own responses.

use serde::Deserialize;

use crate::models::{
    ContactDetails, EngagementMethod, PoliceForce, PoliceForceReference, PoliceOfficer,
};

#[derive(Debug, Deserialize)]
pub struct PoliceForceReferenceRecord {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct PoliceForceRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub telephone: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub engagement_methods: Vec<EngagementMethodRecord>,
}

#[derive(Debug, Deserialize)]
pub struct EngagementMethodRecord {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ContactDetailsRecord {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub telephone: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub fax: Option<String>,
    #[serde(default)]
    pub web: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub youtube: Option<String>,
    #[serde(default)]
    pub blog: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PoliceOfficerRecord {
    pub name: String,
    #[serde(default)]
    pub rank: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub contact_details: ContactDetailsRecord,
}

impl From<PoliceForceReferenceRecord> for PoliceForceReference {
    fn from(record: PoliceForceReferenceRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
        }
    }
}

impl From<PoliceForceRecord> for PoliceForce {
    fn from(record: PoliceForceRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            description: record.description,
            telephone: record.telephone,
            url: record.url,
            engagement_methods: record
                .engagement_methods
                .into_iter()
                .map(EngagementMethod::from)
                .collect(),
        }
    }
}

impl From<EngagementMethodRecord> for EngagementMethod {
    fn from(record: EngagementMethodRecord) -> Self {
        Self {
            title: record.title,
            description: record.description,
            url: record.url,
        }
    }
}

impl From<ContactDetailsRecord> for ContactDetails {
    fn from(record: ContactDetailsRecord) -> Self {
        Self {
            email: record.email,
            telephone: record.telephone,
            mobile: record.mobile,
            fax: record.fax,
            web: record.web,
            address: record.address,
            facebook: record.facebook,
            twitter: record.twitter,
            youtube: record.youtube,
            blog: record.blog,
        }
    }
}

impl From<PoliceOfficerRecord> for PoliceOfficer {
    fn from(record: PoliceOfficerRecord) -> Self {
        Self {
            name: record.name,
            rank: record.rank,
            bio: record.bio,
            contact_details: record.contact_details.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_a_force_with_engagement_methods() {
        let record: PoliceForceRecord = serde_json::from_value(serde_json::json!({
            "description": null,
            "url": "http://www.leics.police.uk/",
            "engagement_methods": [
                {
                    "url": "http://www.facebook.com/leicspolice",
                    "description": "Become a fan of Leicestershire Police on Facebook",
                    "title": "Facebook"
                },
                {
                    "url": "http://www.twitter.com/leicspolice",
                    "description": null,
                    "title": "Twitter"
                }
            ],
            "telephone": "101",
            "id": "leicestershire",
            "name": "Leicestershire Police"
        }))
        .unwrap();

        let force = PoliceForce::from(record);

        assert_eq!(force.id, "leicestershire");
        assert_eq!(force.description, None);
        assert_eq!(force.engagement_methods.len(), 2);
        assert_eq!(force.engagement_methods[1].title, "Twitter");
    }

    #[test]
    fn maps_an_officer_with_sparse_contact_details() {
        let record: PoliceOfficerRecord = serde_json::from_value(serde_json::json!({
            "name": "Rob Nixon",
            "rank": "Chief Constable",
            "bio": null,
            "contact_details": {"twitter": "http://www.twitter.com/CCLeicsPolice"}
        }))
        .unwrap();

        let officer = PoliceOfficer::from(record);

        assert_eq!(officer.rank.as_deref(), Some("Chief Constable"));
        assert_eq!(
            officer.contact_details.twitter.as_deref(),
            Some("http://www.twitter.com/CCLeicsPolice")
        );
        assert_eq!(officer.contact_details.email, None);
    }

    #[test]
    fn missing_contact_details_default_to_empty() {
        let record: PoliceOfficerRecord = serde_json::from_value(serde_json::json!({
            "name": "Andy Cooper"
        }))
        .unwrap();

        let officer = PoliceOfficer::from(record);
        assert_eq!(officer.contact_details, ContactDetails::default());
    }
}
