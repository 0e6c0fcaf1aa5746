//! Domain models for police force data.
//!
//! [`ContactDetails`] and [`PoliceOfficer`] are shared with the
//! neighbourhood resource, whose people endpoint returns the same shapes.

use serde::{Deserialize, Serialize};

/// A police force as listed by `/forces`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoliceForceReference {
    /// Force identifier used in request paths (e.g. `"leicestershire"`).
    pub id: String,
    /// Human-readable name.
    pub name: String,
}

/// Full details of a police force.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoliceForce {
    /// Force identifier used in request paths.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Free-text description, when published.
    pub description: Option<String>,
    /// Non-emergency telephone number.
    pub telephone: Option<String>,
    /// Force website.
    pub url: Option<String>,
    /// Ways to keep informed about force activity.
    pub engagement_methods: Vec<EngagementMethod>,
}

/// One way of engaging with a force (website, social media, newsletter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementMethod {
    /// Method title (e.g. `"Facebook"`).
    pub title: String,
    /// Free-text description, when published.
    pub description: Option<String>,
    /// Link for the method.
    pub url: Option<String>,
}

/// Contact details published for a force, officer, or neighbourhood.
///
/// Every field is optional; the upstream omits whatever is not published.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    /// Email address.
    pub email: Option<String>,
    /// Telephone number.
    pub telephone: Option<String>,
    /// Mobile number.
    pub mobile: Option<String>,
    /// Fax number.
    pub fax: Option<String>,
    /// Website.
    pub web: Option<String>,
    /// Postal address.
    pub address: Option<String>,
    /// Facebook profile.
    pub facebook: Option<String>,
    /// Twitter profile.
    pub twitter: Option<String>,
    /// YouTube channel.
    pub youtube: Option<String>,
    /// Blog.
    pub blog: Option<String>,
}

/// A police officer attached to a force or neighbourhood policing team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoliceOfficer {
    /// Officer name.
    pub name: String,
    /// Officer rank, when published.
    pub rank: Option<String>,
    /// Officer biography, when published. May contain HTML.
    pub bio: Option<String>,
    /// Ways of contacting the officer.
    pub contact_details: ContactDetails,
}
