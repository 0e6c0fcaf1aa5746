//! Domain models for crime outcome data.

use chrono::NaiveDate;
use police_uk_crime::models::Crime;
use serde::{Deserialize, Serialize};

/// The category of an outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeCategory {
    /// Category identifier (e.g. `"unable-to-prosecute"`).
    pub code: String,
    /// Human-readable name (e.g. `"Unable to prosecute suspect"`).
    pub name: String,
}

/// An outcome recorded at a street-level location, including the crime it
/// belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    /// What was concluded.
    pub category: OutcomeCategory,
    /// The month the outcome was recorded, pinned to the first day.
    pub date: NaiveDate,
    /// Identifier of the person the outcome concerns, when published.
    pub person_id: Option<i64>,
    /// The crime the outcome was recorded against.
    pub crime: Crime,
}

/// One outcome within a crime's case history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseOutcome {
    /// What was concluded.
    pub category: OutcomeCategory,
    /// The month the outcome was recorded, pinned to the first day.
    pub date: NaiveDate,
    /// Identifier of the person the outcome concerns, when published.
    pub person_id: Option<i64>,
}

/// The full outcome history of a single crime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseHistory {
    /// The crime the history belongs to.
    pub crime: Crime,
    /// Outcomes in upstream order, oldest first.
    pub outcomes: Vec<CaseOutcome>,
}
