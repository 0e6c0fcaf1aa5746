//! Wire-format outcome records as returned by the upstream API.
//!
//! Field names mirror the upstream JSON keys exactly. Street-level outcome
//! records embed a full crime record; case-history outcomes do not.

use chrono::NaiveDate;
use police_uk_client::dates;
use police_uk_crime::models::Crime;
use police_uk_crime::wire::CrimeRecord;
use serde::Deserialize;

use crate::models::{CaseHistory, CaseOutcome, Outcome, OutcomeCategory};

#[derive(Debug, Deserialize)]
pub(crate) struct OutcomeCategoryRecord {
    pub code: String,
    pub name: String,
}

/// An outcome from `/outcomes-at-location`.
#[derive(Debug, Deserialize)]
pub(crate) struct OutcomeRecord {
    pub category: OutcomeCategoryRecord,
    #[serde(deserialize_with = "dates::deserialize_month")]
    pub date: NaiveDate,
    #[serde(default)]
    pub person_id: Option<i64>,
    pub crime: CrimeRecord,
}

/// An outcome within a `/outcomes-for-crime/{id}` case history.
#[derive(Debug, Deserialize)]
pub(crate) struct CaseOutcomeRecord {
    pub category: OutcomeCategoryRecord,
    #[serde(deserialize_with = "dates::deserialize_month")]
    pub date: NaiveDate,
    #[serde(default)]
    pub person_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CaseHistoryRecord {
    pub crime: CrimeRecord,
    pub outcomes: Vec<CaseOutcomeRecord>,
}

impl From<OutcomeCategoryRecord> for OutcomeCategory {
    fn from(record: OutcomeCategoryRecord) -> Self {
        Self {
            code: record.code,
            name: record.name,
        }
    }
}

impl From<OutcomeRecord> for Outcome {
    fn from(record: OutcomeRecord) -> Self {
        Self {
            category: record.category.into(),
            date: record.date,
            person_id: record.person_id,
            crime: Crime::from(record.crime),
        }
    }
}

impl From<CaseOutcomeRecord> for CaseOutcome {
    fn from(record: CaseOutcomeRecord) -> Self {
        Self {
            category: record.category.into(),
            date: record.date,
            person_id: record.person_id,
        }
    }
}

impl From<CaseHistoryRecord> for CaseHistory {
    fn from(record: CaseHistoryRecord) -> Self {
        Self {
            crime: Crime::from(record.crime),
            outcomes: record.outcomes.into_iter().map(CaseOutcome::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_a_street_level_outcome() {
        let record: OutcomeRecord = serde_json::from_value(serde_json::json!({
            "category": {
                "code": "unable-to-prosecute",
                "name": "Unable to prosecute suspect"
            },
            "date": "2023-01",
            "person_id": null,
            "crime": {
                "category": "theft-from-the-person",
                "location_type": "Force",
                "persistent_id": "598658adb2cb8c9e768ec2e6c44fbfa56a3a6bb4cee33bb4b94b8fa2525dbf0f",
                "id": 54_726_925,
                "month": "2023-01"
            }
        }))
        .unwrap();

        let outcome = Outcome::from(record);

        assert_eq!(outcome.category.code, "unable-to-prosecute");
        assert_eq!(outcome.date, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        assert_eq!(outcome.person_id, None);
        assert_eq!(outcome.crime.category, "theft-from-the-person");
    }

    #[test]
    fn maps_a_case_history() {
        let record: CaseHistoryRecord = serde_json::from_value(serde_json::json!({
            "crime": {
                "category": "violent-crime",
                "persistent_id": "a5e64f19b7e876fa57ef8c2b5e62b1f2c93e4d3a8f7b21dc45ae19c2cb5e6417",
                "id": 82_067_369,
                "month": "2023-05"
            },
            "outcomes": [
                {
                    "category": {"code": "under-investigation", "name": "Under investigation"},
                    "date": "2023-05"
                },
                {
                    "category": {"code": "formal-action-not-in-public-interest",
                                 "name": "Formal action is not in the public interest"},
                    "date": "2023-06"
                }
            ]
        }))
        .unwrap();

        let history = CaseHistory::from(record);

        assert_eq!(history.outcomes.len(), 2);
        assert_eq!(history.outcomes[0].category.code, "under-investigation");
        assert_eq!(
            history.outcomes[1].date,
            NaiveDate::from_ymd_opt(2023, 6, 1).unwrap()
        );
        assert_eq!(history.crime.id, 82_067_369);
    }
}
