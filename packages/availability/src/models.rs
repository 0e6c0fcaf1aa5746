//! Domain models for data set availability.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One month of available street-level data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSet {
    /// The month the data covers, pinned to the first day.
    pub month: NaiveDate,
    /// Identifiers of the forces that provided stop and search data for
    /// this month.
    pub stop_and_search: Vec<String>,
}
