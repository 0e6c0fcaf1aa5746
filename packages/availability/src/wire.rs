//! Wire-format availability records as returned by the upstream API.
//!
//! The data set list uses the hyphenated `stop-and-search` key.

use chrono::NaiveDate;
use police_uk_client::dates;
use serde::Deserialize;

use crate::models::DataSet;

#[derive(Debug, Deserialize)]
pub(crate) struct DataSetRecord {
    #[serde(deserialize_with = "dates::deserialize_month")]
    pub date: NaiveDate,
    #[serde(default, rename = "stop-and-search")]
    pub stop_and_search: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LastUpdatedRecord {
    pub date: NaiveDate,
}

impl From<DataSetRecord> for DataSet {
    fn from(record: DataSetRecord) -> Self {
        Self {
            month: record.date,
            stop_and_search: record.stop_and_search,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_the_hyphenated_force_list_key() {
        let record: DataSetRecord = serde_json::from_value(serde_json::json!({
            "date": "2015-06",
            "stop-and-search": ["bedfordshire", "city-of-london"]
        }))
        .unwrap();

        let data_set = DataSet::from(record);

        assert_eq!(data_set.month, NaiveDate::from_ymd_opt(2015, 6, 1).unwrap());
        assert_eq!(data_set.stop_and_search.len(), 2);
    }

    #[test]
    fn malformed_month_fails_deserialization() {
        let result: Result<DataSetRecord, _> = serde_json::from_value(serde_json::json!({
            "date": "June 2015",
            "stop-and-search": []
        }));
        assert!(result.is_err());
    }
}
