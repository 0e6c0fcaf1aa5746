#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Data set availability operations.
//!
//! [`AvailabilityService`] reports which months of street-level data exist
//! (`/crimes-street-dates`) and when the upstream data was last refreshed
//! (`/crime-last-updated`). The data set list is cached; the last-updated
//! probe always goes to the network since its whole point is freshness.

pub mod models;
mod wire;

use std::sync::Arc;

use chrono::NaiveDate;
use police_uk_cache::{CacheKey, CacheStore};
use police_uk_client::{ApiClient, ApiError, Endpoint, PoliceClient};

use models::DataSet;
use wire::{DataSetRecord, LastUpdatedRecord};

/// Errors from availability operations.
#[derive(Debug, thiserror::Error)]
pub enum AvailabilityError {
    /// The upstream API has no data for the requested resource.
    #[error("availability data not found")]
    NotFound,

    /// The HTTP transport failed.
    #[error("HTTP request failed: {0}")]
    Network(#[source] reqwest::Error),

    /// The response body did not match the expected schema.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// Any other unexpected upstream response.
    #[error("unexpected response from the upstream API")]
    Unknown,
}

impl From<ApiError> for AvailabilityError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::Network(e) => Self::Network(e),
            ApiError::NotFound => Self::NotFound,
            ApiError::Decode(e) => Self::Decode(e),
            ApiError::Unknown => Self::Unknown,
        }
    }
}

/// Façade over the availability endpoints.
pub struct AvailabilityService {
    client: Arc<dyn PoliceClient>,
    store: Arc<CacheStore>,
}

impl AvailabilityService {
    /// Creates a service with the production client and the process-wide
    /// cache store.
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(Arc::new(ApiClient::new()), CacheStore::shared())
    }

    /// Creates a service with an injected client and cache store.
    #[must_use]
    pub fn with_parts(client: Arc<dyn PoliceClient>, store: Arc<CacheStore>) -> Self {
        Self { client, store }
    }

    fn data_sets_key() -> CacheKey {
        CacheKey::new("availability-data-sets")
    }

    /// All months of street-level data the upstream holds, newest first,
    /// with the forces that provided stop and search data for each month.
    ///
    /// # Errors
    ///
    /// Returns [`AvailabilityError`] if the request fails or the response
    /// cannot be decoded.
    pub async fn available_data_sets(&self) -> Result<Vec<DataSet>, AvailabilityError> {
        if let Some(data_sets) = self.store.get(&Self::data_sets_key()).await {
            log::debug!("Available data sets served from cache");
            return Ok(data_sets);
        }

        let endpoint = Endpoint::new("/crimes-street-dates");
        let records: Vec<DataSetRecord> =
            police_uk_client::get(self.client.as_ref(), &endpoint).await?;
        let data_sets: Vec<DataSet> = records.into_iter().map(DataSet::from).collect();

        self.store.set(Self::data_sets_key(), &data_sets).await;
        Ok(data_sets)
    }

    /// The date the upstream data was last refreshed.
    ///
    /// # Errors
    ///
    /// Returns [`AvailabilityError`] if the request fails or the response
    /// cannot be decoded.
    pub async fn last_updated(&self) -> Result<NaiveDate, AvailabilityError> {
        let endpoint = Endpoint::new("/crime-last-updated");
        let record: LastUpdatedRecord =
            police_uk_client::get(self.client.as_ref(), &endpoint).await?;

        Ok(record.date)
    }
}

impl Default for AvailabilityService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;

    struct StubClient {
        body: serde_json::Value,
        calls: AtomicUsize,
    }

    impl StubClient {
        fn new(body: serde_json::Value) -> Arc<Self> {
            Arc::new(Self {
                body,
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PoliceClient for StubClient {
        async fn fetch_value(&self, _endpoint: &Endpoint) -> Result<serde_json::Value, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.body.clone())
        }
    }

    #[tokio::test]
    async fn data_sets_decode_and_cache() {
        let client = StubClient::new(json!([
            {"date": "2023-03", "stop-and-search": ["bedfordshire", "cleveland"]},
            {"date": "2023-02", "stop-and-search": []}
        ]));
        let store = Arc::new(CacheStore::new());
        let service = AvailabilityService::with_parts(client.clone(), store.clone());

        let first = service.available_data_sets().await.unwrap();
        let second = service.available_data_sets().await.unwrap();

        assert_eq!(first.len(), 2);
        assert_eq!(
            first[0].month,
            NaiveDate::from_ymd_opt(2023, 3, 1).unwrap()
        );
        assert_eq!(first[0].stop_and_search, vec!["bedfordshire", "cleveland"]);
        assert_eq!(first, second);
        assert_eq!(client.calls(), 1);
    }

    #[tokio::test]
    async fn last_updated_bypasses_the_cache() {
        let client = StubClient::new(json!({"date": "2023-03-01"}));
        let store = Arc::new(CacheStore::new());
        let service = AvailabilityService::with_parts(client.clone(), store.clone());

        let first = service.last_updated().await.unwrap();
        let second = service.last_updated().await.unwrap();

        assert_eq!(first, NaiveDate::from_ymd_opt(2023, 3, 1).unwrap());
        assert_eq!(first, second);
        assert_eq!(client.calls(), 2);
        assert!(store.is_empty().await);
    }
}
