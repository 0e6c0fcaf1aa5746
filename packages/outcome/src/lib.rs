#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Street-level outcome and case history operations.
//!
//! [`OutcomeService`] covers the `/outcomes-at-location` and
//! `/outcomes-for-crime` endpoint families. Outcome queries are keyed by
//! coordinate, boundary, or free month and are therefore not cached; the
//! endpoints are not geographically gated.

pub mod models;
mod wire;

use std::sync::Arc;

use chrono::NaiveDate;
use police_uk_client::{ApiClient, ApiError, Endpoint, PoliceClient, dates, query};
use police_uk_geography::Coordinate;

use models::{CaseHistory, Outcome};
use wire::{CaseHistoryRecord, OutcomeRecord};

/// Errors from outcome operations.
#[derive(Debug, thiserror::Error)]
pub enum OutcomeError {
    /// The upstream API has no data for the requested parameters.
    #[error("no outcome data found for the requested parameters")]
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

impl From<ApiError> for OutcomeError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::Network(e) => Self::Network(e),
            ApiError::NotFound => Self::NotFound,
            ApiError::Decode(e) => Self::Decode(e),
            ApiError::Unknown => Self::Unknown,
        }
    }
}

/// Façade over the outcome endpoints.
pub struct OutcomeService {
    client: Arc<dyn PoliceClient>,
}

impl OutcomeService {
    /// Creates a service with the production client.
    #[must_use]
    pub fn new() -> Self {
        Self::with_client(Arc::new(ApiClient::new()))
    }

    /// Creates a service with an injected client.
    #[must_use]
    pub fn with_client(client: Arc<dyn PoliceClient>) -> Self {
        Self { client }
    }

    /// Outcomes recorded at a specific street identifier.
    ///
    /// `date` defaults to the current month.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError`] if the request fails or the response cannot
    /// be decoded.
    pub async fn street_level_outcomes(
        &self,
        location_id: i64,
        date: Option<NaiveDate>,
    ) -> Result<Vec<Outcome>, OutcomeError> {
        let endpoint = Endpoint::new("/outcomes-at-location")
            .with("location_id", location_id.to_string())
            .with("date", query::month(resolve_date(date)));

        self.fetch_outcomes(&endpoint).await
    }

    /// Outcomes recorded within one mile of a coordinate.
    ///
    /// `date` defaults to the current month.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError`] if the request fails or the response cannot
    /// be decoded.
    pub async fn street_level_outcomes_at_coordinate(
        &self,
        coordinate: Coordinate,
        date: Option<NaiveDate>,
    ) -> Result<Vec<Outcome>, OutcomeError> {
        let (lat, lng) = query::coordinate_pair(coordinate);
        let endpoint = Endpoint::new("/outcomes-at-location")
            .with("lat", lat)
            .with("lng", lng)
            .with("date", query::month(resolve_date(date)));

        self.fetch_outcomes(&endpoint).await
    }

    /// Outcomes recorded within a custom boundary.
    ///
    /// The boundary is passed through in input order; repeat the first
    /// coordinate to close the polygon. `date` defaults to the current
    /// month.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError`] if the request fails or the response cannot
    /// be decoded.
    pub async fn street_level_outcomes_in_area(
        &self,
        boundary: &[Coordinate],
        date: Option<NaiveDate>,
    ) -> Result<Vec<Outcome>, OutcomeError> {
        let endpoint = Endpoint::new("/outcomes-at-location")
            .with("poly", query::polygon(boundary))
            .with("date", query::month(resolve_date(date)));

        self.fetch_outcomes(&endpoint).await
    }

    /// The full outcome history of a crime, looked up by its 64-character
    /// stable identifier.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::NotFound`] when the upstream has no case
    /// history for the identifier, or another [`OutcomeError`] for
    /// transport and decode failures.
    pub async fn case_history(&self, crime_id: &str) -> Result<CaseHistory, OutcomeError> {
        let endpoint = Endpoint::new(format!("/outcomes-for-crime/{crime_id}"));
        let record: CaseHistoryRecord =
            police_uk_client::get(self.client.as_ref(), &endpoint).await?;

        Ok(record.into())
    }

    async fn fetch_outcomes(&self, endpoint: &Endpoint) -> Result<Vec<Outcome>, OutcomeError> {
        let records: Vec<OutcomeRecord> =
            police_uk_client::get(self.client.as_ref(), endpoint).await?;
        Ok(records.into_iter().map(Outcome::from).collect())
    }
}

impl Default for OutcomeService {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve_date(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(dates::today)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;

    struct StubClient {
        body: serde_json::Value,
        last_endpoint: Mutex<Option<Endpoint>>,
    }

    impl StubClient {
        fn new(body: serde_json::Value) -> Arc<Self> {
            Arc::new(Self {
                body,
                last_endpoint: Mutex::new(None),
            })
        }

        fn last_url(&self) -> String {
            self.last_endpoint
                .lock()
                .unwrap()
                .as_ref()
                .expect("no request was issued")
                .url("")
        }
    }

    #[async_trait]
    impl PoliceClient for StubClient {
        async fn fetch_value(&self, endpoint: &Endpoint) -> Result<serde_json::Value, ApiError> {
            *self.last_endpoint.lock().unwrap() = Some(endpoint.clone());
            Ok(self.body.clone())
        }
    }

    struct NotFoundClient;

    #[async_trait]
    impl PoliceClient for NotFoundClient {
        async fn fetch_value(&self, _endpoint: &Endpoint) -> Result<serde_json::Value, ApiError> {
            Err(ApiError::NotFound)
        }
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[tokio::test]
    async fn coordinate_query_builds_the_documented_url() {
        let client = StubClient::new(json!([]));
        let service = OutcomeService::with_client(client.clone());

        service
            .street_level_outcomes_at_coordinate(
                Coordinate::new(52.6389, -1.13619),
                Some(date(2021, 4, 20)),
            )
            .await
            .unwrap();

        assert_eq!(
            client.last_url(),
            "/outcomes-at-location?lat=52.6389&lng=-1.13619&date=2021-04"
        );
    }

    #[tokio::test]
    async fn location_query_uses_the_street_identifier() {
        let client = StubClient::new(json!([]));
        let service = OutcomeService::with_client(client.clone());

        service
            .street_level_outcomes(883_425, Some(date(2021, 4, 1)))
            .await
            .unwrap();

        assert_eq!(
            client.last_url(),
            "/outcomes-at-location?location_id=883425&date=2021-04"
        );
    }

    #[tokio::test]
    async fn case_history_addresses_the_crime_by_path() {
        let client = StubClient::new(json!({
            "crime": {"category": "violent-crime", "id": 1, "month": "2023-05"},
            "outcomes": []
        }));
        let service = OutcomeService::with_client(client.clone());

        let history = service.case_history("abc123").await.unwrap();

        assert_eq!(client.last_url(), "/outcomes-for-crime/abc123");
        assert!(history.outcomes.is_empty());
    }

    #[tokio::test]
    async fn case_history_not_found_is_typed() {
        let service = OutcomeService::with_client(Arc::new(NotFoundClient));

        let result = service.case_history("missing").await;

        assert!(matches!(result, Err(OutcomeError::NotFound)));
    }
}
