#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Stop and search operations.
//!
//! [`StopAndSearchService`] covers the `/stops-street`,
//! `/stops-at-location`, `/stops-no-location`, and `/stops-force` endpoint
//! families. The single-coordinate search is gated on the available-data
//! region before any network traffic; queries are keyed by coordinate,
//! boundary, or force plus month and are not cached.

pub mod models;
mod wire;

use std::sync::Arc;

use chrono::NaiveDate;
use police_uk_client::{ApiClient, ApiError, Endpoint, PoliceClient, dates, query};
use police_uk_geography::{AVAILABLE_DATA_REGION, Coordinate};

use models::StopAndSearch;
use wire::StopAndSearchRecord;

/// Errors from stop and search operations.
#[derive(Debug, thiserror::Error)]
pub enum StopAndSearchError {
    /// The upstream API has no data for the requested parameters.
    #[error("no stop and search data found for the requested parameters")]
    NotFound,

    /// The coordinate lies outside the available data set region; no
    /// request was attempted.
    #[error("coordinate lies outside of the available data set region")]
    LocationOutsideOfDataSetRegion,

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

impl From<ApiError> for StopAndSearchError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::Network(e) => Self::Network(e),
            ApiError::NotFound => Self::NotFound,
            ApiError::Decode(e) => Self::Decode(e),
            ApiError::Unknown => Self::Unknown,
        }
    }
}

/// Façade over the stop and search endpoints.
pub struct StopAndSearchService {
    client: Arc<dyn PoliceClient>,
}

impl StopAndSearchService {
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

    /// Stop and searches within one mile of a coordinate.
    ///
    /// The coordinate is tested against the available data set region
    /// before any request is issued. `date` defaults to the current month.
    ///
    /// # Errors
    ///
    /// Returns [`StopAndSearchError::LocationOutsideOfDataSetRegion`] when
    /// the coordinate lies outside the upstream coverage area, or another
    /// [`StopAndSearchError`] for transport and decode failures.
    pub async fn stop_and_searches(
        &self,
        coordinate: Coordinate,
        date: Option<NaiveDate>,
    ) -> Result<Vec<StopAndSearch>, StopAndSearchError> {
        if !AVAILABLE_DATA_REGION.contains(coordinate) {
            return Err(StopAndSearchError::LocationOutsideOfDataSetRegion);
        }

        let (lat, lng) = query::coordinate_pair(coordinate);
        let endpoint = Endpoint::new("/stops-street")
            .with("lat", lat)
            .with("lng", lng)
            .with("date", query::month(resolve_date(date)));

        self.fetch_stops(&endpoint).await
    }

    /// Stop and searches within a custom boundary.
    ///
    /// The boundary is passed through in input order; repeat the first
    /// coordinate to close the polygon. `date` defaults to the current
    /// month.
    ///
    /// # Errors
    ///
    /// Returns [`StopAndSearchError`] if the request fails or the response
    /// cannot be decoded.
    pub async fn stop_and_searches_in_area(
        &self,
        boundary: &[Coordinate],
        date: Option<NaiveDate>,
    ) -> Result<Vec<StopAndSearch>, StopAndSearchError> {
        let endpoint = Endpoint::new("/stops-street")
            .with("poly", query::polygon(boundary))
            .with("date", query::month(resolve_date(date)));

        self.fetch_stops(&endpoint).await
    }

    /// Stop and searches at a specific street identifier.
    ///
    /// `date` defaults to the current month.
    ///
    /// # Errors
    ///
    /// Returns [`StopAndSearchError`] if the request fails or the response
    /// cannot be decoded.
    pub async fn stop_and_searches_at_location(
        &self,
        location_id: i64,
        date: Option<NaiveDate>,
    ) -> Result<Vec<StopAndSearch>, StopAndSearchError> {
        let endpoint = Endpoint::new("/stops-at-location")
            .with("location_id", location_id.to_string())
            .with("date", query::month(resolve_date(date)));

        self.fetch_stops(&endpoint).await
    }

    /// Stop and searches a force could not map to a location.
    ///
    /// `date` defaults to the current month.
    ///
    /// # Errors
    ///
    /// Returns [`StopAndSearchError`] if the request fails or the response
    /// cannot be decoded.
    pub async fn stop_and_searches_with_no_location(
        &self,
        police_force_id: &str,
        date: Option<NaiveDate>,
    ) -> Result<Vec<StopAndSearch>, StopAndSearchError> {
        let endpoint = Endpoint::new("/stops-no-location")
            .with("force", police_force_id)
            .with("date", query::month(resolve_date(date)));

        self.fetch_stops(&endpoint).await
    }

    /// All stop and searches reported by one force.
    ///
    /// `date` defaults to the current month.
    ///
    /// # Errors
    ///
    /// Returns [`StopAndSearchError`] if the request fails or the response
    /// cannot be decoded.
    pub async fn stop_and_searches_for_force(
        &self,
        police_force_id: &str,
        date: Option<NaiveDate>,
    ) -> Result<Vec<StopAndSearch>, StopAndSearchError> {
        let endpoint = Endpoint::new("/stops-force")
            .with("force", police_force_id)
            .with("date", query::month(resolve_date(date)));

        self.fetch_stops(&endpoint).await
    }

    async fn fetch_stops(
        &self,
        endpoint: &Endpoint,
    ) -> Result<Vec<StopAndSearch>, StopAndSearchError> {
        let records: Vec<StopAndSearchRecord> =
            police_uk_client::get(self.client.as_ref(), endpoint).await?;
        Ok(records.into_iter().map(StopAndSearch::from).collect())
    }
}

impl Default for StopAndSearchService {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve_date(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(dates::today)
}
