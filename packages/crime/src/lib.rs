#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Street-level crime operations.
//!
//! [`CrimeService`] composes endpoint construction, the shared response
//! cache, the HTTP client, and wire-to-domain mapping for the
//! `/crimes-street`, `/crimes-at-location`, `/crimes-no-location`, and
//! `/crime-categories` endpoint families. Crime endpoints are not
//! geographically gated: out-of-region coordinates are sent upstream and
//! surface as whatever the API returns.

mod cache;
pub mod models;
pub mod wire;

use std::sync::Arc;

use chrono::NaiveDate;
use police_uk_cache::CacheStore;
use police_uk_client::{ApiClient, ApiError, Endpoint, PoliceClient, dates, query};
use police_uk_geography::Coordinate;

use cache::CrimeCache;
use models::{Crime, CrimeCategory};
use wire::{CrimeCategoryRecord, CrimeRecord};

/// Category segment used for street-level queries. The upstream also
/// accepts specific category identifiers; this service always queries
/// across all of them.
const ALL_CRIME: &str = "all-crime";

/// Errors from crime operations.
#[derive(Debug, thiserror::Error)]
pub enum CrimeError {
    /// The upstream API has no data for the requested parameters.
    #[error("no crime data found for the requested parameters")]
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

impl From<ApiError> for CrimeError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::Network(e) => Self::Network(e),
            ApiError::NotFound => Self::NotFound,
            ApiError::Decode(e) => Self::Decode(e),
            ApiError::Unknown => Self::Unknown,
        }
    }
}

/// Façade over the street-level crime endpoints.
pub struct CrimeService {
    client: Arc<dyn PoliceClient>,
    cache: CrimeCache,
}

impl CrimeService {
    /// Creates a service with the production client and the process-wide
    /// cache store.
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(Arc::new(ApiClient::new()), CacheStore::shared())
    }

    /// Creates a service with an injected client and cache store.
    #[must_use]
    pub fn with_parts(client: Arc<dyn PoliceClient>, store: Arc<CacheStore>) -> Self {
        Self {
            client,
            cache: CrimeCache::new(store),
        }
    }

    /// Street-level crimes within one mile of a coordinate.
    ///
    /// `date` defaults to the current month.
    ///
    /// # Errors
    ///
    /// Returns [`CrimeError`] if the request fails or the response cannot
    /// be decoded.
    pub async fn street_level_crimes(
        &self,
        coordinate: Coordinate,
        date: Option<NaiveDate>,
    ) -> Result<Vec<Crime>, CrimeError> {
        let (lat, lng) = query::coordinate_pair(coordinate);
        let endpoint = Endpoint::new(format!("/crimes-street/{ALL_CRIME}"))
            .with("lat", lat)
            .with("lng", lng)
            .with("date", query::month(resolve_date(date)));

        self.fetch_crimes(&endpoint).await
    }

    /// Street-level crimes within a custom boundary.
    ///
    /// The boundary is passed through in input order; repeat the first
    /// coordinate to close the polygon. `date` defaults to the current
    /// month.
    ///
    /// # Errors
    ///
    /// Returns [`CrimeError`] if the request fails or the response cannot
    /// be decoded.
    pub async fn street_level_crimes_in_area(
        &self,
        boundary: &[Coordinate],
        date: Option<NaiveDate>,
    ) -> Result<Vec<Crime>, CrimeError> {
        let endpoint = Endpoint::new(format!("/crimes-street/{ALL_CRIME}"))
            .with("poly", query::polygon(boundary))
            .with("date", query::month(resolve_date(date)));

        self.fetch_crimes(&endpoint).await
    }

    /// Crimes at a specific street identifier.
    ///
    /// `date` defaults to the current month.
    ///
    /// # Errors
    ///
    /// Returns [`CrimeError::NotFound`] when the upstream reports 404 for
    /// the street, or another [`CrimeError`] for transport and decode
    /// failures.
    pub async fn crimes_at_location(
        &self,
        location_id: i64,
        date: Option<NaiveDate>,
    ) -> Result<Vec<Crime>, CrimeError> {
        let endpoint = Endpoint::new("/crimes-at-location")
            .with("location_id", location_id.to_string())
            .with("date", query::month(resolve_date(date)));

        self.fetch_crimes(&endpoint).await
    }

    /// Crimes at the street the coordinate snaps to.
    ///
    /// Preserves the legacy lookup shape: an upstream 404 resolves to
    /// `Ok(None)` rather than an error. `date` defaults to the current
    /// month.
    ///
    /// # Errors
    ///
    /// Returns [`CrimeError`] for transport and decode failures.
    pub async fn crimes_at_coordinate(
        &self,
        coordinate: Coordinate,
        date: Option<NaiveDate>,
    ) -> Result<Option<Vec<Crime>>, CrimeError> {
        let (lat, lng) = query::coordinate_pair(coordinate);
        let endpoint = Endpoint::new("/crimes-at-location")
            .with("lat", lat)
            .with("lng", lng)
            .with("date", query::month(resolve_date(date)));

        match self.fetch_crimes(&endpoint).await {
            Ok(crimes) => Ok(Some(crimes)),
            Err(CrimeError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Crimes a force could not map to a street-level location.
    ///
    /// `date` defaults to the current month.
    ///
    /// # Errors
    ///
    /// Returns [`CrimeError`] if the request fails or the response cannot
    /// be decoded.
    pub async fn crimes_with_no_location(
        &self,
        police_force_id: &str,
        date: Option<NaiveDate>,
    ) -> Result<Vec<Crime>, CrimeError> {
        let endpoint = Endpoint::new("/crimes-no-location")
            .with("category", ALL_CRIME)
            .with("force", police_force_id)
            .with("date", query::month(resolve_date(date)));

        self.fetch_crimes(&endpoint).await
    }

    /// Crime categories valid in the given month.
    ///
    /// Results are cached per month; a cache hit never touches the network.
    /// `date` defaults to the current month.
    ///
    /// # Errors
    ///
    /// Returns [`CrimeError`] if the request fails or the response cannot
    /// be decoded. Failures are never cached.
    pub async fn crime_categories(
        &self,
        date: Option<NaiveDate>,
    ) -> Result<Vec<CrimeCategory>, CrimeError> {
        let month = resolve_date(date);
        if let Some(categories) = self.cache.categories(month).await {
            log::debug!("Crime categories for {} served from cache", query::month(month));
            return Ok(categories);
        }

        let endpoint = Endpoint::new("/crime-categories").with("date", query::month(month));
        let records: Vec<CrimeCategoryRecord> =
            police_uk_client::get(self.client.as_ref(), &endpoint).await?;
        let categories: Vec<CrimeCategory> =
            records.into_iter().map(CrimeCategory::from).collect();

        self.cache.set_categories(month, &categories).await;
        Ok(categories)
    }

    async fn fetch_crimes(&self, endpoint: &Endpoint) -> Result<Vec<Crime>, CrimeError> {
        let records: Vec<CrimeRecord> =
            police_uk_client::get(self.client.as_ref(), endpoint).await?;
        Ok(records.into_iter().map(Crime::from).collect())
    }
}

impl Default for CrimeService {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve_date(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(dates::today)
}
