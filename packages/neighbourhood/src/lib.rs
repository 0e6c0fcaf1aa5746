#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Neighbourhood policing operations.
//!
//! [`NeighbourhoodService`] covers the per-force neighbourhood endpoints
//! (`/{force}/neighbourhoods`, `/{force}/{id}` and its sub-resources) and
//! the `/locate-neighbourhood` lookup. Id-keyed lookups are reference data
//! and are cached in the shared store; the coordinate lookup is gated on
//! the available-data region before any network traffic and is not cached.

mod cache;
pub mod models;
mod wire;

use std::sync::Arc;

use police_uk_cache::CacheStore;
use police_uk_client::{ApiClient, ApiError, Endpoint, PoliceClient};
use police_uk_force::models::PoliceOfficer;
use police_uk_geography::{AVAILABLE_DATA_REGION, Coordinate};

use cache::NeighbourhoodCache;
use models::{
    Neighbourhood, NeighbourhoodEvent, NeighbourhoodPolicingTeam, NeighbourhoodPriority,
    NeighbourhoodReference,
};
use wire::{
    CentrePointRecord, NeighbourhoodEventRecord, NeighbourhoodPriorityRecord,
    NeighbourhoodRecord, NeighbourhoodReferenceRecord, PolicingTeamRecord,
};

/// Errors from neighbourhood operations.
#[derive(Debug, thiserror::Error)]
pub enum NeighbourhoodError {
    /// The upstream API has no data for the requested neighbourhood or
    /// coordinate.
    #[error("neighbourhood not found")]
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

impl From<ApiError> for NeighbourhoodError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::Network(e) => Self::Network(e),
            ApiError::NotFound => Self::NotFound,
            ApiError::Decode(e) => Self::Decode(e),
            ApiError::Unknown => Self::Unknown,
        }
    }
}

/// Façade over the neighbourhood endpoints.
pub struct NeighbourhoodService {
    client: Arc<dyn PoliceClient>,
    cache: NeighbourhoodCache,
}

impl NeighbourhoodService {
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
            cache: NeighbourhoodCache::new(store),
        }
    }

    /// All neighbourhoods of a police force.
    ///
    /// # Errors
    ///
    /// Returns [`NeighbourhoodError::NotFound`] when the force identifier
    /// is unknown upstream, or another [`NeighbourhoodError`] for transport
    /// and decode failures.
    pub async fn neighbourhoods(
        &self,
        police_force_id: &str,
    ) -> Result<Vec<NeighbourhoodReference>, NeighbourhoodError> {
        if let Some(list) = self.cache.list(police_force_id).await {
            log::debug!("Neighbourhood list for {police_force_id} served from cache");
            return Ok(list);
        }

        let endpoint = Endpoint::new(format!("/{police_force_id}/neighbourhoods"));
        let records: Vec<NeighbourhoodReferenceRecord> =
            police_uk_client::get(self.client.as_ref(), &endpoint).await?;
        let list: Vec<NeighbourhoodReference> = records
            .into_iter()
            .map(NeighbourhoodReference::from)
            .collect();

        self.cache.set_list(police_force_id, &list).await;
        Ok(list)
    }

    /// Full details of one neighbourhood.
    ///
    /// # Errors
    ///
    /// Returns [`NeighbourhoodError::NotFound`] when the force or
    /// neighbourhood identifier is unknown upstream, or another
    /// [`NeighbourhoodError`] for transport and decode failures.
    pub async fn neighbourhood(
        &self,
        id: &str,
        police_force_id: &str,
    ) -> Result<Neighbourhood, NeighbourhoodError> {
        if let Some(neighbourhood) = self.cache.detail(police_force_id, id).await {
            return Ok(neighbourhood);
        }

        let endpoint = Endpoint::new(format!("/{police_force_id}/{id}"));
        let record: NeighbourhoodRecord =
            police_uk_client::get(self.client.as_ref(), &endpoint).await?;
        let neighbourhood = Neighbourhood::from(record);

        self.cache.set_detail(police_force_id, &neighbourhood).await;
        Ok(neighbourhood)
    }

    /// Boundary of one neighbourhood as an open list of coordinates in
    /// upstream order.
    ///
    /// # Errors
    ///
    /// Returns [`NeighbourhoodError::NotFound`] when the identifiers are
    /// unknown upstream, or another [`NeighbourhoodError`] for transport
    /// and decode failures.
    pub async fn boundary(
        &self,
        id: &str,
        police_force_id: &str,
    ) -> Result<Vec<Coordinate>, NeighbourhoodError> {
        if let Some(boundary) = self.cache.boundary(police_force_id, id).await {
            return Ok(boundary);
        }

        let endpoint = Endpoint::new(format!("/{police_force_id}/{id}/boundary"));
        let records: Vec<CentrePointRecord> =
            police_uk_client::get(self.client.as_ref(), &endpoint).await?;
        let boundary = wire::boundary_coordinates(records);

        self.cache.set_boundary(police_force_id, id, &boundary).await;
        Ok(boundary)
    }

    /// Officers attached to one neighbourhood policing team.
    ///
    /// # Errors
    ///
    /// Returns [`NeighbourhoodError::NotFound`] when the identifiers are
    /// unknown upstream, or another [`NeighbourhoodError`] for transport
    /// and decode failures.
    pub async fn police_officers(
        &self,
        id: &str,
        police_force_id: &str,
    ) -> Result<Vec<PoliceOfficer>, NeighbourhoodError> {
        if let Some(officers) = self.cache.officers(police_force_id, id).await {
            return Ok(officers);
        }

        let endpoint = Endpoint::new(format!("/{police_force_id}/{id}/people"));
        let records = police_uk_client::get(self.client.as_ref(), &endpoint).await?;
        let officers = wire::officers(records);

        self.cache.set_officers(police_force_id, id, &officers).await;
        Ok(officers)
    }

    /// Upcoming events organised by one neighbourhood policing team.
    ///
    /// # Errors
    ///
    /// Returns [`NeighbourhoodError::NotFound`] when the identifiers are
    /// unknown upstream, or another [`NeighbourhoodError`] for transport
    /// and decode failures.
    pub async fn events(
        &self,
        id: &str,
        police_force_id: &str,
    ) -> Result<Vec<NeighbourhoodEvent>, NeighbourhoodError> {
        if let Some(events) = self.cache.events(police_force_id, id).await {
            return Ok(events);
        }

        let endpoint = Endpoint::new(format!("/{police_force_id}/{id}/events"));
        let records: Vec<NeighbourhoodEventRecord> =
            police_uk_client::get(self.client.as_ref(), &endpoint).await?;
        let events: Vec<NeighbourhoodEvent> = records
            .into_iter()
            .map(NeighbourhoodEvent::from)
            .collect();

        self.cache.set_events(police_force_id, id, &events).await;
        Ok(events)
    }

    /// Policing priorities set for one neighbourhood.
    ///
    /// # Errors
    ///
    /// Returns [`NeighbourhoodError::NotFound`] when the identifiers are
    /// unknown upstream, or another [`NeighbourhoodError`] for transport
    /// and decode failures.
    pub async fn priorities(
        &self,
        id: &str,
        police_force_id: &str,
    ) -> Result<Vec<NeighbourhoodPriority>, NeighbourhoodError> {
        if let Some(priorities) = self.cache.priorities(police_force_id, id).await {
            return Ok(priorities);
        }

        let endpoint = Endpoint::new(format!("/{police_force_id}/{id}/priorities"));
        let records: Vec<NeighbourhoodPriorityRecord> =
            police_uk_client::get(self.client.as_ref(), &endpoint).await?;
        let priorities: Vec<NeighbourhoodPriority> = records
            .into_iter()
            .map(NeighbourhoodPriority::from)
            .collect();

        self.cache
            .set_priorities(police_force_id, id, &priorities)
            .await;
        Ok(priorities)
    }

    /// The policing team responsible for a coordinate.
    ///
    /// The coordinate is tested against the available data set region
    /// before any request is issued.
    ///
    /// # Errors
    ///
    /// Returns [`NeighbourhoodError::LocationOutsideOfDataSetRegion`] when
    /// the coordinate lies outside the upstream coverage area,
    /// [`NeighbourhoodError::NotFound`] when the upstream has no team for
    /// it, or another [`NeighbourhoodError`] for transport and decode
    /// failures.
    pub async fn policing_team(
        &self,
        coordinate: Coordinate,
    ) -> Result<NeighbourhoodPolicingTeam, NeighbourhoodError> {
        if !AVAILABLE_DATA_REGION.contains(coordinate) {
            return Err(NeighbourhoodError::LocationOutsideOfDataSetRegion);
        }

        let endpoint =
            Endpoint::new("/locate-neighbourhood").with("q", coordinate.to_string());
        let record: PolicingTeamRecord =
            police_uk_client::get(self.client.as_ref(), &endpoint).await?;

        Ok(record.into())
    }
}

impl Default for NeighbourhoodService {
    fn default() -> Self {
        Self::new()
    }
}
