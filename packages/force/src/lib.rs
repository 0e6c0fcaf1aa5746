#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Police force operations.
//!
//! [`PoliceForceService`] covers the `/forces` endpoint family. Force data
//! is id-keyed reference data that rarely changes, so every operation is
//! cached in the shared store.

mod cache;
pub mod models;
pub mod wire;

use std::sync::Arc;

use police_uk_cache::CacheStore;
use police_uk_client::{ApiClient, ApiError, Endpoint, PoliceClient};

use cache::ForceCache;
use models::{PoliceForce, PoliceForceReference, PoliceOfficer};
use wire::{PoliceForceRecord, PoliceForceReferenceRecord, PoliceOfficerRecord};

/// Errors from police force operations.
#[derive(Debug, thiserror::Error)]
pub enum PoliceForceError {
    /// The upstream API has no force with the requested identifier.
    #[error("police force not found")]
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

impl From<ApiError> for PoliceForceError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::Network(e) => Self::Network(e),
            ApiError::NotFound => Self::NotFound,
            ApiError::Decode(e) => Self::Decode(e),
            ApiError::Unknown => Self::Unknown,
        }
    }
}

/// Façade over the police force endpoints.
pub struct PoliceForceService {
    client: Arc<dyn PoliceClient>,
    cache: ForceCache,
}

impl PoliceForceService {
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
            cache: ForceCache::new(store),
        }
    }

    /// All police forces, except the British Transport Police which the
    /// upstream list endpoint omits.
    ///
    /// # Errors
    ///
    /// Returns [`PoliceForceError`] if the request fails or the response
    /// cannot be decoded.
    pub async fn police_forces(&self) -> Result<Vec<PoliceForceReference>, PoliceForceError> {
        if let Some(forces) = self.cache.forces().await {
            log::debug!("Police force list served from cache");
            return Ok(forces);
        }

        let endpoint = Endpoint::new("/forces");
        let records: Vec<PoliceForceReferenceRecord> =
            police_uk_client::get(self.client.as_ref(), &endpoint).await?;
        let forces: Vec<PoliceForceReference> = records
            .into_iter()
            .map(PoliceForceReference::from)
            .collect();

        self.cache.set_forces(&forces).await;
        Ok(forces)
    }

    /// Full details of one police force.
    ///
    /// # Errors
    ///
    /// Returns [`PoliceForceError::NotFound`] when the identifier is
    /// unknown upstream, or another [`PoliceForceError`] for transport and
    /// decode failures.
    pub async fn police_force(
        &self,
        police_force_id: &str,
    ) -> Result<PoliceForce, PoliceForceError> {
        if let Some(force) = self.cache.force(police_force_id).await {
            return Ok(force);
        }

        let endpoint = Endpoint::new(format!("/forces/{police_force_id}"));
        let record: PoliceForceRecord =
            police_uk_client::get(self.client.as_ref(), &endpoint).await?;
        let force = PoliceForce::from(record);

        self.cache.set_force(&force).await;
        Ok(force)
    }

    /// Senior officers of one police force.
    ///
    /// # Errors
    ///
    /// Returns [`PoliceForceError::NotFound`] when the identifier is
    /// unknown upstream, or another [`PoliceForceError`] for transport and
    /// decode failures.
    pub async fn senior_officers(
        &self,
        police_force_id: &str,
    ) -> Result<Vec<PoliceOfficer>, PoliceForceError> {
        if let Some(officers) = self.cache.senior_officers(police_force_id).await {
            return Ok(officers);
        }

        let endpoint = Endpoint::new(format!("/forces/{police_force_id}/people"));
        let records: Vec<PoliceOfficerRecord> =
            police_uk_client::get(self.client.as_ref(), &endpoint).await?;
        let officers: Vec<PoliceOfficer> =
            records.into_iter().map(PoliceOfficer::from).collect();

        self.cache.set_senior_officers(police_force_id, &officers).await;
        Ok(officers)
    }
}

impl Default for PoliceForceService {
    fn default() -> Self {
        Self::new()
    }
}
