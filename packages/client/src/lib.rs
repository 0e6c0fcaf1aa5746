#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Endpoint construction and HTTP/JSON transport for the data.police.uk API.
//!
//! Every resource crate talks to the upstream API through [`PoliceClient`]:
//! an [`Endpoint`] describes one operation's relative path and ordered query
//! parameters, [`ApiClient`] performs a single GET against the configured
//! base URL, and [`get`] decodes the JSON body into the caller's type. All
//! failures collapse into the closed [`ApiError`] taxonomy; nothing is
//! retried or cached at this layer.

pub mod dates;
pub mod endpoint;
pub mod query;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

pub use endpoint::Endpoint;

/// Production base URL.
pub const DEFAULT_BASE_URL: &str = "https://data.police.uk/api";

/// Errors that can occur when talking to the upstream API.
///
/// Every request resolves to a typed success value or exactly one of these
/// variants.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP transport failed before a usable response arrived.
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The upstream API reported HTTP 404 for the requested resource.
    #[error("resource not found")]
    NotFound,

    /// The response body did not match the expected schema.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Any other unexpected response.
    #[error("unexpected response from the upstream API")]
    Unknown,
}

/// Transport seam used by every resource service.
///
/// [`ApiClient`] is the production implementation; tests substitute stubs to
/// observe or suppress network traffic.
#[async_trait]
pub trait PoliceClient: Send + Sync {
    /// Performs a GET for the endpoint and returns the raw JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] for transport failures,
    /// [`ApiError::NotFound`] for HTTP 404, [`ApiError::Decode`] for an
    /// unparseable body, and [`ApiError::Unknown`] for any other
    /// non-success status.
    async fn fetch_value(&self, endpoint: &Endpoint) -> Result<serde_json::Value, ApiError>;
}

/// Fetches an endpoint and decodes the body into `T`.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when the body does not match `T`'s schema,
/// or whatever the underlying fetch failed with.
pub async fn get<T: DeserializeOwned>(
    client: &dyn PoliceClient,
    endpoint: &Endpoint,
) -> Result<T, ApiError> {
    decode(client.fetch_value(endpoint).await?)
}

/// Decodes an already-fetched JSON body into `T`.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when the body does not match `T`'s schema.
pub fn decode<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(ApiError::Decode)
}

/// reqwest-backed [`PoliceClient`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Creates a client against [`DEFAULT_BASE_URL`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client against an alternative base URL (tests, mirrors).
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    /// The base URL requests are issued against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PoliceClient for ApiClient {
    async fn fetch_value(&self, endpoint: &Endpoint) -> Result<serde_json::Value, ApiError> {
        let url = endpoint.url(&self.base_url);
        log::debug!("GET {url}");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }
        if !status.is_success() {
            log::warn!("GET {url} returned unexpected status {status}");
            return Err(ApiError::Unknown);
        }

        // Read the body as text first, then parse, so a malformed body maps
        // to Decode instead of a transport error.
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
