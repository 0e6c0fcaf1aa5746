#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Keyed in-memory response cache shared by the resource services.
//!
//! Entries are type-erased JSON values keyed by a deterministic
//! [`CacheKey`]; a typed wrapper in each resource crate layers compile-time
//! types over the store. There is no expiry and no size bound: an entry
//! lives until the process exits or a logically-identical request
//! overwrites it wholesale. Failures are never stored.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;

/// Deterministic identifier for one cached result.
///
/// Built from a resource discriminator plus every request-distinguishing
/// parameter in a fixed order. Equal logical requests produce equal keys;
/// date parameters are appended at month granularity using the same
/// formatting as the query encoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    resource: &'static str,
    parts: Vec<String>,
}

impl CacheKey {
    /// Creates a key for a resource discriminator.
    #[must_use]
    pub fn new(resource: &'static str) -> Self {
        Self {
            resource,
            parts: Vec::new(),
        }
    }

    /// Appends one request-distinguishing parameter.
    #[must_use]
    pub fn part(mut self, value: impl fmt::Display) -> Self {
        self.parts.push(value.to_string());
        self
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.resource)?;
        for part in &self.parts {
            write!(f, ":{part}")?;
        }
        Ok(())
    }
}

static SHARED_STORE: LazyLock<Arc<CacheStore>> = LazyLock::new(|| Arc::new(CacheStore::new()));

/// Async keyed store of type-erased JSON payloads.
///
/// Reads and writes are atomic per key: a reader observes either the
/// previous value or the fully-written replacement, never a partial entry.
/// There is no single-flight deduplication; concurrent misses for the same
/// key race benignly and the last write wins.
#[derive(Debug, Default)]
pub struct CacheStore {
    entries: RwLock<HashMap<CacheKey, serde_json::Value>>,
}

impl CacheStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// The process-wide store used by default service wiring.
    #[must_use]
    pub fn shared() -> Arc<Self> {
        Arc::clone(&SHARED_STORE)
    }

    /// Looks up a key and decodes the stored payload into `T`.
    ///
    /// A stored value that no longer matches `T`'s schema reads as a miss.
    pub async fn get<T: DeserializeOwned>(&self, key: &CacheKey) -> Option<T> {
        let entries = self.entries.read().await;
        let value = entries.get(key)?.clone();
        drop(entries);

        serde_json::from_value(value).ok()
    }

    /// Stores a value under a key, replacing any previous entry wholesale.
    ///
    /// Encoding happens before the write lock is taken, so a failed or
    /// cancelled write commits nothing.
    pub async fn set<T: Serialize + ?Sized>(&self, key: CacheKey, value: &T) {
        let value = match serde_json::to_value(value) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Dropping cache write for {key}: {e}");
                return;
            }
        };

        self.entries.write().await.insert(key, value);
    }

    /// Number of cached entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the store holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
