//! Typed cache wrapper for crime reference data.

use std::sync::Arc;

use chrono::NaiveDate;
use police_uk_cache::{CacheKey, CacheStore};
use police_uk_client::query;

use crate::models::CrimeCategory;

/// Compile-time-typed view over the shared store for crime reference data.
///
/// Only key construction and typing live here; the store owns all caching
/// semantics.
#[derive(Debug, Clone)]
pub(crate) struct CrimeCache {
    store: Arc<CacheStore>,
}

impl CrimeCache {
    pub(crate) const fn new(store: Arc<CacheStore>) -> Self {
        Self { store }
    }

    fn categories_key(month: NaiveDate) -> CacheKey {
        CacheKey::new("crime-categories").part(query::month(month))
    }

    pub(crate) async fn categories(&self, month: NaiveDate) -> Option<Vec<CrimeCategory>> {
        self.store.get(&Self::categories_key(month)).await
    }

    pub(crate) async fn set_categories(&self, month: NaiveDate, categories: &[CrimeCategory]) {
        self.store.set(Self::categories_key(month), categories).await;
    }
}
