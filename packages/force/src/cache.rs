//! Typed cache wrapper for police force reference data.

use std::sync::Arc;

use police_uk_cache::{CacheKey, CacheStore};

use crate::models::{PoliceForce, PoliceForceReference, PoliceOfficer};

#[derive(Debug, Clone)]
pub(crate) struct ForceCache {
    store: Arc<CacheStore>,
}

impl ForceCache {
    pub(crate) const fn new(store: Arc<CacheStore>) -> Self {
        Self { store }
    }

    fn list_key() -> CacheKey {
        CacheKey::new("police-forces")
    }

    fn force_key(id: &str) -> CacheKey {
        CacheKey::new("police-force").part(id)
    }

    fn senior_officers_key(id: &str) -> CacheKey {
        CacheKey::new("police-force-senior-officers").part(id)
    }

    pub(crate) async fn forces(&self) -> Option<Vec<PoliceForceReference>> {
        self.store.get(&Self::list_key()).await
    }

    pub(crate) async fn set_forces(&self, forces: &[PoliceForceReference]) {
        self.store.set(Self::list_key(), forces).await;
    }

    pub(crate) async fn force(&self, id: &str) -> Option<PoliceForce> {
        self.store.get(&Self::force_key(id)).await
    }

    pub(crate) async fn set_force(&self, force: &PoliceForce) {
        self.store.set(Self::force_key(&force.id), force).await;
    }

    pub(crate) async fn senior_officers(&self, id: &str) -> Option<Vec<PoliceOfficer>> {
        self.store.get(&Self::senior_officers_key(id)).await
    }

    pub(crate) async fn set_senior_officers(&self, id: &str, officers: &[PoliceOfficer]) {
        self.store.set(Self::senior_officers_key(id), officers).await;
    }
}
