//! Typed cache wrapper for neighbourhood reference data.

use std::sync::Arc;

use police_uk_cache::{CacheKey, CacheStore};
use police_uk_force::models::PoliceOfficer;
use police_uk_geography::Coordinate;

use crate::models::{
    Neighbourhood, NeighbourhoodEvent, NeighbourhoodPriority, NeighbourhoodReference,
};

#[derive(Debug, Clone)]
pub(crate) struct NeighbourhoodCache {
    store: Arc<CacheStore>,
}

impl NeighbourhoodCache {
    pub(crate) const fn new(store: Arc<CacheStore>) -> Self {
        Self { store }
    }

    fn list_key(force: &str) -> CacheKey {
        CacheKey::new("neighbourhoods").part(force)
    }

    fn detail_key(force: &str, id: &str) -> CacheKey {
        CacheKey::new("neighbourhood").part(force).part(id)
    }

    fn boundary_key(force: &str, id: &str) -> CacheKey {
        CacheKey::new("neighbourhood-boundary").part(force).part(id)
    }

    fn officers_key(force: &str, id: &str) -> CacheKey {
        CacheKey::new("neighbourhood-officers").part(force).part(id)
    }

    fn events_key(force: &str, id: &str) -> CacheKey {
        CacheKey::new("neighbourhood-events").part(force).part(id)
    }

    fn priorities_key(force: &str, id: &str) -> CacheKey {
        CacheKey::new("neighbourhood-priorities").part(force).part(id)
    }

    pub(crate) async fn list(&self, force: &str) -> Option<Vec<NeighbourhoodReference>> {
        self.store.get(&Self::list_key(force)).await
    }

    pub(crate) async fn set_list(&self, force: &str, list: &[NeighbourhoodReference]) {
        self.store.set(Self::list_key(force), list).await;
    }

    pub(crate) async fn detail(&self, force: &str, id: &str) -> Option<Neighbourhood> {
        self.store.get(&Self::detail_key(force, id)).await
    }

    pub(crate) async fn set_detail(&self, force: &str, neighbourhood: &Neighbourhood) {
        self.store
            .set(Self::detail_key(force, &neighbourhood.id), neighbourhood)
            .await;
    }

    pub(crate) async fn boundary(&self, force: &str, id: &str) -> Option<Vec<Coordinate>> {
        self.store.get(&Self::boundary_key(force, id)).await
    }

    pub(crate) async fn set_boundary(&self, force: &str, id: &str, boundary: &[Coordinate]) {
        self.store.set(Self::boundary_key(force, id), boundary).await;
    }

    pub(crate) async fn officers(&self, force: &str, id: &str) -> Option<Vec<PoliceOfficer>> {
        self.store.get(&Self::officers_key(force, id)).await
    }

    pub(crate) async fn set_officers(&self, force: &str, id: &str, officers: &[PoliceOfficer]) {
        self.store.set(Self::officers_key(force, id), officers).await;
    }

    pub(crate) async fn events(&self, force: &str, id: &str) -> Option<Vec<NeighbourhoodEvent>> {
        self.store.get(&Self::events_key(force, id)).await
    }

    pub(crate) async fn set_events(&self, force: &str, id: &str, events: &[NeighbourhoodEvent]) {
        self.store.set(Self::events_key(force, id), events).await;
    }

    pub(crate) async fn priorities(
        &self,
        force: &str,
        id: &str,
    ) -> Option<Vec<NeighbourhoodPriority>> {
        self.store.get(&Self::priorities_key(force, id)).await
    }

    pub(crate) async fn set_priorities(
        &self,
        force: &str,
        id: &str,
        priorities: &[NeighbourhoodPriority],
    ) {
        self.store
            .set(Self::priorities_key(force, id), priorities)
            .await;
    }
}
