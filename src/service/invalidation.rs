//! Cache Invalidation Service
//!
//! Maps mutation events to the keys that must go so the next read of the
//! affected resource is a miss.

use tracing::info;

use super::SharedCache;
use crate::cache::{keys, CacheStats};
use crate::models::InvalidationEvent;

#[derive(Clone)]
pub struct CacheInvalidationService {
    cache: SharedCache,
}

impl CacheInvalidationService {
    pub fn new(cache: SharedCache) -> Self {
        Self { cache }
    }

    /// A new hostel exists: only the list can be stale.
    pub async fn invalidate_hostel_created(&self) -> usize {
        let removed = self.drop_keys(&[keys::hostels()]).await;
        info!(removed, "invalidated after hostel create");
        removed
    }

    /// A hostel changed: drops the list and its detail entry.
    pub async fn invalidate_hostel_updated(&self, hostel_id: &str) -> usize {
        let removed = self
            .drop_keys(&[keys::hostels(), keys::hostel(hostel_id)])
            .await;
        info!(hostel_id, removed, "invalidated after hostel update");
        removed
    }

    /// A hostel is gone: drops the list and its detail entry.
    pub async fn invalidate_hostel_deleted(&self, hostel_id: &str) -> usize {
        let removed = self
            .drop_keys(&[keys::hostels(), keys::hostel(hostel_id)])
            .await;
        info!(hostel_id, removed, "invalidated after hostel delete");
        removed
    }

    /// Search keys depend on both terms and cannot be enumerated, so the
    /// whole store is cleared.
    pub async fn invalidate_search_results(&self) -> usize {
        let removed = self.clear_all().await;
        info!(removed, "invalidated search results");
        removed
    }

    /// One owner's hostel list changed.
    pub async fn invalidate_user_hostels(&self, owner_id: &str) -> usize {
        let removed = self.drop_keys(&[keys::user_hostels(owner_id)]).await;
        info!(owner_id, removed, "invalidated owner listing");
        removed
    }

    /// Drops every entry, returning how many there were.
    pub async fn clear_all(&self) -> usize {
        let mut cache = self.cache.write().await;
        let removed = cache.size();
        cache.clear();
        removed
    }

    pub async fn stats(&self) -> CacheStats {
        self.cache.read().await.stats()
    }

    /// Dispatches a mutation event to the matching invalidation.
    pub async fn apply(&self, event: &InvalidationEvent) -> usize {
        match event {
            InvalidationEvent::Created => self.invalidate_hostel_created().await,
            InvalidationEvent::Updated { hostel_id } => {
                self.invalidate_hostel_updated(hostel_id).await
            }
            InvalidationEvent::Deleted { hostel_id } => {
                self.invalidate_hostel_deleted(hostel_id).await
            }
            InvalidationEvent::Search => self.invalidate_search_results().await,
            InvalidationEvent::User { owner_id } => self.invalidate_user_hostels(owner_id).await,
            InvalidationEvent::All => {
                let removed = self.clear_all().await;
                info!(removed, "cleared cache");
                removed
            }
        }
    }

    async fn drop_keys(&self, targets: &[String]) -> usize {
        let mut cache = self.cache.write().await;
        targets.iter().filter(|key| cache.delete(key)).count()
    }
}
