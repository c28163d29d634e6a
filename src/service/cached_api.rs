//! Cached Read Façade
//!
//! Read-through wrappers around the backend source. Each read checks the
//! store first and only goes to the backend on a miss; successful fetches are
//! stored under the key and TTL for their resource class. Failed fetches are
//! returned to the caller and never stored.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use super::search::SearchTerms;
use super::{CachedPayload, SharedCache};
use crate::cache::{keys, CacheTtl, Clock, SystemClock};
use crate::error::{HubError, Result};
use crate::models::{CachedResponse, Hostel};
use crate::source::HostelSource;

/// Values the façade can store in the shared cache.
trait Cacheable: Clone + Sized {
    fn into_payload(self) -> CachedPayload;
    fn from_payload(payload: CachedPayload) -> Option<Self>;
}

impl Cacheable for Vec<Hostel> {
    fn into_payload(self) -> CachedPayload {
        CachedPayload::List(self)
    }

    fn from_payload(payload: CachedPayload) -> Option<Self> {
        match payload {
            CachedPayload::List(hostels) => Some(hostels),
            CachedPayload::Hostel(_) => None,
        }
    }
}

impl Cacheable for Hostel {
    fn into_payload(self) -> CachedPayload {
        CachedPayload::Hostel(self)
    }

    fn from_payload(payload: CachedPayload) -> Option<Self> {
        match payload {
            CachedPayload::Hostel(hostel) => Some(hostel),
            CachedPayload::List(_) => None,
        }
    }
}

// == Cached Api Service ==
/// Cache-aware reads of hostel data.
///
/// Concurrent misses on the same key are not coalesced: each caller fetches,
/// and the last write wins.
#[derive(Clone)]
pub struct CachedApiService {
    cache: SharedCache,
    source: Arc<dyn HostelSource>,
    ttl: CacheTtl,
    clock: Arc<dyn Clock>,
}

impl CachedApiService {
    pub fn new(cache: SharedCache, source: Arc<dyn HostelSource>, ttl: CacheTtl) -> Self {
        Self::with_clock(cache, source, ttl, Arc::new(SystemClock))
    }

    /// Uses `clock` for response timestamps. Pass the store's clock so both
    /// agree.
    pub fn with_clock(
        cache: SharedCache,
        source: Arc<dyn HostelSource>,
        ttl: CacheTtl,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            cache,
            source,
            ttl,
            clock,
        }
    }

    pub fn cache(&self) -> &SharedCache {
        &self.cache
    }

    // == Get Hostels ==
    /// All approved hostels, cached under `hostels`.
    pub async fn get_hostels(&self) -> Result<CachedResponse<Vec<Hostel>>> {
        self.read_through(keys::hostels(), self.ttl.list, self.source.list_approved())
            .await
    }

    // == Get Hostel ==
    /// One hostel, cached under `hostel-{id}`.
    ///
    /// A backend "not found" is returned as `HubError::NotFound` and nothing
    /// is cached.
    pub async fn get_hostel(&self, hostel_id: &str) -> Result<CachedResponse<Hostel>> {
        self.read_through(
            keys::hostel(hostel_id),
            self.ttl.detail,
            self.source.get(hostel_id),
        )
        .await
    }

    // == Search Hostels ==
    /// Approved hostels matching `query` and `location`.
    ///
    /// On a miss the full list is read through the cache as well, so a warm
    /// list costs no backend call.
    pub async fn search_hostels(
        &self,
        query: &str,
        location: &str,
    ) -> Result<CachedResponse<Vec<Hostel>>> {
        let terms = SearchTerms::new(query, location);
        let key = keys::search(&terms.query, &terms.location);

        let fetch = async {
            let all = self.get_hostels().await?;
            Ok::<_, HubError>(terms.filter(all.data))
        };
        self.read_through(key, self.ttl.search, fetch).await
    }

    // == Get User Hostels ==
    /// Every hostel owned by `owner_id`, any status, cached under
    /// `user-hostels-{owner_id}`.
    pub async fn get_user_hostels(&self, owner_id: &str) -> Result<CachedResponse<Vec<Hostel>>> {
        self.read_through(
            keys::user_hostels(owner_id),
            self.ttl.user_list,
            self.source.list_by_owner(owner_id),
        )
        .await
    }

    async fn read_through<T, F>(
        &self,
        key: String,
        ttl: Duration,
        fetch: F,
    ) -> Result<CachedResponse<T>>
    where
        T: Cacheable,
        F: Future<Output = Result<T>>,
    {
        // Guard is released before any await on the backend
        let cached = self.cache.write().await.get(&key);
        if let Some(data) = cached.and_then(T::from_payload) {
            debug!(key = %key, "cache hit");
            return Ok(CachedResponse::new(data, true, self.clock.now_ms()));
        }

        debug!(key = %key, "cache miss, fetching from backend");
        let data = fetch.await.map_err(|err| {
            warn!(key = %key, error = %err, "backend fetch failed");
            err
        })?;

        self.cache
            .write()
            .await
            .set(key, data.clone().into_payload(), Some(ttl));

        Ok(CachedResponse::new(data, false, self.clock.now_ms()))
    }
}
