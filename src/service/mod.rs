//! Service Module
//!
//! The cache-aware read façade, the in-process search filter and the
//! mutation-driven invalidation service. Both services share one store.

mod cached_api;
mod invalidation;
pub mod search;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::cache::CacheStore;
use crate::models::Hostel;

pub use cached_api::CachedApiService;
pub use invalidation::CacheInvalidationService;

/// What the façade stores under each key.
#[derive(Debug, Clone, PartialEq)]
pub enum CachedPayload {
    /// `hostels`, `search-*` and `user-hostels-*` keys
    List(Vec<Hostel>),
    /// `hostel-*` keys
    Hostel(Hostel),
}

/// The process-wide store, shared by the read and invalidation services.
pub type SharedCache = Arc<RwLock<CacheStore<CachedPayload>>>;
