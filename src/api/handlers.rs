//! API Handlers
//!
//! HTTP request handlers for each endpoint of the hostel cache service.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::cache::{CacheStore, CacheTtl};
use crate::config::Config;
use crate::error::{HubError, Result};
use crate::models::{
    CachedResponse, HealthResponse, Hostel, InvalidateResponse, InvalidationEvent, SearchParams,
    StatsResponse,
};
use crate::service::{CacheInvalidationService, CachedApiService, SharedCache};
use crate::source::{HostelSource, HttpHostelSource, InMemoryHostelSource};

/// Application state shared across all handlers.
///
/// Both services point at the same store.
#[derive(Clone)]
pub struct AppState {
    pub api: CachedApiService,
    pub invalidation: CacheInvalidationService,
}

impl AppState {
    /// Wires the invalidation service to the façade's store.
    pub fn new(api: CachedApiService) -> Self {
        let invalidation = CacheInvalidationService::new(api.cache().clone());
        Self { api, invalidation }
    }

    /// Builds a fresh store in front of `source`.
    pub fn with_source(
        max_entries: usize,
        default_ttl: Duration,
        ttl: CacheTtl,
        source: Arc<dyn HostelSource>,
    ) -> Self {
        let cache: SharedCache = Arc::new(RwLock::new(CacheStore::new(max_entries, default_ttl)));
        Self::new(CachedApiService::new(cache, source, ttl))
    }

    /// Creates a new AppState from configuration.
    ///
    /// Uses the HTTP backend when `backend_url` is set, otherwise an in-memory
    /// backend seeded from `hostels_file` (or empty).
    pub fn from_config(config: &Config) -> Result<Self> {
        if !config.ttl.is_ordered() {
            warn!(ttl = ?config.ttl, "detail >= list >= search TTL ordering not kept");
        }

        let source: Arc<dyn HostelSource> = match (&config.backend_url, &config.hostels_file) {
            (Some(url), _) => {
                info!(backend = %url, "using HTTP backend");
                Arc::new(HttpHostelSource::new(url, config.fetch_timeout())?)
            }
            (None, Some(path)) => {
                info!(file = %path, "using in-memory backend seeded from file");
                Arc::new(InMemoryHostelSource::from_json_file(path)?)
            }
            (None, None) => {
                warn!("no BACKEND_URL or HOSTELS_FILE set, serving an empty in-memory backend");
                Arc::new(InMemoryHostelSource::default())
            }
        };

        Ok(Self::with_source(
            config.max_entries,
            config.default_ttl(),
            config.ttl,
            source,
        ))
    }

    pub fn cache(&self) -> &SharedCache {
        self.api.cache()
    }
}

/// Handler for GET /hostels
pub async fn list_hostels_handler(
    State(state): State<AppState>,
) -> Result<Json<CachedResponse<Vec<Hostel>>>> {
    Ok(Json(state.api.get_hostels().await?))
}

/// Handler for GET /hostels/:id
pub async fn get_hostel_handler(
    State(state): State<AppState>,
    Path(hostel_id): Path<String>,
) -> Result<Json<CachedResponse<Hostel>>> {
    Ok(Json(state.api.get_hostel(&hostel_id).await?))
}

/// Handler for GET /search?query=&location=
pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<CachedResponse<Vec<Hostel>>>> {
    Ok(Json(
        state
            .api
            .search_hostels(&params.query, &params.location)
            .await?,
    ))
}

/// Handler for GET /owners/:owner_id/hostels
pub async fn owner_hostels_handler(
    State(state): State<AppState>,
    Path(owner_id): Path<String>,
) -> Result<Json<CachedResponse<Vec<Hostel>>>> {
    Ok(Json(state.api.get_user_hostels(&owner_id).await?))
}

/// Handler for POST /cache/invalidate
///
/// Called by admin and owner flows after a mutation succeeds.
pub async fn invalidate_handler(
    State(state): State<AppState>,
    Json(event): Json<InvalidationEvent>,
) -> Result<Json<InvalidateResponse>> {
    if let Some(error_msg) = event.validate() {
        return Err(HubError::InvalidRequest(error_msg));
    }

    let removed = state.invalidation.apply(&event).await;
    Ok(Json(InvalidateResponse::new(&event.to_string(), removed)))
}

/// Handler for DELETE /cache
pub async fn clear_handler(State(state): State<AppState>) -> Json<InvalidateResponse> {
    let removed = state.invalidation.clear_all().await;
    info!(removed, "cache cleared over HTTP");
    Json(InvalidateResponse::new("all entries", removed))
}

/// Handler for GET /cache/stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.invalidation.stats().await.into())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        let source = InMemoryHostelSource::new(vec![Hostel::new("1", "Lakeview")]);
        AppState::with_source(
            100,
            Duration::from_secs(300),
            CacheTtl::default(),
            Arc::new(source),
        )
    }

    #[tokio::test]
    async fn test_list_then_stats() {
        let state = state();

        let response = list_hostels_handler(State(state.clone())).await.unwrap();
        assert!(!response.from_cache);

        let stats = stats_handler(State(state)).await;
        assert_eq!(stats.stats.keys, vec!["hostels".to_string()]);
    }

    #[tokio::test]
    async fn test_get_missing_hostel() {
        let result = get_hostel_handler(State(state()), Path("404".to_string())).await;
        assert!(matches!(result, Err(HubError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_invalidate_rejects_empty_id() {
        let event = InvalidationEvent::Updated {
            hostel_id: String::new(),
        };
        let result = invalidate_handler(State(state()), Json(event)).await;
        assert!(matches!(result, Err(HubError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_clear_handler() {
        let state = state();
        list_hostels_handler(State(state.clone())).await.unwrap();

        let response = clear_handler(State(state.clone())).await;
        assert_eq!(response.removed, 1);
        assert_eq!(state.cache().read().await.size(), 0);
    }

    #[test]
    fn test_from_config_without_backend() {
        let state = AppState::from_config(&Config::default());
        assert!(state.is_ok());
    }

    #[test]
    fn test_from_config_bad_backend_url() {
        let config = Config {
            backend_url: Some("::not a url::".to_string()),
            ..Config::default()
        };
        assert!(matches!(
            AppState::from_config(&config),
            Err(HubError::InvalidRequest(_))
        ));
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
