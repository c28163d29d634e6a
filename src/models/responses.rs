//! Response DTOs for the hostel cache API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;

/// Result of every read façade operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedResponse<T> {
    pub data: T,
    /// True when served without a backend round trip
    pub from_cache: bool,
    /// Time of the call (Unix milliseconds), not the time the data was stored
    pub timestamp: u64,
}

impl<T> CachedResponse<T> {
    pub fn new(data: T, from_cache: bool, timestamp: u64) -> Self {
        Self {
            data,
            from_cache,
            timestamp,
        }
    }
}

/// Response body for the stats endpoint (GET /cache/stats)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    #[serde(flatten)]
    pub stats: CacheStats,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        let hit_rate = stats.hit_rate();
        Self { stats, hit_rate }
    }
}

/// Response body for invalidation endpoints
#[derive(Debug, Clone, Serialize)]
pub struct InvalidateResponse {
    /// Success message
    pub message: String,
    /// Number of entries dropped
    pub removed: usize,
}

impl InvalidateResponse {
    pub fn new(what: &str, removed: usize) -> Self {
        Self {
            message: format!("Invalidated {}", what),
            removed,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
