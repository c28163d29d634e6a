//! Cache Statistics Module
//!
//! Diagnostic snapshot of the store: occupancy, stored keys and hit/miss counters.

use serde::Serialize;

// == Cache Stats ==
/// Snapshot returned by `CacheStore::stats`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    /// Current number of entries, including stale ones not yet touched
    pub size: usize,
    /// Configured capacity
    pub max_size: usize,
    /// Stored keys in ascending order
    pub keys: Vec<String>,
    /// Lookups that found a fresh entry
    pub hits: u64,
    /// Lookups that found nothing or an expired entry
    pub misses: u64,
    /// Entries removed to make room for a new key
    pub evictions: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates empty stats for a store of the given capacity.
    pub fn new(max_size: usize) -> Self {
        Self {
            max_size,
            ..Self::default()
        }
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Returns true if `key` was stored at snapshot time.
    pub fn contains_key(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }
}
