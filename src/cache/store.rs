//! Cache Store Module
//!
//! Main cache engine: HashMap storage with lazy TTL expiry and oldest-entry
//! eviction at capacity.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, Clock, SystemClock};

// == Cache Store ==
/// Bounded key/value store with per-entry TTL.
///
/// Expiry is lazy: a stale entry stays in the map, and counts toward
/// [`size`](Self::size), until a lookup touches it or
/// [`cleanup_expired`](Self::cleanup_expired) runs. When a new key is inserted
/// into a full store, the entry with the smallest `stored_at` is evicted first,
/// with ties going to the earliest insertion.
#[derive(Debug)]
pub struct CacheStore<V> {
    entries: HashMap<String, CacheEntry<V>>,
    stats: CacheStats,
    max_size: usize,
    default_ttl: Duration,
    next_seq: u64,
    clock: Arc<dyn Clock>,
}

impl<V> CacheStore<V> {
    // == Constructor ==
    /// Creates a store backed by the system clock.
    ///
    /// # Arguments
    /// * `max_size` - Maximum number of entries the store can hold
    /// * `default_ttl` - TTL for entries set without an explicit one
    pub fn new(max_size: usize, default_ttl: Duration) -> Self {
        Self::with_clock(max_size, default_ttl, Arc::new(SystemClock))
    }

    /// Creates a store that reads time from `clock`.
    pub fn with_clock(max_size: usize, default_ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(max_size),
            max_size,
            default_ttl,
            next_seq: 0,
            clock,
        }
    }

    // == Set ==
    /// Stores `value` under `key` with the given or default TTL.
    ///
    /// Overwriting an existing key replaces its value and timestamp without
    /// evicting anything.
    pub fn set(&mut self, key: impl Into<String>, value: V, ttl: Option<Duration>) {
        let key = key.into();
        if self.max_size == 0 {
            debug!(key = %key, "store has zero capacity, dropping value");
            return;
        }

        if !self.entries.contains_key(&key) && self.entries.len() >= self.max_size {
            self.evict_oldest();
        }

        let ttl = ttl.unwrap_or(self.default_ttl);
        let entry = CacheEntry::new(
            value,
            self.clock.now_ms(),
            u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX),
            self.next_seq,
        );
        self.next_seq += 1;
        self.entries.insert(key, entry);
    }

    // == Has ==
    /// Returns true if a fresh entry exists. Removes the entry if it has expired.
    pub fn has(&mut self, key: &str) -> bool {
        self.fresh_entry(key).is_some()
    }

    // == Delete ==
    /// Removes `key`, returning whether it was present.
    pub fn delete(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    // == Clear ==
    /// Drops every entry. Counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // == Size ==
    /// Number of stored entries, stale ones included.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    // == Stats ==
    /// Returns a diagnostic snapshot with keys in ascending order.
    pub fn stats(&self) -> CacheStats {
        let mut keys: Vec<String> = self.entries.keys().cloned().collect();
        keys.sort();

        let mut stats = self.stats.clone();
        stats.size = self.entries.len();
        stats.keys = keys;
        stats
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the store.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let now = self.clock.now_ms();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired_at(now));
        before - self.entries.len()
    }

    /// Looks up a fresh entry, dropping it first if it has expired.
    fn fresh_entry(&mut self, key: &str) -> Option<&CacheEntry<V>> {
        let now = self.clock.now_ms();
        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired_at(now),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if expired {
            debug!(key = %key, "entry expired");
            self.entries.remove(key);
            self.stats.record_miss();
            return None;
        }

        self.stats.record_hit();
        self.entries.get(key)
    }

    fn evict_oldest(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.age_key())
            .map(|(key, _)| key.clone());

        if let Some(key) = oldest {
            debug!(key = %key, "evicting oldest entry");
            self.entries.remove(&key);
            self.stats.record_eviction();
        }
    }
}

impl<V: Clone> CacheStore<V> {
    // == Get ==
    /// Returns a clone of the value if present and fresh.
    ///
    /// An expired entry is removed and reported as absent.
    pub fn get(&mut self, key: &str) -> Option<V> {
        self.fresh_entry(key).map(|entry| entry.value.clone())
    }
}
