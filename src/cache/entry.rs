//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

// == Cache Entry ==
/// A stored value plus the metadata needed for expiry and eviction.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Time the entry was stored (Unix milliseconds)
    pub stored_at: u64,
    /// Time-to-live in milliseconds
    pub ttl_ms: u64,
    /// Store-wide insertion sequence, breaks `stored_at` ties on eviction
    pub seq: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    pub fn new(value: V, stored_at: u64, ttl_ms: u64, seq: u64) -> Self {
        Self {
            value,
            stored_at,
            ttl_ms,
            seq,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired at time `now`.
    ///
    /// An entry is expired once strictly more than `ttl_ms` has elapsed since
    /// it was stored; at exactly `ttl_ms` it is still fresh. A clock that went
    /// backwards never expires an entry.
    pub fn is_expired_at(&self, now: u64) -> bool {
        now.saturating_sub(self.stored_at) > self.ttl_ms
    }

    /// Ordering key for oldest-first eviction.
    pub(crate) fn age_key(&self) -> (u64, u64) {
        (self.stored_at, self.seq)
    }
}
