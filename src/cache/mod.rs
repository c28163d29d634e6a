//! Cache Module
//!
//! In-memory key/value store with lazy TTL expiry and oldest-entry eviction,
//! plus the key naming and TTL policy used by the read façade.

mod clock;
mod entry;
pub mod keys;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use clock::{current_timestamp_ms, Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use keys::CacheTtl;
pub use stats::CacheStats;
pub use store::CacheStore;
