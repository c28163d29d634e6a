//! HostelHub - caching read service for hostel listings
//!
//! Serves hostel lists, details and searches from a TTL cache in front of the
//! listing backend, and drops the affected entries when listings change.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod source;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use error::{HubError, Result};
pub use service::{CacheInvalidationService, CachedApiService, SharedCache};
pub use tasks::spawn_cleanup_task;
