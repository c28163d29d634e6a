//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::CacheTtl;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub max_entries: usize,
    /// Default TTL in seconds for entries without explicit TTL
    pub default_ttl: u64,
    /// Per-resource TTLs
    pub ttl: CacheTtl,
    /// HTTP server port
    pub server_port: u16,
    /// Background sweep interval in seconds, 0 disables the sweeper
    pub cleanup_interval: u64,
    /// Base URL of the hostel backend
    pub backend_url: Option<String>,
    /// JSON seed file used when no backend URL is configured
    pub hostels_file: Option<String>,
    /// Backend request timeout in seconds
    pub fetch_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_ENTRIES` - Maximum cache entries (default: 100)
    /// - `DEFAULT_TTL` - Default TTL in seconds (default: 300)
    /// - `LIST_TTL`, `DETAIL_TTL`, `SEARCH_TTL`, `USER_LIST_TTL` - Per-resource
    ///   TTLs in seconds (defaults: 300, 600, 120, 180)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Sweep frequency in seconds (default: 0, disabled)
    /// - `BACKEND_URL` - Hostel backend base URL (default: unset)
    /// - `HOSTELS_FILE` - JSON seed for the in-memory backend (default: unset)
    /// - `FETCH_TIMEOUT` - Backend request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let ttl = CacheTtl {
            list: env_secs("LIST_TTL").unwrap_or(defaults.ttl.list),
            detail: env_secs("DETAIL_TTL").unwrap_or(defaults.ttl.detail),
            search: env_secs("SEARCH_TTL").unwrap_or(defaults.ttl.search),
            user_list: env_secs("USER_LIST_TTL").unwrap_or(defaults.ttl.user_list),
        };

        Self {
            max_entries: env_parse("MAX_ENTRIES").unwrap_or(defaults.max_entries),
            default_ttl: env_parse("DEFAULT_TTL").unwrap_or(defaults.default_ttl),
            ttl,
            server_port: env_parse("SERVER_PORT").unwrap_or(defaults.server_port),
            cleanup_interval: env_parse("CLEANUP_INTERVAL").unwrap_or(defaults.cleanup_interval),
            backend_url: env_string("BACKEND_URL"),
            hostels_file: env_string("HOSTELS_FILE"),
            fetch_timeout: env_parse("FETCH_TIMEOUT").unwrap_or(defaults.fetch_timeout),
        }
    }

    pub fn default_ttl(&self) -> Duration {
        Duration::from_secs(self.default_ttl)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_entries: 100,
            default_ttl: 300,
            ttl: CacheTtl::default(),
            server_port: 3000,
            cleanup_interval: 0,
            backend_url: None,
            hostels_file: None,
            fetch_timeout: 10,
        }
    }
}

fn env_parse<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

fn env_secs(name: &str) -> Option<Duration> {
    env_parse::<u64>(name).map(Duration::from_secs)
}

fn env_string(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
