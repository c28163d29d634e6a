//! Cache Key and TTL Policy
//!
//! Canonical key names per resource class and how long each class stays fresh.
//! The store itself is key-agnostic; only the read façade and the invalidation
//! service build keys, always through these functions.

use std::time::Duration;

/// Key for the full approved-hostel list.
pub fn hostels() -> String {
    "hostels".to_string()
}

/// Key for a single hostel.
pub fn hostel(id: &str) -> String {
    format!("hostel-{}", id)
}

/// Key for a search result set. Missing terms are empty segments.
///
/// `-` and `\` inside a term are backslash-escaped, so the unescaped `-`
/// between the segments is the only separator.
pub fn search(query: &str, location: &str) -> String {
    format!("search-{}-{}", escape_segment(query), escape_segment(location))
}

fn escape_segment(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if ch == '-' || ch == '\\' {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Key for the hostels owned by one user.
pub fn user_hostels(owner_id: &str) -> String {
    format!("user-hostels-{}", owner_id)
}

// == TTL Policy ==
/// Freshness window per resource class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheTtl {
    pub list: Duration,
    pub detail: Duration,
    pub search: Duration,
    pub user_list: Duration,
}

impl CacheTtl {
    /// True when `detail >= list >= search`, the ordering the defaults keep.
    pub fn is_ordered(&self) -> bool {
        self.detail >= self.list && self.list >= self.search
    }
}

impl Default for CacheTtl {
    fn default() -> Self {
        Self {
            list: Duration::from_secs(5 * 60),
            detail: Duration::from_secs(10 * 60),
            search: Duration::from_secs(2 * 60),
            user_list: Duration::from_secs(3 * 60),
        }
    }
}
