//! Expired Entry Sweeper
//!
//! Optional background task that periodically purges expired cache entries.
//! Lookups already hide stale entries, so the sweep only reclaims space.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::service::SharedCache;

/// Spawns a task that calls `cleanup_expired` every `cleanup_interval_secs`.
///
/// Returns `None` without spawning anything when the interval is 0.
///
/// # Example
/// ```ignore
/// let handle = spawn_cleanup_task(cache.clone(), 30);
/// // Later, during shutdown:
/// if let Some(handle) = handle { handle.abort(); }
/// ```
pub fn spawn_cleanup_task(
    cache: SharedCache,
    cleanup_interval_secs: u64,
) -> Option<JoinHandle<()>> {
    if cleanup_interval_secs == 0 {
        return None;
    }
    let interval = Duration::from_secs(cleanup_interval_secs);

    Some(tokio::spawn(async move {
        info!(
            "Starting cache sweeper with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.write().await.cleanup_expired();

            if removed > 0 {
                info!("Cache sweep: removed {} expired entries", removed);
            } else {
                debug!("Cache sweep: no expired entries found");
            }
        }
    }))
}
