//! In-memory backend
//!
//! Serves hostels from a vector, optionally seeded from a JSON file. Counts
//! every call so callers can observe how many backend round trips happened.

use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::HostelSource;
use crate::error::{HubError, Result};
use crate::models::Hostel;

#[derive(Debug, Default)]
pub struct InMemoryHostelSource {
    hostels: RwLock<Vec<Hostel>>,
    fetches: AtomicUsize,
    failing: AtomicBool,
}

impl InMemoryHostelSource {
    pub fn new(hostels: Vec<Hostel>) -> Self {
        Self {
            hostels: RwLock::new(hostels),
            ..Self::default()
        }
    }

    /// Loads a JSON array of hostels.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            HubError::InvalidRequest(format!("cannot read {}: {}", path.display(), e))
        })?;
        let hostels: Vec<Hostel> = serde_json::from_str(&raw)?;
        Ok(Self::new(hostels))
    }

    /// Number of backend calls served so far, failed ones included.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    /// Makes every following call fail with `HubError::Fetch` until reset.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Inserts or replaces a hostel, as a backend mutation would.
    pub async fn upsert(&self, hostel: Hostel) {
        let mut hostels = self.hostels.write().await;
        match hostels.iter_mut().find(|h| h.hostel_id == hostel.hostel_id) {
            Some(existing) => *existing = hostel,
            None => hostels.push(hostel),
        }
    }

    /// Removes a hostel, returning whether it existed.
    pub async fn remove(&self, hostel_id: &str) -> bool {
        let mut hostels = self.hostels.write().await;
        let before = hostels.len();
        hostels.retain(|h| h.hostel_id != hostel_id);
        hostels.len() != before
    }

    fn begin_call(&self) -> Result<()> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(HubError::Fetch("backend unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl HostelSource for InMemoryHostelSource {
    async fn list_approved(&self) -> Result<Vec<Hostel>> {
        self.begin_call()?;
        let hostels = self.hostels.read().await;
        Ok(hostels.iter().filter(|h| h.is_approved()).cloned().collect())
    }

    async fn get(&self, hostel_id: &str) -> Result<Hostel> {
        self.begin_call()?;
        let hostels = self.hostels.read().await;
        hostels
            .iter()
            .find(|h| h.hostel_id == hostel_id)
            .cloned()
            .ok_or_else(|| HubError::NotFound(hostel_id.to_string()))
    }

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Hostel>> {
        self.begin_call()?;
        let hostels = self.hostels.read().await;
        Ok(hostels
            .iter()
            .filter(|h| h.owner_id == owner_id)
            .cloned()
            .collect())
    }
}
