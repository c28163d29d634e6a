//! Backend Source Module
//!
//! The read side of the external hostel backend. The read façade only talks to
//! a [`HostelSource`]; it never knows whether data comes over HTTP or from
//! memory.

mod http;
mod memory;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Hostel;

pub use http::HttpHostelSource;
pub use memory::InMemoryHostelSource;

/// Read operations of the hostel backend.
///
/// Every call is a round trip; caching happens above this trait.
#[async_trait]
pub trait HostelSource: Send + Sync {
    /// All approved hostels.
    async fn list_approved(&self) -> Result<Vec<Hostel>>;

    /// One hostel by id. Returns `HubError::NotFound` if the backend has no
    /// such hostel.
    async fn get(&self, hostel_id: &str) -> Result<Hostel>;

    /// Every hostel owned by `owner_id`, whatever its status.
    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Hostel>>;
}
