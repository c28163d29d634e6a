//! Data models for the hostel cache service
//!
//! The backend's hostel resource plus the DTOs used for
//! serializing/deserializing HTTP request and response bodies.

pub mod hostel;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use hostel::{Hostel, HostelStatus, RoomType};
pub use requests::{InvalidationEvent, SearchParams};
pub use responses::{CachedResponse, HealthResponse, InvalidateResponse, StatsResponse};
