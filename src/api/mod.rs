//! API Module
//!
//! HTTP handlers and routing for the hostel cache service.
//!
//! # Endpoints
//! - `GET /hostels`, `GET /hostels/:id`, `GET /search` - Cached reads
//! - `GET /owners/:owner_id/hostels` - Cached per-owner listing
//! - `POST /cache/invalidate`, `DELETE /cache` - Invalidation
//! - `GET /cache/stats` - Diagnostics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
