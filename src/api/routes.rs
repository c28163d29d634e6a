//! API Routes
//!
//! Configures the Axum router with all hostel cache endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    clear_handler, get_hostel_handler, health_handler, invalidate_handler, list_hostels_handler,
    owner_hostels_handler, search_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /hostels` - Approved hostels
/// - `GET /hostels/:id` - One hostel
/// - `GET /search?query=&location=` - Filtered approved hostels
/// - `GET /owners/:owner_id/hostels` - One owner's hostels, any status
/// - `POST /cache/invalidate` - Apply a mutation event
/// - `DELETE /cache` - Drop every cached entry
/// - `GET /cache/stats` - Diagnostic snapshot
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin, since browsers call the read endpoints directly
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/hostels", get(list_hostels_handler))
        .route("/hostels/:id", get(get_hostel_handler))
        .route("/search", get(search_handler))
        .route("/owners/:owner_id/hostels", get(owner_hostels_handler))
        .route("/cache/invalidate", post(invalidate_handler))
        .route("/cache", delete(clear_handler))
        .route("/cache/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
