//! Error types for the hostel cache service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Hub Error Enum ==
/// Unified error type for the read façade, the backend sources and the API.
///
/// A cache miss is never an error; lookups return `Option` instead.
#[derive(Error, Debug)]
pub enum HubError {
    /// The backend reports that the requested resource does not exist
    #[error("Hostel not found: {0}")]
    NotFound(String),

    /// Any other backend or network failure during a fetch
    #[error("Backend fetch failed: {0}")]
    Fetch(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for HubError {
    fn from(err: reqwest::Error) -> Self {
        HubError::Fetch(err.to_string())
    }
}

impl From<serde_json::Error> for HubError {
    fn from(err: serde_json::Error) -> Self {
        HubError::Internal(format!("malformed JSON: {}", err))
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for HubError {
    fn into_response(self) -> Response {
        let status = match &self {
            HubError::NotFound(_) => StatusCode::NOT_FOUND,
            HubError::Fetch(_) => StatusCode::BAD_GATEWAY,
            HubError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            HubError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the hostel cache service.
pub type Result<T> = std::result::Result<T, HubError>;
