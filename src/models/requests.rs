//! Request DTOs for the hostel cache API
//!
//! Defines the structure of incoming query strings and request bodies.

use std::fmt;

use serde::Deserialize;

/// Query string for `GET /search`.
///
/// Both terms are optional; a missing term matches everything.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub location: String,
}

/// Body for `POST /cache/invalidate`, one variant per mutation kind.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum InvalidationEvent {
    /// A hostel was created
    Created,
    /// A hostel was edited, approved or rejected
    Updated {
        #[serde(rename = "hostelId")]
        hostel_id: String,
    },
    /// A hostel was removed
    Deleted {
        #[serde(rename = "hostelId")]
        hostel_id: String,
    },
    /// Search results can no longer be trusted
    Search,
    /// One owner's listing changed
    User {
        #[serde(rename = "ownerId")]
        owner_id: String,
    },
    /// Drop everything
    All,
}

impl InvalidationEvent {
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        match self {
            InvalidationEvent::Updated { hostel_id } | InvalidationEvent::Deleted { hostel_id }
                if hostel_id.trim().is_empty() =>
            {
                Some("hostelId cannot be empty".to_string())
            }
            InvalidationEvent::User { owner_id } if owner_id.trim().is_empty() => {
                Some("ownerId cannot be empty".to_string())
            }
            _ => None,
        }
    }
}

impl fmt::Display for InvalidationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidationEvent::Created => write!(f, "hostel create"),
            InvalidationEvent::Updated { hostel_id } => write!(f, "hostel {} update", hostel_id),
            InvalidationEvent::Deleted { hostel_id } => write!(f, "hostel {} delete", hostel_id),
            InvalidationEvent::Search => write!(f, "search results"),
            InvalidationEvent::User { owner_id } => write!(f, "owner {} listing", owner_id),
            InvalidationEvent::All => write!(f, "all entries"),
        }
    }
}
