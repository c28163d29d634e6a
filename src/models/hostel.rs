//! Hostel resource as returned by the backend
//!
//! The backend stores room types, facilities and gallery images as JSON-encoded
//! strings. They are kept verbatim so cached payloads round-trip unchanged, and
//! decoded on demand.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Moderation state, owned entirely by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HostelStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// A hostel listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hostel {
    pub hostel_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub landmark: String,
    #[serde(default)]
    pub owner_id: String,
    #[serde(default)]
    pub status: HostelStatus,
    /// JSON array of [`RoomType`]
    #[serde(default)]
    pub room_types: String,
    /// JSON array of strings
    #[serde(default)]
    pub facilities: String,
    /// JSON array of image URLs
    #[serde(default)]
    pub gallery_images: String,
}

/// One bookable room configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomType {
    #[serde(rename = "type")]
    pub kind: String,
    pub price: f64,
    #[serde(default)]
    pub availability: Option<u32>,
}

impl Hostel {
    /// Creates an approved hostel with empty optional fields.
    pub fn new(hostel_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            hostel_id: hostel_id.into(),
            name: name.into(),
            description: String::new(),
            city: String::new(),
            area: String::new(),
            landmark: String::new(),
            owner_id: String::new(),
            status: HostelStatus::Approved,
            room_types: String::new(),
            facilities: String::new(),
            gallery_images: String::new(),
        }
    }

    pub fn is_approved(&self) -> bool {
        self.status == HostelStatus::Approved
    }

    /// Decodes `room_types`. An empty field decodes to no rooms.
    pub fn room_types(&self) -> Result<Vec<RoomType>> {
        decode_list(&self.room_types)
    }

    pub fn facilities(&self) -> Result<Vec<String>> {
        decode_list(&self.facilities)
    }

    pub fn gallery_images(&self) -> Result<Vec<String>> {
        decode_list(&self.gallery_images)
    }

    /// Cheapest room price, if any room type is listed.
    pub fn starting_price(&self) -> Result<Option<f64>> {
        Ok(self
            .room_types()?
            .into_iter()
            .map(|room| room.price)
            .reduce(f64::min))
    }
}

fn decode_list<T: for<'de> Deserialize<'de>>(raw: &str) -> Result<Vec<T>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(raw)?)
}
