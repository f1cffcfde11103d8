// ── Gallery domain types ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum GalleryCategory {
    Room,
    Property,
    Food,
    Event,
    Amenity,
    #[strum(default)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Media {
    pub url: String,
    pub file_name: Option<String>,
    pub media_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: i64,
    /// Resolved numerically from the wire id, which may be a number or a
    /// numeric string.
    pub property_id: Option<i64>,
    pub category: GalleryCategory,
    pub media: Media,
    pub active: bool,
}
