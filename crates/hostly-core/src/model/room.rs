// ── Room domain type ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum RoomType {
    Single,
    Double,
    Deluxe,
    Suite,
    /// Unrecognized wire value, preserved as-is.
    #[strum(default)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum RoomStatus {
    Available,
    Occupied,
    Cleaning,
    Maintenance,
    #[strum(default)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: i64,
    pub property_id: Option<i64>,
    pub room_number: String,
    pub room_type: RoomType,
    pub base_price: f64,
    pub max_occupancy: i64,
    pub status: RoomStatus,
    pub active: bool,
    pub bookable: bool,
    pub amenity_ids: Vec<i64>,
}
