// ── Property domain type ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// What a property is. One property may carry several kinds (e.g. a
/// hotel with an in-house restaurant); the union drives the tab set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum PropertyKind {
    Hotel,
    Cafe,
    Restaurant,
    /// Unrecognized wire value, preserved as-is.
    #[strum(default)]
    Other(String),
}

/// Commercial attributes of a property, lifted from the backend's
/// `listings[0]`. Older records have no listing at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub price: Option<f64>,
    pub capacity: Option<i64>,
    pub rating: Option<f64>,
    pub tagline: Option<String>,
    pub gst_percentage: Option<f64>,
    pub discount_amount: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: i64,
    pub name: String,
    /// Kinds as reported by the backend. Unknown wire strings survive
    /// conversion as [`PropertyKind::Other`] and round-trip on write.
    pub kinds: Vec<PropertyKind>,
    pub location: Option<String>,
    pub address: Option<String>,
    pub active: bool,
    pub listing: Option<Listing>,
    /// Ids into the global amenity catalog. Names resolve through
    /// [`AmenityCatalog`](super::AmenityCatalog).
    pub amenity_ids: Vec<i64>,
}
