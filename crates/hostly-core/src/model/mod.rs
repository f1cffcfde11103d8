// ── Domain model ──
//
// Canonical types for the hospitality back-office. Converted from the
// tolerant wire DTOs in `hostly_api::types` by `crate::convert`.

pub mod amenity;
pub mod gallery;
pub mod policy;
pub mod property;
pub mod room;
pub mod venue;

pub use amenity::{AmenityCatalog, AmenityFeature};
pub use gallery::{GalleryCategory, GalleryItem, Media};
pub use policy::{PolicyOption, PolicySet};
pub use property::{Listing, Property, PropertyKind};
pub use room::{Room, RoomStatus, RoomType};
pub use venue::{DiningTable, MenuItem, PricingSeason, VenueEvent};
