//! Wire types for the Hostly admin backend.
//!
//! Field names use camelCase via `#[serde(rename_all = "camelCase")]`.
//! Two quirks of the backend are absorbed here rather than leaking into
//! callers:
//!
//! - Identifiers arrive as JSON numbers *or* numeric strings depending on
//!   the endpoint; [`FlexId`] accepts both and compares numerically.
//! - List payloads arrive as `{data: {data: [...]}}`, `{data: [...]}`, or a
//!   bare array; [`Listish`] normalizes all three to a `Vec`.

use serde::{Deserialize, Serialize};

// ── Identifiers ──────────────────────────────────────────────────────

/// An entity id that tolerates both `7` and `"7"` on the wire.
///
/// Equality between the two spellings is numeric: `FlexId` from `"7"`
/// matches a target id of `7`, while `70` does not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlexId {
    Num(i64),
    Str(String),
}

impl FlexId {
    /// Numeric value of this id, if it parses as one.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Num(n) => Some(*n),
            Self::Str(s) => s.trim().parse().ok(),
        }
    }

    /// Numeric-coerced equality against a target id.
    pub fn matches(&self, target: i64) -> bool {
        self.as_i64() == Some(target)
    }
}

impl std::fmt::Display for FlexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Num(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for FlexId {
    fn from(n: i64) -> Self {
        Self::Num(n)
    }
}

// ── Envelope tolerance ───────────────────────────────────────────────

/// A list payload in any of the backend's three shapes.
///
/// `into_vec()` unwraps `{data: {data: [...]}}`, `{data: [...]}`, and bare
/// arrays uniformly. Missing/null `data` yields an empty vec.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Listish<T> {
    Wrapped {
        #[serde(default = "listish_empty", deserialize_with = "listish_nullable")]
        data: Box<Listish<T>>,
    },
    Items(Vec<T>),
}

fn listish_empty<T>() -> Box<Listish<T>> {
    Box::new(Listish::Items(Vec::new()))
}

fn listish_nullable<'de, D, T>(deserializer: D) -> Result<Box<Listish<T>>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    let inner = Option::<Listish<T>>::deserialize(deserializer)?;
    Ok(Box::new(inner.unwrap_or_default()))
}

impl<T> Listish<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Wrapped { data } => data.into_vec(),
            Self::Items(items) => items,
        }
    }
}

impl<T> Default for Listish<T> {
    fn default() -> Self {
        Self::Items(Vec::new())
    }
}

// ── Properties ───────────────────────────────────────────────────────

/// The property list endpoint wraps some rows in `{propertyResponseDTO}`
/// and leaves others flat. Both are tolerated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyEnvelope {
    Nested {
        // The wire key uppercases the acronym, so rename_all would
        // produce the wrong casing here.
        #[serde(rename = "propertyResponseDTO")]
        property_response_dto: PropertyDto,
    },
    Flat(PropertyDto),
}

impl PropertyEnvelope {
    pub fn into_inner(self) -> PropertyDto {
        match self {
            Self::Nested {
                property_response_dto,
            } => property_response_dto,
            Self::Flat(dto) => dto,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDto {
    pub id: FlexId,
    pub property_name: String,
    /// One or more of `Hotel`, `Cafe`, `Restaurant`; drives the tab set.
    #[serde(default)]
    pub property_types: Vec<String>,
    pub location_name: Option<String>,
    pub address: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    /// Commercial attributes live on the first listing.
    #[serde(default)]
    pub listings: Vec<ListingDto>,
    /// Selected subset of the global amenity catalog, by id.
    #[serde(default)]
    pub amenity_feature_ids: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingDto {
    pub price: Option<f64>,
    pub capacity: Option<i64>,
    pub rating: Option<f64>,
    pub tagline: Option<String>,
    pub gst_percentage: Option<f64>,
    pub discount_amount: Option<f64>,
}

/// Create/update body for a property.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyWrite {
    pub property_name: String,
    pub property_types: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing: Option<ListingDto>,
}

// ── Property types & categories ──────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyTypeDto {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyTypeWrite {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyCategoryDto {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyCategoryWrite {
    pub name: String,
}

// ── Rooms ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDto {
    pub id: FlexId,
    pub property_id: Option<FlexId>,
    pub room_number: String,
    /// One of `SINGLE`, `DOUBLE`, `DELUXE`, `SUITE`.
    pub room_type: String,
    pub base_price: f64,
    pub max_occupancy: i64,
    /// One of `AVAILABLE`, `OCCUPIED`, `CLEANING`, `MAINTENANCE`.
    pub status: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub bookable: bool,
    #[serde(default)]
    pub amenity_feature_ids: Vec<i64>,
}

/// Create/update body for a room.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomWrite {
    pub room_number: String,
    pub room_type: String,
    pub base_price: f64,
    pub max_occupancy: i64,
    pub status: String,
    pub active: bool,
    pub bookable: bool,
    #[serde(default)]
    pub amenity_feature_ids: Vec<i64>,
}

// ── Amenities ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmenityFeatureDto {
    pub id: i64,
    pub name: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmenityFeatureWrite {
    pub name: String,
    pub is_active: bool,
}

// ── Gallery ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItemDto {
    pub id: FlexId,
    /// Sometimes a number, sometimes a numeric string. Match numerically.
    pub property_id: Option<FlexId>,
    /// One of `ROOM`, `PROPERTY`, `FOOD`, `EVENT`, `AMENITY`.
    pub category: String,
    pub media: MediaDto,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaDto {
    pub url: String,
    pub file_name: Option<String>,
    #[serde(rename = "type")]
    pub media_type: Option<String>,
}

/// One file in a multipart gallery upload.
#[derive(Debug, Clone)]
pub struct GalleryUploadFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

// ── Policies ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyOptionDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyOptionWrite {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A property's attached policy set, from `GET /properties/{id}/policies`.
///
/// Time fields are in the backend's `"HH:MM AM/PM"` payload format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyPoliciesDto {
    #[serde(default)]
    pub policy_options: Vec<PolicyOptionDto>,
    pub check_in_time: Option<String>,
    pub check_out_time: Option<String>,
    pub cancellation_policy: Option<String>,
}

/// Body for `POST /policies/attach`, a full replace of the selected set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachPoliciesBody {
    pub property_id: i64,
    pub policy_option_ids: Vec<i64>,
    pub check_in_time: String,
    pub check_out_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_policy: Option<String>,
}

// ── Events ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    pub id: FlexId,
    pub title: String,
    pub location_id: Option<FlexId>,
    #[serde(default = "default_true")]
    pub active: bool,
    /// ISO 8601 date (`YYYY-MM-DD`).
    pub date: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventWrite {
    pub title: String,
    pub location_id: i64,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub active: bool,
}

// ── Menu / Tables / Pricing ──────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemDto {
    pub id: FlexId,
    pub property_id: Option<FlexId>,
    pub name: String,
    pub price: f64,
    pub category: Option<String>,
    #[serde(default = "default_true")]
    pub available: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemWrite {
    pub name: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableDto {
    pub id: FlexId,
    pub property_id: Option<FlexId>,
    pub table_number: String,
    pub seats: i64,
    pub zone: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableWrite {
    pub table_number: String,
    pub seats: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingSeasonDto {
    pub id: FlexId,
    pub property_id: Option<FlexId>,
    pub name: String,
    /// ISO 8601 dates (`YYYY-MM-DD`).
    pub start_date: String,
    pub end_date: String,
    pub multiplier: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingSeasonWrite {
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub multiplier: f64,
}

fn default_true() -> bool {
    true
}
