// ── Typed request structs for Command payloads ──
//
// Each request mirrors one edit form. `validate()` runs before any
// network call: non-finite or negative numerics are rejected here
// instead of being silently coerced on the way to the backend.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use hostly_api::types::{
    AttachPoliciesBody, EventWrite, ListingDto, MenuItemWrite, PricingSeasonWrite, PropertyWrite,
    RoomWrite, TableWrite,
};

use crate::error::CoreError;
use crate::model::{GalleryCategory, PropertyKind, RoomStatus, RoomType};
use crate::time::to_payload_time;

// ── Validation helpers ─────────────────────────────────────────────

fn require_finite(field: &str, value: f64) -> Result<(), CoreError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CoreError::ValidationFailed {
            message: format!("{field} must be a finite number"),
        })
    }
}

fn require_non_negative(field: &str, value: f64) -> Result<(), CoreError> {
    require_finite(field, value)?;
    if value < 0.0 {
        return Err(CoreError::ValidationFailed {
            message: format!("{field} must not be negative"),
        });
    }
    Ok(())
}

fn require_non_empty(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::ValidationFailed {
            message: format!("{field} must not be empty"),
        });
    }
    Ok(())
}

/// Validate an in-memory `"HH:MM"` time.
fn require_wall_time(field: &str, value: &str) -> Result<(), CoreError> {
    let valid = match value.split_once(':') {
        Some((h, m)) => {
            matches!(h.parse::<u32>(), Ok(hour) if hour < 24)
                && matches!(m.parse::<u32>(), Ok(minute) if minute < 60)
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(CoreError::ValidationFailed {
            message: format!("{field} must be a HH:MM time, got {value:?}"),
        })
    }
}

// ── Property ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingRequest {
    pub price: Option<f64>,
    pub capacity: Option<i64>,
    pub rating: Option<f64>,
    pub tagline: Option<String>,
    pub gst_percentage: Option<f64>,
    pub discount_amount: Option<f64>,
}

impl ListingRequest {
    fn validate(&self) -> Result<(), CoreError> {
        if let Some(price) = self.price {
            require_non_negative("price", price)?;
        }
        if let Some(rating) = self.rating {
            require_finite("rating", rating)?;
            if !(0.0..=5.0).contains(&rating) {
                return Err(CoreError::ValidationFailed {
                    message: format!("rating must be between 0 and 5, got {rating}"),
                });
            }
        }
        if let Some(gst) = self.gst_percentage {
            require_non_negative("gst_percentage", gst)?;
        }
        if let Some(discount) = self.discount_amount {
            require_non_negative("discount_amount", discount)?;
        }
        if let Some(capacity) = self.capacity {
            if capacity < 0 {
                return Err(CoreError::ValidationFailed {
                    message: format!("capacity must not be negative, got {capacity}"),
                });
            }
        }
        Ok(())
    }

    fn into_dto(self) -> ListingDto {
        ListingDto {
            price: self.price,
            capacity: self.capacity,
            rating: self.rating,
            tagline: self.tagline,
            gst_percentage: self.gst_percentage,
            discount_amount: self.discount_amount,
        }
    }
}

/// Full property write body; the backend PUT replaces the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyRequest {
    pub name: String,
    pub kinds: Vec<PropertyKind>,
    pub location: Option<String>,
    pub address: Option<String>,
    pub listing: Option<ListingRequest>,
}

impl PropertyRequest {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_non_empty("name", &self.name)?;
        if self.kinds.is_empty() {
            return Err(CoreError::ValidationFailed {
                message: "at least one property kind is required".into(),
            });
        }
        if let Some(ref listing) = self.listing {
            listing.validate()?;
        }
        Ok(())
    }

    pub fn into_write(self) -> PropertyWrite {
        PropertyWrite {
            property_name: self.name,
            property_types: self.kinds.iter().map(ToString::to_string).collect(),
            location_name: self.location,
            address: self.address,
            listing: self.listing.map(ListingRequest::into_dto),
        }
    }
}

// ── Room ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct RoomRequest {
    pub room_number: String,
    pub room_type: RoomType,
    pub base_price: f64,
    pub max_occupancy: i64,
    pub status: RoomStatus,
    pub active: bool,
    pub bookable: bool,
    pub amenity_ids: Vec<i64>,
}

impl RoomRequest {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_non_empty("room_number", &self.room_number)?;
        require_non_negative("base_price", self.base_price)?;
        if self.max_occupancy < 1 {
            return Err(CoreError::ValidationFailed {
                message: format!("max_occupancy must be at least 1, got {}", self.max_occupancy),
            });
        }
        Ok(())
    }

    pub(crate) fn into_write(self) -> RoomWrite {
        RoomWrite {
            room_number: self.room_number,
            room_type: self.room_type.to_string(),
            base_price: self.base_price,
            max_occupancy: self.max_occupancy,
            status: self.status.to_string(),
            active: self.active,
            bookable: self.bookable,
            amenity_feature_ids: self.amenity_ids,
        }
    }
}

// ── Policies ───────────────────────────────────────────────────────

/// Full replace of a property's policy attachment. Times are in-memory
/// `"HH:MM"`; the payload suffix is applied at conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachPoliciesRequest {
    pub policy_option_ids: Vec<i64>,
    pub check_in_time: String,
    pub check_out_time: String,
    pub cancellation_policy: Option<String>,
}

impl AttachPoliciesRequest {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_wall_time("check_in_time", &self.check_in_time)?;
        require_wall_time("check_out_time", &self.check_out_time)?;
        Ok(())
    }

    pub(crate) fn into_body(self, property_id: i64) -> AttachPoliciesBody {
        AttachPoliciesBody {
            property_id,
            policy_option_ids: self.policy_option_ids,
            check_in_time: to_payload_time(&self.check_in_time),
            check_out_time: to_payload_time(&self.check_out_time),
            cancellation_policy: self.cancellation_policy,
        }
    }
}

// ── Gallery ────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct GalleryUploadRequest {
    pub category: GalleryCategory,
    pub files: Vec<hostly_api::types::GalleryUploadFile>,
}

impl GalleryUploadRequest {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.files.is_empty() {
            return Err(CoreError::ValidationFailed {
                message: "at least one file is required".into(),
            });
        }
        for file in &self.files {
            require_non_empty("file_name", &file.file_name)?;
        }
        Ok(())
    }
}

// ── Menu / Tables / Pricing / Events ───────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemRequest {
    pub name: String,
    pub price: f64,
    pub category: Option<String>,
    pub available: bool,
}

impl MenuItemRequest {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_non_empty("name", &self.name)?;
        require_non_negative("price", self.price)?;
        Ok(())
    }

    pub(crate) fn into_write(self) -> MenuItemWrite {
        MenuItemWrite {
            name: self.name,
            price: self.price,
            category: self.category,
            available: self.available,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableRequest {
    pub table_number: String,
    pub seats: i64,
    pub zone: Option<String>,
    pub active: bool,
}

impl TableRequest {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_non_empty("table_number", &self.table_number)?;
        if self.seats < 1 {
            return Err(CoreError::ValidationFailed {
                message: format!("seats must be at least 1, got {}", self.seats),
            });
        }
        Ok(())
    }

    pub(crate) fn into_write(self) -> TableWrite {
        TableWrite {
            table_number: self.table_number,
            seats: self.seats,
            zone: self.zone,
            active: self.active,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingSeasonRequest {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub multiplier: f64,
}

impl PricingSeasonRequest {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_non_empty("name", &self.name)?;
        require_finite("multiplier", self.multiplier)?;
        if self.multiplier <= 0.0 {
            return Err(CoreError::ValidationFailed {
                message: format!("multiplier must be positive, got {}", self.multiplier),
            });
        }
        if self.end_date < self.start_date {
            return Err(CoreError::ValidationFailed {
                message: "end_date must not precede start_date".into(),
            });
        }
        Ok(())
    }

    pub(crate) fn into_write(self) -> PricingSeasonWrite {
        PricingSeasonWrite {
            name: self.name,
            start_date: self.start_date.format("%Y-%m-%d").to_string(),
            end_date: self.end_date.format("%Y-%m-%d").to_string(),
            multiplier: self.multiplier,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRequest {
    pub title: String,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub active: bool,
}

impl EventRequest {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_non_empty("title", &self.title)?;
        Ok(())
    }

    pub(crate) fn into_write(self, location_id: i64) -> EventWrite {
        EventWrite {
            title: self.title,
            location_id,
            date: self.date.format("%Y-%m-%d").to_string(),
            description: self.description,
            active: self.active,
        }
    }
}
