// ── API-to-domain type conversions ──
//
// Bridges raw `hostly_api` wire types into canonical `hostly_core::model`
// domain types. Each conversion normalizes field names, parses strings
// into strong types, and fills sensible defaults for missing optional
// data. Records the backend cannot identify (non-numeric ids) are
// dropped rather than guessed at.

use std::str::FromStr;

use chrono::NaiveDate;
use tracing::warn;

use hostly_api::types::{
    AmenityFeatureDto, EventDto, GalleryItemDto, ListingDto, MenuItemDto, PolicyOptionDto,
    PricingSeasonDto, PropertyDto, PropertyPoliciesDto, RoomDto, TableDto,
};

use crate::model::{
    AmenityFeature, DiningTable, GalleryCategory, GalleryItem, Listing, Media, MenuItem,
    PolicyOption, PolicySet, PricingSeason, Property, PropertyKind, Room, RoomStatus, RoomType,
    VenueEvent,
};
use crate::time::to_input_time;

// ── Helpers ────────────────────────────────────────────────────────

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

// ── Property ───────────────────────────────────────────────────────

/// Convert a property DTO, or `None` when the id is not numeric (such a
/// record cannot be addressed by any follow-up call).
pub fn property_from_dto(dto: PropertyDto) -> Option<Property> {
    let Some(id) = dto.id.as_i64() else {
        warn!(id = %dto.id, name = %dto.property_name, "dropping property with non-numeric id");
        return None;
    };

    let kinds: Vec<PropertyKind> = dto
        .property_types
        .into_iter()
        .map(|raw| PropertyKind::from_str(&raw).unwrap_or_else(|_| PropertyKind::Other(raw)))
        .collect();

    Some(Property {
        id,
        name: dto.property_name,
        kinds,
        location: dto.location_name,
        address: dto.address,
        active: dto.is_active,
        listing: dto.listings.into_iter().next().map(listing_from_dto),
        amenity_ids: dto.amenity_feature_ids,
    })
}

fn listing_from_dto(dto: ListingDto) -> Listing {
    Listing {
        price: dto.price,
        capacity: dto.capacity,
        rating: dto.rating,
        tagline: dto.tagline,
        gst_percentage: dto.gst_percentage,
        discount_amount: dto.discount_amount,
    }
}

// ── Room ───────────────────────────────────────────────────────────

pub fn room_from_dto(dto: RoomDto) -> Option<Room> {
    let id = dto.id.as_i64()?;

    Some(Room {
        id,
        property_id: dto.property_id.and_then(|p| p.as_i64()),
        room_number: dto.room_number,
        room_type: RoomType::from_str(&dto.room_type)
            .unwrap_or_else(|_| RoomType::Other(dto.room_type)),
        base_price: dto.base_price,
        max_occupancy: dto.max_occupancy,
        status: RoomStatus::from_str(&dto.status)
            .unwrap_or_else(|_| RoomStatus::Other(dto.status)),
        active: dto.active,
        bookable: dto.bookable,
        amenity_ids: dto.amenity_feature_ids,
    })
}

// ── Amenity ────────────────────────────────────────────────────────

pub fn amenity_from_dto(dto: AmenityFeatureDto) -> AmenityFeature {
    AmenityFeature {
        id: dto.id,
        name: dto.name,
        active: dto.is_active,
    }
}

// ── Gallery ────────────────────────────────────────────────────────

pub fn gallery_item_from_dto(dto: GalleryItemDto) -> Option<GalleryItem> {
    let id = dto.id.as_i64()?;

    Some(GalleryItem {
        id,
        property_id: dto.property_id.and_then(|p| p.as_i64()),
        category: GalleryCategory::from_str(&dto.category)
            .unwrap_or_else(|_| GalleryCategory::Other(dto.category)),
        media: Media {
            url: dto.media.url,
            file_name: dto.media.file_name,
            media_type: dto.media.media_type,
        },
        active: dto.is_active,
    })
}

// ── Policies ───────────────────────────────────────────────────────

pub fn policy_option_from_dto(dto: PolicyOptionDto) -> PolicyOption {
    PolicyOption {
        id: dto.id,
        name: dto.name,
        description: dto.description,
        active: dto.is_active,
    }
}

/// Convert the attached policy payload; times are normalized from the
/// `"HH:MM AM/PM"` payload form to the in-memory `"HH:MM"` form.
pub fn policy_set_from_dto(dto: PropertyPoliciesDto) -> PolicySet {
    PolicySet {
        options: dto
            .policy_options
            .into_iter()
            .map(policy_option_from_dto)
            .collect(),
        check_in_time: dto.check_in_time.as_deref().map(to_input_time),
        check_out_time: dto.check_out_time.as_deref().map(to_input_time),
        cancellation_policy: dto.cancellation_policy,
    }
}

// ── Venue records ──────────────────────────────────────────────────

pub fn menu_item_from_dto(dto: MenuItemDto) -> Option<MenuItem> {
    let id = dto.id.as_i64()?;

    Some(MenuItem {
        id,
        property_id: dto.property_id.and_then(|p| p.as_i64()),
        name: dto.name,
        price: dto.price,
        category: dto.category,
        available: dto.available,
    })
}

pub fn table_from_dto(dto: TableDto) -> Option<DiningTable> {
    let id = dto.id.as_i64()?;

    Some(DiningTable {
        id,
        property_id: dto.property_id.and_then(|p| p.as_i64()),
        table_number: dto.table_number,
        seats: dto.seats,
        zone: dto.zone,
        active: dto.active,
    })
}

pub fn pricing_season_from_dto(dto: PricingSeasonDto) -> Option<PricingSeason> {
    let id = dto.id.as_i64()?;
    let start_date = parse_date(&dto.start_date)?;
    let end_date = parse_date(&dto.end_date)?;

    Some(PricingSeason {
        id,
        property_id: dto.property_id.and_then(|p| p.as_i64()),
        name: dto.name,
        start_date,
        end_date,
        multiplier: dto.multiplier,
    })
}

pub fn event_from_dto(dto: EventDto) -> Option<VenueEvent> {
    let id = dto.id.as_i64()?;

    Some(VenueEvent {
        id,
        title: dto.title,
        location_id: dto.location_id.and_then(|p| p.as_i64()),
        active: dto.active,
        date: dto.date.as_deref().and_then(parse_date),
        description: dto.description,
    })
}
