// ── Command API ──
//
// All write operations against the open property flow through a unified
// `Command` enum. Each variant carries a typed request that validates
// before any network call; the session routes the command to the
// backend and refreshes the affected scope on success.

pub mod requests;

use crate::error::CoreError;
use crate::model::{DiningTable, GalleryItem, MenuItem, PricingSeason, Property, Room, VenueEvent};
use crate::session::SliceKind;

pub use requests::{
    AttachPoliciesRequest, EventRequest, GalleryUploadRequest, ListingRequest, MenuItemRequest,
    PricingSeasonRequest, PropertyRequest, RoomRequest, TableRequest,
};

/// A command envelope sent through the command channel.
/// Contains the command and a oneshot response channel.
pub(crate) struct CommandEnvelope {
    pub command: Command,
    pub response_tx: tokio::sync::oneshot::Sender<Result<CommandResult, CoreError>>,
}

/// All write operations scoped to the open property.
#[derive(Debug, Clone)]
pub enum Command {
    // ── Property ─────────────────────────────────────────────────────
    UpdateProperty(PropertyRequest),
    EnableProperty,
    DisableProperty,
    /// Full replace of the property's linked amenity set.
    SetAmenities { amenity_ids: Vec<i64> },

    // ── Rooms ────────────────────────────────────────────────────────
    CreateRoom(RoomRequest),
    UpdateRoom { room_id: i64, request: RoomRequest },
    DeleteRoom { room_id: i64 },

    // ── Policies ─────────────────────────────────────────────────────
    AttachPolicies(AttachPoliciesRequest),

    // ── Gallery ──────────────────────────────────────────────────────
    UploadGalleryMedia(GalleryUploadRequest),
    DeleteGalleryItem { gallery_id: i64 },

    // ── Menu ─────────────────────────────────────────────────────────
    CreateMenuItem(MenuItemRequest),
    UpdateMenuItem { item_id: i64, request: MenuItemRequest },
    DeleteMenuItem { item_id: i64 },

    // ── Tables ───────────────────────────────────────────────────────
    CreateTable(TableRequest),
    UpdateTable { table_id: i64, request: TableRequest },
    DeleteTable { table_id: i64 },

    // ── Pricing seasons ──────────────────────────────────────────────
    CreatePricingSeason(PricingSeasonRequest),
    UpdatePricingSeason {
        season_id: i64,
        request: PricingSeasonRequest,
    },
    DeletePricingSeason { season_id: i64 },

    // ── Events ───────────────────────────────────────────────────────
    CreateEvent(EventRequest),
    DeleteEvent { event_id: i64 },
}

impl Command {
    /// Validate the carried request. Runs before the command enters the
    /// channel; an invalid command never reaches the backend.
    pub fn validate(&self) -> Result<(), CoreError> {
        match self {
            Command::UpdateProperty(req) => req.validate(),
            Command::CreateRoom(req) | Command::UpdateRoom { request: req, .. } => req.validate(),
            Command::AttachPolicies(req) => req.validate(),
            Command::UploadGalleryMedia(req) => req.validate(),
            Command::CreateMenuItem(req) | Command::UpdateMenuItem { request: req, .. } => {
                req.validate()
            }
            Command::CreateTable(req) | Command::UpdateTable { request: req, .. } => req.validate(),
            Command::CreatePricingSeason(req)
            | Command::UpdatePricingSeason { request: req, .. } => req.validate(),
            Command::CreateEvent(req) => req.validate(),
            Command::EnableProperty
            | Command::DisableProperty
            | Command::SetAmenities { .. }
            | Command::DeleteRoom { .. }
            | Command::DeleteGalleryItem { .. }
            | Command::DeleteMenuItem { .. }
            | Command::DeleteTable { .. }
            | Command::DeletePricingSeason { .. }
            | Command::DeleteEvent { .. } => Ok(()),
        }
    }

    /// The slice a failure notice is attributed to.
    pub(crate) fn slice(&self) -> SliceKind {
        match self {
            Command::UpdateProperty(_)
            | Command::EnableProperty
            | Command::DisableProperty => SliceKind::Overview,
            Command::SetAmenities { .. } => SliceKind::Amenities,
            Command::CreateRoom(_) | Command::UpdateRoom { .. } | Command::DeleteRoom { .. } => {
                SliceKind::Rooms
            }
            Command::AttachPolicies(_) => SliceKind::Policies,
            Command::UploadGalleryMedia(_) | Command::DeleteGalleryItem { .. } => {
                SliceKind::Gallery
            }
            Command::CreateMenuItem(_)
            | Command::UpdateMenuItem { .. }
            | Command::DeleteMenuItem { .. } => SliceKind::Menu,
            Command::CreateTable(_)
            | Command::UpdateTable { .. }
            | Command::DeleteTable { .. } => SliceKind::Tables,
            Command::CreatePricingSeason(_)
            | Command::UpdatePricingSeason { .. }
            | Command::DeletePricingSeason { .. } => SliceKind::Pricing,
            Command::CreateEvent(_) | Command::DeleteEvent { .. } => SliceKind::Events,
        }
    }

    /// The scope to refresh after the command succeeds.
    pub(crate) fn refresh_scope(&self) -> RefreshScope {
        match self {
            Command::UpdateProperty(_)
            | Command::EnableProperty
            | Command::DisableProperty
            | Command::SetAmenities { .. } => RefreshScope::Overview,
            Command::CreateRoom(_)
            | Command::UpdateRoom { .. }
            | Command::DeleteRoom { .. }
            | Command::AttachPolicies(_)
            | Command::UploadGalleryMedia(_)
            | Command::DeleteGalleryItem { .. } => RefreshScope::Primary,
            Command::CreateMenuItem(_)
            | Command::UpdateMenuItem { .. }
            | Command::DeleteMenuItem { .. } => RefreshScope::Menu,
            Command::CreateTable(_)
            | Command::UpdateTable { .. }
            | Command::DeleteTable { .. } => RefreshScope::Tables,
            Command::CreatePricingSeason(_)
            | Command::UpdatePricingSeason { .. }
            | Command::DeletePricingSeason { .. } => RefreshScope::Pricing,
            Command::CreateEvent(_) | Command::DeleteEvent { .. } => RefreshScope::Events,
        }
    }
}

/// Which part of the composite record a successful command refreshes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RefreshScope {
    /// The rooms/gallery/policies fan-out.
    Primary,
    /// The property record itself (and its amenity links).
    Overview,
    Menu,
    Tables,
    Pricing,
    Events,
}

/// Result payload of a successfully executed command.
#[derive(Debug, Clone)]
pub enum CommandResult {
    Done,
    Property(Property),
    Room(Room),
    GalleryItems(Vec<GalleryItem>),
    MenuItem(MenuItem),
    Table(DiningTable),
    PricingSeason(PricingSeason),
    Event(VenueEvent),
}
