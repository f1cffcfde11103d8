//! Reactive session layer between `hostly-api` and UI consumers.
//!
//! This crate owns the business logic, domain model, and reactive data
//! infrastructure for the hostly workspace:
//!
//! - **[`PropertySession`]**: per-property aggregator managing the full
//!   lifecycle: [`open()`](PropertySession::open) seeds the overview and
//!   fans out the initial refresh of rooms, gallery, and policies, then
//!   spawns a command processor for mutations. Slice fetch failures
//!   degrade to [`Notice`]s instead of failing the composite record.
//!
//! - **[`SliceCell<T>`](store::SliceCell)**: reactive storage for one
//!   sub-resource array, built on `tokio::sync::watch`. Refreshes are
//!   wholesale replacements; subscribers receive push-based snapshots
//!   via [`SliceStream<T>`](store::SliceStream).
//!
//! - **[`Command`]**: typed mutation requests routed through an `mpsc`
//!   channel to the session's command processor. Every request validates
//!   locally before any network call; a successful mutation triggers
//!   exactly one refresh of the affected scope.
//!
//! - **Domain model** ([`model`]): canonical types (`Property`, `Room`,
//!   `GalleryItem`, `PolicySet`, `MenuItem`, etc.) converted from the
//!   backend's loose wire shapes in [`convert`].

pub mod command;
pub mod config;
pub mod convert;
pub mod error;
pub mod model;
pub mod session;
pub mod store;
pub mod tabs;
pub mod time;

// ── Primary re-exports ──────────────────────────────────────────────
pub use command::requests::*;
pub use command::{Command, CommandResult};
pub use config::{AuthCredentials, BackendConfig, TlsVerification};
pub use error::CoreError;
pub use session::{Notice, PropertySession, SessionState, SliceKind};
pub use store::{SliceCell, SliceStream, ValueCell};
pub use tabs::TabId;

// Re-export model types at the crate root for ergonomics.
pub use model::{
    AmenityCatalog,
    AmenityFeature,
    DiningTable,
    GalleryCategory,
    GalleryItem,
    Listing,
    Media,
    MenuItem,
    PolicyOption,
    PolicySet,
    PricingSeason,
    Property,
    PropertyKind,
    Room,
    RoomStatus,
    RoomType,
    VenueEvent,
};
