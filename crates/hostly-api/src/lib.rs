//! Async client for the Hostly admin REST backend.
//!
//! The backend is a conventional JSON-over-HTTP API for property listings,
//! rooms, amenities, gallery media, policies, and venue records. Response
//! shapes are not perfectly uniform across endpoints; see [`types`] for the
//! tolerant envelope and identifier types that smooth that over.

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

pub use client::AdminClient;
pub use error::Error;
pub use transport::{TlsMode, TransportConfig};
