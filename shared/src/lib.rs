//! Shared types for the Festa booking framework
//!
//! Domain and wire types used on both sides of the HTTP boundary:
//! catalog rows, service selections, reservation requests, and the
//! persisted reservation shape returned by the backend.

pub mod models;
pub mod reservation;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{CatalogItem, Establishment, EventType, ServiceCategory};
pub use reservation::{
    AdditionalEntry, CateringEntry, DecorationEntry, EntertainmentEntry, PersistedReservation,
    ReservationRequest, ReservationStatus, ReservedServices, ServiceSelection,
};
