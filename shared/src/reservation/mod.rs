//! Reservation types
//!
//! The selection tagged union with per-category cost derivation, the wire
//! entries grouped by category, the request body, and the persisted
//! reservation shape returned by the backend.

pub mod entry;
pub mod persisted;
pub mod request;
pub mod selection;
pub mod status;

pub use entry::{
    AdditionalEntry, CateringEntry, DecorationEntry, EntertainmentEntry, ReservedServices,
};
pub use persisted::PersistedReservation;
pub use request::ReservationRequest;
pub use selection::ServiceSelection;
pub use status::ReservationStatus;
