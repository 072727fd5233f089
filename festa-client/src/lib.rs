//! Festa Client - reservation composition and pricing engine
//!
//! Assembles a heterogeneous set of service selections into a reservation
//! draft, keeps the running total in sync, validates before submission,
//! serializes into the backend request shape, and drives the reservation
//! lifecycle over HTTP.

pub mod catalog;
pub mod config;
pub mod dialog;
pub mod error;
pub mod form;
pub mod http;
pub mod lifecycle;
pub mod pricing;
pub mod reconcile;
pub mod serializer;
pub mod session;
pub mod validator;

pub use catalog::{Catalog, CatalogReader};
pub use config::ClientConfig;
pub use dialog::QuantityPrompt;
pub use error::{ClientError, ClientResult};
pub use form::{AddOutcome, FormMode, ReservationDraft, ReservationForm, SubmitOutcome};
pub use http::HttpClient;
pub use lifecycle::{CancelPrompt, ReservationClient};
pub use reconcile::{EditLoad, EditSession};
pub use session::{MemorySession, Redirect, SessionContext};
pub use validator::ValidationError;

// Re-export shared types for convenience
pub use shared::{
    CatalogItem, Establishment, EventType, PersistedReservation, ReservationRequest,
    ReservationStatus, ReservedServices, ServiceCategory, ServiceSelection,
};
