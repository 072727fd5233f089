//! Catalog models
//!
//! Read-only rows fetched from the backend catalog endpoints, plus the
//! unified `CatalogItem` view the selection model works with.

pub mod catalog;
pub mod establishment;
pub mod event_type;

pub use catalog::{
    AdditionalServiceRow, CatalogItem, CateringRow, DecorationRow, EntertainmentRow,
    ServiceCategory,
};
pub use establishment::Establishment;
pub use event_type::EventType;
