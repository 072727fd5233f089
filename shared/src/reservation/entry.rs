//! Per-category wire entries
//!
//! The backend stores a reservation's services as a record keyed by
//! category; the same shapes travel in the create/update request body.

use serde::{Deserialize, Serialize};

/// Entertainment entry: id plus booked hours
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntertainmentEntry {
    pub id: String,
    pub hours: u32,
}

/// Decoration entry: at most one per reservation, id only
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DecorationEntry {
    pub id: String,
}

/// Catering entry: id, menu type, and dish count
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CateringEntry {
    pub id: String,
    pub menu_type: String,
    pub number_of_dishes: u32,
}

/// Additional-service entry: id plus unit count
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdditionalEntry {
    pub id: String,
    pub quantity: u32,
}

/// Services grouped by category
///
/// `decoration` serializes as an explicit `null` when absent; the backend
/// expects the key to be present either way.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReservedServices {
    #[serde(default)]
    pub entertainment: Vec<EntertainmentEntry>,
    #[serde(default)]
    pub decoration: Option<DecorationEntry>,
    #[serde(default)]
    pub catering: Vec<CateringEntry>,
    #[serde(default)]
    pub additional_services: Vec<AdditionalEntry>,
}

impl ReservedServices {
    /// True when no service of any category is present
    pub fn is_empty(&self) -> bool {
        self.entertainment.is_empty()
            && self.decoration.is_none()
            && self.catering.is_empty()
            && self.additional_services.is_empty()
    }

    /// Total number of entries across categories
    pub fn len(&self) -> usize {
        self.entertainment.len()
            + usize::from(self.decoration.is_some())
            + self.catering.len()
            + self.additional_services.len()
    }
}
