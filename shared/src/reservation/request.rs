//! Create/update request body

use super::ReservedServices;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Body of `POST /reserve` and `PUT /reserve/{id}`
///
/// The per-category service lists are flattened to the top level, matching
/// the persisted record's keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    pub event_type: String,
    /// The backend models dates as an array; the form books a single date
    pub dates: Vec<NaiveDate>,
    pub guest_count: u32,
    pub establishment_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(flatten)]
    pub services: ReservedServices,
}
