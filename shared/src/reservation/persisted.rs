//! Persisted reservation shape

use super::{ReservationStatus, ReservedServices};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A reservation as stored by the backend
///
/// Services are already grouped by category and carry their own ids and
/// quantities, not embedded catalog items.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedReservation {
    pub id: String,
    #[serde(default)]
    pub status: ReservationStatus,
    pub event_type: String,
    #[serde(default)]
    pub dates: Vec<NaiveDate>,
    pub guest_count: u32,
    pub establishment_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(default)]
    pub services: ReservedServices,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
}

impl PersistedReservation {
    /// The single event date, when present
    pub fn event_date(&self) -> Option<NaiveDate> {
        self.dates.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_minimal_backend_payload() {
        let json = r#"{
            "id": "r1",
            "status": "SCHEDULED",
            "eventType": "ev-wedding",
            "dates": ["2026-10-01"],
            "guestCount": 40,
            "establishmentId": "est-1"
        }"#;
        let res: PersistedReservation = serde_json::from_str(json).unwrap();
        assert_eq!(res.event_date(), NaiveDate::from_ymd_opt(2026, 10, 1));
        assert!(res.services.is_empty());
        assert!(res.status.is_editable());
    }
}
