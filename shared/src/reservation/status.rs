//! Reservation status workflow

use serde::{Deserialize, Serialize};

/// Reservation status
///
/// `SCHEDULED` is the only mutable state: it may be edited, and it may be
/// cancelled by the user. `COMPLETED` is entered server-side only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    #[default]
    Scheduled,
    Completed,
    Cancelled,
}

impl ReservationStatus {
    /// Whether the user may still edit this reservation
    pub fn is_editable(&self) -> bool {
        matches!(self, Self::Scheduled)
    }

    /// Whether the cancel action may be offered
    pub fn can_cancel(&self) -> bool {
        matches!(self, Self::Scheduled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_scheduled_can_cancel() {
        assert!(ReservationStatus::Scheduled.can_cancel());
        assert!(!ReservationStatus::Completed.can_cancel());
        assert!(!ReservationStatus::Cancelled.can_cancel());
    }

    #[test]
    fn test_wire_format_is_screaming_snake() {
        let status: ReservationStatus = serde_json::from_str("\"CANCELLED\"").unwrap();
        assert_eq!(status, ReservationStatus::Cancelled);
        assert_eq!(
            serde_json::to_string(&ReservationStatus::Scheduled).unwrap(),
            "\"SCHEDULED\""
        );
    }
}
