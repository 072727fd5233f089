//! Reservation validator
//!
//! Gate run immediately before submission. Short-circuits on the first
//! violated rule; each rule has its own user-facing message. Validation
//! failures never reach the network.

use crate::form::ReservationDraft;
use chrono::{Local, NaiveDate};
use thiserror::Error;

/// First violated submission rule
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please select an establishment")]
    EstablishmentRequired,

    #[error("Please choose an event date")]
    DateRequired,

    #[error("Please select an event type")]
    EventTypeRequired,

    #[error("The event date cannot be in the past")]
    DateInPast,
}

/// Validate against today's date
pub fn validate(draft: &ReservationDraft) -> Result<(), ValidationError> {
    validate_at(draft, Local::now().date_naive())
}

/// Validate against an explicit "today" (date-only comparison; time of
/// day never matters)
pub fn validate_at(draft: &ReservationDraft, today: NaiveDate) -> Result<(), ValidationError> {
    if draft.establishment_id.is_none() {
        return Err(ValidationError::EstablishmentRequired);
    }
    let Some(date) = draft.event_date else {
        return Err(ValidationError::DateRequired);
    };
    if draft.event_type.is_none() {
        return Err(ValidationError::EventTypeRequired);
    }
    if date < today {
        return Err(ValidationError::DateInPast);
    }
    Ok(())
}
