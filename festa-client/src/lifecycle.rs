//! Reservation lifecycle client
//!
//! Typed wrappers over the reservation endpoints plus the user-facing
//! cancel handshake. Create and update are driven through
//! [`ReservationForm::submit`](crate::ReservationForm::submit), which
//! gates on the validator first.

use crate::{ClientError, ClientResult, HttpClient};
use shared::{PersistedReservation, ReservationRequest};
use tracing::info;

/// Message shown when the backend gave nothing worth repeating
pub const GENERIC_FAILURE: &str = "Could not complete the request. Please try again.";

/// User-facing message for a failed request: the backend's own message
/// verbatim when present, a generic fallback otherwise
pub fn failure_message(err: &ClientError) -> String {
    err.backend_message()
        .map(str::to_string)
        .unwrap_or_else(|| GENERIC_FAILURE.to_string())
}

/// Pending cancel confirmation
///
/// Issued only for reservations that may still be cancelled; the PATCH is
/// not sent until the prompt is confirmed. Dropping it dismisses the
/// action.
#[derive(Debug, Clone)]
pub struct CancelPrompt {
    reservation_id: String,
}

impl CancelPrompt {
    pub fn reservation_id(&self) -> &str {
        &self.reservation_id
    }

    /// Keep the reservation; nothing is sent
    pub fn dismiss(self) {}
}

/// Client for the reservation endpoints
#[derive(Clone)]
pub struct ReservationClient {
    http: HttpClient,
}

impl ReservationClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// `POST /reserve`
    pub async fn create(&self, request: &ReservationRequest) -> ClientResult<PersistedReservation> {
        self.http.post("/reserve", request).await
    }

    /// `PUT /reserve/{id}`
    pub async fn update(
        &self,
        id: &str,
        request: &ReservationRequest,
    ) -> ClientResult<PersistedReservation> {
        self.http.put(&format!("/reserve/{}", id), request).await
    }

    /// `GET /reserve/{id}`
    pub async fn fetch(&self, id: &str) -> ClientResult<PersistedReservation> {
        self.http.get(&format!("/reserve/{}", id)).await
    }

    /// `GET /reserve` — the user's reservations, for the list screen
    pub async fn list(&self) -> ClientResult<Vec<PersistedReservation>> {
        self.http.get("/reserve").await
    }

    /// Start the cancel handshake. Returns `None` when the status no
    /// longer allows cancellation, so the UI never offers the action.
    pub fn request_cancel(&self, reservation: &PersistedReservation) -> Option<CancelPrompt> {
        reservation.status.can_cancel().then(|| CancelPrompt {
            reservation_id: reservation.id.clone(),
        })
    }

    /// `PATCH /reserve/{id}/cancel` — only reachable through a confirmed
    /// [`CancelPrompt`]
    pub async fn confirm_cancel(
        &self,
        prompt: CancelPrompt,
    ) -> ClientResult<PersistedReservation> {
        let updated = self
            .http
            .patch_empty::<PersistedReservation>(&format!(
                "/reserve/{}/cancel",
                prompt.reservation_id
            ))
            .await?;
        info!(id = %updated.id, status = ?updated.status, "reservation cancelled");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_prefers_backend_text() {
        assert_eq!(
            failure_message(&ClientError::Business("Establishment at capacity".to_string())),
            "Establishment at capacity"
        );
        assert_eq!(
            failure_message(&ClientError::Business(String::new())),
            GENERIC_FAILURE
        );
        assert_eq!(
            failure_message(&ClientError::Internal("stack trace".to_string())),
            GENERIC_FAILURE
        );
    }
}
