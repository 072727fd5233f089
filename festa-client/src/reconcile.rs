//! Edit-mode reconciler
//!
//! Entering edit mode fetches the persisted reservation and rebuilds the
//! form from it. The persisted service block is deliberately not reflected
//! into the editable selection list; it is held aside and carried forward
//! verbatim if the user never touches services this session, so choices
//! the edit screen never re-displayed are not silently lost.

use crate::lifecycle::ReservationClient;
use crate::{Catalog, ClientError, Redirect, ReservationForm};
use shared::ReservedServices;
use tracing::error;

/// Message shown when the reservation could not be loaded
pub const LOAD_FAILURE: &str = "Could not load the reservation.";
/// Message shown when the reservation is past editing
pub const NOT_EDITABLE: &str = "This reservation can no longer be edited.";

/// Outcome of entering an edit session
#[derive(Debug)]
pub enum EditLoad {
    /// Loaded; the form is ready for edits
    Ready(EditSession),
    /// Terminal: navigate away, optionally showing a message first
    Redirect {
        target: Redirect,
        message: Option<String>,
    },
}

/// A loaded edit session over one reservation
#[derive(Debug, Clone)]
pub struct EditSession {
    form: ReservationForm,
}

impl EditSession {
    /// Fetch the reservation and reconstruct form state from it.
    ///
    /// An unauthorized response redirects straight to sign-in; any other
    /// failure surfaces a generic load error and redirects back to the
    /// reservation list. Reservations past `SCHEDULED` are not editable.
    pub async fn load(client: &ReservationClient, id: &str) -> EditLoad {
        match client.fetch(id).await {
            Ok(reservation) if !reservation.status.is_editable() => EditLoad::Redirect {
                target: Redirect::ReservationList,
                message: Some(NOT_EDITABLE.to_string()),
            },
            Ok(reservation) => EditLoad::Ready(Self {
                form: ReservationForm::edit(&reservation),
            }),
            Err(ClientError::Unauthorized) => EditLoad::Redirect {
                target: Redirect::SignIn,
                message: None,
            },
            Err(err) => {
                error!(id, %err, "failed to load reservation for editing");
                EditLoad::Redirect {
                    target: Redirect::ReservationList,
                    message: Some(LOAD_FAILURE.to_string()),
                }
            }
        }
    }

    pub fn form(&mut self) -> &mut ReservationForm {
        &mut self.form
    }

    pub fn into_form(self) -> ReservationForm {
        self.form
    }

    /// Read-only description of the persisted services that will be
    /// carried forward if the selection list stays untouched. Names are
    /// resolved from the catalog where possible, ids otherwise.
    pub fn original_summary(&self, catalog: &Catalog) -> Vec<String> {
        let Some(services) = self.form.original_services() else {
            return Vec::new();
        };
        summarize(services, catalog)
    }
}

fn summarize(services: &ReservedServices, catalog: &Catalog) -> Vec<String> {
    let mut lines = Vec::with_capacity(services.len());

    for entry in &services.entertainment {
        let name = catalog
            .entertainment
            .iter()
            .find(|row| row.id == entry.id)
            .map(|row| row.name.clone())
            .unwrap_or_else(|| entry.id.clone());
        lines.push(format!("{} ({} hours)", name, entry.hours));
    }
    if let Some(entry) = &services.decoration {
        let theme = catalog
            .decoration
            .iter()
            .find(|row| row.id == entry.id)
            .map(|row| row.theme.clone())
            .unwrap_or_else(|| entry.id.clone());
        lines.push(theme);
    }
    for entry in &services.catering {
        lines.push(format!(
            "{} ({} dishes)",
            entry.menu_type, entry.number_of_dishes
        ));
    }
    for entry in &services.additional_services {
        let name = catalog
            .additional
            .iter()
            .find(|row| row.id == entry.id)
            .map(|row| row.name.clone())
            .unwrap_or_else(|| entry.id.clone());
        lines.push(format!("{} x{}", name, entry.quantity));
    }

    lines
}
