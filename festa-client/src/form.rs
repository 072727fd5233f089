//! Reservation form
//!
//! `ReservationDraft` is the aggregate the user assembles: the required
//! header fields plus the ordered service selections. `ReservationForm`
//! wraps it with the interaction state the screens need: the quantity
//! prompt handshake, edit-mode carry-forward of persisted services, and
//! the in-flight submit guard.

use crate::dialog::QuantityPrompt;
use crate::lifecycle::{failure_message, ReservationClient};
use crate::{pricing, serializer, validator, Catalog, ClientError, ValidationError};
use chrono::NaiveDate;
use shared::{
    CatalogItem, ReservationRequest, ReservedServices, ServiceCategory, ServiceSelection,
};
use tracing::{debug, info};

/// In-progress reservation before submission
///
/// Created empty when the form mounts (or pre-seeded from a deep link),
/// mutated by every interaction, discarded on navigation away.
#[derive(Debug, Clone, Default)]
pub struct ReservationDraft {
    pub event_type: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub guest_count: u32,
    pub establishment_id: Option<String>,
    pub comments: Option<String>,
    selections: Vec<ServiceSelection>,
}

impl ReservationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a selection. A malformed catalog item (missing rate) is
    /// kept with a zero rate rather than rejected. A second decoration
    /// replaces the existing one in place instead of appending.
    pub fn add(&mut self, item: CatalogItem, category: ServiceCategory, quantity: Option<u32>) {
        let selection = ServiceSelection::new(item, category, quantity);
        debug!(
            item = %selection.item().id,
            category = ?category,
            quantity = ?selection.quantity(),
            "selection added"
        );

        if category == ServiceCategory::Decoration {
            if let Some(existing) = self
                .selections
                .iter_mut()
                .find(|s| s.category() == ServiceCategory::Decoration)
            {
                *existing = selection;
                return;
            }
        }
        self.selections.push(selection);
    }

    /// Remove the selection at `index`; out of range is a no-op
    pub fn remove(&mut self, index: usize) {
        if index < self.selections.len() {
            let removed = self.selections.remove(index);
            debug!(item = %removed.item().id, "selection removed");
        }
    }

    /// Read-only view of the current selections, in insertion order
    pub fn selections(&self) -> &[ServiceSelection] {
        &self.selections
    }
}

/// Whether this form creates a new reservation or updates an existing one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

/// Result of starting an "add service" interaction
#[derive(Debug)]
pub enum AddOutcome {
    /// Added directly (decoration, no quantity needed)
    Added,
    /// An existing decoration was replaced
    Replaced,
    /// A quantity prompt must be confirmed first
    Pending(QuantityPrompt),
}

/// Result of a submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Persisted; carry the returned id to the confirmation view
    Confirmed { id: String },
    /// A submission is already in flight; the click was ignored
    AlreadyInFlight,
    /// A local validation rule failed; nothing was sent
    Invalid(ValidationError),
    /// Session expired mid-flow
    RedirectToSignIn,
    /// Transport or backend failure; the draft is preserved for retry
    Failed { message: String },
}

/// Interactive reservation form state
#[derive(Debug, Clone)]
pub struct ReservationForm {
    pub draft: ReservationDraft,
    mode: FormMode,
    /// Raw persisted service block held in reserve during an edit session
    original_services: Option<ReservedServices>,
    /// Whether the user touched the service list this session
    services_touched: bool,
    submitting: bool,
}

impl Default for ReservationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ReservationForm {
    /// Empty create-mode form
    pub fn new() -> Self {
        Self {
            draft: ReservationDraft::new(),
            mode: FormMode::Create,
            original_services: None,
            services_touched: false,
            submitting: false,
        }
    }

    /// Create-mode form pre-seeded with one selection, for the
    /// single-service deep link entry point
    pub fn with_seed(item: CatalogItem, category: ServiceCategory, quantity: Option<u32>) -> Self {
        let mut form = Self::new();
        form.draft.add(item, category, quantity);
        form.services_touched = true;
        form
    }

    /// Edit-mode form over a fetched reservation. Header fields come from
    /// the persisted record; the editable selection list starts empty and
    /// the persisted service block is held aside for carry-forward.
    pub(crate) fn edit(reservation: &shared::PersistedReservation) -> Self {
        Self {
            draft: ReservationDraft {
                event_type: Some(reservation.event_type.clone()),
                event_date: reservation.event_date(),
                guest_count: reservation.guest_count,
                establishment_id: Some(reservation.establishment_id.clone()),
                comments: reservation.comments.clone(),
                selections: Vec::new(),
            },
            mode: FormMode::Edit {
                id: reservation.id.clone(),
            },
            original_services: Some(reservation.services.clone()),
            services_touched: false,
            submitting: false,
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    /// Persisted services that will be carried forward if the list stays
    /// untouched (edit mode only)
    pub fn original_services(&self) -> Option<&ReservedServices> {
        self.original_services.as_ref()
    }

    /// Start adding a catalog item. Decoration is added (or replaces the
    /// existing one) immediately; every other category must resolve a
    /// quantity first.
    pub fn begin_add(&mut self, item: CatalogItem) -> AddOutcome {
        if item.category == ServiceCategory::Decoration {
            let replaced = self
                .draft
                .selections()
                .iter()
                .any(|s| s.category() == ServiceCategory::Decoration);
            self.draft.add(item, ServiceCategory::Decoration, None);
            self.services_touched = true;
            return if replaced {
                AddOutcome::Replaced
            } else {
                AddOutcome::Added
            };
        }

        AddOutcome::Pending(QuantityPrompt::new(item, self.draft.guest_count))
    }

    /// Confirm a pending quantity prompt with the raw user input, adding
    /// the selection. Dropping the prompt instead cancels the add.
    pub fn confirm_add(&mut self, prompt: QuantityPrompt, input: &str) {
        let (item, quantity) = prompt.resolve(input);
        let category = item.category;
        self.draft.add(item, category, Some(quantity));
        self.services_touched = true;
    }

    /// Remove the selection at `index`
    pub fn remove_service(&mut self, index: usize) {
        self.draft.remove(index);
        self.services_touched = true;
    }

    /// Running total: selections plus the chosen establishment's fee
    pub fn total_cost(&self, catalog: &Catalog) -> f64 {
        pricing::total_cost(
            self.draft.selections(),
            self.draft.guest_count,
            catalog.establishment_fee(self.draft.establishment_id.as_deref()),
        )
    }

    /// Whether a submission is in flight (the trigger must be disabled)
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Build the request body this form would submit: the freshly grouped
    /// selections, or the untouched persisted block in edit mode
    pub fn build_request(&self) -> ReservationRequest {
        match (&self.original_services, self.services_touched) {
            (Some(original), false) => {
                serializer::request_with_services(&self.draft, original.clone())
            }
            _ => serializer::request_from_draft(&self.draft),
        }
    }

    /// Validate and submit. Create or update according to the form mode;
    /// on success the draft's job is done and the returned id drives the
    /// confirmation view. On failure the draft is preserved for retry.
    pub async fn submit(&mut self, client: &ReservationClient) -> SubmitOutcome {
        if self.submitting {
            return SubmitOutcome::AlreadyInFlight;
        }
        if let Err(rule) = validator::validate(&self.draft) {
            return SubmitOutcome::Invalid(rule);
        }

        let request = self.build_request();
        self.submitting = true;
        let result = match &self.mode {
            FormMode::Create => client.create(&request).await,
            FormMode::Edit { id } => client.update(id, &request).await,
        };
        self.submitting = false;

        match result {
            Ok(reservation) => {
                info!(id = %reservation.id, "reservation submitted");
                SubmitOutcome::Confirmed { id: reservation.id }
            }
            Err(ClientError::Unauthorized) => SubmitOutcome::RedirectToSignIn,
            Err(err) => SubmitOutcome::Failed {
                message: failure_message(&err),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, rate: f64, category: ServiceCategory) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            name: format!("Item {}", id),
            rate,
            category,
            menu_type: None,
            description: None,
        }
    }

    #[test]
    fn test_second_decoration_replaces() {
        let mut form = ReservationForm::new();
        let first = form.begin_add(item("d1", 100.0, ServiceCategory::Decoration));
        assert!(matches!(first, AddOutcome::Added));

        let second = form.begin_add(item("d2", 150.0, ServiceCategory::Decoration));
        assert!(matches!(second, AddOutcome::Replaced));

        let decorations: Vec<_> = form
            .draft
            .selections()
            .iter()
            .filter(|s| s.category() == ServiceCategory::Decoration)
            .collect();
        assert_eq!(decorations.len(), 1);
        assert_eq!(decorations[0].item().id, "d2");
    }

    #[test]
    fn test_decoration_replacement_keeps_position() {
        let mut form = ReservationForm::new();
        form.begin_add(item("d1", 100.0, ServiceCategory::Decoration));
        let AddOutcome::Pending(prompt) = form.begin_add(item("e1", 50.0, ServiceCategory::Entertainment))
        else {
            panic!("entertainment must prompt for hours");
        };
        form.confirm_add(prompt, "3");
        form.begin_add(item("d2", 150.0, ServiceCategory::Decoration));

        assert_eq!(form.draft.selections()[0].item().id, "d2");
        assert_eq!(form.draft.selections()[1].item().id, "e1");
    }

    #[test]
    fn test_prompt_cancel_adds_nothing() {
        let mut form = ReservationForm::new();
        let AddOutcome::Pending(prompt) = form.begin_add(item("e1", 50.0, ServiceCategory::Entertainment))
        else {
            panic!("expected prompt");
        };
        prompt.cancel();
        assert!(form.draft.selections().is_empty());
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut form = ReservationForm::with_seed(
            item("a1", 5.0, ServiceCategory::Additional),
            ServiceCategory::Additional,
            Some(2),
        );
        form.remove_service(7);
        assert_eq!(form.draft.selections().len(), 1);
        form.remove_service(0);
        assert!(form.draft.selections().is_empty());
    }

    #[test]
    fn test_total_tracks_selection_and_establishment_changes() {
        let catalog = Catalog {
            establishments: vec![shared::Establishment {
                id: "est-1".to_string(),
                name: "Hall".to_string(),
                cost: 400.0,
                capacity: None,
                address: None,
                description: None,
            }],
            ..Default::default()
        };

        let mut form = ReservationForm::new();
        form.draft.guest_count = 25;
        assert_eq!(form.total_cost(&catalog), 0.0);

        let AddOutcome::Pending(prompt) = form.begin_add(item("c1", 10.0, ServiceCategory::Catering))
        else {
            panic!("expected prompt");
        };
        // Prompt suggests the guest count for catering
        let suggested = prompt.suggested().to_string();
        form.confirm_add(prompt, &suggested);
        assert_eq!(form.total_cost(&catalog), 250.0);

        form.draft.establishment_id = Some("est-1".to_string());
        assert_eq!(form.total_cost(&catalog), 650.0);

        form.remove_service(0);
        assert_eq!(form.total_cost(&catalog), 400.0);
    }

    #[test]
    fn test_seeded_form_counts_as_touched() {
        let form = ReservationForm::with_seed(
            item("e1", 50.0, ServiceCategory::Entertainment),
            ServiceCategory::Entertainment,
            Some(3),
        );
        assert_eq!(form.draft.selections().len(), 1);
        // A seeded selection is a user choice; edit carry-forward never applies
        let request = form.build_request();
        assert_eq!(request.services.entertainment.len(), 1);
    }
}
