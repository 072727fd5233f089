//! Reservation serializer
//!
//! Maps the draft into the nested request shape the backend expects,
//! grouping selections back by category. Defaults applied here mirror the
//! backend's own: 2 hours for entertainment, the guest count for dish
//! counts, 1 for add-on units, "STANDARD" for an unnamed menu type.

use crate::form::ReservationDraft;
use shared::reservation::selection::{DEFAULT_HOURS, DEFAULT_UNITS};
use shared::{
    AdditionalEntry, CateringEntry, DecorationEntry, EntertainmentEntry, ReservationRequest,
    ReservedServices, ServiceSelection,
};

/// Menu type used when the catalog item did not specify one
const DEFAULT_MENU_TYPE: &str = "STANDARD";

/// Group an ordered selection list back into the per-category record
pub fn group_selections(
    selections: &[ServiceSelection],
    guest_count: u32,
) -> ReservedServices {
    let mut services = ReservedServices::default();

    for selection in selections {
        match selection {
            ServiceSelection::Entertainment { item, hours } => {
                services.entertainment.push(EntertainmentEntry {
                    id: item.id.clone(),
                    hours: hours.unwrap_or(DEFAULT_HOURS),
                });
            }
            ServiceSelection::Decoration { item } => {
                // At most one by the selection-model invariant
                services.decoration = Some(DecorationEntry {
                    id: item.id.clone(),
                });
            }
            ServiceSelection::Catering {
                item,
                number_of_dishes,
            } => {
                services.catering.push(CateringEntry {
                    id: item.id.clone(),
                    menu_type: item
                        .menu_type
                        .clone()
                        .unwrap_or_else(|| DEFAULT_MENU_TYPE.to_string()),
                    number_of_dishes: number_of_dishes.unwrap_or(guest_count),
                });
            }
            ServiceSelection::Additional { item, quantity } => {
                services.additional_services.push(AdditionalEntry {
                    id: item.id.clone(),
                    quantity: quantity.unwrap_or(DEFAULT_UNITS),
                });
            }
        }
    }

    services
}

/// Build the request body from the draft's own selections
pub fn request_from_draft(draft: &ReservationDraft) -> ReservationRequest {
    request_with_services(draft, group_selections(draft.selections(), draft.guest_count))
}

/// Build the request body with an explicit service block (edit-mode
/// carry-forward of the persisted services)
pub fn request_with_services(
    draft: &ReservationDraft,
    services: ReservedServices,
) -> ReservationRequest {
    ReservationRequest {
        event_type: draft.event_type.clone().unwrap_or_default(),
        dates: draft.event_date.into_iter().collect(),
        guest_count: draft.guest_count,
        establishment_id: draft.establishment_id.clone().unwrap_or_default(),
        comments: draft.comments.clone(),
        services,
    }
}
