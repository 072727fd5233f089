//! Quantity resolution prompt
//!
//! Adding a service whose cost depends on a user-supplied quantity raises
//! this prompt; the add is suspended until the user confirms or the prompt
//! is dropped (cancel). Decoration never raises it.

use shared::{CatalogItem, ServiceCategory};
use tracing::warn;

/// Suggested default hours for entertainment
const DEFAULT_ENTERTAINMENT_HOURS: u32 = 3;
/// Suggested default units for additional services
const DEFAULT_ADDITIONAL_UNITS: u32 = 1;

/// Pending quantity prompt for one catalog item
///
/// Holds the item until `resolve` confirms or the prompt is dropped.
/// Input parsing is
/// deliberately lenient: empty, non-numeric, or sub-1 input coerces to 1
/// instead of being rejected.
#[derive(Debug, Clone)]
pub struct QuantityPrompt {
    item: CatalogItem,
    suggested: u32,
}

impl QuantityPrompt {
    /// Build a prompt with the category's suggested default: guest count
    /// for catering, 3 hours for entertainment, 1 unit for add-ons.
    pub(crate) fn new(item: CatalogItem, guest_count: u32) -> Self {
        let suggested = match item.category {
            ServiceCategory::Entertainment => DEFAULT_ENTERTAINMENT_HOURS,
            ServiceCategory::Catering => guest_count.max(1),
            _ => DEFAULT_ADDITIONAL_UNITS,
        };
        Self { item, suggested }
    }

    pub fn item(&self) -> &CatalogItem {
        &self.item
    }

    /// Pre-filled quantity shown to the user
    pub fn suggested(&self) -> u32 {
        self.suggested
    }

    /// Confirm the prompt with raw user input, yielding the item and the
    /// resolved quantity
    pub fn resolve(self, input: &str) -> (CatalogItem, u32) {
        let quantity = parse_quantity(input);
        (self.item, quantity)
    }

    /// Cancel the prompt; no selection is created
    pub fn cancel(self) {}
}

/// Lenient quantity parsing: integer >= 1, anything else coerces to 1
fn parse_quantity(input: &str) -> u32 {
    match input.trim().parse::<u32>() {
        Ok(q) if q >= 1 => q,
        _ => {
            warn!(input, "quantity input coerced to 1");
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(category: ServiceCategory) -> CatalogItem {
        CatalogItem {
            id: "s1".to_string(),
            name: "Test".to_string(),
            rate: 10.0,
            category,
            menu_type: None,
            description: None,
        }
    }

    #[test]
    fn test_suggested_defaults_per_category() {
        assert_eq!(
            QuantityPrompt::new(item(ServiceCategory::Entertainment), 25).suggested(),
            3
        );
        assert_eq!(
            QuantityPrompt::new(item(ServiceCategory::Catering), 25).suggested(),
            25
        );
        assert_eq!(
            QuantityPrompt::new(item(ServiceCategory::Additional), 25).suggested(),
            1
        );
    }

    #[test]
    fn test_catering_suggestion_never_zero() {
        assert_eq!(
            QuantityPrompt::new(item(ServiceCategory::Catering), 0).suggested(),
            1
        );
    }

    #[test]
    fn test_resolve_parses_positive_integers() {
        let (_, q) = QuantityPrompt::new(item(ServiceCategory::Additional), 0).resolve(" 12 ");
        assert_eq!(q, 12);
    }

    #[test]
    fn test_resolve_coerces_garbage_to_one() {
        for input in ["", "   ", "abc", "-3", "0", "2.5"] {
            let (_, q) = QuantityPrompt::new(item(ServiceCategory::Additional), 0).resolve(input);
            assert_eq!(q, 1, "input {:?} should coerce to 1", input);
        }
    }
}
