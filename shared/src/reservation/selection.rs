//! Service selection
//!
//! A chosen catalog item plus its category-specific quantity. Each category
//! is one variant; the cost formula is a pure function keyed by the tag.
//! Quantities stay optional through to serialization so the per-category
//! defaults (hours 2, dishes = guest count, units 1) apply uniformly at
//! cost derivation and at request building.

use crate::models::{CatalogItem, ServiceCategory};
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

/// Hours assumed for an entertainment selection that never resolved one
pub const DEFAULT_HOURS: u32 = 2;
/// Units assumed for an additional-service selection without a quantity
pub const DEFAULT_UNITS: u32 = 1;

/// Rounding for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

#[inline]
fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

#[inline]
fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// One chosen service in the reservation draft
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "category", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceSelection {
    Entertainment {
        item: CatalogItem,
        #[serde(skip_serializing_if = "Option::is_none")]
        hours: Option<u32>,
    },
    Decoration { item: CatalogItem },
    Catering {
        item: CatalogItem,
        #[serde(skip_serializing_if = "Option::is_none")]
        number_of_dishes: Option<u32>,
    },
    Additional {
        item: CatalogItem,
        #[serde(skip_serializing_if = "Option::is_none")]
        quantity: Option<u32>,
    },
}

impl ServiceSelection {
    /// Build a selection from an item, its category, and an optional
    /// quantity. Decoration ignores any quantity argument.
    pub fn new(item: CatalogItem, category: ServiceCategory, quantity: Option<u32>) -> Self {
        match category {
            ServiceCategory::Entertainment => Self::Entertainment { item, hours: quantity },
            ServiceCategory::Decoration => Self::Decoration { item },
            ServiceCategory::Catering => Self::Catering {
                item,
                number_of_dishes: quantity,
            },
            ServiceCategory::Additional => Self::Additional { item, quantity },
        }
    }

    pub fn category(&self) -> ServiceCategory {
        match self {
            Self::Entertainment { .. } => ServiceCategory::Entertainment,
            Self::Decoration { .. } => ServiceCategory::Decoration,
            Self::Catering { .. } => ServiceCategory::Catering,
            Self::Additional { .. } => ServiceCategory::Additional,
        }
    }

    pub fn item(&self) -> &CatalogItem {
        match self {
            Self::Entertainment { item, .. }
            | Self::Decoration { item }
            | Self::Catering { item, .. }
            | Self::Additional { item, .. } => item,
        }
    }

    /// The resolved quantity, if the category has one
    pub fn quantity(&self) -> Option<u32> {
        match self {
            Self::Entertainment { hours, .. } => *hours,
            Self::Decoration { .. } => None,
            Self::Catering {
                number_of_dishes, ..
            } => *number_of_dishes,
            Self::Additional { quantity, .. } => *quantity,
        }
    }

    /// Derived cost of this selection
    ///
    /// Entertainment: hours x hourly rate. Catering: dishes x per-dish cost,
    /// dishes defaulting to the reservation's guest count. Additional:
    /// units x unit cost. Decoration: the flat cost, quantity ignored.
    /// Decimal internally, f64 out, rounded to 2 decimal places.
    pub fn total_cost(&self, guest_count: u32) -> f64 {
        let (rate, units) = match self {
            Self::Entertainment { item, hours } => {
                (item.rate, hours.unwrap_or(DEFAULT_HOURS))
            }
            Self::Decoration { item } => (item.rate, 1),
            Self::Catering {
                item,
                number_of_dishes,
            } => (item.rate, number_of_dishes.unwrap_or(guest_count)),
            Self::Additional { item, quantity } => {
                (item.rate, quantity.unwrap_or(DEFAULT_UNITS))
            }
        };
        to_f64(to_decimal(rate) * Decimal::from(units))
    }

    /// Short display label for UI rows, e.g. "Live Band (3 hours)"
    pub fn label(&self) -> String {
        let item = self.item();
        match (self.quantity(), self.category().quantity_unit()) {
            (Some(q), Some(unit)) => format!("{} ({} {})", item.name, q, unit),
            _ => item.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(rate: f64, category: ServiceCategory) -> CatalogItem {
        CatalogItem {
            id: "s1".to_string(),
            name: "Test".to_string(),
            rate,
            category,
            menu_type: None,
            description: None,
        }
    }

    #[test]
    fn test_entertainment_cost_is_hours_times_rate() {
        let sel = ServiceSelection::new(
            item(50.0, ServiceCategory::Entertainment),
            ServiceCategory::Entertainment,
            Some(3),
        );
        assert_eq!(sel.total_cost(10), 150.0);
    }

    #[test]
    fn test_catering_dishes_default_to_guest_count() {
        let sel = ServiceSelection::new(
            item(10.0, ServiceCategory::Catering),
            ServiceCategory::Catering,
            None,
        );
        assert_eq!(sel.total_cost(25), 250.0);
    }

    #[test]
    fn test_catering_explicit_dishes_win() {
        let sel = ServiceSelection::new(
            item(10.0, ServiceCategory::Catering),
            ServiceCategory::Catering,
            Some(20),
        );
        assert_eq!(sel.total_cost(25), 200.0);
    }

    #[test]
    fn test_decoration_ignores_quantity() {
        let sel = ServiceSelection::new(
            item(300.0, ServiceCategory::Decoration),
            ServiceCategory::Decoration,
            Some(7),
        );
        assert_eq!(sel.quantity(), None);
        assert_eq!(sel.total_cost(0), 300.0);
    }

    #[test]
    fn test_additional_defaults_to_one_unit() {
        let sel = ServiceSelection::new(
            item(15.5, ServiceCategory::Additional),
            ServiceCategory::Additional,
            None,
        );
        assert_eq!(sel.total_cost(0), 15.5);
    }

    #[test]
    fn test_missing_rate_costs_zero() {
        // Malformed catalog data degrades to a zero rate, not an error
        let sel = ServiceSelection::new(
            item(0.0, ServiceCategory::Entertainment),
            ServiceCategory::Entertainment,
            Some(4),
        );
        assert_eq!(sel.total_cost(0), 0.0);
    }

    #[test]
    fn test_cost_rounds_to_cents() {
        let sel = ServiceSelection::new(
            item(0.333, ServiceCategory::Additional),
            ServiceCategory::Additional,
            Some(3),
        );
        // 0.999 rounds to 1.00
        assert_eq!(sel.total_cost(0), 1.0);
    }

    #[test]
    fn test_label_carries_quantity_unit() {
        let sel = ServiceSelection::new(
            CatalogItem {
                id: "e1".to_string(),
                name: "Live Band".to_string(),
                rate: 50.0,
                category: ServiceCategory::Entertainment,
                menu_type: None,
                description: None,
            },
            ServiceCategory::Entertainment,
            Some(3),
        );
        assert_eq!(sel.label(), "Live Band (3 hours)");
    }
}
