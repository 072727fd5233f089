//! Pricing aggregator
//!
//! Pure derived computation: the running total is recomputed from the
//! current selections plus the establishment fee on every dependency
//! change. The data set is tens of items at most, so recompute-on-change
//! stays simpler than an incrementally maintained total.
//!
//! Uses rust_decimal internally, f64 at the edges.

use rust_decimal::prelude::*;
use shared::ServiceSelection;

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

/// Total cost of the draft: sum of every selection's cost plus the
/// establishment's flat fee. Side-effect-free and idempotent.
pub fn total_cost(selections: &[ServiceSelection], guest_count: u32, establishment_fee: f64) -> f64 {
    let services: Decimal = selections
        .iter()
        .map(|s| to_decimal(s.total_cost(guest_count)))
        .sum();

    to_f64(services + to_decimal(establishment_fee))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{CatalogItem, ServiceCategory};

    fn selection(category: ServiceCategory, rate: f64, quantity: Option<u32>) -> ServiceSelection {
        ServiceSelection::new(
            CatalogItem {
                id: "s".to_string(),
                name: "Test".to_string(),
                rate,
                category,
                menu_type: None,
                description: None,
            },
            category,
            quantity,
        )
    }

    #[test]
    fn test_empty_draft_costs_the_establishment_fee() {
        assert_eq!(total_cost(&[], 10, 0.0), 0.0);
        assert_eq!(total_cost(&[], 10, 350.0), 350.0);
    }

    #[test]
    fn test_total_sums_selections_and_fee() {
        let selections = vec![
            selection(ServiceCategory::Entertainment, 50.0, Some(3)), // 150
            selection(ServiceCategory::Decoration, 200.0, None),      // 200
            selection(ServiceCategory::Catering, 10.0, None),         // 25 guests -> 250
            selection(ServiceCategory::Additional, 5.0, Some(4)),     // 20
        ];
        assert_eq!(total_cost(&selections, 25, 100.0), 720.0);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let selections = vec![selection(ServiceCategory::Additional, 9.99, Some(3))];
        let first = total_cost(&selections, 0, 0.5);
        let second = total_cost(&selections, 0, 0.5);
        assert_eq!(first, second);
        assert_eq!(first, 30.47);
    }

    #[test]
    fn test_fractional_rates_round_to_cents() {
        let selections = vec![
            selection(ServiceCategory::Additional, 0.1, Some(1)),
            selection(ServiceCategory::Additional, 0.2, Some(1)),
        ];
        // Exact under decimal arithmetic, unlike naive f64 addition
        assert_eq!(total_cost(&selections, 0, 0.0), 0.3);
    }
}
