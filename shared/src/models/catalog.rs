//! Service catalog rows
//!
//! One row type per category endpoint. Each category names its rate field
//! differently on the wire (`hourlyRate`, `cost`, `costDish`, `cost`), so
//! the rows decode separately and convert into the unified [`CatalogItem`].
//! A row missing its rate decodes with `0.0` rather than failing: the form
//! must stay usable even with incomplete catalog data.

use serde::{Deserialize, Serialize};

/// Service category
///
/// Partitions the catalog and determines which quantity attribute is
/// relevant and which cost formula applies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceCategory {
    /// Billed per hour
    Entertainment,
    /// Flat cost, always singular
    Decoration,
    /// Billed per dish
    Catering,
    /// Billed per unit
    Additional,
}

impl ServiceCategory {
    /// Whether adding a service of this category goes through the
    /// quantity prompt. Decoration has a fixed cost and skips it.
    pub fn needs_quantity(&self) -> bool {
        !matches!(self, Self::Decoration)
    }

    /// Unit label for the category's quantity ("hours", "dishes", ...)
    pub fn quantity_unit(&self) -> Option<&'static str> {
        match self {
            Self::Entertainment => Some("hours"),
            Self::Catering => Some("dishes"),
            Self::Additional => Some("units"),
            Self::Decoration => None,
        }
    }
}

/// Entertainment catalog row (`GET /entertainment`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntertainmentRow {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub hourly_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Decoration catalog row (`GET /decoration`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecorationRow {
    pub id: String,
    /// Display name is the decoration theme
    pub theme: String,
    #[serde(default)]
    pub cost: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Catering catalog row (`GET /catering`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CateringRow {
    pub id: String,
    /// Display name is the menu type (BUFFET, PLATED, ...)
    pub menu_type: String,
    #[serde(default)]
    pub cost_dish: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Additional-service catalog row (`GET /additional`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalServiceRow {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub cost: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Unified catalog item view
///
/// Category-independent shape the selection model and prompts work with.
/// `rate` is the per-hour / flat / per-dish / per-unit rate depending on
/// `category`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub rate: f64,
    pub category: ServiceCategory,
    /// Menu type carried by catering rows, None for other categories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<EntertainmentRow> for CatalogItem {
    fn from(row: EntertainmentRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            rate: row.hourly_rate,
            category: ServiceCategory::Entertainment,
            menu_type: None,
            description: row.description,
        }
    }
}

impl From<DecorationRow> for CatalogItem {
    fn from(row: DecorationRow) -> Self {
        Self {
            id: row.id,
            name: row.theme,
            rate: row.cost,
            category: ServiceCategory::Decoration,
            menu_type: None,
            description: row.description,
        }
    }
}

impl From<CateringRow> for CatalogItem {
    fn from(row: CateringRow) -> Self {
        Self {
            id: row.id,
            name: row.menu_type.clone(),
            rate: row.cost_dish,
            category: ServiceCategory::Catering,
            menu_type: Some(row.menu_type),
            description: row.description,
        }
    }
}

impl From<AdditionalServiceRow> for CatalogItem {
    fn from(row: AdditionalServiceRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            rate: row.cost,
            category: ServiceCategory::Additional,
            menu_type: None,
            description: row.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_rate_decodes_as_zero() {
        // Incomplete catalog data must not break deserialization
        let row: CateringRow =
            serde_json::from_str(r#"{"id": "c1", "menuType": "BUFFET"}"#).unwrap();
        assert_eq!(row.cost_dish, 0.0);

        let item: CatalogItem = row.into();
        assert_eq!(item.rate, 0.0);
        assert_eq!(item.menu_type.as_deref(), Some("BUFFET"));
    }

    #[test]
    fn test_decoration_skips_quantity_prompt() {
        assert!(!ServiceCategory::Decoration.needs_quantity());
        assert!(ServiceCategory::Entertainment.needs_quantity());
        assert!(ServiceCategory::Catering.needs_quantity());
        assert!(ServiceCategory::Additional.needs_quantity());
    }
}
