use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::restaurant::RestaurantId;

/// Display order and labels for menu categories.
pub const CATEGORIES: [(&str, &str); 4] = [
    ("entrees", "Entrées"),
    ("domburi", "Domburi"),
    ("sushis", "Sushis & Sashimis"),
    ("desserts", "Desserts"),
];

/// A single dish as displayed on the carte.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl MenuItem {
    /// "12.50€" style price label.
    pub fn price_label(&self) -> String {
        format!("{:.2}€", self.price)
    }
}

/// Menus for every restaurant, keyed by restaurant id then category id.
///
/// Empty when the bundled document failed validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuBook(pub BTreeMap<String, BTreeMap<String, Vec<MenuItem>>>);

impl MenuBook {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Items of one category at one restaurant; empty slice when the
    /// restaurant or category is unknown.
    pub fn items(&self, restaurant: &RestaurantId, category: &str) -> &[MenuItem] {
        self.0
            .get(restaurant.as_str())
            .and_then(|menu| menu.get(category))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Category ids present for a restaurant, in canonical order.
    pub fn categories(&self, restaurant: &RestaurantId) -> Vec<&'static str> {
        let Some(menu) = self.0.get(restaurant.as_str()) else {
            return Vec::new();
        };
        CATEGORIES
            .iter()
            .filter(|(id, _)| menu.contains_key(*id))
            .map(|(id, _)| *id)
            .collect()
    }

    pub fn has_restaurant(&self, restaurant: &RestaurantId) -> bool {
        self.0.contains_key(restaurant.as_str())
    }
}

/// Label for a category id, falling back to the raw id for categories
/// the canonical table does not know about.
pub fn category_label(id: &str) -> &str {
    CATEGORIES
        .iter()
        .find(|(cat, _)| *cat == id)
        .map(|(_, label)| *label)
        .unwrap_or(id)
}
