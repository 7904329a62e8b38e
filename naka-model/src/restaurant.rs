use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Strongly typed restaurant identifier.
///
/// Ids are human-readable slugs from the bundled dataset
/// (e.g. `"merlin"`), not generated values.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RestaurantId(pub String);

impl RestaurantId {
    pub fn new(id: impl Into<String>) -> Self {
        RestaurantId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RestaurantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RestaurantId {
    fn from(id: &str) -> Self {
        RestaurantId(id.to_owned())
    }
}

/// One day's schedule: a single time range or a split service
/// (e.g. lunch and dinner).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DaySchedule {
    Single(String),
    Split(Vec<String>),
}

impl DaySchedule {
    /// Flatten to the displayed ranges, in order.
    pub fn ranges(&self) -> Vec<&str> {
        match self {
            DaySchedule::Single(range) => vec![range.as_str()],
            DaySchedule::Split(ranges) => ranges.iter().map(String::as_str).collect(),
        }
    }
}

/// Lowercase French day names are the canonical display order.
pub const DAY_ORDER: [&str; 7] = [
    "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi", "dimanche",
];

/// Opening hours keyed by lowercase French day name. Days without an
/// entry are closed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpeningHours(pub BTreeMap<String, DaySchedule>);

impl OpeningHours {
    pub fn for_day(&self, day: &str) -> Option<&DaySchedule> {
        self.0.get(day)
    }

    /// Day/schedule pairs in weekday order, `None` marking closed days.
    pub fn week(&self) -> Vec<(&'static str, Option<&DaySchedule>)> {
        DAY_ORDER.iter().map(|day| (*day, self.0.get(*day))).collect()
    }
}

/// One physical location of the chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub address: String,
    pub postal_code: String,
    pub city: String,
    pub phone: String,
    pub google_maps_url: String,
    #[serde(default)]
    pub opening_hours: Option<OpeningHours>,
}

impl Restaurant {
    /// "75011 Paris" style line used under the street address.
    pub fn locality(&self) -> String {
        format!("{} {}", self.postal_code, self.city)
    }
}

/// The known set of restaurants. Empty when the bundled data failed
/// validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestaurantDirectory {
    pub restaurants: Vec<Restaurant>,
}

impl RestaurantDirectory {
    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn get(&self, id: &RestaurantId) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| &r.id == id)
    }

    pub fn contains(&self, id: &RestaurantId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Restaurant> {
        self.restaurants.iter()
    }
}
