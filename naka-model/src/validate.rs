//! Fail-soft validation for the bundled JSON documents.
//!
//! Shape checks run against the raw `serde_json::Value` before typed
//! deserialization, so one malformed entry rejects the whole document
//! and the loaders hand back empty collections instead of partial or
//! corrupt ones.

use serde_json::Value;

use crate::error::{ModelError, Result};
use crate::menu::MenuBook;
use crate::restaurant::RestaurantDirectory;

const RESTAURANT_REQUIRED: [&str; 7] = [
    "id",
    "name",
    "address",
    "postalCode",
    "city",
    "phone",
    "googleMapsUrl",
];

/// A restaurant entry must carry every required string field; opening
/// hours, when present, must be an object.
pub fn validate_restaurant(value: &Value) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };
    if !RESTAURANT_REQUIRED
        .iter()
        .all(|field| obj.get(*field).map(Value::is_string).unwrap_or(false))
    {
        return false;
    }
    match obj.get("openingHours") {
        None | Some(Value::Null) => true,
        Some(hours) => hours.is_object(),
    }
}

/// A menu item must have a name and a non-negative numeric price.
pub fn validate_menu_item(value: &Value) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };
    if !obj.get("name").map(Value::is_string).unwrap_or(false) {
        return false;
    }
    obj.get("price")
        .and_then(Value::as_f64)
        .map(|price| price >= 0.0)
        .unwrap_or(false)
}

/// Top-level restaurants document: `{ "restaurants": [ ... ] }` with
/// every entry valid.
pub fn validate_restaurants_data(value: &Value) -> bool {
    let Some(restaurants) = value.get("restaurants").and_then(Value::as_array) else {
        return false;
    };
    restaurants.iter().all(validate_restaurant)
}

/// Top-level menu document: a non-empty map of restaurant id to a map
/// of category id to an array of valid items.
pub fn validate_menu_data(value: &Value) -> bool {
    let Some(by_restaurant) = value.as_object() else {
        return false;
    };
    if by_restaurant.is_empty() {
        return false;
    }
    by_restaurant.values().all(|menu| {
        let Some(categories) = menu.as_object() else {
            return false;
        };
        categories.values().all(|category| {
            category
                .as_array()
                .map(|items| items.iter().all(validate_menu_item))
                .unwrap_or(false)
        })
    })
}

/// Strict loader: parse, shape-check, then deserialize.
pub fn try_load_restaurants(json: &str) -> Result<RestaurantDirectory> {
    let value: Value = serde_json::from_str(json)?;
    if !validate_restaurants_data(&value) {
        return Err(ModelError::Invalid(
            "restaurants document failed validation".into(),
        ));
    }
    Ok(serde_json::from_value(value)?)
}

/// Strict loader for the menu document.
pub fn try_load_menu(json: &str) -> Result<MenuBook> {
    let value: Value = serde_json::from_str(json)?;
    if !validate_menu_data(&value) {
        return Err(ModelError::Invalid("menu document failed validation".into()));
    }
    Ok(serde_json::from_value(value)?)
}

/// Fail-soft loader: invalid input logs a warning and yields an empty
/// directory.
pub fn load_restaurants(json: &str) -> RestaurantDirectory {
    match try_load_restaurants(json) {
        Ok(directory) => directory,
        Err(err) => {
            log::warn!("discarding restaurants data: {err}");
            RestaurantDirectory::default()
        }
    }
}

/// Fail-soft loader for the menu document.
pub fn load_menu(json: &str) -> MenuBook {
    match try_load_menu(json) {
        Ok(book) => book,
        Err(err) => {
            log::warn!("discarding menu data: {err}");
            MenuBook::default()
        }
    }
}
