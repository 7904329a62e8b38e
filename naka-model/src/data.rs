//! Bundled static dataset, decoded once on first access.

use once_cell::sync::Lazy;

use crate::menu::MenuBook;
use crate::restaurant::RestaurantDirectory;
use crate::validate;

pub const RESTAURANTS_JSON: &str = include_str!("../data/restaurants.json");
pub const MENU_JSON: &str = include_str!("../data/menu.json");

static DIRECTORY: Lazy<RestaurantDirectory> =
    Lazy::new(|| validate::load_restaurants(RESTAURANTS_JSON));

static MENU_BOOK: Lazy<MenuBook> = Lazy::new(|| validate::load_menu(MENU_JSON));

/// The known restaurants; empty when the bundled document is invalid.
pub fn directory() -> &'static RestaurantDirectory {
    &DIRECTORY
}

/// Every restaurant's menu; empty when the bundled document is invalid.
pub fn menu_book() -> &'static MenuBook {
    &MENU_BOOK
}
