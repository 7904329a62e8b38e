//! Core data model shared by the Petit Naka apps.
//!
//! The chain's restaurants and menus ship as static JSON bundled into
//! this crate. Loading is fail-soft: any document that does not pass
//! validation yields empty collections, and consumers render their
//! empty states instead of crashing.

pub mod data;
pub mod error;
pub mod menu;
pub mod restaurant;
pub mod validate;

pub use data::{directory, menu_book};
pub use error::{ModelError, Result as ModelResult};
pub use menu::{category_label, MenuBook, MenuItem, CATEGORIES};
pub use restaurant::{
    DaySchedule, OpeningHours, Restaurant, RestaurantDirectory, RestaurantId, DAY_ORDER,
};
