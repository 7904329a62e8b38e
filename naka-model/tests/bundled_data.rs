//! The bundled documents must round-trip the strict loaders, and the
//! two documents must agree on restaurant ids.

use naka_model::validate::{try_load_menu, try_load_restaurants};
use naka_model::{data, RestaurantId};

#[test]
fn bundled_restaurants_pass_strict_validation() {
    let directory = try_load_restaurants(data::RESTAURANTS_JSON).expect("bundled restaurants");
    assert!(!directory.is_empty());

    let merlin = directory
        .get(&RestaurantId::from("merlin"))
        .expect("merlin entry");
    assert_eq!(merlin.locality(), "75011 Paris");
    assert!(merlin.opening_hours.is_some());
}

#[test]
fn bundled_menu_passes_strict_validation() {
    let book = try_load_menu(data::MENU_JSON).expect("bundled menu");
    assert!(!book.is_empty());

    let entrees = book.items(&RestaurantId::from("merlin"), "entrees");
    assert!(!entrees.is_empty());
    assert!(entrees.iter().all(|item| item.price >= 0.0));
}

#[test]
fn every_menu_key_resolves_to_a_known_restaurant() {
    let directory = data::directory();
    let book = data::menu_book();

    for id in book.0.keys() {
        assert!(
            directory.contains(&RestaurantId::new(id.clone())),
            "menu references unknown restaurant {id}"
        );
    }
}

#[test]
fn categories_follow_canonical_order() {
    let book = data::menu_book();
    let categories = book.categories(&RestaurantId::from("merlin"));
    assert_eq!(categories, vec!["entrees", "domburi", "sushis", "desserts"]);
}
