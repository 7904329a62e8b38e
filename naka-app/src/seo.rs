//! Page metadata: titles, descriptions and canonical URLs per route.
//!
//! The title feeds the window chrome; descriptions back the share/copy
//! affordances on the contact view.

use naka_model::Restaurant;

use crate::routing::Route;

pub const BASE_TITLE: &str = "Petit Naka - Cuisine Japonaise authentique à Paris";
pub const BASE_URL: &str = "https://petit-naka.netlify.app";

/// Window/page title for a route, qualified by the selected restaurant
/// where that helps disambiguate locations.
pub fn page_title(route: Route, selected: Option<&Restaurant>) -> String {
    let section = match route {
        Route::Home => return BASE_TITLE.to_owned(),
        Route::Carte => "Carte",
        Route::AEmporter => "À emporter",
        Route::Reservation => "Réservation",
        Route::Histoire => "Notre Histoire",
        Route::Contact => "Contact",
    };
    match (route, selected) {
        (Route::Carte | Route::AEmporter | Route::Contact, Some(restaurant)) => {
            format!("{section} - {} | {BASE_TITLE}", restaurant.name)
        }
        _ => format!("{section} | {BASE_TITLE}"),
    }
}

/// Short description used alongside the title.
pub fn page_description(route: Route, selected: Option<&Restaurant>) -> String {
    match route {
        Route::Home => {
            "Cuisine japonaise authentique à Paris : domburi, sushis et plats faits maison."
                .to_owned()
        }
        Route::Carte => "Découvrez la carte : entrées, domburi, sushis et desserts.".to_owned(),
        Route::AEmporter => match selected {
            Some(restaurant) => format!(
                "Commandez à emporter au {} — {}, {}.",
                restaurant.phone,
                restaurant.address,
                restaurant.locality()
            ),
            None => "Commandez vos plats à emporter par téléphone.".to_owned(),
        },
        Route::Reservation => "Réservez votre table par téléphone.".to_owned(),
        Route::Histoire => "L'histoire du Petit Naka, de Tokyo au 11e arrondissement.".to_owned(),
        Route::Contact => match selected {
            Some(restaurant) => format!(
                "Petit Naka, {}, {} — {}.",
                restaurant.address,
                restaurant.locality(),
                restaurant.phone
            ),
            None => "Adresses et horaires des restaurants Petit Naka.".to_owned(),
        },
    }
}

/// Canonical URL for a route.
pub fn canonical_url(route: Route) -> String {
    match route {
        Route::Home => format!("{BASE_URL}/"),
        _ => format!("{BASE_URL}{}", route.path()),
    }
}
