//! Named views and the address parser.
//!
//! Six routed views mirror the site's paths. `/carte` accepts an
//! optional `restaurant` query parameter used by external links; the
//! parameter is consumed at parse time and never stored, so the
//! retained route carries no query.

use naka_model::RestaurantId;
use url::Url;

/// Route path constants.
pub mod paths {
    pub const HOME: &str = "/";
    pub const CARTE: &str = "/carte";
    pub const A_EMPORTER: &str = "/a-emporter";
    pub const RESERVATION: &str = "/reservation";
    pub const HISTOIRE: &str = "/histoire";
    pub const CONTACT: &str = "/contact";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Carte,
    AEmporter,
    Reservation,
    Histoire,
    Contact,
}

impl Route {
    /// Navbar order.
    pub const ALL: [Route; 6] = [
        Route::Home,
        Route::Carte,
        Route::AEmporter,
        Route::Reservation,
        Route::Histoire,
        Route::Contact,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => paths::HOME,
            Route::Carte => paths::CARTE,
            Route::AEmporter => paths::A_EMPORTER,
            Route::Reservation => paths::RESERVATION,
            Route::Histoire => paths::HISTOIRE,
            Route::Contact => paths::CONTACT,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Accueil",
            Route::Carte => "La Carte",
            Route::AEmporter => "À emporter",
            Route::Reservation => "Réservation",
            Route::Histoire => "Histoire",
            Route::Contact => "Contact",
        }
    }

    fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');
        let trimmed = if trimmed.is_empty() { "/" } else { trimmed };
        Route::ALL.into_iter().find(|route| route.path() == trimmed)
    }
}

/// A parsed navigation target: the route plus the one-shot deep-link
/// payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    pub route: Route,
    pub preselect: Option<RestaurantId>,
}

/// Parse an address such as `/carte?restaurant=voltaire`. Unknown
/// paths yield `None`; the `restaurant` parameter is only honoured on
/// the carte view.
pub fn parse(address: &str) -> Option<Destination> {
    // A synthetic base makes the relative address parseable.
    let base = Url::parse("app://naka/").ok()?;
    let url = base.join(address.trim()).ok()?;
    let route = Route::from_path(url.path())?;

    let preselect = if route == Route::Carte {
        url.query_pairs()
            .find(|(key, _)| key == "restaurant")
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty())
            .map(RestaurantId::new)
    } else {
        None
    };

    Some(Destination { route, preselect })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_round_trips_its_path() {
        for route in Route::ALL {
            let parsed = parse(route.path()).expect(route.path());
            assert_eq!(parsed.route, route);
            assert_eq!(parsed.preselect, None);
        }
    }

    #[test]
    fn carte_deep_link_carries_the_restaurant() {
        let parsed = parse("/carte?restaurant=voltaire").unwrap();
        assert_eq!(parsed.route, Route::Carte);
        assert_eq!(parsed.preselect, Some(RestaurantId::from("voltaire")));
    }

    #[test]
    fn empty_restaurant_parameter_is_ignored() {
        let parsed = parse("/carte?restaurant=").unwrap();
        assert_eq!(parsed.preselect, None);
    }

    #[test]
    fn query_is_ignored_off_the_carte_view() {
        let parsed = parse("/contact?restaurant=merlin").unwrap();
        assert_eq!(parsed.route, Route::Contact);
        assert_eq!(parsed.preselect, None);
    }

    #[test]
    fn unknown_paths_do_not_navigate() {
        assert_eq!(parse("/admin"), None);
        assert_eq!(parse("/carte/extra"), None);
    }

    #[test]
    fn trailing_slashes_are_tolerated() {
        assert_eq!(parse("/carte/").unwrap().route, Route::Carte);
    }
}
