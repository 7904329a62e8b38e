//! Application state: one struct, mutated only through `update`.
//!
//! The original site spread this across React contexts (restaurant
//! selection, page transition flags) and per-component hooks; here it
//! is a single-writer tree owned by the iced runtime.

use std::time::Instant;

use naka_model::{MenuBook, Restaurant, RestaurantDirectory, RestaurantId, CATEGORIES};

use crate::carousel::CarouselController;
use crate::config::{Selection, SelectionStore};
use crate::routing::{self, Route};
use crate::transitions::PageFade;

/// State of the carte view. Reset (via [`State::remount_carte`])
/// whenever the view is entered, so no transition artifacts survive a
/// navigation away and back.
#[derive(Debug, Clone)]
pub struct CarteState {
    pub active_category: &'static str,
    pub carousel: CarouselController,
    /// Last touch Y while a finger is down; deltas feed the carousel.
    pub touch_anchor: Option<f32>,
    /// Relative scroll progress of the item list, drives the parallax
    /// bar.
    pub list_progress: f32,
}

impl CarteState {
    fn new(item_count: usize) -> Self {
        Self {
            active_category: CATEGORIES[0].0,
            carousel: CarouselController::new(item_count),
            touch_anchor: None,
            list_progress: 0.0,
        }
    }
}

pub struct State {
    pub route: Route,
    pub fade: PageFade<Route>,
    pub directory: &'static RestaurantDirectory,
    pub menu: &'static MenuBook,
    pub store: SelectionStore,
    pub selected: Option<RestaurantId>,
    pub show_restaurant_prompt: bool,
    pub carte: CarteState,
    /// Drives the decorative home-page ornament.
    pub started_at: Instant,
    pub now: Instant,
}

impl State {
    /// Startup reads: bundled data, persisted selection, optional
    /// deep-link address (consumed here, never stored).
    pub fn new(store: SelectionStore, initial_address: Option<String>) -> Self {
        let directory = naka_model::directory();
        let menu = naka_model::menu_book();

        let mut selected = store.resolve(directory);
        let mut route = Route::default();

        if let Some(address) = initial_address {
            match routing::parse(&address) {
                Some(destination) => {
                    route = destination.route;
                    if let Some(id) = destination.preselect {
                        if directory.contains(&id) {
                            log::info!("deep link pre-selected restaurant {id}");
                            persist_choice(&store, &id);
                            selected = Some(id);
                        } else {
                            log::warn!("deep link references unknown restaurant {id}");
                        }
                    }
                }
                None => log::warn!("ignoring unknown address {address}"),
            }
        }

        let show_restaurant_prompt = selected.is_none() && !directory.is_empty();
        let now = Instant::now();

        let mut state = Self {
            route,
            fade: PageFade::idle(),
            directory,
            menu,
            store,
            selected,
            show_restaurant_prompt,
            carte: CarteState::new(0),
            started_at: now,
            now,
        };
        state.remount_carte();
        state
    }

    /// Reset the carte view to a fresh mount: first category, index 0,
    /// cleared gesture state, carousel sized to the new category.
    pub fn remount_carte(&mut self) {
        self.carte.active_category = CATEGORIES[0].0;
        self.carte.touch_anchor = None;
        self.carte.list_progress = 0.0;
        let item_count = self.carte_item_count();
        self.carte.carousel.reset(item_count);
    }

    pub fn selected_restaurant(&self) -> Option<&Restaurant> {
        self.selected.as_ref().and_then(|id| self.directory.get(id))
    }

    /// Items behind the carte's active category, for the carousel size.
    pub fn carte_item_count(&self) -> usize {
        match &self.selected {
            Some(id) => self.menu.items(id, self.carte.active_category).len(),
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SelectionStore;

    #[test]
    fn remount_returns_to_the_first_category_and_sizes_the_carousel() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = State::new(SelectionStore::new(dir.path()), None);
        state.selected = Some("merlin".into());
        state.carte.active_category = "desserts";
        state.carte.carousel.reset(4);
        state
            .carte
            .carousel
            .feed(-crate::carousel::SCROLL_THRESHOLD, Instant::now());
        state.carte.list_progress = 0.7;

        state.remount_carte();
        assert_eq!(state.carte.active_category, CATEGORIES[0].0);
        assert_eq!(state.carte.carousel.current_index(), 0);
        assert_eq!(state.carte.list_progress, 0.0);
        // Sized to the first category of the selected restaurant.
        assert_eq!(
            state.carte.carousel.item_count(),
            state.menu.items(&"merlin".into(), CATEGORIES[0].0).len()
        );
    }
}

pub(crate) fn persist_choice(store: &SelectionStore, id: &RestaurantId) {
    let selection = Selection {
        restaurant_id: Some(id.as_str().to_owned()),
    };
    if let Err(err) = store.save(&selection) {
        // Storage trouble degrades to "ask again next session".
        log::warn!("could not persist restaurant choice: {err}");
    }
}
