//! Message dispatch.

use std::time::Instant;

use iced::widget::scrollable;
use iced::Task;
use naka_model::RestaurantId;

use crate::message::{CarouselMessage, Message};
use crate::routing::Route;
use crate::state::{persist_choice, State};
use crate::views::carte::menu_list_id;

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    match message {
        Message::Navigate(route) => {
            if route != state.route {
                state.fade.begin(route);
            }
            Task::none()
        }
        Message::Tick(now) => tick(state, now),
        Message::SelectRestaurant(id) => select_restaurant(state, id),
        Message::OpenRestaurantPrompt => {
            state.show_restaurant_prompt = true;
            Task::none()
        }
        Message::SelectCategory(category) => select_category(state, category),
        Message::Carousel(gesture) => carousel(state, gesture),
        Message::MenuListScrolled(viewport) => {
            state.carte.list_progress = viewport.relative_offset().y.clamp(0.0, 1.0);
            Task::none()
        }
    }
}

fn tick(state: &mut State, now: Instant) -> Task<Message> {
    state.now = now;
    state.carte.carousel.tick(now);

    if let Some(route) = state.fade.tick() {
        let entering_carte = route == Route::Carte && state.route != Route::Carte;
        state.route = route;
        if entering_carte {
            // Fresh mount: first category, index 0, scroll to top.
            state.remount_carte();
            return scrollable::snap_to(menu_list_id(), scrollable::RelativeOffset::START);
        }
    }
    Task::none()
}

fn select_restaurant(state: &mut State, id: RestaurantId) -> Task<Message> {
    if !state.directory.contains(&id) {
        log::warn!("ignoring selection of unknown restaurant {id}");
        return Task::none();
    }
    persist_choice(&state.store, &id);
    state.selected = Some(id);
    state.show_restaurant_prompt = false;

    // The menu behind the carte changed wholesale.
    let item_count = state.carte_item_count();
    state.carte.carousel.reset(item_count);
    Task::none()
}

fn select_category(state: &mut State, category: &'static str) -> Task<Message> {
    if state.carte.active_category == category {
        return Task::none();
    }
    state.carte.active_category = category;
    let item_count = state.carte_item_count();
    state.carte.carousel.reset(item_count);
    Task::none()
}

fn carousel(state: &mut State, gesture: CarouselMessage) -> Task<Message> {
    let now = Instant::now();
    let carte = &mut state.carte;
    match gesture {
        CarouselMessage::WheelScrolled(delta) => {
            carte.carousel.feed(delta, now);
        }
        CarouselMessage::TouchStarted(y) => carte.touch_anchor = Some(y),
        CarouselMessage::TouchMoved(y) => {
            if let Some(anchor) = carte.touch_anchor {
                // Upward swipe yields a positive delta, like the DOM's
                // touchStartY - touchEndY.
                carte.carousel.feed(anchor - y, now);
                carte.touch_anchor = Some(y);
            }
        }
        CarouselMessage::TouchEnded => carte.touch_anchor = None,
    }
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SelectionStore;
    use crate::message::Message;

    fn state_in(dir: &tempfile::TempDir) -> State {
        State::new(SelectionStore::new(dir.path()), None)
    }

    #[test]
    fn selecting_a_restaurant_closes_the_prompt_and_sizes_the_carousel() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(&dir);
        assert!(state.show_restaurant_prompt);

        let _ = update(&mut state, Message::SelectRestaurant("merlin".into()));
        assert!(!state.show_restaurant_prompt);
        assert_eq!(state.selected, Some("merlin".into()));
        assert_eq!(state.carte.carousel.item_count(), state.carte_item_count());
        assert!(state.carte.carousel.item_count() > 0);
    }

    #[test]
    fn unknown_selection_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(&dir);
        let _ = update(&mut state, Message::SelectRestaurant("nowhere".into()));
        assert_eq!(state.selected, None);
        assert!(state.show_restaurant_prompt);
    }

    #[test]
    fn category_change_resets_the_carousel() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(&dir);
        let _ = update(&mut state, Message::SelectRestaurant("merlin".into()));

        // Move off index 0 first.
        let _ = update(
            &mut state,
            Message::Carousel(CarouselMessage::WheelScrolled(120.0)),
        );
        assert_ne!(state.carte.carousel.current_index(), 0);
        assert!(state.carte.carousel.is_snapping());

        let _ = update(&mut state, Message::SelectCategory("desserts"));
        assert_eq!(state.carte.active_category, "desserts");
        assert_eq!(state.carte.carousel.current_index(), 0);
        assert!(!state.carte.carousel.is_snapping());
    }

    #[test]
    fn touch_deltas_accumulate_between_moves() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(&dir);
        let _ = update(&mut state, Message::SelectRestaurant("merlin".into()));
        let count = state.carte.carousel.item_count();

        let _ = update(
            &mut state,
            Message::Carousel(CarouselMessage::TouchStarted(500.0)),
        );
        // Finger travels up 90px across two moves: one step back
        // (positive accumulated delta surfaces the previous item).
        let _ = update(
            &mut state,
            Message::Carousel(CarouselMessage::TouchMoved(455.0)),
        );
        let _ = update(
            &mut state,
            Message::Carousel(CarouselMessage::TouchMoved(410.0)),
        );
        assert_eq!(state.carte.carousel.current_index(), count - 1);

        let _ = update(&mut state, Message::Carousel(CarouselMessage::TouchEnded));
        assert_eq!(state.carte.touch_anchor, None);
    }

    #[test]
    fn navigation_to_the_same_route_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(&dir);
        let _ = update(&mut state, Message::Navigate(Route::Home));
        assert!(!state.fade.is_active());

        let _ = update(&mut state, Message::Navigate(Route::Contact));
        assert!(state.fade.is_active());
    }
}
