//! Application wiring: title, update, view, subscriptions, theme and
//! window settings.

use iced::{window, Size, Task};

use crate::config::SelectionStore;
use crate::state::State;
use crate::theme::NakaTheme;
use crate::{seo, subscriptions, update, view};

/// Run the application, optionally starting at a deep-link address
/// such as `/carte?restaurant=merlin`.
pub fn run(initial_address: Option<String>) -> iced::Result {
    iced::application(title, update::update, view::view)
        .subscription(subscriptions::subscription)
        .theme(|_state| NakaTheme::theme())
        .window(window::Settings {
            size: Size::new(1200.0, 860.0),
            min_size: Some(Size::new(900.0, 640.0)),
            ..window::Settings::default()
        })
        .run_with(move || {
            (
                State::new(SelectionStore::from_platform(), initial_address.clone()),
                Task::none(),
            )
        })
}

fn title(state: &State) -> String {
    seo::page_title(state.route, state.selected_restaurant())
}
