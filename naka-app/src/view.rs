//! Root view: the routed page inside the shell, with the restaurant
//! modal and the page-fade scrim stacked above it.

use iced::widget::{center, container, opaque, Space, Stack};
use iced::{Background, Color, Element, Length};

use crate::message::Message;
use crate::routing::Route;
use crate::state::State;
use crate::theme::{Container, NakaTheme};
use crate::views::{a_emporter, carte, contact, histoire, home, layout, reservation, restaurant_modal};

pub fn view(state: &State) -> Element<'_, Message> {
    let page = match state.route {
        Route::Home => home::view(state),
        Route::Carte => carte::view(state),
        Route::AEmporter => a_emporter::view(state),
        Route::Reservation => reservation::view(state),
        Route::Histoire => histoire::view(),
        Route::Contact => contact::view(state),
    };

    let mut layers: Vec<Element<'_, Message>> = vec![layout::shell(state, page)];

    if state.show_restaurant_prompt {
        let modal = restaurant_modal::view(state.directory, state.selected_restaurant());
        layers.push(opaque(
            center(opaque(modal)).style(Container::ModalOverlay.style()),
        ));
    }

    let alpha = state.fade.scrim_alpha();
    if alpha > 0.0 {
        let scrim = container(Space::new(Length::Fill, Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_| iced::widget::container::Style {
                background: Some(Background::Color(Color {
                    a: alpha,
                    ..NakaTheme::BLACK
                })),
                ..iced::widget::container::Style::default()
            });
        layers.push(opaque(scrim));
    }

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SelectionStore;
    use crate::message::Message;

    // Building the widget tree needs no renderer, so every page can be
    // constructed in a plain test.
    #[test]
    fn every_route_builds_its_page() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = State::new(SelectionStore::new(dir.path()), None);
        for route in Route::ALL {
            state.route = route;
            let _ = view(&state);
        }
    }

    #[test]
    fn every_route_builds_with_a_selection() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = State::new(SelectionStore::new(dir.path()), None);
        let _ = crate::update::update(&mut state, Message::SelectRestaurant("merlin".into()));
        for route in Route::ALL {
            state.route = route;
            let _ = view(&state);
        }
    }
}
