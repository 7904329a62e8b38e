//! Home page: hero copy, the two calls to action, the spinning
//! ornament, and the currently selected restaurant.

use iced::widget::{button, column, container, row, text};
use iced::{Element, Length};

use crate::message::Message;
use crate::routing::Route;
use crate::state::State;
use crate::theme::{Button, Container, NakaTheme};
use crate::views::decor::Ornament;

pub fn view(state: &State) -> Element<'_, Message> {
    let elapsed = state.now.duration_since(state.started_at).as_secs_f32();

    let hero = column![
        text("Petit Naka").size(56).color(NakaTheme::TEXT_PRIMARY),
        text("Cuisine japonaise authentique à Paris")
            .size(20)
            .color(NakaTheme::TEXT_SECONDARY),
        text("Sushis, domburi et spécialités préparés chaque jour par nos chefs.")
            .size(15)
            .color(NakaTheme::TEXT_DIMMED),
    ]
    .spacing(12)
    .align_x(iced::alignment::Horizontal::Center);

    let actions = row![
        button(text("Découvrir la carte").size(16))
            .style(Button::Primary.style())
            .padding([12, 28])
            .on_press(Message::Navigate(Route::Carte)),
        button(text("Réserver une table").size(16))
            .style(Button::Ghost.style())
            .padding([12, 28])
            .on_press(Message::Navigate(Route::Reservation)),
    ]
    .spacing(16);

    let mut page = column![
        hero,
        container(actions)
            .width(Length::Fill)
            .align_x(iced::alignment::Horizontal::Center),
        Ornament::view(elapsed),
    ]
    .spacing(28)
    .padding(48)
    .align_x(iced::alignment::Horizontal::Center);

    if let Some(restaurant) = state.selected_restaurant() {
        page = page.push(
            container(
                column![
                    text("Votre restaurant").size(13).color(NakaTheme::TEXT_DIMMED),
                    text(&restaurant.name).size(18).color(NakaTheme::TEXT_PRIMARY),
                    text(format!("{}, {}", restaurant.address, restaurant.locality()))
                        .size(14)
                        .color(NakaTheme::TEXT_SECONDARY),
                ]
                .spacing(4),
            )
            .style(Container::Card.style())
            .padding(20)
            .width(Length::Fixed(420.0)),
        );
    }

    page.into()
}
