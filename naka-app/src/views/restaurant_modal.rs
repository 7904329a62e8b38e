//! Restaurant chooser modal. Shown on first launch and whenever the
//! navbar pill is pressed.

use iced::widget::{button, column, container, text};
use iced::{Element, Length};
use naka_model::{Restaurant, RestaurantDirectory};

use crate::message::Message;
use crate::theme::{Button, Container, NakaTheme};

pub fn view<'a>(
    directory: &'a RestaurantDirectory,
    selected: Option<&'a Restaurant>,
) -> Element<'a, Message> {
    let cards = directory.iter().map(|restaurant| {
        let is_selected = selected.is_some_and(|s| s.id == restaurant.id);
        let style = if is_selected {
            Container::Selected
        } else {
            Container::Card
        };
        button(
            container(
                column![
                    text(&restaurant.name).size(18).color(NakaTheme::TEXT_PRIMARY),
                    text(&restaurant.address)
                        .size(14)
                        .color(NakaTheme::TEXT_SECONDARY),
                    text(restaurant.locality())
                        .size(14)
                        .color(NakaTheme::TEXT_SECONDARY),
                ]
                .spacing(4),
            )
            .style(style.style())
            .padding(16)
            .width(Length::Fill),
        )
        .style(Button::Ghost.style())
        .padding(0)
        .width(Length::Fill)
        .on_press(Message::SelectRestaurant(restaurant.id.clone()))
        .into()
    });

    container(
        column![
            text("Choisissez votre restaurant")
                .size(24)
                .color(NakaTheme::TEXT_PRIMARY),
            column(cards).spacing(12),
        ]
        .spacing(20),
    )
    .style(Container::Modal.style())
    .padding(32)
    .width(Length::Fixed(420.0))
    .into()
}
