//! Reservation page. Reservations are taken over the phone only.

use iced::widget::{column, container, text};
use iced::{Element, Length};

use crate::message::Message;
use crate::state::State;
use crate::theme::{Container, NakaTheme};
use crate::views::components::{self, copy};
use crate::views::opening_hours;

pub fn view(state: &State) -> Element<'_, Message> {
    let Some(restaurant) = state.selected_restaurant() else {
        return column![
            components::section_title("Réservation"),
            components::empty_state(copy::NO_RESTAURANT),
        ]
        .spacing(16)
        .padding(32)
        .into();
    };

    let phone_card = container(
        column![
            text("Réservez votre table")
                .size(18)
                .color(NakaTheme::TEXT_PRIMARY),
            text("Appelez-nous, nous vous garderons la meilleure place.")
                .size(14)
                .color(NakaTheme::TEXT_SECONDARY),
            text(&restaurant.phone).size(28).color(NakaTheme::PRIMARY),
            text(format!("{}, {}", restaurant.address, restaurant.locality()))
                .size(14)
                .color(NakaTheme::TEXT_SECONDARY),
        ]
        .spacing(10),
    )
    .style(Container::Card.style())
    .padding(28)
    .width(Length::Fill);

    let mut page = column![
        components::section_title("Réservation"),
        components::section_subtitle(&restaurant.name),
        phone_card,
    ]
    .spacing(20)
    .padding(32)
    .max_width(720);

    if let Some(hours) = &restaurant.opening_hours {
        page = page.push(
            container(
                column![
                    text("Horaires d'ouverture")
                        .size(18)
                        .color(NakaTheme::TEXT_PRIMARY),
                    opening_hours::table(hours),
                ]
                .spacing(12),
            )
            .style(Container::Card.style())
            .padding(24)
            .width(Length::Fill),
        );
    }

    container(page)
        .width(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .into()
}
