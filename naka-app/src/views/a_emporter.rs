//! Takeaway page: how to order and where to pick up.

use iced::widget::{column, container, row, text};
use iced::{Element, Length};

use crate::message::Message;
use crate::state::State;
use crate::theme::{Container, NakaTheme};
use crate::views::components::{self, copy};
use crate::views::opening_hours;

pub fn view(state: &State) -> Element<'_, Message> {
    let Some(restaurant) = state.selected_restaurant() else {
        return column![
            components::section_title("À emporter"),
            components::empty_state(copy::NO_RESTAURANT),
        ]
        .spacing(16)
        .padding(32)
        .into();
    };

    let order_card = container(
        column![
            text("Commander par téléphone")
                .size(18)
                .color(NakaTheme::TEXT_PRIMARY),
            text("Passez votre commande, elle vous attend au comptoir.")
                .size(14)
                .color(NakaTheme::TEXT_SECONDARY),
            text(&restaurant.phone).size(24).color(NakaTheme::PRIMARY),
        ]
        .spacing(8),
    )
    .style(Container::Card.style())
    .padding(24)
    .width(Length::Fill);

    let pickup_card = container(
        column![
            text("Sur place").size(18).color(NakaTheme::TEXT_PRIMARY),
            text(&restaurant.address)
                .size(14)
                .color(NakaTheme::TEXT_SECONDARY),
            text(restaurant.locality())
                .size(14)
                .color(NakaTheme::TEXT_SECONDARY),
        ]
        .spacing(8),
    )
    .style(Container::Card.style())
    .padding(24)
    .width(Length::Fill);

    let mut page = column![
        components::section_title("À emporter"),
        components::section_subtitle(&restaurant.name),
        row![order_card, pickup_card].spacing(20),
    ]
    .spacing(20)
    .padding(32)
    .max_width(900);

    if let Some(hours) = &restaurant.opening_hours {
        page = page.push(
            container(
                column![
                    text("Horaires").size(18).color(NakaTheme::TEXT_PRIMARY),
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
