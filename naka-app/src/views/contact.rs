//! Contact page: address, phone, maps link and opening hours for the
//! selected restaurant.

use iced::widget::{column, container, text};
use iced::{Element, Length};

use crate::message::Message;
use crate::routing::Route;
use crate::seo;
use crate::state::State;
use crate::theme::{Container, NakaTheme};
use crate::views::components::{self, copy};
use crate::views::opening_hours;

pub fn view(state: &State) -> Element<'_, Message> {
    let Some(restaurant) = state.selected_restaurant() else {
        return column![
            components::section_title("Contact"),
            components::empty_state(copy::NO_RESTAURANT),
        ]
        .spacing(16)
        .padding(32)
        .into();
    };

    let details = container(
        column![
            text(&restaurant.name).size(20).color(NakaTheme::TEXT_PRIMARY),
            text(&restaurant.address)
                .size(15)
                .color(NakaTheme::TEXT_SECONDARY),
            text(restaurant.locality())
                .size(15)
                .color(NakaTheme::TEXT_SECONDARY),
            text(&restaurant.phone).size(20).color(NakaTheme::PRIMARY),
            text(&restaurant.google_maps_url)
                .size(13)
                .color(NakaTheme::TEXT_DIMMED),
        ]
        .spacing(8),
    )
    .style(Container::Card.style())
    .padding(24)
    .width(Length::Fill);

    // Copy-ready blurb and page link, for passing the address along.
    let share = container(
        column![
            text("Partager").size(13).color(NakaTheme::TEXT_DIMMED),
            text(seo::page_description(Route::Contact, Some(restaurant)))
                .size(13)
                .color(NakaTheme::TEXT_SECONDARY),
            text(seo::canonical_url(Route::Contact))
                .size(13)
                .color(NakaTheme::TEXT_DIMMED),
        ]
        .spacing(6),
    )
    .style(Container::Card.style())
    .padding(20)
    .width(Length::Fill);

    let mut page = column![
        components::section_title("Contact"),
        components::section_subtitle(&restaurant.name),
        details,
        share,
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
