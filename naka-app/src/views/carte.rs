//! The carte page: category tabs, the wheel carousel, and a scrolling
//! item list whose progress drives the parallax bar.

use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Element, Length};
use naka_model::category_label;
use once_cell::sync::Lazy;

use crate::message::Message;
use crate::state::State;
use crate::theme::{Button, Container, NakaTheme};
use crate::views::components::{self, copy};
use crate::views::wheel::WheelCarousel;

static MENU_LIST_ID: Lazy<scrollable::Id> = Lazy::new(|| scrollable::Id::new("carte-menu-list"));

/// Stable id of the item list, also used by `update` to scroll it back
/// to the top when the page remounts.
pub fn menu_list_id() -> scrollable::Id {
    MENU_LIST_ID.clone()
}

pub fn view(state: &State) -> Element<'_, Message> {
    if state.directory.is_empty() {
        return column![
            components::section_title("La Carte"),
            components::empty_state(copy::NO_RESTAURANTS_AVAILABLE),
        ]
        .spacing(16)
        .padding(32)
        .into();
    }

    let Some(restaurant) = state.selected_restaurant() else {
        return column![
            components::section_title("La Carte"),
            components::empty_state(copy::NO_RESTAURANT),
            container(
                button(text("Choisir un restaurant"))
                    .style(Button::Primary.style())
                    .padding([10, 24])
                    .on_press(Message::OpenRestaurantPrompt)
            )
            .width(Length::Fill)
            .align_x(iced::alignment::Horizontal::Center),
        ]
        .spacing(16)
        .padding(32)
        .into();
    };

    let items = state.menu.items(&restaurant.id, state.carte.active_category);

    let tabs = row(state.menu.categories(&restaurant.id).into_iter().map(
        |category| {
            button(text(category_label(category)).size(14))
                .style(
                    Button::Tab {
                        active: category == state.carte.active_category,
                    }
                    .style(),
                )
                .padding([8, 20])
                .on_press(Message::SelectCategory(category))
                .into()
        },
    ))
    .spacing(12);

    let body: Element<'_, Message> = if items.is_empty() {
        components::empty_state(copy::EMPTY_CATEGORY)
    } else {
        row![
            container(WheelCarousel::view(items, state.carte.carousel.current_index()))
                .width(Length::FillPortion(3))
                .height(Length::Fill),
            scrollable(
                column(items.iter().map(item_row))
                    .spacing(12)
                    .padding([0, 16])
            )
            .id(menu_list_id())
            .on_scroll(Message::MenuListScrolled)
            .width(Length::FillPortion(2))
            .height(Length::Fill),
        ]
        .spacing(24)
        .height(Length::Fill)
        .into()
    };

    column![
        components::section_title("La Carte"),
        components::section_subtitle(&restaurant.name),
        container(tabs)
            .width(Length::Fill)
            .align_x(iced::alignment::Horizontal::Center),
        components::parallax_bar(state.carte.list_progress),
        body,
    ]
    .spacing(16)
    .padding(32)
    .height(Length::Fill)
    .into()
}

fn item_row(item: &naka_model::MenuItem) -> Element<'_, Message> {
    let mut lines = column![row![
        text(&item.name).size(16).color(NakaTheme::TEXT_PRIMARY),
        iced::widget::Space::new(Length::Fill, Length::Shrink),
        text(item.price_label()).size(16).color(NakaTheme::PRIMARY),
    ]
    .spacing(8)]
    .spacing(4);

    if let Some(description) = &item.description {
        lines = lines.push(text(description).size(13).color(NakaTheme::TEXT_SECONDARY));
    }
    if let Some(note) = &item.note {
        lines = lines.push(text(note).size(12).color(NakaTheme::TEXT_DIMMED));
    }

    container(lines)
        .style(Container::Card.style())
        .padding(16)
        .width(Length::Fill)
        .into()
}
