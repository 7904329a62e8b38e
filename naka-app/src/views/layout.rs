//! Page shell: navbar on top, footer at the bottom, the routed page in
//! between.

use iced::widget::{button, column, container, row, text, Space};
use iced::{Element, Length};

use crate::message::Message;
use crate::routing::Route;
use crate::state::State;
use crate::theme::{Button, Container, NakaTheme};

pub fn shell<'a>(state: &'a State, content: Element<'a, Message>) -> Element<'a, Message> {
    column![
        navbar(state),
        container(content).width(Length::Fill).height(Length::Fill),
        footer(state),
    ]
    .into()
}

fn navbar(state: &State) -> Element<'_, Message> {
    let tabs = row(Route::ALL.iter().map(|route| {
        button(text(route.label()).size(14))
            .style(
                Button::Tab {
                    active: *route == state.route,
                }
                .style(),
            )
            .padding([6, 16])
            .on_press(Message::Navigate(*route))
            .into()
    }))
    .spacing(8);

    let pill_label = match state.selected_restaurant() {
        Some(restaurant) => restaurant.name.clone(),
        None => "Choisir un restaurant".to_owned(),
    };
    let pill = button(
        container(text(pill_label).size(13))
            .style(Container::Pill.style())
            .padding([6, 14]),
    )
    .style(Button::Ghost.style())
    .padding(0)
    .on_press(Message::OpenRestaurantPrompt);

    container(
        row![
            text("Petit Naka").size(22).color(NakaTheme::PRIMARY),
            Space::new(Length::Fill, Length::Shrink),
            tabs,
            Space::new(Length::Fixed(16.0), Length::Shrink),
            pill,
        ]
        .align_y(iced::alignment::Vertical::Center)
        .padding([14, 24]),
    )
    .width(Length::Fill)
    .into()
}

fn footer(state: &State) -> Element<'_, Message> {
    let line = match state.selected_restaurant() {
        Some(restaurant) => format!(
            "{} · {}, {} · {}",
            restaurant.name,
            restaurant.address,
            restaurant.locality(),
            restaurant.phone
        ),
        None => "Cuisine japonaise authentique à Paris".to_owned(),
    };

    container(
        text(line).size(12).color(NakaTheme::TEXT_DIMMED),
    )
    .width(Length::Fill)
    .padding([10, 24])
    .align_x(iced::alignment::Horizontal::Center)
    .into()
}
