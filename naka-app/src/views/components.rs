//! Small shared view pieces.

use iced::widget::{container, row, text, Space};
use iced::{Background, Border, Element, Length, Shadow};

use crate::message::Message;
use crate::theme::NakaTheme;

/// User-facing copy for the degraded states.
pub mod copy {
    pub const NO_RESTAURANT: &str =
        "Veuillez sélectionner un restaurant pour voir les informations.";
    pub const NO_RESTAURANTS_AVAILABLE: &str =
        "Aucun restaurant disponible. Veuillez relancer l'application.";
    pub const EMPTY_CATEGORY: &str = "Aucun plat dans cette catégorie.";
}

pub fn section_title(title: &str) -> Element<'_, Message> {
    container(text(title).size(40).color(NakaTheme::TEXT_PRIMARY))
        .width(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .into()
}

pub fn section_subtitle(subtitle: &str) -> Element<'_, Message> {
    container(text(subtitle).size(18).color(NakaTheme::TEXT_SECONDARY))
        .width(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .into()
}

/// Centered dimmed notice used wherever data is missing.
pub fn empty_state(message: &str) -> Element<'_, Message> {
    container(text(message).size(16).color(NakaTheme::TEXT_SECONDARY))
        .width(Length::Fill)
        .padding(40)
        .align_x(iced::alignment::Horizontal::Center)
        .into()
}

/// Width of the travelling parallax bar.
const BAR_WIDTH: f32 = 50.0;

/// Thin red bar whose horizontal position follows the list's scroll
/// progress, left edge at 0, right edge at 1.
pub fn parallax_bar(progress: f32) -> Element<'static, Message> {
    let progress = progress.clamp(0.0, 1.0);
    // FillPortion wants non-zero weights on both sides.
    let left = 1 + (progress * 998.0) as u16;
    let right = 1 + ((1.0 - progress) * 998.0) as u16;

    let bar = container(Space::new(
        Length::Fixed(BAR_WIDTH),
        Length::Fixed(4.0),
    ))
    .style(|_| iced::widget::container::Style {
        text_color: None,
        background: Some(Background::Color(NakaTheme::PRIMARY)),
        border: Border::default(),
        shadow: Shadow::default(),
    });

    row![
        Space::new(Length::FillPortion(left), Length::Fixed(4.0)),
        bar,
        Space::new(Length::FillPortion(right), Length::Fixed(4.0)),
    ]
    .width(Length::Fill)
    .into()
}
