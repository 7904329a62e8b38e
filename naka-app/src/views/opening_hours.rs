//! Weekly opening hours table with the current day highlighted.

use chrono::{Datelike, Local};
use iced::widget::{column, row, text, Space};
use iced::{Element, Length};
use naka_model::{DaySchedule, OpeningHours, DAY_ORDER};

use crate::message::Message;
use crate::theme::NakaTheme;

/// French day label with an uppercase initial.
fn day_label(day: &str) -> String {
    let mut chars = day.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn schedule_label(schedule: Option<&DaySchedule>) -> String {
    match schedule {
        Some(schedule) => schedule.ranges().join(" / "),
        None => "Fermé".to_owned(),
    }
}

pub fn table(hours: &OpeningHours) -> Element<'_, Message> {
    let today = DAY_ORDER[Local::now().weekday().num_days_from_monday() as usize];

    column(hours.week().into_iter().map(|(day, schedule)| {
        let is_today = day == today;
        let color = if is_today {
            NakaTheme::PRIMARY
        } else if schedule.is_none() {
            NakaTheme::TEXT_DIMMED
        } else {
            NakaTheme::TEXT_SECONDARY
        };
        row![
            text(day_label(day)).size(14).color(color),
            Space::new(Length::Fill, Length::Shrink),
            text(schedule_label(schedule)).size(14).color(color),
        ]
        .width(Length::Fill)
        .into()
    }))
    .spacing(6)
    .width(Length::Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_days_say_ferme() {
        assert_eq!(schedule_label(None), "Fermé");
    }

    #[test]
    fn split_service_joins_ranges() {
        let split = DaySchedule::Split(vec!["12h-14h30".into(), "19h-22h30".into()]);
        assert_eq!(schedule_label(Some(&split)), "12h-14h30 / 19h-22h30");
    }

    #[test]
    fn day_labels_are_capitalized() {
        assert_eq!(day_label("lundi"), "Lundi");
        assert_eq!(day_label("dimanche"), "Dimanche");
    }
}
