//! Static history page.

use iced::widget::{column, container, text};
use iced::{Element, Length};

use crate::message::Message;
use crate::theme::{Container, NakaTheme};
use crate::views::components;

const CHAPTERS: [(&str, &str); 3] = [
    (
        "Des débuts modestes",
        "Petit Naka ouvre ses portes rue Merlin, dans le 11e arrondissement, \
         avec une poignée de tables et une idée simple : servir une cuisine \
         japonaise sincère, préparée chaque matin avec des produits frais.",
    ),
    (
        "Le goût du fait maison",
        "Sushis roulés à la commande, bouillons mijotés sur place, riz \
         vinaigré selon la recette familiale. Rien ne sort d'un congélateur, \
         tout passe par les mains de nos chefs.",
    ),
    (
        "Une maison, plusieurs adresses",
        "Portée par ses habitués, la maison a grandi sans changer d'esprit. \
         Chaque adresse garde la même carte courte, la même exigence et le \
         même accueil de quartier.",
    ),
];

pub fn view() -> Element<'static, Message> {
    let chapters = CHAPTERS.iter().map(|(title, body)| {
        container(
            column![
                text(*title).size(20).color(NakaTheme::PRIMARY),
                text(*body).size(15).color(NakaTheme::TEXT_SECONDARY),
            ]
            .spacing(8),
        )
        .style(Container::Card.style())
        .padding(24)
        .width(Length::Fill)
        .into()
    });

    container(
        column![
            components::section_title("Notre Histoire"),
            components::section_subtitle("Une cuisine japonaise de quartier"),
            column(chapters).spacing(16),
        ]
        .spacing(20)
        .padding(32)
        .max_width(760),
    )
    .width(Length::Fill)
    .align_x(iced::alignment::Horizontal::Center)
    .into()
}
