//! Canvas rendering of the wheel carousel.
//!
//! The cards live on a virtual arc to the left of the canvas; each
//! frame recomputes every placement from the active index and paints
//! visible cards back to front.

use iced::widget::canvas::{self, Canvas, Frame, Path, Text};
use iced::{alignment, mouse, Color, Element, Length, Point, Rectangle, Renderer, Size, Theme, Vector};
use naka_model::MenuItem;

use crate::carousel::{place, ItemPlacement, ARC_RADIUS};
use crate::message::Message;
use crate::theme::NakaTheme;

const CARD_WIDTH: f32 = 220.0;
const CARD_HEIGHT: f32 = 140.0;
const CARD_RADIUS: f32 = 12.0;

pub struct WheelCarousel<'a> {
    items: &'a [MenuItem],
    current: usize,
}

impl<'a> WheelCarousel<'a> {
    pub fn view(items: &'a [MenuItem], current: usize) -> Element<'a, Message> {
        Canvas::new(WheelCarousel { items, current })
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn draw_card(&self, frame: &mut Frame, item: &MenuItem, placement: &ItemPlacement) {
        let alpha = placement.opacity;
        let card = Path::rounded_rectangle(
            Point::new(-CARD_WIDTH / 2.0, -CARD_HEIGHT / 2.0),
            Size::new(CARD_WIDTH, CARD_HEIGHT),
            CARD_RADIUS.into(),
        );
        frame.fill(&card, with_alpha(NakaTheme::CARD_LIGHT, alpha));

        frame.fill_text(Text {
            content: item.name.clone(),
            position: Point::new(0.0, -CARD_HEIGHT / 2.0 + 28.0),
            color: with_alpha(NakaTheme::CARD_LIGHT_TEXT, alpha),
            size: 18.0.into(),
            horizontal_alignment: alignment::Horizontal::Center,
            vertical_alignment: alignment::Vertical::Center,
            ..Text::default()
        });

        if let Some(description) = &item.description {
            frame.fill_text(Text {
                content: description.clone(),
                position: Point::new(0.0, 0.0),
                color: with_alpha(NakaTheme::TEXT_DIMMED, alpha),
                size: 12.0.into(),
                horizontal_alignment: alignment::Horizontal::Center,
                vertical_alignment: alignment::Vertical::Center,
                ..Text::default()
            });
        }

        frame.fill_text(Text {
            content: item.price_label(),
            position: Point::new(0.0, CARD_HEIGHT / 2.0 - 28.0),
            color: with_alpha(NakaTheme::PRIMARY, alpha),
            size: 20.0.into(),
            horizontal_alignment: alignment::Horizontal::Center,
            vertical_alignment: alignment::Vertical::Center,
            ..Text::default()
        });
    }
}

impl canvas::Program<Message> for WheelCarousel<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        if self.items.is_empty() {
            return vec![frame.into_geometry()];
        }

        // Arc center sits off-canvas to the left so the active card
        // lands near the horizontal middle.
        let origin = Point::new(bounds.width * 0.5 - ARC_RADIUS, bounds.height * 0.45);

        let mut cards: Vec<(usize, ItemPlacement)> = (0..self.items.len())
            .map(|index| (index, place(index, self.current, self.items.len())))
            .filter(|(_, placement)| placement.visible)
            .collect();
        cards.sort_by_key(|(_, placement)| placement.z_index);

        for (index, placement) in &cards {
            frame.with_save(|frame| {
                frame.translate(Vector::new(origin.x + placement.x, origin.y + placement.y));
                frame.rotate(placement.rotation.to_radians());
                frame.scale(placement.scale);
                self.draw_card(frame, &self.items[*index], placement);
            });
        }

        vec![frame.into_geometry()]
    }
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}
