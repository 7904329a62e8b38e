//! Decorative rotating ornament on the home page, a ring of red marks
//! spinning slowly around a central disc.

use std::f32::consts::TAU;

use iced::widget::canvas::{self, Canvas, Frame, Path};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme};

use crate::message::Message;
use crate::theme::NakaTheme;

const MARKS: usize = 12;
const SPIN_SECONDS: f32 = 24.0;

pub struct Ornament {
    elapsed_secs: f32,
}

impl Ornament {
    pub fn view<'a>(elapsed_secs: f32) -> Element<'a, Message> {
        Canvas::new(Ornament { elapsed_secs })
            .width(Length::Fill)
            .height(Length::Fixed(260.0))
            .into()
    }
}

impl canvas::Program<Message> for Ornament {
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
        let center = frame.center();
        let radius = (bounds.width.min(bounds.height) * 0.38).max(40.0);

        let disc = Path::circle(center, radius * 0.45);
        frame.fill(
            &disc,
            Color {
                a: 0.15,
                ..NakaTheme::PRIMARY
            },
        );

        let spin = (self.elapsed_secs / SPIN_SECONDS) * TAU;
        for mark in 0..MARKS {
            let angle = spin + mark as f32 / MARKS as f32 * TAU;
            let position = Point::new(
                center.x + angle.cos() * radius,
                center.y + angle.sin() * radius,
            );
            // Every third mark is larger, like grains of rice around a bowl.
            let size = if mark % 3 == 0 { 6.0 } else { 3.5 };
            frame.fill(&Path::circle(position, size), NakaTheme::PRIMARY);
        }

        vec![frame.into_geometry()]
    }
}
