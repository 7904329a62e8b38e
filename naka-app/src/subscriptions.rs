//! Subscription composition.
//!
//! Gesture listening runs only while the carte view is frontmost, and
//! the animation tick only while something is actually animating; the
//! runtime drops a subscription the moment it stops being returned,
//! which is what cancels cooldown timers on navigation or prompt.

use std::time::Duration;

use iced::event::{self, Event, Status};
use iced::{mouse, touch, window, Subscription};

use crate::message::{CarouselMessage, Message};
use crate::routing::Route;
use crate::state::State;

/// Animation frame period.
const TICK: Duration = Duration::from_millis(50);

/// Pixel units per wheel line, bringing line-based mice in range of
/// the 80-unit threshold.
const LINE_UNITS: f32 = 60.0;

pub fn subscription(state: &State) -> Subscription<Message> {
    let mut subscriptions = Vec::new();

    let carte_active = state.route == Route::Carte && !state.show_restaurant_prompt;
    if carte_active {
        subscriptions.push(event::listen_with(carte_gestures));
    }

    let animating = state.fade.is_active()
        || state.carte.carousel.is_snapping()
        || state.route == Route::Home;
    if animating {
        subscriptions.push(iced::time::every(TICK).map(Message::Tick));
    }

    Subscription::batch(subscriptions)
}

fn carte_gestures(event: Event, status: Status, _window: window::Id) -> Option<Message> {
    // Events a widget already consumed (e.g. the item list scrollable)
    // stay consumed.
    if status == Status::Captured {
        return None;
    }
    match event {
        Event::Mouse(mouse::Event::WheelScrolled { delta }) => Some(Message::Carousel(
            CarouselMessage::WheelScrolled(wheel_units(delta)),
        )),
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(Message::Carousel(CarouselMessage::TouchStarted(position.y)))
        }
        Event::Touch(touch::Event::FingerMoved { position, .. }) => {
            Some(Message::Carousel(CarouselMessage::TouchMoved(position.y)))
        }
        Event::Touch(touch::Event::FingerLifted { .. } | touch::Event::FingerLost { .. }) => {
            Some(Message::Carousel(CarouselMessage::TouchEnded))
        }
        _ => None,
    }
}

/// Normalise wheel deltas to the browser sign convention the
/// accumulator expects: positive when scrolling down.
fn wheel_units(delta: mouse::ScrollDelta) -> f32 {
    match delta {
        mouse::ScrollDelta::Lines { y, .. } => -y * LINE_UNITS,
        mouse::ScrollDelta::Pixels { y, .. } => -y,
    }
}
