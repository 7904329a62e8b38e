use std::time::Instant;

use iced::widget::scrollable;
use naka_model::RestaurantId;

use crate::routing::Route;

/// Raw gesture input for the wheel carousel.
#[derive(Debug, Clone)]
pub enum CarouselMessage {
    /// Wheel delta, normalised to pixel units matching the browser
    /// sign convention (positive = scrolling down).
    WheelScrolled(f32),
    TouchStarted(f32),
    TouchMoved(f32),
    TouchEnded,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Navbar navigation; starts the page fade.
    Navigate(Route),
    /// Shared animation tick (page fade, snap cooldown, ornament).
    Tick(Instant),
    SelectRestaurant(RestaurantId),
    OpenRestaurantPrompt,
    SelectCategory(&'static str),
    Carousel(CarouselMessage),
    MenuListScrolled(scrollable::Viewport),
}
