//! Gesture-driven wheel carousel: accumulator, angular layout, and the
//! Idle/Snapping controller.

pub mod controller;
pub mod gesture;
pub mod layout;

pub use controller::{CarouselController, SNAP_COOLDOWN};
pub use gesture::{GestureAccumulator, Step, SCROLL_THRESHOLD};
pub use layout::{place, ItemPlacement, ARC_RADIUS, ARC_STEP_DEGREES, VISIBLE_ARC_DEGREES};

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    #[test]
    fn nine_item_window_around_the_active_index() {
        // Active at 4 of 9: the active card is centered and fully
        // opaque; the wrap-distance-4 card at index 8 falls outside
        // the ±90° window.
        let active = place(4, 4, 9);
        assert!(active.visible);
        assert_eq!(active.opacity, 1.0);

        let behind = place(8, 4, 9);
        assert!(!behind.visible);

        // Nothing farther than 3 steps renders.
        for item in 0..9 {
            let relative = layout::normalize_relative(item, 4, 9);
            let placement = place(item, 4, 9);
            assert_eq!(placement.visible, relative.unsigned_abs() <= 3);
        }
    }

    #[test]
    fn wheel_session_walks_the_ring() {
        let mut ctl = CarouselController::new(9);
        let mut now = Instant::now();

        // Two downward notches advance to the previous item (wrap to 8).
        ctl.feed(40.0, now);
        ctl.feed(40.0, now);
        assert_eq!(ctl.current_index(), 8);

        // A frantic gesture during the cooldown goes nowhere.
        ctl.feed(400.0, now);
        assert_eq!(ctl.current_index(), 8);

        now += SNAP_COOLDOWN;
        ctl.tick(now);
        ctl.feed(-SCROLL_THRESHOLD, now);
        assert_eq!(ctl.current_index(), 0);
    }
}
