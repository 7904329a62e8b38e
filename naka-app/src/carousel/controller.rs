//! Idle/Snapping state machine owning the carousel index.

use std::time::{Duration, Instant};

use super::gesture::{GestureAccumulator, Step};

/// Guard window after each index change. Gesture input arriving inside
/// the window is dropped, not queued.
pub const SNAP_COOLDOWN: Duration = Duration::from_millis(600);

#[derive(Debug, Clone)]
pub struct CarouselController {
    item_count: usize,
    current_index: usize,
    accumulator: GestureAccumulator,
    /// `Some` while the snap cooldown is running.
    snap_started: Option<Instant>,
    cooldown: Duration,
}

impl CarouselController {
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count,
            current_index: 0,
            accumulator: GestureAccumulator::new(),
            snap_started: None,
            cooldown: SNAP_COOLDOWN,
        }
    }

    #[cfg(test)]
    fn with_cooldown(item_count: usize, cooldown: Duration) -> Self {
        Self {
            cooldown,
            ..Self::new(item_count)
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn is_snapping(&self) -> bool {
        self.snap_started.is_some()
    }

    /// Feed one raw gesture delta. Returns `true` when the index
    /// changed. The guard check runs before accumulation, so deltas
    /// received while snapping are dropped entirely.
    pub fn feed(&mut self, delta: f32, now: Instant) -> bool {
        if self.item_count == 0 || self.is_snapping() {
            return false;
        }
        match self.accumulator.push(delta) {
            Some(step) => {
                self.advance(step, now);
                true
            }
            None => false,
        }
    }

    fn advance(&mut self, step: Step, now: Instant) {
        let count = self.item_count as isize;
        let next = (self.current_index as isize + step.offset() + count) % count;
        self.current_index = next as usize;
        self.accumulator.reset();
        self.snap_started = Some(now);
    }

    /// Release the guard once the cooldown has elapsed. Returns `true`
    /// on the Snapping → Idle transition, which is when the tick
    /// subscription can stop.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.snap_started {
            Some(since) if now.duration_since(since) >= self.cooldown => {
                self.snap_started = None;
                true
            }
            _ => false,
        }
    }

    /// Full reset on mount or category change: index 0, empty
    /// accumulator, cooldown cancelled. A tick after a reset never
    /// mutates state on behalf of the cancelled cooldown.
    pub fn reset(&mut self, item_count: usize) {
        self.item_count = item_count;
        self.current_index = 0;
        self.accumulator.reset();
        self.snap_started = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f32 = super::super::gesture::SCROLL_THRESHOLD;

    fn t0() -> Instant {
        Instant::now()
    }

    #[test]
    fn crossing_the_threshold_moves_and_snaps() {
        let mut ctl = CarouselController::new(5);
        let now = t0();
        assert!(!ctl.feed(THRESHOLD / 2.0, now));
        assert!(ctl.feed(THRESHOLD / 2.0, now));
        // Positive delta surfaces the previous item: 0 wraps to 4.
        assert_eq!(ctl.current_index(), 4);
        assert!(ctl.is_snapping());
    }

    #[test]
    fn input_during_cooldown_is_a_dropped_no_op() {
        let mut ctl = CarouselController::new(5);
        let now = t0();
        assert!(ctl.feed(-THRESHOLD, now));
        assert_eq!(ctl.current_index(), 1);

        // Well past the threshold, but the guard is up.
        assert!(!ctl.feed(-THRESHOLD * 3.0, now));
        assert_eq!(ctl.current_index(), 1);

        // The dropped delta must not linger: after the cooldown, a
        // sub-threshold nudge still does nothing.
        assert!(ctl.tick(now + SNAP_COOLDOWN));
        assert!(!ctl.feed(-THRESHOLD / 4.0, now + SNAP_COOLDOWN));
        assert_eq!(ctl.current_index(), 1);
    }

    #[test]
    fn cooldown_releases_only_after_the_window() {
        let mut ctl = CarouselController::with_cooldown(3, Duration::from_millis(200));
        let now = t0();
        ctl.feed(-THRESHOLD, now);
        assert!(!ctl.tick(now + Duration::from_millis(100)));
        assert!(ctl.is_snapping());
        assert!(ctl.tick(now + Duration::from_millis(200)));
        assert!(!ctl.is_snapping());
        // Idle ticks are inert.
        assert!(!ctl.tick(now + Duration::from_millis(400)));
    }

    #[test]
    fn negative_index_wraps_to_last() {
        let mut ctl = CarouselController::new(4);
        let now = t0();
        ctl.feed(THRESHOLD, now);
        assert_eq!(ctl.current_index(), 3);
    }

    #[test]
    fn reset_clears_everything_and_cancels_the_cooldown() {
        let mut ctl = CarouselController::new(6);
        let now = t0();
        ctl.feed(-THRESHOLD, now);
        ctl.feed(-THRESHOLD / 2.0, now);
        assert!(ctl.is_snapping());

        ctl.reset(9);
        assert_eq!(ctl.current_index(), 0);
        assert_eq!(ctl.item_count(), 9);
        assert!(!ctl.is_snapping());

        // The cancelled cooldown never fires late.
        assert!(!ctl.tick(now + SNAP_COOLDOWN * 2));
        assert_eq!(ctl.current_index(), 0);
    }

    #[test]
    fn empty_carousel_ignores_input() {
        let mut ctl = CarouselController::new(0);
        assert!(!ctl.feed(THRESHOLD * 4.0, t0()));
        assert_eq!(ctl.current_index(), 0);
    }
}
