//! Threshold accumulator turning raw wheel/touch deltas into discrete
//! carousel steps.

/// Accumulated input required before one step is emitted, in pixel
/// units.
pub const SCROLL_THRESHOLD: f32 = 80.0;

/// One discrete carousel advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Previous,
    Next,
}

impl Step {
    /// Signed index offset for modular arithmetic.
    pub fn offset(self) -> isize {
        match self {
            Step::Previous => -1,
            Step::Next => 1,
        }
    }
}

/// Running sum of raw deltas. Emits at most one step per pushed batch,
/// resetting to zero on emission, so a single fast gesture never
/// multi-steps.
#[derive(Debug, Clone, Default)]
pub struct GestureAccumulator {
    accumulated: f32,
}

impl GestureAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accumulated(&self) -> f32 {
        self.accumulated
    }

    /// Add one raw delta to the running sum.
    ///
    /// The emitted direction is inverted relative to the raw sign:
    /// scrolling down (positive delta) surfaces the previous item.
    pub fn push(&mut self, delta: f32) -> Option<Step> {
        self.accumulated += delta;
        if self.accumulated.abs() < SCROLL_THRESHOLD {
            return None;
        }
        let step = if self.accumulated > 0.0 {
            Step::Previous
        } else {
            Step::Next
        };
        self.accumulated = 0.0;
        Some(step)
    }

    pub fn reset(&mut self) {
        self.accumulated = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_threshold_emits_nothing() {
        let mut acc = GestureAccumulator::new();
        for _ in 0..7 {
            assert_eq!(acc.push(10.0), None);
        }
        assert!((acc.accumulated() - 70.0).abs() < f32::EPSILON);
    }

    #[test]
    fn crossing_threshold_emits_once_and_resets() {
        let mut acc = GestureAccumulator::new();
        assert_eq!(acc.push(79.0), None);
        assert_eq!(acc.push(1.0), Some(Step::Previous));
        assert_eq!(acc.accumulated(), 0.0);
    }

    #[test]
    fn emitted_direction_is_inverted() {
        let mut acc = GestureAccumulator::new();
        assert_eq!(acc.push(120.0), Some(Step::Previous));
        assert_eq!(acc.push(-120.0), Some(Step::Next));
    }

    #[test]
    fn one_large_delta_steps_once() {
        let mut acc = GestureAccumulator::new();
        assert_eq!(acc.push(-500.0), Some(Step::Next));
        // The overshoot is discarded with the reset.
        assert_eq!(acc.accumulated(), 0.0);
    }

    #[test]
    fn opposite_deltas_cancel() {
        let mut acc = GestureAccumulator::new();
        assert_eq!(acc.push(60.0), None);
        assert_eq!(acc.push(-60.0), None);
        assert_eq!(acc.accumulated(), 0.0);
    }
}
