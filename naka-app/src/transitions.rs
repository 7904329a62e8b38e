//! Page transition machinery.
//!
//! The original site staged its route changes through chained timeouts;
//! here the fade is an explicit two-phase machine (fade out over the
//! old page, swap, fade back in) driven by the shared tick
//! subscription, so cancellation and testing stay tractable.

use std::time::{Duration, Instant};

/// Duration of each fade phase.
pub const PAGE_FADE_DURATION: Duration = Duration::from_millis(300);

/// Easing function types for transitions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EasingFunction {
    Linear,
    EaseOutCubic,
    EaseInOutCubic,
    EaseOutQuart,
}

impl EasingFunction {
    /// Apply the easing function to a progress value (0.0 to 1.0).
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingFunction::Linear => t,
            EasingFunction::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            EasingFunction::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            EasingFunction::EaseOutQuart => 1.0 - (1.0 - t).powi(4),
        }
    }
}

/// A running interpolation between two scalar values.
#[derive(Debug, Clone)]
pub struct Transition {
    pub from: f32,
    pub to: f32,
    started_at: Instant,
    duration: Duration,
    easing: EasingFunction,
    progress: f32,
}

impl Transition {
    /// Start a transition immediately.
    pub fn new(from: f32, to: f32, duration: Duration, easing: EasingFunction) -> Self {
        Self {
            from,
            to,
            started_at: Instant::now(),
            duration,
            easing,
            progress: if duration.is_zero() { 1.0 } else { 0.0 },
        }
    }

    /// Advance progress from the wall clock.
    pub fn update(&mut self) {
        if self.progress >= 1.0 {
            return;
        }
        let elapsed = Instant::now().duration_since(self.started_at);
        if elapsed >= self.duration {
            self.progress = 1.0;
        } else {
            self.progress = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        }
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }

    /// Current eased value.
    pub fn value(&self) -> f32 {
        let t = self.easing.apply(self.progress);
        self.from + (self.to - self.from) * t
    }
}

/// Two-phase fade-through-black around a payload swap.
#[derive(Debug, Clone)]
pub enum PageFade<T: Clone> {
    Idle,
    /// Scrim rising over the old page; `target` applied when it peaks.
    FadingOut { target: T, fade: Transition },
    /// Scrim falling away from the new page.
    FadingIn { fade: Transition },
}

impl<T: Clone> PageFade<T> {
    pub fn idle() -> Self {
        PageFade::Idle
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, PageFade::Idle)
    }

    /// Begin a fade towards `target`. Ignored while a fade is already
    /// in flight; the caller keeps navigation single-writer.
    pub fn begin(&mut self, target: T) {
        if self.is_active() {
            return;
        }
        *self = PageFade::FadingOut {
            target,
            fade: Transition::new(0.0, 1.0, PAGE_FADE_DURATION, EasingFunction::EaseOutCubic),
        };
    }

    /// Scrim opacity in `[0, 1]`.
    pub fn scrim_alpha(&self) -> f32 {
        match self {
            PageFade::Idle => 0.0,
            PageFade::FadingOut { fade, .. } | PageFade::FadingIn { fade } => fade.value(),
        }
    }

    /// Advance the machine. Returns the target exactly once, at the
    /// moment the scrim peaks and the page swap should happen.
    pub fn tick(&mut self) -> Option<T> {
        match self {
            PageFade::Idle => None,
            PageFade::FadingOut { target, fade } => {
                fade.update();
                if fade.is_complete() {
                    let target = target.clone();
                    *self = PageFade::FadingIn {
                        fade: Transition::new(
                            1.0,
                            0.0,
                            PAGE_FADE_DURATION,
                            EasingFunction::EaseOutCubic,
                        ),
                    };
                    Some(target)
                } else {
                    None
                }
            }
            PageFade::FadingIn { fade } => {
                fade.update();
                if fade.is_complete() {
                    *self = PageFade::Idle;
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints_are_fixed() {
        for easing in [
            EasingFunction::Linear,
            EasingFunction::EaseOutCubic,
            EasingFunction::EaseInOutCubic,
            EasingFunction::EaseOutQuart,
        ] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
    }

    #[test]
    fn ease_out_cubic_front_loads_progress() {
        assert!(EasingFunction::EaseOutCubic.apply(0.5) > 0.5);
    }

    #[test]
    fn zero_duration_transition_is_instant() {
        let fade = Transition::new(0.0, 1.0, Duration::ZERO, EasingFunction::Linear);
        assert!(fade.is_complete());
        assert_eq!(fade.value(), 1.0);
    }

    #[test]
    fn fade_swaps_exactly_once() {
        // Zero-duration phases let the machine run without sleeping.
        let mut fade: PageFade<&str> = PageFade::idle();
        fade.begin("carte");

        match &mut fade {
            PageFade::FadingOut {
                fade: transition, ..
            } => *transition = Transition::new(0.0, 1.0, Duration::ZERO, EasingFunction::Linear),
            _ => unreachable!(),
        }
        assert_eq!(fade.tick(), Some("carte"));
        assert!(matches!(fade, PageFade::FadingIn { .. }));

        match &mut fade {
            PageFade::FadingIn { fade: transition } => {
                *transition = Transition::new(1.0, 0.0, Duration::ZERO, EasingFunction::Linear)
            }
            _ => unreachable!(),
        }
        assert_eq!(fade.tick(), None);
        assert!(!fade.is_active());
    }

    #[test]
    fn begin_is_ignored_while_active() {
        let mut fade: PageFade<&str> = PageFade::idle();
        fade.begin("carte");
        fade.begin("contact");
        match &fade {
            PageFade::FadingOut { target, .. } => assert_eq!(*target, "carte"),
            _ => unreachable!(),
        }
    }
}
