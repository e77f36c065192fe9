#![forbid(unsafe_code)]

//! Swipe gesture recognition.
//!
//! A [`SwipeTracker`] folds a down/up pair of pointer events into an
//! optional horizontal swipe. A gesture counts as a swipe only when its
//! horizontal travel exceeds the configured threshold and dominates the
//! vertical travel; anything else is dropped so taps and scrolls don't
//! trigger carousel transitions.

use crate::event::{PointerEvent, PointerPhase};

/// Configuration for swipe recognition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeConfig {
    /// Minimum horizontal travel, in surface units, for a gesture to count.
    pub threshold: f32,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self { threshold: 50.0 }
    }
}

impl SwipeConfig {
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }
}

/// Direction of a recognized horizontal swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Travel toward negative x.
    Left,
    /// Travel toward positive x.
    Right,
}

/// Tracks one pointer contact at a time and classifies it on release.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    config: SwipeConfig,
    origin: Option<(f32, f32)>,
}

impl SwipeTracker {
    #[must_use]
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            origin: None,
        }
    }

    /// Feed a pointer event. Returns a direction when an up event completes
    /// a gesture that qualifies as a horizontal swipe.
    pub fn track(&mut self, event: &PointerEvent) -> Option<SwipeDirection> {
        match event.phase {
            PointerPhase::Down => {
                self.origin = Some((event.x, event.y));
                None
            }
            PointerPhase::Move => None,
            PointerPhase::Up => {
                let (ox, oy) = self.origin.take()?;
                let dx = event.x - ox;
                let dy = event.y - oy;
                classify(dx, dy, self.config.threshold)
            }
        }
    }

    /// Drop any in-flight contact, e.g. when input focus moves elsewhere.
    pub fn reset(&mut self) {
        self.origin = None;
    }
}

/// Classify a completed gesture delta.
fn classify(dx: f32, dy: f32, threshold: f32) -> Option<SwipeDirection> {
    if dx.abs() <= threshold || dx.abs() < dy.abs() {
        return None;
    }
    if dx < 0.0 {
        Some(SwipeDirection::Left)
    } else {
        Some(SwipeDirection::Right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::PointerEvent;

    fn swipe(tracker: &mut SwipeTracker, dx: f32, dy: f32) -> Option<SwipeDirection> {
        assert_eq!(tracker.track(&PointerEvent::down(100.0, 100.0)), None);
        tracker.track(&PointerEvent::up(100.0 + dx, 100.0 + dy))
    }

    #[test]
    fn leftward_swipe_past_threshold() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(swipe(&mut tracker, -60.0, 0.0), Some(SwipeDirection::Left));
    }

    #[test]
    fn rightward_swipe_past_threshold() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(swipe(&mut tracker, 75.0, 5.0), Some(SwipeDirection::Right));
    }

    #[test]
    fn short_travel_is_dropped() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(swipe(&mut tracker, 30.0, 0.0), None);
    }

    #[test]
    fn exactly_threshold_is_dropped() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(swipe(&mut tracker, 50.0, 0.0), None);
        assert_eq!(swipe(&mut tracker, -50.0, 0.0), None);
    }

    #[test]
    fn vertical_dominance_is_dropped() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(swipe(&mut tracker, -60.0, 90.0), None);
    }

    #[test]
    fn up_without_down_is_ignored() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(tracker.track(&PointerEvent::up(0.0, 0.0)), None);
    }

    #[test]
    fn origin_consumed_by_up() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(swipe(&mut tracker, -60.0, 0.0), Some(SwipeDirection::Left));
        // A second up with no new down must not classify again.
        assert_eq!(tracker.track(&PointerEvent::up(0.0, 0.0)), None);
    }

    #[test]
    fn reset_clears_contact() {
        let mut tracker = SwipeTracker::default();
        tracker.track(&PointerEvent::down(0.0, 0.0));
        tracker.reset();
        assert_eq!(tracker.track(&PointerEvent::up(-80.0, 0.0)), None);
    }

    #[test]
    fn custom_threshold() {
        let mut tracker = SwipeTracker::new(SwipeConfig::new(10.0));
        assert_eq!(swipe(&mut tracker, -12.0, 0.0), Some(SwipeDirection::Left));
    }
}
