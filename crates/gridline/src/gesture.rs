//! Click/drag disambiguation for row activation.
//!
//! A pointer press arms the tracker with its origin x-coordinate; the
//! matching release resolves to either a click or a drag based on how far
//! the pointer travelled horizontally. Text selection inside a row looks
//! exactly like a click at the event level, so activation must be
//! suppressed once the travel distance crosses the threshold.

/// Maximum horizontal travel, in pixels, for a press/release pair to count
/// as a click. Travel of exactly this distance is still a click; anything
/// strictly greater is a drag.
pub const DRAG_THRESHOLD_PX: f32 = 10.0;

/// The resolution of a press/release pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Travel within the threshold; activate the row.
    Click,
    /// Travel beyond the threshold; suppress activation.
    Drag,
}

/// Pure distance-threshold decision for a press at `origin_x` released at
/// `release_x`.
pub fn classify_release(origin_x: f32, release_x: f32) -> ClickOutcome {
    if (release_x - origin_x).abs() > DRAG_THRESHOLD_PX {
        ClickOutcome::Drag
    } else {
        ClickOutcome::Click
    }
}

/// Two-state tracker: idle until a press arms it with an origin, then
/// resolved (back to idle) by the matching release.
#[derive(Debug, Default)]
pub struct GestureTracker {
    origin_x: Option<f32>,
}

impl GestureTracker {
    /// Creates an idle tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the tracker with the press origin. A second press before a
    /// release simply re-arms with the new origin.
    pub fn press(&mut self, x: f32) {
        self.origin_x = Some(x);
    }

    /// Returns `true` if a press has been recorded and not yet resolved.
    pub fn is_armed(&self) -> bool {
        self.origin_x.is_some()
    }

    /// Resolves the gesture at the release coordinate and returns the
    /// tracker to idle.
    ///
    /// A release with no recorded press resolves as a click: there is no
    /// origin to measure drag distance from.
    pub fn release(&mut self, x: f32) -> ClickOutcome {
        match self.origin_x.take() {
            Some(origin_x) => classify_release(origin_x, x),
            None => ClickOutcome::Click,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_threshold_is_click() {
        assert_eq!(classify_release(100.0, 110.0), ClickOutcome::Click);
        assert_eq!(classify_release(100.0, 90.0), ClickOutcome::Click);
    }

    #[test]
    fn test_beyond_threshold_is_drag() {
        assert_eq!(classify_release(100.0, 111.0), ClickOutcome::Drag);
        assert_eq!(classify_release(100.0, 89.0), ClickOutcome::Drag);
    }

    #[test]
    fn test_tracker_arms_and_resolves() {
        let mut tracker = GestureTracker::new();
        assert!(!tracker.is_armed());

        tracker.press(100.0);
        assert!(tracker.is_armed());

        assert_eq!(tracker.release(105.0), ClickOutcome::Click);
        assert!(!tracker.is_armed());
    }

    #[test]
    fn test_release_without_press_is_click() {
        let mut tracker = GestureTracker::new();
        assert_eq!(tracker.release(500.0), ClickOutcome::Click);
    }

    #[test]
    fn test_second_press_rearms_origin() {
        let mut tracker = GestureTracker::new();
        tracker.press(0.0);
        tracker.press(120.0);
        assert_eq!(tracker.release(110.0), ClickOutcome::Click);
    }
}
