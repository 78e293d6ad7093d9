use serde::{Deserialize, Serialize};

/// Minimum vertical travel, in px, for a touch to count as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwipeDirection {
    Up,
    Down,
}

/// Tracks one touch gesture at a time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SwipeTracker {
    start_y: f64,
}

impl SwipeTracker {
    pub fn on_touch_start(&mut self, client_y: f64) {
        self.start_y = client_y;
    }

    /// Direction of travel when the gesture exceeds the threshold.
    pub fn on_touch_end(&mut self, client_y: f64) -> Option<SwipeDirection> {
        let diff = self.start_y - client_y;
        if diff.abs() <= SWIPE_THRESHOLD_PX {
            return None;
        }
        Some(if diff > 0.0 {
            SwipeDirection::Up
        } else {
            SwipeDirection::Down
        })
    }
}
