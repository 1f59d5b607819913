//! External state sample delivered to the feedback controller

use serde::{Deserialize, Serialize};

use crate::consts::URGENT_THRESHOLD_SECS;

/// One immutable sample of the hosting surface's game state.
///
/// Delivered on every score change, every countdown tick (1 Hz while
/// running), and every run/pause toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTimerSnapshot {
    pub score: u64,
    /// Seconds left on the countdown. Negative values are clamped to 0.
    pub remaining_secs: i64,
    pub is_running: bool,
    /// Edge-triggered: true only on the sample where the record is broken.
    /// The caller is responsible for resetting it afterward.
    pub high_score_just_beaten: bool,
}

impl ScoreTimerSnapshot {
    pub fn new(score: u64, remaining_secs: i64, is_running: bool) -> Self {
        Self {
            score,
            remaining_secs,
            is_running,
            high_score_just_beaten: false,
        }
    }

    /// Clamp out-of-range fields instead of failing.
    pub fn sanitized(mut self) -> Self {
        if self.remaining_secs < 0 {
            self.remaining_secs = 0;
        }
        self
    }

    /// True while the countdown is critically low and the game is running.
    /// Zero remaining is not urgent.
    pub fn is_urgent(&self) -> bool {
        self.is_running && self.remaining_secs > 0 && self.remaining_secs <= URGENT_THRESHOLD_SECS
    }
}
