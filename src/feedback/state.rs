//! Visual feedback state and the pure transition planner

use serde::{Deserialize, Serialize};

use super::snapshot::ScoreTimerSnapshot;

/// Transient visual state of the score/timer readout.
///
/// `celebration_active` and `celebration_pulse_active` always transition
/// together (one combined celebration mode). Urgency breathing is
/// independent and may be active concurrently with celebration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeedbackState {
    /// Flash emphasis on the readout
    pub celebration_active: bool,
    /// Scale pulse on the readout
    pub celebration_pulse_active: bool,
    /// Rhythmic emphasis while time is critically low and the game runs
    pub urgency_breathing_active: bool,
    /// Current half of the breathing cycle; restarts at the swell on entry
    pub breath_swelling: bool,
}

/// What a snapshot requires the controller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub trigger_celebration: bool,
    pub urgency: UrgencyChange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrgencyChange {
    Enter,
    Leave,
    Keep,
}

/// Pure transition planner: no timers, no side effects.
///
/// Urgency is evaluated against the snapshot's condition on every call, not
/// only on edges; celebration is score-driven and fires regardless of the
/// running flag.
pub fn plan(prev: &FeedbackState, snap: &ScoreTimerSnapshot) -> Plan {
    let urgency = match (prev.urgency_breathing_active, snap.is_urgent()) {
        (false, true) => UrgencyChange::Enter,
        (true, false) => UrgencyChange::Leave,
        _ => UrgencyChange::Keep,
    };
    Plan {
        trigger_celebration: snap.high_score_just_beaten,
        urgency,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(remaining: i64, running: bool, hs: bool) -> ScoreTimerSnapshot {
        ScoreTimerSnapshot {
            score: 10,
            remaining_secs: remaining,
            is_running: running,
            high_score_just_beaten: hs,
        }
    }

    #[test]
    fn test_urgency_enter_and_leave() {
        let idle = FeedbackState::default();
        assert_eq!(plan(&idle, &snap(5, true, false)).urgency, UrgencyChange::Enter);
        assert_eq!(plan(&idle, &snap(6, true, false)).urgency, UrgencyChange::Keep);

        let breathing = FeedbackState {
            urgency_breathing_active: true,
            ..Default::default()
        };
        assert_eq!(plan(&breathing, &snap(3, true, false)).urgency, UrgencyChange::Keep);
        assert_eq!(plan(&breathing, &snap(0, true, false)).urgency, UrgencyChange::Leave);
        assert_eq!(plan(&breathing, &snap(3, false, false)).urgency, UrgencyChange::Leave);
    }

    #[test]
    fn test_celebration_ignores_running_flag() {
        let idle = FeedbackState::default();
        assert!(plan(&idle, &snap(10, false, true)).trigger_celebration);
        assert!(!plan(&idle, &snap(10, false, false)).trigger_celebration);
    }
}
