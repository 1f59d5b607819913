//! Feedback controller: timers and transitions
//!
//! Owns every timer that drives the readout's animation states, so no
//! scheduled transition can outlive or leak past the controller. Side
//! effects (burst fire, sound, haptics) are emitted as one-way events the
//! host drains; the controller never reads the emitter back.

use crate::consts::{BREATHING_PERIOD_SECS, CELEBRATION_HOLD_SECS};
use crate::cues::SoundCue;
use crate::timer::{TimerId, TimerQueue};

use super::snapshot::ScoreTimerSnapshot;
use super::state::{self, FeedbackState, UrgencyChange};

/// Scheduled transitions owned by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FeedbackTimer {
    /// Auto-clear of the celebration flash/pulse
    CelebrationEnd,
    /// Half-cycle turn of the breathing oscillation
    BreathingBeat,
}

/// Fire-and-forget notifications for the hosting surface to drain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeedbackEvent {
    /// Fire the particle emitter across the readout
    FireBurst,
    Sound(SoundCue),
    /// Haptic pulse, intensity 0.0 - 1.0
    Haptic(f32),
}

/// Translates external snapshots into timed visual-state transitions.
pub struct FeedbackController {
    state: FeedbackState,
    timers: TimerQueue<FeedbackTimer>,
    celebration_hold: Option<TimerId>,
    breathing_beat: Option<TimerId>,
    events: Vec<FeedbackEvent>,
    last_snapshot: Option<ScoreTimerSnapshot>,
}

impl Default for FeedbackController {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackController {
    pub fn new() -> Self {
        Self {
            state: FeedbackState::default(),
            timers: TimerQueue::new(),
            celebration_hold: None,
            breathing_beat: None,
            events: Vec::new(),
            last_snapshot: None,
        }
    }

    /// Current visual state, read by the host on every redraw.
    pub fn state(&self) -> FeedbackState {
        self.state
    }

    /// Process one external state sample at time `now` (seconds).
    ///
    /// Repeated delivery of an identical snapshot is a no-op: no timer
    /// restarts, no duplicate events.
    pub fn on_snapshot(&mut self, snapshot: ScoreTimerSnapshot, now: f64) {
        let snapshot = snapshot.sanitized();
        if self.last_snapshot == Some(snapshot) {
            return;
        }
        self.last_snapshot = Some(snapshot);

        let plan = state::plan(&self.state, &snapshot);
        if plan.trigger_celebration {
            self.trigger_celebration(now);
        }
        match plan.urgency {
            UrgencyChange::Enter => self.enter_urgency(now),
            UrgencyChange::Leave => self.leave_urgency(),
            UrgencyChange::Keep => {}
        }
    }

    /// Fire timers due at or before `now`. Call from the host's update loop.
    pub fn poll(&mut self, now: f64) {
        for timer in self.timers.poll(now) {
            match timer {
                FeedbackTimer::CelebrationEnd => {
                    // Both flags clear together
                    self.state.celebration_active = false;
                    self.state.celebration_pulse_active = false;
                    self.celebration_hold = None;
                    log::debug!("celebration cleared");
                }
                FeedbackTimer::BreathingBeat => {
                    // Stale-fire guard
                    if self.state.urgency_breathing_active {
                        self.state.breath_swelling = !self.state.breath_swelling;
                        self.events.push(FeedbackEvent::Haptic(0.3));
                    }
                }
            }
        }
    }

    /// Take the pending one-way notifications, oldest first.
    pub fn drain_events(&mut self) -> Vec<FeedbackEvent> {
        std::mem::take(&mut self.events)
    }

    /// Teardown: cancel all pending timers and return to the idle state.
    /// No transition fires afterward.
    pub fn reset(&mut self) {
        self.timers.clear();
        self.celebration_hold = None;
        self.breathing_beat = None;
        self.state = FeedbackState::default();
        self.last_snapshot = None;
        self.events.clear();
    }

    /// Zero-delay onset; a re-trigger restarts the hold from now rather
    /// than stacking a second timer.
    fn trigger_celebration(&mut self, now: f64) {
        if let Some(id) = self.celebration_hold.take() {
            self.timers.cancel(id);
        }
        self.state.celebration_active = true;
        self.state.celebration_pulse_active = true;
        self.celebration_hold = Some(self.timers.schedule(
            now,
            CELEBRATION_HOLD_SECS,
            FeedbackTimer::CelebrationEnd,
        ));
        self.events.push(FeedbackEvent::FireBurst);
        self.events.push(FeedbackEvent::Sound(SoundCue::HighScore));
        self.events.push(FeedbackEvent::Haptic(1.0));
        log::debug!("celebration triggered");
    }

    fn enter_urgency(&mut self, now: f64) {
        if let Some(id) = self.breathing_beat.take() {
            self.timers.cancel(id);
        }
        self.state.urgency_breathing_active = true;
        // The oscillation always restarts from the swell phase
        self.state.breath_swelling = true;
        self.breathing_beat = Some(self.timers.schedule_repeating(
            now,
            BREATHING_PERIOD_SECS / 2.0,
            FeedbackTimer::BreathingBeat,
        ));
        self.events.push(FeedbackEvent::Sound(SoundCue::UrgentTick));
        log::debug!("urgency breathing on");
    }

    /// Immediate stop, no fade-out delay.
    fn leave_urgency(&mut self) {
        if let Some(id) = self.breathing_beat.take() {
            self.timers.cancel(id);
        }
        self.state.urgency_breathing_active = false;
        self.state.breath_swelling = false;
        log::debug!("urgency breathing off");
    }
}
