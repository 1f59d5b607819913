//! Tap Tally demo entry point
//!
//! Runs a scripted game session against the feedback core and logs every
//! visual transition. Pass a JSON script path as the first argument to
//! replay a custom session; otherwise a built-in one plays.

use serde::{Deserialize, Serialize};

use tap_tally::consts::UPDATE_DT;
use tap_tally::cues::{CueSink, LogCues, SoundCue};
use tap_tally::{FeedbackController, FeedbackEvent, ParticleBurstEmitter, ScoreTimerSnapshot, Settings};

/// Readout geometry the bursts span (view units)
const READOUT_X: f32 = 80.0;
const READOUT_WIDTH: f32 = 160.0;

/// Burst RNG seed for reproducible demo runs
const DEMO_SEED: u64 = 12345;

/// One scripted snapshot delivery
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ScriptEntry {
    /// Session time in seconds
    at: f64,
    snapshot: ScoreTimerSnapshot,
}

/// A 12-second round: score climbs, the countdown turns urgent, the high
/// score falls with 3 seconds left, time runs out.
fn built_in_script() -> Vec<ScriptEntry> {
    let mut entries = Vec::new();
    let mut score = 0u64;
    for tick in 0..=12i64 {
        let remaining = 12 - tick;
        score += (tick as u64) * 3;
        entries.push(ScriptEntry {
            at: tick as f64,
            snapshot: ScoreTimerSnapshot {
                score,
                remaining_secs: remaining,
                is_running: true,
                high_score_just_beaten: remaining == 3,
            },
        });
    }
    entries
}

fn load_script() -> Vec<ScriptEntry> {
    let Some(path) = std::env::args().nth(1) else {
        return built_in_script();
    };
    let parsed = std::fs::read_to_string(&path)
        .map_err(|e| e.to_string())
        .and_then(|json| serde_json::from_str(&json).map_err(|e| e.to_string()));
    match parsed {
        Ok(entries) => entries,
        Err(err) => {
            log::warn!("failed to load script {path}: {err}; using built-in session");
            built_in_script()
        }
    }
}

fn main() {
    env_logger::init();

    let settings = Settings::default();
    log::info!("quality preset: {}", settings.quality.as_str());

    let mut controller = FeedbackController::new();
    let mut emitter = ParticleBurstEmitter::with_capacity(DEMO_SEED, settings.max_particles());
    let mut cues = LogCues;

    let script = load_script();
    // Run past the last snapshot so the confetti drains
    let end = script.last().map(|e| e.at).unwrap_or(0.0) + 4.0;

    let mut now = 0.0f64;
    let mut next = 0usize;
    let mut last_state = controller.state();

    while now <= end {
        while next < script.len() && script[next].at <= now {
            controller.on_snapshot(script[next].snapshot, now);
            next += 1;
        }
        controller.poll(now);

        for event in controller.drain_events() {
            match event {
                FeedbackEvent::FireBurst => {
                    if settings.effective_burst() {
                        emitter.fire(READOUT_X, READOUT_WIDTH);
                        cues.play_sound(SoundCue::BurstPop);
                    }
                }
                FeedbackEvent::Sound(cue) => {
                    if settings.sfx {
                        cues.play_sound(cue);
                    }
                }
                FeedbackEvent::Haptic(intensity) => {
                    if settings.effective_haptics() {
                        cues.play_haptic(intensity);
                    }
                }
            }
        }

        emitter.update(UPDATE_DT as f32);

        let state = controller.state();
        if state != last_state {
            log::info!(
                "t={now:5.2} state={state:?} particles={}",
                emitter.live_count()
            );
            last_state = state;
        }

        now += UPDATE_DT;
    }

    log::info!("session complete; emitter idle: {}", emitter.is_idle());
}
