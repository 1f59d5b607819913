//! Tap Tally - feedback core for a casual timed scoring game
//!
//! Core modules:
//! - `feedback`: Snapshot-driven visual state machine (celebration, urgency)
//! - `burst`: One-shot confetti particle emitter
//! - `timer`: Deterministic cancellable timer scheduling
//! - `cues`: Sound/haptic collaborator boundary
//! - `settings`: Visual-effect preferences

pub mod burst;
pub mod cues;
pub mod feedback;
pub mod settings;
pub mod timer;

pub use burst::ParticleBurstEmitter;
pub use feedback::{FeedbackController, FeedbackEvent, FeedbackState, ScoreTimerSnapshot};
pub use settings::{QualityPreset, Settings};

/// Feedback tuning constants
pub mod consts {
    /// Fixed update timestep for the demo host loop (60 Hz)
    pub const UPDATE_DT: f64 = 1.0 / 60.0;
    /// Maximum catch-up steps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Celebration hold before the flash/pulse auto-clears (seconds)
    pub const CELEBRATION_HOLD_SECS: f64 = 0.6;
    /// Full back-and-forth period of the urgency breathing cycle (seconds)
    pub const BREATHING_PERIOD_SECS: f64 = 1.2;
    /// Remaining seconds at or below which the countdown is urgent (0 is not)
    pub const URGENT_THRESHOLD_SECS: i64 = 5;

    /// Duration of a burst's emission window (seconds)
    pub const EMISSION_WINDOW_SECS: f32 = 0.7;
    /// Lifetime of every particle (seconds)
    pub const PARTICLE_LIFETIME_SECS: f32 = 3.0;
    /// Alpha lost per second of particle age
    pub const PARTICLE_FADE_RATE: f32 = 0.35;
    /// Half-width of the emission cone around straight-down (radians)
    pub const EMISSION_CONE_HALF_WIDTH: f32 = std::f32::consts::FRAC_PI_4;
}
