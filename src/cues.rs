//! Sound and haptic collaborator boundary
//!
//! The feedback core never talks to an audio or haptics engine directly; it
//! emits cues the hosting surface forwards to a [`CueSink`]. Calls are
//! fire-and-forget: no return value, nothing observable propagates back to
//! the caller.

/// Sound cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// New high score beaten
    HighScore,
    /// Countdown entered the urgent range
    UrgentTick,
    /// Confetti burst fired
    BurstPop,
}

/// Receiver for sound/haptic cues. Implementations must never block.
pub trait CueSink {
    fn play_sound(&mut self, cue: SoundCue);
    /// Haptic pulse, intensity 0.0 - 1.0
    fn play_haptic(&mut self, intensity: f32);
}

/// Discards every cue. For headless hosts and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCues;

impl CueSink for NullCues {
    fn play_sound(&mut self, _cue: SoundCue) {}
    fn play_haptic(&mut self, _intensity: f32) {}
}

/// Logs cues instead of playing them. Used by the demo binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogCues;

impl CueSink for LogCues {
    fn play_sound(&mut self, cue: SoundCue) {
        log::info!("sound: {cue:?}");
    }

    fn play_haptic(&mut self, intensity: f32) {
        log::info!("haptic: {intensity:.2}");
    }
}
