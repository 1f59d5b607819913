//! Feedback preferences
//!
//! Owned by the hosting app; read here to gate decorative output. The state
//! machine itself always runs so the readout stays correct.

use serde::{Deserialize, Serialize};

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    /// Maximum live burst particles for this preset
    pub fn max_particles(&self) -> usize {
        match self {
            QualityPreset::Low => 128,
            QualityPreset::Medium => 512,
            QualityPreset::High => 2048,
        }
    }
}

/// Feedback settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,
    /// Confetti burst on new high scores
    pub particles: bool,
    /// Sound cues
    pub sfx: bool,
    /// Haptic cues
    pub haptics: bool,
    /// Reduced motion (suppress burst and breathing beat pulses)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            particles: true,
            sfx: true,
            haptics: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Effective burst toggle (respects reduced_motion)
    pub fn effective_burst(&self) -> bool {
        self.particles && !self.reduced_motion
    }

    /// Effective haptics toggle (respects reduced_motion)
    pub fn effective_haptics(&self) -> bool {
        self.haptics && !self.reduced_motion
    }

    /// Effective particle count cap
    pub fn max_particles(&self) -> usize {
        if !self.particles {
            0
        } else {
            self.quality.max_particles()
        }
    }
}
