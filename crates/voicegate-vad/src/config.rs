use serde::{Deserialize, Serialize};

use super::constants::{DEFAULT_MIN_SILENCE_FRAMES, DEFAULT_MIN_VOICE_FRAMES, DEFAULT_THRESHOLD};
use super::error::VadError;

/// Detector tuning. Immutable once a detector is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VadConfig {
    /// RMS level above which a frame counts as voiced (strict comparison).
    pub threshold: f32,
    /// Consecutive voiced frames required before voice is asserted.
    pub min_voice_frames: u32,
    /// Consecutive unvoiced frames required before voice is retracted.
    pub min_silence_frames: u32,
}

impl Default for VadConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            min_voice_frames: DEFAULT_MIN_VOICE_FRAMES,
            min_silence_frames: DEFAULT_MIN_SILENCE_FRAMES,
        }
    }
}

impl VadConfig {
    /// Rejects non-positive or non-finite values.
    pub fn validate(&self) -> Result<(), VadError> {
        if !self.threshold.is_finite() || self.threshold <= 0.0 {
            return Err(VadError::InvalidConfig {
                reason: format!(
                    "threshold must be a positive finite number, got {}",
                    self.threshold
                ),
            });
        }
        if self.min_voice_frames == 0 {
            return Err(VadError::InvalidConfig {
                reason: "min_voice_frames must be at least 1".to_string(),
            });
        }
        if self.min_silence_frames == 0 {
            return Err(VadError::InvalidConfig {
                reason: "min_silence_frames must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
