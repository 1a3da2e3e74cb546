pub mod config;
pub mod constants;
pub mod detector;
pub mod energy;
pub mod error;
pub mod state;
pub mod types;

// Core exports - grouped and sorted alphabetically
pub use config::VadConfig;
pub use constants::{DEFAULT_MIN_SILENCE_FRAMES, DEFAULT_MIN_VOICE_FRAMES, DEFAULT_THRESHOLD};
pub use detector::{VadBuilder, VoiceActivityDetector};
pub use error::VadError;
pub use state::VadStateMachine;
pub use types::{VadEvent, VadMetrics, VadState};

/// Main VAD trait for processing audio frames
pub trait VadProcessor: Send {
    fn process(&mut self, frame: &[f32]) -> Result<bool, VadError>;
    fn reset(&mut self);
    fn current_state(&self) -> VadState;
}
