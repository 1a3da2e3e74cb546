use serde::{Deserialize, Serialize};

/// Externally visible detector decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VadState {
    Silence,
    Speech,
}

/// Emitted by the state machine when the decision flips.
///
/// Events are frame-indexed rather than wall-clock-stamped: the detector has
/// no notion of sample rate, so converting indices to time is the caller's
/// business.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum VadEvent {
    SpeechStart {
        frame_index: u64,
        rms: f32,
    },
    SpeechEnd {
        frame_index: u64,
        duration_frames: u64,
        rms: f32,
    },
}

/// Running counters maintained by the detector facade.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VadMetrics {
    pub frames_processed: u64,
    pub voiced_frames: u64,
    pub unvoiced_frames: u64,
    pub speech_segments: u64,
    pub last_rms: f32,
}
