use crate::config::VadConfig;
use crate::types::{VadEvent, VadState};

/// Run-length hysteresis over per-frame voice classifications.
///
/// Counters track the current run of same-classification frames: a voiced
/// frame increments `voice_frames` and zeroes `silence_frames`, an unvoiced
/// frame does the reverse. The emitted state only flips once a run reaches
/// its configured minimum, so at most one counter is nonzero at any time
/// (both are zero only before the first frame).
pub struct VadStateMachine {
    state: VadState,

    voice_frames: u32,

    silence_frames: u32,

    min_voice_frames: u32,

    min_silence_frames: u32,

    frames_processed: u64,

    speech_start_frame: u64,
}

impl VadStateMachine {
    pub fn new(config: &VadConfig) -> Self {
        Self {
            state: VadState::Silence,
            voice_frames: 0,
            silence_frames: 0,
            min_voice_frames: config.min_voice_frames,
            min_silence_frames: config.min_silence_frames,
            frames_processed: 0,
            speech_start_frame: 0,
        }
    }

    /// Advance by one classified frame. Returns an event only when the
    /// emitted decision flips.
    pub fn process(&mut self, is_voice_frame: bool, rms: f32) -> Option<VadEvent> {
        let frame_index = self.frames_processed;
        self.frames_processed += 1;

        if is_voice_frame {
            self.voice_frames = self.voice_frames.saturating_add(1);
            self.silence_frames = 0;

            if self.voice_frames >= self.min_voice_frames && self.state == VadState::Silence {
                self.state = VadState::Speech;
                self.speech_start_frame = frame_index;

                return Some(VadEvent::SpeechStart { frame_index, rms });
            }
        } else {
            self.silence_frames = self.silence_frames.saturating_add(1);
            self.voice_frames = 0;

            if self.silence_frames >= self.min_silence_frames && self.state == VadState::Speech {
                self.state = VadState::Silence;

                return Some(VadEvent::SpeechEnd {
                    frame_index,
                    duration_frames: frame_index - self.speech_start_frame,
                    rms,
                });
            }
        }

        None
    }

    pub fn current_state(&self) -> VadState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == VadState::Speech
    }

    pub fn voice_frames(&self) -> u32 {
        self.voice_frames
    }

    pub fn silence_frames(&self) -> u32 {
        self.silence_frames
    }

    pub fn frames_processed(&self) -> u64 {
        self.frames_processed
    }

    pub fn reset(&mut self) {
        self.state = VadState::Silence;
        self.voice_frames = 0;
        self.silence_frames = 0;
        self.frames_processed = 0;
        self.speech_start_frame = 0;
    }
}
