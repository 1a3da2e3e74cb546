use crate::config::VadConfig;
use crate::energy::EnergyCalculator;
use crate::error::VadError;
use crate::state::VadStateMachine;
use crate::types::{VadEvent, VadMetrics, VadState};
use crate::VadProcessor;

/// Energy-based voice activity detector.
///
/// Feed it one frame of amplitude samples at a time; it classifies each
/// frame by RMS energy against a fixed threshold and smooths the result with
/// run-length hysteresis. One instance per audio stream; calls must be
/// serialized by the owner.
pub struct VoiceActivityDetector {
    config: VadConfig,
    energy_calc: EnergyCalculator,
    state_machine: VadStateMachine,
    metrics: VadMetrics,
}

impl VoiceActivityDetector {
    /// Build a detector from a validated configuration.
    pub fn new(config: VadConfig) -> Result<Self, VadError> {
        config.validate()?;

        Ok(Self {
            state_machine: VadStateMachine::new(&config),
            energy_calc: EnergyCalculator::new(),
            metrics: VadMetrics::default(),
            config,
        })
    }

    pub fn builder() -> VadBuilder {
        VadBuilder::new()
    }

    /// Process one frame and return the current voice decision.
    ///
    /// A frame is voiced iff its RMS strictly exceeds the threshold; a frame
    /// exactly at the threshold counts as unvoiced. The returned decision
    /// only changes after a full run of same-classification frames.
    pub fn process(&mut self, frame: &[f32]) -> Result<bool, VadError> {
        if frame.is_empty() {
            return Err(VadError::EmptyFrame);
        }

        let rms = self.energy_calc.calculate_rms(frame);
        let is_voice_frame = rms > self.config.threshold;

        let event = self.state_machine.process(is_voice_frame, rms);
        self.update_metrics(rms, is_voice_frame, event.as_ref());

        tracing::trace!(
            rms,
            dbfs = self.energy_calc.rms_to_dbfs(rms),
            voiced = is_voice_frame,
            voice_frames = self.state_machine.voice_frames(),
            silence_frames = self.state_machine.silence_frames(),
            "processed frame"
        );

        match event {
            Some(VadEvent::SpeechStart { frame_index, .. }) => {
                tracing::debug!(frame_index, rms, "speech started");
            }
            Some(VadEvent::SpeechEnd {
                frame_index,
                duration_frames,
                ..
            }) => {
                tracing::debug!(frame_index, duration_frames, rms, "speech ended");
            }
            None => {}
        }

        Ok(self.state_machine.is_active())
    }

    /// Return to the initial state. Configuration is untouched. Idempotent.
    pub fn reset(&mut self) {
        self.state_machine.reset();
        self.metrics = VadMetrics::default();
    }

    pub fn config(&self) -> &VadConfig {
        &self.config
    }

    pub fn metrics(&self) -> &VadMetrics {
        &self.metrics
    }

    /// The last-emitted decision, without processing anything.
    pub fn voice_detected(&self) -> bool {
        self.state_machine.is_active()
    }

    pub fn current_state(&self) -> VadState {
        self.state_machine.current_state()
    }

    /// Consecutive voiced frames in the current run.
    pub fn voice_frames(&self) -> u32 {
        self.state_machine.voice_frames()
    }

    /// Consecutive unvoiced frames in the current run.
    pub fn silence_frames(&self) -> u32 {
        self.state_machine.silence_frames()
    }

    fn update_metrics(&mut self, rms: f32, is_voice_frame: bool, event: Option<&VadEvent>) {
        self.metrics.frames_processed += 1;
        self.metrics.last_rms = rms;

        if is_voice_frame {
            self.metrics.voiced_frames += 1;
        } else {
            self.metrics.unvoiced_frames += 1;
        }

        if let Some(VadEvent::SpeechStart { .. }) = event {
            self.metrics.speech_segments += 1;
        }
    }
}

impl VadProcessor for VoiceActivityDetector {
    fn process(&mut self, frame: &[f32]) -> Result<bool, VadError> {
        VoiceActivityDetector::process(self, frame)
    }

    fn reset(&mut self) {
        VoiceActivityDetector::reset(self)
    }

    fn current_state(&self) -> VadState {
        VoiceActivityDetector::current_state(self)
    }
}

pub struct VadBuilder {
    config: VadConfig,
}

impl VadBuilder {
    pub fn new() -> Self {
        Self {
            config: VadConfig::default(),
        }
    }

    pub fn threshold(mut self, threshold: f32) -> Self {
        self.config.threshold = threshold;
        self
    }

    pub fn min_voice_frames(mut self, frames: u32) -> Self {
        self.config.min_voice_frames = frames;
        self
    }

    pub fn min_silence_frames(mut self, frames: u32) -> Self {
        self.config.min_silence_frames = frames;
        self
    }

    pub fn build(self) -> Result<VoiceActivityDetector, VadError> {
        VoiceActivityDetector::new(self.config)
    }
}

impl Default for VadBuilder {
    fn default() -> Self {
        Self::new()
    }
}
