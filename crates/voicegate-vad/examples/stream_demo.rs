//! Feeds a synthetic audio stream through the detector and reports the
//! speech segments it finds.
//!
//! Run with `RUST_LOG=trace` to watch per-frame classification.

use rand::Rng;
use voicegate_vad::{VadConfig, VoiceActivityDetector};

const FRAME_LEN: usize = 512;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "debug".to_string()))
        .init();

    let mut detector = VoiceActivityDetector::new(VadConfig::default())?;
    let mut rng = rand::thread_rng();

    println!("=== VoiceGate stream demo ===\n");
    println!("config: {:?}\n", detector.config());

    // Background noise, a speech burst, a short dropout inside the burst,
    // then trailing silence.
    let schedule: &[(&str, usize, f32)] = &[
        ("noise floor", 20, 0.0),
        ("speech burst", 15, 0.6),
        ("dropout", 3, 0.0),
        ("speech resumes", 10, 0.6),
        ("trailing silence", 20, 0.0),
    ];

    let mut frame_index = 0u64;
    let mut was_active = false;

    for &(label, frames, tone_amplitude) in schedule {
        for _ in 0..frames {
            let frame: Vec<f32> = (0..FRAME_LEN)
                .map(|i| {
                    let noise = rng.gen_range(-0.02..0.02);
                    let phase = 2.0 * std::f32::consts::PI * i as f32 / 64.0;
                    noise + phase.sin() * tone_amplitude
                })
                .collect();

            let active = detector.process(&frame)?;
            if active != was_active {
                let edge = if active { "START" } else { "END" };
                println!("frame {:3}  speech {}  ({})", frame_index, edge, label);
                was_active = active;
            }
            frame_index += 1;
        }
    }

    let metrics = detector.metrics();
    println!("\n--- Session report ---");
    println!("frames processed: {}", metrics.frames_processed);
    println!("voiced frames:    {}", metrics.voiced_frames);
    println!("unvoiced frames:  {}", metrics.unvoiced_frames);
    println!("speech segments:  {}", metrics.speech_segments);

    Ok(())
}
