//! Zero-crossing rate
//!
//! Counts how often the waveform changes sign within each frame. Noisy,
//! fricative-like cries (squirming, strained grunting) flip sign far more
//! often than tonal wailing, which makes ZCR a cheap proxy for "scratchy"
//! versus "sung" cry quality.

use crate::error::AnalysisError;
use crate::io::sample_buffer::frames;

/// Compute the mean per-frame zero-crossing rate
///
/// A crossing is counted whenever consecutive samples land on opposite sides
/// of zero (a sample equal to zero counts as non-negative). Each frame's
/// rate is the crossing count divided by the frame length, so values fall in
/// [0.0, 1.0]; the clip-level value is the mean over all complete frames.
///
/// # Arguments
///
/// * `samples` - Audio samples (mono, normalized to [-1.0, 1.0])
/// * `frame_size` - Frame size in samples (typically 2048)
/// * `hop_size` - Hop size between frames (typically 512)
///
/// # Returns
///
/// Mean zero-crossing rate in [0.0, 1.0]
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if `frame_size` or `hop_size` is
/// zero, or if the signal is shorter than one frame
pub fn zero_crossing_rate(
    samples: &[f32],
    frame_size: usize,
    hop_size: usize,
) -> Result<f32, AnalysisError> {
    if frame_size == 0 {
        return Err(AnalysisError::InvalidInput(
            "Frame size must be > 0".to_string(),
        ));
    }

    if hop_size == 0 {
        return Err(AnalysisError::InvalidInput(
            "Hop size must be > 0".to_string(),
        ));
    }

    if samples.len() < frame_size {
        return Err(AnalysisError::InvalidInput(format!(
            "Audio too short for analysis: {} samples, need at least {}",
            samples.len(),
            frame_size
        )));
    }

    let mut frame_rates = Vec::new();

    for frame in frames(samples, frame_size, hop_size) {
        let mut crossings = 0usize;
        for pair in frame.windows(2) {
            let prev_negative = pair[0] < 0.0;
            let curr_negative = pair[1] < 0.0;
            if prev_negative != curr_negative {
                crossings += 1;
            }
        }
        frame_rates.push(crossings as f32 / frame.len() as f32);
    }

    let mean_rate = frame_rates.iter().sum::<f32>() / frame_rates.len() as f32;

    log::debug!(
        "Zero-crossing rate: {} frames, mean {:.4}",
        frame_rates.len(),
        mean_rate
    );

    Ok(mean_rate)
}
