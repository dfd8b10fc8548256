//! Framed RMS energy envelope
//!
//! The loudness contour of a cry carries two of the classifier's cues: how
//! loud the cry is overall (mean RMS) and how much the loudness pulses
//! (standard deviation of RMS). A rhythmic "wah... wah..." cry has a high
//! RMS spread even when its average level is moderate.
//!
//! Algorithm:
//! 1. Divide audio into overlapping frames (frame_size, hop_size)
//! 2. Compute RMS energy per frame: sqrt(mean(x^2))
//! 3. Summarize with mean and population standard deviation

use crate::error::AnalysisError;
use crate::io::sample_buffer::{frame_count, frames};

/// Per-frame RMS energy with summary statistics
#[derive(Debug, Clone)]
pub struct EnergyEnvelope {
    /// RMS energy of each complete frame, in frame order
    pub frame_rms: Vec<f32>,

    /// Mean of `frame_rms`
    pub mean: f32,

    /// Population standard deviation of `frame_rms`
    pub std_dev: f32,
}

/// Compute the framed RMS energy envelope of a mono signal
///
/// # Arguments
///
/// * `samples` - Audio samples (mono, normalized to [-1.0, 1.0])
/// * `frame_size` - Frame size in samples (typically 2048)
/// * `hop_size` - Hop size between frames (typically 512)
///
/// # Returns
///
/// `EnergyEnvelope` with one RMS value per complete frame
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if `frame_size` or `hop_size` is
/// zero, or if the signal is shorter than one frame
pub fn rms_envelope(
    samples: &[f32],
    frame_size: usize,
    hop_size: usize,
) -> Result<EnergyEnvelope, AnalysisError> {
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

    let mut frame_rms = Vec::with_capacity(frame_count(samples.len(), frame_size, hop_size));

    for frame in frames(samples, frame_size, hop_size) {
        let sum_sq: f32 = frame.iter().map(|&x| x * x).sum();
        let rms = (sum_sq / frame.len() as f32).sqrt();
        frame_rms.push(rms);
    }

    let n = frame_rms.len() as f32;
    let mean = frame_rms.iter().sum::<f32>() / n;
    let variance = frame_rms.iter().map(|&r| (r - mean) * (r - mean)).sum::<f32>() / n;
    let std_dev = variance.sqrt();

    log::debug!(
        "Energy envelope: {} frames, mean RMS {:.4}, std dev {:.4}",
        frame_rms.len(),
        mean,
        std_dev
    );

    Ok(EnergyEnvelope {
        frame_rms,
        mean,
        std_dev,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Generate a sine wave at the given frequency and amplitude
    fn generate_sine(frequency: f32, amplitude: f32, duration_seconds: f32, sample_rate: f32) -> Vec<f32> {
        let num_samples = (duration_seconds * sample_rate) as usize;
        (0..num_samples)
            .map(|i| {
                let t = i as f32 / sample_rate;
                amplitude * (2.0 * std::f32::consts::PI * frequency * t).sin()
            })
            .collect()
    }

    #[test]
    fn test_sine_rms_matches_theory() {
        // RMS of a sine with amplitude A is A / sqrt(2)
        let samples = generate_sine(440.0, 0.5, 1.0, 22050.0);
        let envelope = rms_envelope(&samples, 2048, 512).unwrap();

        let expected = 0.5 / 2.0_f32.sqrt();
        assert!(
            (envelope.mean - expected).abs() < 0.01,
            "Sine RMS should be ~{:.4}, got {:.4}",
            expected,
            envelope.mean
        );
        // Steady tone: negligible frame-to-frame spread
        assert!(envelope.std_dev < 0.01);
    }

    #[test]
    fn test_constant_signal_has_zero_spread() {
        let samples = vec![0.5f32; 22050];
        let envelope = rms_envelope(&samples, 2048, 512).unwrap();

        assert!((envelope.mean - 0.5).abs() < 1e-4);
        assert!(envelope.std_dev < 1e-4);
    }

    #[test]
    fn test_pulsed_signal_has_high_spread() {
        // Alternate 0.25s of tone with 0.25s of silence
        let sample_rate = 22050.0;
        let burst = generate_sine(400.0, 0.4, 0.25, sample_rate);
        let gap = vec![0.0f32; burst.len()];

        let mut samples = Vec::new();
        for _ in 0..6 {
            samples.extend_from_slice(&burst);
            samples.extend_from_slice(&gap);
        }

        let envelope = rms_envelope(&samples, 2048, 512).unwrap();

        assert!(
            envelope.std_dev > 0.05,
            "Pulsed signal should have large RMS spread, got {:.4}",
            envelope.std_dev
        );
    }

    #[test]
    fn test_silence() {
        let samples = vec![0.0f32; 22050];
        let envelope = rms_envelope(&samples, 2048, 512).unwrap();
        assert_eq!(envelope.mean, 0.0);
        assert_eq!(envelope.std_dev, 0.0);
    }

    #[test]
    fn test_frame_count() {
        let samples = vec![0.1f32; 4096];
        let envelope = rms_envelope(&samples, 2048, 512).unwrap();
        // (4096 - 2048) / 512 + 1 = 5 complete frames
        assert_eq!(envelope.frame_rms.len(), 5);
    }

    #[test]
    fn test_too_short_audio_is_rejected() {
        let samples = vec![0.5f32; 1000];
        let result = rms_envelope(&samples, 2048, 512);
        assert!(matches!(result, Err(AnalysisError::InvalidInput(_))));
    }

    #[test]
    fn test_invalid_parameters() {
        let samples = vec![0.5f32; 4096];
        assert!(rms_envelope(&samples, 0, 512).is_err());
        assert!(rms_envelope(&samples, 2048, 0).is_err());
    }
}
