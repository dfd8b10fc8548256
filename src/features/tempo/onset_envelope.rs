//! Spectral flux onset envelope
//!
//! Rhythmic cries ("wah... wah... wah") pulse at a steady rate. The onset
//! envelope turns the audio into one value per frame measuring how much new
//! spectral energy appeared since the previous frame, which is the signal
//! the autocorrelation stage searches for periodicity.
//!
//! Algorithm:
//! 1. Compute the Hann-windowed magnitude spectrogram
//! 2. Half-wave rectified flux: flux[n] = sum_k max(0, |X_k[n]| - |X_k[n-1]|)
//! 3. Scale the envelope into [0, 1] by its maximum, unless the flux never
//!    rises above the spectral noise floor

use crate::error::AnalysisError;
use crate::features::spectral::magnitude_spectrogram;

/// Numerical stability epsilon
const EPSILON: f32 = 1e-10;

/// Smallest peak flux, as a fraction of the mean frame magnitude, that counts
/// as onset activity. A steady spectrum still shows flux around 1e-5 of the
/// frame magnitude from FFT roundoff, so the floor sits well above that.
const FLUX_NOISE_FLOOR: f32 = 1e-3;

/// Compute the half-wave rectified spectral flux envelope
///
/// Returns one flux value per frame transition, so a spectrogram with `n`
/// frames yields `n - 1` envelope points. A clip with fewer than two
/// complete frames yields an empty envelope. The envelope is scaled into
/// [0, 1] by its maximum; a silent or steady clip, whose flux never clears
/// the spectral noise floor, stays all zeros.
///
/// # Arguments
///
/// * `samples` - Audio samples (mono, normalized to [-1.0, 1.0])
/// * `frame_size` - Frame size in samples (typically 2048)
/// * `hop_size` - Hop size between frames (typically 512)
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` on bad parameters or audio shorter
/// than one frame
pub fn onset_envelope(
    samples: &[f32],
    frame_size: usize,
    hop_size: usize,
) -> Result<Vec<f32>, AnalysisError> {
    let spectrogram = magnitude_spectrogram(samples, frame_size, hop_size)?;

    if spectrogram.len() < 2 {
        log::debug!("Fewer than two frames, onset envelope is empty");
        return Ok(Vec::new());
    }

    let mut envelope = Vec::with_capacity(spectrogram.len() - 1);

    for pair in spectrogram.windows(2) {
        let flux: f32 = pair[1]
            .iter()
            .zip(pair[0].iter())
            .map(|(&curr, &prev)| (curr - prev).max(0.0))
            .sum();
        envelope.push(flux);
    }

    // The floor is relative to the spectral magnitude scale: absolute flux
    // from roundoff grows with signal level, so an absolute epsilon cannot
    // separate a loud steady tone from a real onset train.
    let mean_magnitude = spectrogram
        .iter()
        .map(|frame| frame.iter().sum::<f32>())
        .sum::<f32>()
        / spectrogram.len() as f32;
    let noise_floor = (mean_magnitude * FLUX_NOISE_FLOOR).max(EPSILON);

    let max_flux = envelope.iter().copied().fold(0.0f32, f32::max);
    if max_flux < noise_floor {
        log::debug!(
            "Max flux {:.6} under noise floor {:.6}, envelope is flat",
            max_flux,
            noise_floor
        );
        return Ok(vec![0.0; envelope.len()]);
    }

    for value in &mut envelope {
        *value /= max_flux;
    }

    log::debug!(
        "Onset envelope: {} points, max flux {:.6}",
        envelope.len(),
        max_flux
    );

    Ok(envelope)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate_burst_train(
        burst_hz: f32,
        tone_hz: f32,
        duration_seconds: f32,
        sample_rate: f32,
    ) -> Vec<f32> {
        let num_samples = (duration_seconds * sample_rate) as usize;
        let burst_period = (sample_rate / burst_hz) as usize;
        let burst_len = burst_period / 2;

        (0..num_samples)
            .map(|i| {
                if i % burst_period < burst_len {
                    let t = i as f32 / sample_rate;
                    0.4 * (2.0 * std::f32::consts::PI * tone_hz * t).sin()
                } else {
                    0.0
                }
            })
            .collect()
    }

    #[test]
    fn test_envelope_length() {
        let samples = vec![0.1f32; 4096];
        let envelope = onset_envelope(&samples, 2048, 512).unwrap();
        // 5 spectrogram frames -> 4 flux points
        assert_eq!(envelope.len(), 4);
    }

    #[test]
    fn test_silence_yields_flat_envelope() {
        let samples = vec![0.0f32; 22050];
        let envelope = onset_envelope(&samples, 2048, 512).unwrap();
        assert!(envelope.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_steady_tone_yields_flat_envelope() {
        // A constant spectrum has no onsets; its roundoff-level flux must
        // stay under the noise floor instead of being scaled to full range.
        let sample_rate = 22050.0;
        let samples: Vec<f32> = (0..44100)
            .map(|i| {
                let t = i as f32 / sample_rate;
                0.3 * (2.0 * std::f32::consts::PI * 500.0 * t).sin()
            })
            .collect();

        let envelope = onset_envelope(&samples, 2048, 512).unwrap();
        assert!(!envelope.is_empty());
        assert!(envelope.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_envelope_is_normalized() {
        let samples = generate_burst_train(2.0, 400.0, 3.0, 22050.0);
        let envelope = onset_envelope(&samples, 2048, 512).unwrap();

        let max = envelope.iter().copied().fold(0.0f32, f32::max);
        assert!((max - 1.0).abs() < 1e-6);
        assert!(envelope.iter().all(|&v| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn test_bursts_produce_peaks() {
        // 2 bursts per second for 3 seconds: expect several distinct flux peaks
        let samples = generate_burst_train(2.0, 400.0, 3.0, 22050.0);
        let envelope = onset_envelope(&samples, 2048, 512).unwrap();

        let strong = envelope.iter().filter(|&&v| v > 0.5).count();
        assert!(
            strong >= 3,
            "Expected several strong onsets, got {} points above 0.5",
            strong
        );
    }

    #[test]
    fn test_single_frame_yields_empty_envelope() {
        let samples = vec![0.1f32; 2048];
        let envelope = onset_envelope(&samples, 2048, 512).unwrap();
        assert!(envelope.is_empty());
    }
}
