//! FFT-accelerated autocorrelation of the onset envelope
//!
//! A cry pulsing at a steady rate makes the onset envelope periodic, and
//! the autocorrelation function (ACF) peaks at the lag matching that
//! period. Computing `ACF = IFFT(|FFT(x)|^2)` brings the cost down to
//! O(n log n).
//!
//! Lag and BPM are related through the hop size:
//! `BPM = (60 * sample_rate) / (lag * hop_size)`

use rustfft::{num_complex::Complex, FftPlanner};

use crate::error::AnalysisError;

const EPSILON: f32 = 1e-10;

/// A candidate repetition rate extracted from the ACF
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BpmCandidate {
    /// Repetition rate in beats per minute
    pub bpm: f32,

    /// Peak strength relative to the ACF maximum, in [0.0, 1.0]
    pub confidence: f32,
}

/// Find periodicity candidates in an onset envelope
///
/// The envelope mean is subtracted before correlation so that a constant
/// offset does not masquerade as periodicity. Candidates are returned
/// sorted by confidence, strongest first; an aperiodic or too-short
/// envelope yields an empty list rather than an error.
///
/// # Arguments
///
/// * `envelope` - Onset envelope, one value per frame transition
/// * `sample_rate` - Sample rate of the source audio in Hz
/// * `hop_size` - Hop size used to build the envelope (samples per frame)
/// * `min_bpm` - Lower edge of the search range
/// * `max_bpm` - Upper edge of the search range
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if `sample_rate` or `hop_size` is
/// zero or the BPM range is inverted
pub fn bpm_candidates(
    envelope: &[f32],
    sample_rate: u32,
    hop_size: usize,
    min_bpm: f32,
    max_bpm: f32,
) -> Result<Vec<BpmCandidate>, AnalysisError> {
    if sample_rate == 0 {
        return Err(AnalysisError::InvalidInput(
            "Invalid sample rate: 0".to_string(),
        ));
    }

    if hop_size == 0 {
        return Err(AnalysisError::InvalidInput(
            "Invalid hop size: 0".to_string(),
        ));
    }

    if min_bpm <= 0.0 || max_bpm <= 0.0 || min_bpm >= max_bpm {
        return Err(AnalysisError::InvalidInput(format!(
            "Invalid BPM range: [{:.1}, {:.1}]",
            min_bpm, max_bpm
        )));
    }

    if envelope.len() < 2 {
        return Ok(Vec::new());
    }

    // Remove the DC component so a loud-but-steady envelope does not
    // correlate with itself at every lag.
    let mean = envelope.iter().sum::<f32>() / envelope.len() as f32;
    let centered: Vec<f32> = envelope.iter().map(|&v| v - mean).collect();

    if centered.iter().all(|&v| v.abs() < EPSILON) {
        log::debug!("Flat onset envelope, no periodicity candidates");
        return Ok(Vec::new());
    }

    let acf = autocorrelation_fft(&centered);

    // BPM = (60 * sample_rate) / (lag * hop_size), inverted for the lag window
    let lag_min = ((60.0 * sample_rate as f32) / (max_bpm * hop_size as f32)).ceil() as usize;
    let lag_max = ((60.0 * sample_rate as f32) / (min_bpm * hop_size as f32)).floor() as usize;

    if lag_min == 0 || lag_min >= lag_max || lag_max >= acf.len() {
        log::debug!(
            "Lag window [{}, {}] does not fit ACF of length {}",
            lag_min,
            lag_max,
            acf.len()
        );
        return Ok(Vec::new());
    }

    let max_acf = acf.iter().copied().fold(0.0f32, f32::max);
    if max_acf < EPSILON {
        return Ok(Vec::new());
    }

    let peaks = find_acf_peaks(&acf[lag_min..=lag_max], lag_min);

    let mut candidates: Vec<BpmCandidate> = peaks
        .into_iter()
        .map(|(lag, value)| BpmCandidate {
            bpm: (60.0 * sample_rate as f32) / (lag as f32 * hop_size as f32),
            confidence: (value / max_acf).min(1.0),
        })
        .filter(|c| c.bpm >= min_bpm && c.bpm <= max_bpm)
        .collect();

    candidates.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    log::debug!("Found {} periodicity candidates", candidates.len());

    Ok(candidates)
}

/// Compute autocorrelation via `ACF = IFFT(|FFT(x)|^2)`
///
/// Zero-pads to the next power of two at least twice the input length so
/// the circular correlation matches linear correlation over the lags we
/// read back.
fn autocorrelation_fft(signal: &[f32]) -> Vec<f32> {
    let n = signal.len();
    let fft_size = (2 * n).next_power_of_two();

    let mut buffer: Vec<Complex<f32>> = signal.iter().map(|&x| Complex::new(x, 0.0)).collect();
    buffer.resize(fft_size, Complex::new(0.0, 0.0));

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(fft_size);
    fft.process(&mut buffer);

    for x in &mut buffer {
        *x = *x * x.conj();
    }

    let ifft = planner.plan_fft_inverse(fft_size);
    ifft.process(&mut buffer);

    let scale = 1.0 / fft_size as f32;
    buffer[..n]
        .iter()
        .map(|x| (x.re * scale).max(0.0))
        .collect()
}

/// Local maxima in an ACF slice, as (absolute lag, value) pairs
///
/// A peak must rise above its left neighbor and not fall below its right
/// neighbor, which tolerates the flat tops that quantized envelopes
/// produce.
fn find_acf_peaks(acf_slice: &[f32], offset: usize) -> Vec<(usize, f32)> {
    if acf_slice.len() < 3 {
        return Vec::new();
    }

    let mut peaks = Vec::new();

    for i in 1..(acf_slice.len() - 1) {
        let value = acf_slice[i];
        if value > acf_slice[i - 1] && value >= acf_slice[i + 1] && value > EPSILON {
            peaks.push((i + offset, value));
        }
    }

    peaks
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Envelope pulsing every `period` points for `len` points total
    fn pulse_envelope(period: usize, len: usize) -> Vec<f32> {
        (0..len)
            .map(|i| if i % period == 0 { 1.0 } else { 0.0 })
            .collect()
    }

    #[test]
    fn test_pulse_train_recovers_bpm() {
        // Period of 21 envelope points at 22050 Hz / 512 hop:
        // BPM = 60 * 22050 / (21 * 512) ~= 123
        let envelope = pulse_envelope(21, 130);
        let candidates = bpm_candidates(&envelope, 22050, 512, 60.0, 240.0).unwrap();

        assert!(!candidates.is_empty());
        let best = &candidates[0];
        assert!(
            (best.bpm - 123.0).abs() < 7.0,
            "Expected ~123 BPM, got {:.1}",
            best.bpm
        );
        assert!(best.confidence > 0.0);
    }

    #[test]
    fn test_slow_pulse_train() {
        // Period of 40 points: 60 * 22050 / (40 * 512) ~= 64.6 BPM
        let envelope = pulse_envelope(40, 200);
        let candidates = bpm_candidates(&envelope, 22050, 512, 60.0, 240.0).unwrap();

        assert!(!candidates.is_empty());
        assert!(
            (candidates[0].bpm - 64.6).abs() < 4.0,
            "Expected ~64.6 BPM, got {:.1}",
            candidates[0].bpm
        );
    }

    #[test]
    fn test_flat_envelope_has_no_candidates() {
        let envelope = vec![0.5f32; 100];
        let candidates = bpm_candidates(&envelope, 22050, 512, 60.0, 240.0).unwrap();
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_zero_envelope_has_no_candidates() {
        let envelope = vec![0.0f32; 100];
        let candidates = bpm_candidates(&envelope, 22050, 512, 60.0, 240.0).unwrap();
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_short_envelope_has_no_candidates() {
        // Too few points for the lag window at 60 BPM
        let envelope = pulse_envelope(5, 20);
        let candidates = bpm_candidates(&envelope, 22050, 512, 60.0, 240.0).unwrap();
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_invalid_params() {
        let envelope = pulse_envelope(21, 130);

        assert!(bpm_candidates(&envelope, 0, 512, 60.0, 240.0).is_err());
        assert!(bpm_candidates(&envelope, 22050, 0, 60.0, 240.0).is_err());
        assert!(bpm_candidates(&envelope, 22050, 512, 240.0, 60.0).is_err());
    }

    #[test]
    fn test_autocorrelation_fft_self_similarity() {
        let signal = vec![1.0, -1.0, 1.0, -1.0, 1.0, -1.0];
        let acf = autocorrelation_fft(&signal);

        assert_eq!(acf.len(), signal.len());
        // Zero lag carries the full signal energy
        assert!(acf[0] >= acf[1]);
        // Period-2 alternation correlates again at lag 2
        assert!(acf[2] > acf[1]);
    }

    #[test]
    fn test_find_acf_peaks_plateau() {
        let acf = vec![0.1, 0.2, 0.5, 0.5, 0.3, 0.6, 0.2];
        let peaks = find_acf_peaks(&acf, 10);

        let lags: Vec<usize> = peaks.iter().map(|(lag, _)| *lag).collect();
        // Plateau at index 2 counts once, sharp peak at index 5 counts
        assert!(lags.contains(&12));
        assert!(lags.contains(&15));
        assert!(!lags.contains(&13));
    }
}
