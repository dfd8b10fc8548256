//! STFT magnitude spectrogram and spectral centroid
//!
//! The centroid is the magnitude-weighted mean frequency of a spectrum, a
//! standard proxy for perceived brightness. Pain cries sit noticeably
//! higher in the spectrum than fussing, which is what the classifier's
//! brightness cue keys on.
//!
//! Algorithm:
//! 1. Divide audio into overlapping frames (frame_size, hop_size)
//! 2. Apply a Hann window and FFT each frame
//! 3. Keep magnitudes for the non-negative frequency bins (0..=N/2)
//! 4. Centroid per frame: sum(f_k * |X_k|) / sum(|X_k|)
//! 5. Average the per-frame centroids over the clip

use rustfft::{num_complex::Complex, FftPlanner};

use crate::error::AnalysisError;
use crate::io::sample_buffer::{frame_count, frames};

/// Numerical stability epsilon
const EPSILON: f32 = 1e-10;

/// Compute a magnitude spectrogram with a Hann window
///
/// Each row holds the magnitudes of the non-negative frequency bins
/// (`frame_size / 2 + 1` of them) for one analysis frame. Bin `k` is
/// centered on `k * sample_rate / frame_size` Hz.
///
/// # Arguments
///
/// * `samples` - Audio samples (mono, normalized to [-1.0, 1.0])
/// * `frame_size` - Frame size in samples (typically 2048)
/// * `hop_size` - Hop size between frames (typically 512)
///
/// # Returns
///
/// One magnitude row per complete frame
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if `frame_size` or `hop_size` is
/// zero, or if the signal is shorter than one frame
pub fn magnitude_spectrogram(
    samples: &[f32],
    frame_size: usize,
    hop_size: usize,
) -> Result<Vec<Vec<f32>>, AnalysisError> {
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

    // Hann window: w[i] = 0.5 * (1 - cos(2*pi*i / (N-1)))
    let window: Vec<f32> = (0..frame_size)
        .map(|i| {
            0.5 * (1.0
                - (2.0 * std::f32::consts::PI * i as f32 / (frame_size - 1) as f32).cos())
        })
        .collect();

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(frame_size);

    let num_bins = frame_size / 2 + 1;
    let mut spectrogram = Vec::with_capacity(frame_count(samples.len(), frame_size, hop_size));
    let mut buffer: Vec<Complex<f32>> = vec![Complex::new(0.0, 0.0); frame_size];

    for frame in frames(samples, frame_size, hop_size) {
        for (i, (&sample, &w)) in frame.iter().zip(window.iter()).enumerate() {
            buffer[i] = Complex::new(sample * w, 0.0);
        }

        fft.process(&mut buffer);

        let magnitudes: Vec<f32> = buffer[..num_bins].iter().map(|c| c.norm()).collect();
        spectrogram.push(magnitudes);
    }

    log::debug!(
        "Spectrogram: {} frames x {} bins",
        spectrogram.len(),
        num_bins
    );

    Ok(spectrogram)
}

/// Compute the clip-level spectral centroid in Hz
///
/// Per-frame centroids are averaged over the clip. Frames with negligible
/// total magnitude contribute 0 Hz rather than dividing by zero, so silence
/// pulls the clip centroid toward zero instead of poisoning it with NaN.
///
/// # Arguments
///
/// * `samples` - Audio samples (mono, normalized to [-1.0, 1.0])
/// * `sample_rate` - Sample rate in Hz
/// * `frame_size` - Frame size in samples (typically 2048)
/// * `hop_size` - Hop size between frames (typically 512)
///
/// # Returns
///
/// Mean spectral centroid in Hz, in [0.0, sample_rate / 2]
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` on bad parameters or audio shorter
/// than one frame
pub fn spectral_centroid(
    samples: &[f32],
    sample_rate: u32,
    frame_size: usize,
    hop_size: usize,
) -> Result<f32, AnalysisError> {
    if sample_rate == 0 {
        return Err(AnalysisError::InvalidInput(
            "Sample rate must be > 0".to_string(),
        ));
    }

    let spectrogram = magnitude_spectrogram(samples, frame_size, hop_size)?;

    let bin_hz = sample_rate as f32 / frame_size as f32;
    let mut frame_centroids = Vec::with_capacity(spectrogram.len());

    for magnitudes in &spectrogram {
        let total: f32 = magnitudes.iter().sum();
        if total < EPSILON {
            frame_centroids.push(0.0);
            continue;
        }

        let weighted: f32 = magnitudes
            .iter()
            .enumerate()
            .map(|(k, &mag)| k as f32 * bin_hz * mag)
            .sum();
        frame_centroids.push(weighted / total);
    }

    let centroid = frame_centroids.iter().sum::<f32>() / frame_centroids.len() as f32;

    log::debug!("Spectral centroid: {:.1} Hz", centroid);

    Ok(centroid)
}
