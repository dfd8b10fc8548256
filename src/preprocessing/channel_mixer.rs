//! Channel mixing utilities (multi-channel to mono conversion)
//!
//! The analysis pipeline is mono: every feature is defined on a single
//! waveform, so decoded multi-channel audio is mixed down before anything
//! else runs. Mixing averages each frame's channels, which preserves the
//! absolute amplitude scale the classifier thresholds depend on.

use crate::error::AnalysisError;

/// Mix interleaved multi-channel samples down to mono.
///
/// Each output sample is the average of one frame's channel values. Mono
/// input is passed through unchanged. A trailing incomplete frame (stream
/// truncation) is dropped with a warning.
///
/// # Arguments
///
/// * `samples` - Interleaved samples (frame-major: L R L R ... for stereo)
/// * `channels` - Number of channels in the interleaved stream
///
/// # Returns
///
/// Mono samples, one per input frame
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if `channels` is zero
pub fn downmix_interleaved(samples: &[f32], channels: usize) -> Result<Vec<f32>, AnalysisError> {
    if channels == 0 {
        return Err(AnalysisError::InvalidInput(
            "Channel count must be > 0".to_string(),
        ));
    }

    if channels == 1 {
        return Ok(samples.to_vec());
    }

    let remainder = samples.len() % channels;
    if remainder != 0 {
        log::warn!(
            "Interleaved stream length {} is not a multiple of {} channels, dropping {} trailing samples",
            samples.len(),
            channels,
            remainder
        );
    }

    let scale = 1.0 / channels as f32;
    let mono: Vec<f32> = samples
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f32>() * scale)
        .collect();

    log::debug!(
        "Downmixed {} interleaved samples ({} channels) to {} mono samples",
        samples.len(),
        channels,
        mono.len()
    );

    Ok(mono)
}
