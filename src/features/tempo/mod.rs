//! Cry rhythm (tempo) estimation
//!
//! Estimates how fast a cry pulses, in beats per minute. Rhythmic,
//! insistent crying is one of the hunger cues, so the estimate feeds the
//! classifier alongside the energy spread.
//!
//! The estimate is deliberately optional: short clips, silence, and
//! steady wailing have no meaningful repetition rate, and reporting a
//! made-up number would be worse than reporting none.

pub mod autocorrelation;
pub mod onset_envelope;

pub use autocorrelation::{bpm_candidates, BpmCandidate};
pub use onset_envelope::onset_envelope;

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Estimated cry repetition rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TempoEstimate {
    /// Repetition rate in beats per minute
    pub bpm: f32,

    /// Strength of the periodicity, in [0.0, 1.0]
    pub confidence: f32,
}

/// Estimate the cry repetition rate in BPM
///
/// Computes a spectral-flux onset envelope, then searches its
/// autocorrelation for the strongest periodicity between `min_bpm` and
/// `max_bpm`.
///
/// # Arguments
///
/// * `samples` - Audio samples (mono, normalized to [-1.0, 1.0])
/// * `sample_rate` - Sample rate in Hz
/// * `frame_size` - Frame size in samples (typically 2048)
/// * `hop_size` - Hop size between frames (typically 512)
/// * `min_bpm` - Lower edge of the search range (typically 60)
/// * `max_bpm` - Upper edge of the search range (typically 240)
///
/// # Returns
///
/// `Some(TempoEstimate)` for a periodic cry, `None` when the clip is too
/// short, silent, or has no repetition in range
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` on bad parameters or audio shorter
/// than one frame
pub fn estimate_tempo(
    samples: &[f32],
    sample_rate: u32,
    frame_size: usize,
    hop_size: usize,
    min_bpm: f32,
    max_bpm: f32,
) -> Result<Option<TempoEstimate>, AnalysisError> {
    let envelope = onset_envelope(samples, frame_size, hop_size)?;

    let candidates = bpm_candidates(&envelope, sample_rate, hop_size, min_bpm, max_bpm)?;

    match candidates.first() {
        Some(best) => {
            log::debug!(
                "Tempo estimate: {:.1} BPM (confidence {:.2})",
                best.bpm,
                best.confidence
            );
            Ok(Some(TempoEstimate {
                bpm: best.bpm,
                confidence: best.confidence,
            }))
        }
        None => {
            log::debug!("No tempo detected");
            Ok(None)
        }
    }
}
