//! Threshold decision tree for cry cause classification
//!
//! A fixed, hand-tuned rule cascade maps the four acoustic features to one
//! of five causes. Rules run in a strict priority order and the first match
//! wins, so the more specific cues (pain, hunger) shadow the broad ones:
//!
//! 1. Loud AND bright            -> Pain
//! 2. (rhythmic OR pulsing) AND audible -> Hunger
//! 3. Quiet                      -> Tired
//! 4. Noisy                      -> Discomfort
//! 5. Otherwise                  -> Attention-seeking
//!
//! Every comparison is strict (`>` or `<`). A feature sitting exactly on a
//! threshold does not satisfy that rule and falls through to the next one.

use crate::analysis::result::{CryCause, CryFeatures};

/// Decision thresholds for the cause classifier
///
/// The defaults are hand-picked constants from infant-cry literature, not
/// learned parameters. They assume un-normalized f32 samples in
/// [-1.0, 1.0]; rescaling the waveform invalidates the RMS comparisons.
#[derive(Debug, Clone, PartialEq)]
pub struct CauseThresholds {
    /// Loudness floor for the pain rule, linear RMS (default: 0.08)
    pub pain_rms: f32,

    /// Brightness floor for the pain rule, Hz (default: 2800.0)
    pub pain_centroid_hz: f32,

    /// Repetition-rate floor for the hunger rule, BPM (default: 110.0)
    pub hunger_tempo_bpm: f32,

    /// Energy-envelope spread floor for the hunger rule, linear RMS
    /// (default: 0.02)
    pub hunger_rms_std: f32,

    /// Loudness floor for the hunger rule, linear RMS (default: 0.04)
    pub hunger_rms: f32,

    /// Loudness ceiling for the tired rule, linear RMS (default: 0.03)
    pub tired_rms: f32,

    /// Noisiness floor for the discomfort rule, crossings per sample
    /// (default: 0.15)
    pub discomfort_zcr: f32,
}

impl Default for CauseThresholds {
    fn default() -> Self {
        Self {
            pain_rms: 0.08,
            pain_centroid_hz: 2800.0,
            hunger_tempo_bpm: 110.0,
            hunger_rms_std: 0.02,
            hunger_rms: 0.04,
            tired_rms: 0.03,
            discomfort_zcr: 0.15,
        }
    }
}

/// Classify a cry from its acoustic features
///
/// Rules are evaluated in priority order with strict comparisons; the first
/// match wins. A missing tempo estimate counts as 0 BPM, so the rhythm cue
/// simply fails for arrhythmic clips.
///
/// # Example
///
/// ```
/// use bawl_dsp::analysis::classifier::{classify, CauseThresholds};
/// use bawl_dsp::analysis::result::{CryCause, CryFeatures};
///
/// let features = CryFeatures {
///     rms_mean: 0.2,
///     rms_std: 0.01,
///     spectral_centroid_hz: 4000.0,
///     zero_crossing_rate: 0.3,
///     tempo: None,
/// };
/// assert_eq!(classify(&features, &CauseThresholds::default()), CryCause::Pain);
/// ```
pub fn classify(features: &CryFeatures, thresholds: &CauseThresholds) -> CryCause {
    let tempo_bpm = features.tempo_bpm().unwrap_or(0.0);

    let cause = if features.rms_mean > thresholds.pain_rms
        && features.spectral_centroid_hz > thresholds.pain_centroid_hz
    {
        CryCause::Pain
    } else if (tempo_bpm > thresholds.hunger_tempo_bpm
        || features.rms_std > thresholds.hunger_rms_std)
        && features.rms_mean > thresholds.hunger_rms
    {
        CryCause::Hunger
    } else if features.rms_mean < thresholds.tired_rms {
        CryCause::Tired
    } else if features.zero_crossing_rate > thresholds.discomfort_zcr {
        CryCause::Discomfort
    } else {
        CryCause::Attention
    };

    log::debug!(
        "Classified as {:?}: rms={:.4} (std {:.4}), centroid={:.0} Hz, zcr={:.3}, tempo={:.1} BPM",
        cause,
        features.rms_mean,
        features.rms_std,
        features.spectral_centroid_hz,
        features.zero_crossing_rate,
        tempo_bpm
    );

    cause
}
