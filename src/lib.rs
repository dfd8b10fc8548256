//! # Bawl DSP
//!
//! An acoustic infant-cry analyzer. Give it a short recorded clip and it
//! extracts a handful of summary features, classifies the likely cause of
//! crying through a fixed decision tree, and pairs the result with a canned
//! caregiver action plan.
//!
//! ## Features
//!
//! - **Cause classification**: five causes (pain, hunger, tired, discomfort,
//!   attention-seeking) from four acoustic cues via hand-tuned thresholds
//! - **Feature extraction**: RMS energy envelope, spectral centroid,
//!   zero-crossing rate, and cry rhythm in BPM
//! - **Rhythm detection**: FFT-accelerated autocorrelation over a
//!   spectral-flux onset envelope
//! - **Advice selection**: fixed SOPs keyed by cause plus feed-time and
//!   diaper context
//!
//! ## Quick Start
//!
//! ```no_run
//! use bawl_dsp::{advise, analyze_cry, AnalysisConfig, CareContext};
//!
//! // Load audio samples (mono, f32, normalized)
//! let samples: Vec<f32> = vec![]; // Your audio data
//! let sample_rate = 22050;
//!
//! let analysis = analyze_cry(&samples, sample_rate, AnalysisConfig::default())?;
//! println!("{} ({})", analysis.cause.label(), analysis.urgency.color());
//!
//! let advice = advise(analysis.cause, &CareContext::default());
//! println!("{}", advice.to_markdown());
//! # Ok::<(), bawl_dsp::AnalysisError>(())
//! ```
//!
//! ## Architecture
//!
//! The analysis pipeline follows this flow:
//!
//! ```text
//! Audio File → Decode (mono) → Feature Extraction → Classification → Advice
//! ```
//!
//! Every stage is a pure function of its inputs; nothing is persisted
//! between invocations.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod features;
pub mod io;
pub mod preprocessing;

// Re-export main types
pub use analysis::advice::{advise, Advice, CareContext, DiaperState};
pub use analysis::result::{AnalysisMetadata, CryAnalysis, CryCause, CryFeatures, Urgency};
pub use config::AnalysisConfig;
pub use error::AnalysisError;
pub use io::{decode_file, DecodedClip};

/// Clips shorter than this get a reliability warning, in seconds
const MIN_CLIP_SECONDS: f32 = 3.0;

/// Mean RMS below this gets a near-silence warning
const NEAR_SILENCE_RMS: f32 = 0.005;

/// Main analysis function
///
/// Extracts the acoustic features of a cry clip and classifies the likely
/// cause. Advice selection is a separate step ([`advise`]) so callers
/// without caregiver context can still classify.
///
/// The samples are analyzed exactly as given. There is deliberately no
/// loudness normalization or silence trimming: the classifier thresholds
/// are absolute amplitude values, and rescaling the waveform would shift
/// every energy comparison.
///
/// # Arguments
///
/// * `samples` - Mono audio samples, normalized to [-1.0, 1.0]
/// * `sample_rate` - Sample rate in Hz (typically 22050 or 44100)
/// * `config` - Analysis configuration parameters
///
/// # Returns
///
/// `CryAnalysis` with the features, the classified cause, its urgency, and
/// metadata including clip-quality warnings
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` for empty audio, a zero sample
/// rate, or a clip shorter than one analysis frame
///
/// # Example
///
/// ```no_run
/// use bawl_dsp::{analyze_cry, AnalysisConfig};
///
/// let samples = vec![0.0f32; 22050 * 4]; // 4 seconds of silence
/// let analysis = analyze_cry(&samples, 22050, AnalysisConfig::default())?;
/// # Ok::<(), bawl_dsp::AnalysisError>(())
/// ```
pub fn analyze_cry(
    samples: &[f32],
    sample_rate: u32,
    config: AnalysisConfig,
) -> Result<CryAnalysis, AnalysisError> {
    use std::time::Instant;
    let start_time = Instant::now();

    log::debug!(
        "Starting cry analysis: {} samples at {} Hz",
        samples.len(),
        sample_rate
    );

    if samples.is_empty() {
        return Err(AnalysisError::InvalidInput(
            "Empty audio samples".to_string(),
        ));
    }

    if sample_rate == 0 {
        return Err(AnalysisError::InvalidInput("Invalid sample rate".to_string()));
    }

    let envelope = features::energy::rms_envelope(samples, config.frame_size, config.hop_size)?;
    let centroid = features::spectral::spectral_centroid(
        samples,
        sample_rate,
        config.frame_size,
        config.hop_size,
    )?;
    let zcr =
        features::zero_crossing::zero_crossing_rate(samples, config.frame_size, config.hop_size)?;
    let tempo = features::tempo::estimate_tempo(
        samples,
        sample_rate,
        config.frame_size,
        config.hop_size,
        config.min_bpm,
        config.max_bpm,
    )?;

    let features = CryFeatures {
        rms_mean: envelope.mean,
        rms_std: envelope.std_dev,
        spectral_centroid_hz: centroid,
        zero_crossing_rate: zcr,
        tempo,
    };

    let cause = analysis::classifier::classify(&features, &config.thresholds);

    let duration_seconds = samples.len() as f32 / sample_rate as f32;
    let mut warnings = Vec::new();
    if duration_seconds < MIN_CLIP_SECONDS {
        warnings.push(format!(
            "Clip is only {:.1} s long; record at least {:.0} seconds for a reliable read",
            duration_seconds, MIN_CLIP_SECONDS
        ));
    }
    if features.rms_mean < NEAR_SILENCE_RMS {
        warnings.push("Clip is nearly silent; the result may reflect background noise".to_string());
    }

    let processing_time_ms = start_time.elapsed().as_secs_f32() * 1000.0;

    log::debug!(
        "Analysis finished in {:.1} ms: {:?}",
        processing_time_ms,
        cause
    );

    Ok(CryAnalysis {
        features,
        cause,
        urgency: cause.urgency(),
        metadata: AnalysisMetadata {
            duration_seconds,
            sample_rate,
            processing_time_ms,
            algorithm_version: env!("CARGO_PKG_VERSION").to_string(),
            warnings,
        },
    })
}
