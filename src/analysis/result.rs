//! Analysis result types

use serde::{Deserialize, Serialize};

use crate::features::TempoEstimate;

/// Classified cause of a cry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CryCause {
    /// Loud, unusually high-pitched screaming
    Pain,
    /// Rhythmic, insistent crying
    Hunger,
    /// Low-energy whimpering
    Tired,
    /// Noisy, scratchy fussing
    Discomfort,
    /// Moderate crying with no stronger acoustic cue
    Attention,
}

impl CryCause {
    /// Human-readable label for display
    ///
    /// # Example
    ///
    /// ```
    /// use bawl_dsp::analysis::result::CryCause;
    ///
    /// assert_eq!(CryCause::Pain.label(), "Pain");
    /// assert_eq!(CryCause::Attention.label(), "Attention-seeking");
    /// ```
    pub fn label(&self) -> &'static str {
        match self {
            CryCause::Pain => "Pain",
            CryCause::Hunger => "Hunger",
            CryCause::Tired => "Tired",
            CryCause::Discomfort => "Discomfort",
            CryCause::Attention => "Attention-seeking",
        }
    }

    /// How quickly a caregiver should respond to this cause
    ///
    /// # Example
    ///
    /// ```
    /// use bawl_dsp::analysis::result::{CryCause, Urgency};
    ///
    /// assert_eq!(CryCause::Pain.urgency(), Urgency::Critical);
    /// assert_eq!(CryCause::Tired.urgency(), Urgency::Calm);
    /// ```
    pub fn urgency(&self) -> Urgency {
        match self {
            CryCause::Pain => Urgency::Critical,
            CryCause::Hunger => Urgency::Elevated,
            CryCause::Tired => Urgency::Calm,
            CryCause::Discomfort | CryCause::Attention => Urgency::Routine,
        }
    }
}

/// Response priority attached to a classified cause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Urgency {
    /// Check the baby now (pain indicators)
    Critical,
    /// Respond soon (hunger builds quickly)
    Elevated,
    /// Settle the environment, no rush
    Calm,
    /// Ordinary fussing, respond at leisure
    Routine,
}

impl Urgency {
    /// Banner color for display, matching the result card conventions
    ///
    /// # Example
    ///
    /// ```
    /// use bawl_dsp::analysis::result::Urgency;
    ///
    /// assert_eq!(Urgency::Critical.color(), "red");
    /// assert_eq!(Urgency::Routine.color(), "green");
    /// ```
    pub fn color(&self) -> &'static str {
        match self {
            Urgency::Critical => "red",
            Urgency::Elevated => "orange",
            Urgency::Calm => "blue",
            Urgency::Routine => "green",
        }
    }
}

/// Acoustic summary of a cry clip
///
/// These are the classifier's inputs: clip-level scalars computed over
/// 2048-sample frames with a 512-sample hop (by default).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CryFeatures {
    /// Mean frame RMS energy (loudness level)
    pub rms_mean: f32,

    /// Standard deviation of the frame RMS envelope (loudness pulsing)
    pub rms_std: f32,

    /// Mean spectral centroid in Hz (brightness)
    pub spectral_centroid_hz: f32,

    /// Mean zero-crossing rate in [0.0, 1.0] (noisiness)
    pub zero_crossing_rate: f32,

    /// Cry repetition rate, present only when the clip pulses rhythmically
    pub tempo: Option<TempoEstimate>,
}

impl CryFeatures {
    /// Repetition rate in BPM, if one was detected
    pub fn tempo_bpm(&self) -> Option<f32> {
        self.tempo.map(|t| t.bpm)
    }
}

/// Complete cry analysis result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CryAnalysis {
    /// Extracted acoustic features
    pub features: CryFeatures,

    /// Classified cause
    pub cause: CryCause,

    /// Response priority for the cause
    pub urgency: Urgency,

    /// Analysis metadata
    pub metadata: AnalysisMetadata,
}

/// Analysis metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    /// Audio duration in seconds
    pub duration_seconds: f32,

    /// Sample rate in Hz
    pub sample_rate: u32,

    /// Processing time in milliseconds
    pub processing_time_ms: f32,

    /// Algorithm version
    pub algorithm_version: String,

    /// Clip quality warnings (short clip, near-silence)
    pub warnings: Vec<String>,
}
