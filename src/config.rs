//! Configuration parameters for cry analysis

use crate::analysis::classifier::CauseThresholds;

/// Analysis configuration parameters
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    // Framing
    /// Frame size in samples for all framed features and the STFT (default: 2048)
    pub frame_size: usize,

    /// Hop size in samples between frames (default: 512)
    pub hop_size: usize,

    // Tempo estimation
    /// Minimum tempo to consider in BPM (default: 60.0)
    pub min_bpm: f32,

    /// Maximum tempo to consider in BPM (default: 240.0)
    pub max_bpm: f32,

    // Classification
    /// Decision-tree thresholds (literature-derived constants, not learned)
    pub thresholds: CauseThresholds,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            frame_size: 2048,
            hop_size: 512,
            min_bpm: 60.0,
            max_bpm: 240.0,
            thresholds: CauseThresholds::default(),
        }
    }
}
