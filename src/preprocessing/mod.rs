//! Audio preprocessing modules
//!
//! The only preparation applied before feature extraction is channel
//! mixdown. Loudness normalization and silence trimming are deliberately
//! absent: the classifier compares absolute RMS levels against fixed
//! thresholds, and rescaling or trimming the waveform would shift every
//! energy comparison.

pub mod channel_mixer;
