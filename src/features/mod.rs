//! Acoustic feature extraction
//!
//! Four features summarize a cry clip for the classifier: the RMS energy
//! envelope (loudness level and spread), the spectral centroid
//! (brightness), the zero-crossing rate (noisiness), and an optional
//! tempo estimate (cry rhythm in BPM).

pub mod energy;
pub mod spectral;
pub mod tempo;
pub mod zero_crossing;

pub use energy::{rms_envelope, EnergyEnvelope};
pub use spectral::{magnitude_spectrogram, spectral_centroid};
pub use tempo::{estimate_tempo, TempoEstimate};
pub use zero_crossing::zero_crossing_rate;
