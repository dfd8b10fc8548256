//! Cry classification and caregiver advice
//!
//! Turns the extracted features into one of five causes via a fixed
//! threshold cascade, then pairs the cause with a canned action plan
//! selected by caregiver context.

pub mod advice;
pub mod classifier;
pub mod result;

pub use advice::{advise, Advice, CareContext, DiaperState};
pub use classifier::{classify, CauseThresholds};
pub use result::{AnalysisMetadata, CryAnalysis, CryCause, CryFeatures, Urgency};
