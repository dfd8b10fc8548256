//! Error types for the cry analysis engine

use std::fmt;

/// Errors that can occur during cry analysis
#[derive(Debug, Clone)]
pub enum AnalysisError {
    /// Invalid input parameters
    InvalidInput(String),

    /// Audio decoding error
    DecodingError(String),

    /// Processing error during analysis
    ProcessingError(String),

    /// Numerical error (overflow, underflow, etc.)
    NumericalError(String),
}

impl AnalysisError {
    /// Generic caregiver-facing remediation hint.
    ///
    /// Every failure is surfaced to the user as a single message plus this
    /// fixed hint; there is no retry and no partial result.
    pub fn remediation(&self) -> &'static str {
        "Check that the microphone is allowed to record, capture at least 3 seconds of sound, and try again."
    }
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AnalysisError::DecodingError(msg) => write!(f, "Decoding error: {}", msg),
            AnalysisError::ProcessingError(msg) => write!(f, "Processing error: {}", msg),
            AnalysisError::NumericalError(msg) => write!(f, "Numerical error: {}", msg),
        }
    }
}

impl std::error::Error for AnalysisError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_detail() {
        let err = AnalysisError::DecodingError("unsupported codec".to_string());
        let msg = err.to_string();
        assert!(msg.contains("Decoding error"));
        assert!(msg.contains("unsupported codec"));
    }

    #[test]
    fn test_remediation_is_generic() {
        // The hint is intentionally identical across variants.
        let a = AnalysisError::InvalidInput("x".to_string());
        let b = AnalysisError::NumericalError("y".to_string());
        assert_eq!(a.remediation(), b.remediation());
    }
}
