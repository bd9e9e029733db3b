//! Error types for spectrum computation.

use thiserror::Error;

/// Errors raised by spectrum computation and property verification.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// Empty or otherwise malformed signal.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// Elementwise comparison over sequences of different lengths.
    #[error("shape mismatch: expected length {expected}, got {got}")]
    ShapeMismatch {
        /// Length of the first operand.
        expected: usize,
        /// Length of the mismatching operand.
        got: usize,
    },
}
