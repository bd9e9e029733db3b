//! Error types for filter design and application.

use thiserror::Error;

/// Errors raised by filter design and application.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FilterError {
    /// Filter parameters outside their valid domain.
    #[error("invalid filter spec: {reason}")]
    InvalidSpec {
        /// Which constraint was violated.
        reason: &'static str,
    },

    /// Empty or otherwise unusable signal or coefficient input.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// The filter diverged during application.
    #[error("unstable filter: {0}")]
    Unstable(&'static str),
}

impl FilterError {
    /// Shorthand for an [`FilterError::InvalidSpec`].
    pub fn spec(reason: &'static str) -> Self {
        FilterError::InvalidSpec { reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats() {
        assert_eq!(
            FilterError::spec("cutoff out of range").to_string(),
            "invalid filter spec: cutoff out of range"
        );
        assert_eq!(
            FilterError::Unstable("output diverged").to_string(),
            "unstable filter: output diverged"
        );
    }
}
