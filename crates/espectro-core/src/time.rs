//! Uniformly sampled time axis.

use alloc::vec::Vec;

use crate::error::SignalError;

/// An ordered, uniformly spaced sequence of sample times.
///
/// Samples cover the half-open interval `[start, end)` at `t[i] = start + i/fs`,
/// so `TimeAxis::new(-1.0, 1.0, 1000.0)` yields 2000 points and never includes
/// the right endpoint. The axis is immutable once constructed; generators and
/// analyzers borrow it read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeAxis {
    samples: Vec<f64>,
    sample_rate: f64,
}

impl TimeAxis {
    /// Build a time axis over `[start, end)` sampled at `sample_rate` Hz.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::InvalidInput`] when `sample_rate` is not a
    /// positive finite number, when the interval is empty or reversed, or
    /// when the bounds are not finite.
    pub fn new(start: f64, end: f64, sample_rate: f64) -> Result<Self, SignalError> {
        if !sample_rate.is_finite() || sample_rate <= 0.0 {
            return Err(SignalError::InvalidInput(
                "sample rate must be positive and finite",
            ));
        }
        if !start.is_finite() || !end.is_finite() {
            return Err(SignalError::InvalidInput("time bounds must be finite"));
        }
        if start >= end {
            return Err(SignalError::InvalidInput(
                "time interval must satisfy start < end",
            ));
        }

        // Point count per the half-open convention: ceil((end - start) * fs).
        // Each sample is start + i/fs rather than an accumulated sum, so the
        // spacing never drifts.
        let n = libm::ceil((end - start) * sample_rate) as usize;
        let samples = (0..n).map(|i| start + i as f64 / sample_rate).collect();

        Ok(Self {
            samples,
            sample_rate,
        })
    }

    /// Number of samples on the axis.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the axis holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Spacing between consecutive samples, `1/fs`.
    pub fn step(&self) -> f64 {
        1.0 / self.sample_rate
    }

    /// The sample times.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }
}
