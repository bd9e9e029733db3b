//! Canonical test-signal generators.
//!
//! Each generator is a pure function of a borrowed [`TimeAxis`] and returns
//! one sample per axis point. Nothing here holds state; the same arguments
//! always produce the same signal.

use alloc::vec::Vec;
use core::f64::consts::PI;
use libm::sin;

use crate::error::SignalError;
use crate::time::TimeAxis;

/// Value a [`unit_step`] takes at exactly `t = 0`.
///
/// The tie-break is part of the signal definition, not a library accident:
/// a step sampled on an axis that contains `t = 0` differs at one sample
/// depending on this choice, which shifts its spectrum fixtures.
pub const STEP_AT_ZERO: f64 = 1.0;

/// Rectangular pulse of the given half width, centered on `t = 0`.
///
/// Sample `i` is 1 where `|t[i]| < half_width` and 0 elsewhere. The boundary
/// `|t[i]| == half_width` is excluded — the support is an open interval, so a
/// pulse of half width 0.2 on a 1 kHz axis over `[-1, 1)` contains exactly
/// 399 unit samples.
pub fn rectangular_pulse(t: &TimeAxis, half_width: f64) -> Vec<f64> {
    t.samples()
        .iter()
        .map(|&tv| if libm::fabs(tv) < half_width { 1.0 } else { 0.0 })
        .collect()
}

/// Heaviside unit step.
///
/// Sample `i` is 1 for `t[i] > 0`, 0 for `t[i] < 0`, and `at_zero` at exactly
/// `t[i] == 0`. Pass [`STEP_AT_ZERO`] for the pipeline's convention.
pub fn unit_step(t: &TimeAxis, at_zero: f64) -> Vec<f64> {
    t.samples()
        .iter()
        .map(|&tv| {
            if tv > 0.0 {
                1.0
            } else if tv < 0.0 {
                0.0
            } else {
                at_zero
            }
        })
        .collect()
}

/// Sine tone: `amplitude * sin(2π · freq_hz · t[i])`.
pub fn sinusoid(t: &TimeAxis, freq_hz: f64, amplitude: f64) -> Vec<f64> {
    t.samples()
        .iter()
        .map(|&tv| amplitude * sin(2.0 * PI * freq_hz * tv))
        .collect()
}

/// Elementwise sum of equal-length signals.
///
/// # Errors
///
/// Returns [`SignalError::InvalidInput`] for an empty signal list and
/// [`SignalError::ShapeMismatch`] when any input's length differs from the
/// first.
pub fn composite(signals: &[&[f64]]) -> Result<Vec<f64>, SignalError> {
    let Some(first) = signals.first() else {
        return Err(SignalError::InvalidInput("composite of no signals"));
    };
    let len = first.len();

    let mut sum: Vec<f64> = first.to_vec();
    for signal in &signals[1..] {
        if signal.len() != len {
            return Err(SignalError::ShapeMismatch {
                expected: len,
                got: signal.len(),
            });
        }
        for (acc, &x) in sum.iter_mut().zip(signal.iter()) {
            *acc += x;
        }
    }
    Ok(sum)
}
