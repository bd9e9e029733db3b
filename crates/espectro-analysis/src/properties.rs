//! Empirical verification of Fourier-transform identities.
//!
//! Each check transforms a signal algebraically, routes both versions
//! through the centered-spectrum computation, and reports how far the
//! measured spectra deviate from what the identity predicts. A report is
//! informational: a failed check flags numerically surprising input, it is
//! not a precondition for further processing.

use std::f64::consts::PI;

use rustfft::num_complex::Complex;

use crate::error::AnalysisError;
use crate::spectrum::{Spectrum, compute_spectrum};
use espectro_core::{TimeAxis, sinusoid};

/// Outcome of one property check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyReport {
    /// Whether the deviation stayed within the tolerance.
    pub passed: bool,
    /// The measured deviation (normalized magnitude for linearity and
    /// shift, Hz for scaling).
    pub deviation: f64,
}

impl PropertyReport {
    fn from_deviation(deviation: f64, tolerance: f64) -> Self {
        Self {
            passed: deviation <= tolerance,
            deviation,
        }
    }
}

fn peak_magnitude(spectrum: &Spectrum) -> f64 {
    spectrum
        .coefficients
        .iter()
        .map(|c| c.norm())
        .fold(0.0, f64::max)
}

/// Linearity: `spectrum(x + y) ≈ spectrum(x) + spectrum(y)` elementwise.
///
/// The deviation is the largest elementwise difference normalized by the
/// peak magnitude of `spectrum(x + y)`.
///
/// # Errors
///
/// [`AnalysisError::ShapeMismatch`] when the signals differ in length;
/// [`AnalysisError::InvalidInput`] propagated from the spectrum computation.
pub fn verify_linearity(
    x: &[f64],
    y: &[f64],
    sample_rate: f64,
    tolerance: f64,
) -> Result<PropertyReport, AnalysisError> {
    if x.len() != y.len() {
        return Err(AnalysisError::ShapeMismatch {
            expected: x.len(),
            got: y.len(),
        });
    }

    let sum: Vec<f64> = x.iter().zip(y.iter()).map(|(&a, &b)| a + b).collect();
    let s_sum = compute_spectrum(&sum, sample_rate)?;
    let s_x = compute_spectrum(x, sample_rate)?;
    let s_y = compute_spectrum(y, sample_rate)?;

    let scale = peak_magnitude(&s_sum).max(f64::MIN_POSITIVE);
    let deviation = s_sum
        .coefficients
        .iter()
        .zip(s_x.coefficients.iter().zip(s_y.coefficients.iter()))
        .map(|(s, (a, b))| (s - (a + b)).norm())
        .fold(0.0, f64::max)
        / scale;

    Ok(PropertyReport::from_deviation(deviation, tolerance))
}

/// Time shift, magnitude side: circularly shifting by `shift` samples must
/// leave the magnitude spectrum unchanged.
///
/// The deviation is the largest magnitude difference normalized by the peak
/// magnitude of the unshifted spectrum. The phase side of the identity is
/// the stricter [`verify_shift_phase`].
pub fn verify_time_shift(
    x: &[f64],
    shift: usize,
    sample_rate: f64,
    tolerance: f64,
) -> Result<PropertyReport, AnalysisError> {
    let s_x = compute_spectrum(x, sample_rate)?;

    let mut shifted = x.to_vec();
    shifted.rotate_right(shift % x.len());
    let s_shifted = compute_spectrum(&shifted, sample_rate)?;

    let scale = peak_magnitude(&s_x).max(f64::MIN_POSITIVE);
    let deviation = s_x
        .coefficients
        .iter()
        .zip(s_shifted.coefficients.iter())
        .map(|(a, b)| (a.norm() - b.norm()).abs())
        .fold(0.0, f64::max)
        / scale;

    Ok(PropertyReport::from_deviation(deviation, tolerance))
}

/// Time shift, full complex law: the shifted signal's spectrum must equal
/// `spectrum(x) · exp(-j·2π·k·d/N)` bin by bin, where `k` is the centered
/// frequency index.
///
/// This is the strict form of the shift theorem; magnitude invariance
/// follows from it but not vice versa.
pub fn verify_shift_phase(
    x: &[f64],
    shift: usize,
    sample_rate: f64,
    tolerance: f64,
) -> Result<PropertyReport, AnalysisError> {
    let n = x.len();
    let s_x = compute_spectrum(x, sample_rate)?;

    let mut shifted = x.to_vec();
    shifted.rotate_right(shift % n);
    let s_shifted = compute_spectrum(&shifted, sample_rate)?;

    let half = (n / 2) as isize;
    let d = (shift % n) as f64;
    let scale = peak_magnitude(&s_x).max(f64::MIN_POSITIVE);

    let deviation = (0..n)
        .map(|i| {
            // Centered index is congruent mod N to the raw DFT index, so it
            // feeds the phase factor directly.
            let k = (i as isize - half) as f64;
            let phase = -2.0 * PI * k * d / n as f64;
            let factor = Complex::from_polar(1.0, phase);
            (s_shifted.coefficients[i] - s_x.coefficients[i] * factor).norm()
        })
        .fold(0.0, f64::max)
        / scale;

    Ok(PropertyReport::from_deviation(deviation, tolerance))
}

/// Time scaling: a sinusoid at `alpha · f0` must peak at `alpha · f0`.
///
/// No continuous-time rescaling happens here — the check synthesizes the
/// scaled tone directly, which approximates the continuous scaling property
/// only while `alpha · f0` stays well below Nyquist. Discrete resampling and
/// continuous scaling are not equivalent near that limit.
///
/// The deviation is the distance in Hz between the measured peak and
/// `alpha · f0`; the pass threshold is one frequency bin (`fs / N`).
///
/// # Errors
///
/// [`AnalysisError::InvalidInput`] when the scaled frequency reaches or
/// exceeds Nyquist, where the peak-location test is meaningless.
pub fn verify_time_scaling(
    t: &TimeAxis,
    f0: f64,
    alpha: f64,
) -> Result<PropertyReport, AnalysisError> {
    let scaled = alpha * f0;
    if scaled <= 0.0 || scaled >= t.sample_rate() / 2.0 {
        return Err(AnalysisError::InvalidInput(
            "scaled frequency must lie strictly between 0 and Nyquist",
        ));
    }

    let signal = sinusoid(t, scaled, 1.0);
    let spectrum = compute_spectrum(&signal, t.sample_rate())?;

    let (peak_hz, _) = spectrum
        .peak_frequency()
        .ok_or(AnalysisError::InvalidInput("spectrum has no positive bins"))?;

    let bin = t.sample_rate() / t.len() as f64;
    let deviation = (peak_hz - scaled).abs();
    Ok(PropertyReport::from_deviation(deviation, bin))
}

#[cfg(test)]
mod tests {
    use super::*;
    use espectro_core::rectangular_pulse;

    fn axis() -> TimeAxis {
        TimeAxis::new(-1.0, 1.0, 1000.0).unwrap()
    }

    #[test]
    fn linearity_holds_for_pulse_plus_sine() {
        let t = axis();
        let pulse = rectangular_pulse(&t, 0.2);
        let sine = sinusoid(&t, 5.0, 1.0);

        let report = verify_linearity(&pulse, &sine, t.sample_rate(), 1e-9).unwrap();
        assert!(
            report.passed,
            "linearity deviation too large: {}",
            report.deviation
        );
    }

    #[test]
    fn linearity_rejects_mismatched_lengths() {
        let err = verify_linearity(&[1.0, 2.0], &[1.0], 10.0, 1e-9).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::ShapeMismatch {
                expected: 2,
                got: 1
            }
        );
    }

    #[test]
    fn shift_preserves_magnitude() {
        let t = axis();
        let sine = sinusoid(&t, 5.0, 1.0);

        let report = verify_time_shift(&sine, 200, t.sample_rate(), 1e-9).unwrap();
        assert!(
            report.passed,
            "magnitude deviation too large: {}",
            report.deviation
        );
    }

    #[test]
    fn shift_phase_law_holds() {
        let t = axis();
        let sine = sinusoid(&t, 5.0, 1.0);

        let report = verify_shift_phase(&sine, 200, t.sample_rate(), 1e-6).unwrap();
        assert!(
            report.passed,
            "phase-law deviation too large: {}",
            report.deviation
        );
    }

    #[test]
    fn shift_phase_law_holds_for_nonperiodic_signal() {
        // The circular shift theorem holds for any sequence, periodic or not.
        let t = axis();
        let pulse = rectangular_pulse(&t, 0.2);

        let report = verify_shift_phase(&pulse, 137, t.sample_rate(), 1e-6).unwrap();
        assert!(
            report.passed,
            "phase-law deviation too large: {}",
            report.deviation
        );
    }

    #[test]
    fn scaling_moves_the_peak() {
        let t = axis();
        // 5 Hz doubled: peak must land at 10 Hz within one bin (0.5 Hz).
        let report = verify_time_scaling(&t, 5.0, 2.0).unwrap();
        assert!(
            report.passed,
            "peak missed 10 Hz by {} Hz",
            report.deviation
        );
    }

    #[test]
    fn scaling_rejects_nyquist_violation() {
        let t = axis();
        assert!(verify_time_scaling(&t, 400.0, 2.0).is_err());
        assert!(verify_time_scaling(&t, 5.0, -1.0).is_err());
    }
}
