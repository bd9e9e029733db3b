//! Filter specifications and designed coefficients.

use num_complex::Complex64;

use crate::butter::butterworth;
use crate::error::FilterError;
use crate::fir::fir_lowpass;

/// Frequency band of a Butterworth design, cutoffs in Hz.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Band {
    /// Low-pass with the given cutoff.
    Low(f64),
    /// High-pass with the given cutoff.
    High(f64),
    /// Band-pass between the two cutoffs (low edge first).
    Pass(f64, f64),
}

/// Immutable description of a filter to synthesize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterSpec {
    /// Maximally-flat-magnitude IIR filter.
    Butterworth {
        /// Analog prototype order; band-pass doubles the effective order.
        order: usize,
        /// Band type and cutoff(s) in Hz.
        band: Band,
        /// Sample rate in Hz.
        sample_rate: f64,
    },
    /// Windowed-sinc FIR low-pass filter.
    Fir {
        /// Number of taps; must be odd (Type I linear phase).
        num_taps: usize,
        /// Cutoff in Hz.
        cutoff_hz: f64,
        /// Sample rate in Hz.
        sample_rate: f64,
    },
}

/// Numerator/denominator coefficients of a designed filter.
///
/// For FIR designs the denominator is the identity `[1.0]`. For a stable
/// Butterworth design every denominator root lies strictly inside the unit
/// circle.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCoefficients {
    /// Numerator (feed-forward) coefficients, never empty.
    pub b: Vec<f64>,
    /// Denominator (feedback) coefficients; `[1.0]` for FIR.
    pub a: Vec<f64>,
}

impl FilterCoefficients {
    /// Whether the filter has no feedback path.
    pub fn is_fir(&self) -> bool {
        self.a.len() <= 1
    }

    /// Filter order, `max(len(b), len(a)) - 1`.
    pub fn order(&self) -> usize {
        self.b.len().max(self.a.len()).saturating_sub(1)
    }

    /// Single-pass magnitude response at a frequency in Hz.
    ///
    /// Evaluates `|B(e^{-jω}) / A(e^{-jω})|` at `ω = 2π·f/fs`. Returns `None`
    /// for an out-of-range frequency or an empty numerator.
    pub fn magnitude_at(&self, freq_hz: f64, sample_rate: f64) -> Option<f64> {
        if self.b.is_empty() || sample_rate <= 0.0 {
            return None;
        }
        if freq_hz < 0.0 || freq_hz > sample_rate / 2.0 {
            return None;
        }
        let omega = 2.0 * core::f64::consts::PI * freq_hz / sample_rate;
        let eval = |coeffs: &[f64]| {
            coeffs
                .iter()
                .enumerate()
                .map(|(i, &c)| Complex64::from_polar(c, -omega * i as f64))
                .sum::<Complex64>()
        };
        let num = eval(&self.b);
        let den = if self.a.is_empty() {
            Complex64::new(1.0, 0.0)
        } else {
            eval(&self.a)
        };
        Some((num / den).norm())
    }
}

/// Synthesize coefficients for a filter specification.
///
/// Dispatches to [`butterworth`] or [`fir_lowpass`]; both are pure functions
/// of the spec.
///
/// # Errors
///
/// [`FilterError::InvalidSpec`] for parameters outside their valid domain:
/// zero order or tap count, cutoffs not strictly inside `(0, Nyquist)`,
/// band edges out of order, or an even FIR tap count.
pub fn design(spec: &FilterSpec) -> Result<FilterCoefficients, FilterError> {
    match *spec {
        FilterSpec::Butterworth {
            order,
            band,
            sample_rate,
        } => butterworth(order, band, sample_rate),
        FilterSpec::Fir {
            num_taps,
            cutoff_hz,
            sample_rate,
        } => fir_lowpass(num_taps, cutoff_hz, sample_rate),
    }
}

/// Normalized cutoff `fc / (fs/2)`, validated to lie strictly in `(0, 1)`.
pub(crate) fn normalized_cutoff(cutoff_hz: f64, sample_rate: f64) -> Result<f64, FilterError> {
    if !sample_rate.is_finite() || sample_rate <= 0.0 {
        return Err(FilterError::spec("sample rate must be positive and finite"));
    }
    let wn = cutoff_hz / (sample_rate / 2.0);
    if !wn.is_finite() || wn <= 0.0 || wn >= 1.0 {
        return Err(FilterError::spec(
            "normalized cutoff must lie strictly in (0, 1)",
        ));
    }
    Ok(wn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn design_dispatches_butterworth() {
        let spec = FilterSpec::Butterworth {
            order: 4,
            band: Band::Low(10.0),
            sample_rate: 1000.0,
        };
        let coeffs = design(&spec).unwrap();
        assert_eq!(coeffs.b.len(), 5);
        assert_eq!(coeffs.a.len(), 5);
        assert!(!coeffs.is_fir());
        assert_eq!(coeffs.order(), 4);
    }

    #[test]
    fn design_dispatches_fir() {
        let spec = FilterSpec::Fir {
            num_taps: 31,
            cutoff_hz: 10.0,
            sample_rate: 1000.0,
        };
        let coeffs = design(&spec).unwrap();
        assert_eq!(coeffs.b.len(), 31);
        assert_eq!(coeffs.a, vec![1.0]);
        assert!(coeffs.is_fir());
    }

    #[test]
    fn normalized_cutoff_bounds() {
        assert!((normalized_cutoff(10.0, 1000.0).unwrap() - 0.02).abs() < 1e-15);
        assert!(normalized_cutoff(0.0, 1000.0).is_err());
        assert!(normalized_cutoff(500.0, 1000.0).is_err());
        assert!(normalized_cutoff(600.0, 1000.0).is_err());
        assert!(normalized_cutoff(-5.0, 1000.0).is_err());
        assert!(normalized_cutoff(10.0, 0.0).is_err());
    }
}
