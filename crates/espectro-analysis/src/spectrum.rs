//! Centered-spectrum computation.
//!
//! The DFT output is reordered so frequency 0 sits at the center of the
//! sequence, with bin `k` mapping to `(k - N/2) * fs / N` (floor division).
//! This reproduces the `fftshift`/`fftfreq` pairing for even and odd N, so
//! magnitude and phase plots read left-to-right from `-fs/2` toward `+fs/2`.

use rustfft::num_complex::Complex;

use crate::error::AnalysisError;
use crate::fft::Fft;

/// A centered spectrum: paired frequency and coefficient sequences.
///
/// Invariant: `frequencies[k]` always corresponds to `coefficients[k]`, both
/// sequences have the input signal's length, and the frequencies ascend
/// through zero at index `N/2`.
#[derive(Debug, Clone)]
pub struct Spectrum {
    /// Real frequencies in Hz, ascending, centered on zero.
    pub frequencies: Vec<f64>,
    /// Complex DFT coefficients, reordered identically to `frequencies`.
    pub coefficients: Vec<Complex<f64>>,
}

impl Spectrum {
    /// Number of bins.
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Whether the spectrum holds no bins.
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Magnitude of every bin.
    pub fn magnitude(&self) -> Vec<f64> {
        self.coefficients.iter().map(|c| c.norm()).collect()
    }

    /// Phase of every bin in radians.
    pub fn phase(&self) -> Vec<f64> {
        self.coefficients.iter().map(|c| c.arg()).collect()
    }

    /// Spectral energy `(1/N) · Σ|X[k]|²` (the Parseval counterpart of the
    /// time-domain energy).
    pub fn energy(&self) -> f64 {
        let n = self.len() as f64;
        self.coefficients.iter().map(|c| c.norm_sqr()).sum::<f64>() / n
    }

    /// Location and magnitude of the strongest strictly positive frequency
    /// bin, or `None` when no bin has positive frequency.
    pub fn peak_frequency(&self) -> Option<(f64, f64)> {
        self.frequencies
            .iter()
            .zip(self.coefficients.iter())
            .filter(|&(&f, _)| f > 0.0)
            .map(|(&f, c)| (f, c.norm()))
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }

    /// Magnitude of the bin nearest the given frequency.
    pub fn magnitude_at(&self, freq_hz: f64) -> Option<f64> {
        self.frequencies
            .iter()
            .zip(self.coefficients.iter())
            .min_by(|a, b| {
                (a.0 - freq_hz).abs().total_cmp(&(b.0 - freq_hz).abs())
            })
            .map(|(_, c)| c.norm())
    }
}

/// Amount both sequences are rotated left to center frequency 0: `N - N/2`.
fn center_rotation(n: usize) -> usize {
    n - n / 2
}

/// Frequencies of the centered spectrum: `(k - N/2) * fs / N`.
fn centered_frequencies(n: usize, sample_rate: f64) -> Vec<f64> {
    let half = (n / 2) as isize;
    (0..n as isize)
        .map(|k| (k - half) as f64 * sample_rate / n as f64)
        .collect()
}

fn validate(len: usize, sample_rate: f64) -> Result<(), AnalysisError> {
    if len == 0 {
        return Err(AnalysisError::InvalidInput("signal is empty"));
    }
    if !sample_rate.is_finite() || sample_rate <= 0.0 {
        return Err(AnalysisError::InvalidInput(
            "sample rate must be positive and finite",
        ));
    }
    Ok(())
}

/// Compute the centered spectrum of a real signal.
///
/// The N-point DFT is taken over the signal as given (no zero-padding), then
/// coefficients and frequencies are both circularly shifted so frequency 0
/// lands at index `N/2`. Pure function of its inputs.
///
/// # Errors
///
/// [`AnalysisError::InvalidInput`] for an empty signal or a non-positive
/// sample rate.
pub fn compute_spectrum(signal: &[f64], sample_rate: f64) -> Result<Spectrum, AnalysisError> {
    validate(signal.len(), sample_rate)?;

    let n = signal.len();
    let fft = Fft::new(n);
    let mut coefficients = fft.forward(signal);
    coefficients.rotate_left(center_rotation(n));

    Ok(Spectrum {
        frequencies: centered_frequencies(n, sample_rate),
        coefficients,
    })
}

/// Compute the centered spectrum of a complex sequence.
///
/// Intermediate algebra (the shift-theorem check, for one) produces complex
/// signals; the centering convention is identical to [`compute_spectrum`].
pub fn compute_spectrum_complex(
    signal: &[Complex<f64>],
    sample_rate: f64,
) -> Result<Spectrum, AnalysisError> {
    validate(signal.len(), sample_rate)?;

    let n = signal.len();
    let fft = Fft::new(n);
    let mut coefficients = signal.to_vec();
    fft.forward_complex(&mut coefficients);
    coefficients.rotate_left(center_rotation(n));

    Ok(Spectrum {
        frequencies: centered_frequencies(n, sample_rate),
        coefficients,
    })
}

/// Reconstruct the time-domain samples from a centered spectrum.
///
/// Undoes the centering rotation, applies the inverse DFT, and returns the
/// real part (the imaginary residue of a spectrum that came from real data
/// is at rounding level).
///
/// # Errors
///
/// [`AnalysisError::InvalidInput`] for an empty spectrum,
/// [`AnalysisError::ShapeMismatch`] when the frequency and coefficient
/// sequences disagree in length.
pub fn inverse_spectrum(spectrum: &Spectrum) -> Result<Vec<f64>, AnalysisError> {
    let n = spectrum.coefficients.len();
    if n == 0 {
        return Err(AnalysisError::InvalidInput("spectrum is empty"));
    }
    if spectrum.frequencies.len() != n {
        return Err(AnalysisError::ShapeMismatch {
            expected: n,
            got: spectrum.frequencies.len(),
        });
    }

    let mut buffer = spectrum.coefficients.clone();
    buffer.rotate_right(center_rotation(n));

    let fft = Fft::new(n);
    Ok(fft.inverse(&buffer).iter().map(|c| c.re).collect())
}
