//! Espectro Analysis - centered-spectrum DFT and Fourier-property checks
//!
//! This crate turns finite time-domain signals into centered spectra and
//! verifies the classical Fourier-transform identities empirically:
//!
//! - [`fft`] - FFT planner wrapper over `rustfft`
//! - [`spectrum`] - Centered DFT (frequency 0 in the middle), inverse, peaks
//! - [`properties`] - Linearity, time-shift, and time-scaling verification
//!
//! ## Centered spectra
//!
//! [`compute_spectrum`] pairs every DFT coefficient with its real frequency
//! and reorders both so frequency 0 sits at the center of the output,
//! matching the `fftshift`/`fftfreq` convention the classic analysis plots
//! use. [`inverse_spectrum`] undoes the centering and reconstructs the
//! time-domain samples.
//!
//! ## Example
//!
//! ```rust
//! use espectro_core::{TimeAxis, sinusoid};
//! use espectro_analysis::compute_spectrum;
//!
//! let t = TimeAxis::new(-1.0, 1.0, 1000.0).unwrap();
//! let sine = sinusoid(&t, 5.0, 1.0);
//! let spectrum = compute_spectrum(&sine, t.sample_rate()).unwrap();
//!
//! let (peak_hz, _) = spectrum.peak_frequency().unwrap();
//! assert!((peak_hz - 5.0).abs() < 0.5);
//! ```
//!
//! ## Property checks
//!
//! The [`properties`] module routes algebraically transformed signals back
//! through the spectrum computation and reports a pass/fail verdict with a
//! numeric deviation. The verdicts are informational; finite-precision DFTs
//! never reproduce the continuous identities exactly.

pub mod error;
pub mod fft;
pub mod properties;
pub mod spectrum;

// Re-export main types
pub use error::AnalysisError;
pub use fft::Fft;
pub use properties::{
    PropertyReport, verify_linearity, verify_shift_phase, verify_time_scaling, verify_time_shift,
};
pub use spectrum::{Spectrum, compute_spectrum, compute_spectrum_complex, inverse_spectrum};
