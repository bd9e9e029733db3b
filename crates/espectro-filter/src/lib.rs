//! Espectro Filter - digital filter design and zero-phase application
//!
//! This crate synthesizes filter coefficients from a typed specification and
//! applies them to finite signals without phase distortion:
//!
//! - [`spec`] - [`FilterSpec`], [`Band`], and [`FilterCoefficients`]
//! - [`butter`] - Butterworth IIR synthesis (low-, high-, and band-pass)
//! - [`fir`] - Windowed-sinc FIR low-pass synthesis
//! - [`apply`] - Single-pass filtering, steady-state initial conditions,
//!   and forward-backward zero-phase filtering
//!
//! # Example
//!
//! ```rust
//! use espectro_filter::{Band, FilterSpec, design, filtfilt};
//!
//! let spec = FilterSpec::Butterworth {
//!     order: 4,
//!     band: Band::Low(10.0),
//!     sample_rate: 1000.0,
//! };
//! let coeffs = design(&spec).unwrap();
//!
//! let signal: Vec<f64> = (0..512).map(|i| (i as f64 * 0.05).sin()).collect();
//! let smoothed = filtfilt(&coeffs, &signal).unwrap();
//! assert_eq!(smoothed.len(), signal.len());
//! ```
//!
//! # Design Principles
//!
//! - **Strict validation**: out-of-domain cutoffs, non-monotonic band edges,
//!   and even FIR tap counts fail with [`FilterError::InvalidSpec`] — never
//!   silently clamped or rounded
//! - **Deterministic**: both designers are pure functions of the spec
//! - **Divergence is an error**: an unstable application returns
//!   [`FilterError::Unstable`] instead of NaN-laden output

pub mod apply;
pub mod butter;
pub mod error;
pub mod fir;
pub mod spec;

// Re-export main types
pub use apply::{filtfilt, lfilter, lfilter_zi};
pub use butter::butterworth;
pub use error::FilterError;
pub use fir::fir_lowpass;
pub use spec::{Band, FilterCoefficients, FilterSpec, design};
