//! Espectro Core - signal primitives for discrete-time analysis
//!
//! This crate provides the foundational building blocks for the espectro
//! analysis pipeline: a uniform time axis, canonical test-signal generators,
//! seedable noise, window functions, and the small amount of shared math the
//! other crates lean on.
//!
//! # Core Abstractions
//!
//! ## Time Axis
//!
//! - [`TimeAxis`] - Uniformly spaced sample times over a half-open interval
//!
//! ## Signal Generation
//!
//! Pure functions of a borrowed time axis, each returning one sample per
//! axis point:
//!
//! - [`rectangular_pulse`] - Unit pulse on an open interval around zero
//! - [`unit_step`] - Heaviside step with an explicit value at t = 0
//! - [`sinusoid`] - Sine tone at a given frequency and amplitude
//! - [`composite`] - Elementwise sum of equal-length signals
//!
//! ## Noise
//!
//! - [`WhiteNoise`] - Seedable xorshift white-noise source, deterministic
//!   per seed so fixtures and pipelines reproduce exactly
//!
//! ## Windows
//!
//! - [`Window`] - Rectangular, Hann, Hamming, and Blackman tap shaping
//!
//! ## Utilities
//!
//! - Math functions: [`db_to_linear`], [`linear_to_db`], [`sinc`], [`energy`]
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! espectro-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use espectro_core::{TimeAxis, sinusoid, rectangular_pulse, composite};
//!
//! let t = TimeAxis::new(-1.0, 1.0, 1000.0).unwrap();
//! let sine = sinusoid(&t, 5.0, 1.0);
//! let pulse = rectangular_pulse(&t, 0.2);
//! let sum = composite(&[&sine, &pulse]).unwrap();
//! assert_eq!(sum.len(), t.len());
//! ```
//!
//! # Design Principles
//!
//! - **Referentially transparent**: every generator is a pure function of
//!   its arguments; no shared mutable state anywhere
//! - **No dependencies on std**: pure `no_std` with `libm` for math
//! - **Strict failures**: shape and domain violations return errors, never
//!   silently clamp or substitute

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod generate;
pub mod math;
pub mod noise;
pub mod time;
pub mod window;

// Re-export main types at crate root
pub use error::SignalError;
pub use generate::{STEP_AT_ZERO, composite, rectangular_pulse, sinusoid, unit_step};
pub use math::{db_to_linear, energy, linear_to_db, sinc};
pub use noise::WhiteNoise;
pub use time::TimeAxis;
pub use window::Window;
