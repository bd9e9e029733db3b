//! Windowed-sinc FIR low-pass synthesis.

use espectro_core::{Window, sinc};

use crate::error::FilterError;
use crate::spec::{FilterCoefficients, normalized_cutoff};

/// Design a windowed-sinc FIR low-pass filter.
///
/// The ideal brick-wall response is truncated to `num_taps` samples of
/// `wn·sinc(wn·(i - M))` around the center tap `M = (num_taps-1)/2`, shaped
/// by a Hamming window, and normalized so the taps sum to exactly 1 — unity
/// gain at DC is a required invariant of the design, not a side effect.
///
/// `num_taps` must be odd: an even count has no center tap and cannot
/// realize the Type I (symmetric, odd-length) response this designer
/// produces. The constraint is enforced, not rounded away.
///
/// # Errors
///
/// [`FilterError::InvalidSpec`] when `num_taps` is zero or even, or the
/// normalized cutoff falls outside `(0, 1)`.
pub fn fir_lowpass(
    num_taps: usize,
    cutoff_hz: f64,
    sample_rate: f64,
) -> Result<FilterCoefficients, FilterError> {
    if num_taps == 0 {
        return Err(FilterError::spec("tap count must be positive"));
    }
    if num_taps % 2 == 0 {
        return Err(FilterError::spec(
            "tap count must be odd for a Type I low-pass",
        ));
    }
    let wn = normalized_cutoff(cutoff_hz, sample_rate)?;

    let center = (num_taps - 1) as f64 / 2.0;
    let mut b: Vec<f64> = (0..num_taps)
        .map(|i| wn * sinc(wn * (i as f64 - center)))
        .collect();
    Window::Hamming.apply(&mut b);

    // Scale to unity DC gain.
    let sum: f64 = b.iter().sum();
    for tap in b.iter_mut() {
        *tap /= sum;
    }

    Ok(FilterCoefficients { b, a: vec![1.0] })
}
