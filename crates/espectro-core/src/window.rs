//! Window functions for tap shaping and spectral smoothing.

use alloc::vec;
use alloc::vec::Vec;
use core::f64::consts::PI;
use libm::cos;

/// Window function types.
///
/// All windows are symmetric (the first and last coefficients match), which
/// is the form FIR tap shaping requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    /// Rectangular (no shaping)
    Rectangular,
    /// Hann window (raised cosine)
    Hann,
    /// Hamming window
    Hamming,
    /// Blackman window
    Blackman,
}

impl Window {
    /// Apply the window to a buffer in place.
    pub fn apply(&self, buffer: &mut [f64]) {
        let n = buffer.len();
        if n < 2 {
            return;
        }
        let denom = (n - 1) as f64;
        match self {
            Window::Rectangular => {}
            Window::Hann => {
                for (i, sample) in buffer.iter_mut().enumerate() {
                    let w = 0.5 * (1.0 - cos(2.0 * PI * i as f64 / denom));
                    *sample *= w;
                }
            }
            Window::Hamming => {
                for (i, sample) in buffer.iter_mut().enumerate() {
                    let w = 0.54 - 0.46 * cos(2.0 * PI * i as f64 / denom);
                    *sample *= w;
                }
            }
            Window::Blackman => {
                for (i, sample) in buffer.iter_mut().enumerate() {
                    let x = 2.0 * PI * i as f64 / denom;
                    let w = 0.42 - 0.5 * cos(x) + 0.08 * cos(2.0 * x);
                    *sample *= w;
                }
            }
        }
    }

    /// Get window coefficients.
    pub fn coefficients(&self, size: usize) -> Vec<f64> {
        let mut coeffs = vec![1.0; size];
        self.apply(&mut coeffs);
        coeffs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hann_is_zero_at_edges_one_at_center() {
        let w = Window::Hann.coefficients(101);
        assert!(w[0].abs() < 1e-12);
        assert!(w[100].abs() < 1e-12);
        assert!((w[50] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn hamming_is_symmetric() {
        let w = Window::Hamming.coefficients(64);
        for i in 0..32 {
            assert!(
                (w[i] - w[63 - i]).abs() < 1e-12,
                "coefficient {i} must mirror its counterpart"
            );
        }
    }

    #[test]
    fn blackman_edges_are_small() {
        let w = Window::Blackman.coefficients(33);
        assert!(w[0].abs() < 1e-9);
        assert!((w[16] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn singleton_window_is_unity() {
        assert_eq!(Window::Hamming.coefficients(1), vec![1.0]);
    }

    #[test]
    fn rectangular_is_identity() {
        let mut buffer = [0.25; 16];
        Window::Rectangular.apply(&mut buffer);
        assert!(buffer.iter().all(|&x| x == 0.25));
    }
}
