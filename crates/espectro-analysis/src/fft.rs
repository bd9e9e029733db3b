//! FFT planner wrapper.

use rustfft::{FftPlanner, num_complex::Complex};
use std::sync::Arc;

/// FFT processor with cached plans.
///
/// Plans the forward and inverse transforms once for a given size and reuses
/// them across calls. The transform length is whatever the caller asks for;
/// no zero-padding to a power of two is performed, so an N-point signal gets
/// an exact N-point DFT.
pub struct Fft {
    planner: FftPlanner<f64>,
    fft: Arc<dyn rustfft::Fft<f64>>,
    ifft: Arc<dyn rustfft::Fft<f64>>,
    size: usize,
}

impl Fft {
    /// Create an FFT processor for the given size.
    pub fn new(size: usize) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(size);
        let ifft = planner.plan_fft_inverse(size);

        Self {
            planner,
            fft,
            ifft,
            size,
        }
    }

    /// Transform length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Re-plan for a different size (no-op when unchanged).
    pub fn resize(&mut self, size: usize) {
        if size != self.size {
            self.fft = self.planner.plan_fft_forward(size);
            self.ifft = self.planner.plan_fft_inverse(size);
            self.size = size;
        }
    }

    /// Forward DFT of a real signal, returning all N complex bins.
    ///
    /// Input shorter than the transform size is zero-padded; longer input is
    /// truncated.
    pub fn forward(&self, input: &[f64]) -> Vec<Complex<f64>> {
        let mut buffer: Vec<Complex<f64>> =
            input.iter().map(|&x| Complex::new(x, 0.0)).collect();
        buffer.resize(self.size, Complex::new(0.0, 0.0));

        self.fft.process(&mut buffer);
        buffer
    }

    /// Forward DFT of a complex buffer, in place.
    pub fn forward_complex(&self, buffer: &mut [Complex<f64>]) {
        self.fft.process(buffer);
    }

    /// Inverse DFT, scaled by 1/N.
    pub fn inverse(&self, spectrum: &[Complex<f64>]) -> Vec<Complex<f64>> {
        let mut buffer = spectrum.to_vec();
        buffer.resize(self.size, Complex::new(0.0, 0.0));

        self.ifft.process(&mut buffer);

        let scale = 1.0 / self.size as f64;
        for c in buffer.iter_mut() {
            *c *= scale;
        }
        buffer
    }
}
