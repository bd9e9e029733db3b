//! Butterworth IIR coefficient synthesis.
//!
//! The design follows the classical analog-prototype chain: place the
//! maximally-flat poles on the unit circle of the s-plane, frequency-warp
//! the requested cutoff(s), transform the prototype to the requested band,
//! and map the result to the z-plane with the bilinear transform. All
//! intermediate algebra stays in zero-pole-gain form; the final step expands
//! to transfer-function coefficients.

use core::f64::consts::PI;

use num_complex::Complex64;

use crate::error::FilterError;
use crate::spec::{Band, FilterCoefficients, normalized_cutoff};

/// Zero-pole-gain representation used between transform stages.
#[derive(Debug, Clone)]
struct Zpk {
    z: Vec<Complex64>,
    p: Vec<Complex64>,
    k: f64,
}

impl Zpk {
    fn relative_degree(&self) -> usize {
        self.p.len() - self.z.len()
    }
}

/// Analog Butterworth prototype: `n` poles at `exp(jπ(2k + n - 1)/(2n))`,
/// no zeros, unit gain. Every pole lies strictly in the left half plane.
fn butter_prototype(order: usize) -> Zpk {
    let n = order as f64;
    let p = (1..=order)
        .map(|k| {
            let theta = PI * (2.0 * k as f64 + n - 1.0) / (2.0 * n);
            Complex64::from_polar(1.0, theta)
        })
        .collect();
    Zpk {
        z: Vec::new(),
        p,
        k: 1.0,
    }
}

/// Shift a low-pass prototype to cutoff `wo`.
fn lp_to_lp(proto: Zpk, wo: f64) -> Zpk {
    let degree = proto.relative_degree();
    Zpk {
        z: proto.z.iter().map(|&z| z * wo).collect(),
        p: proto.p.iter().map(|&p| p * wo).collect(),
        k: proto.k * wo.powi(degree as i32),
    }
}

/// Invert a low-pass prototype into a high-pass at cutoff `wo`.
fn lp_to_hp(proto: Zpk, wo: f64) -> Zpk {
    let degree = proto.relative_degree();

    // Gain correction: k * Re(Π(-z) / Π(-p)).
    let num: Complex64 = proto.z.iter().map(|&z| -z).product();
    let den: Complex64 = proto.p.iter().map(|&p| -p).product();
    let k = proto.k * (num / den).re;

    let mut z: Vec<Complex64> = proto.z.iter().map(|&z| wo / z).collect();
    z.extend(std::iter::repeat_n(Complex64::new(0.0, 0.0), degree));
    let p = proto.p.iter().map(|&p| wo / p).collect();

    Zpk { z, p, k }
}

/// Spread a low-pass prototype into a band-pass centered at `wo` with
/// bandwidth `bw`. The pole count doubles.
fn lp_to_bp(proto: Zpk, wo: f64, bw: f64) -> Zpk {
    let degree = proto.relative_degree();

    let split = |roots: &[Complex64]| -> Vec<Complex64> {
        let scaled: Vec<Complex64> = roots.iter().map(|&r| r * (bw / 2.0)).collect();
        let mut out = Vec::with_capacity(scaled.len() * 2);
        for &r in &scaled {
            let disc = (r * r - wo * wo).sqrt();
            out.push(r + disc);
        }
        for &r in &scaled {
            let disc = (r * r - wo * wo).sqrt();
            out.push(r - disc);
        }
        out
    };

    let mut z = split(&proto.z);
    z.extend(std::iter::repeat_n(Complex64::new(0.0, 0.0), degree));
    let p = split(&proto.p);
    let k = proto.k * bw.powi(degree as i32);

    Zpk { z, p, k }
}

/// Map an analog design to the z-plane via the bilinear transform at
/// (internal) sample rate `fs`.
fn bilinear(analog: Zpk, fs: f64) -> Zpk {
    let degree = analog.relative_degree();
    let fs2 = Complex64::new(2.0 * fs, 0.0);

    let num: Complex64 = analog.z.iter().map(|&z| fs2 - z).product();
    let den: Complex64 = analog.p.iter().map(|&p| fs2 - p).product();
    let k = analog.k * (num / den).re;

    let mut z: Vec<Complex64> = analog.z.iter().map(|&z| (fs2 + z) / (fs2 - z)).collect();
    // Zeros at analog infinity map to the Nyquist point z = -1.
    z.extend(std::iter::repeat_n(Complex64::new(-1.0, 0.0), degree));
    let p = analog.p.iter().map(|&p| (fs2 + p) / (fs2 - p)).collect();

    Zpk { z, p, k }
}

/// Expand roots into monic polynomial coefficients, highest power first.
fn poly(roots: &[Complex64]) -> Vec<Complex64> {
    let mut coeffs = vec![Complex64::new(1.0, 0.0)];
    for &r in roots {
        coeffs.push(Complex64::new(0.0, 0.0));
        for i in (1..coeffs.len()).rev() {
            let lower = coeffs[i - 1];
            coeffs[i] -= r * lower;
        }
    }
    coeffs
}

/// Expand a zpk design to transfer-function coefficients. The roots come in
/// conjugate pairs, so the imaginary residue is rounding noise; only the
/// real part survives.
fn zpk_to_tf(zpk: &Zpk) -> (Vec<f64>, Vec<f64>) {
    let b = poly(&zpk.z).iter().map(|c| (c * zpk.k).re).collect();
    let a = poly(&zpk.p).iter().map(|c| c.re).collect();
    (b, a)
}

/// Design a digital Butterworth filter.
///
/// `order` is the analog prototype order; low- and high-pass designs yield
/// `order + 1` coefficients, band-pass yields `2·order + 1` because the band
/// transformation doubles the pole count. Cutoffs are in Hz against the
/// given sample rate.
///
/// # Errors
///
/// [`FilterError::InvalidSpec`] when `order` is zero, a cutoff does not lie
/// strictly inside `(0, Nyquist)`, or band-pass edges are not strictly
/// increasing.
pub fn butterworth(
    order: usize,
    band: Band,
    sample_rate: f64,
) -> Result<FilterCoefficients, FilterError> {
    if order == 0 {
        return Err(FilterError::spec("order must be at least 1"));
    }

    // The bilinear mapping runs at a fixed internal rate of 2 Hz, so the
    // pre-warp of a normalized cutoff wn is 4·tan(π·wn/2).
    const INTERNAL_FS: f64 = 2.0;
    let warp = |wn: f64| 2.0 * INTERNAL_FS * (PI * wn / INTERNAL_FS).tan();

    let proto = butter_prototype(order);
    let analog = match band {
        Band::Low(fc) => {
            let wn = normalized_cutoff(fc, sample_rate)?;
            lp_to_lp(proto, warp(wn))
        }
        Band::High(fc) => {
            let wn = normalized_cutoff(fc, sample_rate)?;
            lp_to_hp(proto, warp(wn))
        }
        Band::Pass(lo, hi) => {
            let wn_lo = normalized_cutoff(lo, sample_rate)?;
            let wn_hi = normalized_cutoff(hi, sample_rate)?;
            if wn_lo >= wn_hi {
                return Err(FilterError::spec(
                    "band edges must satisfy low < high",
                ));
            }
            let (w1, w2) = (warp(wn_lo), warp(wn_hi));
            lp_to_bp(proto, (w1 * w2).sqrt(), w2 - w1)
        }
    };

    let digital = bilinear(analog, INTERNAL_FS);
    let (b, a) = zpk_to_tf(&digital);
    Ok(FilterCoefficients { b, a })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dc_gain(c: &FilterCoefficients) -> f64 {
        c.b.iter().sum::<f64>() / c.a.iter().sum::<f64>()
    }

    fn nyquist_gain(c: &FilterCoefficients) -> f64 {
        let alt = |v: &[f64]| {
            v.iter()
                .enumerate()
                .map(|(i, &x)| if i % 2 == 0 { x } else { -x })
                .sum::<f64>()
        };
        alt(&c.b) / alt(&c.a)
    }

    #[test]
    fn first_order_halfband_reference() {
        // Analytic result for order 1 at wn = 0.5: b = [0.5, 0.5], a = [1, 0].
        let c = butterworth(1, Band::Low(250.0), 1000.0).unwrap();
        assert!((c.b[0] - 0.5).abs() < 1e-12);
        assert!((c.b[1] - 0.5).abs() < 1e-12);
        assert!((c.a[0] - 1.0).abs() < 1e-12);
        assert!(c.a[1].abs() < 1e-12);
    }

    #[test]
    fn second_order_halfband_reference() {
        // Known coefficients of the order-2 half-band Butterworth.
        let c = butterworth(2, Band::Low(250.0), 1000.0).unwrap();
        let expected_b = [0.2928932188134524, 0.5857864376269048, 0.2928932188134524];
        let expected_a = [1.0, 0.0, 0.1715728752538099];
        for (got, want) in c.b.iter().zip(expected_b) {
            assert!((got - want).abs() < 1e-9, "b: {got} vs {want}");
        }
        for (got, want) in c.a.iter().zip(expected_a) {
            assert!((got - want).abs() < 1e-9, "a: {got} vs {want}");
        }
    }

    #[test]
    fn lowpass_gain_profile() {
        let c = butterworth(4, Band::Low(10.0), 1000.0).unwrap();
        assert_eq!(c.b.len(), 5);
        assert_eq!(c.a.len(), 5);
        assert!((dc_gain(&c) - 1.0).abs() < 1e-9, "DC must pass");
        assert!(
            nyquist_gain(&c).abs() < 1e-9,
            "Nyquist must be blocked, got {}",
            nyquist_gain(&c)
        );
    }

    #[test]
    fn highpass_gain_profile() {
        let c = butterworth(4, Band::High(10.0), 1000.0).unwrap();
        assert_eq!(c.b.len(), 5);
        assert!(dc_gain(&c).abs() < 1e-9, "DC must be blocked");
        assert!(
            (nyquist_gain(&c) - 1.0).abs() < 1e-9,
            "Nyquist must pass, got {}",
            nyquist_gain(&c)
        );
    }

    #[test]
    fn bandpass_doubles_the_order() {
        let c = butterworth(2, Band::Pass(10.0, 50.0), 1000.0).unwrap();
        assert_eq!(c.b.len(), 5, "band-pass must have 2n+1 coefficients");
        assert_eq!(c.a.len(), 5);
        assert!(dc_gain(&c).abs() < 1e-9, "DC must be blocked");
        assert!(nyquist_gain(&c).abs() < 1e-9, "Nyquist must be blocked");
        // Center of the band passes at unity.
        let center = (c.magnitude_at((10.0f64 * 50.0).sqrt(), 1000.0)).unwrap();
        assert!(
            (center - 1.0).abs() < 1e-6,
            "band center must pass, got {center}"
        );
    }

    #[test]
    fn cutoff_rolloff_is_half_power() {
        // |H| at the cutoff of any Butterworth is 1/sqrt(2).
        let c = butterworth(4, Band::Low(10.0), 1000.0).unwrap();
        let mag = c.magnitude_at(10.0, 1000.0).unwrap();
        assert!(
            (mag - core::f64::consts::FRAC_1_SQRT_2).abs() < 1e-9,
            "cutoff magnitude {mag} must be -3 dB"
        );
    }

    #[test]
    fn rejects_invalid_specs() {
        assert!(butterworth(0, Band::Low(10.0), 1000.0).is_err());
        assert!(butterworth(4, Band::Low(0.0), 1000.0).is_err());
        assert!(butterworth(4, Band::Low(500.0), 1000.0).is_err());
        assert!(butterworth(4, Band::Low(700.0), 1000.0).is_err());
        assert!(butterworth(2, Band::Pass(50.0, 10.0), 1000.0).is_err());
        assert!(butterworth(2, Band::Pass(50.0, 50.0), 1000.0).is_err());
    }

    #[test]
    fn design_is_deterministic() {
        let a = butterworth(3, Band::Pass(5.0, 20.0), 500.0).unwrap();
        let b = butterworth(3, Band::Pass(5.0, 20.0), 500.0).unwrap();
        assert_eq!(a, b);
    }
}
