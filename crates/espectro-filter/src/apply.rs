//! Filter application: single-pass and zero-phase.
//!
//! The single-pass engine is a direct form II transposed realization of the
//! standard difference equation. Zero-phase filtering runs it forward, then
//! backward over the reversed output, with odd boundary extension and
//! steady-state initial conditions so the ends of the signal carry no
//! start-up transient.

use crate::error::FilterError;
use crate::spec::FilterCoefficients;

/// Coefficients padded to a common length and normalized by `a[0]`.
fn normalize(coeffs: &FilterCoefficients) -> Result<(Vec<f64>, Vec<f64>), FilterError> {
    if coeffs.b.is_empty() {
        return Err(FilterError::InvalidInput("numerator is empty"));
    }
    if coeffs.a.is_empty() {
        return Err(FilterError::InvalidInput("denominator is empty"));
    }
    let a0 = coeffs.a[0];
    if a0 == 0.0 || !a0.is_finite() {
        return Err(FilterError::InvalidInput(
            "denominator leading coefficient must be finite and non-zero",
        ));
    }

    let n = coeffs.b.len().max(coeffs.a.len());
    let mut b = vec![0.0; n];
    let mut a = vec![0.0; n];
    for (dst, &src) in b.iter_mut().zip(coeffs.b.iter()) {
        *dst = src / a0;
    }
    for (dst, &src) in a.iter_mut().zip(coeffs.a.iter()) {
        *dst = src / a0;
    }
    Ok((b, a))
}

/// Direct form II transposed pass over `x` with initial state `zi`.
///
/// Returns the output and the final state. `b` and `a` must be normalized
/// and equal-length; `zi` must have length `len - 1`.
fn run_df2t(b: &[f64], a: &[f64], x: &[f64], zi: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let n = b.len();
    let mut state = zi.to_vec();
    let mut y = Vec::with_capacity(x.len());

    for &xk in x {
        let yk = if n == 1 {
            b[0] * xk
        } else {
            b[0] * xk + state[0]
        };
        for j in 0..n.saturating_sub(2) {
            state[j] = b[j + 1] * xk + state[j + 1] - a[j + 1] * yk;
        }
        if n >= 2 {
            state[n - 2] = b[n - 1] * xk - a[n - 1] * yk;
        }
        y.push(yk);
    }
    (y, state)
}

/// Filter a signal once, assuming initial rest.
///
/// # Errors
///
/// [`FilterError::InvalidInput`] for empty coefficient vectors or a zero
/// leading denominator coefficient.
pub fn lfilter(coeffs: &FilterCoefficients, x: &[f64]) -> Result<Vec<f64>, FilterError> {
    let (b, a) = normalize(coeffs)?;
    let zi = vec![0.0; b.len().saturating_sub(1)];
    Ok(run_df2t(&b, &a, x, &zi).0)
}

/// Filter a signal once with explicit initial conditions.
///
/// Returns the output and the final filter state. `zi` must have length
/// `max(len(b), len(a)) - 1`.
pub fn lfilter_with_zi(
    coeffs: &FilterCoefficients,
    x: &[f64],
    zi: &[f64],
) -> Result<(Vec<f64>, Vec<f64>), FilterError> {
    let (b, a) = normalize(coeffs)?;
    let expected = b.len().saturating_sub(1);
    if zi.len() != expected {
        return Err(FilterError::InvalidInput(
            "initial conditions have the wrong length",
        ));
    }
    Ok(run_df2t(&b, &a, x, zi))
}

/// Steady-state initial conditions for a step input.
///
/// Solves `(I - Aᵀ)·zi = B` where `A` is the companion matrix of the
/// normalized denominator, so that filtering a constant signal scaled by
/// these conditions shows no start-up transient. The forward-backward pass
/// seeds both directions with this state.
///
/// # Errors
///
/// [`FilterError::Unstable`] when the system is singular — a pole at
/// `z = 1` has no steady state — and [`FilterError::InvalidInput`] for
/// malformed coefficients.
pub fn lfilter_zi(coeffs: &FilterCoefficients) -> Result<Vec<f64>, FilterError> {
    let (b, a) = normalize(coeffs)?;
    let n = b.len();
    if n == 1 {
        return Ok(Vec::new());
    }
    let m = n - 1;

    // I - companion(a)^T: the companion's first row holds -a[1..], the
    // subdiagonal holds ones; transposing puts those in the first column and
    // the superdiagonal.
    let mut matrix = vec![vec![0.0; m]; m];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = a[i + 1];
        if i == 0 {
            row[0] += 1.0;
        }
        for (j, cell) in row.iter_mut().enumerate().skip(1) {
            let identity = if i == j { 1.0 } else { 0.0 };
            let superdiag = if i == j - 1 { 1.0 } else { 0.0 };
            *cell = identity - superdiag;
        }
    }

    let rhs: Vec<f64> = (0..m).map(|i| b[i + 1] - a[i + 1] * b[0]).collect();
    solve(matrix, rhs)
}

/// Gaussian elimination with partial pivoting.
fn solve(mut m: Vec<Vec<f64>>, mut rhs: Vec<f64>) -> Result<Vec<f64>, FilterError> {
    let n = rhs.len();
    for col in 0..n {
        let pivot = (col..n)
            .max_by(|&i, &j| m[i][col].abs().total_cmp(&m[j][col].abs()))
            .expect("column range is non-empty");
        if m[pivot][col].abs() < f64::EPSILON {
            return Err(FilterError::Unstable(
                "filter has no steady state (pole at z = 1)",
            ));
        }
        m.swap(col, pivot);
        rhs.swap(col, pivot);

        for row in col + 1..n {
            let factor = m[row][col] / m[col][col];
            for k in col..n {
                m[row][k] -= factor * m[col][k];
            }
            rhs[row] -= factor * rhs[col];
        }
    }

    let mut x = vec![0.0; n];
    for row in (0..n).rev() {
        let mut acc = rhs[row];
        for k in row + 1..n {
            acc -= m[row][k] * x[k];
        }
        x[row] = acc / m[row][row];
    }
    Ok(x)
}

/// Apply a filter forward and backward for zero net phase.
///
/// The combined response has the squared magnitude of a single pass —
/// attenuation in dB doubles — and no phase shift, because the two
/// opposite-direction passes cancel each other's delay.
///
/// Boundary policy (fixed): the signal is extended at both ends by
/// `3·max(len(b), len(a))` samples of its odd (point-symmetric) reflection,
/// each pass starts from [`lfilter_zi`] scaled by the first sample it will
/// see, and the extension is trimmed afterward. This suppresses the edge
/// transients a cold-started pass would leave near `t[0]` and `t[N-1]`.
///
/// # Errors
///
/// * [`FilterError::InvalidInput`] when the signal is no longer than the
///   boundary extension.
/// * [`FilterError::Unstable`] when the output contains non-finite samples
///   or exceeds the input peak by a factor of 1e6 — a diverging denominator
///   is reported, never returned as garbage.
pub fn filtfilt(coeffs: &FilterCoefficients, x: &[f64]) -> Result<Vec<f64>, FilterError> {
    let (b, a) = normalize(coeffs)?;
    let pad = 3 * b.len();
    let n = x.len();
    if n <= pad {
        return Err(FilterError::InvalidInput(
            "signal must be longer than the boundary extension",
        ));
    }

    // Odd extension: reflect through the endpoint values.
    let mut ext = Vec::with_capacity(n + 2 * pad);
    for i in 0..pad {
        ext.push(2.0 * x[0] - x[pad - i]);
    }
    ext.extend_from_slice(x);
    for i in 0..pad {
        ext.push(2.0 * x[n - 1] - x[n - 2 - i]);
    }

    let zi = lfilter_zi(coeffs)?;

    let zi_forward: Vec<f64> = zi.iter().map(|&z| z * ext[0]).collect();
    let (mut y, _) = run_df2t(&b, &a, &ext, &zi_forward);
    y.reverse();

    let zi_backward: Vec<f64> = zi.iter().map(|&z| z * y[0]).collect();
    let (mut y, _) = run_df2t(&b, &a, &y, &zi_backward);
    y.reverse();

    let out = y[pad..pad + n].to_vec();

    let input_peak = x.iter().fold(0.0f64, |acc, &v| acc.max(v.abs()));
    let bound = input_peak.max(f64::MIN_POSITIVE) * 1e6;
    if out.iter().any(|v| !v.is_finite() || v.abs() > bound) {
        return Err(FilterError::Unstable(
            "output diverged beyond the stability bound",
        ));
    }
    Ok(out)
}
