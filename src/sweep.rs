//! Temperature and frequency sweep builders and post-processing helpers.

use crate::math::{CScalar, Scalar};

/// Generates `n` linearly spaced samples in [start, stop].
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            (0..n).map(|i| start + step * i as Scalar).collect()
        }
    }
}

/// Generates `n` logarithmically spaced samples between `start` and `stop`.
///
/// # Panics
///
/// Panics unless both bounds are positive.
#[must_use]
pub fn logspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    assert!(start > 0.0 && stop > 0.0, "logspace bounds must be positive");
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let log_start = start.log10();
            let log_stop = stop.log10();
            let step = (log_stop - log_start) / (n as Scalar - 1.0);
            (0..n)
                .map(|i| 10f64.powf(log_start + step * i as Scalar))
                .collect()
        }
    }
}

/// σ1/σn of each sample.
#[must_use]
pub fn real_parts(values: impl IntoIterator<Item = CScalar>) -> Vec<Scalar> {
    values.into_iter().map(|v| v.re).collect()
}

/// σ2/σn of each sample.
#[must_use]
pub fn imag_parts(values: impl IntoIterator<Item = CScalar>) -> Vec<Scalar> {
    values.into_iter().map(|v| v.im).collect()
}

/// Loss tangent σ1/σ2 of each sample.
#[must_use]
pub fn loss_tangent(values: impl IntoIterator<Item = CScalar>) -> Vec<Scalar> {
    values.into_iter().map(|v| v.re / v.im).collect()
}

/// Fractional σ2 shift `(σ2 − σ2_ref)/σ2_ref` against the first sample.
///
/// Only the imaginary part is shifted: σ1 vanishes at T = 0, so it has no
/// usable reference.
#[must_use]
pub fn relative_shift(values: &[CScalar]) -> Vec<Scalar> {
    match values.first() {
        None => Vec::new(),
        Some(reference) => values.iter().map(|v| (v.im - reference.im) / reference.im).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn linspace_basic() {
        let v = linspace(0.0, 1.0, 5);
        assert_eq!(v, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(0.3, 1.0, 1), vec![0.3]);
    }

    #[test]
    fn logspace_decades() {
        let v = logspace(1.0e9, 1.0e11, 3);
        assert_relative_eq!(v[0], 1.0e9, max_relative = 1e-12);
        assert_relative_eq!(v[1], 1.0e10, max_relative = 1e-12);
        assert_relative_eq!(v[2], 1.0e11, max_relative = 1e-12);
    }

    #[test]
    #[should_panic(expected = "logspace bounds must be positive")]
    fn logspace_rejects_zero() {
        let _ = logspace(0.0, 1.0, 3);
    }

    #[test]
    fn component_split_and_loss_tangent() {
        let x = vec![CScalar::new(1.0, 4.0), CScalar::new(0.5, 10.0)];
        assert_eq!(real_parts(x.clone()), vec![1.0, 0.5]);
        assert_eq!(imag_parts(x.clone()), vec![4.0, 10.0]);
        let tan = loss_tangent(x);
        assert_relative_eq!(tan[0], 0.25, epsilon = 1e-15);
        assert_relative_eq!(tan[1], 0.05, epsilon = 1e-15);
    }

    #[test]
    fn relative_shift_against_first_sample() {
        // A lossless reference at T = 0 still gives a finite shift.
        let x = [CScalar::new(0.0, 100.0), CScalar::new(2.0, 99.0)];
        let shift = relative_shift(&x);
        assert_eq!(shift[0], 0.0);
        assert_relative_eq!(shift[1], -0.01, epsilon = 1e-15);
        assert!(shift.iter().all(|s| s.is_finite()));
        assert!(relative_shift(&[]).is_empty());
    }
}
