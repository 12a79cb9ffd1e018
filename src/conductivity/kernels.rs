//! Mattis–Bardeen integration kernels in reduced units.
//!
//! `e = E/∆`, `t = k_B T/∆`, `w = hf/∆` with `0 < w < 1`. The plain kernels
//! carry inverse square-root singularities at the ends of their ranges
//! (`e = 1` for σ1; `e = 1 − w` and `e = 1` for σ2). The `*_integrand`
//! forms absorb them into a change of variables:
//!
//! - σ1: `e = cosh u`, `u ∈ [0, ∞)`, so `de/sqrt(e² − 1) = du`;
//! - σ2: `e = 1 − w/2 − (w/2)·cos θ`, `θ ∈ [0, π]`, so
//!   `de / sqrt((1 − e)(e − 1 + w)) = dθ`.
//!
//! Both substituted integrands are smooth and bounded on their ranges.

use crate::math::Scalar;
use crate::statistics::{fermi, fermi_difference};

/// Kernel of σ1/σn, integrated over `e ∈ [1, ∞)`.
#[must_use]
pub fn sigma1_kernel(e: Scalar, t: Scalar, w: Scalar) -> Scalar {
    let occupation = fermi_difference(e, w, t);
    if occupation == 0.0 {
        return 0.0;
    }
    2.0 * occupation * (e * e + w * e + 1.0)
        / (w * (e * e - 1.0).sqrt() * ((e + w) * (e + w) - 1.0).sqrt())
}

/// Kernel of σ2/σn, integrated over `e ∈ [1 − w, 1]`.
#[must_use]
pub fn sigma2_kernel(e: Scalar, t: Scalar, w: Scalar) -> Scalar {
    (1.0 - 2.0 * fermi(e + w, t)) * (e * e + w * e + 1.0)
        / (w * (1.0 - e * e).sqrt() * ((e + w) * (e + w) - 1.0).sqrt())
}

/// `sigma1_kernel(cosh u)·sinh u`, integrated over `u ∈ [0, ∞)`.
#[must_use]
pub fn sigma1_integrand(u: Scalar, t: Scalar, w: Scalar) -> Scalar {
    sigma1_integrand_with(&fermi_difference, u, t, w)
}

/// `sigma2_kernel(e(θ))·e'(θ)` with `e(θ) = 1 − w/2 − (w/2)·cos θ`, over `θ ∈ [0, π]`.
#[must_use]
pub fn sigma2_integrand(theta: Scalar, t: Scalar, w: Scalar) -> Scalar {
    sigma2_integrand_with(&fermi, theta, t, w)
}

pub(crate) fn sigma1_integrand_with<F>(occupation_difference: &F, u: Scalar, t: Scalar, w: Scalar) -> Scalar
where
    F: Fn(Scalar, Scalar, Scalar) -> Scalar + ?Sized,
{
    let e = u.cosh();
    let difference = occupation_difference(e, w, t);
    if difference == 0.0 {
        return 0.0;
    }
    // e − 1 = 2·sinh²(u/2) keeps (e + w)² − 1 accurate near u = 0.
    let half = (0.5 * u).sinh();
    let e_minus_one = 2.0 * half * half;
    2.0 * difference * (e * e + w * e + 1.0) / (w * ((e_minus_one + w) * (e + 1.0 + w)).sqrt())
}

pub(crate) fn sigma2_integrand_with<F>(occupation: &F, theta: Scalar, t: Scalar, w: Scalar) -> Scalar
where
    F: Fn(Scalar, Scalar) -> Scalar + ?Sized,
{
    let e = 1.0 - 0.5 * w * (1.0 + theta.cos());
    (1.0 - 2.0 * occupation(e + w, t)) * (e * e + w * e + 1.0) / (w * ((1.0 + e) * (e + w + 1.0)).sqrt())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn sigma1_substitution_matches_kernel() {
        let (t, w) = (0.2, 0.1);
        for &u in &[0.3, 0.7, 1.5, 3.0] {
            let e = Scalar::cosh(u);
            assert_relative_eq!(
                sigma1_integrand(u, t, w),
                sigma1_kernel(e, t, w) * u.sinh(),
                max_relative = 1.0e-12
            );
        }
    }

    #[test]
    fn sigma2_substitution_matches_kernel() {
        let (t, w) = (0.2, 0.3);
        for &theta in &[0.4, 1.1, 2.0, 2.9] {
            let e = 1.0 - 0.5 * w - 0.5 * w * Scalar::cos(theta);
            let jacobian = 0.5 * w * theta.sin();
            assert_relative_eq!(
                sigma2_integrand(theta, t, w),
                sigma2_kernel(e, t, w) * jacobian,
                max_relative = 1.0e-10
            );
        }
    }

    #[test]
    fn kernels_are_singular_at_their_edges() {
        assert!(sigma1_kernel(1.0, 0.2, 0.1).is_infinite());
        assert!(sigma2_kernel(1.0, 0.2, 0.1).is_infinite());
        assert!(sigma2_kernel(0.9, 0.2, 0.1).is_infinite());
    }

    #[test]
    fn substituted_integrands_are_finite_at_their_edges() {
        let (t, w) = (0.1, 0.05);
        assert!(sigma1_integrand(0.0, t, w).is_finite());
        assert!(sigma1_integrand(0.0, t, w) > 0.0);
        assert!(sigma2_integrand(0.0, t, w).is_finite());
        assert!(sigma2_integrand(std::f64::consts::PI, t, w).is_finite());
    }

    #[test]
    fn far_tail_of_sigma1_vanishes_without_overflow() {
        assert_eq!(sigma1_integrand(800.0, 0.3, 0.2), 0.0);
        assert_eq!(sigma1_kernel(Scalar::INFINITY, 0.3, 0.2), 0.0);
    }

    #[test]
    fn sigma1_integrand_is_smooth_at_tiny_frequency() {
        // diff/w tends to f(e)(1 − f(e))/t, so the integrand has a finite w → 0 limit.
        let (t, w) = (0.3, 1.0e-9);
        let u: Scalar = 1.0;
        let e = u.cosh();
        let f = fermi(e, t);
        let limit = 2.0 * f * (1.0 - f) / t * (e * e + 1.0) / ((e - 1.0) * (e + 1.0)).sqrt();
        assert_relative_eq!(sigma1_integrand(u, t, w), limit, max_relative = 1.0e-8);
        let neighbours = [0.999_999, 1.000_001].map(|u| sigma1_integrand(u, t, w));
        assert!(neighbours.iter().all(|v| (v / limit - 1.0).abs() < 1.0e-5));
    }

    #[test]
    fn zero_temperature_kernels() {
        assert_eq!(sigma1_integrand(0.5, 0.0, 0.2), 0.0);
        // At t = 0 the σ2 integrand at θ = π/2 reduces to the geometric factor.
        let w: Scalar = 0.2;
        let e = 1.0 - 0.5 * w;
        let expected = (e * e + w * e + 1.0) / (w * ((1.0 + e) * (e + w + 1.0)).sqrt());
        assert_relative_eq!(
            sigma2_integrand(std::f64::consts::FRAC_PI_2, 0.0, w),
            expected,
            max_relative = 1.0e-15
        );
    }
}
