//! Modified Bessel functions of order zero.
//!
//! `I0` uses its power series up to [`I0_SERIES_LIMIT`] and the Hankel
//! asymptotic expansion above it. `K0` uses the logarithmic series for
//! `x ≤ 2` and the trapezoidal rule on `K0(x) = ∫₀^∞ exp(−x·cosh t) dt`
//! above, which converges exponentially because the integrand is entire.
//! All four functions are accurate to a few ulp over their domain.
//!
//! # References
//!
//! - Abramowitz & Stegun (1964), §9.6 and §9.7.
//! - Trefethen & Weideman (2014). "The exponentially convergent trapezoidal
//!   rule". SIAM Review 56(3), 385-458.

use std::f64::consts::PI;

use crate::constants::EULER_GAMMA;
use crate::math::Scalar;

/// Switch-over point between the I0 power series and its asymptotic expansion.
const I0_SERIES_LIMIT: Scalar = 30.0;
/// Switch-over point between the K0 series and the trapezoidal integral.
const K0_SERIES_LIMIT: Scalar = 2.0;

/// Modified Bessel function of the first kind, order zero.
#[must_use]
pub fn i0(x: Scalar) -> Scalar {
    let x = x.abs();
    if x == Scalar::INFINITY {
        return Scalar::INFINITY;
    }
    if x <= I0_SERIES_LIMIT {
        i0_series(x)
    } else {
        i0e_asymptotic(x) * x.exp()
    }
}

/// Exponentially scaled `I0`: `exp(−|x|)·I0(x)`.
#[must_use]
pub fn i0e(x: Scalar) -> Scalar {
    let x = x.abs();
    if x <= I0_SERIES_LIMIT {
        i0_series(x) * (-x).exp()
    } else {
        i0e_asymptotic(x)
    }
}

/// Modified Bessel function of the second kind, order zero.
///
/// Returns `+∞` at zero, zero at `+∞` and NaN for negative or NaN arguments.
#[must_use]
pub fn k0(x: Scalar) -> Scalar {
    if x.is_nan() || x < 0.0 {
        return Scalar::NAN;
    }
    if x == 0.0 {
        return Scalar::INFINITY;
    }
    if x == Scalar::INFINITY {
        return 0.0;
    }
    if x <= K0_SERIES_LIMIT {
        k0_series(x)
    } else {
        k0e_trapezoid(x) * (-x).exp()
    }
}

/// Exponentially scaled `K0`: `exp(x)·K0(x)`.
///
/// Returns `+∞` at zero, zero at `+∞` and NaN for negative or NaN arguments.
#[must_use]
pub fn k0e(x: Scalar) -> Scalar {
    if x.is_nan() || x < 0.0 {
        return Scalar::NAN;
    }
    if x == 0.0 {
        return Scalar::INFINITY;
    }
    if x == Scalar::INFINITY {
        return 0.0;
    }
    if x <= K0_SERIES_LIMIT {
        k0_series(x) * x.exp()
    } else {
        k0e_trapezoid(x)
    }
}

/// Σ (x²/4)ᵏ / (k!)², all terms positive.
fn i0_series(x: Scalar) -> Scalar {
    let q = 0.25 * x * x;
    let mut term = 1.0;
    let mut sum = 1.0;
    let mut k = 0.0;
    loop {
        k += 1.0;
        term *= q / (k * k);
        sum += term;
        if term <= Scalar::EPSILON * sum {
            return sum;
        }
    }
}

/// e^(−x)·I0(x) ≈ (2πx)^(−1/2) Σ [(2k−1)!!]² / (k!·(8x)ᵏ).
fn i0e_asymptotic(x: Scalar) -> Scalar {
    let mut term = 1.0;
    let mut sum = 1.0;
    for k in 1..=80 {
        let k = Scalar::from(k);
        let odd = 2.0 * k - 1.0;
        term *= odd * odd / (8.0 * k * x);
        sum += term;
        if term <= Scalar::EPSILON * sum {
            break;
        }
    }
    sum / (2.0 * PI * x).sqrt()
}

/// K0(x) = −(ln(x/2) + γ)·I0(x) + Σ (x²/4)ᵏ/(k!)²·Hₖ.
fn k0_series(x: Scalar) -> Scalar {
    let q = 0.25 * x * x;
    let lead = -((0.5 * x).ln() + EULER_GAMMA) * i0_series(x);
    let mut term = 1.0;
    let mut harmonic = 0.0;
    let mut sum = 0.0;
    let mut k = 0.0;
    loop {
        k += 1.0;
        term *= q / (k * k);
        harmonic += 1.0 / k;
        let contribution = term * harmonic;
        sum += contribution;
        if contribution <= Scalar::EPSILON * sum {
            return lead + sum;
        }
    }
}

/// e^x·K0(x) = ∫₀^∞ exp(−2x·sinh²(t/2)) dt by the trapezoidal rule.
///
/// The step shrinks as x^(−1/2) so the peak at t = 0 stays resolved.
fn k0e_trapezoid(x: Scalar) -> Scalar {
    let h = (0.5 / x.sqrt()).min(0.125);
    let mut sum = 0.5;
    let mut j = 0.0;
    loop {
        j += 1.0;
        let s = (0.5 * j * h).sinh();
        let value = (-2.0 * x * s * s).exp();
        sum += value;
        if value <= 1.0e-2 * Scalar::EPSILON * sum {
            return h * sum;
        }
    }
}
