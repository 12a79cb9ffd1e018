//! Adaptive Gauss–Kronrod quadrature on finite and semi-infinite intervals.
//!
//! Global adaptive bisection in the style of QUADPACK's QAG: every
//! subinterval carries a 15-point Kronrod estimate and an error estimate
//! derived from the embedded 7-point Gauss rule; the subinterval with the
//! largest error is bisected until the summed error meets the tolerance.
//! Semi-infinite ranges are folded onto `(0, 1]` with `x = a + (1 − s)/s`.
//! The nodes never touch the interval ends, so integrands may be undefined
//! exactly at an endpoint.
//!
//! # References
//!
//! - Piessens, de Doncker-Kapenga, Überhuber & Kahaner (1983). "QUADPACK:
//!   A Subroutine Package for Automatic Integration". Springer.

use thiserror::Error;

use crate::math::Scalar;

/// Kronrod abscissae on [−1, 1], descending; odd indices are the Gauss nodes.
const XGK: [Scalar; 8] = [
    0.991_455_371_120_812_639_206_854_697_526_329,
    0.949_107_912_342_758_524_526_189_684_047_851,
    0.864_864_423_359_769_072_789_712_788_640_926,
    0.741_531_185_599_394_439_863_864_773_280_788,
    0.586_087_235_467_691_130_294_144_845_693_013,
    0.405_845_151_377_397_166_906_606_412_076_961,
    0.207_784_955_007_898_467_600_689_403_773_245,
    0.0,
];
/// Kronrod weights matching [`XGK`].
const WGK: [Scalar; 8] = [
    0.022_935_322_010_529_224_963_732_008_058_970,
    0.063_092_092_629_978_553_290_700_663_189_204,
    0.104_790_010_322_250_183_839_876_322_541_518,
    0.140_653_259_715_525_918_745_189_590_510_238,
    0.169_004_726_639_267_902_826_583_426_598_550,
    0.190_350_578_064_785_409_913_256_402_421_014,
    0.204_432_940_075_298_892_414_161_999_234_649,
    0.209_482_141_084_727_828_012_999_174_891_714,
];
/// 7-point Gauss weights for `XGK[1]`, `XGK[3]`, `XGK[5]` and the centre.
const WG: [Scalar; 4] = [
    0.129_484_966_168_869_693_270_611_432_679_082,
    0.279_705_391_489_276_667_901_467_771_423_780,
    0.381_830_050_505_118_944_950_369_775_488_975,
    0.417_959_183_673_469_387_755_102_040_816_327,
];

/// Tolerances and work limits for adaptive integration.
///
/// Convergence is declared once the summed error estimate falls below
/// `max(abs_tol, rel_tol · |value|)`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadratureConfig {
    /// Absolute error tolerance.
    pub abs_tol: Scalar,
    /// Relative error tolerance.
    pub rel_tol: Scalar,
    /// Maximum number of subintervals kept by the adaptive scheme.
    pub max_subdivisions: usize,
}

impl Default for QuadratureConfig {
    fn default() -> Self {
        Self {
            abs_tol: 0.0,
            rel_tol: 1.0e-10,
            max_subdivisions: 500,
        }
    }
}

impl QuadratureConfig {
    /// Creates a configuration from explicit tolerances.
    #[must_use]
    pub const fn new(abs_tol: Scalar, rel_tol: Scalar, max_subdivisions: usize) -> Self {
        Self {
            abs_tol,
            rel_tol,
            max_subdivisions,
        }
    }

    /// Replaces the absolute tolerance.
    #[must_use]
    pub const fn with_abs_tol(mut self, abs_tol: Scalar) -> Self {
        self.abs_tol = abs_tol;
        self
    }

    /// Replaces the relative tolerance.
    #[must_use]
    pub const fn with_rel_tol(mut self, rel_tol: Scalar) -> Self {
        self.rel_tol = rel_tol;
        self
    }

    /// Replaces the subdivision limit.
    #[must_use]
    pub const fn with_max_subdivisions(mut self, max_subdivisions: usize) -> Self {
        self.max_subdivisions = max_subdivisions;
        self
    }

    fn tolerance(&self, value: Scalar) -> Scalar {
        self.abs_tol.max(self.rel_tol * value.abs())
    }
}

/// Converged integral with diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadratureResult {
    /// Integral estimate.
    pub value: Scalar,
    /// Estimated absolute error.
    pub abs_error: Scalar,
    /// Number of integrand evaluations.
    pub evaluations: usize,
    /// Number of subintervals in the final partition.
    pub subdivisions: usize,
}

/// Failures of the adaptive integrator.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum QuadratureError {
    /// The subdivision budget ran out before the tolerance was met.
    #[error("tolerance not met after {subdivisions} subdivisions (value {value:e}, estimated error {abs_error:.2e})")]
    MaxSubdivisions {
        /// Best integral estimate reached.
        value: Scalar,
        /// Error estimate of `value`.
        abs_error: Scalar,
        /// Subintervals in use when the budget ran out.
        subdivisions: usize,
    },
    /// A subinterval became too narrow to bisect in floating point.
    #[error("roundoff limits subdivision near x = {x:e} (value {value:e}, estimated error {abs_error:.2e})")]
    Roundoff {
        /// Location of the unresolvable subinterval.
        x: Scalar,
        /// Best integral estimate reached.
        value: Scalar,
        /// Error estimate of `value`.
        abs_error: Scalar,
    },
    /// The integrand returned NaN or an infinity.
    #[error("integrand is non-finite at x = {x:e}")]
    NonFinite {
        /// Abscissa of the offending evaluation.
        x: Scalar,
    },
    /// The bounds are not finite or not ordered.
    #[error("invalid integration interval [{a}, {b}]")]
    InvalidInterval {
        /// Lower bound.
        a: Scalar,
        /// Upper bound.
        b: Scalar,
    },
}

impl QuadratureError {
    /// Partial result `(value, abs_error)` when the integrator stopped early.
    #[must_use]
    pub const fn partial(&self) -> Option<(Scalar, Scalar)> {
        match *self {
            Self::MaxSubdivisions {
                value, abs_error, ..
            }
            | Self::Roundoff {
                value, abs_error, ..
            } => Some((value, abs_error)),
            Self::NonFinite { .. } | Self::InvalidInterval { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Segment {
    a: Scalar,
    b: Scalar,
    value: Scalar,
    error: Scalar,
}

/// Adaptive 7/15-point Gauss–Kronrod integrator.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GaussKronrod {
    config: QuadratureConfig,
}

impl GaussKronrod {
    /// Creates an integrator with the given tolerances.
    #[must_use]
    pub const fn new(config: QuadratureConfig) -> Self {
        Self { config }
    }

    /// Active tolerances.
    #[must_use]
    pub const fn config(&self) -> &QuadratureConfig {
        &self.config
    }

    /// Integrates `f` over the finite interval `[a, b]`.
    ///
    /// # Errors
    ///
    /// Returns [`QuadratureError`] for invalid bounds, non-finite integrand
    /// values, or when the tolerance cannot be met within the subdivision
    /// budget (the latter carrying the partial result).
    pub fn integrate<F>(&self, f: F, a: Scalar, b: Scalar) -> Result<QuadratureResult, QuadratureError>
    where
        F: Fn(Scalar) -> Scalar,
    {
        if !(a.is_finite() && b.is_finite()) || a > b {
            return Err(QuadratureError::InvalidInterval { a, b });
        }
        if a == b {
            return Ok(QuadratureResult {
                value: 0.0,
                abs_error: 0.0,
                evaluations: 0,
                subdivisions: 0,
            });
        }

        let mut segments = vec![kronrod15(&f, a, b)?];
        let mut evaluations = 15;
        loop {
            let value: Scalar = segments.iter().map(|s| s.value).sum();
            let abs_error: Scalar = segments.iter().map(|s| s.error).sum();
            if abs_error <= self.config.tolerance(value) {
                return Ok(QuadratureResult {
                    value,
                    abs_error,
                    evaluations,
                    subdivisions: segments.len(),
                });
            }
            if segments.len() >= self.config.max_subdivisions {
                return Err(QuadratureError::MaxSubdivisions {
                    value,
                    abs_error,
                    subdivisions: segments.len(),
                });
            }

            let worst = segments
                .iter()
                .enumerate()
                .max_by(|(_, l), (_, r)| l.error.total_cmp(&r.error))
                .map_or(0, |(idx, _)| idx);
            let segment = segments.swap_remove(worst);
            let mid = 0.5 * (segment.a + segment.b);
            if !(segment.a < mid && mid < segment.b) {
                return Err(QuadratureError::Roundoff {
                    x: mid,
                    value,
                    abs_error,
                });
            }
            segments.push(kronrod15(&f, segment.a, mid)?);
            segments.push(kronrod15(&f, mid, segment.b)?);
            evaluations += 30;
        }
    }

    /// Integrates `f` over `[a, ∞)`.
    ///
    /// The integrand must decay fast enough for the integral to exist; a
    /// value of exactly zero far out is treated as zero regardless of the
    /// Jacobian of the mapping.
    ///
    /// # Errors
    ///
    /// As [`GaussKronrod::integrate`]; a non-finite `a` is an invalid interval.
    pub fn integrate_to_infinity<F>(&self, f: F, a: Scalar) -> Result<QuadratureResult, QuadratureError>
    where
        F: Fn(Scalar) -> Scalar,
    {
        if !a.is_finite() {
            return Err(QuadratureError::InvalidInterval {
                a,
                b: Scalar::INFINITY,
            });
        }
        let folded = |s: Scalar| {
            let fx = f(a + (1.0 - s) / s);
            if fx == 0.0 {
                0.0
            } else {
                fx / (s * s)
            }
        };
        self.integrate(folded, 0.0, 1.0)
            .map_err(|err| match err {
                QuadratureError::NonFinite { x } => QuadratureError::NonFinite {
                    x: a + (1.0 - x) / x,
                },
                QuadratureError::Roundoff {
                    x,
                    value,
                    abs_error,
                } => QuadratureError::Roundoff {
                    x: a + (1.0 - x) / x,
                    value,
                    abs_error,
                },
                other => other,
            })
    }
}

/// One 15-point Kronrod panel with the QUADPACK error heuristic.
fn kronrod15<F>(f: &F, a: Scalar, b: Scalar) -> Result<Segment, QuadratureError>
where
    F: Fn(Scalar) -> Scalar,
{
    let eval = |x: Scalar| {
        let fx = f(x);
        if fx.is_finite() {
            Ok(fx)
        } else {
            Err(QuadratureError::NonFinite { x })
        }
    };

    let centre = 0.5 * (a + b);
    let half = 0.5 * (b - a);
    let f_centre = eval(centre)?;

    let mut res_gauss = f_centre * WG[3];
    let mut res_kronrod = f_centre * WGK[7];
    let mut res_abs = res_kronrod.abs();
    let mut lower = [0.0; 7];
    let mut upper = [0.0; 7];
    for j in 0..7 {
        let offset = half * XGK[j];
        let f1 = eval(centre - offset)?;
        let f2 = eval(centre + offset)?;
        lower[j] = f1;
        upper[j] = f2;
        res_kronrod += WGK[j] * (f1 + f2);
        res_abs += WGK[j] * (f1.abs() + f2.abs());
        if j % 2 == 1 {
            res_gauss += WG[j / 2] * (f1 + f2);
        }
    }

    let mean = 0.5 * res_kronrod;
    let mut res_asc = WGK[7] * (f_centre - mean).abs();
    for j in 0..7 {
        res_asc += WGK[j] * ((lower[j] - mean).abs() + (upper[j] - mean).abs());
    }

    let value = res_kronrod * half;
    let res_abs = res_abs * half.abs();
    let res_asc = res_asc * half.abs();
    let mut error = ((res_kronrod - res_gauss) * half).abs();
    if res_asc != 0.0 && error != 0.0 {
        error = res_asc * (200.0 * error / res_asc).powf(1.5).min(1.0);
    }
    if res_abs > Scalar::MIN_POSITIVE / (50.0 * Scalar::EPSILON) {
        error = error.max(50.0 * Scalar::EPSILON * res_abs);
    }

    Ok(Segment { a, b, value, error })
}
