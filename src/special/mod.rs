//! Numeric primitives consumed by the conductivity models.
//!
//! The models never call the special functions, the occupation statistics,
//! the gap model or the integrator directly; they go through
//! [`NumericPrimitives`], so a reference or mock backend can be substituted.

/// Modified Bessel functions I0 and K0.
pub mod bessel;
/// Adaptive Gauss–Kronrod quadrature.
pub mod quadrature;
/// Bracketing root finder.
pub mod roots;

use crate::gap::reduced_delta_bcs;
use crate::math::Scalar;
use crate::statistics::{fermi, fermi_difference};

use quadrature::{GaussKronrod, QuadratureConfig, QuadratureError, QuadratureResult};

/// Narrow interface to the numerical collaborators of the conductivity models.
///
/// Every method has a default backed by this crate's own implementations;
/// implementors override only what they want to replace.
pub trait NumericPrimitives: Sync {
    /// Exponentially scaled modified Bessel function `exp(−|x|)·I0(x)`.
    fn bessel_i0e(&self, x: Scalar) -> Scalar {
        bessel::i0e(x)
    }

    /// Exponentially scaled modified Bessel function `exp(x)·K0(x)`.
    fn bessel_k0e(&self, x: Scalar) -> Scalar {
        bessel::k0e(x)
    }

    /// Fermi–Dirac occupation at reduced energy `e` and reduced temperature `t`.
    fn fermi(&self, e: Scalar, t: Scalar) -> Scalar {
        fermi(e, t)
    }

    /// Occupation difference `f(e) − f(e + de)` at reduced temperature `t`.
    ///
    /// Overriding [`NumericPrimitives::fermi`] alone does not change this;
    /// the default is the cancellation-free form for the Fermi function.
    fn fermi_difference(&self, e: Scalar, de: Scalar, t: Scalar) -> Scalar {
        fermi_difference(e, de, t)
    }

    /// Reduced gap `∆(T)/∆₀` at reduced temperature `t = T/T_c`.
    ///
    /// The default follows the weak-coupling BCS curve, where the ratio
    /// ∆₀/(k_B T_c) only rescales the temperature axis and so is already
    /// folded into `t`; strong-coupling backends may use `bcs` directly.
    ///
    /// # Errors
    ///
    /// Returns [`QuadratureError`] when the underlying integral fails.
    fn reduced_gap(&self, t: Scalar, _bcs: Scalar, config: &QuadratureConfig) -> Result<Scalar, QuadratureError> {
        reduced_delta_bcs(t, config)
    }

    /// Integrates `f` over the finite interval `[a, b]`.
    ///
    /// # Errors
    ///
    /// Returns [`QuadratureError`] when the tolerance cannot be met.
    fn integrate(
        &self,
        f: &dyn Fn(Scalar) -> Scalar,
        a: Scalar,
        b: Scalar,
        config: &QuadratureConfig,
    ) -> Result<QuadratureResult, QuadratureError> {
        GaussKronrod::new(*config).integrate(f, a, b)
    }

    /// Integrates `f` over `[a, ∞)`.
    ///
    /// # Errors
    ///
    /// Returns [`QuadratureError`] when the tolerance cannot be met.
    fn integrate_to_infinity(
        &self,
        f: &dyn Fn(Scalar) -> Scalar,
        a: Scalar,
        config: &QuadratureConfig,
    ) -> Result<QuadratureResult, QuadratureError> {
        GaussKronrod::new(*config).integrate_to_infinity(f, a)
    }
}

/// Default backend built on the crate's own special functions and integrator.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardPrimitives;

impl NumericPrimitives for StandardPrimitives {}
