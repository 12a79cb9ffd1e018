//! Baseline physical constants and energy-scale helpers.
//!
//! ## Accuracy
//!
//! The Planck and Boltzmann constants are exact by SI definition (2019
//! revision), so every reduced variable built from them carries only the
//! rounding of the `f64` arithmetic.
//!
//! ## References
//!
//! - NIST Reference on Constants, Units, and Uncertainty: <https://physics.nist.gov/cuu/Constants/>
//! - Mohr, P. J., Newell, D. B., Taylor, B. N., & Tiesinga, E. (2019). CODATA Recommended Values of the Fundamental Physical Constants: 2018.
//! - Bardeen, J., Cooper, L. N., & Schrieffer, J. R. (1957). Theory of Superconductivity. Phys. Rev. 108, 1175.

use std::f64::consts::PI;

use crate::math::Scalar;

/// Planck constant _h_ in joule seconds (J·s).
/// Exact value by 2019 SI definition: 6.62607015 × 10⁻³⁴ J·s.
pub const PLANCK_CONSTANT: Scalar = 6.626_070_15e-34;
/// Boltzmann constant _k_B_ in joules per kelvin (J/K).
/// Exact value by 2019 SI definition: 1.380649 × 10⁻²³ J/K.
pub const BOLTZMANN_CONSTANT: Scalar = 1.380_649e-23;
/// Euler–Mascheroni constant γ.
pub const EULER_GAMMA: Scalar = 0.577_215_664_901_532_9;
/// Default BCS ratio ∆₀ / (k_B T_c) used throughout the crate.
///
/// The customary rounded weak-coupling value; see [`bcs_weak_coupling`] for
/// the exact π·e^(−γ).
pub const BCS_CONSTANT: Scalar = 1.764;

/// Exact weak-coupling BCS ratio π·e^(−γ) ≈ 1.763 877.
#[inline]
#[must_use]
pub fn bcs_weak_coupling() -> Scalar {
    PI * (-EULER_GAMMA).exp()
}

/// Photon energy _hf_ in joules for a linear frequency `hz`.
#[inline]
#[must_use]
pub fn photon_energy(hz: Scalar) -> Scalar {
    PLANCK_CONSTANT * hz
}

/// Thermal energy _k_B T_ in joules for a temperature in kelvin.
#[inline]
#[must_use]
pub fn thermal_energy(kelvin: Scalar) -> Scalar {
    BOLTZMANN_CONSTANT * kelvin
}

/// Zero-temperature gap ∆₀ = bcs · k_B · T_c in joules.
#[inline]
#[must_use]
pub fn gap_from_critical_temperature(tc_kelvin: Scalar, bcs: Scalar) -> Scalar {
    bcs * thermal_energy(tc_kelvin)
}

/// Critical temperature T_c = ∆₀ / (bcs · k_B) in kelvin.
#[inline]
#[must_use]
pub fn critical_temperature(delta0: Scalar, bcs: Scalar) -> Scalar {
    delta0 / (bcs * BOLTZMANN_CONSTANT)
}
