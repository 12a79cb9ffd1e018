//! Dimensionless variables shared by the conductivity models.

use crate::constants::{photon_energy, thermal_energy};
use crate::math::Scalar;

/// ξ = hf / (2 k_B T).
#[inline]
#[must_use]
pub fn xi(temp: Scalar, freq: Scalar) -> Scalar {
    photon_energy(freq) / (2.0 * thermal_energy(temp))
}

/// η = ∆ / (k_B T).
#[inline]
#[must_use]
pub fn eta(temp: Scalar, delta: Scalar) -> Scalar {
    delta / thermal_energy(temp)
}

/// Reduced temperature and frequency relative to the gap at that temperature.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReducedVariables {
    /// t = k_B T / ∆.
    pub t: Scalar,
    /// w = hf / ∆.
    pub w: Scalar,
}

impl ReducedVariables {
    /// Reduces a temperature (K) and frequency (Hz) by the gap `delta` (J).
    #[must_use]
    pub fn new(temp: Scalar, freq: Scalar, delta: Scalar) -> Self {
        Self {
            t: thermal_energy(temp) / delta,
            w: photon_energy(freq) / delta,
        }
    }

    /// True when hf < ∆ so the tone cannot break Cooper pairs.
    #[must_use]
    pub fn is_subgap(&self) -> bool {
        self.w < 1.0
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::constants::{BOLTZMANN_CONSTANT, PLANCK_CONSTANT};

    #[test]
    fn xi_and_eta_definitions() {
        let delta = 2.0e-23;
        assert_relative_eq!(
            xi(0.1, 1.0e9),
            PLANCK_CONSTANT * 1.0e9 / (2.0 * BOLTZMANN_CONSTANT * 0.1),
            max_relative = 1.0e-15
        );
        assert_relative_eq!(eta(0.1, delta), delta / (BOLTZMANN_CONSTANT * 0.1), max_relative = 1.0e-15);
    }

    #[test]
    fn reduced_variables_and_pair_breaking() {
        let delta = PLANCK_CONSTANT * 1.0e11;
        let v = ReducedVariables::new(0.0, 5.0e10, delta);
        assert_eq!(v.t, 0.0);
        assert_relative_eq!(v.w, 0.5, max_relative = 1.0e-15);
        assert!(v.is_subgap());
        assert!(!ReducedVariables::new(0.0, 1.0e11, delta).is_subgap());
    }
}
