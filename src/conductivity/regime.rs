//! Which conductivity model applies at a given operating point.

use crate::constants::{photon_energy, thermal_energy};
use crate::math::Scalar;

/// Ratio below which hf/∆₀ and k_B T/∆₀ count as small for [`Regime::recommend`].
pub const ASYMPTOTIC_LIMIT: Scalar = 0.1;

/// Evaluation method for the conductivity ratio.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Closed form, see [`super::AsymptoticConductivity`].
    Asymptotic,
    /// Numerical integration, see [`super::IntegratedConductivity`].
    Integrated,
}

/// Photon and thermal energies of one operating point relative to the gap.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Regime {
    /// hf / ∆₀.
    pub photon_ratio: Scalar,
    /// k_B T / ∆₀.
    pub thermal_ratio: Scalar,
}

impl Regime {
    /// Ratios for temperature `temp` (K), frequency `freq` (Hz) and gap `delta0` (J).
    #[must_use]
    pub fn assess(temp: Scalar, freq: Scalar, delta0: Scalar) -> Self {
        Self {
            photon_ratio: photon_energy(freq) / delta0,
            thermal_ratio: thermal_energy(temp) / delta0,
        }
    }

    /// Both ratios are below `limit`.
    #[must_use]
    pub fn supports_asymptotic(&self, limit: Scalar) -> bool {
        self.photon_ratio < limit && self.thermal_ratio < limit
    }

    /// The tone cannot break Cooper pairs.
    ///
    /// Only a necessary condition: ∆(T) shrinks with temperature, so the
    /// integrated model may still reject the point close to T_c.
    #[must_use]
    pub fn supports_integrated(&self) -> bool {
        self.photon_ratio < 1.0
    }

    /// Cheapest method valid at this point, if any.
    #[must_use]
    pub fn recommend(&self) -> Option<Method> {
        if self.supports_asymptotic(ASYMPTOTIC_LIMIT) {
            Some(Method::Asymptotic)
        } else if self.supports_integrated() {
            Some(Method::Integrated)
        } else {
            None
        }
    }
}
