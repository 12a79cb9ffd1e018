//! Closed-form Mattis–Bardeen conductivity for hf ≪ ∆ and k_B T ≪ ∆.
//!
//! With ξ = hf/(2k_B T) and η = ∆₁/(k_B T), for a complex gap ∆₀ = ∆₁ + i∆₂:
//!
//! ```text
//! σ1/σn = 4∆₁/(hf)·e^(−η)·sinh(ξ)·K0(ξ) + π∆₂/(hf)·(1 + 2∆₁/(k_B T)·e^(−η)·e^(−ξ)·I0(ξ))
//! σ2/σn = π∆₁/(hf)·(1 − sqrt(2π/η)·e^(−η) − 2·e^(−η)·e^(−ξ)·I0(ξ))
//! ```
//!
//! and at T = 0 simply `σ1/σn = π∆₂/(hf)`, `σ2/σn = π∆₁/(hf)`. The real part
//! of the gap follows the low-temperature expansion of the BCS gap; the
//! imaginary part is temperature independent.
//!
//! The imaginary part of `delta0` is used as given. Earlier formulations took
//! the imaginary part of `Re(∆₀)`, which is always zero and silently dropped
//! the loss term; results for a purely real gap are unchanged.
//!
//! # References
//!
//! - Gao, J. (2008). The Physics of Superconducting Microwave Resonators.
//!   PhD thesis, Caltech, eq. 2.53.
//! - Noguchi, T. et al. (2012). Physics Procedia 36; (2018) IEEE Trans.
//!   Appl. Supercond. 28(4).

use std::f64::consts::PI;

use crate::constants::{photon_energy, thermal_energy};
use crate::errors::ConductivityError;
use crate::math::{broadcast, CScalar, Samples, Scalar};
use crate::special::{NumericPrimitives, StandardPrimitives};

use super::reduced::{eta, xi};
use super::{validate_frequencies, validate_temperatures};

/// Closed-form evaluator valid deep below the gap in energy and temperature.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AsymptoticConductivity<P = StandardPrimitives> {
    primitives: P,
}

impl AsymptoticConductivity {
    /// Creates an evaluator backed by the crate's own Bessel functions.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            primitives: StandardPrimitives,
        }
    }
}

impl<P: NumericPrimitives> AsymptoticConductivity<P> {
    /// Creates an evaluator backed by custom numeric primitives.
    #[must_use]
    pub const fn with_primitives(primitives: P) -> Self {
        Self { primitives }
    }

    /// Complex conductivity ratio σ/σn at each broadcast (temperature, frequency) pair.
    ///
    /// `temp` in kelvin (≥ 0; exactly 0 selects the zero-temperature limit),
    /// `freq` in hertz (> 0), `delta0` in joules with a positive real part.
    ///
    /// # Errors
    ///
    /// [`ConductivityError::InvalidArgument`] for out-of-domain inputs and
    /// [`ConductivityError::IncompatibleShapes`] for non-broadcastable arrays.
    pub fn evaluate(
        &self,
        temp: impl Samples,
        freq: impl Samples,
        delta0: impl Into<CScalar>,
    ) -> Result<Vec<CScalar>, ConductivityError> {
        let delta0 = delta0.into();
        let (delta1, delta2) = (delta0.re, delta0.im);
        if !(delta1.is_finite() && delta1 > 0.0 && delta2.is_finite()) {
            return Err(ConductivityError::invalid(format!(
                "gap energy must have a finite positive real part, got {delta0}"
            )));
        }
        let temp = temp.as_samples();
        let freq = freq.as_samples();
        validate_temperatures(temp)?;
        validate_frequencies(freq)?;
        let (temp, freq) = broadcast(temp, freq)?;

        log::debug!(
            "asymptotic conductivity: {} samples, delta0 = {delta0:e} J",
            temp.len()
        );
        if temp
            .iter()
            .zip(freq.iter())
            .any(|(&t, &f)| thermal_energy(t) >= delta1 || photon_energy(f) >= delta1)
        {
            log::warn!("asymptotic conductivity evaluated with hf or kT above the gap; results are outside the model's validity");
        }

        Ok(temp
            .iter()
            .zip(freq.iter())
            .map(|(&t, &f)| self.sample(t, f, delta1, delta2))
            .collect())
    }

    fn sample(&self, temp: Scalar, freq: Scalar, delta1: Scalar, delta2: Scalar) -> CScalar {
        let hf = photon_energy(freq);
        let zero_temperature = CScalar::new(PI * delta2 / hf, PI * delta1 / hf);
        let kt = thermal_energy(temp);
        if kt == 0.0 {
            return zero_temperature;
        }

        let eta = eta(temp, delta1);
        let decay = (-eta).exp();
        // Every thermal term carries e^(−η).
        if decay == 0.0 {
            return zero_temperature;
        }
        let xi = xi(temp, freq);
        // e^(−ξ)·I0(ξ) and sinh(ξ)·K0(ξ) = (1 − e^(−2ξ))/2 · e^ξ·K0(ξ).
        let i0_scaled = self.primitives.bessel_i0e(xi);
        let sinh_k0 = -0.5 * (-2.0 * xi).exp_m1() * self.primitives.bessel_k0e(xi);

        let sigma1 = 4.0 * delta1 / hf * decay * sinh_k0
            + PI * delta2 / hf * (1.0 + 2.0 * delta1 / kt * decay * i0_scaled);
        let sigma2 = PI * delta1 / hf
            * (1.0 - (2.0 * PI / eta).sqrt() * decay - 2.0 * decay * i0_scaled);
        CScalar::new(sigma1, sigma2)
    }
}
