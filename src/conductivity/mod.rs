//! Complex conductivity ratio σ/σn = σ1/σn + iσ2/σn of a superconductor.
//!
//! Two evaluators share the reduced variables and input handling:
//! [`AsymptoticConductivity`] for hf, k_B T ≪ ∆ and
//! [`IntegratedConductivity`] for any temperature with hf < ∆(T).
//! [`Regime`] helps decide between them.

/// Closed-form low-temperature, low-frequency limit.
pub mod asymptotic;
/// Numerically integrated conductivity.
pub mod integrated;
/// Integration kernels in reduced units.
pub mod kernels;
/// Reduced temperature, frequency and energy variables.
pub mod reduced;
/// Validity assessment of an operating point.
pub mod regime;

pub use asymptotic::AsymptoticConductivity;
pub use integrated::IntegratedConductivity;
pub use reduced::ReducedVariables;
pub use regime::{Method, Regime};

use crate::errors::ConductivityError;
use crate::math::Scalar;

pub(crate) fn validate_temperatures(temp: &[Scalar]) -> Result<(), ConductivityError> {
    match temp.iter().find(|t| !(t.is_finite() && **t >= 0.0)) {
        Some(t) => Err(ConductivityError::invalid(format!(
            "temperature must be finite and non-negative, got {t} K"
        ))),
        None => Ok(()),
    }
}

pub(crate) fn validate_frequencies(freq: &[Scalar]) -> Result<(), ConductivityError> {
    match freq.iter().find(|f| !(f.is_finite() && **f > 0.0)) {
        Some(f) => Err(ConductivityError::invalid(format!(
            "frequency must be finite and positive, got {f} Hz"
        ))),
        None => Ok(()),
    }
}

pub(crate) fn validate_gap(delta0: Scalar) -> Result<(), ConductivityError> {
    if delta0.is_finite() && delta0 > 0.0 {
        Ok(())
    } else {
        Err(ConductivityError::invalid(format!(
            "gap energy must be finite and positive, got {delta0} J"
        )))
    }
}
