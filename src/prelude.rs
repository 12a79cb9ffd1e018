//! Convenience re-exports for conductivity calculations.

pub use crate::conductivity::{
    kernels::{sigma1_kernel, sigma2_kernel},
    AsymptoticConductivity, IntegratedConductivity, Method, ReducedVariables, Regime,
};
pub use crate::constants::*;
pub use crate::errors::ConductivityError;
pub use crate::gap::{delta_bcs, reduced_delta_bcs};
pub use crate::math::{CScalar, Samples, Scalar};
pub use crate::special::quadrature::{GaussKronrod, QuadratureConfig, QuadratureError};
pub use crate::special::{NumericPrimitives, StandardPrimitives};
pub use crate::statistics::{fermi, fermi_difference};
pub use crate::sweep::{imag_parts, linspace, logspace, loss_tangent, real_parts, relative_shift};
