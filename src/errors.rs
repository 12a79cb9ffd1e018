//! Shared error types used across submodules.

use thiserror::Error;

use crate::special::quadrature::QuadratureError;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum ConductivityError {
    /// Raised when an input value is outside its physical or validity domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Raised when temperature and frequency arrays cannot be broadcast together.
    #[error("incompatible array sizes: {temperature} temperatures and {frequency} frequencies")]
    IncompatibleShapes {
        /// Number of temperature samples.
        temperature: usize,
        /// Number of frequency samples.
        frequency: usize,
    },
    /// Raised when numerical integration fails for one sample.
    #[error("integration failed for sample {index}: {source}")]
    IntegrationFailure {
        /// Index of the offending sample in the broadcast input.
        index: usize,
        /// Underlying quadrature failure, carrying any partial result.
        #[source]
        source: QuadratureError,
    },
}

impl ConductivityError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
