#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Fundamental physical constants and BCS ratios.
pub mod constants;
/// Shared numeric aliases and array broadcasting.
pub mod math;
/// Special functions, quadrature and root finding.
pub mod special;
/// Fermi–Dirac occupation.
pub mod statistics;
/// Temperature dependence of the BCS gap.
pub mod gap;
/// Mattis–Bardeen complex conductivity.
pub mod conductivity;
/// Sweep builders and post-processing helpers.
pub mod sweep;
/// Error types shared between modules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
