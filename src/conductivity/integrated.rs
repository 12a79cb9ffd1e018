//! Numerically integrated Mattis–Bardeen conductivity.
//!
//! Valid for any temperature below the gap closing point as long as the tone
//! cannot break pairs (`hf < ∆(T)`). The gap at each temperature follows the
//! BCS curve; the two conductivity integrals use the substituted kernels from
//! [`super::kernels`], so the integrator never sees a singularity.
//!
//! # References
//!
//! - Mattis, D. C. & Bardeen, J. (1958). Phys. Rev. 111, 412.
//! - Gao, J. (2008). The Physics of Superconducting Microwave Resonators,
//!   eqs. 2.30–2.31.

use std::f64::consts::PI;

use crate::constants::{BCS_CONSTANT, BOLTZMANN_CONSTANT};
use crate::errors::ConductivityError;
use crate::math::{broadcast, CScalar, Samples, Scalar};
use crate::special::quadrature::{QuadratureConfig, QuadratureError};
use crate::special::{NumericPrimitives, StandardPrimitives};

use super::kernels::{sigma1_integrand_with, sigma2_integrand_with};
use super::reduced::ReducedVariables;
use super::{validate_frequencies, validate_gap, validate_temperatures};

/// hf/∆(T) above which a sample is logged as close to the pair-breaking edge.
const PAIR_BREAKING_WARNING: Scalar = 0.9;

/// Integrating evaluator with its gap model and integrator settings.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegratedConductivity<P = StandardPrimitives> {
    bcs: Scalar,
    quadrature: QuadratureConfig,
    primitives: P,
}

impl Default for IntegratedConductivity {
    fn default() -> Self {
        Self::new()
    }
}

impl IntegratedConductivity {
    /// Weak-coupling evaluator with default tolerances and the crate's own primitives.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bcs: BCS_CONSTANT,
            quadrature: QuadratureConfig::default(),
            primitives: StandardPrimitives,
        }
    }
}

impl<P: NumericPrimitives> IntegratedConductivity<P> {
    /// Replaces the BCS ratio ∆₀ / (k_B T_c).
    #[must_use]
    pub const fn with_bcs(mut self, bcs: Scalar) -> Self {
        self.bcs = bcs;
        self
    }

    /// Replaces the tolerances used for every integral, including the gap equation.
    #[must_use]
    pub const fn with_quadrature(mut self, quadrature: QuadratureConfig) -> Self {
        self.quadrature = quadrature;
        self
    }

    /// Swaps the numeric backend.
    #[must_use]
    pub fn with_primitives<Q: NumericPrimitives>(self, primitives: Q) -> IntegratedConductivity<Q> {
        IntegratedConductivity {
            bcs: self.bcs,
            quadrature: self.quadrature,
            primitives,
        }
    }

    /// BCS ratio in use.
    #[must_use]
    pub const fn bcs(&self) -> Scalar {
        self.bcs
    }

    /// Integrator settings in use.
    #[must_use]
    pub const fn quadrature(&self) -> &QuadratureConfig {
        &self.quadrature
    }

    /// Gap energy ∆(T) in joules at each temperature, for zero-temperature gap `delta0`.
    ///
    /// # Errors
    ///
    /// [`ConductivityError::InvalidArgument`] for negative temperatures, a
    /// non-positive gap or a non-positive BCS ratio; [`ConductivityError::IntegrationFailure`] if the gap
    /// equation cannot be solved.
    pub fn gap(&self, temp: impl Samples, delta0: Scalar) -> Result<Vec<Scalar>, ConductivityError> {
        self.validate_bcs()?;
        validate_gap(delta0)?;
        let temp = temp.as_samples();
        validate_temperatures(temp)?;
        self.gaps(temp, delta0)
    }

    /// Complex conductivity ratio σ/σn at each broadcast (temperature, frequency) pair.
    ///
    /// `temp` in kelvin, `freq` in hertz, `delta0` the zero-temperature gap in
    /// joules. Every sample is checked against `∆(T) > 0` and `hf < ∆(T)`
    /// before any conductivity integral is evaluated.
    ///
    /// # Errors
    ///
    /// [`ConductivityError::InvalidArgument`] for out-of-domain inputs,
    /// [`ConductivityError::IncompatibleShapes`] for non-broadcastable arrays
    /// and [`ConductivityError::IntegrationFailure`] when an integral does
    /// not converge.
    pub fn evaluate(
        &self,
        temp: impl Samples,
        freq: impl Samples,
        delta0: Scalar,
    ) -> Result<Vec<CScalar>, ConductivityError> {
        self.validate_bcs()?;
        validate_gap(delta0)?;
        let temp = temp.as_samples();
        let freq = freq.as_samples();
        validate_temperatures(temp)?;
        validate_frequencies(freq)?;
        let (temp, freq) = broadcast(temp, freq)?;

        log::debug!(
            "integrated conductivity: {} samples, delta0 = {delta0:e} J, bcs = {}",
            temp.len(),
            self.bcs
        );
        let gaps = self.gaps(&temp, delta0)?;

        let points = temp
            .iter()
            .zip(freq.iter())
            .zip(&gaps)
            .map(|((&t, &f), &delta)| {
                if !(delta > 0.0) {
                    return Err(ConductivityError::invalid(format!(
                        "temperature {t} K is at or above the gap closing temperature"
                    )));
                }
                let point = ReducedVariables::new(t, f, delta);
                if !point.is_subgap() {
                    return Err(ConductivityError::invalid(format!(
                        "photon energy at {f} Hz exceeds the gap at {t} K (hf/delta = {:.4})",
                        point.w
                    )));
                }
                if point.w > PAIR_BREAKING_WARNING {
                    log::warn!("hf/delta = {:.4} at {t} K is close to the pair-breaking edge", point.w);
                }
                Ok(point)
            })
            .collect::<Result<Vec<_>, _>>()?;

        map_indices(points.len(), |index| {
            let point = points[index];
            self.integrate_point(point.t, point.w)
                .map_err(|source| ConductivityError::IntegrationFailure { index, source })
        })
    }

    /// Conductivity ratio at a single reduced point `t = k_B T/∆`, `w = hf/∆`.
    ///
    /// Skips the gap model entirely.
    ///
    /// # Errors
    ///
    /// [`ConductivityError::InvalidArgument`] unless `t ≥ 0` and `0 < w < 1`;
    /// [`ConductivityError::IntegrationFailure`] (index 0) on quadrature failure.
    pub fn evaluate_reduced(&self, t: Scalar, w: Scalar) -> Result<CScalar, ConductivityError> {
        if !(t.is_finite() && t >= 0.0) {
            return Err(ConductivityError::invalid(format!(
                "reduced temperature must be finite and non-negative, got {t}"
            )));
        }
        if !(w > 0.0 && w < 1.0) {
            return Err(ConductivityError::invalid(format!(
                "reduced frequency must lie in (0, 1), got {w}"
            )));
        }
        self.integrate_point(t, w)
            .map_err(|source| ConductivityError::IntegrationFailure { index: 0, source })
    }

    fn validate_bcs(&self) -> Result<(), ConductivityError> {
        if self.bcs.is_finite() && self.bcs > 0.0 {
            Ok(())
        } else {
            Err(ConductivityError::invalid(format!(
                "BCS ratio must be finite and positive, got {}",
                self.bcs
            )))
        }
    }

    fn gaps(&self, temp: &[Scalar], delta0: Scalar) -> Result<Vec<Scalar>, ConductivityError> {
        let tc = delta0 / (self.bcs * BOLTZMANN_CONSTANT);
        map_indices(temp.len(), |index| {
            self.primitives
                .reduced_gap(temp[index] / tc, self.bcs, &self.quadrature)
                .map(|reduced| delta0 * reduced)
                .map_err(|source| ConductivityError::IntegrationFailure { index, source })
        })
    }

    fn integrate_point(&self, t: Scalar, w: Scalar) -> Result<CScalar, QuadratureError> {
        let occupation = |e: Scalar, t: Scalar| self.primitives.fermi(e, t);
        let difference = |e: Scalar, de: Scalar, t: Scalar| self.primitives.fermi_difference(e, de, t);
        let sigma1 = self.primitives.integrate_to_infinity(
            &|u: Scalar| sigma1_integrand_with(&difference, u, t, w),
            0.0,
            &self.quadrature,
        )?;
        let sigma2 = self.primitives.integrate(
            &|theta: Scalar| sigma2_integrand_with(&occupation, theta, t, w),
            0.0,
            PI,
            &self.quadrature,
        )?;
        log::trace!(
            "t = {t:.6}, w = {w:.6}: {} + {} evaluations",
            sigma1.evaluations,
            sigma2.evaluations
        );
        Ok(CScalar::new(sigma1.value, sigma2.value))
    }
}

/// Maps `f` over `0..n`, reporting the lowest failing index.
#[cfg(feature = "parallel")]
fn map_indices<T, F>(n: usize, f: F) -> Result<Vec<T>, ConductivityError>
where
    T: Send,
    F: Fn(usize) -> Result<T, ConductivityError> + Sync + Send,
{
    use rayon::prelude::*;

    let results: Vec<_> = (0..n).into_par_iter().map(f).collect();
    results.into_iter().collect()
}

#[cfg(not(feature = "parallel"))]
fn map_indices<T, F>(n: usize, f: F) -> Result<Vec<T>, ConductivityError>
where
    F: Fn(usize) -> Result<T, ConductivityError>,
{
    (0..n).map(f).collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    /// Aluminium-like film, T_c = 1.2 K.
    const DELTA0: Scalar = BCS_CONSTANT * BOLTZMANN_CONSTANT * 1.2;

    #[test]
    fn reduced_integrals_match_reference() {
        let model = IntegratedConductivity::new();
        let cases = [
            (0.05, 0.02, 1.474_962_796_445_125_7e-7, 157.075_705_079_850_35),
            (0.2, 0.1, 0.110_922_203_796_921_23, 31.064_464_126_328_787),
            (0.3, 0.5, 0.167_075_731_321_678_7, 5.973_225_410_013_945_4),
        ];
        for (t, w, sigma1, sigma2) in cases {
            let sigma = model.evaluate_reduced(t, w).expect("converges");
            assert_relative_eq!(sigma.re, sigma1, max_relative = 1.0e-8);
            assert_relative_eq!(sigma.im, sigma2, max_relative = 1.0e-8);
        }
    }

    #[test]
    fn zero_temperature_has_no_quasiparticle_loss() {
        let sigma = IntegratedConductivity::new()
            .evaluate_reduced(0.0, 0.02)
            .expect("converges");
        assert_eq!(sigma.re, 0.0);
        // σ2 → π/w for w → 0.
        assert_relative_eq!(sigma.im, PI / 0.02, max_relative = 1.0e-4);
    }

    #[test]
    fn end_to_end_reference_points() {
        let model = IntegratedConductivity::new();
        let sigma = model.evaluate([0.6, 0.9], 5.0e9, DELTA0).expect("converges");
        assert_eq!(sigma.len(), 2);
        assert_relative_eq!(sigma[0].re, 0.425_330_395_349_872_4, max_relative = 1.0e-7);
        assert_relative_eq!(sigma[0].im, 25.043_084_266_398_45, max_relative = 1.0e-7);
        assert_relative_eq!(sigma[1].re, 1.189_217_636_673_335, max_relative = 1.0e-7);
        assert_relative_eq!(sigma[1].im, 16.159_193_192_127_14, max_relative = 1.0e-7);
    }

    #[test]
    fn gap_follows_the_bcs_curve() {
        let gaps = IntegratedConductivity::new()
            .gap([0.0, 0.6, 1.2, 2.0], DELTA0)
            .expect("gap converges");
        assert_eq!(gaps[0], DELTA0);
        assert_relative_eq!(gaps[1], DELTA0 * 0.956_884_715_874_890_6, max_relative = 1.0e-10);
        assert_eq!(gaps[2], 0.0);
        assert_eq!(gaps[3], 0.0);
    }

    #[test]
    fn rejects_temperatures_above_the_transition() {
        let err = IntegratedConductivity::new()
            .evaluate([0.3, 1.3], 1.0e9, DELTA0)
            .unwrap_err();
        assert!(matches!(err, ConductivityError::InvalidArgument(_)));
    }

    #[test]
    fn rejects_pair_breaking_frequencies() {
        // hf = ∆0 at about 44 GHz for this gap.
        let err = IntegratedConductivity::new()
            .evaluate(0.1, 1.0e11, DELTA0)
            .unwrap_err();
        assert!(matches!(err, ConductivityError::InvalidArgument(_)));

        let model = IntegratedConductivity::new();
        assert!(matches!(model.evaluate_reduced(0.1, 1.0), Err(ConductivityError::InvalidArgument(_))));
        assert!(matches!(model.evaluate_reduced(0.1, 0.0), Err(ConductivityError::InvalidArgument(_))));
        assert!(matches!(model.evaluate_reduced(-0.1, 0.5), Err(ConductivityError::InvalidArgument(_))));
    }

    #[test]
    fn rejects_invalid_inputs_before_integrating() {
        let model = IntegratedConductivity::new();
        assert!(matches!(model.evaluate(-0.1, 1.0e9, DELTA0), Err(ConductivityError::InvalidArgument(_))));
        assert!(matches!(model.evaluate(0.1, 0.0, DELTA0), Err(ConductivityError::InvalidArgument(_))));
        assert!(matches!(model.evaluate(0.1, 1.0e9, -DELTA0), Err(ConductivityError::InvalidArgument(_))));
        assert!(matches!(
            model.evaluate([0.1, 0.2], [1.0e9, 2.0e9, 3.0e9], DELTA0),
            Err(ConductivityError::IncompatibleShapes { .. })
        ));
    }

    #[test]
    fn empty_temperature_array_gives_empty_result() {
        let empty: [Scalar; 0] = [];
        let sigma = IntegratedConductivity::new()
            .evaluate(empty, 1.0e9, DELTA0)
            .expect("nothing to integrate");
        assert!(sigma.is_empty());
    }

    #[test]
    fn frequency_arrays_broadcast_against_a_single_temperature() {
        let model = IntegratedConductivity::new();
        let sweep = model.evaluate(0.3, [2.0e9, 5.0e9], DELTA0).expect("converges");
        let single = model.evaluate(0.3, 5.0e9, DELTA0).expect("converges");
        assert_eq!(sweep[1], single[0]);
        assert!(sweep[0].im > sweep[1].im);
    }

    #[test]
    fn repeated_evaluation_is_bit_identical() {
        let model = IntegratedConductivity::new();
        let temps = [0.2, 0.4, 0.6, 0.8];
        let first = model.evaluate(temps, 3.0e9, DELTA0).expect("converges");
        let second = model.evaluate(temps, 3.0e9, DELTA0).expect("converges");
        assert_eq!(first, second);
        let one_by_one: Vec<CScalar> = temps
            .iter()
            .map(|&t| model.evaluate(t, 3.0e9, DELTA0).expect("converges")[0])
            .collect();
        assert_eq!(first, one_by_one);
    }

    #[test]
    fn exhausted_budget_reports_partial_result() {
        let model = IntegratedConductivity::new()
            .with_quadrature(QuadratureConfig::new(0.0, 0.0, 1));
        let err = model.evaluate_reduced(0.2, 0.1).unwrap_err();
        match err {
            ConductivityError::IntegrationFailure { index, source } => {
                assert_eq!(index, 0);
                let (value, abs_error) = source.partial().expect("partial result");
                assert!(value > 0.0 && abs_error > 0.0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_unphysical_bcs_ratios() {
        for bcs in [0.0, -1.0, Scalar::NAN, Scalar::INFINITY] {
            let model = IntegratedConductivity::new().with_bcs(bcs);
            assert!(matches!(model.evaluate(0.3, 1.0e9, DELTA0), Err(ConductivityError::InvalidArgument(_))));
            assert!(matches!(model.gap(0.3, DELTA0), Err(ConductivityError::InvalidArgument(_))));
        }
    }

    #[test]
    fn tiny_reduced_frequency_converges() {
        let sigma = IntegratedConductivity::new()
            .evaluate_reduced(0.3, 1.0e-9)
            .expect("converges");
        assert_relative_eq!(sigma.re, 4.556_701_231_739_067, max_relative = 1.0e-8);
        assert!(sigma.im > 1.0e8);
    }

    #[test]
    fn hertz_tone_converges() {
        let sigma = IntegratedConductivity::new()
            .evaluate(0.3, 1.0, DELTA0)
            .expect("converges");
        assert!(sigma[0].re > 0.0 && sigma[0].re.is_finite());
        assert!(sigma[0].im > 1.0e9);
        // σ1 grows only logarithmically as the frequency drops.
        let khz = IntegratedConductivity::new()
            .evaluate(0.3, 1.0e3, DELTA0)
            .expect("converges");
        assert!(sigma[0].re > khz[0].re && sigma[0].re < 2.0 * khz[0].re);
    }

    #[test]
    fn builders_replace_settings() {
        let config = QuadratureConfig::default().with_rel_tol(1.0e-8);
        let model = IntegratedConductivity::new()
            .with_bcs(1.9)
            .with_quadrature(config);
        assert_eq!(model.bcs(), 1.9);
        assert_eq!(model.quadrature(), &config);
        assert_eq!(IntegratedConductivity::default().bcs(), BCS_CONSTANT);
    }

    #[test]
    fn custom_occupation_backend_is_used() {
        struct Frozen;
        impl NumericPrimitives for Frozen {
            fn fermi(&self, e: Scalar, _t: Scalar) -> Scalar {
                crate::statistics::fermi(e, 0.0)
            }
            fn fermi_difference(&self, e: Scalar, de: Scalar, _t: Scalar) -> Scalar {
                crate::statistics::fermi_difference(e, de, 0.0)
            }
        }
        let model = IntegratedConductivity::new().with_primitives(Frozen);
        let frozen = model.evaluate_reduced(0.3, 0.5).expect("converges");
        let cold = IntegratedConductivity::new()
            .evaluate_reduced(0.0, 0.5)
            .expect("converges");
        assert_eq!(frozen, cold);
    }
}
