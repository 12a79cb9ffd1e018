//! Quasiparticle occupation statistics.

use crate::math::Scalar;

/// Fermi–Dirac occupation `1 / (exp(e/t) + 1)` in reduced units.
///
/// `e` is an energy and `t` a thermal energy in the same unit (typically
/// both divided by the gap). At `t == 0` this is the step function: 1 below
/// zero, ½ at zero, 0 above. Stable for any ratio `e/t`; `t` must not be
/// negative.
#[must_use]
pub fn fermi(e: Scalar, t: Scalar) -> Scalar {
    if t == 0.0 {
        return if e < 0.0 {
            1.0
        } else if e > 0.0 {
            0.0
        } else {
            0.5
        };
    }
    let x = e / t;
    if x > 0.0 {
        let z = (-x).exp();
        z / (1.0 + z)
    } else {
        1.0 / (1.0 + x.exp())
    }
}

/// Occupation difference `f(e) − f(e + de)` without cancellation.
///
/// Equal to `sinh(de/2t) / (2·cosh(e/2t)·cosh((e + de)/2t))`, evaluated as
/// `(1 − e^(−de/t))·f(e)·(1 − f(e + de))` so that neither a small `de` nor a
/// large ratio `e/t` loses precision or overflows.
#[must_use]
pub fn fermi_difference(e: Scalar, de: Scalar, t: Scalar) -> Scalar {
    if t == 0.0 || de == 0.0 {
        return fermi(e, t) - fermi(e + de, t);
    }
    -(-de / t).exp_m1() * fermi(e, t) * fermi(-(e + de), t)
}
