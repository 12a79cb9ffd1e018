//! Bracketing root finder.

use crate::math::Scalar;

/// Outcome of a bracketed root search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Root {
    /// Midpoint of the final bracket.
    pub x: Scalar,
    /// Width of the final bracket.
    pub bracket: Scalar,
    /// Bisection steps taken.
    pub iterations: usize,
}

/// Bisects a sign change of `f` on `[lo, hi]`.
///
/// `f(lo)` and `f(hi)` must have opposite signs; the caller checks this
/// since it usually needs the end values to handle the no-root cases. The
/// search stops once the bracket is narrower than `x_tol` or after
/// `max_iter` steps. The function may fail; the first error aborts the
/// search.
///
/// # Errors
///
/// Propagates the first error returned by `f`.
pub fn bisect<F, E>(
    mut f: F,
    mut lo: Scalar,
    mut hi: Scalar,
    x_tol: Scalar,
    max_iter: usize,
) -> Result<Root, E>
where
    F: FnMut(Scalar) -> Result<Scalar, E>,
{
    let lo_positive = f(lo)? > 0.0;
    let mut iterations = 0;
    while (hi - lo).abs() > x_tol && iterations < max_iter {
        let mid = 0.5 * (lo + hi);
        if mid <= lo.min(hi) || mid >= lo.max(hi) {
            break;
        }
        if (f(mid)? > 0.0) == lo_positive {
            lo = mid;
        } else {
            hi = mid;
        }
        iterations += 1;
    }
    Ok(Root {
        x: 0.5 * (lo + hi),
        bracket: (hi - lo).abs(),
        iterations,
    })
}
