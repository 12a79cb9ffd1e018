//! Shared numerical aliases and array broadcasting.

use std::borrow::Cow;

use crate::errors::ConductivityError;

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Primary complex scalar type used for conductivity ratios.
pub type CScalar = num_complex::Complex<Scalar>;

/// A scalar or a one-dimensional array of samples.
///
/// Lets the conductivity evaluators accept `0.1`, `[0.1, 0.2]`, `&temps` or
/// `vec![...]` interchangeably.
pub trait Samples {
    /// Borrows the samples as a contiguous slice.
    fn as_samples(&self) -> &[Scalar];
}

impl Samples for Scalar {
    fn as_samples(&self) -> &[Scalar] {
        std::slice::from_ref(self)
    }
}

impl Samples for [Scalar] {
    fn as_samples(&self) -> &[Scalar] {
        self
    }
}

impl<const N: usize> Samples for [Scalar; N] {
    fn as_samples(&self) -> &[Scalar] {
        self
    }
}

impl Samples for Vec<Scalar> {
    fn as_samples(&self) -> &[Scalar] {
        self
    }
}

impl<T: Samples + ?Sized> Samples for &T {
    fn as_samples(&self) -> &[Scalar] {
        (**self).as_samples()
    }
}

/// Broadcasts a temperature and a frequency array to a common length.
///
/// A size-1 array is replicated to match the other one; two arrays whose
/// sizes differ and are both not 1 are rejected.
///
/// # Errors
///
/// Returns [`ConductivityError::IncompatibleShapes`] for non-broadcastable sizes.
pub fn broadcast<'a>(
    temp: &'a [Scalar],
    freq: &'a [Scalar],
) -> Result<(Cow<'a, [Scalar]>, Cow<'a, [Scalar]>), ConductivityError> {
    match (temp.len(), freq.len()) {
        (t, f) if t == f => Ok((Cow::Borrowed(temp), Cow::Borrowed(freq))),
        (1, f) => Ok((Cow::Owned(vec![temp[0]; f]), Cow::Borrowed(freq))),
        (t, 1) => Ok((Cow::Borrowed(temp), Cow::Owned(vec![freq[0]; t]))),
        (t, f) => Err(ConductivityError::IncompatibleShapes {
            temperature: t,
            frequency: f,
        }),
    }
}
