//! Sample trait - Real or complex signal sample
//!
//! Abstracts the handful of operations the filters need beyond plain
//! ring arithmetic: conjugation, squared magnitude and division by a
//! real scale factor.

use num_complex::Complex;
use num_traits::{Float, Num};
use std::fmt::Debug;

/// Signal sample trait
///
/// Implemented for `f32`, `f64`, `Complex<f32>` and `Complex<f64>`.
/// For real types `conj` is the identity.
pub trait Sample: Copy + Num + Send + Sync + Debug + 'static {
    /// Underlying real scalar (the sample type itself for real samples)
    type Real: Float + Send + Sync + Debug + 'static;

    /// Complex conjugate
    fn conj(self) -> Self;

    /// Squared magnitude `|x|^2`
    fn norm_sqr(self) -> Self::Real;

    /// Divide by a real scale factor
    fn unscale(self, scale: Self::Real) -> Self;
}

macro_rules! impl_real_sample {
    ($($t:ty),*) => {
        $(
            impl Sample for $t {
                type Real = $t;

                #[inline]
                fn conj(self) -> Self {
                    self
                }

                #[inline]
                fn norm_sqr(self) -> Self::Real {
                    self * self
                }

                #[inline]
                fn unscale(self, scale: Self::Real) -> Self {
                    self / scale
                }
            }
        )*
    };
}

impl_real_sample!(f32, f64);

impl<T> Sample for Complex<T>
where
    T: Float + Send + Sync + Debug + 'static,
{
    type Real = T;

    #[inline]
    fn conj(self) -> Self {
        Complex::conj(&self)
    }

    #[inline]
    fn norm_sqr(self) -> Self::Real {
        Complex::norm_sqr(&self)
    }

    #[inline]
    fn unscale(self, scale: Self::Real) -> Self {
        Complex::unscale(&self, scale)
    }
}
