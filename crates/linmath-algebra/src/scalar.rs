//! Scalar trait shared by every algebraic type.

use std::fmt::{Debug, Display};

use num_traits::{Float, FloatConst};

/// Floating point element type of vectors, matrices and quaternions.
///
/// Implemented for `f32` and `f64`.
pub trait Scalar:
    Float
    + FloatConst
    + Debug
    + Display
    + Default
    + approx::AbsDiffEq<Epsilon = Self>
    + approx::RelativeEq<Epsilon = Self>
    + approx::UlpsEq<Epsilon = Self>
    + Send
    + Sync
    + 'static
{
    /// Converts a literal constant into the scalar type.
    fn lit(value: f64) -> Self;
}

impl Scalar for f32 {
    #[inline]
    fn lit(value: f64) -> Self {
        value as f32
    }
}

impl Scalar for f64 {
    #[inline]
    fn lit(value: f64) -> Self {
        value
    }
}

/// Converts an angle in degrees to radians.
#[inline]
pub fn deg_to_rad<T: Scalar>(degrees: T) -> T {
    degrees * T::PI() / T::lit(180.0)
}

/// Converts an angle in radians to degrees.
#[inline]
pub fn rad_to_deg<T: Scalar>(radians: T) -> T {
    radians * T::lit(180.0) / T::PI()
}
