//! 4D homogeneous vector.

use crate::{Scalar, Vector3};

define_vector_type!(
    /// 4D vector in homogeneous coordinates.
    ///
    /// `w = 1` marks a point and `w = 0` a direction. [`Default`] yields the
    /// point at the origin `(0, 0, 0, 1)`.
    Vector4,
    4,
    [x, y, z, w]
);

/// 4D vector (single precision).
pub type Vector4F32 = Vector4<f32>;
/// 4D vector (double precision).
pub type Vector4F64 = Vector4<f64>;

impl<T: Scalar> Default for Vector4<T> {
    fn default() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::one())
    }
}

impl<T: Scalar> Vector4<T> {
    /// Homogeneous point `(p, 1)`.
    #[inline]
    pub fn from_point(p: Vector3<T>) -> Self {
        Self::new(p.x, p.y, p.z, T::one())
    }

    /// Homogeneous direction `(d, 0)`.
    #[inline]
    pub fn from_direction(d: Vector3<T>) -> Self {
        Self::new(d.x, d.y, d.z, T::zero())
    }

    /// The `x, y, z` part, dropping `w`.
    #[inline]
    pub fn xyz(self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Cross product of the `x, y, z` parts. The result is a direction (`w = 0`).
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self::from_direction(self.xyz().cross(rhs.xyz()))
    }
}

impl<T: Scalar> std::ops::BitXor for Vector4<T> {
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self::Output {
        self.cross(rhs)
    }
}

impl<T: Scalar> From<Vector3<T>> for Vector4<T> {
    /// Treats the vector as a point.
    #[inline]
    fn from(p: Vector3<T>) -> Self {
        Self::from_point(p)
    }
}
