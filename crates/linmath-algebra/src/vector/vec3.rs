//! 3D vector.

use crate::Scalar;

define_vector_type!(
    /// 3D vector.
    Vector3,
    3,
    [x, y, z]
);

/// 3D vector (single precision).
pub type Vector3F32 = Vector3<f32>;
/// 3D vector (double precision).
pub type Vector3F64 = Vector3<f64>;

impl<T: Scalar> Default for Vector3<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar> Vector3<T> {
    /// Unit vector along x.
    #[inline]
    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero(), T::zero())
    }

    /// Unit vector along y.
    #[inline]
    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one(), T::zero())
    }

    /// Unit vector along z.
    #[inline]
    pub fn unit_z() -> Self {
        Self::new(T::zero(), T::zero(), T::one())
    }

    /// Cross product `self × rhs`.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }
}

// `a ^ b` is the cross product.
impl<T: Scalar> std::ops::BitXor for Vector3<T> {
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self::Output {
        self.cross(rhs)
    }
}

/// Cross product of two 3D vectors.
#[inline]
pub fn cross_product<T: Scalar>(a: Vector3<T>, b: Vector3<T>) -> Vector3<T> {
    a.cross(b)
}
