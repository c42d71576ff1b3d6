//! Quaternion.

use crate::{AlgebraError, AlgebraResult, Matrix3, Matrix4, Scalar, Vector3, Vector4};

/// Quaternion `w + v`, with scalar part `w` and vector part `v`.
///
/// A rotation is represented by a unit quaternion. Unit length is not
/// enforced; call [`Quaternion::normalize`] when it matters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion<T> {
    /// Scalar part.
    pub w: T,
    /// Vector part.
    pub v: Vector3<T>,
}

/// Quaternion (single precision).
pub type QuaternionF32 = Quaternion<f32>;
/// Quaternion (double precision).
pub type QuaternionF64 = Quaternion<f64>;

/// Above this cosine Slerp falls back to linear weights, `sin(angle)` is too small to divide by.
const SLERP_LINEAR_THRESHOLD: f64 = 0.9999;

impl<T: Scalar> Quaternion<T> {
    /// Create a quaternion from its scalar and vector parts.
    #[inline]
    pub fn new(w: T, v: Vector3<T>) -> Self {
        Self { w, v }
    }

    /// Create a quaternion from `x, y, z, w` components.
    #[inline]
    pub fn from_xyzw(x: T, y: T, z: T, w: T) -> Self {
        Self::new(w, Vector3::new(x, y, z))
    }

    /// Take `x, y, z` as the vector part and `w` as the scalar part.
    #[inline]
    pub fn from_vector4(v: Vector4<T>) -> Self {
        Self::new(v.w, v.xyz())
    }

    /// The identity rotation `1 + 0i + 0j + 0k`.
    #[inline]
    pub fn identity() -> Self {
        Self::new(T::one(), Vector3::zero())
    }

    /// All components zero.
    #[inline]
    pub fn zero() -> Self {
        Self::new(T::zero(), Vector3::zero())
    }

    /// Reset to the identity in place.
    #[inline]
    pub fn set_identity(&mut self) -> &mut Self {
        *self = Self::identity();
        self
    }

    /// Rotation of `angle` radians about `axis`.
    ///
    /// The axis is normalized first; a zero axis gives the identity.
    pub fn from_axis_angle(axis: Vector3<T>, angle: T) -> Self {
        let axis = axis.normalize();
        if axis == Vector3::zero() {
            return Self::identity();
        }
        let (sin, cos) = (angle * T::lit(0.5)).sin_cos();
        Self::new(cos, axis * sin)
    }

    /// Four-dimensional dot product.
    #[inline]
    pub fn dot(self, rhs: Self) -> T {
        self.w * rhs.w + self.v.dot(rhs.v)
    }

    /// Squared norm.
    #[inline]
    pub fn magnitude_squared(self) -> T {
        self.dot(self)
    }

    /// Euclidean norm `sqrt(w² + x² + y² + z²)`.
    #[inline]
    pub fn magnitude(self) -> T {
        self.magnitude_squared().sqrt()
    }

    /// Largest absolute value among `w, x, y, z`, NaN components are ignored.
    #[inline]
    fn max_abs(self) -> T {
        self.v.max_abs().max(self.w.abs())
    }

    /// Copy divided componentwise by `scale`.
    #[inline]
    fn unscaled(self, scale: T) -> Self {
        Self::new(self.w / scale, self.v / scale)
    }

    /// Unit quaternion in the same direction.
    ///
    /// The components are divided by the largest of them before the norm is
    /// taken, so large finite quaternions normalize without overflow.
    ///
    /// Fails with [`AlgebraError::DivideByZero`] for a zero quaternion and for
    /// components that are NaN or infinite.
    pub fn normalize(self) -> AlgebraResult<Self> {
        let err = AlgebraError::DivideByZero {
            op: "Quaternion::normalize",
        };
        let scale = self.max_abs();
        if scale <= T::zero() || !scale.is_finite() {
            return Err(err);
        }
        let scaled = self.unscaled(scale);
        let magnitude = scaled.magnitude();
        if magnitude.is_nan() || magnitude <= T::zero() {
            return Err(err);
        }
        Ok(scaled * magnitude.recip())
    }

    /// Normalize in place; on error `self` is left unchanged.
    pub fn normalize_mut(&mut self) -> AlgebraResult<()> {
        *self = self.normalize()?;
        Ok(())
    }

    /// Conjugate `w - v`.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(self.w, -self.v)
    }

    /// Conjugate in place.
    #[inline]
    pub fn conjugate_mut(&mut self) -> &mut Self {
        self.v = -self.v;
        self
    }

    /// Multiplicative inverse, `conjugate / |q|²`. Equal to the conjugate for unit quaternions.
    ///
    /// Fails with [`AlgebraError::DivideByZero`] for a zero quaternion, for
    /// NaN or infinite components and when the inverse is not representable
    /// in `T`.
    pub fn inverse(self) -> AlgebraResult<Self> {
        let err = AlgebraError::DivideByZero {
            op: "Quaternion::inverse",
        };
        let scale = self.max_abs();
        if scale <= T::zero() || !scale.is_finite() {
            return Err(err);
        }
        // q = s·q' gives q⁻¹ = conj(q') / (s·|q'|²)
        let scaled = self.unscaled(scale);
        let denom = scale * scaled.magnitude_squared();
        if denom.is_nan() || denom <= T::zero() || !denom.is_finite() {
            return Err(err);
        }
        let inv = scaled.conjugate().unscaled(denom);
        if !(inv.w.is_finite() && inv.v.max_abs().is_finite()) {
            return Err(err);
        }
        Ok(inv)
    }

    /// Raise a unit quaternion to the power `t`, scaling its rotation angle by `t`.
    ///
    /// Quaternions with `|w| >= 0.9999` are returned unchanged.
    pub fn pow(self, t: T) -> Self {
        if self.w.abs() >= T::lit(SLERP_LINEAR_THRESHOLD) {
            return self;
        }
        let alpha = self.w.acos();
        let new_alpha = t * alpha;
        let mult = new_alpha.sin() / alpha.sin();
        Self::new(new_alpha.cos(), self.v * mult)
    }

    /// Spherical linear interpolation from `self` (t = 0) to `end` (t = 1).
    ///
    /// `t` is clamped to the endpoints. The shorter arc is taken by negating
    /// `end` when the quaternions point into opposite hemispheres.
    pub fn slerp(self, end: Self, t: T) -> Self {
        if t <= T::zero() {
            return self;
        }
        if t >= T::one() {
            return end;
        }

        let mut end = end;
        let mut cos_angle = self.dot(end);
        if cos_angle < T::zero() {
            end = -end;
            cos_angle = -cos_angle;
        }

        let (k0, k1) = if cos_angle > T::lit(SLERP_LINEAR_THRESHOLD) {
            (T::one() - t, t)
        } else {
            let sin_angle = (T::one() - cos_angle * cos_angle).sqrt();
            let angle = sin_angle.atan2(cos_angle);
            let inv_sin = sin_angle.recip();
            (
                ((T::one() - t) * angle).sin() * inv_sin,
                (t * angle).sin() * inv_sin,
            )
        };

        Self::new(self.w * k0 + end.w * k1, self.v * k0 + end.v * k1)
    }

    /// Extract the rotation of a 3x3 rotation matrix.
    ///
    /// Picks the largest of `4w² - 1`, `4x² - 1`, `4y² - 1`, `4z² - 1` (read off
    /// the diagonal) so the square root is taken of the best conditioned value,
    /// then derives the remaining components from the off-diagonal terms.
    pub fn from_rotation_matrix3(m: &Matrix3<T>) -> Self {
        let m = &m.m;
        let w_term = m[0][0] + m[1][1] + m[2][2];
        let x_term = m[0][0] - m[1][1] - m[2][2];
        let y_term = -m[0][0] + m[1][1] - m[2][2];
        let z_term = -m[0][0] - m[1][1] + m[2][2];

        let mut biggest = 0;
        let mut biggest_term = w_term;
        for (index, term) in [x_term, y_term, z_term].into_iter().enumerate() {
            if term > biggest_term {
                biggest_term = term;
                biggest = index + 1;
            }
        }

        let biggest_val = (biggest_term + T::one()).sqrt() * T::lit(0.5);
        let mult = T::lit(0.25) / biggest_val;

        match biggest {
            0 => Self::from_xyzw(
                (m[1][2] - m[2][1]) * mult,
                (m[2][0] - m[0][2]) * mult,
                (m[0][1] - m[1][0]) * mult,
                biggest_val,
            ),
            1 => Self::from_xyzw(
                biggest_val,
                (m[0][1] + m[1][0]) * mult,
                (m[2][0] + m[0][2]) * mult,
                (m[1][2] - m[2][1]) * mult,
            ),
            2 => Self::from_xyzw(
                (m[0][1] + m[1][0]) * mult,
                biggest_val,
                (m[1][2] + m[2][1]) * mult,
                (m[2][0] - m[0][2]) * mult,
            ),
            _ => Self::from_xyzw(
                (m[2][0] + m[0][2]) * mult,
                (m[1][2] + m[2][1]) * mult,
                biggest_val,
                (m[0][1] - m[1][0]) * mult,
            ),
        }
    }

    /// Extract the rotation of the upper-left block of a 4x4 matrix.
    #[inline]
    pub fn from_rotation_matrix4(m: &Matrix4<T>) -> Self {
        Self::from_rotation_matrix3(&m.upper_left())
    }

    /// Rotation matrix acting on row vectors, `v · R`.
    pub fn to_matrix3(self) -> Matrix3<T> {
        let Vector3 { x, y, z } = self.v;
        let w = self.w;
        let (one, two) = (T::one(), T::lit(2.0));
        Matrix3::new(
            one - two * (y * y + z * z),
            two * (x * y + w * z),
            two * (x * z - w * y),
            two * (x * y - w * z),
            one - two * (x * x + z * z),
            two * (y * z + w * x),
            two * (x * z + w * y),
            two * (y * z - w * x),
            one - two * (x * x + y * y),
        )
    }

    /// Affine rotation matrix with zero translation.
    #[inline]
    pub fn to_matrix4(self) -> Matrix4<T> {
        Matrix4::from_matrix3(&self.to_matrix3())
    }

    /// Rotate `v` by this unit quaternion, `q v q*`.
    pub fn rotate_vector(self, v: Vector3<T>) -> Vector3<T> {
        let two = T::lit(2.0);
        let t = self.v.cross(v) * two;
        v + t * self.w + self.v.cross(t)
    }
}

impl<T: Scalar> Default for Quaternion<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar> From<Vector4<T>> for Quaternion<T> {
    #[inline]
    fn from(v: Vector4<T>) -> Self {
        Self::from_vector4(v)
    }
}

impl<T: Scalar> std::ops::Add for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.w + rhs.w, self.v + rhs.v)
    }
}

impl<T: Scalar> std::ops::Sub for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.w - rhs.w, self.v - rhs.v)
    }
}

impl<T: Scalar> std::ops::AddAssign for Quaternion<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.w = self.w + rhs.w;
        self.v += rhs.v;
    }
}

impl<T: Scalar> std::ops::SubAssign for Quaternion<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.w = self.w - rhs.w;
        self.v -= rhs.v;
    }
}

impl<T: Scalar> std::ops::Neg for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.w, -self.v)
    }
}

// Hamilton product. Not commutative: `a * b` rotates by `b` first, then `a`.
impl<T: Scalar> std::ops::Mul for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(
            self.w * rhs.w - self.v.dot(rhs.v),
            rhs.v * self.w + self.v * rhs.w + self.v.cross(rhs.v),
        )
    }
}

impl<T: Scalar> std::ops::MulAssign for Quaternion<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> std::ops::Mul<T> for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        Self::new(self.w * rhs, self.v * rhs)
    }
}

impl<T: Scalar> approx::AbsDiffEq for Quaternion<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.w.abs_diff_eq(&other.w, epsilon) && self.v.abs_diff_eq(&other.v, epsilon)
    }
}

impl<T: Scalar> approx::RelativeEq for Quaternion<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.w.relative_eq(&other.w, epsilon, max_relative)
            && self.v.relative_eq(&other.v, epsilon, max_relative)
    }
}

impl<T: Scalar> approx::UlpsEq for Quaternion<T> {
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
        self.w.ulps_eq(&other.w, epsilon, max_ulps) && self.v.ulps_eq(&other.v, epsilon, max_ulps)
    }
}

impl<T: Scalar> std::fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Quaternion[{}, {}]", self.w, self.v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn axis_angle(x: f64, y: f64, z: f64, angle: f64) -> QuaternionF64 {
        QuaternionF64::from_axis_angle(Vector3::new(x, y, z), angle)
    }

    #[test]
    fn test_identity_and_default() {
        let q = QuaternionF32::identity();
        assert_eq!(q, QuaternionF32::from_xyzw(0.0, 0.0, 0.0, 1.0));
        assert_eq!(QuaternionF32::default(), QuaternionF32::zero());

        let mut r = QuaternionF32::from_xyzw(1.0, 2.0, 3.0, 4.0);
        r.set_identity();
        assert_eq!(r, q);
    }

    #[test]
    fn test_from_vector4() {
        let q = QuaternionF32::from(Vector4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(q.w, 4.0);
        assert_eq!(q.v, Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_add_sub() {
        let a = QuaternionF32::from_xyzw(1.0, 2.0, 3.0, 4.0);
        let b = QuaternionF32::from_xyzw(0.5, 0.5, 0.5, 0.5);
        assert_eq!(a + b, QuaternionF32::from_xyzw(1.5, 2.5, 3.5, 4.5));
        assert_eq!(a - b, QuaternionF32::from_xyzw(0.5, 1.5, 2.5, 3.5));

        let mut c = a;
        c += b;
        c -= b;
        assert_eq!(c, a);
    }

    #[test]
    fn test_hamilton_product_basis() {
        let i = QuaternionF64::from_xyzw(1.0, 0.0, 0.0, 0.0);
        let j = QuaternionF64::from_xyzw(0.0, 1.0, 0.0, 0.0);
        let k = QuaternionF64::from_xyzw(0.0, 0.0, 1.0, 0.0);
        assert_eq!(i * j, k);
        assert_eq!(j * i, -k);
        assert_eq!(i * i, QuaternionF64::new(-1.0, Vector3::zero()));
        assert_eq!(i * j * k, QuaternionF64::new(-1.0, Vector3::zero()));
    }

    #[test]
    fn test_product_is_associative_not_commutative() {
        let q1 = axis_angle(1.0, 0.0, 0.0, 0.3);
        let q2 = axis_angle(0.0, 1.0, 0.0, 1.1);
        let q3 = axis_angle(1.0, 2.0, 3.0, -0.7);
        assert_ne!(q1 * q2, q2 * q1);
        assert_relative_eq!((q1 * q2) * q3, q1 * (q2 * q3), epsilon = 1e-12);

        let mut acc = q1;
        acc *= q2;
        assert_eq!(acc, q1 * q2);
    }

    #[test]
    fn test_magnitude_is_euclidean_norm() {
        let q = QuaternionF64::from_xyzw(1.0, 2.0, 2.0, 4.0);
        assert_eq!(q.magnitude(), 5.0);
        assert_eq!(q.magnitude_squared(), 25.0);
    }

    #[test]
    fn test_normalize() {
        let q = QuaternionF64::from_xyzw(1.0, 2.0, 2.0, 4.0).normalize().unwrap();
        assert_relative_eq!(q.magnitude(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(q, QuaternionF64::from_xyzw(0.2, 0.4, 0.4, 0.8), epsilon = 1e-12);

        let mut r = QuaternionF64::from_xyzw(0.0, 0.0, 2.0, 0.0);
        r.normalize_mut().unwrap();
        assert_eq!(r, QuaternionF64::from_xyzw(0.0, 0.0, 1.0, 0.0));
    }

    #[test]
    fn test_normalize_zero_is_error() {
        let err = QuaternionF32::zero().normalize().unwrap_err();
        assert_eq!(
            err,
            AlgebraError::DivideByZero {
                op: "Quaternion::normalize"
            }
        );

        let mut q = QuaternionF32::zero();
        assert!(q.normalize_mut().is_err());
        assert_eq!(q, QuaternionF32::zero());
    }

    #[test]
    fn test_normalize_large_components() {
        let q = QuaternionF32::from_xyzw(1e20, 1e20, 1e20, 1e20);
        assert!(q.magnitude().is_infinite());
        let n = q.normalize().unwrap();
        assert_relative_eq!(n.magnitude(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(n, QuaternionF32::from_xyzw(0.5, 0.5, 0.5, 0.5), epsilon = 1e-6);
    }

    #[test]
    fn test_normalize_non_finite_is_error() {
        let inf = QuaternionF32::from_xyzw(f32::INFINITY, 0.0, 0.0, 1.0);
        assert!(inf.normalize().is_err());
        let nan = QuaternionF64::from_xyzw(0.0, f64::NAN, 0.0, 1.0);
        assert!(nan.normalize().is_err());
    }

    #[test]
    fn test_inverse_large_components() {
        let q = QuaternionF32::from_xyzw(1e20, -1e20, 1e20, 1e20);
        let inv = q.inverse().unwrap();
        // |q|² = 4e40, so each component is ±1e20 / 4e40
        assert_relative_eq!(
            inv,
            QuaternionF32::from_xyzw(-2.5e-21, 2.5e-21, -2.5e-21, 2.5e-21),
            epsilon = 0.0,
            max_relative = 1e-5
        );
        let unit = (q * inv).normalize().unwrap();
        assert_relative_eq!(unit, QuaternionF32::identity(), epsilon = 1e-5);
    }

    #[test]
    fn test_inverse_non_finite_is_error() {
        let inf = QuaternionF32::from_xyzw(0.0, f32::INFINITY, 0.0, 1.0);
        assert_eq!(
            inf.inverse().unwrap_err(),
            AlgebraError::DivideByZero {
                op: "Quaternion::inverse"
            }
        );
        assert!(QuaternionF64::from_xyzw(0.0, 0.0, f64::NAN, 1.0).inverse().is_err());
        // 1 / 1e-40 does not fit in an f32
        assert!(QuaternionF32::from_xyzw(0.0, 0.0, 0.0, 1e-40).inverse().is_err());
    }

    #[test]
    fn test_conjugate_and_inverse() {
        let q = QuaternionF64::from_xyzw(1.0, -2.0, 3.0, 4.0);
        assert_eq!(q.conjugate(), QuaternionF64::from_xyzw(-1.0, 2.0, -3.0, 4.0));

        let mut c = q;
        c.conjugate_mut();
        assert_eq!(c, q.conjugate());

        let inv = q.inverse().unwrap();
        assert_relative_eq!(q * inv, QuaternionF64::identity(), epsilon = 1e-12);
        assert_relative_eq!(inv * q, QuaternionF64::identity(), epsilon = 1e-12);

        let unit = axis_angle(0.0, 1.0, 1.0, 0.8);
        assert_relative_eq!(unit.inverse().unwrap(), unit.conjugate(), epsilon = 1e-12);
        assert!(QuaternionF64::zero().inverse().is_err());
    }

    #[test]
    fn test_pow_scales_angle() {
        let q = axis_angle(0.0, 0.0, 1.0, FRAC_PI_2);
        assert_relative_eq!(q.pow(0.5), axis_angle(0.0, 0.0, 1.0, FRAC_PI_4), epsilon = 1e-12);
        assert_eq!(QuaternionF64::identity().pow(0.3), QuaternionF64::identity());
    }

    #[test]
    fn test_slerp_endpoints() {
        let q0 = axis_angle(1.0, 0.0, 0.0, 0.2);
        let q1 = axis_angle(0.0, 1.0, 0.0, 1.3);
        assert_eq!(q0.slerp(q1, 0.0), q0);
        assert_eq!(q0.slerp(q1, 1.0), q1);
        assert_eq!(q0.slerp(q1, -0.5), q0);
        assert_eq!(q0.slerp(q1, 1.5), q1);
    }

    #[test]
    fn test_slerp_midpoint() {
        let q0 = QuaternionF64::identity();
        let q1 = axis_angle(0.0, 0.0, 1.0, FRAC_PI_2);
        let mid = q0.slerp(q1, 0.5);
        assert_relative_eq!(mid, axis_angle(0.0, 0.0, 1.0, FRAC_PI_4), epsilon = 1e-12);
        assert_relative_eq!(mid.magnitude(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_slerp_takes_shorter_arc() {
        let q0 = QuaternionF64::identity();
        let q1 = axis_angle(0.0, 0.0, 1.0, FRAC_PI_2);
        // -q1 is the same rotation; interpolation must not go the long way round.
        let mid = q0.slerp(-q1, 0.5);
        assert_relative_eq!(mid, axis_angle(0.0, 0.0, 1.0, FRAC_PI_4), epsilon = 1e-12);
    }

    #[test]
    fn test_slerp_nearly_parallel_is_finite() {
        let q0 = axis_angle(0.0, 1.0, 0.0, 0.5);
        let q1 = axis_angle(0.0, 1.0, 0.0, 0.5 + 1e-6);
        let mid = q0.slerp(q1, 0.5);
        assert!(mid.w.is_finite());
        assert_abs_diff_eq!(mid, q0, epsilon = 1e-6);
    }

    #[test]
    fn test_to_matrix3_rotates_row_vectors() {
        let q = axis_angle(0.0, 0.0, 1.0, FRAC_PI_2);
        let m = q.to_matrix3();
        let x = Vector3::new(1.0, 0.0, 0.0);
        assert_relative_eq!(m * x, Vector3::new(0.0, 1.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(q.rotate_vector(x), m * x, epsilon = 1e-12);
        assert_relative_eq!(m.determinant(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_product_composes_like_matrices() {
        let q1 = axis_angle(1.0, 0.0, 0.0, 0.4);
        let q2 = axis_angle(0.0, 1.0, 0.0, -1.2);
        // row vectors: q2 is applied first
        assert_relative_eq!(
            (q1 * q2).to_matrix3(),
            q2.to_matrix3() * q1.to_matrix3(),
            epsilon = 1e-12
        );
    }

    /// Round trip through every branch of the largest-candidate selection.
    #[test]
    fn test_from_rotation_matrix_all_branches() {
        let cases = [
            // w largest: small rotation
            (axis_angle(1.0, 2.0, 3.0, 0.3), 0),
            // x largest: half turn about x
            (axis_angle(1.0, 0.1, 0.0, PI * 0.95), 1),
            // y largest
            (axis_angle(0.1, 1.0, 0.2, PI * 0.9), 2),
            // z largest
            (axis_angle(0.0, -0.2, 1.0, PI * 0.97), 3),
        ];
        for (q, branch) in cases {
            let m = q.to_matrix3();
            let diag = [
                m[0][0] + m[1][1] + m[2][2],
                m[0][0] - m[1][1] - m[2][2],
                -m[0][0] + m[1][1] - m[2][2],
                -m[0][0] - m[1][1] + m[2][2],
            ];
            let largest = (0..4).fold(0, |best, i| if diag[i] > diag[best] { i } else { best });
            assert_eq!(largest, branch);

            let raw = QuaternionF64::from_rotation_matrix3(&m);
            assert_eq!(QuaternionF64::from_rotation_matrix4(&q.to_matrix4()), raw);

            // q and -q are the same rotation
            let back = if raw.dot(q) < 0.0 { -raw } else { raw };
            assert_relative_eq!(back, q, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_from_rotation_matrix_identity() {
        let q = QuaternionF32::from_rotation_matrix3(&Matrix3::identity());
        assert_eq!(q, QuaternionF32::identity());
    }

    #[test]
    fn test_matrix_conversion_matches_glam() {
        let q = QuaternionF32::from_axis_angle(Vector3::new(0.3, -1.0, 0.5), 2.1);
        let g = glam::Quat::from_xyzw(q.v.x, q.v.y, q.v.z, q.w);
        let ours = glam::Mat4::from_cols_array_2d(&q.to_matrix4().m);
        assert!(ours.abs_diff_eq(glam::Mat4::from_quat(g), 1e-6));
    }

    #[test]
    fn test_display() {
        let q = QuaternionF32::from_xyzw(1.0, 2.0, 3.0, 0.5);
        assert_eq!(q.to_string(), "Quaternion[0.5, Vector3(1, 2, 3)]");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() -> Result<(), Box<dyn std::error::Error>> {
        let q = QuaternionF32::from_xyzw(1.0, 2.0, 3.0, 0.5);
        let json = serde_json::to_string(&q)?;
        assert_eq!(json, r#"{"w":0.5,"v":{"x":1.0,"y":2.0,"z":3.0}}"#);
        assert_eq!(serde_json::from_str::<QuaternionF32>(&json)?, q);

        let r = axis_angle(1.0, 2.0, -1.0, 0.4);
        let back: QuaternionF64 = serde_json::from_str(&serde_json::to_string(&r)?)?;
        assert_relative_eq!(back, r, epsilon = 1e-12);
        Ok(())
    }
}
