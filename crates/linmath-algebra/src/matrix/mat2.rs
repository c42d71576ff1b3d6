//! 2x2 matrix.

use crate::{Scalar, Vector2};

define_matrix_type!(
    /// 2x2 matrix.
    Matrix2,
    Vector2,
    2,
    [r0, r1]
);

/// 2x2 matrix (single precision).
pub type Matrix2F32 = Matrix2<f32>;
/// 2x2 matrix (double precision).
pub type Matrix2F64 = Matrix2<f64>;

impl<T: Scalar> Matrix2<T> {
    /// Create a matrix from its elements in row-major order.
    #[inline]
    pub fn new(m00: T, m01: T, m10: T, m11: T) -> Self {
        Self {
            m: [[m00, m01], [m10, m11]],
        }
    }

    /// Counter-clockwise rotation by `angle` radians of row vectors.
    #[inline]
    pub fn from_angle(angle: T) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos, sin, -sin, cos)
    }

    /// Determinant, `ad - bc`.
    #[inline]
    pub fn determinant(&self) -> T {
        let m = &self.m;
        m[0][0] * m[1][1] - m[0][1] * m[1][0]
    }

    /// Transposed cofactor matrix.
    #[inline]
    pub fn adjugate(&self) -> Self {
        let m = &self.m;
        Self::new(m[1][1], -m[0][1], -m[1][0], m[0][0])
    }
}

// Row-vector product `v · M`.
impl<T: Scalar> std::ops::Mul<Vector2<T>> for Matrix2<T> {
    type Output = Vector2<T>;

    #[inline]
    fn mul(self, v: Vector2<T>) -> Self::Output {
        let m = &self.m;
        Vector2::new(
            v.x * m[0][0] + v.y * m[1][0],
            v.x * m[0][1] + v.y * m[1][1],
        )
    }
}
