//! 3x3 matrix.

use crate::{Matrix2, Scalar, Vector3};

define_matrix_type!(
    /// 3x3 matrix, typically a rotation or a linear part of an affine transform.
    Matrix3,
    Vector3,
    3,
    [r0, r1, r2]
);

/// 3x3 matrix (single precision).
pub type Matrix3F32 = Matrix3<f32>;
/// 3x3 matrix (double precision).
pub type Matrix3F64 = Matrix3<f64>;

impl<T: Scalar> Matrix3<T> {
    /// Create a matrix from its elements in row-major order.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub fn new(m00: T, m01: T, m02: T, m10: T, m11: T, m12: T, m20: T, m21: T, m22: T) -> Self {
        Self {
            m: [[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]],
        }
    }

    /// The 2x2 matrix left after removing row `i` and column `j`.
    pub fn minor(&self, i: usize, j: usize) -> Matrix2<T> {
        let rows = (0..3).filter(|&r| r != i);
        let mut out = Matrix2::zero();
        for (dst, r) in out.m.iter_mut().zip(rows) {
            for (cell, c) in dst.iter_mut().zip((0..3).filter(|&c| c != j)) {
                *cell = self.m[r][c];
            }
        }
        out
    }

    /// Determinant by cofactor expansion along the first column.
    #[inline]
    pub fn determinant(&self) -> T {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[1][0] * (m[0][1] * m[2][2] - m[0][2] * m[2][1])
            + m[2][0] * (m[0][1] * m[1][2] - m[0][2] * m[1][1])
    }

    /// Transposed cofactor matrix.
    pub fn adjugate(&self) -> Self {
        let m = &self.m;
        Self::new(
            m[1][1] * m[2][2] - m[1][2] * m[2][1],
            -(m[0][1] * m[2][2] - m[0][2] * m[2][1]),
            m[0][1] * m[1][2] - m[0][2] * m[1][1],
            -(m[1][0] * m[2][2] - m[1][2] * m[2][0]),
            m[0][0] * m[2][2] - m[0][2] * m[2][0],
            -(m[0][0] * m[1][2] - m[0][2] * m[1][0]),
            m[1][0] * m[2][1] - m[1][1] * m[2][0],
            -(m[0][0] * m[2][1] - m[0][1] * m[2][0]),
            m[0][0] * m[1][1] - m[0][1] * m[1][0],
        )
    }
}

// Row-vector product `v · M`.
impl<T: Scalar> std::ops::Mul<Vector3<T>> for Matrix3<T> {
    type Output = Vector3<T>;

    #[inline]
    fn mul(self, v: Vector3<T>) -> Self::Output {
        let m = &self.m;
        Vector3::new(
            v.x * m[0][0] + v.y * m[1][0] + v.z * m[2][0],
            v.x * m[0][1] + v.y * m[1][1] + v.z * m[2][1],
            v.x * m[0][2] + v.y * m[1][2] + v.z * m[2][2],
        )
    }
}
