//! 4x4 matrix.

use crate::{Matrix3, Scalar, Vector3, Vector4};

define_matrix_type!(
    /// 4x4 matrix acting on homogeneous row vectors.
    ///
    /// For an affine transform the upper-left 3x3 block holds the linear part
    /// and row 3 holds the translation.
    Matrix4,
    Vector4,
    4,
    [r0, r1, r2, r3]
);

/// 4x4 matrix (single precision).
pub type Matrix4F32 = Matrix4<f32>;
/// 4x4 matrix (double precision).
pub type Matrix4F64 = Matrix4<f64>;

impl<T: Scalar> Matrix4<T> {
    /// Create a matrix from its elements in row-major order.
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    #[inline]
    pub fn new(
        m00: T, m01: T, m02: T, m03: T,
        m10: T, m11: T, m12: T, m13: T,
        m20: T, m21: T, m22: T, m23: T,
        m30: T, m31: T, m32: T, m33: T,
    ) -> Self {
        Self {
            m: [
                [m00, m01, m02, m03],
                [m10, m11, m12, m13],
                [m20, m21, m22, m23],
                [m30, m31, m32, m33],
            ],
        }
    }

    /// Affine matrix from three basis vectors and a translation.
    ///
    /// Only the `x, y, z` components are read; the last column is set to `(0, 0, 0, 1)`.
    #[rustfmt::skip]
    pub fn from_basis(
        x_axis: Vector4<T>,
        y_axis: Vector4<T>,
        z_axis: Vector4<T>,
        w_axis: Vector4<T>,
    ) -> Self {
        let (zero, one) = (T::zero(), T::one());
        Self::new(
            x_axis.x, x_axis.y, x_axis.z, zero,
            y_axis.x, y_axis.y, y_axis.z, zero,
            z_axis.x, z_axis.y, z_axis.z, zero,
            w_axis.x, w_axis.y, w_axis.z, one,
        )
    }

    /// Embed a 3x3 linear map into an affine matrix with zero translation.
    pub fn from_matrix3(linear: &Matrix3<T>) -> Self {
        let mut out = Self::identity();
        for (dst, src) in out.m.iter_mut().zip(linear.m.iter()) {
            dst[..3].copy_from_slice(src);
        }
        out
    }

    /// Pure translation by `t`.
    #[inline]
    pub fn from_translation(t: Vector3<T>) -> Self {
        let mut out = Self::identity();
        out.set_translation(t);
        out
    }

    /// Scaling along the cardinal axes.
    #[inline]
    pub fn from_scale(s: Vector3<T>) -> Self {
        let mut out = Self::identity();
        out.m[0][0] = s.x;
        out.m[1][1] = s.y;
        out.m[2][2] = s.z;
        out
    }

    /// Upper-left 3x3 block.
    #[inline]
    pub fn upper_left(&self) -> Matrix3<T> {
        Matrix3 {
            m: std::array::from_fn(|i| std::array::from_fn(|j| self.m[i][j])),
        }
    }

    /// Translation stored in row 3.
    #[inline]
    pub fn translation(&self) -> Vector3<T> {
        Vector3::new(self.m[3][0], self.m[3][1], self.m[3][2])
    }

    /// Overwrite the translation stored in row 3.
    #[inline]
    pub fn set_translation(&mut self, t: Vector3<T>) -> &mut Self {
        self.m[3][0] = t.x;
        self.m[3][1] = t.y;
        self.m[3][2] = t.z;
        self
    }

    /// Transform a direction: the translation row is ignored.
    #[inline]
    pub fn transform_vector3(&self, v: Vector3<T>) -> Vector3<T> {
        let m = &self.m;
        Vector3::new(
            v.x * m[0][0] + v.y * m[1][0] + v.z * m[2][0],
            v.x * m[0][1] + v.y * m[1][1] + v.z * m[2][1],
            v.x * m[0][2] + v.y * m[1][2] + v.z * m[2][2],
        )
    }

    /// Transform a point: the translation row is added.
    #[inline]
    pub fn transform_point3(&self, p: Vector3<T>) -> Vector3<T> {
        self.transform_vector3(p) + self.translation()
    }

    /// Full homogeneous product `v · M`, `w` included.
    #[inline]
    pub fn transform_vector4(&self, v: Vector4<T>) -> Vector4<T> {
        let v = v.to_array();
        Vector4::from_array(std::array::from_fn(|j| {
            (0..4).fold(T::zero(), |acc, i| acc + v[i] * self.m[i][j])
        }))
    }

    /// Transform a point with `w = 1` and divide by the resulting `w`.
    ///
    /// Used with projection matrices; the result is not finite when the point
    /// lies on the plane mapped to `w = 0`.
    #[inline]
    pub fn project_point3(&self, p: Vector3<T>) -> Vector3<T> {
        let clip = self.transform_vector4(Vector4::from_point(p));
        clip.xyz() / clip.w
    }

    /// The 3x3 matrix left after removing row `i` and column `j`.
    pub fn minor(&self, i: usize, j: usize) -> Matrix3<T> {
        let mut out = Matrix3::zero();
        for (dst, r) in out.m.iter_mut().zip((0..4).filter(|&r| r != i)) {
            for (cell, c) in dst.iter_mut().zip((0..4).filter(|&c| c != j)) {
                *cell = self.m[r][c];
            }
        }
        out
    }

    /// Signed minor `(-1)^(i+j) · det(minor(i, j))`.
    #[inline]
    pub fn cofactor(&self, i: usize, j: usize) -> T {
        let det = self.minor(i, j).determinant();
        if (i + j) % 2 == 0 {
            det
        } else {
            -det
        }
    }

    /// Determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> T {
        (0..4).fold(T::zero(), |acc, j| acc + self.m[0][j] * self.cofactor(0, j))
    }

    /// Transposed cofactor matrix.
    pub fn adjugate(&self) -> Self {
        Self {
            m: std::array::from_fn(|i| std::array::from_fn(|j| self.cofactor(j, i))),
        }
    }
}

// Direction product: upper 3x3 only.
impl<T: Scalar> std::ops::Mul<Vector3<T>> for Matrix4<T> {
    type Output = Vector3<T>;

    #[inline]
    fn mul(self, v: Vector3<T>) -> Self::Output {
        self.transform_vector3(v)
    }
}

// Position product: the input is treated as a point, translation is applied and w is forced to 1.
impl<T: Scalar> std::ops::Mul<Vector4<T>> for Matrix4<T> {
    type Output = Vector4<T>;

    #[inline]
    fn mul(self, v: Vector4<T>) -> Self::Output {
        Vector4::from_point(self.transform_point3(v.xyz()))
    }
}
