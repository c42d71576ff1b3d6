//! Conversions to and from `glam` types.
//!
//! Matrices here are row-major and act on row vectors, glam matrices are
//! column-major and act on column vectors. The two layouts coincide in memory,
//! so a matrix converts by reinterpreting its rows as glam columns and keeps
//! describing the same transform.

use crate::{Matrix2, Matrix3, Matrix4, Quaternion, Vector2, Vector3, Vector4};

macro_rules! impl_vector_interop {
    ($name:ident, $glam_type:ty, $scalar:ty, [$($field:ident),+]) => {
        impl From<$glam_type> for $name<$scalar> {
            #[inline]
            fn from(v: $glam_type) -> Self {
                Self::new($(v.$field),+)
            }
        }

        impl From<$name<$scalar>> for $glam_type {
            #[inline]
            fn from(v: $name<$scalar>) -> Self {
                <$glam_type>::new($(v.$field),+)
            }
        }
    };
}

macro_rules! impl_matrix_interop {
    ($name:ident, $glam_type:ty, $scalar:ty) => {
        impl From<$glam_type> for $name<$scalar> {
            #[inline]
            fn from(m: $glam_type) -> Self {
                Self::from_rows_array(m.to_cols_array_2d())
            }
        }

        impl From<$name<$scalar>> for $glam_type {
            #[inline]
            fn from(m: $name<$scalar>) -> Self {
                <$glam_type>::from_cols_array_2d(&m.m)
            }
        }
    };
}

macro_rules! impl_quat_interop {
    ($glam_type:ty, $scalar:ty) => {
        impl From<$glam_type> for Quaternion<$scalar> {
            #[inline]
            fn from(q: $glam_type) -> Self {
                Self::from_xyzw(q.x, q.y, q.z, q.w)
            }
        }

        impl From<Quaternion<$scalar>> for $glam_type {
            #[inline]
            fn from(q: Quaternion<$scalar>) -> Self {
                <$glam_type>::from_xyzw(q.v.x, q.v.y, q.v.z, q.w)
            }
        }
    };
}

impl_vector_interop!(Vector2, glam::Vec2, f32, [x, y]);
impl_vector_interop!(Vector3, glam::Vec3, f32, [x, y, z]);
impl_vector_interop!(Vector4, glam::Vec4, f32, [x, y, z, w]);
impl_vector_interop!(Vector2, glam::DVec2, f64, [x, y]);
impl_vector_interop!(Vector3, glam::DVec3, f64, [x, y, z]);
impl_vector_interop!(Vector4, glam::DVec4, f64, [x, y, z, w]);

impl_matrix_interop!(Matrix2, glam::Mat2, f32);
impl_matrix_interop!(Matrix3, glam::Mat3, f32);
impl_matrix_interop!(Matrix4, glam::Mat4, f32);
impl_matrix_interop!(Matrix2, glam::DMat2, f64);
impl_matrix_interop!(Matrix3, glam::DMat3, f64);
impl_matrix_interop!(Matrix4, glam::DMat4, f64);

impl_quat_interop!(glam::Quat, f32);
impl_quat_interop!(glam::DQuat, f64);

#[cfg(test)]
mod tests {
    use crate::{Matrix4F32, Matrix4F64, QuaternionF32, Vector3, Vector3F32, Vector4F64};

    #[test]
    fn test_vector_conversion() {
        let v = Vector3F32::new(1.0, 2.0, 3.0);
        let g: glam::Vec3 = v.into();
        assert_eq!(g, glam::Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(Vector3F32::from(g), v);

        let d: glam::DVec4 = Vector4F64::new(1.0, 2.0, 3.0, 4.0).into();
        assert_eq!(d.w, 4.0);
    }

    #[test]
    fn test_matrix_conversion_keeps_transform() {
        let mut m = Matrix4F32::from_scale(Vector3::new(2.0, 3.0, 4.0));
        m.set_translation(Vector3::new(1.0, -1.0, 0.5));
        let g: glam::Mat4 = m.into();

        let p = Vector3::new(0.5, 0.25, -1.0);
        let ours = m.transform_point3(p);
        let theirs = g.transform_point3(p.into());
        assert_eq!(Vector3F32::from(theirs), ours);
        assert_eq!(Matrix4F32::from(g), m);
    }

    #[test]
    fn test_inverse_matches_glam() {
        let m = Matrix4F64::new(
            2.0, 0.5, 0.0, 0.0, //
            -0.5, 1.0, 0.25, 0.0, //
            0.0, 0.0, 3.0, 0.0, //
            1.0, 2.0, 3.0, 1.0,
        );
        let g: glam::DMat4 = m.into();
        let expected = Matrix4F64::from(g.inverse());
        approx::assert_relative_eq!(m.inverse(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_quat_conversion() {
        let q = QuaternionF32::from_xyzw(0.1, 0.2, 0.3, 0.9);
        let g: glam::Quat = q.into();
        assert_eq!(g.w, 0.9);
        assert_eq!(QuaternionF32::from(g), q);
    }
}
