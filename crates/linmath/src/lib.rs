//! Small linear algebra library for 3D graphics.
//!
//! Re-exports [`algebra`] (vectors, matrices, quaternions) and [`transform`]
//! (transform builders and projections). Most code only needs the
//! [`prelude`].

#[doc(inline)]
pub use linmath_algebra as algebra;

#[doc(inline)]
pub use linmath_transform as transform;

/// Commonly used types and functions.
pub mod prelude {
    pub use linmath_algebra::{
        AlgebraError, AlgebraResult, Matrix2, Matrix3, Matrix4, Quaternion, Scalar, Vector2,
        Vector3, Vector4,
    };
    pub use linmath_transform::transform::{
        look_at_lh, reflect, rotate, rotate_about, scale, scale_along, translate,
    };
    pub use linmath_transform::{orthographic, perspective, Axis, ClipSpace, ProjectionConfig};
}
