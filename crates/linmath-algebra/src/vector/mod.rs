//! Vector types module.
//!
//! This module provides the fixed-size vector types:
//! - Vector2: 2D vector
//! - Vector3: 3D vector
//! - Vector4: 4D homogeneous vector (w defaults to 1)

#[macro_use]
mod vec;

mod vec2;
mod vec3;
mod vec4;

pub use vec2::{Vector2, Vector2F32, Vector2F64};
pub use vec3::{cross_product, Vector3, Vector3F32, Vector3F64};
pub use vec4::{Vector4, Vector4F32, Vector4F64};

/// Operations shared by every vector dimension.
pub trait VectorSpace: Copy {
    /// Element type.
    type Scalar;

    /// Dot product.
    fn dot(self, rhs: Self) -> Self::Scalar;

    /// Euclidean length.
    fn magnitude(self) -> Self::Scalar;

    /// Unit vector in the same direction, or zero for a zero-length input.
    fn normalize(self) -> Self;
}

/// Dot product of two vectors of the same dimension.
#[inline]
pub fn dot_product<V: VectorSpace>(a: V, b: V) -> V::Scalar {
    a.dot(b)
}

/// Returns `v` scaled to unit length, or the zero vector when `v` has zero length.
#[inline]
pub fn normalize<V: VectorSpace>(v: V) -> V {
    v.normalize()
}
