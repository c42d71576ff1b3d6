#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! Fixed-size vectors, square matrices and quaternions generic over `f32` and
//! `f64`.
//!
//! Matrices are stored row-major and act on **row vectors**: `M * v` evaluates
//! `v · M`, the translation of an affine 4x4 matrix lives in row 3 and `A * B`
//! applies `A` first. Equality is exact; approximate comparison goes through
//! the [`approx`] traits implemented by every type.
//!
//! ```rust
//! use linmath_algebra::{Matrix3F32, Quaternion, Vector3};
//!
//! let q = Quaternion::from_axis_angle(Vector3::unit_z(), std::f32::consts::FRAC_PI_2);
//! let r: Matrix3F32 = q.to_matrix3();
//! let rotated = r * Vector3::new(1.0, 0.0, 0.0);
//! assert!((rotated - Vector3::new(0.0, 1.0, 0.0)).magnitude() < 1e-6);
//! ```

mod error;
mod interop;
mod matrix;
mod quat;
mod scalar;

/// Vector types and the operations shared by every dimension.
pub mod vector;

pub use error::{AlgebraError, AlgebraResult};
pub use matrix::{Matrix2, Matrix2F32, Matrix2F64};
pub use matrix::{Matrix3, Matrix3F32, Matrix3F64};
pub use matrix::{Matrix4, Matrix4F32, Matrix4F64};
pub use quat::{Quaternion, QuaternionF32, QuaternionF64};
pub use scalar::{deg_to_rad, rad_to_deg, Scalar};
pub use vector::{cross_product, dot_product, normalize, VectorSpace};
pub use vector::{Vector2, Vector2F32, Vector2F64};
pub use vector::{Vector3, Vector3F32, Vector3F64};
pub use vector::{Vector4, Vector4F32, Vector4F64};
