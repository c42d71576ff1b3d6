//! Matrix types module.
//!
//! This module provides the square matrix types:
//! - Matrix2: 2x2 matrix
//! - Matrix3: 3x3 matrix
//! - Matrix4: 4x4 affine/projective matrix

#[macro_use]
mod mat;

mod mat2;
mod mat3;
mod mat4;

pub use mat2::{Matrix2, Matrix2F32, Matrix2F64};
pub use mat3::{Matrix3, Matrix3F32, Matrix3F64};
pub use mat4::{Matrix4, Matrix4F32, Matrix4F64};
