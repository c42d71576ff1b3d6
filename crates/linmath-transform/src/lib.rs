#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! Builders that compose scale, rotation, translation and reflection into an
//! existing [`Matrix4`](linmath_algebra::Matrix4), a left-handed look-at view
//! matrix and perspective/orthographic projections for either the OpenGL or
//! the Direct3D clip space.
//!
//! ```rust
//! use linmath_algebra::{Matrix4F64, Vector3};
//! use linmath_transform::{transform, ClipSpace, ProjectionConfig};
//!
//! let model = transform::translate(
//!     &transform::scale(&Matrix4F64::identity(), Vector3::new(2.0, 2.0, 2.0)),
//!     Vector3::new(0.0, 0.0, -4.0),
//! );
//! let proj = ProjectionConfig::new(ClipSpace::OpenGl)
//!     .perspective(std::f64::consts::FRAC_PI_2, 1.0, 1.0, 10.0)
//!     .unwrap();
//! let ndc = (model * proj).project_point3(Vector3::new(0.0, 0.0, 0.0));
//! assert!(ndc.z > -1.0 && ndc.z < 1.0);
//! ```

pub mod projection;
pub mod transform;

pub use projection::{orthographic, perspective, ClipSpace, ProjectionConfig};
pub use transform::Axis;
