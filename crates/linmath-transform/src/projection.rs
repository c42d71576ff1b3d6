//! Perspective and orthographic projection matrices.
//!
//! The matrices follow the row-vector convention of the rest of the crate:
//! a view-space point `p` is projected as `(p, 1) · P` and the perspective
//! divide uses the resulting `w`. The target clip space is chosen with
//! [`ClipSpace`], either per call or through a [`ProjectionConfig`].

use linmath_algebra::{AlgebraError, AlgebraResult, Matrix4, Scalar};

/// Depth range convention of the clip space a projection targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClipSpace {
    /// Right-handed view space, depth mapped to `[-1, 1]`.
    OpenGl,
    /// Left-handed view space, depth mapped to `[0, 1]`.
    Direct3D,
}

impl Default for ClipSpace {
    /// `OpenGl`, or `Direct3D` when the crate is built with the `direct3d` feature.
    fn default() -> Self {
        if cfg!(feature = "direct3d") {
            ClipSpace::Direct3D
        } else {
            ClipSpace::OpenGl
        }
    }
}

/// Projection settings shared by every matrix built through it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectionConfig {
    /// Clip space the projections target.
    #[cfg_attr(feature = "serde", serde(default))]
    pub clip_space: ClipSpace,
}

impl ProjectionConfig {
    /// Create a configuration for the given clip space.
    pub fn new(clip_space: ClipSpace) -> Self {
        Self { clip_space }
    }

    /// See [`perspective`].
    pub fn perspective<T: Scalar>(
        &self,
        fov_y: T,
        aspect: T,
        near: T,
        far: T,
    ) -> AlgebraResult<Matrix4<T>> {
        perspective(fov_y, aspect, near, far, self.clip_space)
    }

    /// See [`orthographic`].
    #[allow(clippy::too_many_arguments)]
    pub fn orthographic<T: Scalar>(
        &self,
        left: T,
        right: T,
        bottom: T,
        top: T,
        near: T,
        far: T,
    ) -> AlgebraResult<Matrix4<T>> {
        orthographic(left, right, bottom, top, near, far, self.clip_space)
    }
}

fn ensure_nonzero<T: Scalar>(value: T, what: &str) -> AlgebraResult<()> {
    if value == T::zero() || !value.is_finite() {
        return Err(AlgebraError::InvalidArgument(format!(
            "{what} must be finite and non-zero, got {value}"
        )));
    }
    Ok(())
}

/// Perspective projection with a vertical field of view of `fov_y` radians.
///
/// For [`ClipSpace::OpenGl`] the camera looks down `-z` and depth lands in
/// `[-1, 1]`; for [`ClipSpace::Direct3D`] it looks down `+z` and depth lands
/// in `[0, 1]`.
///
/// # Errors
///
/// [`AlgebraError::InvalidArgument`] when `aspect` is zero, `near == far`, or
/// `tan(fov_y / 2)` is zero.
pub fn perspective<T: Scalar>(
    fov_y: T,
    aspect: T,
    near: T,
    far: T,
    clip: ClipSpace,
) -> AlgebraResult<Matrix4<T>> {
    let zoom = (fov_y * T::lit(0.5)).tan();
    ensure_nonzero(zoom, "tan(fov_y / 2)")?;
    ensure_nonzero(aspect, "aspect ratio")?;
    ensure_nonzero(far - near, "far - near")?;

    let depth = far - near;
    let mut m = Matrix4::zero();
    m[0][0] = (zoom * aspect).recip();
    m[1][1] = zoom.recip();
    match clip {
        ClipSpace::OpenGl => {
            m[2][2] = -(far + near) / depth;
            m[2][3] = -T::one();
            m[3][2] = -T::lit(2.0) * far * near / depth;
        }
        ClipSpace::Direct3D => {
            m[2][2] = far / depth;
            m[2][3] = T::one();
            m[3][2] = -near * far / depth;
        }
    }
    Ok(m)
}

/// Orthographic projection of the box `[left, right] x [bottom, top] x [near, far]`.
///
/// # Errors
///
/// [`AlgebraError::InvalidArgument`] when any pair of opposite planes coincide.
#[allow(clippy::too_many_arguments)]
pub fn orthographic<T: Scalar>(
    left: T,
    right: T,
    bottom: T,
    top: T,
    near: T,
    far: T,
    clip: ClipSpace,
) -> AlgebraResult<Matrix4<T>> {
    let (width, height, depth) = (right - left, top - bottom, far - near);
    ensure_nonzero(width, "right - left")?;
    ensure_nonzero(height, "top - bottom")?;
    ensure_nonzero(depth, "far - near")?;

    let two = T::lit(2.0);
    let mut m = Matrix4::identity();
    m[0][0] = two / width;
    m[1][1] = two / height;
    m[3][0] = -(right + left) / width;
    m[3][1] = -(top + bottom) / height;
    match clip {
        ClipSpace::OpenGl => {
            m[2][2] = -two / depth;
            m[3][2] = -(far + near) / depth;
        }
        ClipSpace::Direct3D => {
            m[2][2] = depth.recip();
            m[3][2] = -near / depth;
        }
    }
    Ok(m)
}
