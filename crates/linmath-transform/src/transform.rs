//! Affine transform builders.
//!
//! Every builder takes an existing transform `m` and returns a new matrix.
//! Matrices act on row vectors, so a builder that returns `B * m` applies the
//! new operation before `m` and one that returns `m * B` applies it after.

use linmath_algebra::{AlgebraError, AlgebraResult, Matrix3, Matrix4, Scalar, Vector3};

/// One of the three cardinal axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// The x axis, tag `1`.
    X,
    /// The y axis, tag `2`.
    Y,
    /// The z axis, tag `3`.
    Z,
}

impl Axis {
    /// Unit vector along the axis.
    pub fn unit<T: Scalar>(self) -> Vector3<T> {
        match self {
            Axis::X => Vector3::unit_x(),
            Axis::Y => Vector3::unit_y(),
            Axis::Z => Vector3::unit_z(),
        }
    }
}

/// Parses the integer axis tags `1`, `2` and `3` for x, y and z.
impl TryFrom<i32> for Axis {
    type Error = AlgebraError;

    fn try_from(tag: i32) -> Result<Self, Self::Error> {
        match tag {
            1 => Ok(Axis::X),
            2 => Ok(Axis::Y),
            3 => Ok(Axis::Z),
            _ => Err(AlgebraError::InvalidArgument(format!(
                "cardinal axis tag must be 1 (x), 2 (y) or 3 (z), got {tag}"
            ))),
        }
    }
}

/// `I + k · n nᵀ` for a unit vector `n`.
#[rustfmt::skip]
fn rank_one_update<T: Scalar>(n: Vector3<T>, k: T) -> Matrix3<T> {
    let kn = n * k;
    Matrix3::identity()
        + Matrix3::new(
            kn.x * n.x, kn.x * n.y, kn.x * n.z,
            kn.y * n.x, kn.y * n.y, kn.y * n.z,
            kn.z * n.x, kn.z * n.y, kn.z * n.z,
        )
}

/// Applies the linear map `linear` before `m`, keeping the translation of `m`.
fn prepend_linear<T: Scalar>(m: &Matrix4<T>, linear: &Matrix3<T>) -> Matrix4<T> {
    let mut result = Matrix4::from_matrix3(linear) * *m;
    result.set_translation(m.translation());
    result
}

/// Scale along the cardinal axes by `s.x`, `s.y` and `s.z`.
pub fn scale<T: Scalar>(m: &Matrix4<T>, s: Vector3<T>) -> Matrix4<T> {
    let mut result = Matrix4::from_scale(s) * *m;
    result.set_translation(m.translation());
    result
}

/// Scale by factor `s` along an arbitrary `direction`.
///
/// A zero-length direction leaves `m` unchanged.
pub fn scale_along<T: Scalar>(m: &Matrix4<T>, direction: Vector3<T>, s: T) -> Matrix4<T> {
    let n = direction.normalize();
    if n == Vector3::zero() {
        log::debug!("scale_along: zero-length direction, transform left unchanged");
        return *m;
    }
    prepend_linear(m, &rank_one_update(n, s - T::one()))
}

/// Rotate by `angle` radians about an arbitrary `axis` (Rodrigues' formula).
///
/// A zero-length axis leaves `m` unchanged.
pub fn rotate<T: Scalar>(m: &Matrix4<T>, angle: T, axis: Vector3<T>) -> Matrix4<T> {
    let v = axis.normalize();
    if v == Vector3::zero() {
        log::debug!("rotate: zero-length axis, transform left unchanged");
        return *m;
    }

    let (sin, cos) = angle.sin_cos();
    let t = v * (T::one() - cos);

    #[rustfmt::skip]
    let rotation = Matrix3::new(
        v.x * t.x + cos,       v.x * t.y + v.z * sin, v.x * t.z - v.y * sin,
        v.x * t.y - v.z * sin, v.y * t.y + cos,       v.y * t.z + v.x * sin,
        v.x * t.z + v.y * sin, v.y * t.z - v.x * sin, v.z * t.z + cos,
    );
    prepend_linear(m, &rotation)
}

/// Rotate by `angle` radians about a cardinal axis.
pub fn rotate_about<T: Scalar>(m: &Matrix4<T>, angle: T, axis: Axis) -> Matrix4<T> {
    let (sin, cos) = angle.sin_cos();
    let mut rotation = Matrix3::identity();
    let (a, b) = match axis {
        Axis::X => (1, 2),
        Axis::Y => (2, 0),
        Axis::Z => (0, 1),
    };
    rotation[a][a] = cos;
    rotation[a][b] = sin;
    rotation[b][a] = -sin;
    rotation[b][b] = cos;
    prepend_linear(m, &rotation)
}

/// Rotate about the cardinal axis selected by an integer tag: `1` x, `2` y, `3` z.
///
/// Any other tag is rejected with [`AlgebraError::InvalidArgument`].
pub fn rotate_cardinal<T: Scalar>(m: &Matrix4<T>, angle: T, tag: i32) -> AlgebraResult<Matrix4<T>> {
    Ok(rotate_about(m, angle, Axis::try_from(tag)?))
}

/// Translate by `v` after `m`.
///
/// For an affine `m` the translation row becomes `m.translation() + v`.
pub fn translate<T: Scalar>(m: &Matrix4<T>, v: Vector3<T>) -> Matrix4<T> {
    *m * Matrix4::from_translation(v)
}

/// Reflect across the plane through the origin with the given `normal`.
///
/// A zero-length normal leaves `m` unchanged.
pub fn reflect<T: Scalar>(m: &Matrix4<T>, normal: Vector3<T>) -> Matrix4<T> {
    let n = normal.normalize();
    if n == Vector3::zero() {
        log::debug!("reflect: zero-length normal, transform left unchanged");
        return *m;
    }
    Matrix4::from_matrix3(&rank_one_update(n, T::lit(-2.0))) * *m
}

/// Left-handed view matrix looking from `eye` towards `target`.
///
/// The camera basis is `forward = normalize(target - eye)`,
/// `right = normalize(up × forward)` and `up' = forward × right`; it is stored
/// in the columns of the upper 3x3 block and the translation row holds
/// `-(right · eye, up' · eye, forward · eye)`, so `eye` maps to the origin
/// and `target` onto the positive z axis.
///
/// When `eye == target` or `up` is parallel to the view direction the basis is
/// undefined and a plain translation by `-eye` is returned.
pub fn look_at_lh<T: Scalar>(eye: Vector3<T>, target: Vector3<T>, up: Vector3<T>) -> Matrix4<T> {
    let forward = (target - eye).normalize();
    let right = up.cross(forward).normalize();
    if forward == Vector3::zero() || right == Vector3::zero() {
        log::debug!("look_at_lh: degenerate camera basis, returning translation only");
        return Matrix4::from_translation(-eye);
    }
    let up = forward.cross(right);

    let mut view = Matrix4::from_matrix3(&Matrix3::from_cols(right, up, forward));
    view.set_translation(Vector3::new(-right.dot(eye), -up.dot(eye), -forward.dot(eye)));
    view
}
