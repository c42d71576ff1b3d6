//! 2D vector.

define_vector_type!(
    /// 2D vector.
    Vector2,
    2,
    [x, y]
);

/// 2D vector (single precision).
pub type Vector2F32 = Vector2<f32>;
/// 2D vector (double precision).
pub type Vector2F64 = Vector2<f64>;

impl<T: crate::Scalar> Default for Vector2<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: crate::Scalar> Vector2<T> {
    /// The vector rotated by 90 degrees counter-clockwise.
    #[inline]
    pub fn perp(self) -> Self {
        Self::new(-self.y, self.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vec2_basic() {
        let v = Vector2F32::new(1.0, 2.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(Vector2F32::default(), Vector2F32::zero());
    }

    #[test]
    fn test_vec2_from_array() {
        let v = Vector2F64::from_array([1.0, 2.0]);
        assert_eq!(v.to_array(), [1.0, 2.0]);
    }

    #[test]
    fn test_vec2_arithmetic() {
        let v1 = Vector2F32::new(1.0, 2.0);
        let v2 = Vector2F32::new(3.0, 4.0);
        assert_eq!(v1 + v2, Vector2F32::new(4.0, 6.0));
        assert_eq!(v2 - v1, Vector2F32::new(2.0, 2.0));
        assert_eq!(v1 * 2.0, Vector2F32::new(2.0, 4.0));
        assert_eq!(2.0 * v1, Vector2F32::new(2.0, 4.0));
        assert_eq!(v2 / 2.0, Vector2F32::new(1.5, 2.0));
        assert_eq!(v1 * v2, 11.0);
    }

    #[test]
    fn test_vec2_compound_assign_is_elementwise() {
        let mut v = Vector2F32::new(2.0, 3.0);
        v *= Vector2F32::new(4.0, 5.0);
        assert_eq!(v, Vector2F32::new(8.0, 15.0));
        v /= Vector2F32::new(2.0, 5.0);
        assert_eq!(v, Vector2F32::new(4.0, 3.0));
    }

    #[test]
    fn test_vec2_normalize() {
        let v = Vector2F64::new(3.0, 4.0);
        assert_eq!(v.magnitude(), 5.0);
        assert_relative_eq!(v.normalize(), Vector2F64::new(0.6, 0.8), epsilon = 1e-12);
        assert_eq!(Vector2F64::zero().normalize(), Vector2F64::zero());
        assert_eq!(v.perp(), Vector2F64::new(-4.0, 3.0));
    }

    #[test]
    fn test_vec2_display() {
        assert_eq!(Vector2F32::new(1.5, -2.0).to_string(), "Vector2(1.5, -2)");
    }
}
