//! Macro to define a vector type.
//!
//! The generated types are plain `#[repr(C)]` structs generic over the
//! [`Scalar`](crate::Scalar) element type. Everything that does not depend on
//! the dimension (componentwise arithmetic, dot product, norm, conversions,
//! approximate comparison, text rendering) is generated here; the per
//! dimension files add the rest.
//!
//! # Arguments
//!
//! * `name`   - The name of the vector type.
//! * `dim`    - The number of components.
//! * `fields` - The fields of the vector.
//!
macro_rules! define_vector_type {
    ($(#[$meta:meta])* $name:ident, $dim:literal, [$($field:ident),+]) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(C)]
        pub struct $name<T> {
            $(
                #[doc = concat!("The `", stringify!($field), "` component.")]
                pub $field: T,
            )+
        }

        impl<T: $crate::Scalar> $name<T> {
            /// Create a new vector from its components.
            #[inline]
            pub fn new($($field: T),+) -> Self {
                Self { $($field),+ }
            }

            /// Create a vector from an array.
            #[inline]
            pub fn from_array(arr: [T; $dim]) -> Self {
                let [$($field),+] = arr;
                Self { $($field),+ }
            }

            /// Convert the vector to an array.
            #[inline]
            pub fn to_array(self) -> [T; $dim] {
                [$(self.$field),+]
            }

            /// Vector with every component set to zero.
            #[inline]
            pub fn zero() -> Self {
                Self { $($field: T::zero()),+ }
            }

            /// Vector with every component set to `value`.
            #[inline]
            pub fn splat(value: T) -> Self {
                Self { $($field: value),+ }
            }

            /// Set every component to zero.
            #[inline]
            pub fn make_zero(&mut self) -> &mut Self {
                $(self.$field = T::zero();)+
                self
            }

            /// Dot product between two vectors.
            #[inline]
            pub fn dot(self, rhs: Self) -> T {
                T::zero() $(+ self.$field * rhs.$field)+
            }

            /// Componentwise (Hadamard) product.
            #[inline]
            pub fn hadamard(self, rhs: Self) -> Self {
                Self { $($field: self.$field * rhs.$field),+ }
            }

            /// Squared Euclidean length.
            #[inline]
            pub fn magnitude_squared(self) -> T {
                self.dot(self)
            }

            /// Euclidean length of the vector.
            #[inline]
            pub fn magnitude(self) -> T {
                self.magnitude_squared().sqrt()
            }

            /// Largest absolute value among the components.
            #[inline]
            pub fn max_abs(self) -> T {
                T::zero()$(.max(self.$field.abs()))+
            }

            /// Returns the unit vector pointing in the same direction.
            ///
            /// The vector is divided by its largest absolute component before the
            /// length is taken, so large finite inputs do not overflow. A zero or
            /// non-finite vector has no direction; the zero vector is returned
            /// instead of propagating NaN.
            #[inline]
            pub fn normalize(self) -> Self {
                let scale = self.max_abs();
                if scale <= T::zero() || !scale.is_finite() {
                    return Self::zero();
                }
                let scaled = self / scale;
                let length = scaled.magnitude();
                if length > T::zero() {
                    scaled * length.recip()
                } else {
                    Self::zero()
                }
            }

            /// Normalizes the vector in place, see [`Self::normalize`].
            #[inline]
            pub fn normalize_mut(&mut self) {
                *self = self.normalize();
            }
        }

        impl<T: $crate::Scalar> $crate::vector::VectorSpace for $name<T> {
            type Scalar = T;

            #[inline]
            fn dot(self, rhs: Self) -> T {
                $name::dot(self, rhs)
            }

            #[inline]
            fn magnitude(self) -> T {
                $name::magnitude(self)
            }

            #[inline]
            fn normalize(self) -> Self {
                $name::normalize(self)
            }
        }

        // Conversions to and from arrays.
        impl<T: $crate::Scalar> From<[T; $dim]> for $name<T> {
            #[inline]
            fn from(arr: [T; $dim]) -> Self {
                Self::from_array(arr)
            }
        }

        impl<T: $crate::Scalar> From<$name<T>> for [T; $dim] {
            #[inline]
            fn from(v: $name<T>) -> Self {
                v.to_array()
            }
        }

        impl<T: $crate::Scalar> std::ops::Add for $name<T> {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self::Output {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl<T: $crate::Scalar> std::ops::Sub for $name<T> {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self::Output {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl<T: $crate::Scalar> std::ops::AddAssign for $name<T> {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                $(self.$field = self.$field + rhs.$field;)+
            }
        }

        impl<T: $crate::Scalar> std::ops::SubAssign for $name<T> {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$field = self.$field - rhs.$field;)+
            }
        }

        // `*=` and `/=` with a vector are elementwise, `*` between two vectors is the dot product.
        impl<T: $crate::Scalar> std::ops::MulAssign for $name<T> {
            #[inline]
            fn mul_assign(&mut self, rhs: Self) {
                $(self.$field = self.$field * rhs.$field;)+
            }
        }

        impl<T: $crate::Scalar> std::ops::DivAssign for $name<T> {
            #[inline]
            fn div_assign(&mut self, rhs: Self) {
                $(self.$field = self.$field / rhs.$field;)+
            }
        }

        impl<T: $crate::Scalar> std::ops::Mul for $name<T> {
            type Output = T;

            #[inline]
            fn mul(self, rhs: Self) -> Self::Output {
                self.dot(rhs)
            }
        }

        impl<T: $crate::Scalar> std::ops::Mul<T> for $name<T> {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: T) -> Self::Output {
                Self { $($field: self.$field * rhs),+ }
            }
        }

        impl<T: $crate::Scalar> std::ops::MulAssign<T> for $name<T> {
            #[inline]
            fn mul_assign(&mut self, rhs: T) {
                $(self.$field = self.$field * rhs;)+
            }
        }

        impl<T: $crate::Scalar> std::ops::Div<T> for $name<T> {
            type Output = Self;

            #[inline]
            fn div(self, rhs: T) -> Self::Output {
                Self { $($field: self.$field / rhs),+ }
            }
        }

        impl<T: $crate::Scalar> std::ops::DivAssign<T> for $name<T> {
            #[inline]
            fn div_assign(&mut self, rhs: T) {
                $(self.$field = self.$field / rhs;)+
            }
        }

        impl<T: $crate::Scalar> std::ops::Neg for $name<T> {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self::Output {
                Self { $($field: -self.$field),+ }
            }
        }

        impl std::ops::Mul<$name<f32>> for f32 {
            type Output = $name<f32>;

            #[inline]
            fn mul(self, rhs: $name<f32>) -> Self::Output {
                rhs * self
            }
        }

        impl std::ops::Mul<$name<f64>> for f64 {
            type Output = $name<f64>;

            #[inline]
            fn mul(self, rhs: $name<f64>) -> Self::Output {
                rhs * self
            }
        }

        impl<T: $crate::Scalar> approx::AbsDiffEq for $name<T> {
            type Epsilon = T;

            fn default_epsilon() -> T {
                T::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
                $(self.$field.abs_diff_eq(&other.$field, epsilon))&&+
            }
        }

        impl<T: $crate::Scalar> approx::RelativeEq for $name<T> {
            fn default_max_relative() -> T {
                T::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
                $(self.$field.relative_eq(&other.$field, epsilon, max_relative))&&+
            }
        }

        impl<T: $crate::Scalar> approx::UlpsEq for $name<T> {
            fn default_max_ulps() -> u32 {
                T::default_max_ulps()
            }

            fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
                $(self.$field.ulps_eq(&other.$field, epsilon, max_ulps))&&+
            }
        }

        // Debug rendering, e.g. `Vector3(1, 2, 3)`.
        impl<T: $crate::Scalar> std::fmt::Display for $name<T> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}(", stringify!($name))?;
                for (i, c) in self.to_array().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{c}")?;
                }
                write!(f, ")")
            }
        }
    };
}
