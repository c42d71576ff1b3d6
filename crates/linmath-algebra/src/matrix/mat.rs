//! Macro to define a square matrix type.
//!
//! Matrices are stored row-major in a public `m: [[T; N]; N]` array and act on
//! row vectors (`v · M`), so the product `A * B` applies `A` first and `B`
//! second. The macro generates everything that is dimension independent; the
//! per-size files provide `determinant`, `adjugate` and the matrix-vector
//! products.
//!
//! # Arguments
//!
//! * `name`     - The name of the matrix type.
//! * `vec_type` - The vector type used for rows and columns.
//! * `dim`      - The matrix dimension.
//! * `rows`     - Parameter names for the rows (e.g. `[r0, r1]`).
//!
macro_rules! define_matrix_type {
    (
        $(#[$meta:meta])*
        $name:ident,
        $vec_type:ident,
        $dim:literal,
        [$($row:ident),+]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(C)]
        pub struct $name<T> {
            /// Row-major elements, `m[row][col]`.
            pub m: [[T; $dim]; $dim],
        }

        impl<T: $crate::Scalar> $name<T> {
            /// Create a matrix from a row-major array.
            #[inline]
            pub fn from_rows_array(m: [[T; $dim]; $dim]) -> Self {
                Self { m }
            }

            /// Create a matrix from row vectors.
            #[inline]
            pub fn from_rows($($row: $crate::$vec_type<T>),+) -> Self {
                Self { m: [$($row.to_array()),+] }
            }

            /// Create a matrix from column vectors.
            #[inline]
            pub fn from_cols($($row: $crate::$vec_type<T>),+) -> Self {
                Self::from_rows($($row),+).transpose()
            }

            /// Matrix with every element set to zero.
            #[inline]
            pub fn zero() -> Self {
                Self { m: [[T::zero(); $dim]; $dim] }
            }

            /// Matrix with `diagonal` on the main diagonal and zero elsewhere.
            #[inline]
            pub fn from_diagonal(diagonal: T) -> Self {
                let mut m = [[T::zero(); $dim]; $dim];
                for (i, row) in m.iter_mut().enumerate() {
                    row[i] = diagonal;
                }
                Self { m }
            }

            /// Identity matrix.
            #[inline]
            pub fn identity() -> Self {
                Self::from_diagonal(T::one())
            }

            /// Reset to the identity in place.
            #[inline]
            pub fn set_identity(&mut self) -> &mut Self {
                *self = Self::identity();
                self
            }

            /// Reset every element to zero in place.
            #[inline]
            pub fn make_zero(&mut self) -> &mut Self {
                *self = Self::zero();
                self
            }

            /// Copy of row `i`.
            #[inline]
            pub fn row(&self, i: usize) -> $crate::$vec_type<T> {
                $crate::$vec_type::from_array(self.m[i])
            }

            /// Copy of column `j`.
            #[inline]
            pub fn col(&self, j: usize) -> $crate::$vec_type<T> {
                $crate::$vec_type::from_array(std::array::from_fn(|i| self.m[i][j]))
            }

            /// Overwrite row `i`.
            #[inline]
            pub fn set_row(&mut self, i: usize, row: $crate::$vec_type<T>) -> &mut Self {
                self.m[i] = row.to_array();
                self
            }

            /// Overwrite column `j`.
            #[inline]
            pub fn set_col(&mut self, j: usize, col: $crate::$vec_type<T>) -> &mut Self {
                for (row, value) in self.m.iter_mut().zip(col.to_array()) {
                    row[j] = value;
                }
                self
            }

            /// Transposed matrix, `m[i][j]` becomes `m[j][i]`.
            #[inline]
            pub fn transpose(&self) -> Self {
                Self { m: std::array::from_fn(|i| std::array::from_fn(|j| self.m[j][i])) }
            }

            /// Inverse computed as adjugate / determinant.
            ///
            /// Fails with [`AlgebraError::DivideByZero`](crate::AlgebraError) when
            /// the determinant is exactly zero.
            ///
            /// The test is exact. A matrix that is singular in exact arithmetic
            /// but whose elements are rounded (e.g. `0.1` in `f32`) can have a
            /// tiny non-zero determinant and yields a huge, meaningless inverse.
            /// Callers that need a conditioning check should compare
            /// [`determinant`](Self::determinant) against a tolerance suited to
            /// their data.
            pub fn try_inverse(&self) -> $crate::AlgebraResult<Self> {
                let det = self.determinant();
                if det == T::zero() {
                    return Err($crate::AlgebraError::DivideByZero {
                        op: concat!(stringify!($name), "::inverse"),
                    });
                }
                Ok(self.adjugate() * det.recip())
            }

            /// Inverse computed as adjugate / determinant.
            ///
            /// A singular matrix has no inverse; the identity is returned instead.
            /// Use [`Self::try_inverse`] to detect that case. Nearly singular
            /// matrices are inverted as is, see [`Self::try_inverse`].
            pub fn inverse(&self) -> Self {
                match self.try_inverse() {
                    Ok(inv) => inv,
                    Err(err) => {
                        log::debug!("{err}, falling back to identity");
                        Self::identity()
                    }
                }
            }
        }

        impl<T: $crate::Scalar> Default for $name<T> {
            fn default() -> Self {
                Self::zero()
            }
        }

        impl<T: $crate::Scalar> From<[[T; $dim]; $dim]> for $name<T> {
            #[inline]
            fn from(m: [[T; $dim]; $dim]) -> Self {
                Self::from_rows_array(m)
            }
        }

        impl<T: $crate::Scalar> From<$name<T>> for [[T; $dim]; $dim] {
            #[inline]
            fn from(m: $name<T>) -> Self {
                m.m
            }
        }

        // `m[i]` is row `i`, so `m[i][j]` addresses a single element.
        impl<T> std::ops::Index<usize> for $name<T> {
            type Output = [T; $dim];

            #[inline]
            fn index(&self, i: usize) -> &Self::Output {
                &self.m[i]
            }
        }

        impl<T> std::ops::IndexMut<usize> for $name<T> {
            #[inline]
            fn index_mut(&mut self, i: usize) -> &mut Self::Output {
                &mut self.m[i]
            }
        }

        // Matrix-matrix multiplication.
        impl<T: $crate::Scalar> std::ops::Mul for $name<T> {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self::Output {
                let mut out = [[T::zero(); $dim]; $dim];
                for (i, row) in out.iter_mut().enumerate() {
                    for (j, cell) in row.iter_mut().enumerate() {
                        *cell = (0..$dim)
                            .fold(T::zero(), |acc, k| acc + self.m[i][k] * rhs.m[k][j]);
                    }
                }
                Self { m: out }
            }
        }

        impl<T: $crate::Scalar> std::ops::MulAssign for $name<T> {
            #[inline]
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        impl<T: $crate::Scalar> std::ops::Mul<T> for $name<T> {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: T) -> Self::Output {
                Self { m: self.m.map(|row| row.map(|v| v * rhs)) }
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

        impl<T: $crate::Scalar> std::ops::Add for $name<T> {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self::Output {
                Self {
                    m: std::array::from_fn(|i| {
                        std::array::from_fn(|j| self.m[i][j] + rhs.m[i][j])
                    }),
                }
            }
        }

        impl<T: $crate::Scalar> std::ops::Sub for $name<T> {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self::Output {
                Self {
                    m: std::array::from_fn(|i| {
                        std::array::from_fn(|j| self.m[i][j] - rhs.m[i][j])
                    }),
                }
            }
        }

        impl<T: $crate::Scalar> approx::AbsDiffEq for $name<T> {
            type Epsilon = T;

            fn default_epsilon() -> T {
                T::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
                self.m
                    .iter()
                    .flatten()
                    .zip(other.m.iter().flatten())
                    .all(|(a, b)| a.abs_diff_eq(b, epsilon))
            }
        }

        impl<T: $crate::Scalar> approx::RelativeEq for $name<T> {
            fn default_max_relative() -> T {
                T::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
                self.m
                    .iter()
                    .flatten()
                    .zip(other.m.iter().flatten())
                    .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
            }
        }

        impl<T: $crate::Scalar> approx::UlpsEq for $name<T> {
            fn default_max_ulps() -> u32 {
                T::default_max_ulps()
            }

            fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
                self.m
                    .iter()
                    .flatten()
                    .zip(other.m.iter().flatten())
                    .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
            }
        }

        impl<T: $crate::Scalar> std::fmt::Display for $name<T> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}(", stringify!($name))?;
                for i in 0..$dim {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", self.row(i))?;
                }
                write!(f, ")")
            }
        }
    };
}
