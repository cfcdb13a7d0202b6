//! 2x2 rotation matrix
//!
//! Built from an angle as `[[cos θ, -sin θ], [sin θ, cos θ]]`, stored
//! row-major. Only the four entries are stored; the generating angle is
//! recomputed from the entries on demand, so transposing (which for a pure
//! rotation equals inversion) can never leave a stale cached angle behind.

use num_traits::Float;
use serde::{Deserialize, Serialize};

use super::Vector;

/// A 2x2 matrix, row-major
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Matrix<T = f64> {
    components: [T; 4],
}

impl<T: Float> Matrix<T> {
    /// Rotation matrix for the given angle in radians
    pub fn from_angle(rad: T) -> Self {
        let mut m = Self {
            components: [T::zero(); 4],
        };
        m.set_angle(rad);
        m
    }

    /// The identity (rotation by zero)
    pub fn identity() -> Self {
        Self::from_angle(T::zero())
    }

    /// Re-derive all four entries from a new rotation angle, in place
    pub fn set_angle(&mut self, rad: T) {
        let c = rad.cos();
        let s = rad.sin();
        self.components = [c, -s, s, c];
    }

    /// The rotation angle, recomputed from the entries via `atan2`.
    ///
    /// Well-defined for rotation matrices; for transposed or otherwise
    /// hand-edited content this reports the angle of the first column.
    pub fn angle(&self) -> T {
        self.components[2].atan2(self.components[0])
    }

    /// The four entries, row-major
    #[inline]
    pub fn components(&self) -> [T; 4] {
        self.components
    }

    /// Return a copy with the off-diagonal entries swapped.
    ///
    /// For a rotation matrix the transpose is the inverse rotation.
    pub fn transpose(&self) -> Self {
        let mut m = *self;
        m.transpose_in_place();
        m
    }

    /// Swap the off-diagonal entries in place
    pub fn transpose_in_place(&mut self) {
        self.components.swap(1, 2);
    }

    /// Apply the matrix to the first two components of a vector.
    ///
    /// The result is always 2D. Inactive input slots read as zero, so a
    /// vector with fewer than two dimensions transforms as if zero-padded.
    pub fn transform(&self, v: &Vector<T>) -> Vector<T> {
        let [a, b, c, d] = self.components;
        Vector::from_xy(a * v.x() + b * v.y(), c * v.x() + d * v.y())
    }
}

impl<T: Float> std::ops::Mul for Matrix<T> {
    type Output = Self;

    /// Standard 2x2 matrix product
    fn mul(self, rhs: Self) -> Self {
        let [a, b, c, d] = self.components;
        let [e, f, g, h] = rhs.components;
        Self {
            components: [
                a * e + b * g,
                a * f + b * h,
                c * e + d * g,
                c * f + d * h,
            ],
        }
    }
}

impl<T: Float> std::ops::Mul<Vector<T>> for Matrix<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: Vector<T>) -> Vector<T> {
        self.transform(&rhs)
    }
}
