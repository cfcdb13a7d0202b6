//! Fixed-capacity N-dimensional vector
//!
//! One backing array of up to [`MAX_DIM`] scalar slots, of which the leading
//! `size` are active. Typical instances are 2D (kinematic state) or 3D, but
//! consumers may use any dimensionality up to the capacity. Named component
//! access goes through `x()`/`y()`/`z()`, which read the leading slots
//! directly; inactive slots stay zero-filled, so an undersized vector reads
//! as zero rather than as garbage.
//!
//! The Euclidean length and squared length are cached and recomputed by
//! every mutation path, so they can never drift from the components.
//!
//! Arithmetic between vectors of different dimensionality operates on the
//! shared prefix only; the result takes the left operand's size and trailing
//! components of the larger operand are dropped. Division and normalization
//! by zero are not guarded: they yield NaN/Inf that propagate downstream.

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::{IgnoreReason, OpOutcome};

/// Maximum number of scalar slots a vector can carry
pub const MAX_DIM: usize = 12;

/// A fixed-capacity numeric tuple with cached length
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Vector<T = f64> {
    size: usize,
    components: [T; MAX_DIM],
    length: T,
    sqr_length: T,
}

/// Raw snapshot shape accepted by deserialization; sanitized into a
/// [`Vector`] so a tampered snapshot cannot smuggle in an oversized `size`
/// or stale cached lengths.
#[derive(Deserialize)]
#[serde(rename = "Vector")]
struct VectorSnapshot<T> {
    size: usize,
    components: [T; MAX_DIM],
    #[serde(default = "Option::default")]
    #[allow(dead_code)]
    length: Option<T>,
    #[serde(default = "Option::default")]
    #[allow(dead_code)]
    sqr_length: Option<T>,
}

impl<'de, T: Float + serde::Deserialize<'de>> serde::Deserialize<'de> for Vector<T> {
    /// Deserialize a snapshot, clamping `size` to capacity and recomputing
    /// the cached lengths from the components (snapshot lengths are ignored).
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let snapshot = VectorSnapshot::<T>::deserialize(deserializer)?;
        let mut v = Self {
            size: snapshot.size.min(MAX_DIM),
            components: snapshot.components,
            length: T::zero(),
            sqr_length: T::zero(),
        };
        v.update_length();
        Ok(v)
    }
}

impl<T: Float> Vector<T> {
    /// Create a zero-filled vector with the given active dimensionality.
    ///
    /// Sizes beyond the capacity are clamped to [`MAX_DIM`].
    pub fn new(size: usize) -> Self {
        Self {
            size: size.min(MAX_DIM),
            components: [T::zero(); MAX_DIM],
            length: T::zero(),
            sqr_length: T::zero(),
        }
    }

    /// Explicit zero vector of the requested dimension
    #[inline]
    pub fn zero(size: usize) -> Self {
        Self::new(size)
    }

    /// 2D vector from named components
    pub fn from_xy(x: T, y: T) -> Self {
        let mut v = Self::new(2);
        let _ = v.set_xy(x, y);
        v
    }

    /// 3D vector from named components
    pub fn from_xyz(x: T, y: T, z: T) -> Self {
        let mut v = Self::new(3);
        let _ = v.set_xyz(x, y, z);
        v
    }

    /// Active dimensionality
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// True for the 0-dimension vector (e.g. an unsupported cross product)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// First component (zero when the vector has no active dimensions)
    #[inline]
    pub fn x(&self) -> T {
        self.components[0]
    }

    /// Second component (zero when inactive)
    #[inline]
    pub fn y(&self) -> T {
        self.components[1]
    }

    /// Third component (zero when inactive)
    #[inline]
    pub fn z(&self) -> T {
        self.components[2]
    }

    /// Cached Euclidean length
    #[inline]
    pub fn length(&self) -> T {
        self.length
    }

    /// Cached squared length
    #[inline]
    pub fn sqr_length(&self) -> T {
        self.sqr_length
    }

    /// The active components as a read-only slice
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.components[..self.size]
    }

    /// Write the first two components. Ignored when the vector carries
    /// fewer than two dimensions.
    pub fn set_xy(&mut self, x: T, y: T) -> OpOutcome {
        if self.size < 2 {
            return OpOutcome::Ignored(IgnoreReason::DimensionTooSmall);
        }
        self.components[0] = x;
        self.components[1] = y;
        self.update_length();
        OpOutcome::Applied
    }

    /// Write the first three components. Ignored when the vector carries
    /// fewer than three dimensions.
    pub fn set_xyz(&mut self, x: T, y: T, z: T) -> OpOutcome {
        if self.size < 3 {
            return OpOutcome::Ignored(IgnoreReason::DimensionTooSmall);
        }
        self.components[0] = x;
        self.components[1] = y;
        self.components[2] = z;
        self.update_length();
        OpOutcome::Applied
    }

    /// Copy values over the shared prefix of the active components and the
    /// given slice; excess values on either side are ignored.
    pub fn set_slice(&mut self, values: &[T]) {
        let n = self.size.min(values.len());
        self.components[..n].copy_from_slice(&values[..n]);
        self.update_length();
    }

    /// Overwrite a single active component. Ignored when the index is at or
    /// beyond the active dimensionality. This is the write path used by the
    /// console collaborator's set-by-name commands.
    pub fn set_component(&mut self, index: usize, value: T) -> OpOutcome {
        if index >= self.size {
            return OpOutcome::Ignored(IgnoreReason::IndexOutOfRange);
        }
        self.components[index] = value;
        self.update_length();
        OpOutcome::Applied
    }

    /// Multiply every active component by a scalar, in place
    pub fn scale(&mut self, n: T) {
        for c in &mut self.components[..self.size] {
            *c = *c * n;
        }
        self.update_length();
    }

    /// Normalize in place. Undefined for zero length (components become NaN).
    pub fn normalize(&mut self) {
        let len = self.length;
        self.scale(T::one() / len);
    }

    /// Return a unit-length copy. Undefined for zero length.
    pub fn normalized(&self) -> Self {
        let mut v = *self;
        v.normalize();
        v
    }

    /// Dot product over the shared prefix of both operands
    pub fn dot(&self, other: &Self) -> T {
        let n = self.size.min(other.size);
        let mut sum = T::zero();
        for i in 0..n {
            sum = sum + self.components[i] * other.components[i];
        }
        sum
    }

    /// Cross product.
    ///
    /// Two 2D operands yield a 1D vector holding the z-component of the 3D
    /// cross product; two 3D operands yield the full 3D cross product. Any
    /// other pairing is unsupported and yields the empty (0-dimension)
    /// vector rather than an error.
    pub fn cross(&self, other: &Self) -> Self {
        if self.size == 2 && other.size == 2 {
            let mut result = Self::new(1);
            result.components[0] = self.x() * other.y() - self.y() * other.x();
            result.update_length();
            result
        } else if self.size == 3 && other.size == 3 {
            let mut result = Self::new(3);
            result.components[0] = self.y() * other.z() - self.z() * other.y();
            result.components[1] = self.z() * other.x() - self.x() * other.z();
            result.components[2] = self.x() * other.y() - self.y() * other.x();
            result.update_length();
            result
        } else {
            Self::new(0)
        }
    }

    /// Cosine of the angle between two vectors (dot of their unit vectors)
    pub fn cosine(&self, other: &Self) -> T {
        self.normalized().dot(&other.normalized())
    }

    /// Sine of the angle between two vectors, as `sqrt(1 - cos²)`.
    ///
    /// Always non-negative; the sign of the angle cannot be recovered from
    /// this quantity.
    pub fn sine(&self, other: &Self) -> T {
        let c = self.cosine(other);
        (T::one() - c * c).sqrt()
    }

    fn update_length(&mut self) {
        let mut sq = T::zero();
        for c in &self.components[..self.size] {
            sq = sq + *c * *c;
        }
        self.sqr_length = sq;
        self.length = sq.sqrt();
    }
}

impl<T: Float> std::ops::Add for Vector<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        // prefix-only: trailing components beyond the shared dimensions are
        // dropped (left as zero), matching the dimension-mismatch contract
        let mut result = Self::new(self.size);
        let n = self.size.min(rhs.size);
        for i in 0..n {
            result.components[i] = self.components[i] + rhs.components[i];
        }
        result.update_length();
        result
    }
}

impl<T: Float> std::ops::Sub for Vector<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let mut result = Self::new(self.size);
        let n = self.size.min(rhs.size);
        for i in 0..n {
            result.components[i] = self.components[i] - rhs.components[i];
        }
        result.update_length();
        result
    }
}

impl<T: Float> std::ops::Mul<T> for Vector<T> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        let mut result = self;
        result.scale(scalar);
        result
    }
}

impl<T: Float> std::ops::Div<T> for Vector<T> {
    type Output = Self;

    /// Scalar division. Division by zero is not guarded.
    fn div(self, scalar: T) -> Self {
        let mut result = self;
        result.scale(T::one() / scalar);
        result
    }
}

impl<T: Float> std::ops::Neg for Vector<T> {
    type Output = Self;

    fn neg(self) -> Self {
        let mut result = self;
        result.scale(-T::one());
        result
    }
}
