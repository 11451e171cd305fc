//! Tristimulus triplets.
//!
//! [`Vec3`] is the working type for XYZ values and for the columns and rows
//! of channel transformations.
//!
//! # Usage
//!
//! ```rust
//! use ledcms_math::Vec3;
//!
//! let red = Vec3::new(0.4125, 0.2127, 0.0193);
//! let green = Vec3::new(0.3576, 0.7152, 0.1192);
//! let yellow = red + green;
//! assert!((yellow.y - 0.9279).abs() < 1e-12);
//!
//! // Normal to the plane spanned by two channels
//! let normal = red.cross(green);
//! assert!(normal.dot(red).abs() < 1e-12);
//! ```

use std::ops::{Add, AddAssign, Index, Mul, Neg, Sub};

/// An `(X, Y, Z)` triplet.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vec3 {
    /// X
    pub x: f64,
    /// Y, luminance
    pub y: f64,
    /// Z
    pub z: f64,
}

impl Vec3 {
    /// `(0, 0, 0)`
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// `(1, 1, 1)`
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    /// X axis
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    /// Y axis
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    /// Z axis
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a triplet.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// From `[x, y, z]`.
    #[inline]
    pub const fn from_array(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// `[x, y, z]`
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Weighted sum of components, i.e. one row of a matrix product.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x
            .mul_add(other.x, self.y.mul_add(other.y, self.z * other.z))
    }

    /// Cross product; zero for parallel inputs.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Euclidean length.
    #[inline]
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// False if any component is NaN or infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.to_array().iter().all(|c| c.is_finite())
    }
}

impl Index<usize> for Vec3 {
    type Output = f64;

    /// Panics for `i > 2`.
    #[inline]
    fn index(&self, i: usize) -> &f64 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of bounds: {i}"),
        }
    }
}

impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vec3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self * -1.0
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k, self.z * k)
    }
}

impl From<[f64; 3]> for Vec3 {
    #[inline]
    fn from(a: [f64; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<glam::DVec3> for Vec3 {
    #[inline]
    fn from(v: glam::DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for glam::DVec3 {
    #[inline]
    fn from(v: Vec3) -> Self {
        glam::DVec3::new(v.x, v.y, v.z)
    }
}
