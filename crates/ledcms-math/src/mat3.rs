//! 3x3 matrices for tristimulus transforms.
//!
//! Matrices act on column vectors (`xyz = m * rgb`). A matrix whose columns
//! are channel colors maps drive levels to XYZ; its inverse maps XYZ back to
//! drive levels.
//!
//! # Usage
//!
//! ```rust
//! use ledcms_math::{Mat3, Vec3};
//!
//! // Linear sRGB to XYZ (D65)
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.4124564, 0.3575761, 0.1804375],
//!     [0.2126729, 0.7151522, 0.0721750],
//!     [0.0193339, 0.1191920, 0.9503041],
//! ]);
//!
//! let xyz = rgb_to_xyz * Vec3::new(1.0, 0.0, 0.0);
//! let back = rgb_to_xyz.inverse().unwrap() * xyz;
//! assert!((back.x - 1.0).abs() < 1e-9);
//! ```

use crate::Vec3;
use ledcms_core::{ColorError, ColorResult};
use std::ops::Mul;

/// Smallest accepted `|det| / (|c0| * |c1| * |c2|)`, the volume spanned by
/// the columns relative to a box with the same edge lengths.
pub const SINGULAR_TOLERANCE: f64 = 1e-12;

/// A 3x3 matrix of `f64`, stored as rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    rows: [Vec3; 3],
}

impl Mat3 {
    /// Identity matrix.
    pub const IDENTITY: Self =
        Self::from_rows([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);

    /// From row-major components, as matrices are usually printed.
    pub const fn from_rows(m: [[f64; 3]; 3]) -> Self {
        Self {
            rows: [
                Vec3::from_array(m[0]),
                Vec3::from_array(m[1]),
                Vec3::from_array(m[2]),
            ],
        }
    }

    /// From three columns, e.g. the XYZ of three channels.
    pub fn from_cols(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self::from_rows([
            [c0.x, c1.x, c2.x],
            [c0.y, c1.y, c2.y],
            [c0.z, c1.z, c2.z],
        ])
    }

    /// Row `i`. Panics for `i > 2`.
    #[inline]
    pub fn row(&self, i: usize) -> Vec3 {
        self.rows[i]
    }

    /// Column `i`. Panics for `i > 2`.
    #[inline]
    pub fn col(&self, i: usize) -> Vec3 {
        let [r0, r1, r2] = self.rows;
        Vec3::new(r0[i], r1[i], r2[i])
    }

    /// Determinant, as the triple product of the columns.
    pub fn determinant(&self) -> f64 {
        self.col(0).dot(self.col(1).cross(self.col(2)))
    }

    /// Inverse matrix.
    ///
    /// Row `i` of the inverse is the cross product of the other two columns
    /// divided by the determinant, so it is orthogonal to every column but
    /// column `i`. Fails with [`ColorError::SingularMatrix`] when the
    /// determinant is not finite or within [`SINGULAR_TOLERANCE`] of zero,
    /// relative to the column lengths.
    pub fn inverse(&self) -> ColorResult<Self> {
        let (c0, c1, c2) = (self.col(0), self.col(1), self.col(2));
        let det = self.determinant();
        let volume = c0.length() * c1.length() * c2.length();
        if !det.is_finite() || det.abs() <= SINGULAR_TOLERANCE * volume {
            return Err(ColorError::SingularMatrix { channels: 3 });
        }
        let k = det.recip();
        Ok(Self {
            rows: [c1.cross(c2) * k, c2.cross(c0) * k, c0.cross(c1) * k],
        })
    }

    /// False if any element is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.rows.iter().all(|r| r.is_finite())
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, v: Vec3) -> Vec3 {
        let [r0, r1, r2] = self.rows;
        Vec3::new(r0.dot(v), r1.dot(v), r2.dot(v))
    }
}

impl Mul for Mat3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::from_cols(self * rhs.col(0), self * rhs.col(1), self * rhs.col(2))
    }
}

impl From<glam::DMat3> for Mat3 {
    fn from(m: glam::DMat3) -> Self {
        Self::from_cols(m.x_axis.into(), m.y_axis.into(), m.z_axis.into())
    }
}

impl From<Mat3> for glam::DMat3 {
    fn from(m: Mat3) -> Self {
        glam::DMat3::from_cols(m.col(0).into(), m.col(1).into(), m.col(2).into())
    }
}
