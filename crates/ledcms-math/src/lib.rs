//! # ledcms-math
//!
//! Math utilities for LED color management.
//!
//! This crate provides the linear algebra behind color mixing:
//!
//! - [`Vec3`] - 3D vectors for XYZ triplets
//! - [`Mat3`] - 3x3 matrices with closed-form inversion
//! - [`Transformation`] - per-channel XYZ columns (linear DCS -> XYZ)
//! - [`InverseTransformation`] - per-channel XYZ rows (XYZ -> linear DCS),
//!   including the degenerate 1- and 2-channel cases
//!
//! # Design
//!
//! All matrix operations assume **row-major** storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! Components are `f64`; profile round-trips are checked at the 1e-6 level.
//!
//! # Dependencies
//!
//! - [`glam`] - interop with `DVec3` / `DMat3`
//! - `ledcms-core` - errors and DCS vectors
//!
//! # Used By
//!
//! - `ledcms-color` - XYZ value types
//! - `ledcms-profile` - forward and inverse color conversion

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod transformation;
mod vec3;

pub use mat3::*;
pub use transformation::*;
pub use vec3::*;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{DMat3, DVec3};
}
