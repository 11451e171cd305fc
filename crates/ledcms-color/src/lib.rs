//! # ledcms-color
//!
//! Device-independent colorimetric value types.
//!
//! - [`Xyz`] - CIE 1931 XYZ, absolute (lumens)
//! - [`RelativeXyz`] - CIE 1931 XYZ, `Y = 1` at device maximum
//! - [`XyY`] - CIE 1931 chromaticity plus luminance (lumens)
//! - [`RelativeXyY`] - CIE 1931 chromaticity plus relative luminance
//! - [`Lab`] - CIE 1976 L*a*b* with its reference white
//! - [`Rgb`] - sRGB-encoded tristimulus value
//!
//! # Conversions
//!
//! ```text
//!            relative(max)             from_xyz(white)
//!   Xyz  <----------------->  RelativeXyz  <------------>  Lab
//!    ^       absolute(max)       ^    ^        to_xyz
//!    |                           |    |
//!   XyY  <----------------->  RelativeXyY  Rgb
//! ```
//!
//! # Usage
//!
//! ```rust
//! use ledcms_color::{D65_WHITE, Lab, RelativeXyY, Rgb};
//!
//! let orange = Rgb::from_u8(255, 128, 0).to_relative_xyz();
//! let xyy = RelativeXyY::from(orange);
//! let lab = Lab::from_xyz(orange, D65_WHITE);
//! assert!(lab.a > 0.0 && lab.b > 0.0);
//! assert!(xyy.x > xyy.y);
//! ```
//!
//! # Dependencies
//!
//! - `ledcms-core` - errors
//! - `ledcms-math` - Vec3, Mat3
//! - `ledcms-transfer` - sRGB curve
//! - [`serde`] - value serialization
//!
//! # Used By
//!
//! - `ledcms-illuminant` - reference colors
//! - `ledcms-profile` - XYZ <-> DCS conversion

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod lab;
mod rgb;
mod xyy;
mod xyz;

pub use lab::{D65_WHITE, Lab};
pub use rgb::{Rgb, SRGB_TO_XYZ, XYZ_TO_SRGB};
pub use xyy::{RelativeXyY, XyY};
pub use xyz::{RelativeXyz, Xyz};
