//! CIE 1931 xyY: chromaticity plus luminance.
//!
//! ```text
//! X = x * Y / y
//! Z = (1 - x - y) * Y / y
//! ```
//!
//! The conversion is undefined for `y = 0`. `try_to_vec3` reports it as an
//! error; the infallible conversions return black.
//!
//! Like XYZ, xyY comes in two flavors: [`XyY`] with `Y` in lumens and
//! [`RelativeXyY`] with `Y = 1` at a device's maximum output.

use crate::{RelativeXyz, Xyz};
use ledcms_core::{ColorError, ColorResult};
use ledcms_math::Vec3;
use serde::{Deserialize, Serialize};

macro_rules! chromaticity_luminance {
    ($(#[$meta:meta])* $name:ident => $xyz:ident, $to_xyz:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
        pub struct $name {
            /// x chromaticity
            pub x: f64,
            /// y chromaticity
            pub y: f64,
            /// Luminance (Y)
            pub luminance: f64,
        }

        impl $name {
            /// Creates a new value.
            #[inline]
            pub const fn new(x: f64, y: f64, luminance: f64) -> Self {
                Self { x, y, luminance }
            }

            /// From an XYZ triplet. Black maps to `(0, 0, 0)`.
            pub fn from_vec3(v: Vec3) -> Self {
                let sum = v.x + v.y + v.z;
                if sum == 0.0 {
                    return Self::default();
                }
                Self::new(v.x / sum, v.y / sum, v.y)
            }

            /// To an XYZ triplet.
            ///
            /// Fails with [`ColorError::InvalidValue`] when `y = 0`.
            pub fn try_to_vec3(self) -> ColorResult<Vec3> {
                if self.y == 0.0 || !self.y.is_finite() {
                    return Err(ColorError::InvalidValue(format!(
                        "chromaticity y must be non-zero, got ({}, {})",
                        self.x, self.y
                    )));
                }
                let scale = self.luminance / self.y;
                Ok(Vec3::new(
                    self.x * scale,
                    self.luminance,
                    (1.0 - self.x - self.y) * scale,
                ))
            }

            /// To an XYZ triplet; black when `y = 0`.
            #[inline]
            pub fn to_vec3(self) -> Vec3 {
                self.try_to_vec3().unwrap_or(Vec3::ZERO)
            }

            #[doc = concat!("To [`", stringify!($xyz), "`]; black when `y = 0`.")]
            #[inline]
            pub fn $to_xyz(self) -> $xyz {
                $xyz::from_vec3(self.to_vec3())
            }
        }

        impl From<$xyz> for $name {
            fn from(c: $xyz) -> Self {
                Self::from_vec3(c.to_vec3())
            }
        }
    };
}

chromaticity_luminance!(
    /// Chromaticity `(x, y)` plus luminance `Y` in lumens.
    XyY => Xyz, to_xyz
);

chromaticity_luminance!(
    /// Chromaticity `(x, y)` plus relative luminance, `Y = 1` at a device's
    /// maximum output.
    RelativeXyY => RelativeXyz, to_relative_xyz
);

impl XyY {
    /// Normalizes to a device whose maximum output is `max` lumens.
    #[inline]
    pub fn relative(self, max: f64) -> RelativeXyY {
        RelativeXyY::new(self.x, self.y, self.luminance / max)
    }
}

impl RelativeXyY {
    /// Scales to lumens for a device whose maximum output is `max`.
    #[inline]
    pub fn absolute(self, max: f64) -> XyY {
        XyY::new(self.x, self.y, self.luminance * max)
    }
}
