//! sRGB tristimulus values.
//!
//! [`Rgb`] holds sRGB-encoded components (IEC 61966-2-1, D65). Conversion to
//! relative XYZ decodes with the sRGB EOTF, then applies the sRGB primaries
//! matrix:
//!
//! ```text
//! encoded RGB -> srgb::eotf -> linear RGB -> SRGB_TO_XYZ -> relative XYZ
//! ```
//!
//! Out-of-gamut colors produce components outside [0, 1]; they are not
//! clamped here.

use crate::RelativeXyz;
use ledcms_math::{Mat3, Vec3};
use ledcms_transfer::srgb;
use serde::{Deserialize, Serialize};

/// Linear sRGB to XYZ (D65) matrix.
pub const SRGB_TO_XYZ: Mat3 = Mat3::from_rows([
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
]);

/// XYZ (D65) to linear sRGB matrix.
pub const XYZ_TO_SRGB: Mat3 = Mat3::from_rows([
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
]);

/// sRGB-encoded color.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgb {
    /// Red, encoded
    pub r: f64,
    /// Green, encoded
    pub g: f64,
    /// Blue, encoded
    pub b: f64,
}

impl Rgb {
    /// Creates a new encoded value.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// From 8-bit components.
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    /// Linear-light components.
    #[inline]
    pub fn to_linear(self) -> Vec3 {
        Vec3::from_array(srgb::eotf_rgb([self.r, self.g, self.b]))
    }

    /// Encodes linear-light components.
    #[inline]
    pub fn from_linear(linear: Vec3) -> Self {
        let [r, g, b] = srgb::oetf_rgb(linear.to_array());
        Self::new(r, g, b)
    }

    /// To relative XYZ (`Y = 1` for white).
    pub fn to_relative_xyz(self) -> RelativeXyz {
        RelativeXyz::from_vec3(SRGB_TO_XYZ * self.to_linear())
    }

    /// From relative XYZ.
    pub fn from_relative_xyz(color: RelativeXyz) -> Self {
        Self::from_linear(XYZ_TO_SRGB * color.to_vec3())
    }
}

impl From<Rgb> for RelativeXyz {
    fn from(c: Rgb) -> Self {
        c.to_relative_xyz()
    }
}

impl From<RelativeXyz> for Rgb {
    fn from(c: RelativeXyz) -> Self {
        Rgb::from_relative_xyz(c)
    }
}
