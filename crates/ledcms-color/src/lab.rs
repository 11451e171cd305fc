//! CIE 1976 L*a*b*.
//!
//! A [`Lab`] value remembers the reference white it was computed against.
//! Color differences are only meaningful between values sharing that white,
//! so [`Lab::delta_e`] refuses to compare across white points.
//!
//! # Usage
//!
//! ```rust
//! use ledcms_color::{D65_WHITE, Lab, RelativeXyz};
//!
//! let a = Lab::from_xyz(RelativeXyz::new(0.5, 0.4, 0.3), D65_WHITE);
//! let b = Lab::from_xyz(RelativeXyz::new(0.5, 0.41, 0.3), D65_WHITE);
//! assert!(a.delta_e(&b).unwrap() < 2.3);
//! ```

use crate::RelativeXyz;
use ledcms_core::{ColorError, ColorResult};
use serde::{Deserialize, Serialize};

/// CIE standard illuminant D65 as a relative white (`Y = 1`).
pub const D65_WHITE: RelativeXyz = RelativeXyz::new(0.95047, 1.0, 1.08883);

// CIE-exact constants: 216/24389 and 24389/27.
const EPSILON: f64 = 216.0 / 24389.0;
const KAPPA: f64 = 24389.0 / 27.0;

#[inline]
fn f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

#[inline]
fn f_inv(t: f64) -> f64 {
    let t3 = t * t * t;
    if t3 > EPSILON {
        t3
    } else {
        (116.0 * t - 16.0) / KAPPA
    }
}

/// CIE 1976 L*a*b* value with its reference white.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lab {
    /// Lightness, 0 (black) to 100 (reference white)
    pub l: f64,
    /// Green (-) to red (+)
    pub a: f64,
    /// Blue (-) to yellow (+)
    pub b: f64,
    /// Reference white
    pub white: RelativeXyz,
}

impl Lab {
    /// Creates a value from components.
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64, white: RelativeXyz) -> Self {
        Self { l, a, b, white }
    }

    /// Converts a relative XYZ color under the given reference white.
    pub fn from_xyz(color: RelativeXyz, white: RelativeXyz) -> Self {
        let fx = f(color.x / white.x);
        let fy = f(color.y / white.y);
        let fz = f(color.z / white.z);
        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
            white,
        }
    }

    /// Converts back to relative XYZ.
    pub fn to_xyz(&self) -> RelativeXyz {
        let fy = (self.l + 16.0) / 116.0;
        let fx = fy + self.a / 500.0;
        let fz = fy - self.b / 200.0;
        let yr = if self.l > KAPPA * EPSILON {
            fy * fy * fy
        } else {
            self.l / KAPPA
        };
        RelativeXyz::new(
            f_inv(fx) * self.white.x,
            yr * self.white.y,
            f_inv(fz) * self.white.z,
        )
    }

    /// CIE76 color difference ΔE*.
    ///
    /// Fails with [`ColorError::WhitePointMismatch`] unless both values use
    /// the same reference white.
    pub fn delta_e(&self, other: &Self) -> ColorResult<f64> {
        if self.white != other.white {
            return Err(ColorError::WhitePointMismatch);
        }
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        Ok((dl * dl + da * da + db * db).sqrt())
    }

    /// Chroma C*ab.
    #[inline]
    pub fn chroma(&self) -> f64 {
        self.a.hypot(self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_white_is_100() {
        let lab = Lab::from_xyz(D65_WHITE, D65_WHITE);
        assert_abs_diff_eq!(lab.l, 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(lab.a, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(lab.b, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_known_value() {
        // sRGB red under D65
        let lab = Lab::from_xyz(RelativeXyz::new(0.4124, 0.2126, 0.0193), D65_WHITE);
        assert_abs_diff_eq!(lab.l, 53.24, epsilon = 0.05);
        assert_abs_diff_eq!(lab.a, 80.1, epsilon = 0.2);
        assert_abs_diff_eq!(lab.b, 67.2, epsilon = 0.2);
    }

    #[test]
    fn test_roundtrip() {
        let colors = [
            RelativeXyz::new(0.5, 0.4, 0.3),
            RelativeXyz::new(0.001, 0.002, 0.003), // linear segment
            RelativeXyz::new(0.2, 0.7, 0.1),
        ];
        for c in colors {
            let back = Lab::from_xyz(c, D65_WHITE).to_xyz();
            assert_abs_diff_eq!(back.x, c.x, epsilon = 1e-12);
            assert_abs_diff_eq!(back.y, c.y, epsilon = 1e-12);
            assert_abs_diff_eq!(back.z, c.z, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_delta_e() {
        let a = Lab::new(50.0, 10.0, 10.0, D65_WHITE);
        let b = Lab::new(53.0, 14.0, 10.0, D65_WHITE);
        assert_abs_diff_eq!(a.delta_e(&b).unwrap(), 5.0);
        assert_abs_diff_eq!(b.chroma(), 14.0f64.hypot(10.0));
    }

    #[test]
    fn test_delta_e_white_mismatch() {
        let d50 = RelativeXyz::new(0.96422, 1.0, 0.82521);
        let a = Lab::new(50.0, 0.0, 0.0, D65_WHITE);
        let b = Lab::new(50.0, 0.0, 0.0, d50);
        assert_eq!(a.delta_e(&b), Err(ColorError::WhitePointMismatch));
    }
}
