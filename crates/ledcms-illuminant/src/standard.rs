//! CIE standard illuminants as relative white points.
//!
//! All values are normalized to `Y = 1`. Use [`StandardIlluminant::scaled`]
//! to obtain an absolute color at a given luminous flux.
//!
//! # Usage
//!
//! ```rust
//! use ledcms_illuminant::{D65, StandardIlluminant};
//!
//! assert_eq!(StandardIlluminant::D65.xyz(), D65);
//! let bright = StandardIlluminant::A.scaled(789.0);
//! assert_eq!(bright.y, 789.0);
//! ```

use ledcms_color::{RelativeXyz, Xyz};
use serde::{Deserialize, Serialize};
use std::fmt;

/// CIE Standard Illuminant A (tungsten, ~2856K).
pub const A: RelativeXyz = RelativeXyz::new(1.09850, 1.0, 0.35585);

/// CIE Standard Illuminant B (direct sunlight, ~4874K). Deprecated by the CIE.
pub const B: RelativeXyz = RelativeXyz::new(0.99093, 1.0, 0.85313);

/// CIE Standard Illuminant C (average daylight, ~6774K). Deprecated by the CIE.
pub const C: RelativeXyz = RelativeXyz::new(0.98074, 1.0, 1.18232);

/// CIE Standard Illuminant D50 (horizon light, ~5000K).
///
/// Reference white for ICC profiles and the printing industry.
pub const D50: RelativeXyz = RelativeXyz::new(0.96422, 1.0, 0.82521);

/// CIE Standard Illuminant D55 (mid-morning daylight, ~5500K).
pub const D55: RelativeXyz = RelativeXyz::new(0.95682, 1.0, 0.92149);

/// CIE Standard Illuminant D65 (noon daylight, ~6500K).
///
/// Reference white for sRGB and Rec.709.
pub const D65: RelativeXyz = RelativeXyz::new(0.95047, 1.0, 1.08883);

/// CIE Standard Illuminant D75 (north sky daylight, ~7500K).
pub const D75: RelativeXyz = RelativeXyz::new(0.94972, 1.0, 1.22638);

/// D93 (~9300K), the white of older CRT displays.
pub const D93: RelativeXyz = RelativeXyz::new(0.95301, 1.0, 1.41274);

/// CIE Standard Illuminant E (equal energy).
pub const E: RelativeXyz = RelativeXyz::new(1.0, 1.0, 1.0);

/// A named CIE standard illuminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StandardIlluminant {
    /// Tungsten
    A,
    /// Direct sunlight
    B,
    /// Average daylight
    C,
    /// Horizon light
    D50,
    /// Mid-morning daylight
    D55,
    /// Noon daylight
    D65,
    /// North sky daylight
    D75,
    /// CRT white
    D93,
    /// Equal energy
    E,
}

impl StandardIlluminant {
    /// Every named illuminant, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D50,
        Self::D55,
        Self::D65,
        Self::D75,
        Self::D93,
        Self::E,
    ];

    /// Relative white point, `Y = 1`.
    pub const fn xyz(self) -> RelativeXyz {
        match self {
            Self::A => A,
            Self::B => B,
            Self::C => C,
            Self::D50 => D50,
            Self::D55 => D55,
            Self::D65 => D65,
            Self::D75 => D75,
            Self::D93 => D93,
            Self::E => E,
        }
    }

    /// Absolute color emitting `lumens` lm.
    #[inline]
    pub fn scaled(self, lumens: f64) -> Xyz {
        self.xyz().absolute(lumens)
    }

    /// CIE 1931 chromaticity `(x, y)`.
    #[inline]
    pub fn chromaticity(self) -> (f64, f64) {
        self.xyz().chromaticity()
    }

    /// Short name, e.g. `"D65"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D50 => "D50",
            Self::D55 => "D55",
            Self::D65 => "D65",
            Self::D75 => "D75",
            Self::D93 => "D93",
            Self::E => "E",
        }
    }
}

impl fmt::Display for StandardIlluminant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_chromaticities() {
        let cases = [
            (StandardIlluminant::A, 0.44757, 0.40745),
            (StandardIlluminant::B, 0.34842, 0.35161),
            (StandardIlluminant::C, 0.31006, 0.31616),
            (StandardIlluminant::D50, 0.34567, 0.35850),
            (StandardIlluminant::D55, 0.33242, 0.34743),
            (StandardIlluminant::D65, 0.31271, 0.32902),
            (StandardIlluminant::D75, 0.29902, 0.31485),
            (StandardIlluminant::D93, 0.28315, 0.29711),
            (StandardIlluminant::E, 1.0 / 3.0, 1.0 / 3.0),
        ];
        for (ill, ex, ey) in cases {
            let (x, y) = ill.chromaticity();
            assert_abs_diff_eq!(x, ex, epsilon = 1e-4);
            assert_abs_diff_eq!(y, ey, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_all_normalized() {
        for ill in StandardIlluminant::ALL {
            assert_eq!(ill.xyz().y, 1.0, "{ill}");
        }
    }

    #[test]
    fn test_scaled() {
        let c = StandardIlluminant::D65.scaled(806.0);
        assert_abs_diff_eq!(c.y, 806.0);
        assert_abs_diff_eq!(c.x, 0.95047 * 806.0, epsilon = 1e-9);
    }

    #[test]
    fn test_display() {
        assert_eq!(StandardIlluminant::D65.to_string(), "D65");
        assert_eq!(StandardIlluminant::ALL.len(), 9);
    }
}
