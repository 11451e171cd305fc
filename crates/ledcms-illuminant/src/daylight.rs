//! CIE daylight (D-series) illuminants at arbitrary temperatures.
//!
//! The daylight locus runs slightly above the Planckian locus, which is why
//! D65 is "6504 K" and not 6500 K.

use crate::clamp_temperature;
use ledcms_color::{XyY, Xyz};
use serde::{Deserialize, Serialize};

/// CIE D-series daylight at a correlated color temperature.
///
/// ```rust
/// use ledcms_illuminant::StandardIlluminantDSeries;
///
/// let (x, y) = StandardIlluminantDSeries::new(6504.0, 1.0).chromaticity();
/// assert!((x - 0.3127).abs() < 1e-4);
/// assert!((y - 0.3291).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StandardIlluminantDSeries {
    /// Correlated color temperature, K.
    pub temperature: f64,
    /// Luminous flux, lm.
    pub luminance: f64,
}

impl StandardIlluminantDSeries {
    /// Lowest temperature the daylight formula covers, K.
    pub const MIN_TEMPERATURE: f64 = 4000.0;
    /// Highest temperature the daylight formula covers, K.
    pub const MAX_TEMPERATURE: f64 = 25000.0;

    /// Creates daylight at `temperature` K emitting `luminance` lm.
    #[inline]
    pub const fn new(temperature: f64, luminance: f64) -> Self {
        Self {
            temperature,
            luminance,
        }
    }

    /// CIE 1931 chromaticity `(x, y)` on the daylight locus.
    ///
    /// Temperatures outside 4000 K to 25000 K are clamped into range.
    pub fn chromaticity(&self) -> (f64, f64) {
        let t = clamp_temperature(
            "daylight",
            self.temperature,
            Self::MIN_TEMPERATURE,
            Self::MAX_TEMPERATURE,
        );
        let (a, b, c, d) = if t <= 7000.0 {
            (-4.6070e9, 2.9678e6, 0.09911e3, 0.244063)
        } else {
            (-2.0064e9, 1.9018e6, 0.24748e3, 0.237040)
        };
        let x = a / (t * t * t) + b / (t * t) + c / t + d;
        let y = -3.000 * x * x + 2.870 * x - 0.275;
        (x, y)
    }

    /// Chromaticity plus luminous flux.
    pub fn xyy(&self) -> XyY {
        let (x, y) = self.chromaticity();
        XyY::new(x, y, self.luminance)
    }

    /// Absolute tristimulus value, `Y` in lumens.
    #[inline]
    pub fn xyz(&self) -> Xyz {
        self.xyy().to_xyz()
    }
}
