//! Planckian (blackbody) radiators.
//!
//! Two models of the same physics:
//!
//! - [`BlackBodyFixed`] - chromaticity from the Kang et al. (2002) cubic
//!   approximation of the Planckian locus, combined with a caller-chosen
//!   luminous flux. Cheap, valid 1667 K to 25000 K.
//! - [`BlackBodyArea`] - Planck's law integrated against the CIE 1931
//!   observer for a radiating surface of given area. Slower, valid for any
//!   positive temperature, and yields absolute lumens.
//!
//! The two agree to well under one ΔE* over the approximation's range.
//!
//! # Usage
//!
//! ```rust
//! use ledcms_illuminant::{BlackBodyArea, BlackBodyFixed};
//!
//! let warm = BlackBodyFixed::new(2700.0, 800.0);
//! assert_eq!(warm.xyz().y, 800.0);
//!
//! let (x, _) = BlackBodyArea::new(2700.0, 1e-6).chromaticity();
//! assert!((x - warm.chromaticity().0).abs() < 1e-3);
//! ```
//!
//! # Reference
//!
//! Kang, B., Moon, O., Hong, C., Lee, H., Cho, B., & Kim, Y. (2002).
//! Design of advanced color temperature control system for HDTV
//! applications. Journal of the Korean Physical Society, 41(6), 865-871.

use crate::clamp_temperature;
use crate::observer;
use ledcms_color::{XyY, Xyz};
use serde::{Deserialize, Serialize};

/// Planck constant, J·s.
const PLANCK: f64 = 6.626_070_15e-34;
/// Speed of light in vacuum, m/s.
const LIGHT_SPEED: f64 = 299_792_458.0;
/// Boltzmann constant, J/K.
const BOLTZMANN: f64 = 1.380_649e-23;
/// Maximum luminous efficacy of radiation, lm/W.
const KM: f64 = 683.0;

// Horner evaluation of q0*t^3 + q1*t^2 + q2*t + q3
#[inline]
fn cubic(t: f64, q: [f64; 4]) -> f64 {
    q[0].mul_add(t, q[1]).mul_add(t, q[2]).mul_add(t, q[3])
}

/// Analytic blackbody with a fixed luminous flux.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlackBodyFixed {
    /// Color temperature, K.
    pub temperature: f64,
    /// Luminous flux, lm.
    pub luminance: f64,
}

impl BlackBodyFixed {
    /// Lowest temperature the approximation covers, K.
    pub const MIN_TEMPERATURE: f64 = 1667.0;
    /// Highest temperature the approximation covers, K.
    pub const MAX_TEMPERATURE: f64 = 25000.0;

    /// Creates a radiator at `temperature` K emitting `luminance` lm.
    #[inline]
    pub const fn new(temperature: f64, luminance: f64) -> Self {
        Self {
            temperature,
            luminance,
        }
    }

    /// CIE 1931 chromaticity `(x, y)` on the Planckian locus.
    ///
    /// Temperatures outside 1667 K to 25000 K are clamped into range.
    #[rustfmt::skip]
    pub fn chromaticity(&self) -> (f64, f64) {
        const X_LOW:   [f64; 4] = [-0.266_123_9, -0.234_358_9, 0.877_695_6,  0.179_910];
        const X_HIGH:  [f64; 4] = [-3.025_846_9,  2.107_037_9, 0.222_634_7,  0.240_390];
        const Y_LOW:   [f64; 4] = [-1.106_381_4, -1.348_110_20, 2.185_558_32, -0.202_196_83];
        const Y_MID:   [f64; 4] = [-0.954_947_6, -1.374_185_93, 2.091_370_15, -0.167_488_67];
        const Y_HIGH:  [f64; 4] = [ 3.081_758_0, -5.873_386_70, 3.751_129_97, -0.370_014_83];

        let t = clamp_temperature(
            "blackbody",
            self.temperature,
            Self::MIN_TEMPERATURE,
            Self::MAX_TEMPERATURE,
        );
        let mk = 1000.0 / t;

        let x = if t <= 4000.0 { cubic(mk, X_LOW) } else { cubic(mk, X_HIGH) };
        let y = if t <= 2222.0 {
            cubic(x, Y_LOW)
        } else if t <= 4000.0 {
            cubic(x, Y_MID)
        } else {
            cubic(x, Y_HIGH)
        };
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

/// Blackbody surface integrated over the visible spectrum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlackBodyArea {
    /// Temperature, K.
    pub temperature: f64,
    /// Radiating surface, m².
    pub area: f64,
}

impl BlackBodyArea {
    /// Creates a radiator at `temperature` K with `area` m² of surface.
    #[inline]
    pub const fn new(temperature: f64, area: f64) -> Self {
        Self { temperature, area }
    }

    /// Spectral radiance at `wavelength` nm, W·sr⁻¹·m⁻³.
    pub fn spectral_radiance(&self, wavelength: f64) -> f64 {
        let lambda = wavelength * 1e-9;
        let c1 = 2.0 * PLANCK * LIGHT_SPEED * LIGHT_SPEED;
        let c2 = PLANCK * LIGHT_SPEED / BOLTZMANN;
        c1 / lambda.powi(5) / (c2 / (lambda * self.temperature)).exp_m1()
    }

    /// Absolute tristimulus value, `Y` in lumens.
    ///
    /// The surface radiates as a Lambertian emitter into the half-space in
    /// front of it. Non-positive temperatures emit nothing.
    pub fn xyz(&self) -> Xyz {
        if self.temperature.is_nan() || self.temperature <= 0.0 {
            return Xyz::ZERO;
        }
        let [x, y, z] = observer::integrate(|nm| self.spectral_radiance(nm));
        // 1 nm steps; radiance -> exitance is a factor of pi
        let scale = KM * std::f64::consts::PI * self.area * 1e-9;
        Xyz::new(x * scale, y * scale, z * scale)
    }

    /// Total luminous flux, lm.
    #[inline]
    pub fn luminous_flux(&self) -> f64 {
        self.xyz().lumens()
    }

    /// CIE 1931 chromaticity `(x, y)`.
    #[inline]
    pub fn chromaticity(&self) -> (f64, f64) {
        self.xyz().chromaticity()
    }
}
