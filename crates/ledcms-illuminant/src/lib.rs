//! # ledcms-illuminant
//!
//! Reference light sources for LED color management.
//!
//! - [`BlackBodyFixed`] - Planckian locus approximation at a fixed flux
//! - [`BlackBodyArea`] - Planck's law integrated over the CIE 1931 observer
//! - [`StandardIlluminantDSeries`] - CIE daylight at any temperature
//! - [`StandardIlluminant`] - named CIE illuminants (A, B, C, D50...E)
//! - [`observer`] - CIE 1931 2° color matching functions
//!
//! # Usage
//!
//! ```rust
//! use ledcms_illuminant::{BlackBodyFixed, StandardIlluminantDSeries};
//!
//! let candle = BlackBodyFixed::new(1900.0, 12.0).xyz();
//! let daylight = StandardIlluminantDSeries::new(6504.0, 12.0).xyz();
//! assert!(candle.x > daylight.x);
//! ```
//!
//! # Temperature Range
//!
//! The analytic models are fitted over a limited range. Temperatures outside
//! it are clamped to the nearest valid value and a warning is logged through
//! [`tracing`].
//!
//! # Dependencies
//!
//! - `ledcms-color` - XYZ and xyY value types
//! - [`serde`] - illuminant serialization
//! - [`tracing`] - out-of-range warnings
//!
//! # Used By
//!
//! - `ledcms-profile` - emitting reference colors to devices

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod blackbody;
mod daylight;
pub mod observer;
mod standard;

pub use blackbody::{BlackBodyArea, BlackBodyFixed};
pub use daylight::StandardIlluminantDSeries;
pub use standard::{A, B, C, D50, D55, D65, D75, D93, E, StandardIlluminant};

use tracing::warn;

/// Clamps `temperature` into `[min, max]`, warning when it falls outside.
fn clamp_temperature(model: &str, temperature: f64, min: f64, max: f64) -> f64 {
    if temperature >= min && temperature <= max {
        return temperature;
    }
    let clamped = if temperature > max { max } else { min };
    warn!(
        model,
        temperature, clamped, "Temperature outside model range, clamping"
    );
    clamped
}
