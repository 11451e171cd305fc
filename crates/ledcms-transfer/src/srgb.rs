//! sRGB transfer curve (IEC 61966-2-1).
//!
//! A straight segment near black joined to a 2.4 power curve offset by
//! 0.055. Many LED controllers expect PWM duty cycles encoded this way, so
//! equal steps in the encoded value look like equal steps in brightness.
//! Defined on [0, 1].

use crate::TransferFunction;

// Breakpoint on the encoded side
const DECODE_KNEE: f64 = 0.04045;
// Breakpoint on the linear side, DECODE_KNEE / SLOPE
const ENCODE_KNEE: f64 = 0.0031308;
const SLOPE: f64 = 12.92;
const OFFSET: f64 = 0.055;
const EXPONENT: f64 = 2.4;

/// Decodes an sRGB value to linear light.
///
/// ```text
/// L = V / 12.92                      V <= 0.04045
/// L = ((V + 0.055) / 1.055) ^ 2.4    otherwise
/// ```
///
/// ```rust
/// use ledcms_transfer::srgb::eotf;
///
/// // Half the encoded range is about a fifth of the light
/// assert!((eotf(0.5) - 0.214).abs() < 1e-3);
/// ```
#[inline]
pub fn eotf(v: f64) -> f64 {
    if v <= DECODE_KNEE {
        v / SLOPE
    } else {
        ((v + OFFSET) / (1.0 + OFFSET)).powf(EXPONENT)
    }
}

/// Encodes linear light as an sRGB value; inverse of [`eotf`].
#[inline]
pub fn oetf(l: f64) -> f64 {
    if l <= ENCODE_KNEE {
        l * SLOPE
    } else {
        (1.0 + OFFSET) * l.powf(EXPONENT.recip()) - OFFSET
    }
}

/// [`eotf`] on each component.
#[inline]
pub fn eotf_rgb(rgb: [f64; 3]) -> [f64; 3] {
    rgb.map(eotf)
}

/// [`oetf`] on each component.
#[inline]
pub fn oetf_rgb(rgb: [f64; 3]) -> [f64; 3] {
    rgb.map(oetf)
}

/// sRGB piecewise transfer function.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Srgb;

impl TransferFunction for Srgb {
    fn name(&self) -> String {
        "srgb".into()
    }

    #[inline]
    fn linearize(&self, v: f64) -> f64 {
        eotf(v)
    }

    #[inline]
    fn delinearize(&self, v: f64) -> f64 {
        oetf(v)
    }
}
