//! Pure power-law transfer functions.
//!
//! `linear = v^gamma`, `signal = l^(1/gamma)`.
//!
//! # Range
//!
//! - Input/Output: [0, 1]; non-positive inputs map to 0

use crate::TransferFunction;
use ledcms_core::{ColorError, ColorResult};

/// EOTF for arbitrary gamma: `v^gamma`
///
/// # Example
///
/// ```rust
/// use ledcms_transfer::gamma::gamma_eotf;
///
/// let linear = gamma_eotf(0.5, 2.2);
/// assert!((linear - 0.2176).abs() < 1e-4);
/// ```
#[inline]
pub fn gamma_eotf(v: f64, gamma: f64) -> f64 {
    if v <= 0.0 { 0.0 } else { v.powf(gamma) }
}

/// OETF for arbitrary gamma: `l^(1/gamma)`
#[inline]
pub fn gamma_oetf(l: f64, gamma: f64) -> f64 {
    if l <= 0.0 { 0.0 } else { l.powf(1.0 / gamma) }
}

/// Power-law transfer function with a fixed exponent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gamma {
    gamma: f64,
}

impl Gamma {
    /// Creates a power-law curve.
    ///
    /// Fails with [`ColorError::InvalidValue`] unless `gamma` is finite and
    /// positive.
    pub fn new(gamma: f64) -> ColorResult<Self> {
        if !gamma.is_finite() || gamma <= 0.0 {
            return Err(ColorError::InvalidValue(format!(
                "gamma must be finite and positive, got {gamma}"
            )));
        }
        Ok(Self { gamma })
    }

    /// The exponent.
    #[inline]
    pub fn gamma(&self) -> f64 {
        self.gamma
    }
}

impl TransferFunction for Gamma {
    fn name(&self) -> String {
        format!("gamma {}", self.gamma)
    }

    #[inline]
    fn linearize(&self, v: f64) -> f64 {
        gamma_eotf(v, self.gamma)
    }

    #[inline]
    fn delinearize(&self, v: f64) -> f64 {
        gamma_oetf(v, self.gamma)
    }
}
