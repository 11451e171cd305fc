//! # ledcms-transfer
//!
//! Transfer functions between linear drive levels and the non-linear signal
//! a device expects.
//!
//! # Terminology
//!
//! - **Linearize** (EOTF direction): device signal -> linear drive
//! - **Delinearize** (OETF direction): linear drive -> device signal
//!
//! # Supported Transfer Functions
//!
//! | Type | Curve | Range |
//! |------|-------|-------|
//! | [`Linear`] | Identity | [0, 1] |
//! | [`Srgb`] | IEC 61966-2-1 piecewise | [0, 1] |
//! | [`Gamma`] | Pure power law | [0, 1] |
//!
//! All curves assume inputs pre-clamped to [0, 1]. Callers clamp first.
//!
//! # Usage
//!
//! ```rust
//! use ledcms_core::Dcs;
//! use ledcms_transfer::{Srgb, TransferFunction};
//!
//! let signal = Dcs::from([0.5, 1.0, 0.0]);
//! let linear = Srgb.linearize_dcs(&signal);
//! assert!((linear[0] - 0.214).abs() < 0.001);
//!
//! let back = Srgb.delinearize_dcs(&linear);
//! assert!((back[0] - 0.5).abs() < 1e-9);
//! ```
//!
//! # Extending
//!
//! [`TransferFunction`] is an open trait; a device with a measured response
//! can implement it directly.
//!
//! # Dependencies
//!
//! - `ledcms-core` - DCS vector types
//!
//! # Used By
//!
//! - `ledcms-color` - sRGB tristimulus values
//! - `ledcms-profile` - DCS encoding and decoding

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod gamma;
pub mod srgb;

use ledcms_core::{Dcs, LinearDcs};
use std::fmt;

pub use gamma::{Gamma, gamma_eotf, gamma_oetf};
pub use srgb::{Srgb, eotf as srgb_eotf, oetf as srgb_oetf};

/// Linearize/delinearize strategy for a device signal.
///
/// Each channel is transformed independently and the channel count is
/// preserved.
pub trait TransferFunction: fmt::Debug + Send + Sync {
    /// Short name used in logs and configs.
    fn name(&self) -> String;

    /// Device signal -> linear drive for one channel.
    fn linearize(&self, v: f64) -> f64;

    /// Linear drive -> device signal for one channel.
    fn delinearize(&self, v: f64) -> f64;

    /// Linearizes every channel of a device vector.
    fn linearize_dcs(&self, v: &Dcs) -> LinearDcs {
        v.iter().map(|&c| self.linearize(c)).collect()
    }

    /// Delinearizes every channel of a linear vector.
    fn delinearize_dcs(&self, v: &LinearDcs) -> Dcs {
        v.iter().map(|&c| self.delinearize(c)).collect()
    }
}

/// Identity transfer function: the device signal is already linear.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Linear;

impl TransferFunction for Linear {
    fn name(&self) -> String {
        "linear".into()
    }

    #[inline]
    fn linearize(&self, v: f64) -> f64 {
        v
    }

    #[inline]
    fn delinearize(&self, v: f64) -> f64 {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_linear_passthrough() {
        let v = Dcs::from([0.0, 0.3, 1.0]);
        let l = Linear.linearize_dcs(&v);
        assert_eq!(l.as_slice(), v.as_slice());
        assert_eq!(Linear.delinearize_dcs(&l), v);
    }

    #[test]
    fn test_dyn_dispatch() {
        let curves: Vec<Arc<dyn TransferFunction>> =
            vec![Arc::new(Linear), Arc::new(Srgb), Arc::new(Gamma::new(2.2).unwrap())];
        let v = Dcs::from([0.0, 0.25, 0.5, 0.75, 1.0]);
        for tf in curves {
            let back = tf.delinearize_dcs(&tf.linearize_dcs(&v));
            assert_eq!(back.len(), v.len(), "{}", tf.name());
            for (a, b) in back.iter().zip(v.iter()) {
                assert!((a - b).abs() < 1e-9, "{}: {} vs {}", tf.name(), a, b);
            }
        }
    }
}
