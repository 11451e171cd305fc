//! Output limiters.
//!
//! Many LED drivers cap their total power draw by throttling all channels
//! together. A limiter models that in software so luminance estimates match
//! what the hardware actually emits.
//!
//! Limiters operate on linear DCS vectors and must rescale uniformly: every
//! channel is multiplied by the same factor, so the chromaticity is kept.

use ledcms_core::{ColorError, ColorResult, LinearDcs};
use std::fmt;

/// Rescales a linear DCS vector to respect a device power budget.
pub trait OutputLimiter: fmt::Debug + Send + Sync {
    /// Short name for logging.
    fn name(&self) -> String;

    /// Returns `v` unchanged if it satisfies the constraint, otherwise `v`
    /// uniformly scaled so the constraint holds exactly.
    fn limit(&self, v: &LinearDcs) -> LinearDcs;
}

/// Caps the sum of all channel values.
///
/// ```rust
/// use ledcms_core::LinearDcs;
/// use ledcms_profile::{OutputLimiter, SumLimiter};
///
/// let limiter = SumLimiter::new(2.0).unwrap();
/// let v = limiter.limit(&LinearDcs::from([1.0, 1.0, 1.0, 1.0]));
/// assert_eq!(v.as_slice(), &[0.5, 0.5, 0.5, 0.5]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SumLimiter {
    limit: f64,
}

impl SumLimiter {
    /// Creates a limiter allowing a channel sum of at most `limit`.
    ///
    /// Fails with [`ColorError::InvalidValue`] unless `limit` is finite and
    /// positive.
    pub fn new(limit: f64) -> ColorResult<Self> {
        if !limit.is_finite() || limit <= 0.0 {
            return Err(ColorError::InvalidValue(format!(
                "sum limit must be finite and positive, got {limit}"
            )));
        }
        Ok(Self { limit })
    }

    /// The maximum channel sum.
    #[inline]
    pub fn max_sum(&self) -> f64 {
        self.limit
    }
}

impl OutputLimiter for SumLimiter {
    fn name(&self) -> String {
        format!("sum <= {}", self.limit)
    }

    fn limit(&self, v: &LinearDcs) -> LinearDcs {
        let sum = v.sum();
        if sum > self.limit {
            v * (self.limit / sum)
        } else {
            v.clone()
        }
    }
}

/// Never limits.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NoLimit;

impl OutputLimiter for NoLimit {
    fn name(&self) -> String {
        "none".into()
    }

    fn limit(&self, v: &LinearDcs) -> LinearDcs {
        v.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_sum_limit_scales() {
        let limiter = SumLimiter::new(2.0).unwrap();
        let v = LinearDcs::from([0.9, 0.8, 0.7, 0.6]);
        let out = limiter.limit(&v);
        assert_abs_diff_eq!(out.sum(), 2.0, epsilon = 1e-12);
        // Uniform scaling keeps the channel ratios
        assert_abs_diff_eq!(out[0] / out[3], 0.9 / 0.6, epsilon = 1e-12);
    }

    #[test]
    fn test_sum_limit_passthrough() {
        let limiter = SumLimiter::new(2.0).unwrap();
        for v in [
            LinearDcs::from([0.5, 0.5, 0.5]),
            LinearDcs::from([1.0, 1.0]),
            LinearDcs::zeros(4),
        ] {
            assert_eq!(limiter.limit(&v), v);
        }
    }

    #[test]
    fn test_sum_limit_invariant() {
        let limiter = SumLimiter::new(1.5).unwrap();
        for i in 0..=20 {
            let t = i as f64 / 20.0;
            let v = LinearDcs::from([t, 1.0 - t, t * t, 0.5]);
            assert!(limiter.limit(&v).sum() <= 1.5 + 1e-12);
        }
    }

    #[test]
    fn test_sum_limit_rejects_invalid() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                SumLimiter::new(bad),
                Err(ColorError::InvalidValue(_))
            ));
        }
    }

    #[test]
    fn test_no_limit() {
        let v = LinearDcs::from([1.0, 1.0, 1.0, 1.0, 1.0]);
        assert_eq!(NoLimit.limit(&v), v);
        assert_eq!(NoLimit.name(), "none");
        assert_eq!(SumLimiter::new(2.0).unwrap().name(), "sum <= 2");
    }
}
