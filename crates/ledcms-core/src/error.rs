//! Error types for ledcms operations.
//!
//! All errors are local, synchronous and value-typed. They propagate to the
//! immediate caller and are never retried inside the library.
//!
//! # Categories
//!
//! - **Shape errors**: [`ChannelMismatch`](ColorError::ChannelMismatch),
//!   [`UnsupportedDimensions`](ColorError::UnsupportedDimensions)
//! - **Numeric errors**: [`SingularMatrix`](ColorError::SingularMatrix),
//!   [`InvalidValue`](ColorError::InvalidValue)
//! - **Domain errors**: [`NotRepresentable`](ColorError::NotRepresentable),
//!   [`WhitePointMismatch`](ColorError::WhitePointMismatch)
//!
//! # Usage
//!
//! ```rust
//! use ledcms_core::{ColorError, ColorResult};
//!
//! fn check(expected: usize, values: &[f64]) -> ColorResult<()> {
//!     if values.len() != expected {
//!         return Err(ColorError::ChannelMismatch {
//!             expected,
//!             actual: values.len(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! assert!(check(3, &[0.0, 0.5]).is_err());
//! ```

use thiserror::Error;

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;

/// Color management error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// A DCS vector's length does not match the channel count it is used with.
    ///
    /// This indicates a programming error by the caller.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ledcms_core::ColorError;
    ///
    /// let err = ColorError::ChannelMismatch { expected: 5, actual: 3 };
    /// assert!(err.to_string().contains("expected 5"));
    /// ```
    #[error("channel count mismatch: expected {expected}, got {actual}")]
    ChannelMismatch {
        /// Channel count of the profile or matrix.
        expected: usize,
        /// Length of the offending vector.
        actual: usize,
    },

    /// A transformation matrix has a zero determinant and cannot be inverted.
    #[error("singular matrix: {channels} channel(s) are linearly dependent")]
    SingularMatrix {
        /// Number of columns in the singular transformation.
        channels: usize,
    },

    /// A transformation has a channel count outside the supported 0-3 range.
    #[error("unsupported dimensions: {channels} channels (supported: 0-3)")]
    UnsupportedDimensions {
        /// Number of columns in the transformation.
        channels: usize,
    },

    /// The requested value has no colorimetric equivalent.
    #[error("not representable: {0}")]
    NotRepresentable(String),

    /// Two L*a*b* values were compared under different white points.
    #[error("white point mismatch: L*a*b* values use different reference whites")]
    WhitePointMismatch,

    /// An input value is invalid (NaN, infinite, or outside its domain).
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ColorError::SingularMatrix { channels: 3 };
        assert_eq!(
            err.to_string(),
            "singular matrix: 3 channel(s) are linearly dependent"
        );

        let err = ColorError::UnsupportedDimensions { channels: 4 };
        assert!(err.to_string().contains("4 channels"));
    }

    #[test]
    fn test_result_propagation() {
        fn inner() -> ColorResult<f64> {
            Err(ColorError::NotRepresentable("scene 4".into()))
        }
        fn outer() -> ColorResult<f64> {
            let v = inner()?;
            Ok(v * 2.0)
        }
        assert_eq!(
            outer(),
            Err(ColorError::NotRepresentable("scene 4".into()))
        );
    }
}
