//! Device color space (DCS) vectors.
//!
//! A DCS vector holds one drive level per device channel. Channel order is
//! fixed by the owning profile: primaries first, then whites.
//!
//! Two flavors exist:
//!
//! - [`Dcs`] - non-linear, as transmitted to hardware
//! - [`LinearDcs`] - after the inverse transfer function, before color mixing
//!
//! Both share the same container API. Conversion between them goes through a
//! transfer function (see `ledcms-transfer`), never through `From`.
//!
//! # Usage
//!
//! ```rust
//! use ledcms_core::LinearDcs;
//!
//! let v = LinearDcs::new(vec![0.25, -0.5, 1.5]);
//! assert_eq!(v.clamped().as_slice(), &[0.25, 0.0, 1.0]);
//! assert_eq!(v.sum(), 1.25);
//! ```

use crate::{ColorError, ColorResult};
use std::ops::{Add, Index, IndexMut, Mul, Sub};

macro_rules! dcs_vector {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Default)]
        pub struct $name(Vec<f64>);

        impl $name {
            /// Creates a vector from per-channel values.
            #[inline]
            pub fn new(values: Vec<f64>) -> Self {
                Self(values)
            }

            /// Creates an all-zero vector with `channels` entries.
            #[inline]
            pub fn zeros(channels: usize) -> Self {
                Self(vec![0.0; channels])
            }

            /// Creates a vector that is `1.0` on `channel` and zero elsewhere.
            ///
            /// Returns an all-zero vector when `channel >= channels`.
            pub fn unit(channels: usize, channel: usize) -> Self {
                let mut v = Self::zeros(channels);
                if let Some(c) = v.0.get_mut(channel) {
                    *c = 1.0;
                }
                v
            }

            /// Number of channels.
            #[inline]
            pub fn len(&self) -> usize {
                self.0.len()
            }

            /// True when the vector has no channels.
            #[inline]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Channel values as a slice.
            #[inline]
            pub fn as_slice(&self) -> &[f64] {
                &self.0
            }

            /// Consumes the vector, returning the channel values.
            #[inline]
            pub fn into_vec(self) -> Vec<f64> {
                self.0
            }

            /// Iterates over channel values.
            #[inline]
            pub fn iter(&self) -> std::slice::Iter<'_, f64> {
                self.0.iter()
            }

            /// Sum of all channel values.
            #[inline]
            pub fn sum(&self) -> f64 {
                self.0.iter().sum()
            }

            /// Returns a copy with every channel clamped to [0, 1]. NaN becomes 0.
            pub fn clamped(&self) -> Self {
                self.map(|v| v.max(0.0).min(1.0))
            }

            /// Returns a copy with negative and NaN channels set to zero.
            pub fn clamped_positive(&self) -> Self {
                self.map(|v| v.max(0.0))
            }

            /// Applies `f` to every channel.
            pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
                Self(self.0.iter().map(|&v| f(v)).collect())
            }

            /// Fails with [`ColorError::ChannelMismatch`] unless `len() == expected`.
            #[inline]
            pub fn ensure_channels(&self, expected: usize) -> ColorResult<()> {
                if self.0.len() != expected {
                    return Err(ColorError::ChannelMismatch {
                        expected,
                        actual: self.0.len(),
                    });
                }
                Ok(())
            }

            /// Element-wise sum of two vectors of equal length.
            pub fn try_add(&self, other: &Self) -> ColorResult<Self> {
                other.ensure_channels(self.len())?;
                Ok(self + other)
            }

            /// Element-wise difference of two vectors of equal length.
            pub fn try_sub(&self, other: &Self) -> ColorResult<Self> {
                other.ensure_channels(self.len())?;
                Ok(self - other)
            }

            /// Concatenates `self` followed by `tail`.
            pub fn concat(&self, tail: &Self) -> Self {
                let mut values = Vec::with_capacity(self.len() + tail.len());
                values.extend_from_slice(&self.0);
                values.extend_from_slice(&tail.0);
                Self(values)
            }

            /// True if all channels are finite.
            #[inline]
            pub fn is_finite(&self) -> bool {
                self.0.iter().all(|v| v.is_finite())
            }
        }

        impl Index<usize> for $name {
            type Output = f64;

            #[inline]
            fn index(&self, i: usize) -> &f64 {
                &self.0[i]
            }
        }

        impl IndexMut<usize> for $name {
            #[inline]
            fn index_mut(&mut self, i: usize) -> &mut f64 {
                &mut self.0[i]
            }
        }

        /// Panics when the lengths differ; see `try_add`.
        impl Add for &$name {
            type Output = $name;

            fn add(self, rhs: Self) -> $name {
                assert_eq!(self.len(), rhs.len(), "channel count mismatch");
                self.0.iter().zip(&rhs.0).map(|(a, b)| a + b).collect()
            }
        }

        /// Panics when the lengths differ; see `try_sub`.
        impl Sub for &$name {
            type Output = $name;

            fn sub(self, rhs: Self) -> $name {
                assert_eq!(self.len(), rhs.len(), "channel count mismatch");
                self.0.iter().zip(&rhs.0).map(|(a, b)| a - b).collect()
            }
        }

        impl Mul<f64> for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: f64) -> Self {
                Self(self.0.into_iter().map(|v| v * rhs).collect())
            }
        }

        impl Mul<f64> for &$name {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: f64) -> $name {
                $name(self.0.iter().map(|v| v * rhs).collect())
            }
        }

        impl From<Vec<f64>> for $name {
            #[inline]
            fn from(values: Vec<f64>) -> Self {
                Self(values)
            }
        }

        impl From<&[f64]> for $name {
            #[inline]
            fn from(values: &[f64]) -> Self {
                Self(values.to_vec())
            }
        }

        impl<const N: usize> From<[f64; N]> for $name {
            #[inline]
            fn from(values: [f64; N]) -> Self {
                Self(values.to_vec())
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = &'a f64;
            type IntoIter = std::slice::Iter<'a, f64>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }

        impl FromIterator<f64> for $name {
            fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
                Self(iter.into_iter().collect())
            }
        }
    };
}

dcs_vector!(
    /// Non-linear device color space vector, as transmitted to hardware.
    ///
    /// Values are nominally in [0, 1]; the driver scales them to its native
    /// integer range.
    Dcs
);

dcs_vector!(
    /// Linear device color space vector: the weights applied to each
    /// channel's full-drive color when mixing.
    LinearDcs
);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_unit() {
        let v = LinearDcs::unit(5, 3);
        assert_eq!(v.as_slice(), &[0.0, 0.0, 0.0, 1.0, 0.0]);
        assert_eq!(LinearDcs::unit(2, 7), LinearDcs::zeros(2));
    }

    #[test]
    fn test_clamping() {
        let v = Dcs::from([-0.1, 0.4, 1.2]);
        assert_eq!(v.clamped().as_slice(), &[0.0, 0.4, 1.0]);
        assert_eq!(v.clamped_positive().as_slice(), &[0.0, 0.4, 1.2]);

        let nan = LinearDcs::from([f64::NAN, 0.5]);
        assert_eq!(nan.clamped().as_slice(), &[0.0, 0.5]);
        assert_eq!(nan.clamped_positive().as_slice(), &[0.0, 0.5]);
    }

    #[test]
    fn test_arithmetic() {
        let a = LinearDcs::from([0.5, 0.25]);
        assert_abs_diff_eq!((&a * 2.0).sum(), 1.5);
        assert_eq!(a.map(|v| v * v).as_slice(), &[0.25, 0.0625]);
        assert_eq!((a.clone() * 0.0).as_slice(), &[0.0, 0.0]);

        let b = LinearDcs::from([0.25, 0.25]);
        assert_eq!((&a - &b).as_slice(), &[0.25, 0.0]);
        assert_eq!(a.try_add(&b).unwrap().as_slice(), &[0.75, 0.5]);
        assert_eq!(a.try_sub(&b).unwrap(), &a - &b);
        assert_eq!(
            a.try_add(&LinearDcs::from([1.0])),
            Err(ColorError::ChannelMismatch {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    #[should_panic(expected = "channel count mismatch")]
    fn test_sub_mismatch_panics() {
        let _ = &LinearDcs::zeros(2) - &LinearDcs::zeros(3);
    }

    #[test]
    fn test_concat() {
        let p = LinearDcs::from([0.1, 0.2, 0.3]);
        let w = LinearDcs::from([0.4, 0.5]);
        let all = p.concat(&w);
        assert_eq!(all.as_slice(), &[0.1, 0.2, 0.3, 0.4, 0.5]);
        assert_eq!(p.concat(&LinearDcs::default()), p);
    }

    #[test]
    fn test_ensure_channels() {
        let v = Dcs::zeros(4);
        assert!(v.ensure_channels(4).is_ok());
        assert!(matches!(
            v.ensure_channels(5),
            Err(ColorError::ChannelMismatch { expected: 5, actual: 4 })
        ));
    }
}
