//! Channel transformations between linear DCS vectors and XYZ.
//!
//! A [`Transformation`] holds one XYZ column per device channel: the color
//! that channel produces at full linear drive. Multiplying it by a linear DCS
//! vector mixes the channel colors.
//!
//! An [`InverseTransformation`] holds one XYZ row per device channel, such
//! that `inverse * color` yields the linear drive levels that reproduce
//! `color` with those channels.
//!
//! # Degenerate inversion
//!
//! Devices may have fewer than three controllable primaries (a single
//! dimmable white, a two-white tunable bulb). Inversion handles those by
//! padding the transformation to 3x3 with synthetic columns orthogonal to
//! the real ones, inverting, and keeping only the rows of the real channels:
//!
//! ```text
//! 1 channel:  [c0, c0 x r, c0 x (c0 x r)]   r = reference axis
//! 2 channels: [c0, c1, c0 x c1]
//! ```
//!
//! The synthetic columns are orthogonal to the span of the real ones, so the
//! kept rows are the least-squares projection of a color onto that span.
//!
//! # Usage
//!
//! ```rust
//! use ledcms_core::LinearDcs;
//! use ledcms_math::{Transformation, Vec3};
//!
//! let cool_white = Vec3::new(0.95, 1.0, 1.09);
//! let t = Transformation::new(vec![cool_white]);
//! let inv = t.inverted().unwrap();
//!
//! let drive = inv.multiplied(cool_white * 0.5);
//! assert!((drive[0] - 0.5).abs() < 1e-12);
//! assert!((t.multiplied(&drive).unwrap().y - 0.5).abs() < 1e-12);
//! ```

use crate::{Mat3, Vec3};
use ledcms_core::{ColorError, ColorResult, LinearDcs};

/// Forward transformation: linear DCS -> XYZ.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Transformation {
    columns: Vec<Vec3>,
}

impl Transformation {
    /// Creates a transformation from per-channel full-drive colors.
    #[inline]
    pub fn new(columns: Vec<Vec3>) -> Self {
        Self { columns }
    }

    /// Number of channels (columns).
    #[inline]
    pub fn channels(&self) -> usize {
        self.columns.len()
    }

    /// True when there are no channels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Per-channel full-drive colors.
    #[inline]
    pub fn columns(&self) -> &[Vec3] {
        &self.columns
    }

    /// Returns `self`'s columns followed by `other`'s.
    pub fn concat(&self, other: &Self) -> Self {
        let mut columns = self.columns.clone();
        columns.extend_from_slice(&other.columns);
        Self { columns }
    }

    /// Mixes the channel colors weighted by `v`.
    ///
    /// Fails with [`ColorError::ChannelMismatch`] if `v.len()` differs from
    /// the channel count.
    pub fn multiplied(&self, v: &LinearDcs) -> ColorResult<Vec3> {
        v.ensure_channels(self.columns.len())?;
        Ok(self.mixed(v.as_slice()))
    }

    /// Mixes the channel colors weighted by `weights` without a length
    /// check. Surplus weights or columns are ignored.
    pub fn mixed(&self, weights: &[f64]) -> Vec3 {
        self.columns
            .iter()
            .zip(weights)
            .fold(Vec3::ZERO, |acc, (&col, &w)| acc + col * w)
    }

    /// Computes the inverse transformation.
    ///
    /// - 0 channels: empty inverse
    /// - 1 or 2 channels: padded with synthetic orthogonal columns, see module docs
    /// - 3 channels: closed-form 3x3 inverse
    ///
    /// Fails with [`ColorError::SingularMatrix`] when the channels are
    /// linearly dependent within [`SINGULAR_TOLERANCE`](crate::SINGULAR_TOLERANCE), or [`ColorError::UnsupportedDimensions`] for more
    /// than three channels.
    pub fn inverted(&self) -> ColorResult<InverseTransformation> {
        let channels = self.columns.len();
        let padded = match self.columns.as_slice() {
            [] => return Ok(InverseTransformation::default()),
            &[c0] => {
                let a1 = c0.cross(reference_axis(c0));
                let a2 = c0.cross(a1);
                Mat3::from_cols(c0, a1, a2)
            }
            &[c0, c1] => Mat3::from_cols(c0, c1, c0.cross(c1)),
            &[c0, c1, c2] => Mat3::from_cols(c0, c1, c2),
            _ => return Err(ColorError::UnsupportedDimensions { channels }),
        };

        let inv = padded
            .inverse()
            .map_err(|_| ColorError::SingularMatrix { channels })?;
        if !inv.is_finite() {
            return Err(ColorError::SingularMatrix { channels });
        }

        Ok(InverseTransformation {
            rows: (0..channels).map(|i| inv.row(i)).collect(),
        })
    }
}

/// Picks the coordinate axis least aligned with `v`, so `v x axis` is
/// non-zero for any non-zero `v`.
fn reference_axis(v: Vec3) -> Vec3 {
    let a = v.abs();
    if a.x <= a.y && a.x <= a.z {
        Vec3::X
    } else if a.y <= a.z {
        Vec3::Y
    } else {
        Vec3::Z
    }
}

/// Inverse transformation: XYZ -> linear DCS.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InverseTransformation {
    rows: Vec<Vec3>,
}

impl InverseTransformation {
    /// An inverse with `channels` all-zero rows.
    ///
    /// Every color maps to zero drive on every channel.
    pub fn zeros(channels: usize) -> Self {
        Self {
            rows: vec![Vec3::ZERO; channels],
        }
    }

    /// Number of channels (rows).
    #[inline]
    pub fn channels(&self) -> usize {
        self.rows.len()
    }

    /// Per-channel rows.
    #[inline]
    pub fn rows(&self) -> &[Vec3] {
        &self.rows
    }

    /// Linear drive levels that reproduce `color`.
    pub fn multiplied(&self, color: Vec3) -> LinearDcs {
        self.rows.iter().map(|row| row.dot(color)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const R: Vec3 = Vec3::new(0.4125, 0.2127, 0.0193);
    const G: Vec3 = Vec3::new(0.3576, 0.7152, 0.1192);
    const B: Vec3 = Vec3::new(0.1804, 0.0722, 0.9505);

    fn assert_unit_roundtrip(t: &Transformation) {
        let inv = t.inverted().unwrap();
        assert_eq!(inv.channels(), t.channels());
        for i in 0..t.channels() {
            let unit = LinearDcs::unit(t.channels(), i);
            let back = inv.multiplied(t.multiplied(&unit).unwrap());
            for (a, b) in back.iter().zip(unit.iter()) {
                assert_abs_diff_eq!(*a, *b, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_multiplied() {
        let t = Transformation::new(vec![R, G, B]);
        let white = t.multiplied(&LinearDcs::from([1.0, 1.0, 1.0])).unwrap();
        assert_abs_diff_eq!(white.y, 1.0001, epsilon = 1e-12);

        assert_eq!(
            t.multiplied(&LinearDcs::from([1.0, 1.0])),
            Err(ColorError::ChannelMismatch {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_mixed_ignores_surplus() {
        let t = Transformation::new(vec![R, G]);
        assert_eq!(t.mixed(&[1.0, 0.0, 5.0]), R);
        assert_eq!(t.mixed(&[0.0]), Vec3::ZERO);
    }

    #[test]
    fn test_inverse_three() {
        assert_unit_roundtrip(&Transformation::new(vec![R, G, B]));
    }

    #[test]
    fn test_inverse_two() {
        assert_unit_roundtrip(&Transformation::new(vec![R, G]));
    }

    #[test]
    fn test_inverse_one() {
        assert_unit_roundtrip(&Transformation::new(vec![B]));
        // Axis-aligned column exercises the reference axis choice
        assert_unit_roundtrip(&Transformation::new(vec![Vec3::Y * 3.0]));
    }

    #[test]
    fn test_inverse_one_projects() {
        // A color off the channel's line maps to its projection coefficient
        let t = Transformation::new(vec![Vec3::X]);
        let inv = t.inverted().unwrap();
        let v = inv.multiplied(Vec3::new(0.5, 3.0, -2.0));
        assert_abs_diff_eq!(v[0], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_inverse_empty() {
        let inv = Transformation::default().inverted().unwrap();
        assert_eq!(inv.channels(), 0);
        assert!(inv.multiplied(R).is_empty());
    }

    #[test]
    fn test_inverse_singular() {
        let t = Transformation::new(vec![R, R * 2.0]);
        assert_eq!(
            t.inverted(),
            Err(ColorError::SingularMatrix { channels: 2 })
        );

        let t = Transformation::new(vec![Vec3::ZERO]);
        assert_eq!(
            t.inverted(),
            Err(ColorError::SingularMatrix { channels: 1 })
        );

        // Dependent, but not exact multiples in floating point
        for columns in [vec![R, R * 0.3], vec![R, G, R + G], vec![R, G, R * 0.3 + G * 0.7]] {
            let channels = columns.len();
            assert_eq!(
                Transformation::new(columns).inverted(),
                Err(ColorError::SingularMatrix { channels })
            );
        }

        let t = Transformation::new(vec![
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(2.0, 4.0, 6.0),
            Vec3::new(1.0, 1.0, 1.0),
        ]);
        assert_eq!(
            t.inverted(),
            Err(ColorError::SingularMatrix { channels: 3 })
        );
    }

    #[test]
    fn test_inverse_unsupported() {
        let t = Transformation::new(vec![R, G, B, R + G]);
        assert_eq!(
            t.inverted(),
            Err(ColorError::UnsupportedDimensions { channels: 4 })
        );
    }

    #[test]
    fn test_zeros() {
        let inv = InverseTransformation::zeros(2);
        assert_eq!(inv.multiplied(R).as_slice(), &[0.0, 0.0]);
    }
}
