//! Color profiles: XYZ <-> device color space for multi-channel LEDs.
//!
//! A [`ColorProfile`] describes a device by the color each channel emits at
//! full linear drive. Channels come in two groups:
//!
//! - **primaries** (up to 3) span the gamut, e.g. red, green, blue
//! - **whites** (up to 3) sit inside that gamut, e.g. cold and warm white
//!
//! DCS vectors list the primaries first, then the whites.
//!
//! # White Optimization
//!
//! Any color inside the primary gamut can be mixed from primaries alone.
//! White LEDs render object colors better and are more efficient, so the
//! forward conversion shifts as much drive as possible from the primaries to
//! the whites without changing the emitted color:
//!
//! ```text
//! primary_v   = Pinv * color
//! white_v     = max(Winv * color, 0)
//! white_in_p  = Pinv * (W * white_v)
//! scale       = largest s in [0, 1] keeping primary_v - s * white_in_p >= 0
//!               and s * white_v <= 1
//! primary_v' = primary_v - scale * white_in_p
//! white_v'   = scale * white_v
//! ```
//!
//! `P * primary_v' + W * white_v'` equals `P * primary_v`, so only the
//! distribution across channels changes.
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use ledcms_color::Xyz;
//! use ledcms_profile::{ColorProfile, DeviceProfile, SumLimiter};
//! use ledcms_transfer::Srgb;
//!
//! let profile = ColorProfile::new(
//!     vec![
//!         Xyz::new(0.4125, 0.2127, 0.0193),
//!         Xyz::new(0.3576, 0.7152, 0.1192),
//!         Xyz::new(0.1804, 0.0722, 0.9505),
//!     ],
//!     vec![],
//!     Arc::new(Srgb),
//!     Some(Arc::new(SumLimiter::new(2.0).unwrap())),
//! )
//! .unwrap();
//!
//! let dcs = profile.xyz_to_dcs(Xyz::new(0.5, 0.4, 0.3));
//! assert!((dcs[0] - 0.9337).abs() < 1e-4);
//!
//! let back = profile.dcs_to_xyz(&dcs).unwrap();
//! assert!((back.y - 0.4).abs() < 1e-9);
//! ```

use ledcms_color::Xyz;
use ledcms_core::{ColorError, ColorResult, Dcs, LinearDcs, MAX_PRIMARIES, MAX_WHITES};
use ledcms_math::{InverseTransformation, Transformation, Vec3};
use ledcms_transfer::TransferFunction;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

use crate::OutputLimiter;

/// Bidirectional conversion between XYZ and a device color space.
///
/// Implementations provide the linear-domain conversions; the non-linear
/// entry points apply the transfer function around them.
pub trait DeviceProfile: fmt::Debug + Send + Sync {
    /// Dimensionality of the device color space.
    fn channel_count(&self) -> usize;

    /// The brightest color the device can emit, `Y` in lumens.
    fn white_point(&self) -> Xyz;

    /// The color each channel emits at full drive, in channel order.
    fn channel_points(&self) -> Vec<Xyz>;

    /// Transfer function between linear and transmitted DCS values.
    fn transfer_function(&self) -> &dyn TransferFunction;

    /// Linear drive levels reproducing `color` as closely as possible.
    ///
    /// The result is clamped to `[0, 1]` and limited.
    fn xyz_to_linear_dcs(&self, color: Xyz) -> LinearDcs;

    /// The color produced by linear drive levels `v`.
    ///
    /// Fails with [`ColorError::ChannelMismatch`] when `v` has the wrong
    /// length.
    fn linear_dcs_to_xyz(&self, v: &LinearDcs) -> ColorResult<Xyz>;

    /// DCS vector, ready for transmission, reproducing `color`.
    fn xyz_to_dcs(&self, color: Xyz) -> Dcs {
        self.transfer_function()
            .delinearize_dcs(&self.xyz_to_linear_dcs(color))
    }

    /// The color a transmitted DCS vector produces.
    ///
    /// Values are clamped to `[0, 1]` before linearization. Fails with
    /// [`ColorError::ChannelMismatch`] when `v` has the wrong length.
    fn dcs_to_xyz(&self, v: &Dcs) -> ColorResult<Xyz> {
        v.ensure_channels(self.channel_count())?;
        let linear = self.transfer_function().linearize_dcs(&v.clamped());
        self.linear_dcs_to_xyz(&linear)
    }
}

/// Profile of a device with primary and white emitters.
///
/// Constructed once, read-only afterwards; share it with `Arc`.
#[derive(Clone)]
pub struct ColorProfile {
    primaries: Transformation,
    whites: Transformation,
    full: Transformation,
    inv_primaries: InverseTransformation,
    inv_whites: InverseTransformation,
    transfer: Arc<dyn TransferFunction>,
    limiter: Option<Arc<dyn OutputLimiter>>,
    white_point: Xyz,
    white_optimization: bool,
}

impl ColorProfile {
    /// Creates a profile and precomputes the inverse transformations.
    ///
    /// `primaries` and `whites` are the XYZ colors (`Y` in lumens) of each
    /// channel at full linear drive.
    ///
    /// # Errors
    ///
    /// - [`ColorError::UnsupportedDimensions`] for more than three primaries
    ///   or whites
    /// - [`ColorError::InvalidValue`] for non-finite channel colors
    /// - [`ColorError::SingularMatrix`] when the primaries (or the whites)
    ///   are linearly dependent
    pub fn new(
        primaries: Vec<Xyz>,
        whites: Vec<Xyz>,
        transfer: Arc<dyn TransferFunction>,
        limiter: Option<Arc<dyn OutputLimiter>>,
    ) -> ColorResult<Self> {
        for (group, colors, max) in [
            ("primary", &primaries, MAX_PRIMARIES),
            ("white", &whites, MAX_WHITES),
        ] {
            if colors.len() > max {
                return Err(ColorError::UnsupportedDimensions {
                    channels: colors.len(),
                });
            }
            if let Some(bad) = colors.iter().find(|c| !c.is_finite()) {
                return Err(ColorError::InvalidValue(format!(
                    "{group} channel color is not finite: {bad:?}"
                )));
            }
        }

        let primaries = Transformation::new(primaries.into_iter().map(Xyz::to_vec3).collect());
        let whites = Transformation::new(whites.into_iter().map(Xyz::to_vec3).collect());
        let inv_primaries = primaries.inverted()?;
        let inv_whites = whites.inverted()?;
        let full = primaries.concat(&whites);

        let mut profile = Self {
            primaries,
            whites,
            full,
            inv_primaries,
            inv_whites,
            transfer,
            limiter,
            white_point: Xyz::ZERO,
            white_optimization: true,
        };
        let ones = LinearDcs::new(vec![1.0; profile.channel_count()]);
        profile.white_point = Xyz::from_vec3(profile.mix(&ones));

        debug!(
            primaries = profile.primary_count(),
            whites = profile.white_count(),
            transfer = %profile.transfer.name(),
            limiter = ?profile.limiter.as_ref().map(|l| l.name()),
            white_lumens = profile.white_point.y,
            "Color profile initialized"
        );
        Ok(profile)
    }

    /// Number of primary channels.
    #[inline]
    pub fn primary_count(&self) -> usize {
        self.primaries.channels()
    }

    /// Number of white channels.
    #[inline]
    pub fn white_count(&self) -> usize {
        self.whites.channels()
    }

    /// The output limiter, if any.
    #[inline]
    pub fn limiter(&self) -> Option<&dyn OutputLimiter> {
        self.limiter.as_deref()
    }

    /// True unless this is a [`without_white_optimization`](Self::without_white_optimization)
    /// variant.
    #[inline]
    pub fn is_white_optimized(&self) -> bool {
        self.white_optimization
    }

    /// The same profile with the white channels never driven.
    ///
    /// Colors are reproduced by the primaries alone, trading color rendering
    /// and luminous efficacy for predictable per-channel behavior. The white
    /// point is kept, so relative colors map to the same absolute colors as
    /// in the optimized profile.
    pub fn without_white_optimization(&self) -> Self {
        Self {
            inv_whites: InverseTransformation::zeros(self.white_count()),
            white_optimization: false,
            ..self.clone()
        }
    }

    // Clamp, limit, then mix all channels.
    fn mix(&self, v: &LinearDcs) -> Vec3 {
        let v = self.apply_limiter(v.clamped());
        self.full.mixed(v.as_slice())
    }

    fn apply_limiter(&self, v: LinearDcs) -> LinearDcs {
        match &self.limiter {
            Some(limiter) => limiter.limit(&v),
            None => v,
        }
    }

    /// Largest fraction of the white drive that can replace primary drive.
    fn white_scale(
        primary_v: &LinearDcs,
        white_in_primary: &LinearDcs,
        white_v: &LinearDcs,
    ) -> f64 {
        // Channels where the white needs no (or negative) primary drive can
        // never go negative.
        let scale = primary_v
            .iter()
            .zip(white_in_primary)
            .filter(|&(_, &w)| w > 0.0)
            .map(|(&p, &w)| p / w)
            .fold(1.0, f64::min);

        let white_max = white_v.iter().copied().fold(0.0, f64::max);
        let scale = if white_max > 0.0 {
            scale.min(white_max.recip())
        } else {
            scale
        };
        scale.clamp(0.0, 1.0)
    }
}

impl DeviceProfile for ColorProfile {
    fn channel_count(&self) -> usize {
        self.full.channels()
    }

    fn white_point(&self) -> Xyz {
        self.white_point
    }

    fn channel_points(&self) -> Vec<Xyz> {
        self.full.columns().iter().copied().map(Xyz::from_vec3).collect()
    }

    fn transfer_function(&self) -> &dyn TransferFunction {
        self.transfer.as_ref()
    }

    fn xyz_to_linear_dcs(&self, color: Xyz) -> LinearDcs {
        let c = color.to_vec3();

        let primary_v = self.inv_primaries.multiplied(c);
        let white_v = self.inv_whites.multiplied(c).clamped_positive();
        let white_color = self.whites.mixed(white_v.as_slice());
        let white_in_primary = self.inv_primaries.multiplied(white_color);

        let scale = Self::white_scale(&primary_v, &white_in_primary, &white_v);
        let primary_v = &primary_v - &(&white_in_primary * scale);
        let white_v = &white_v * scale;

        let linear = primary_v.concat(&white_v).clamped();
        let limited = self.apply_limiter(linear.clone());
        trace!(
            scale,
            limited = limited != linear,
            channels = limited.len(),
            "xyz_to_linear_dcs"
        );
        limited
    }

    fn linear_dcs_to_xyz(&self, v: &LinearDcs) -> ColorResult<Xyz> {
        v.ensure_channels(self.channel_count())?;
        let color = Xyz::from_vec3(self.mix(v));
        trace!(channels = v.len(), lumens = color.y, "linear_dcs_to_xyz");
        Ok(color)
    }
}

impl fmt::Debug for ColorProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorProfile")
            .field("primaries", &self.primaries.columns())
            .field("whites", &self.whites.columns())
            .field("transfer", &self.transfer.name())
            .field("limiter", &self.limiter.as_ref().map(|l| l.name()))
            .field("white_optimization", &self.white_optimization)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SumLimiter;
    use approx::assert_abs_diff_eq;
    use ledcms_transfer::{Linear, Srgb};

    const R: Xyz = Xyz::new(0.4125, 0.2127, 0.0193);
    const G: Xyz = Xyz::new(0.3576, 0.7152, 0.1192);
    const B: Xyz = Xyz::new(0.1804, 0.0722, 0.9505);

    // Inside the RGB gamut: positive mixes of the primaries
    fn cold_white() -> Xyz {
        (R + G + B) * 0.6
    }

    fn warm_white() -> Xyz {
        R * 0.55 + G * 0.4 + B * 0.1
    }

    fn rgb(limiter: Option<f64>) -> ColorProfile {
        ColorProfile::new(
            vec![R, G, B],
            vec![],
            Arc::new(Srgb),
            limiter.map(|l| Arc::new(SumLimiter::new(l).unwrap()) as Arc<dyn OutputLimiter>),
        )
        .unwrap()
    }

    fn rgbww() -> ColorProfile {
        ColorProfile::new(
            vec![R, G, B],
            vec![cold_white(), warm_white()],
            Arc::new(Linear),
            None,
        )
        .unwrap()
    }

    fn assert_xyz_eq(a: Xyz, b: Xyz, eps: f64) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = eps);
        assert_abs_diff_eq!(a.y, b.y, epsilon = eps);
        assert_abs_diff_eq!(a.z, b.z, epsilon = eps);
    }

    #[test]
    fn test_srgb_scenario() {
        let profile = ColorProfile::new(
            vec![
                Xyz::new(0.4124564, 0.2126729, 0.0193339),
                Xyz::new(0.3575761, 0.7151522, 0.1191920),
                Xyz::new(0.1804375, 0.0721750, 0.9503041),
            ],
            vec![],
            Arc::new(Srgb),
            Some(Arc::new(SumLimiter::new(3.0).unwrap())),
        )
        .unwrap();
        let dcs = profile.xyz_to_dcs(Xyz::new(0.5, 0.4, 0.3));
        assert_abs_diff_eq!(dcs[0], 0.933728, epsilon = 1e-6);
        assert_abs_diff_eq!(dcs[1], 0.564098, epsilon = 1e-6);
        assert_abs_diff_eq!(dcs[2], 0.550101, epsilon = 1e-6);
    }

    #[test]
    fn test_counts_and_points() {
        let profile = rgbww();
        assert_eq!(profile.channel_count(), 5);
        assert_eq!(profile.primary_count(), 3);
        assert_eq!(profile.white_count(), 2);
        let points = profile.channel_points();
        assert_eq!(points.len(), 5);
        assert_xyz_eq(points[0], R, 1e-15);
        assert_xyz_eq(points[4], warm_white(), 1e-15);
    }

    #[test]
    fn test_white_point() {
        let white = rgbww().white_point();
        let expected = R + G + B + cold_white() + warm_white();
        assert_xyz_eq(white, expected, 1e-12);

        // The limiter caps the all-channels-on vector too
        let limited = rgb(Some(2.0)).white_point();
        assert_xyz_eq(limited, (R + G + B) * (2.0 / 3.0), 1e-12);
    }

    #[test]
    fn test_pure_channels() {
        for profile in [rgb(None), rgbww()] {
            for (i, point) in profile.channel_points().into_iter().enumerate() {
                let v = profile.xyz_to_linear_dcs(point);
                for (j, &value) in v.iter().enumerate() {
                    let expected = if i == j { 1.0 } else { 0.0 };
                    assert_abs_diff_eq!(value, expected, epsilon = 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_roundtrip() {
        let colors = [
            Xyz::new(0.5, 0.4, 0.3),
            Xyz::new(0.3, 0.35, 0.4),
            Xyz::new(0.3, 0.2, 0.1),
            cold_white() * 0.5,
        ];
        for profile in [rgb(None), rgb(Some(2.0)), rgbww()] {
            for c in colors {
                let back = profile.dcs_to_xyz(&profile.xyz_to_dcs(c)).unwrap();
                assert_xyz_eq(back, c, 1e-6);
            }
        }
    }

    #[test]
    fn test_white_optimization_uses_whites() {
        let profile = rgbww();
        let c = cold_white() * 0.5;
        let v = profile.xyz_to_linear_dcs(c);
        // A dim cold white is reproduced by the cold white channel alone
        assert_abs_diff_eq!(v[3], 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(v[0] + v[1] + v[2], 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_white_capped_at_full_drive() {
        // Brighter than the cold white channel can produce alone
        let profile = rgbww();
        let c = cold_white() * 1.5;
        let v = profile.xyz_to_linear_dcs(c);
        assert!(v.iter().all(|&x| (0.0..=1.0).contains(&x)));
        let back = profile.linear_dcs_to_xyz(&v).unwrap();
        assert_xyz_eq(back, c, 1e-9);
    }

    #[test]
    fn test_without_white_optimization() {
        let profile = rgbww().without_white_optimization();
        assert!(!profile.is_white_optimized());
        assert_eq!(profile.white_point(), rgbww().white_point());

        let c = Xyz::new(0.5, 0.4, 0.3);
        let v = profile.xyz_to_linear_dcs(c);
        assert_eq!(v.len(), 5);
        assert_eq!(v[3], 0.0);
        assert_eq!(v[4], 0.0);
        assert_xyz_eq(profile.linear_dcs_to_xyz(&v).unwrap(), c, 1e-9);
    }

    #[test]
    fn test_whites_only() {
        // A tunable white bulb: no primaries, cold and warm white
        let profile = ColorProfile::new(
            vec![],
            vec![cold_white(), warm_white()],
            Arc::new(Linear),
            None,
        )
        .unwrap();
        let c = cold_white() * 0.3 + warm_white() * 0.6;
        let v = profile.xyz_to_linear_dcs(c);
        assert_abs_diff_eq!(v[0], 0.3, epsilon = 1e-9);
        assert_abs_diff_eq!(v[1], 0.6, epsilon = 1e-9);
    }

    #[test]
    fn test_out_of_gamut_is_clamped() {
        let profile = rgb(None);
        // Far brighter than the device
        let v = profile.xyz_to_dcs(Xyz::new(5.0, 5.0, 5.0));
        assert!(v.iter().all(|&x| (0.0..=1.0).contains(&x)));
        // Negative drive is impossible
        let v = profile.xyz_to_linear_dcs(Xyz::new(0.0, 0.5, 0.0));
        assert!(v.iter().all(|&x| x >= 0.0));
    }

    #[test]
    fn test_limiter_applied_both_ways() {
        let profile = rgb(Some(1.0));
        let v = profile.xyz_to_linear_dcs(Xyz::new(0.5, 0.4, 0.3));
        assert!(v.sum() <= 1.0 + 1e-12);

        let full = profile.dcs_to_xyz(&Dcs::from([1.0, 1.0, 1.0])).unwrap();
        assert_xyz_eq(full, profile.white_point(), 1e-12);
    }

    #[test]
    fn test_channel_mismatch() {
        let profile = rgbww();
        assert_eq!(
            profile.dcs_to_xyz(&Dcs::from([0.5, 0.5, 0.5])),
            Err(ColorError::ChannelMismatch {
                expected: 5,
                actual: 3
            })
        );
        assert!(profile.linear_dcs_to_xyz(&LinearDcs::zeros(6)).is_err());
    }

    #[test]
    fn test_construction_errors() {
        let singular =
            ColorProfile::new(vec![R, R * 2.0], vec![], Arc::new(Linear), None);
        assert_eq!(
            singular.unwrap_err(),
            ColorError::SingularMatrix { channels: 2 }
        );

        let too_many =
            ColorProfile::new(vec![R, G, B], vec![R, G, B, R], Arc::new(Linear), None);
        assert_eq!(
            too_many.unwrap_err(),
            ColorError::UnsupportedDimensions { channels: 4 }
        );

        let nan = ColorProfile::new(
            vec![Xyz::new(f64::NAN, 0.0, 0.0)],
            vec![],
            Arc::new(Linear),
            None,
        );
        assert!(matches!(nan, Err(ColorError::InvalidValue(_))));
    }

    #[test]
    fn test_debug_is_readable() {
        let s = format!("{:?}", rgb(Some(2.0)));
        assert!(s.contains("srgb"));
        assert!(s.contains("sum <= 2"));
    }
}
