//! Profile for devices that accept CIE 1931 XYZ directly.
//!
//! The three channels are X, Y and Z scaled so the device white has `Y = 1`.
//! There is no gamut to invert and no white optimization.

use ledcms_color::Xyz;
use ledcms_core::{ColorError, ColorResult, LinearDcs};
use ledcms_transfer::TransferFunction;
use std::fmt;
use std::sync::Arc;

use crate::DeviceProfile;

/// Three-channel XYZ device profile.
///
/// ```rust
/// use std::sync::Arc;
/// use ledcms_color::Xyz;
/// use ledcms_profile::{DeviceProfile, XyzProfile};
/// use ledcms_transfer::Linear;
///
/// let profile = XyzProfile::new(Xyz::new(950.0, 1000.0, 1089.0), Arc::new(Linear)).unwrap();
/// let v = profile.xyz_to_dcs(Xyz::new(95.0, 100.0, 108.9));
/// assert!((v[1] - 0.1).abs() < 1e-12);
/// ```
#[derive(Clone)]
pub struct XyzProfile {
    white_point: Xyz,
    transfer: Arc<dyn TransferFunction>,
}

impl XyzProfile {
    /// Creates a profile whose brightest output is `white_point`.
    ///
    /// Fails with [`ColorError::InvalidValue`] unless the white point is
    /// finite with positive luminance.
    pub fn new(white_point: Xyz, transfer: Arc<dyn TransferFunction>) -> ColorResult<Self> {
        if !white_point.is_finite() || white_point.y <= 0.0 {
            return Err(ColorError::InvalidValue(format!(
                "white point needs finite components and positive luminance, got {white_point:?}"
            )));
        }
        Ok(Self {
            white_point,
            transfer,
        })
    }
}

impl DeviceProfile for XyzProfile {
    fn channel_count(&self) -> usize {
        3
    }

    fn white_point(&self) -> Xyz {
        self.white_point
    }

    fn channel_points(&self) -> Vec<Xyz> {
        let y = self.white_point.y;
        vec![
            Xyz::new(y, 0.0, 0.0),
            Xyz::new(0.0, y, 0.0),
            Xyz::new(0.0, 0.0, y),
        ]
    }

    fn transfer_function(&self) -> &dyn TransferFunction {
        self.transfer.as_ref()
    }

    fn xyz_to_linear_dcs(&self, color: Xyz) -> LinearDcs {
        let y = self.white_point.y;
        LinearDcs::from([color.x / y, color.y / y, color.z / y]).clamped()
    }

    fn linear_dcs_to_xyz(&self, v: &LinearDcs) -> ColorResult<Xyz> {
        v.ensure_channels(3)?;
        let v = v.clamped();
        Ok(Xyz::new(v[0], v[1], v[2]) * self.white_point.y)
    }
}

impl fmt::Debug for XyzProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XyzProfile")
            .field("white_point", &self.white_point)
            .field("transfer", &self.transfer.name())
            .finish()
    }
}
