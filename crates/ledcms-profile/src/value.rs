//! Emittable values and their conversion to and from device vectors.
//!
//! [`IntoDcs`] is implemented by everything a device can be asked to show:
//! colorimetric values, reference light sources and raw vectors. [`FromDcs`]
//! is implemented by the types a device vector can be read back into;
//! light source models are write-only.
//!
//! Relative values (`Y = 1` at full output) are scaled by the luminance of
//! the profile's white point.
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use ledcms_color::{Lab, Xyz};
//! use ledcms_illuminant::BlackBodyFixed;
//! use ledcms_profile::{ColorProfile, FromDcs, IntoDcs, Value};
//! use ledcms_transfer::Linear;
//!
//! let profile = ColorProfile::new(
//!     vec![
//!         Xyz::new(41.25, 21.27, 1.93),
//!         Xyz::new(35.76, 71.52, 11.92),
//!         Xyz::new(18.04, 7.22, 95.05),
//!     ],
//!     vec![],
//!     Arc::new(Linear),
//!     None,
//! )
//! .unwrap();
//!
//! let dcs = BlackBodyFixed::new(4000.0, 50.0).into_dcs(&profile).unwrap();
//! let lab = Lab::from_dcs(&profile, &dcs).unwrap();
//! assert!(lab.b > 0.0);
//!
//! let value = Value::from(Xyz::new(20.0, 20.0, 20.0));
//! assert_eq!(value.into_dcs(&profile).unwrap().len(), 3);
//! ```

use ledcms_color::{Lab, RelativeXyY, RelativeXyz, Rgb, XyY, Xyz};
use ledcms_core::{ColorError, ColorResult, Dcs, LinearDcs};
use ledcms_illuminant::{
    BlackBodyArea, BlackBodyFixed, StandardIlluminant, StandardIlluminantDSeries,
};
use serde::{Deserialize, Serialize};

use crate::DeviceProfile;

/// A value that can be shown on a device.
pub trait IntoDcs {
    /// The DCS vector that reproduces `self` on `profile`.
    fn into_dcs<P: DeviceProfile + ?Sized>(self, profile: &P) -> ColorResult<Dcs>;
}

/// A value that can be read back from a device.
pub trait FromDcs: Sized {
    /// Interprets `v` as emitted by a device described by `profile`.
    fn from_dcs<P: DeviceProfile + ?Sized>(profile: &P, v: &Dcs) -> ColorResult<Self>;
}

// Luminance of the profile's brightest output, for relative values
fn max_luminance<P: DeviceProfile + ?Sized>(profile: &P) -> ColorResult<f64> {
    let y = profile.white_point().y;
    if y > 0.0 && y.is_finite() {
        Ok(y)
    } else {
        Err(ColorError::InvalidValue(format!(
            "profile white point has no usable luminance: {y}"
        )))
    }
}

// Profile white point as a relative white
fn relative_white<P: DeviceProfile + ?Sized>(profile: &P) -> ColorResult<RelativeXyz> {
    Ok(profile.white_point().relative(max_luminance(profile)?))
}

impl IntoDcs for Xyz {
    fn into_dcs<P: DeviceProfile + ?Sized>(self, profile: &P) -> ColorResult<Dcs> {
        Ok(profile.xyz_to_dcs(self))
    }
}

impl FromDcs for Xyz {
    fn from_dcs<P: DeviceProfile + ?Sized>(profile: &P, v: &Dcs) -> ColorResult<Self> {
        profile.dcs_to_xyz(v)
    }
}

impl IntoDcs for RelativeXyz {
    fn into_dcs<P: DeviceProfile + ?Sized>(self, profile: &P) -> ColorResult<Dcs> {
        self.absolute(max_luminance(profile)?).into_dcs(profile)
    }
}

impl FromDcs for RelativeXyz {
    fn from_dcs<P: DeviceProfile + ?Sized>(profile: &P, v: &Dcs) -> ColorResult<Self> {
        let max = max_luminance(profile)?;
        Ok(profile.dcs_to_xyz(v)?.relative(max))
    }
}

/// Luminance in lumens.
impl IntoDcs for XyY {
    fn into_dcs<P: DeviceProfile + ?Sized>(self, profile: &P) -> ColorResult<Dcs> {
        Xyz::from_vec3(self.try_to_vec3()?).into_dcs(profile)
    }
}

impl FromDcs for XyY {
    fn from_dcs<P: DeviceProfile + ?Sized>(profile: &P, v: &Dcs) -> ColorResult<Self> {
        Ok(Self::from(profile.dcs_to_xyz(v)?))
    }
}

impl IntoDcs for RelativeXyY {
    fn into_dcs<P: DeviceProfile + ?Sized>(self, profile: &P) -> ColorResult<Dcs> {
        RelativeXyz::from_vec3(self.try_to_vec3()?).into_dcs(profile)
    }
}

impl FromDcs for RelativeXyY {
    fn from_dcs<P: DeviceProfile + ?Sized>(profile: &P, v: &Dcs) -> ColorResult<Self> {
        Ok(Self::from(RelativeXyz::from_dcs(profile, v)?))
    }
}

impl IntoDcs for Lab {
    fn into_dcs<P: DeviceProfile + ?Sized>(self, profile: &P) -> ColorResult<Dcs> {
        self.to_xyz().into_dcs(profile)
    }
}

/// Computed against the profile's white point, so `L* = 100` is full output.
impl FromDcs for Lab {
    fn from_dcs<P: DeviceProfile + ?Sized>(profile: &P, v: &Dcs) -> ColorResult<Self> {
        let white = relative_white(profile)?;
        Ok(Lab::from_xyz(RelativeXyz::from_dcs(profile, v)?, white))
    }
}

impl IntoDcs for Rgb {
    fn into_dcs<P: DeviceProfile + ?Sized>(self, profile: &P) -> ColorResult<Dcs> {
        self.to_relative_xyz().into_dcs(profile)
    }
}

impl FromDcs for Rgb {
    fn from_dcs<P: DeviceProfile + ?Sized>(profile: &P, v: &Dcs) -> ColorResult<Self> {
        Ok(Rgb::from_relative_xyz(RelativeXyz::from_dcs(profile, v)?))
    }
}

/// Passed through, clamped to `[0, 1]`.
impl IntoDcs for Dcs {
    fn into_dcs<P: DeviceProfile + ?Sized>(self, profile: &P) -> ColorResult<Dcs> {
        self.ensure_channels(profile.channel_count())?;
        Ok(self.clamped())
    }
}

impl FromDcs for Dcs {
    fn from_dcs<P: DeviceProfile + ?Sized>(profile: &P, v: &Dcs) -> ColorResult<Self> {
        v.ensure_channels(profile.channel_count())?;
        Ok(v.clamped())
    }
}

/// Clamped and encoded with the profile's transfer function.
impl IntoDcs for LinearDcs {
    fn into_dcs<P: DeviceProfile + ?Sized>(self, profile: &P) -> ColorResult<Dcs> {
        self.ensure_channels(profile.channel_count())?;
        Ok(profile.transfer_function().delinearize_dcs(&self.clamped()))
    }
}

impl FromDcs for LinearDcs {
    fn from_dcs<P: DeviceProfile + ?Sized>(profile: &P, v: &Dcs) -> ColorResult<Self> {
        v.ensure_channels(profile.channel_count())?;
        Ok(profile.transfer_function().linearize_dcs(&v.clamped()))
    }
}

impl IntoDcs for BlackBodyFixed {
    fn into_dcs<P: DeviceProfile + ?Sized>(self, profile: &P) -> ColorResult<Dcs> {
        self.xyz().into_dcs(profile)
    }
}

impl IntoDcs for BlackBodyArea {
    fn into_dcs<P: DeviceProfile + ?Sized>(self, profile: &P) -> ColorResult<Dcs> {
        self.xyz().into_dcs(profile)
    }
}

impl IntoDcs for StandardIlluminantDSeries {
    fn into_dcs<P: DeviceProfile + ?Sized>(self, profile: &P) -> ColorResult<Dcs> {
        self.xyz().into_dcs(profile)
    }
}

/// At the device's full brightness.
impl IntoDcs for StandardIlluminant {
    fn into_dcs<P: DeviceProfile + ?Sized>(self, profile: &P) -> ColorResult<Dcs> {
        self.xyz().into_dcs(profile)
    }
}

/// A device-side preset ("scene") as reported by a light.
///
/// Scenes are animated programs running on the device and have no
/// colorimetric equivalent. Absent parameters are `None`; zero is a valid
/// dimming level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SceneState {
    /// Device-specific scene id.
    pub scene: u16,
    /// Animation speed, percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<u8>,
    /// Brightness, percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimming: Option<u8>,
    /// Color temperature, K.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<u16>,
}

impl SceneState {
    fn not_representable(&self) -> ColorError {
        ColorError::NotRepresentable(format!("scene {} has no color equivalent", self.scene))
    }
}

impl IntoDcs for SceneState {
    fn into_dcs<P: DeviceProfile + ?Sized>(self, _profile: &P) -> ColorResult<Dcs> {
        Err(self.not_representable())
    }
}

/// Always fails: a DCS vector never describes a scene.
impl FromDcs for SceneState {
    fn from_dcs<P: DeviceProfile + ?Sized>(_profile: &P, _v: &Dcs) -> ColorResult<Self> {
        Err(ColorError::NotRepresentable(
            "a device vector cannot be read back as a scene".into(),
        ))
    }
}

/// Any emittable value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absolute XYZ, lumens
    Xyz(Xyz),
    /// Relative XYZ, `Y = 1` at full output
    RelativeXyz(RelativeXyz),
    /// xyY, luminance in lumens
    XyY(XyY),
    /// xyY, `Y = 1` at full output
    RelativeXyY(RelativeXyY),
    /// L*a*b*, relative to full output
    Lab(Lab),
    /// Encoded sRGB, relative to full output
    Rgb(Rgb),
    /// Raw device vector
    Dcs(Dcs),
    /// Linear device vector
    LinearDcs(LinearDcs),
    /// Analytic blackbody
    BlackBodyFixed(BlackBodyFixed),
    /// Integrated blackbody
    BlackBodyArea(BlackBodyArea),
    /// CIE daylight
    DSeries(StandardIlluminantDSeries),
    /// Named illuminant at full output
    Illuminant(StandardIlluminant),
    /// Device-side scene
    Scene(SceneState),
}

impl Value {
    /// The absolute color this value stands for on `profile`.
    ///
    /// Device vectors are interpreted through the profile; other values
    /// are converted directly, without gamut clipping. Fails with
    /// [`ColorError::NotRepresentable`] for scenes.
    pub fn to_xyz<P: DeviceProfile + ?Sized>(&self, profile: &P) -> ColorResult<Xyz> {
        Ok(match self {
            Self::Xyz(c) => *c,
            Self::RelativeXyz(c) => c.absolute(max_luminance(profile)?),
            Self::XyY(c) => Xyz::from_vec3(c.try_to_vec3()?),
            Self::RelativeXyY(c) => {
                RelativeXyz::from_vec3(c.try_to_vec3()?).absolute(max_luminance(profile)?)
            }
            Self::Lab(c) => c.to_xyz().absolute(max_luminance(profile)?),
            Self::Rgb(c) => c.to_relative_xyz().absolute(max_luminance(profile)?),
            Self::Dcs(v) => profile.dcs_to_xyz(v)?,
            Self::LinearDcs(v) => profile.linear_dcs_to_xyz(v)?,
            Self::BlackBodyFixed(b) => b.xyz(),
            Self::BlackBodyArea(b) => b.xyz(),
            Self::DSeries(d) => d.xyz(),
            Self::Illuminant(i) => i.xyz().absolute(max_luminance(profile)?),
            Self::Scene(s) => return Err(s.not_representable()),
        })
    }

    /// True for values that [`to_xyz`](Self::to_xyz) can convert.
    pub fn is_colorimetric(&self) -> bool {
        !matches!(self, Self::Scene(_))
    }
}

impl IntoDcs for Value {
    fn into_dcs<P: DeviceProfile + ?Sized>(self, profile: &P) -> ColorResult<Dcs> {
        match self {
            Self::Xyz(c) => c.into_dcs(profile),
            Self::RelativeXyz(c) => c.into_dcs(profile),
            Self::XyY(c) => c.into_dcs(profile),
            Self::RelativeXyY(c) => c.into_dcs(profile),
            Self::Lab(c) => c.into_dcs(profile),
            Self::Rgb(c) => c.into_dcs(profile),
            Self::Dcs(v) => v.into_dcs(profile),
            Self::LinearDcs(v) => v.into_dcs(profile),
            Self::BlackBodyFixed(b) => b.into_dcs(profile),
            Self::BlackBodyArea(b) => b.into_dcs(profile),
            Self::DSeries(d) => d.into_dcs(profile),
            Self::Illuminant(i) => i.into_dcs(profile),
            Self::Scene(s) => s.into_dcs(profile),
        }
    }
}

macro_rules! value_from {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(v: $ty) -> Self {
                    Self::$variant(v)
                }
            }
        )*
    };
}

value_from!(
    Xyz(Xyz),
    RelativeXyz(RelativeXyz),
    XyY(XyY),
    RelativeXyY(RelativeXyY),
    Lab(Lab),
    Rgb(Rgb),
    Dcs(Dcs),
    LinearDcs(LinearDcs),
    BlackBodyFixed(BlackBodyFixed),
    BlackBodyArea(BlackBodyArea),
    DSeries(StandardIlluminantDSeries),
    Illuminant(StandardIlluminant),
    Scene(SceneState),
);
