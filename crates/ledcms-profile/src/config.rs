//! YAML profile descriptions.
//!
//! Calibration data for a device model is a handful of measured channel
//! colors. A [`ProfileConfig`] carries them in a small YAML document:
//!
//! ```yaml
//! name: RGBWW bulb
//! primaries:
//!   - { name: red,   x: 0.6857, y: 0.3115, lumens: 120 }
//!   - { name: green, x: 0.1700, y: 0.7000, lumens: 330 }
//!   - { name: blue,  xyz: [27.5, 11.0, 146.2] }
//! whites:
//!   - { name: cold, x: 0.3127, y: 0.3290, lumens: 550 }
//!   - { name: warm, x: 0.4596, y: 0.4105, lumens: 480 }
//! transfer: srgb          # linear | srgb | { gamma: 2.2 }
//! limiter: { sum: 2.0 }   # optional
//! ```
//!
//! Channel colors are given either as absolute XYZ (`xyz`) or as
//! chromaticity plus luminous flux (`x`, `y`, `lumens`).
//!
//! # Usage
//!
//! ```rust
//! use ledcms_profile::{DeviceProfile, ProfileConfig};
//!
//! let config = ProfileConfig::from_yaml("
//! whites:
//!   - { x: 0.3127, y: 0.3290, lumens: 800 }
//! ").unwrap();
//! let profile = config.build().unwrap();
//! assert_eq!(profile.channel_count(), 1);
//! assert!((profile.white_point().y - 800.0).abs() < 1e-9);
//! ```

use ledcms_color::{XyY, Xyz};
use ledcms_core::ColorResult;
use ledcms_transfer::{Gamma, Linear, Srgb, TransferFunction};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

use crate::{ColorProfile, OutputLimiter, ProfileError, ProfileResult, SumLimiter};

/// Serializable description of a [`ColorProfile`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Human-readable device name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Gamut-spanning channels, at most three.
    #[serde(default)]
    pub primaries: Vec<ChannelConfig>,
    /// White channels, at most three.
    #[serde(default)]
    pub whites: Vec<ChannelConfig>,
    /// Transfer function of the transmitted values.
    #[serde(default)]
    pub transfer: TransferConfig,
    /// Optional output limiter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limiter: Option<LimiterConfig>,
}

/// One device channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelConfig {
    /// Channel label, e.g. `"red"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Color at full linear drive.
    #[serde(flatten)]
    pub color: ChannelColor,
}

/// Color of a channel at full drive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChannelColor {
    /// Absolute XYZ, `Y` in lumens.
    Xyz {
        /// `[X, Y, Z]`
        xyz: [f64; 3],
    },
    /// Chromaticity plus luminous flux.
    Chromaticity {
        /// x chromaticity
        x: f64,
        /// y chromaticity
        y: f64,
        /// Luminous flux, lm
        lumens: f64,
    },
}

impl ChannelColor {
    /// Absolute XYZ.
    ///
    /// Fails with [`ColorError::InvalidValue`](ledcms_core::ColorError::InvalidValue)
    /// for a chromaticity with `y = 0`.
    pub fn xyz(&self) -> ColorResult<Xyz> {
        match *self {
            Self::Xyz { xyz } => Ok(Xyz::from(xyz)),
            Self::Chromaticity { x, y, lumens } => {
                XyY::new(x, y, lumens).try_to_vec3().map(Xyz::from_vec3)
            }
        }
    }
}

impl ChannelConfig {
    /// An unnamed channel from absolute XYZ.
    pub fn from_xyz(xyz: Xyz) -> Self {
        Self {
            name: None,
            color: ChannelColor::Xyz {
                xyz: [xyz.x, xyz.y, xyz.z],
            },
        }
    }
}

/// Transfer function selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TransferConfig {
    /// `linear` or `srgb`.
    Named(TransferName),
    /// Power law, `{ gamma: 2.2 }`.
    Gamma {
        /// Exponent
        gamma: f64,
    },
}

/// Transfer functions selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferName {
    /// Identity
    Linear,
    /// sRGB piecewise curve
    Srgb,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self::Named(TransferName::Linear)
    }
}

impl TransferConfig {
    /// Instantiates the transfer function.
    pub fn build(&self) -> ColorResult<Arc<dyn TransferFunction>> {
        Ok(match *self {
            Self::Named(TransferName::Linear) => Arc::new(Linear),
            Self::Named(TransferName::Srgb) => Arc::new(Srgb),
            Self::Gamma { gamma } => Arc::new(Gamma::new(gamma)?),
        })
    }
}

/// Output limiter selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LimiterConfig {
    /// Maximum sum of all linear channel values.
    pub sum: f64,
}

impl LimiterConfig {
    /// Instantiates the limiter.
    pub fn build(&self) -> ColorResult<Arc<dyn OutputLimiter>> {
        Ok(Arc::new(SumLimiter::new(self.sum)?))
    }
}

impl ProfileConfig {
    /// Parses a YAML document.
    pub fn from_yaml(yaml: &str) -> ProfileResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads a YAML file.
    pub fn load(path: impl AsRef<Path>) -> ProfileResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        debug!(
            path = %path.display(),
            name = config.name.as_deref().unwrap_or(""),
            primaries = config.primaries.len(),
            whites = config.whites.len(),
            "Loaded profile config"
        );
        Ok(config)
    }

    /// Serializes to YAML.
    pub fn to_yaml(&self) -> ProfileResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Builds the described profile.
    ///
    /// Fails with [`ProfileError::Config`] when there are no channels, and
    /// with [`ProfileError::Color`] when a channel color, the transfer
    /// function or the limiter is invalid or the channels are singular.
    pub fn build(&self) -> ProfileResult<ColorProfile> {
        if self.primaries.is_empty() && self.whites.is_empty() {
            return Err(ProfileError::Config("profile has no channels".into()));
        }
        let colors = |channels: &[ChannelConfig]| -> ColorResult<Vec<Xyz>> {
            channels.iter().map(|c| c.color.xyz()).collect()
        };
        let limiter = self.limiter.as_ref().map(LimiterConfig::build).transpose()?;
        Ok(ColorProfile::new(
            colors(&self.primaries)?,
            colors(&self.whites)?,
            self.transfer.build()?,
            limiter,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DeviceProfile;
    use approx::assert_abs_diff_eq;
    use ledcms_core::ColorError;
    use std::io::Write;

    const RGBWW: &str = "
name: RGBWW bulb
primaries:
  - { name: red,   x: 0.6857, y: 0.3115, lumens: 120 }
  - { name: green, x: 0.1700, y: 0.7000, lumens: 330 }
  - { name: blue,  xyz: [27.5, 11.0, 146.2] }
whites:
  - { name: cold, x: 0.3127, y: 0.3290, lumens: 550 }
  - { name: warm, x: 0.4596, y: 0.4105, lumens: 480 }
transfer: srgb
limiter: { sum: 2.0 }
";

    #[test]
    fn test_parse() {
        let config = ProfileConfig::from_yaml(RGBWW).unwrap();
        assert_eq!(config.name.as_deref(), Some("RGBWW bulb"));
        assert_eq!(config.primaries.len(), 3);
        assert_eq!(config.primaries[0].name.as_deref(), Some("red"));
        assert_eq!(
            config.primaries[2].color,
            ChannelColor::Xyz {
                xyz: [27.5, 11.0, 146.2]
            }
        );
        assert_eq!(config.transfer, TransferConfig::Named(TransferName::Srgb));
        assert_eq!(config.limiter, Some(LimiterConfig { sum: 2.0 }));
    }

    #[test]
    fn test_build() {
        let profile = ProfileConfig::from_yaml(RGBWW).unwrap().build().unwrap();
        assert_eq!(profile.channel_count(), 5);
        assert_eq!(profile.transfer_function().name(), "srgb");
        assert_eq!(profile.limiter().map(|l| l.name()).as_deref(), Some("sum <= 2"));

        let red = profile.channel_points()[0];
        assert_abs_diff_eq!(red.y, 120.0, epsilon = 1e-9);
        let (x, y) = red.chromaticity();
        assert_abs_diff_eq!(x, 0.6857, epsilon = 1e-12);
        assert_abs_diff_eq!(y, 0.3115, epsilon = 1e-12);
    }

    #[test]
    fn test_defaults() {
        let config = ProfileConfig::from_yaml("primaries: [{ xyz: [1.0, 1.0, 1.0] }]").unwrap();
        assert_eq!(config.transfer, TransferConfig::default());
        assert!(config.whites.is_empty());
        assert!(config.limiter.is_none());
    }

    #[test]
    fn test_gamma() {
        let config = ProfileConfig::from_yaml(
            "whites: [{ xyz: [95.0, 100.0, 108.9] }]\ntransfer: { gamma: 2.2 }",
        )
        .unwrap();
        assert_eq!(config.transfer, TransferConfig::Gamma { gamma: 2.2 });
        let profile = config.build().unwrap();
        assert_eq!(profile.transfer_function().name(), "gamma 2.2");

        let bad = ProfileConfig::from_yaml(
            "whites: [{ xyz: [95.0, 100.0, 108.9] }]\ntransfer: { gamma: -1.0 }",
        )
        .unwrap();
        assert!(matches!(
            bad.build(),
            Err(ProfileError::Color(ColorError::InvalidValue(_)))
        ));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = ProfileConfig::from_yaml(RGBWW).unwrap();
        let yaml = config.to_yaml().unwrap();
        assert_eq!(ProfileConfig::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn test_invalid_configs() {
        assert!(matches!(
            ProfileConfig::from_yaml("primaries: 7"),
            Err(ProfileError::Yaml(_))
        ));
        assert!(matches!(
            ProfileConfig::default().build(),
            Err(ProfileError::Config(_))
        ));

        let zero_y = ProfileConfig::from_yaml("whites: [{ x: 0.3, y: 0.0, lumens: 10 }]").unwrap();
        assert!(matches!(
            zero_y.build(),
            Err(ProfileError::Color(ColorError::InvalidValue(_)))
        ));

        let limit = ProfileConfig::from_yaml(
            "whites: [{ xyz: [1.0, 1.0, 1.0] }]\nlimiter: { sum: 0.0 }",
        )
        .unwrap();
        assert!(matches!(
            limit.build(),
            Err(ProfileError::Color(ColorError::InvalidValue(_)))
        ));

        let singular = ProfileConfig {
            whites: vec![
                ChannelConfig::from_xyz(Xyz::new(1.0, 1.0, 1.0)),
                ChannelConfig::from_xyz(Xyz::new(2.0, 2.0, 2.0)),
            ],
            ..Default::default()
        };
        assert!(matches!(
            singular.build(),
            Err(ProfileError::Color(ColorError::SingularMatrix { channels: 2 }))
        ));
    }

    #[test]
    fn test_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(RGBWW.as_bytes()).unwrap();
        let config = ProfileConfig::load(file.path()).unwrap();
        assert_eq!(config.whites.len(), 2);

        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            ProfileConfig::load(dir.path().join("missing.yaml")),
            Err(ProfileError::Io(_))
        ));
    }
}
