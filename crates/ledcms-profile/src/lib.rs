//! # ledcms-profile
//!
//! Device color profiles for multi-channel LED fixtures.
//!
//! A profile maps absolute CIE 1931 XYZ (in lumens) to a device color space
//! (DCS) vector with one entry per LED channel, and back. It holds:
//!
//! - up to three **primaries** that span the device gamut
//! - up to three **whites** that produce white light more efficiently
//! - a **transfer function** between linear and encoded channel values
//! - an optional **output limiter** capping the total drive
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
//!         Xyz::new(41.25, 21.27, 1.93),
//!         Xyz::new(35.76, 71.52, 11.92),
//!         Xyz::new(18.04, 7.22, 95.05),
//!     ],
//!     vec![Xyz::new(57.0, 60.0, 65.0)],
//!     Arc::new(Srgb),
//!     Some(Arc::new(SumLimiter::new(2.0).unwrap())),
//! )
//! .unwrap();
//!
//! let dcs = profile.xyz_to_dcs(Xyz::new(30.0, 32.0, 35.0));
//! assert_eq!(dcs.len(), 4);
//! let back = profile.dcs_to_xyz(&dcs).unwrap();
//! assert!((back.y - 32.0).abs() < 1e-6);
//! ```
//!
//! Profiles can also be described in YAML, see [`ProfileConfig`].
//!
//! # Dependencies
//!
//! - `ledcms-core` - DCS vectors and error types
//! - `ledcms-math` - channel matrix inversion
//! - `ledcms-transfer` - channel encoding
//! - `ledcms-color`, `ledcms-illuminant` - emittable values
//! - [`serde`], [`serde_yaml`] - profile files
//! - [`thiserror`] - error types
//! - [`tracing`] - construction and conversion logging
//!
//! # Used By
//!
//! - Device drivers sending colors to LED fixtures

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod config;
mod error;
mod limiter;
mod profile;
mod value;
mod xyz_profile;

pub use config::{
    ChannelColor, ChannelConfig, LimiterConfig, ProfileConfig, TransferConfig, TransferName,
};
pub use error::{ProfileError, ProfileResult};
pub use limiter::{NoLimit, OutputLimiter, SumLimiter};
pub use profile::{ColorProfile, DeviceProfile};
pub use value::{FromDcs, IntoDcs, SceneState, Value};
pub use xyz_profile::XyzProfile;

/// Common imports for working with profiles.
pub mod prelude {
    pub use crate::{
        ColorProfile, DeviceProfile, FromDcs, IntoDcs, OutputLimiter, ProfileConfig, SumLimiter,
        Value, XyzProfile,
    };
    pub use ledcms_color::{Lab, RelativeXyY, RelativeXyz, Rgb, XyY, Xyz};
    pub use ledcms_core::{ColorError, ColorResult, Dcs, LinearDcs};
}
