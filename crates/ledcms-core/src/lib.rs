//! # ledcms-core
//!
//! Core types for LED color management.
//!
//! This crate provides the foundational types used throughout the ledcms workspace:
//!
//! - [`ColorError`], [`ColorResult`] - The shared error taxonomy
//! - [`Dcs`] - Device color space vector as transmitted to hardware (non-linear)
//! - [`LinearDcs`] - Device color space vector after the inverse transfer function
//!
//! ## Design Philosophy
//!
//! A device color space (DCS) vector is the per-channel drive level of a
//! multi-channel light. The two flavors are distinct types so a linear vector
//! cannot be sent to hardware by accident:
//!
//! ```ignore
//! let raw: Dcs = profile.xyz_to_dcs(color);
//! let linear: LinearDcs = tf.linearize_dcs(&raw);
//! // driver.send(linear); // Compile error!
//! ```
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. All other ledcms crates depend on it:
//!
//! ```text
//! ledcms-core (this crate)
//!    ^
//!    |
//!    +-- ledcms-math (vectors, matrices, transformations)
//!    +-- ledcms-transfer (transfer functions)
//!    +-- ledcms-color (XYZ, xyY, L*a*b*, sRGB)
//!    +-- ledcms-illuminant (blackbody, daylight, standard illuminants)
//!    +-- ledcms-profile (color profiles, limiters, config)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod dcs;
pub mod error;

pub use dcs::{Dcs, LinearDcs};
pub use error::{ColorError, ColorResult};

/// Maximum number of primary channels a profile can own.
pub const MAX_PRIMARIES: usize = 3;

/// Maximum number of white channels a profile can own.
pub const MAX_WHITES: usize = 3;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::dcs::{Dcs, LinearDcs};
    pub use crate::error::{ColorError, ColorResult};
}
