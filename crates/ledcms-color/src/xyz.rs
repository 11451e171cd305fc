//! CIE 1931 XYZ tristimulus values.
//!
//! Two flavors share the same layout but not the same units:
//!
//! - [`Xyz`] - absolute, `Y` in lumens
//! - [`RelativeXyz`] - `Y` normalized to a device's maximum brightness
//!   (`Y = 1` at full output)
//!
//! ```rust
//! use ledcms_color::Xyz;
//!
//! let c = Xyz::new(400.0, 800.0, 300.0);
//! let rel = c.relative(1600.0);
//! assert_eq!(rel.y, 0.5);
//! assert_eq!(rel.absolute(1600.0), c);
//! ```

use ledcms_math::Vec3;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

macro_rules! tristimulus {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
        pub struct $name {
            /// X tristimulus
            pub x: f64,
            /// Y tristimulus (luminance)
            pub y: f64,
            /// Z tristimulus
            pub z: f64,
        }

        impl $name {
            /// Black.
            pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

            /// Creates a new value.
            #[inline]
            pub const fn new(x: f64, y: f64, z: f64) -> Self {
                Self { x, y, z }
            }

            /// As a math vector.
            #[inline]
            pub const fn to_vec3(self) -> Vec3 {
                Vec3::new(self.x, self.y, self.z)
            }

            /// From a math vector.
            #[inline]
            pub const fn from_vec3(v: Vec3) -> Self {
                Self::new(v.x, v.y, v.z)
            }

            /// Chromaticity coordinates `(x, y)`.
            ///
            /// Returns `(0, 0)` for black.
            pub fn chromaticity(self) -> (f64, f64) {
                let sum = self.x + self.y + self.z;
                if sum == 0.0 {
                    (0.0, 0.0)
                } else {
                    (self.x / sum, self.y / sum)
                }
            }

            /// True if all components are finite.
            #[inline]
            pub fn is_finite(self) -> bool {
                self.to_vec3().is_finite()
            }
        }

        impl Add for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
            }
        }

        impl Sub for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
            }
        }

        impl Mul<f64> for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: f64) -> Self {
                Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
            }
        }

        impl From<Vec3> for $name {
            #[inline]
            fn from(v: Vec3) -> Self {
                Self::from_vec3(v)
            }
        }

        impl From<$name> for Vec3 {
            #[inline]
            fn from(c: $name) -> Vec3 {
                c.to_vec3()
            }
        }

        impl From<[f64; 3]> for $name {
            #[inline]
            fn from(a: [f64; 3]) -> Self {
                Self::new(a[0], a[1], a[2])
            }
        }
    };
}

tristimulus!(
    /// Absolute CIE 1931 XYZ, `Y` in lumens.
    Xyz
);

tristimulus!(
    /// Relative CIE 1931 XYZ, `Y = 1` at a device's maximum output.
    RelativeXyz
);

impl Xyz {
    /// Luminous flux in lumens.
    #[inline]
    pub fn lumens(self) -> f64 {
        self.y
    }

    /// Normalizes to a device whose maximum output is `max` lumens.
    ///
    /// `max` must be positive.
    #[inline]
    pub fn relative(self, max: f64) -> RelativeXyz {
        RelativeXyz::new(self.x / max, self.y / max, self.z / max)
    }
}

impl RelativeXyz {
    /// Scales to absolute lumens for a device whose maximum output is `max`.
    #[inline]
    pub fn absolute(self, max: f64) -> Xyz {
        Xyz::new(self.x * max, self.y * max, self.z * max)
    }

    /// Rescales so that `Y = 1`.
    ///
    /// Black stays black.
    pub fn normalized(self) -> Self {
        if self.y == 0.0 { self } else { self * (1.0 / self.y) }
    }
}
