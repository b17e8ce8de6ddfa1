//! Angle unit types returned by vector angle queries
//!
//! Newtype wrappers keep degrees and radians from being mixed up at call
//! sites. Both wrap `f64` so results carry the full precision of the vector
//! arithmetic that produced them.
//!
//! # Design Philosophy
//! - Values are stored verbatim; NaN and infinities are representable
//! - No mutable access, matching the immutable vector type
//! - Explicit conversion methods between the two units
//!
//! # Usage
//! ```
//! use vector3d_core::core_types::units::{Degrees, Radians};
//!
//! let right = Degrees::new(90.0);
//! let rad: Radians = right.into();
//! assert!((*rad - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
//! assert_eq!(right.to_string(), "90.00°");
//! ```

use std::fmt;
use std::ops::Deref;

// ============================================================================
// ANGLE TYPES
// ============================================================================

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Degrees(f64);

impl Deref for Degrees {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Degrees {
    /// Create a new angle in degrees
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Degrees(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Convert to radians
    #[inline]
    #[must_use]
    pub fn to_radians(self) -> Radians {
        Radians(self.0.to_radians())
    }
}

impl From<f64> for Degrees {
    fn from(v: f64) -> Self {
        Degrees(v)
    }
}

impl From<Degrees> for f64 {
    fn from(d: Degrees) -> f64 {
        d.0
    }
}

impl From<Degrees> for Radians {
    fn from(d: Degrees) -> Radians {
        d.to_radians()
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}°", self.0)
    }
}

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Radians(f64);

impl Deref for Radians {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Radians {
    /// Create a new angle in radians
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Radians(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Convert to degrees (multiplies by 180/π)
    #[inline]
    #[must_use]
    pub fn to_degrees(self) -> Degrees {
        Degrees(self.0.to_degrees())
    }
}

impl From<f64> for Radians {
    fn from(v: f64) -> Self {
        Radians(v)
    }
}

impl From<Radians> for f64 {
    fn from(r: Radians) -> f64 {
        r.0
    }
}

impl From<Radians> for Degrees {
    fn from(r: Radians) -> Degrees {
        r.to_degrees()
    }
}

impl fmt::Display for Radians {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4} rad", self.0)
    }
}
