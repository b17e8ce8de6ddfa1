//! Immutable 3D vector value type for positions and directions.

use std::fmt;
use std::ops::{Add, Mul, Neg};

use nalgebra::Vector3;
use tracing::debug;

use super::errors::DomainError;
use super::units::{Degrees, Radians};

/// 3D vector with `f64` components.
///
/// Wraps a private `nalgebra::Vector3<f64>`. Every operation returns a new
/// value; there is no way to change a vector once it has been built.
/// Components are stored verbatim, so NaN and infinities flow through the
/// arithmetic with ordinary IEEE 754 semantics.
///
/// # Example
/// ```
/// use vector3d_core::Vector3D;
///
/// let v1 = Vector3D::new(1.0, 2.0, 3.0);
/// let v2 = Vector3D::new(4.0, 5.0, 6.0);
///
/// assert_eq!(v1 + v2, Vector3D::new(5.0, 7.0, 9.0));
/// assert_eq!(v1.dot_product(v2), 32.0);
/// assert_eq!(v1.cross_product(v2), Vector3D::new(-3.0, 6.0, -3.0));
/// assert_eq!(v1.to_string(), "(1.00, 2.00, 3.00)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3D {
    inner: Vector3<f64>,
}

impl Vector3D {
    /// The zero vector
    pub const ZERO: Vector3D = Vector3D::new(0.0, 0.0, 0.0);

    /// Unit vector along +X
    pub const UNIT_X: Vector3D = Vector3D::new(1.0, 0.0, 0.0);

    /// Unit vector along +Y
    pub const UNIT_Y: Vector3D = Vector3D::new(0.0, 1.0, 0.0);

    /// Unit vector along +Z
    pub const UNIT_Z: Vector3D = Vector3D::new(0.0, 0.0, 1.0);

    /// Create a vector from its three components. No validation is done.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3D {
            inner: Vector3::new(x, y, z),
        }
    }

    #[inline]
    pub fn x(self) -> f64 {
        self.inner.x
    }

    #[inline]
    pub fn y(self) -> f64 {
        self.inner.y
    }

    #[inline]
    pub fn z(self) -> f64 {
        self.inner.z
    }

    /// Euclidean length, `sqrt(x² + y² + z²)`
    #[inline]
    pub fn magnitude(self) -> f64 {
        self.inner.norm()
    }

    /// True when the magnitude is exactly zero (no tolerance)
    #[inline]
    pub fn is_zero(self) -> bool {
        self.magnitude() == 0.0
    }

    /// Scale to unit length, keeping the direction.
    ///
    /// Infinite or NaN magnitudes are not special-cased; the division simply
    /// produces whatever IEEE 754 gives.
    ///
    /// # Errors
    /// Returns [`DomainError::ZeroVector`] when the magnitude is exactly `0.0`.
    pub fn normalize(self) -> Result<Vector3D, DomainError> {
        if self.is_zero() {
            debug!(
                x = self.inner.x,
                y = self.inner.y,
                z = self.inner.z,
                "normalize on zero vector"
            );
            return Err(DomainError::ZeroVector {
                operation: "normalize",
            });
        }
        Ok(Vector3D {
            inner: self.inner / self.magnitude(),
        })
    }

    /// Scalar (inner) product
    #[inline]
    pub fn dot_product(self, other: Vector3D) -> f64 {
        self.inner.dot(&other.inner)
    }

    /// Angle between two vectors in degrees.
    ///
    /// The cosine is not clamped to `[-1, 1]` before `acos`, so nearly
    /// parallel inputs can round to a ratio just outside that range and
    /// yield NaN instead of 0° or 180°.
    ///
    /// # Errors
    /// Returns [`DomainError::ZeroVector`] when either vector has zero magnitude.
    pub fn angle_between(self, other: Vector3D) -> Result<Degrees, DomainError> {
        self.cosine_with(other, "angle_between")
            .map(|cos| Radians::new(cos.acos()).to_degrees())
    }

    /// Same as [`Vector3D::angle_between`] but in radians.
    ///
    /// # Errors
    /// Returns [`DomainError::ZeroVector`] when either vector has zero magnitude.
    pub fn angle_between_radians(self, other: Vector3D) -> Result<Radians, DomainError> {
        self.cosine_with(other, "angle_between_radians")
            .map(|cos| Radians::new(cos.acos()))
    }

    fn cosine_with(self, other: Vector3D, operation: &'static str) -> Result<f64, DomainError> {
        let dot = self.dot_product(other);
        let magnitude_product = self.magnitude() * other.magnitude();
        if magnitude_product == 0.0 {
            debug!(
                operation,
                lhs = %self,
                rhs = %other,
                "angle with zero vector"
            );
            return Err(DomainError::ZeroVector { operation });
        }
        Ok(dot / magnitude_product)
    }

    /// Right-handed cross product `self × other`
    #[inline]
    pub fn cross_product(self, other: Vector3D) -> Vector3D {
        Vector3D {
            inner: self.inner.cross(&other.inner),
        }
    }
}

// Vector + Vector
impl Add for Vector3D {
    type Output = Vector3D;

    fn add(self, rhs: Vector3D) -> Vector3D {
        Vector3D {
            inner: self.inner + rhs.inner,
        }
    }
}

// Vector * scalar
impl Mul<f64> for Vector3D {
    type Output = Vector3D;

    fn mul(self, rhs: f64) -> Vector3D {
        Vector3D {
            inner: self.inner * rhs,
        }
    }
}

// scalar * Vector
impl Mul<Vector3D> for f64 {
    type Output = Vector3D;

    fn mul(self, rhs: Vector3D) -> Vector3D {
        rhs * self
    }
}

impl Neg for Vector3D {
    type Output = Vector3D;

    fn neg(self) -> Vector3D {
        Vector3D { inner: -self.inner }
    }
}

/// Fixed two-decimal rendering of one component.
///
/// Rounds the shortest round-trip decimal form of `value` half-up, so
/// `0.125`, `1.005` and `2.675` render as `0.13`, `1.01` and `2.68`. The sign
/// of negative values (including `-0.0`) is kept. Non-finite values render as
/// `NaN`, `Infinity` and `-Infinity`.
fn write_fixed_2(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        return f.write_str("NaN");
    }
    if value.is_infinite() {
        return f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
    }

    // Shortest digits as d.ddd…e±x
    let sci = format!("{:e}", value.abs());
    let (mantissa, exponent) = sci.split_once('e').ok_or(fmt::Error)?;
    let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;
    let digits: Vec<u8> = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();

    // Integer digits plus two decimal places; may be zero or negative
    let keep = exponent + 3;
    let (mut kept, next) = match usize::try_from(keep) {
        Ok(keep) => {
            let mut kept: Vec<u8> = digits.iter().copied().take(keep).collect();
            kept.resize(keep, 0);
            (kept, digits.get(keep).copied().unwrap_or(0))
        }
        Err(_) => (Vec::new(), 0),
    };

    if next >= 5 {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == 9 {
                *d = 0;
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, 1);
        }
    }

    // At least one integer digit plus the decimal places
    while kept.len() < 3 {
        kept.insert(0, 0);
    }
    let split = kept.len() - 2;

    if value.is_sign_negative() {
        f.write_str("-")?;
    }
    for d in &kept[..split] {
        write!(f, "{d}")?;
    }
    f.write_str(".")?;
    for d in &kept[split..] {
        write!(f, "{d}")?;
    }
    Ok(())
}

impl fmt::Display for Vector3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        write_fixed_2(f, self.inner.x)?;
        f.write_str(", ")?;
        write_fixed_2(f, self.inner.y)?;
        f.write_str(", ")?;
        write_fixed_2(f, self.inner.z)?;
        f.write_str(")")
    }
}

impl From<[f64; 3]> for Vector3D {
    fn from(components: [f64; 3]) -> Self {
        Vector3D {
            inner: Vector3::from(components),
        }
    }
}

impl From<Vector3D> for [f64; 3] {
    fn from(v: Vector3D) -> [f64; 3] {
        v.inner.into()
    }
}

impl From<Vector3<f64>> for Vector3D {
    fn from(inner: Vector3<f64>) -> Self {
        Vector3D { inner }
    }
}

impl From<Vector3D> for Vector3<f64> {
    fn from(v: Vector3D) -> Vector3<f64> {
        v.inner
    }
}
