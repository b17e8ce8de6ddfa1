//! 3D Vector Core Library
//!
//! An immutable three-dimensional vector value type with the usual Euclidean
//! algebra: magnitude, normalization, addition, scalar multiplication, dot
//! and cross products, and the angle between two vectors.
//!
//! All arithmetic is plain `f64`, so NaN and infinities propagate exactly as
//! IEEE 754 defines. The only failures are the two zero-vector cases, which
//! come back as [`DomainError`].
//!
//! ```
//! use vector3d_core::{DomainError, Vector3D};
//!
//! let v1 = Vector3D::new(1.0, 2.0, 3.0);
//! let v2 = Vector3D::new(4.0, 5.0, 6.0);
//!
//! let angle = v1.angle_between(v2)?;
//! assert_eq!(angle.to_string(), "12.93°");
//! assert_eq!((v1 * 2.0).to_string(), "(2.00, 4.00, 6.00)");
//! assert!(Vector3D::ZERO.normalize().is_err());
//! # Ok::<(), DomainError>(())
//! ```

// Core types and utilities
pub mod core_types;

// Re-export core types
pub use core_types::{Degrees, DomainError, Radians, Vector3D};
