//! Core types and utilities

pub mod errors;
pub mod units;
pub mod vec3;

pub use errors::DomainError;
pub use units::{Degrees, Radians};
pub use vec3::Vector3D;
