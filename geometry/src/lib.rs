//! 3D point and vector arithmetic for ray casting.

mod interop;
pub mod matrix;
mod mesh;
mod point;

pub use matrix::Matrix4d;
pub use mesh::*;
pub use point::*;

pub use std::f64::consts::PI;

pub const EPSILON: f64 = f64::EPSILON;

/// A slice could not be converted into a [`Point`] because it did not hold exactly three
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("expected 3 coordinates, got {len}")]
pub struct CoordinateCountError {
    pub len: usize,
}
