//! Vector helpers on top of glam's double precision vector.
//!
//! `add`, `sub`, `scale`, `dot`, `cross` and `length` are provided by
//! `DVec3` directly. Only normalization needs a fallible wrapper: glam's
//! `normalize` returns NaN components for a zero vector.

use glam::DVec3;
use thiserror::Error;

/// Three `f64` components. Value type, every operation returns a new vector.
pub type Vector3 = DVec3;

/// Returned when a vector has no defined direction.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("cannot normalize degenerate vector ({x}, {y}, {z})")]
pub struct DegenerateVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<Vector3> for DegenerateVector {
    fn from(v: Vector3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

/// Divide `v` by its Euclidean length.
///
/// Fails for zero-length and non-finite vectors instead of producing NaN.
#[inline]
pub fn normalize(v: Vector3) -> Result<Vector3, DegenerateVector> {
    v.try_normalize().ok_or_else(|| DegenerateVector::from(v))
}
