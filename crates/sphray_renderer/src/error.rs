//! Render setup errors.
//!
//! Everything here is detected before any pixel is handed out. Once a camera
//! and sphere list exist, tracing a ray cannot fail.

use sphray_math::DegenerateVector;
use thiserror::Error;

/// Errors that can occur while setting up or running a render.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("Degenerate camera basis: front {front:?} is zero or parallel to up {up:?}")]
    DegenerateBasis { front: [f64; 3], up: [f64; 3] },

    #[error("Numeric degeneracy: {0}")]
    DegenerateVector(#[from] DegenerateVector),

    #[error("Sphere {index} has invalid radius {radius}")]
    InvalidRadius { index: usize, radius: f64 },

    #[error("Invalid resolution {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error("Invalid viewport {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("Invalid tangent tolerance {0}")]
    InvalidTolerance(f64),

    #[error("Primary ray for pixel ({i}, {j}) has no direction")]
    DegenerateRay { i: u32, j: u32 },
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
