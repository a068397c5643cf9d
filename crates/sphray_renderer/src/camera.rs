//! Camera basis construction.

use crate::{RenderError, RenderResult};
use sphray_core::CameraDescription;
use sphray_math::{normalize, Vector3};

/// An eye position plus an orthogonal viewing frame.
///
/// `right` and `up` are unit vectors perpendicular to each other and to
/// `forward`. `forward` keeps the length it was given; only its direction
/// matters for ray generation.
///
/// Only [`build_camera`] (or [`Camera::new`]) creates a camera, so the frame
/// is always valid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    eye: Vector3,
    forward: Vector3,
    right: Vector3,
    up: Vector3,
}

impl Camera {
    /// Build the camera frame from raw `eye`, `front` and `up` vectors.
    ///
    /// `up` is normalized, `right = normalize(front × up)`, then `up` is
    /// rebuilt as `normalize(right × front)` so the frame is orthonormal even
    /// when the input `up` leans towards `front`.
    pub fn new(eye: Vector3, front: Vector3, up: Vector3) -> RenderResult<Self> {
        let up_in = normalize(up)?;

        let degenerate = || RenderError::DegenerateBasis {
            front: front.to_array(),
            up: up.to_array(),
        };

        let right = normalize(front.cross(up_in)).map_err(|_| degenerate())?;
        let up = normalize(right.cross(front)).map_err(|_| degenerate())?;

        log::debug!(
            "Camera basis: eye={:?} forward={:?} right={:?} up={:?}",
            eye,
            front,
            right,
            up
        );

        Ok(Self {
            eye,
            forward: front,
            right,
            up,
        })
    }

    /// Build the camera of a scene description.
    pub fn from_description(desc: &CameraDescription) -> RenderResult<Self> {
        Self::new(desc.eye(), desc.front(), desc.up())
    }

    /// Eye position, origin of every primary ray.
    #[inline]
    pub fn eye(&self) -> Vector3 {
        self.eye
    }

    /// Viewing direction, as given.
    #[inline]
    pub fn forward(&self) -> Vector3 {
        self.forward
    }

    /// Unit vector to the right of the view.
    #[inline]
    pub fn right(&self) -> Vector3 {
        self.right
    }

    /// Unit up vector, perpendicular to `forward` and `right`.
    #[inline]
    pub fn up(&self) -> Vector3 {
        self.up
    }
}

/// Build a camera from raw vectors. See [`Camera::new`].
///
/// Fails with [`RenderError::DegenerateBasis`] when `front` is zero or
/// parallel to `up`, and with [`RenderError::DegenerateVector`] when `up` is
/// zero.
pub fn build_camera(eye: Vector3, front: Vector3, up: Vector3) -> RenderResult<Camera> {
    Camera::new(eye, front, up)
}
