//! Scene description types.
//!
//! A scene is a raw camera plus an ordered list of spheres. Sphere order is
//! meaningful: when two spheres are hit at the same distance, the one listed
//! first wins.

use serde::{Deserialize, Serialize};
use sphray_math::Vector3;

/// Raw camera vectors, before orthonormalization.
///
/// `front` and `up` need not be unit length and `up` need not be
/// perpendicular to `front`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraDescription {
    /// Eye position
    pub eye: [f64; 3],

    /// Viewing direction
    pub front: [f64; 3],

    /// Approximate up direction
    pub up: [f64; 3],
}

impl CameraDescription {
    /// Create a camera description from vectors.
    pub fn new(eye: Vector3, front: Vector3, up: Vector3) -> Self {
        Self {
            eye: eye.to_array(),
            front: front.to_array(),
            up: up.to_array(),
        }
    }

    /// Eye position as a vector.
    pub fn eye(&self) -> Vector3 {
        Vector3::from_array(self.eye)
    }

    /// Viewing direction as a vector.
    pub fn front(&self) -> Vector3 {
        Vector3::from_array(self.front)
    }

    /// Approximate up direction as a vector.
    pub fn up(&self) -> Vector3 {
        Vector3::from_array(self.up)
    }
}

/// A sphere record as read from a scene file.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SphereDescription {
    /// Center position
    pub center: [f64; 3],

    /// Radius, expected to be positive
    pub radius: f64,

    /// Flat RGB color, conventionally 0-1 per channel
    pub color: [f64; 3],
}

impl SphereDescription {
    /// Create a sphere description from vectors.
    pub fn new(center: Vector3, radius: f64, color: Vector3) -> Self {
        Self {
            center: center.to_array(),
            radius,
            color: color.to_array(),
        }
    }

    /// Center position as a vector.
    pub fn center(&self) -> Vector3 {
        Vector3::from_array(self.center)
    }

    /// Color as a vector.
    pub fn color(&self) -> Vector3 {
        Vector3::from_array(self.color)
    }
}

/// A complete scene: one camera and an ordered sphere list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    pub camera: CameraDescription,

    #[serde(default)]
    pub spheres: Vec<SphereDescription>,
}

impl SceneDescription {
    /// Create a scene with no spheres.
    pub fn new(camera: CameraDescription) -> Self {
        Self {
            camera,
            spheres: Vec::new(),
        }
    }

    /// Append a sphere. It will lose ties against every sphere already added.
    pub fn add_sphere(&mut self, sphere: SphereDescription) {
        self.spheres.push(sphere);
    }

    /// Builder-style variant of [`add_sphere`](Self::add_sphere).
    pub fn with_sphere(mut self, sphere: SphereDescription) -> Self {
        self.add_sphere(sphere);
        self
    }

    /// Get sphere count.
    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    /// Nine small spheres seen at an angle: a grey column, red, blue and
    /// green spheres beside it, and a yellow marker off to the side.
    pub fn demo() -> Self {
        let grey = Vector3::splat(0.8);
        let r = 0.05;

        let camera = CameraDescription::new(
            Vector3::new(0.4, 0.0, 0.4),
            Vector3::new(-1.0, 0.0, -1.0),
            Vector3::new(-0.707107, 0.0, 0.707107),
        );

        Self::new(camera)
            .with_sphere(SphereDescription::new(Vector3::new(0.0, -0.1, 0.0), r, grey))
            .with_sphere(SphereDescription::new(Vector3::new(0.0, 0.0, 0.0), r, grey))
            .with_sphere(SphereDescription::new(Vector3::new(0.0, 0.1, 0.0), r, grey))
            .with_sphere(SphereDescription::new(
                Vector3::new(0.1, -0.05, 0.0),
                r,
                Vector3::new(0.8, 0.0, 0.0),
            ))
            .with_sphere(SphereDescription::new(
                Vector3::new(0.1, 0.05, 0.0),
                r,
                Vector3::new(0.0, 0.0, 0.8),
            ))
            .with_sphere(SphereDescription::new(
                Vector3::new(0.2, 0.0, 0.0),
                r,
                Vector3::new(0.0, 0.8, 0.0),
            ))
            .with_sphere(SphereDescription::new(Vector3::new(0.05, -0.05, 0.1), r, grey))
            .with_sphere(SphereDescription::new(Vector3::new(0.05, 0.05, 0.1), r, grey))
            .with_sphere(SphereDescription::new(
                Vector3::new(0.0, -0.5, 0.5),
                0.02,
                Vector3::new(1.0, 1.0, 0.0),
            ))
    }

    /// Unit axes: white sphere at the origin, red on X, green on Y, blue on
    /// Z, viewed from (3, 3, 3) with Z up.
    pub fn axes() -> Self {
        let r = 0.1;

        let camera = CameraDescription::new(
            Vector3::splat(3.0),
            Vector3::splat(-1.0),
            Vector3::Z,
        );

        Self::new(camera)
            .with_sphere(SphereDescription::new(Vector3::ZERO, r, Vector3::ONE))
            .with_sphere(SphereDescription::new(Vector3::X, r, Vector3::X))
            .with_sphere(SphereDescription::new(Vector3::Y, r, Vector3::Y))
            .with_sphere(SphereDescription::new(Vector3::Z, r, Vector3::Z))
    }
}

impl Default for SceneDescription {
    fn default() -> Self {
        Self::demo()
    }
}
