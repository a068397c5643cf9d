//! Hittable trait and the ordered sphere list that resolves nearest hits.

use crate::{Color, Pixel, Ray, RenderResult, Sphere};
use sphray_core::SceneDescription;

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Parametric distance of this object's selected intersection with
    /// `ray`, or `None` when the ray's line misses it.
    ///
    /// The value is not filtered by sign.
    fn hit_distance(&self, ray: &Ray, tangent_tolerance: f64) -> Option<f64>;

    /// Flat color painted on pixels where this object is nearest.
    fn color(&self) -> Color;
}

/// Nearest object in front of the ray origin.
///
/// Only `t > 0` is accepted, and a later object must be strictly closer to
/// replace an earlier one, so the first listed object wins ties.
pub fn nearest_hit<'a, H: Hittable>(
    objects: &'a [H],
    ray: &Ray,
    tangent_tolerance: f64,
) -> Option<(&'a H, f64)> {
    let mut nearest: Option<(&'a H, f64)> = None;
    let mut closest_so_far = f64::INFINITY;

    for object in objects {
        if let Some(t) = object.hit_distance(ray, tangent_tolerance) {
            if t > 0.0 && t < closest_so_far {
                closest_so_far = t;
                nearest = Some((object, t));
            }
        }
    }

    nearest
}

/// An ordered list of spheres. Order decides ties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SphereList {
    spheres: Vec<Sphere>,
}

impl SphereList {
    /// Create a new empty sphere list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the validated sphere list of a scene description.
    ///
    /// Fails on the first sphere with a non-positive radius.
    pub fn from_description(desc: &SceneDescription) -> RenderResult<Self> {
        let spheres = desc
            .spheres
            .iter()
            .enumerate()
            .map(|(index, sphere)| Sphere::from_description(index, sphere))
            .collect::<RenderResult<Vec<_>>>()?;

        Ok(Self { spheres })
    }

    /// Add a sphere after every existing one.
    pub fn add(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    /// Get the number of spheres.
    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }

    /// Spheres in tie-breaking order.
    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    /// Resolve a ray to the color of the nearest sphere in front of its
    /// origin, or the background marker.
    pub fn trace(&self, ray: &Ray, tangent_tolerance: f64) -> Pixel {
        match nearest_hit(&self.spheres, ray, tangent_tolerance) {
            Some((sphere, _)) => Pixel::Hit(sphere.color()),
            None => Pixel::Background,
        }
    }
}

impl From<Vec<Sphere>> for SphereList {
    fn from(spheres: Vec<Sphere>) -> Self {
        Self { spheres }
    }
}

impl FromIterator<Sphere> for SphereList {
    fn from_iter<I: IntoIterator<Item = Sphere>>(iter: I) -> Self {
        Self {
            spheres: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RenderError;
    use sphray_core::{CameraDescription, SphereDescription};
    use sphray_math::Vector3;

    fn sphere(center: Vector3, radius: f64, color: Color) -> Sphere {
        Sphere::new(center, radius, color).unwrap()
    }

    fn down_z() -> Ray {
        Ray::new(Vector3::new(0.0, 0.0, 10.0), -Vector3::Z)
    }

    #[test]
    fn test_empty_list_is_background() {
        let list = SphereList::new();
        assert!(list.is_empty());
        assert_eq!(list.trace(&down_z(), 0.0), Pixel::Background);
    }

    #[test]
    fn test_miss_is_background() {
        let list: SphereList = vec![
            sphere(Vector3::new(5.0, 0.0, 0.0), 1.0, Color::X),
            sphere(Vector3::new(0.0, -5.0, 0.0), 1.0, Color::Y),
        ]
        .into();
        assert_eq!(list.trace(&down_z(), 0.0), Pixel::Background);
    }

    #[test]
    fn test_nearest_wins_regardless_of_order() {
        let far = sphere(Vector3::new(0.0, 0.0, -5.0), 1.0, Color::X);
        let near = sphere(Vector3::new(0.0, 0.0, 2.0), 1.0, Color::Y);

        let list: SphereList = vec![far, near].into();
        assert_eq!(list.trace(&down_z(), 0.0), Pixel::Hit(Color::Y));

        let list: SphereList = vec![near, far].into();
        assert_eq!(list.trace(&down_z(), 0.0), Pixel::Hit(Color::Y));
    }

    #[test]
    fn test_tie_goes_to_first_listed() {
        let red = sphere(Vector3::ZERO, 1.0, Color::X);
        let blue = sphere(Vector3::ZERO, 1.0, Color::Z);

        let list: SphereList = vec![red, blue].into();
        for _ in 0..10 {
            assert_eq!(list.trace(&down_z(), 0.0), Pixel::Hit(Color::X));
        }

        let list: SphereList = vec![blue, red].into();
        assert_eq!(list.trace(&down_z(), 0.0), Pixel::Hit(Color::Z));
    }

    #[test]
    fn test_tie_on_front_surface_with_different_radii() {
        // Both front surfaces sit at z = 1, reached at the same t = 9
        let small = sphere(Vector3::new(0.0, 0.0, 0.5), 0.5, Color::X);
        let large = sphere(Vector3::new(0.0, 0.0, -1.0), 2.0, Color::Y);

        let list: SphereList = vec![large, small].into();
        assert_eq!(list.trace(&down_z(), 0.0), Pixel::Hit(Color::Y));
    }

    #[test]
    fn test_sphere_behind_is_ignored() {
        let behind = sphere(Vector3::new(0.0, 0.0, 20.0), 1.0, Color::X);
        let list: SphereList = vec![behind].into();
        assert_eq!(list.trace(&down_z(), 0.0), Pixel::Background);
    }

    #[test]
    fn test_origin_inside_sphere_is_not_seen() {
        // The smaller root is negative and the positive one is never used
        let enclosing = sphere(Vector3::new(0.0, 0.0, 10.0), 3.0, Color::X);
        let ahead = sphere(Vector3::ZERO, 1.0, Color::Y);

        let list: SphereList = vec![enclosing].into();
        assert_eq!(list.trace(&down_z(), 0.0), Pixel::Background);

        let list: SphereList = vec![enclosing, ahead].into();
        assert_eq!(list.trace(&down_z(), 0.0), Pixel::Hit(Color::Y));
    }

    #[test]
    fn test_nearest_hit_distance() {
        let spheres = vec![
            sphere(Vector3::new(0.0, 0.0, -3.0), 1.0, Color::X),
            sphere(Vector3::new(0.0, 0.0, 3.0), 1.0, Color::Y),
        ];
        let (hit, t) = nearest_hit(&spheres, &down_z(), 0.0).unwrap();
        assert_eq!(hit.color(), Color::Y);
        assert!((t - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_from_description() {
        let desc = SceneDescription::new(CameraDescription::new(Vector3::ZERO, -Vector3::Z, Vector3::Y))
            .with_sphere(SphereDescription::new(Vector3::ZERO, 1.0, Color::X))
            .with_sphere(SphereDescription::new(Vector3::ONE, 2.0, Color::Y));

        let list = SphereList::from_description(&desc).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.spheres()[1].radius(), 2.0);
    }

    #[test]
    fn test_from_description_rejects_bad_radius() {
        let desc = SceneDescription::new(CameraDescription::new(Vector3::ZERO, -Vector3::Z, Vector3::Y))
            .with_sphere(SphereDescription::new(Vector3::ZERO, 1.0, Color::X))
            .with_sphere(SphereDescription::new(Vector3::ONE, 0.0, Color::Y));

        let err = SphereList::from_description(&desc).unwrap_err();
        assert_eq!(err, RenderError::InvalidRadius { index: 1, radius: 0.0 });
    }
}
