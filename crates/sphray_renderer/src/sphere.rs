//! Sphere primitive for ray casting.

use crate::{hittable::Hittable, Color, Ray, RenderError, RenderResult};
use sphray_core::SphereDescription;
use sphray_math::{solve_quadratic_with_tolerance, Vector3};

/// A sphere with a flat color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Vector3,
    radius: f64,
    color: Color,
}

impl Sphere {
    /// Create a new sphere. The radius must be positive and finite.
    pub fn new(center: Vector3, radius: f64, color: Color) -> RenderResult<Self> {
        Self::checked(0, center, radius, color)
    }

    /// Build sphere `index` of a scene description.
    pub fn from_description(index: usize, desc: &SphereDescription) -> RenderResult<Self> {
        Self::checked(index, desc.center(), desc.radius, desc.color())
    }

    fn checked(index: usize, center: Vector3, radius: f64, color: Color) -> RenderResult<Self> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(RenderError::InvalidRadius { index, radius });
        }

        Ok(Self {
            center,
            radius,
            color,
        })
    }

    /// Center position.
    pub fn center(&self) -> Vector3 {
        self.center
    }

    /// Radius, always positive.
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Hittable for Sphere {
    /// Smaller root of `|origin + t·dir − center|² = r²`.
    ///
    /// The root may be negative (sphere behind the origin, or the origin is
    /// inside the sphere). Callers filter by sign; the larger root is never
    /// considered.
    fn hit_distance(&self, ray: &Ray, tangent_tolerance: f64) -> Option<f64> {
        let vt = ray.origin() - self.center;
        let a = ray.direction().dot(ray.direction());
        let b = 2.0 * ray.direction().dot(vt);
        let c = vt.dot(vt) - self.radius * self.radius;

        solve_quadratic_with_tolerance(a, b, c, tangent_tolerance).smallest()
    }

    fn color(&self) -> Color {
        self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red_sphere(center: Vector3, radius: f64) -> Sphere {
        Sphere::new(center, radius, Color::X).unwrap()
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = red_sphere(Vector3::new(0.0, 0.0, -1.0), 0.5);
        let ray = Ray::new(Vector3::ZERO, Vector3::new(0.0, 0.0, -1.0));

        let t = sphere.hit_distance(&ray, 0.0).unwrap();
        assert!((t - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = red_sphere(Vector3::new(0.0, 0.0, -1.0), 0.5);

        // Ray pointing away from sphere, line never touches it
        let ray = Ray::new(Vector3::ZERO, Vector3::Y);
        assert_eq!(sphere.hit_distance(&ray, 0.0), None);
    }

    #[test]
    fn test_sphere_behind_origin_is_negative() {
        let sphere = red_sphere(Vector3::new(0.0, 0.0, 5.0), 1.0);
        let ray = Ray::new(Vector3::ZERO, -Vector3::Z);

        // Both roots are behind: -6 and -4, the smaller one is reported
        let t = sphere.hit_distance(&ray, 0.0).unwrap();
        assert!((t + 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_origin_at_center_reports_smaller_root() {
        let radius = 2.5;
        let center = Vector3::new(1.0, -2.0, 3.0);
        let sphere = red_sphere(center, radius);

        for dir in [Vector3::X, -Vector3::Y, Vector3::new(1.0, 1.0, 1.0).normalize()] {
            let ray = Ray::new(center, dir);
            let t = sphere.hit_distance(&ray, 0.0).unwrap();
            // a = 1, b = 0, c = -r²: roots ±r, the negative one is selected
            assert!((t + radius).abs() < 1e-12);
        }
    }

    #[test]
    fn test_non_unit_direction() {
        let sphere = red_sphere(Vector3::new(0.0, 0.0, -4.0), 1.0);
        let ray = Ray::new(Vector3::ZERO, Vector3::new(0.0, 0.0, -2.0));

        // Hit point z = -3 is reached at t = 1.5 with |dir| = 2
        let t = sphere.hit_distance(&ray, 0.0).unwrap();
        assert!((t - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_tangent_ray_boundary() {
        let sphere = red_sphere(Vector3::ZERO, 1.0);
        // Grazes the sphere at (0, 1, 0)
        let ray = Ray::new(Vector3::new(-5.0, 1.0, 0.0), Vector3::X);

        // Exact solver: hit only if the discriminant came out exactly 0,
        // so whatever it reports must be a t near 5
        if let Some(t) = sphere.hit_distance(&ray, 0.0) {
            assert!((t - 5.0).abs() < 1e-6);
        }

        // With a tolerance the graze is always a single hit at t = 5
        let t = sphere.hit_distance(&ray, 1e-9).unwrap();
        assert!((t - 5.0).abs() < 1e-12);

        // Slightly outside: a tolerance can still pull it in
        let near_miss = Ray::new(Vector3::new(-5.0, 1.0 + 1e-12, 0.0), Vector3::X);
        assert_eq!(sphere.hit_distance(&near_miss, 0.0), None);
        assert!(sphere.hit_distance(&near_miss, 1e-9).is_some());
    }

    #[test]
    fn test_invalid_radius() {
        for radius in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = Sphere::new(Vector3::ZERO, radius, Color::ONE);
            assert!(matches!(result, Err(RenderError::InvalidRadius { .. })));
        }
    }

    #[test]
    fn test_from_description_reports_index() {
        let desc = SphereDescription::new(Vector3::ZERO, -0.5, Color::ONE);
        let err = Sphere::from_description(3, &desc).unwrap_err();
        assert_eq!(
            err,
            RenderError::InvalidRadius {
                index: 3,
                radius: -0.5
            }
        );
    }
}
