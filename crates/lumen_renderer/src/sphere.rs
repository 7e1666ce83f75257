//! Sphere primitive for ray tracing.

use std::sync::Arc;

use crate::{
    hittable::{HitRecord, Hittable},
    Material,
};
use lumen_math::{DVec3, Ray};

/// Smallest accepted ray parameter, keeps bounces off their own surface.
pub const HIT_EPSILON: f64 = 1e-3;

/// A sphere primitive.
pub struct Sphere {
    center: DVec3,
    radius: f64,
    material: Arc<dyn Material>,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: DVec3, radius: f64, material: Arc<dyn Material>) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    pub fn center(&self) -> DVec3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Hittable for Sphere {
    fn hit(&self, origin: DVec3, direction: DVec3) -> Option<HitRecord<'_>> {
        let ray = Ray::new(origin, direction);
        let oc = self.center - ray.origin();
        let a = ray.direction().length_squared();
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 || a == 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (h - sqrtd) / a;
        if root <= HIT_EPSILON {
            root = (h + sqrtd) / a;
            if root <= HIT_EPSILON {
                return None;
            }
        }

        let point = ray.at(root);
        Some(HitRecord {
            t: root,
            point,
            normal: (point - self.center) / self.radius,
            material: self.material.as_ref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Lambertian;
    use lumen_math::Color;

    fn gray_sphere(center: DVec3, radius: f64) -> Sphere {
        Sphere::new(center, radius, Arc::new(Lambertian::new(Color::splat(0.5))))
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = gray_sphere(DVec3::new(0.0, 0.0, -1.0), 0.5);

        let rec = sphere
            .hit(DVec3::ZERO, DVec3::new(0.0, 0.0, -1.0))
            .expect("ray should hit");
        assert!((rec.t - 0.5).abs() < 1e-9); // Should hit at t=0.5
        assert!((rec.point - DVec3::new(0.0, 0.0, -0.5)).length() < 1e-9);
        assert!((rec.normal - DVec3::Z).length() < 1e-9);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = gray_sphere(DVec3::new(0.0, 0.0, -1.0), 0.5);

        // Ray pointing away from sphere
        assert!(sphere.hit(DVec3::ZERO, DVec3::new(0.0, 1.0, 0.0)).is_none());
    }

    #[test]
    fn test_sphere_behind_origin() {
        let sphere = gray_sphere(DVec3::new(0.0, 0.0, 1.0), 0.5);
        assert!(sphere.hit(DVec3::ZERO, DVec3::new(0.0, 0.0, -1.0)).is_none());
    }

    #[test]
    fn test_sphere_from_inside_uses_far_root() {
        let sphere = gray_sphere(DVec3::ZERO, 2.0);

        let rec = sphere.hit(DVec3::ZERO, DVec3::X).expect("ray should hit");
        assert!((rec.t - 2.0).abs() < 1e-9);
        // Outward normal, same side as the ray
        assert!(rec.normal.dot(DVec3::X) > 0.0);
    }

    #[test]
    fn test_sphere_ignores_self_intersection() {
        let sphere = gray_sphere(DVec3::ZERO, 1.0);

        // Leaving the surface outward must not re-hit at t ~ 0
        assert!(sphere.hit(DVec3::new(0.0, 0.0, 1.0), DVec3::Z).is_none());
    }
}
