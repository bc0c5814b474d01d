use crate::raytracer::config::shape::{Intersectable, Ray};
use crate::raytracer::geometry::sphere_intersect;
use glam::DVec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: DVec3,
    /// Not validated; a non-positive radius behaves like its absolute value
    /// in the intersection test.
    pub radius: f64,
    pub color: DVec3,
}

impl Sphere {
    pub fn new(center: DVec3, radius: f64, color: DVec3) -> Self {
        Sphere {
            center,
            radius,
            color,
        }
    }
}

impl Intersectable for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        sphere_intersect(ray.origin, ray.direction, self.center, self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_intersect() {
        let sphere = Sphere::new(DVec3::new(0.0, 0.0, 5.0), 1.0, DVec3::X);
        let ray = Ray {
            origin: DVec3::ZERO,
            direction: DVec3::Z,
        };
        assert_eq!(sphere.intersect(&ray), Some(4.0));
    }

    #[test]
    fn test_sphere_off_axis_miss() {
        let sphere = Sphere::new(DVec3::new(0.0, 5.0, 5.0), 1.0, DVec3::X);
        let ray = Ray {
            origin: DVec3::ZERO,
            direction: DVec3::Z,
        };
        assert_eq!(sphere.intersect(&ray), None);
    }
}
