use crate::raytracer::config::shape::{Intersectable, Ray};
use crate::raytracer::geometry::plane_intersect;
use glam::DVec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    /// Any point on the plane.
    pub position: DVec3,
    /// Stored exactly as declared, not normalized.
    pub normal: DVec3,
    pub color: DVec3,
}

impl Plane {
    pub fn new(position: DVec3, normal: DVec3, color: DVec3) -> Self {
        Plane {
            position,
            normal,
            color,
        }
    }
}

impl Intersectable for Plane {
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        plane_intersect(ray.origin, ray.direction, self.position, self.normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_intersect() {
        let plane = Plane::new(DVec3::new(0.0, 0.0, 10.0), DVec3::NEG_Z, DVec3::Y);
        let ray = Ray {
            origin: DVec3::ZERO,
            direction: DVec3::Z,
        };
        assert_eq!(plane.intersect(&ray), Some(10.0));
    }

    #[test]
    fn test_floor_plane_seen_from_above() {
        let plane = Plane::new(DVec3::new(0.0, -2.0, 0.0), DVec3::Y, DVec3::ONE);
        let ray = Ray {
            origin: DVec3::ZERO,
            direction: DVec3::NEG_Y,
        };
        assert_eq!(plane.intersect(&ray), Some(2.0));
    }
}
