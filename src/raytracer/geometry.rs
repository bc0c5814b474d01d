//! Closed-form ray/primitive intersection.
//!
//! Every function returns the distance `t` along the ray to the nearest
//! crossing strictly ahead of the origin, or `None` when there is none.

use glam::DVec3;

/// Scales `v` to unit length. A zero vector yields non-finite components.
pub fn normalize(v: DVec3) -> DVec3 {
    v / v.length()
}

/// Solves `a·t² + b·t + c = 0` for a ray against a sphere and keeps the
/// smallest positive root, so an origin inside the sphere hits the far side.
pub fn sphere_intersect(origin: DVec3, direction: DVec3, center: DVec3, radius: f64) -> Option<f64> {
    let oc = origin - center;
    let a = direction.dot(direction);
    let b = 2.0 * direction.dot(oc);
    let c = oc.dot(oc) - radius * radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let root = discriminant.sqrt();
    let t0 = (-b - root) / (2.0 * a);
    if t0 > 0.0 {
        return Some(t0);
    }
    let t1 = (-b + root) / (2.0 * a);
    if t1 > 0.0 {
        return Some(t1);
    }
    None
}

/// Intersects a ray with the plane through `point` with the given `normal`.
///
/// The result does not depend on the normal's length. A ray parallel to the
/// plane divides by zero and the non-finite `t` is reported as no hit.
pub fn plane_intersect(origin: DVec3, direction: DVec3, point: DVec3, normal: DVec3) -> Option<f64> {
    let d = -normal.dot(point);
    let t = -(normal.dot(origin) + d) / normal.dot(direction);
    (t.is_finite() && t > 0.0).then_some(t)
}
