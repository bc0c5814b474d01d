use crate::raytracer::config::shapes::{Plane, Sphere};
use glam::DVec3;
use std::fmt;

pub trait Intersectable {
    /// Distance along the ray to the nearest forward crossing, if any.
    fn intersect(&self, ray: &Ray) -> Option<f64>;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: DVec3,
    pub direction: DVec3,
}

/// A primitive admitted into the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Sphere(_) => ShapeKind::Sphere,
            Shape::Plane(_) => ShapeKind::Plane,
        }
    }

    pub fn color(&self) -> DVec3 {
        match self {
            Shape::Sphere(sphere) => sphere.color,
            Shape::Plane(plane) => plane.color,
        }
    }

    pub fn position(&self) -> DVec3 {
        match self {
            Shape::Sphere(sphere) => sphere.center,
            Shape::Plane(plane) => plane.position,
        }
    }
}

impl Intersectable for Shape {
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        match self {
            Shape::Sphere(sphere) => sphere.intersect(ray),
            Shape::Plane(plane) => plane.intersect(ray),
        }
    }
}

/// Writes the shape back in scene-file syntax.
impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{\"type\": \"{}\", \"color\": {}, \"position\": {}",
            self.kind(),
            VectorLiteral(self.color()),
            VectorLiteral(self.position())
        )?;
        match self {
            Shape::Sphere(sphere) => write!(f, ", \"radius\": {}}}", sphere.radius),
            Shape::Plane(plane) => write!(f, ", \"normal\": {}}}", VectorLiteral(plane.normal)),
        }
    }
}

/// `[x, y, z]` with each component printed so that it parses back exactly.
pub struct VectorLiteral(pub DVec3);

impl fmt::Display for VectorLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.0.x, self.0.y, self.0.z)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Sphere,
    Plane,
}

impl ShapeKind {
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "sphere" => Some(ShapeKind::Sphere),
            "plane" => Some(ShapeKind::Plane),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Sphere => "sphere",
            ShapeKind::Plane => "plane",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
