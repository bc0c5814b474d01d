use crate::raytracer::config::camera::Camera;
use crate::raytracer::config::shape::{Shape, ShapeKind};
use std::fmt;

/// Everything the reader produces: the camera and the objects in
/// declaration order. Read-only once parsing has finished.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneContext {
    pub camera: Camera,
    /// Private: objects are only admitted by the scene reader.
    objects: Vec<Shape>,
}

impl SceneContext {
    pub(crate) fn new(camera: Camera, objects: Vec<Shape>) -> Self {
        SceneContext { camera, objects }
    }

    pub fn objects(&self) -> &[Shape] {
        &self.objects
    }

    pub fn count(&self, kind: ShapeKind) -> usize {
        self.objects.iter().filter(|shape| shape.kind() == kind).count()
    }

    pub fn log_summary(&self) {
        log::info!(
            "Scene: image plane {}x{}, {} objects ({} spheres, {} planes)",
            self.camera.width,
            self.camera.height,
            self.objects.len(),
            self.count(ShapeKind::Sphere),
            self.count(ShapeKind::Plane)
        );
    }
}

/// Canonical scene-file form; reading it back yields an equal context.
impl fmt::Display for SceneContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[")?;
        write!(f, "  {}", self.camera)?;
        for shape in &self.objects {
            write!(f, ",\n  {shape}")?;
        }
        writeln!(f, "\n]")
    }
}
