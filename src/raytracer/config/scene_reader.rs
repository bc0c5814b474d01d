use crate::error::{RaycastError, Result};
use crate::raytracer::config::camera::Camera;
use crate::raytracer::config::cursor::Cursor;
use crate::raytracer::config::render_config::DEFAULT_MAX_OBJECTS;
use crate::raytracer::config::scene::SceneContext;
use crate::raytracer::config::shape::{Shape, ShapeKind};
use crate::raytracer::config::shapes::{Plane, Sphere};
use crate::raytracer::config::tokens::{read_number, read_string, read_vector3};
use glam::DVec3;
use std::fs;
use std::path::Path;

const CAMERA_TYPE: &str = "camera";

/// Loads and parses a scene file
///
/// The whole file is read into memory before parsing starts. Any error aborts
/// the load; there is no partial scene.
pub fn load_scene_file(path: impl AsRef<Path>, capacity: usize) -> Result<SceneContext> {
    let path = path.as_ref();
    log::info!("Loading scene from {}", path.display());
    let input = fs::read_to_string(path).map_err(|source| RaycastError::Io {
        path: path.display().to_string(),
        source,
    })?;
    SceneReader::new(&input).with_capacity(capacity).read()
}

/// Parses the object list `'[' (object (',' object)*)? ']'`.
///
/// Camera entries update the shared [`Camera`] and take no object slot.
/// Spheres and planes are validated field by field and appended in
/// declaration order, up to the configured capacity.
pub struct SceneReader<'a> {
    cursor: Cursor<'a>,
    capacity: usize,
    camera: Camera,
    camera_seen: bool,
    objects: Vec<Shape>,
}

impl<'a> SceneReader<'a> {
    pub fn new(input: &'a str) -> Self {
        SceneReader {
            cursor: Cursor::new(input),
            capacity: DEFAULT_MAX_OBJECTS,
            camera: Camera::default(),
            camera_seen: false,
            objects: Vec::new(),
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn read(mut self) -> Result<SceneContext> {
        self.cursor.skip_whitespace()?;
        self.cursor.expect('[')?;
        self.cursor.skip_whitespace()?;

        loop {
            let line = self.cursor.line();
            match self.cursor.advance()? {
                ']' => break,
                '{' => self.read_object()?,
                actual => {
                    return Err(RaycastError::UnexpectedCharacter {
                        expected: '{',
                        actual,
                        line,
                    })
                }
            }

            self.cursor.skip_whitespace()?;
            let line = self.cursor.line();
            match self.cursor.advance()? {
                ',' => self.cursor.skip_whitespace()?,
                ']' => break,
                actual => return Err(RaycastError::ExpectedCommaOrBracket { actual, line }),
            }
        }

        self.finish()
    }

    fn finish(mut self) -> Result<SceneContext> {
        self.cursor.skip_whitespace()?;
        if !self.cursor.is_at_end() {
            log::warn!(
                "Ignoring content after the closing ']' on line number {}",
                self.cursor.line()
            );
        }
        if self.objects.is_empty() {
            log::warn!("This scene is empty");
        }
        Ok(SceneContext::new(self.camera, self.objects))
    }

    /// Reads one object after its opening `{`, up to and including `}`.
    fn read_object(&mut self) -> Result<()> {
        self.cursor.skip_whitespace()?;
        let line = self.cursor.line();
        let key = read_string(&mut self.cursor)?;
        if key != "type" {
            return Err(RaycastError::ExpectedTypeKey { found: key, line });
        }
        read_colon(&mut self.cursor)?;

        let line = self.cursor.line();
        let value = read_string(&mut self.cursor)?;
        if value == CAMERA_TYPE {
            return self.read_camera(line);
        }
        let Some(kind) = ShapeKind::from_type_name(&value) else {
            return Err(RaycastError::UnknownObjectType { value, line });
        };

        let mut fields = ShapeFields::default();
        read_fields(&mut self.cursor, |cursor, key, line| {
            fields.read_value(kind, cursor, key, line)
        })?;
        let shape = fields.build(kind, self.cursor.line())?;
        self.admit(shape)
    }

    fn read_camera(&mut self, line: usize) -> Result<()> {
        if self.camera_seen {
            log::warn!("Another camera on line number {line} overrides the previous one");
        }
        let mut width = None;
        let mut height = None;
        read_fields(&mut self.cursor, |cursor, key, line| {
            let slot = match key.as_str() {
                "width" => &mut width,
                "height" => &mut height,
                _ => return Err(RaycastError::UnknownCameraField { key, line }),
            };
            if slot.replace(read_number(cursor)?).is_some() {
                warn_repeated(&key, CAMERA_TYPE, line);
            }
            Ok(())
        })?;

        if let Some(width) = width {
            self.camera.width = width;
        }
        if let Some(height) = height {
            self.camera.height = height;
        }
        self.camera_seen = true;
        Ok(())
    }

    fn admit(&mut self, shape: Shape) -> Result<()> {
        if self.objects.len() >= self.capacity {
            return Err(RaycastError::SceneCapacityExceeded {
                capacity: self.capacity,
                line: self.cursor.line(),
            });
        }
        log::debug!(
            "Object {}: {} at {}",
            self.objects.len(),
            shape.kind(),
            shape.position()
        );
        self.objects.push(shape);
        Ok(())
    }
}

fn read_colon(cursor: &mut Cursor) -> Result<()> {
    cursor.skip_whitespace()?;
    cursor.expect(':')?;
    cursor.skip_whitespace()
}

/// Runs `(',' key ':' value)* '}'`, handing every key and the line it
/// started on to `read_value`, which must consume the value.
fn read_fields<F>(cursor: &mut Cursor, mut read_value: F) -> Result<()>
where
    F: FnMut(&mut Cursor, String, usize) -> Result<()>,
{
    cursor.skip_whitespace()?;
    loop {
        let line = cursor.line();
        match cursor.advance()? {
            '}' => return Ok(()),
            ',' => {
                cursor.skip_whitespace()?;
                let line = cursor.line();
                let key = read_string(cursor)?;
                read_colon(cursor)?;
                read_value(cursor, key, line)?;
                cursor.skip_whitespace()?;
            }
            actual => return Err(RaycastError::ExpectedCommaOrBrace { actual, line }),
        }
    }
}

fn warn_repeated(key: &str, kind: &str, line: usize) {
    log::warn!("Property '{key}' for '{kind}' repeated on line number {line}, keeping the last value");
}

/// Fields collected for a sphere or plane before it is validated.
#[derive(Default)]
struct ShapeFields {
    color: Option<DVec3>,
    position: Option<DVec3>,
    radius: Option<f64>,
    normal: Option<DVec3>,
}

impl ShapeFields {
    fn read_value(&mut self, kind: ShapeKind, cursor: &mut Cursor, key: String, line: usize) -> Result<()> {
        let repeated = match (kind, key.as_str()) {
            (_, "color") => self.color.replace(read_vector3(cursor)?).is_some(),
            (_, "position") => self.position.replace(read_vector3(cursor)?).is_some(),
            (ShapeKind::Sphere, "radius") => self.radius.replace(read_number(cursor)?).is_some(),
            (ShapeKind::Plane, "normal") => self.normal.replace(read_vector3(cursor)?).is_some(),
            _ => return Err(RaycastError::UnknownProperty { key, kind, line }),
        };
        if repeated {
            warn_repeated(&key, kind.name(), line);
        }
        Ok(())
    }

    fn build(self, kind: ShapeKind, line: usize) -> Result<Shape> {
        let missing = |field| RaycastError::MissingRequiredField { field, kind, line };
        let color = self.color.ok_or_else(|| missing("color"))?;
        let position = self.position.ok_or_else(|| missing("position"))?;
        let shape = match kind {
            ShapeKind::Sphere => {
                let radius = self.radius.ok_or_else(|| missing("radius"))?;
                Shape::Sphere(Sphere::new(position, radius, color))
            }
            ShapeKind::Plane => {
                let normal = self.normal.ok_or_else(|| missing("normal"))?;
                Shape::Plane(Plane::new(position, normal, color))
            }
        };
        Ok(shape)
    }
}
