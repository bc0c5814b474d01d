use std::fmt;

/// Size of the image plane one unit in front of the eye.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub width: f64,
    pub height: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Camera {
            width: 1.0,
            height: 1.0,
        }
    }
}

impl fmt::Display for Camera {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{\"type\": \"camera\", \"width\": {}, \"height\": {}}}",
            self.width, self.height
        )
    }
}
