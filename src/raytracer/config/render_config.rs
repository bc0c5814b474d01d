use crate::error::{RaycastError, Result};
use glam::DVec2;

pub const DEFAULT_MAX_OBJECTS: usize = 128;

/// Output-side settings that do not come from the scene file.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Colour of pixels whose ray hits nothing.
    pub background: [u8; 3],
    pub max_objects: usize,
    /// `(cx, cy)` offset of the eye from the world origin.
    pub eye: DVec2,
    pub parallel: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: [0, 0, 0],
            max_objects: DEFAULT_MAX_OBJECTS,
            eye: DVec2::ZERO,
            parallel: true,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn background(mut self, color: [u8; 3]) -> Self {
        self.background = color;
        self
    }

    pub fn max_objects(mut self, max: usize) -> Self {
        self.max_objects = max;
        self
    }

    pub fn eye(mut self, cx: f64, cy: f64) -> Self {
        self.eye = DVec2::new(cx, cy);
        self
    }

    pub fn parallel(mut self, enable: bool) -> Self {
        self.parallel = enable;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RaycastError::InvalidImageSize {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::new();
        assert_eq!((config.width, config.height), (800, 600));
        assert_eq!(config.background, [0, 0, 0]);
        assert_eq!(config.max_objects, 128);
        assert!(config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = RenderConfig::new()
            .size(64, 32)
            .background([255, 255, 255])
            .max_objects(4)
            .eye(1.0, -2.0)
            .parallel(false);
        assert_eq!((config.width, config.height), (64, 32));
        assert_eq!(config.background, [255, 255, 255]);
        assert_eq!(config.max_objects, 4);
        assert_eq!(config.eye, DVec2::new(1.0, -2.0));
        assert!(!config.parallel);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            RenderConfig::new().size(0, 10).validate(),
            Err(RaycastError::InvalidImageSize { width: 0, height: 10 })
        ));
        assert!(RenderConfig::new().size(10, 0).validate().is_err());
    }
}
