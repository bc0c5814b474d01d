use crate::error::Result;
use crate::pixel_buffer::{PixelBuffer, Rgb};
use crate::raytracer::config::{Intersectable, Ray, RenderConfig, SceneContext, Shape};
use crate::raytracer::geometry::normalize;
use glam::DVec3;
use rayon::prelude::*;
use std::time::Instant;

pub struct RayTracer {
    scene: SceneContext,
    config: RenderConfig,
}

impl RayTracer {
    pub fn new(scene: SceneContext, config: RenderConfig) -> Result<Self> {
        config.validate()?;
        Ok(RayTracer { scene, config })
    }

    /// Casts one ray per pixel and fills every cell of a fresh buffer.
    pub fn render(&self) -> PixelBuffer {
        let width = self.config.width as usize;
        let height = self.config.height as usize;
        log::info!(
            "Rendering {}x{} ({})",
            width,
            height,
            if self.config.parallel { "parallel" } else { "sequential" }
        );
        let start = Instant::now();

        let mut data = vec![self.config.background; width * height];
        if self.config.parallel {
            data.par_chunks_mut(width)
                .enumerate()
                .for_each(|(y, row)| self.render_row(y as u32, row));
        } else {
            data.chunks_mut(width)
                .enumerate()
                .for_each(|(y, row)| self.render_row(y as u32, row));
        }

        log::info!("Rendered in {:.2?}", start.elapsed());
        PixelBuffer::new(self.config.width, self.config.height, data)
    }

    fn render_row(&self, y: u32, row: &mut [Rgb]) {
        for (x, pixel) in row.iter_mut().enumerate() {
            *pixel = self.find_color(&self.primary_ray(x as u32, y));
        }
    }

    /// Ray from the eye through the centre of pixel `(x, y)` on the image
    /// plane at `z = 1`. Row 0 is the top edge of the plane.
    pub fn primary_ray(&self, x: u32, y: u32) -> Ray {
        let camera = &self.scene.camera;
        let pixel_width = camera.width / f64::from(self.config.width);
        let pixel_height = camera.height / f64::from(self.config.height);

        let origin = DVec3::new(self.config.eye.x, self.config.eye.y, 0.0);
        let direction = DVec3::new(
            -camera.width / 2.0 + pixel_width * (f64::from(x) + 0.5),
            camera.height / 2.0 - pixel_height * (f64::from(y) + 0.5),
            1.0,
        );
        Ray {
            origin,
            direction: normalize(direction),
        }
    }

    /// Closest object with a finite, strictly positive `t`. On equal `t`
    /// the object declared first wins.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<(&Shape, f64)> {
        let mut nearest: Option<(&Shape, f64)> = None;
        for shape in self.scene.objects() {
            let Some(t) = shape.intersect(ray) else {
                continue;
            };
            if !(t.is_finite() && t > 0.0) {
                continue;
            }
            if nearest.map_or(true, |(_, best)| t < best) {
                nearest = Some((shape, t));
            }
        }
        nearest
    }

    fn find_color(&self, ray: &Ray) -> Rgb {
        match self.nearest_hit(ray) {
            Some((shape, _)) => to_rgb(shape.color()),
            None => self.config.background,
        }
    }
}

/// Scales [0, 1] channels to bytes. The float-to-int cast saturates, so
/// out-of-range channels clamp to 0 or 255 and NaN becomes 0.
pub fn to_rgb(color: DVec3) -> Rgb {
    [
        (color.x * 255.0) as u8,
        (color.y * 255.0) as u8,
        (color.z * 255.0) as u8,
    ]
}
