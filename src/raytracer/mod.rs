pub mod config;
pub mod geometry;
mod raytracer;

pub use config::{load_scene_file, RenderConfig};
pub use raytracer::RayTracer;
