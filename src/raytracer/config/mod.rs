pub mod camera;
mod cursor;
mod render_config;
mod scene;
mod scene_reader;
pub mod shape;
pub mod shapes;
mod tokens;

pub use render_config::{RenderConfig, DEFAULT_MAX_OBJECTS};
pub use scene::SceneContext;
pub use scene_reader::{load_scene_file, SceneReader};
pub use shape::{Intersectable, Ray, Shape};
