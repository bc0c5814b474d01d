pub mod plane;
pub mod sphere;

pub use plane::Plane;
pub use sphere::Sphere;
