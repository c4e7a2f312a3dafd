pub mod renderer;
pub mod sphere;
pub mod uniforms;
pub mod vertex;

pub use renderer::Renderer;
pub use sphere::SphereMesh;
pub use uniforms::{CameraUniform, LightingUniform};
pub use vertex::Vertex;
