//! Engine module containing graphics, input, and window management.

pub mod graphics;
pub mod input;
pub mod window;

// Re-export commonly used types
pub use graphics::{renderer::Renderer, sphere::SphereMesh, vertex::Vertex};
pub use input::{InputAction, InputHandler};
pub use window::WindowManager;
