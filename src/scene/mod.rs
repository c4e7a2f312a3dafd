//! The lit sphere scene and the application driving it.

pub mod app;
pub mod camera;
pub mod lighting;
pub mod material;
pub mod state;

// Re-export commonly used types
pub use app::App;
pub use camera::OrbitCamera;
pub use lighting::Light;
pub use material::Material;
pub use state::{DemoState, FrameClock};
