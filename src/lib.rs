//! Library entry point for the Phong lighting demo.

pub mod config;
pub mod engine;
pub mod error;
pub mod scene;

// Re-export main types for convenience
pub use config::AppConfig;
pub use error::{Error, Result};
pub use scene::App;
