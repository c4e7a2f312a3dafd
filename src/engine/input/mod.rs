//! Input handling module
//! This module turns keyboard events into demo actions.

pub mod handler;

pub use handler::{InputAction, InputHandler};
