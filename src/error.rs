//! Error type shared by the whole application.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to create the event loop!")]
    CreateEventLoop(#[source] winit::error::EventLoopError),

    #[error("Failed to run the event loop!")]
    RunEventLoop(#[source] winit::error::EventLoopError),

    #[error("Failed to create a window!")]
    CreateWindow(#[source] winit::error::OsError),

    #[error("Failed to create a rendering surface!")]
    CreateSurface(#[source] wgpu::CreateSurfaceError),

    #[error("No graphics adapter compatible with the window surface was found!")]
    RequestAdapter,

    #[error("Failed to request a graphics device!")]
    RequestDevice(#[source] wgpu::RequestDeviceError),

    #[error(
        "Invalid sphere parameters: radius {radius}, \
         {latitude_count} latitudes, {longitude_count} longitudes"
    )]
    InvalidSphere {
        radius: f32,
        latitude_count: u32,
        longitude_count: u32,
    },

    #[error("Failed to open config file at path: {1}")]
    OpenConfig(#[source] io::Error, String),

    #[error("Failed to parse config file at path: {1}")]
    ParseConfig(#[source] serde_json::Error, String),

    #[error("Failed to decode icon file at path: {1}")]
    DecodeIcon(#[source] image::ImageError, String),

    #[error("Failed to create icon from image at path: {1}")]
    CreateIcon(#[source] winit::window::BadIcon, String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
