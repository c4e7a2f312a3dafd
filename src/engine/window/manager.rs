//! Window management implementation.

use std::sync::Arc;

use log::{debug, warn};
use winit::dpi::{LogicalSize, PhysicalPosition, PhysicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Icon, Window};

use crate::config::WindowConfig;
use crate::error::{Error, Result};

#[derive(Default)]
pub struct WindowManager {
    pub window: Option<Arc<Window>>,
}

impl WindowManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the window hidden, centers it on the primary monitor, then shows it.
    pub fn create_window(
        &mut self,
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Result<Arc<Window>> {
        let mut attributes = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(LogicalSize::new(config.width, config.height))
            .with_resizable(true)
            .with_visible(false);

        if let Some(path) = &config.icon {
            match load_icon(path) {
                Ok(icon) => attributes = attributes.with_window_icon(Some(icon)),
                Err(e) => warn!("Ignoring window icon: {}", e),
            }
        }

        let window = event_loop.create_window(attributes).map_err(Error::CreateWindow)?;

        if let Some(monitor) = event_loop.primary_monitor() {
            let position =
                centered_position(monitor.position(), monitor.size(), window.outer_size());
            debug!("Centering window at {:?}", position);
            window.set_outer_position(position);
        }
        window.set_visible(true);

        let window = Arc::new(window);
        self.window = Some(window.clone());
        Ok(window)
    }

    pub fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    pub fn get_window(&self) -> Option<&Arc<Window>> {
        self.window.as_ref()
    }
}

/// Top-left corner that centers a window of `window_size` on a monitor.
pub fn centered_position(
    monitor_origin: PhysicalPosition<i32>,
    monitor_size: PhysicalSize<u32>,
    window_size: PhysicalSize<u32>,
) -> PhysicalPosition<i32> {
    let offset = |monitor: u32, window: u32| (monitor as i32 - window as i32) / 2;
    PhysicalPosition::new(
        monitor_origin.x + offset(monitor_size.width, window_size.width),
        monitor_origin.y + offset(monitor_size.height, window_size.height),
    )
}

fn load_icon(path: &str) -> Result<Icon> {
    let image = image::open(path)
        .map_err(|error| Error::DecodeIcon(error, path.to_string()))?
        .into_rgba8();
    let (width, height) = image.dimensions();
    Icon::from_rgba(image.into_raw(), width, height)
        .map_err(|error| Error::CreateIcon(error, path.to_string()))
}
