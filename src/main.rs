//! Application entry point.

use log::{error, info};
use winit::event_loop::{ControlFlow, EventLoop};

use phong::{App, AppConfig, Error};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Logger initialized");

    let config = AppConfig::load().map_err(|e| {
        error!("Failed to load config: {}", e);
        e
    })?;

    let event_loop = EventLoop::new().map_err(|e| {
        error!("Failed to create event loop: {:?}", e);
        Error::CreateEventLoop(e)
    })?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    if let Err(e) = event_loop.run_app(&mut app) {
        error!("Application error: {:?}", e);
        return Err(Box::new(Error::RunEventLoop(e)));
    }

    if let Some(e) = app.take_error() {
        return Err(Box::new(e));
    }

    Ok(())
}
