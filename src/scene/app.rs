use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;
use log::{debug, error, info, warn};

use crate::config::AppConfig;
use crate::engine::graphics::{renderer::Renderer, sphere::SphereMesh};
use crate::engine::input::{InputAction, InputHandler};
use crate::engine::window::WindowManager;
use crate::error::{Error, Result};
use crate::scene::state::{DemoState, FrameClock};

pub struct App {
    config: AppConfig,
    window_manager: WindowManager,
    renderer: Option<Renderer>,
    input_handler: InputHandler,
    state: DemoState,
    clock: FrameClock,
    error: Option<Error>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let state = DemoState::from_config(&config.scene);
        Self {
            config,
            window_manager: WindowManager::new(),
            renderer: None,
            input_handler: InputHandler::new(),
            state,
            clock: FrameClock::new(),
            error: None,
        }
    }

    pub fn state(&self) -> &DemoState {
        &self.state
    }

    /// The error that stopped the event loop, if any.
    pub fn take_error(&mut self) -> Option<Error> {
        self.error.take()
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let sphere = SphereMesh::new(
            self.config.sphere.radius,
            self.config.sphere.latitude_count,
            self.config.sphere.longitude_count,
        )?;
        let window = self.window_manager.create_window(event_loop, &self.config.window)?;
        let renderer = pollster::block_on(Renderer::new(window, &self.config, &sphere))?;
        debug!("Material: {}", self.state.material);

        self.renderer = Some(renderer);
        self.clock = FrameClock::new();
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, e: Error) {
        error!("{}", e);
        self.error = Some(e);
        event_loop.exit();
    }

    fn apply(&mut self, event_loop: &ActiveEventLoop, action: InputAction) {
        match action {
            InputAction::Exit => event_loop.exit(),
            InputAction::SelectMaterial(material) => {
                if self.state.select_material(material) {
                    info!("Material: {}", material);
                }
            }
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let delta = self.clock.tick();
        self.state.update(delta);

        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };
        let camera = self.state.camera_uniform(renderer.aspect_ratio());
        let lighting = self.state.lighting_uniform();

        match renderer.render(&camera, &lighting) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                warn!("Surface lost or outdated, reconfiguring");
                renderer.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                error!("Out of memory while rendering, exiting");
                event_loop.exit();
                return;
            }
            Err(wgpu::SurfaceError::Timeout) => {
                warn!("Surface timed out");
            }
        }
        self.window_manager.request_redraw();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window_manager.get_window().is_some() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            self.fail(event_loop, e);
            return;
        }
        self.window_manager.request_redraw();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(physical_size);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let winit::keyboard::PhysicalKey::Code(keycode) = event.physical_key {
                    let action = self.input_handler.handle_key(keycode, event.state, event.repeat);
                    if let Some(action) = action {
                        self.apply(event_loop, action);
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }
            _ => (),
        }
    }
}
