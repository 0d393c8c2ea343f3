#![deny(clippy::all)]
#![forbid(unsafe_code)]

mod pointer;
mod render;

pub use pointer::Pointer;
pub use render::{ALIVE_COLOR, BACKGROUND_RGBA, DEAD_COLOR, cell_color_rgba, draw_frame};

use error_iter::ErrorIter as _;
use life_grid::{Command, RANDOM_DENSITY, Simulation, SimulationConfig};
use log::{error, info};
use pixels::wgpu::Color;
use pixels::{Pixels, PixelsBuilder, SurfaceTexture};
use std::error::Error;
use std::sync::Arc;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::error::EventLoopError;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Cursor, CursorIcon, Window, WindowId};

const WINDOW_TITLE: &str = "Game of Life";
const WINDOW_WIDTH: u32 = 960;
const WINDOW_HEIGHT: u32 = 720;
const MIN_WINDOW_SIDE: u32 = 64;
const BACKGROUND_COLOR: Color = Color::WHITE;

/// Opens a window and runs the game in it until the window is closed.
pub fn animate(config: SimulationConfig) -> Result<(), EventLoopError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);
    event_loop.run_app(&mut AppEventHandler::new(config))
}

pub fn log_error<E: Error + 'static>(method_name: &str, err: &E) {
    error!("{method_name}() failed: {err}");
    for source in err.sources().skip(1) {
        error!("  Caused by: {source}");
    }
}

struct App {
    simulation: Simulation,
    window: Arc<Window>,
    pixels: Pixels<'static>,
    buffer_size: PhysicalSize<u32>,
    pointer: Pointer,
    epoch: Instant,
}

impl App {
    fn new(event_loop: &ActiveEventLoop, config: SimulationConfig) -> Option<Self> {
        let window = Arc::new(
            Self::build_window(event_loop)
                .inspect_err(|err| log_error("create_window", err))
                .ok()?,
        );
        let buffer_size = Self::buffer_size(window.inner_size());
        let pixels = Self::build_pixels(&window, buffer_size)
            .inspect_err(|err| log_error("build_pixels", err))
            .ok()?;

        let mut simulation = Simulation::new(config);
        simulation.push(Self::resize_command(buffer_size));
        info!(
            "Stepping {} times per second in a {}x{} window",
            simulation.clock().steps_per_second(),
            buffer_size.width,
            buffer_size.height
        );

        Some(Self {
            simulation,
            window,
            pixels,
            buffer_size,
            pointer: Pointer::default(),
            epoch: Instant::now(),
        })
    }

    fn build_window(event_loop: &ActiveEventLoop) -> Result<Window, winit::error::OsError> {
        let window_attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            .with_min_inner_size(LogicalSize::new(MIN_WINDOW_SIDE, MIN_WINDOW_SIDE))
            .with_cursor(Cursor::Icon(CursorIcon::Crosshair))
            .with_visible(false);
        event_loop.create_window(window_attributes)
    }

    fn build_pixels(
        window: &Arc<Window>,
        size: PhysicalSize<u32>,
    ) -> Result<Pixels<'static>, pixels::Error> {
        let surface_texture = SurfaceTexture::new(size.width, size.height, window.clone());
        PixelsBuilder::new(size.width, size.height, surface_texture)
            .clear_color(BACKGROUND_COLOR)
            .build()
    }

    // The frame buffer can't be empty, even while the window is minimized.
    fn buffer_size(window_size: PhysicalSize<u32>) -> PhysicalSize<u32> {
        PhysicalSize::new(window_size.width.max(1), window_size.height.max(1))
    }

    fn resize_command(size: PhysicalSize<u32>) -> Command {
        Command::Resize {
            pixel_width: size.width,
            pixel_height: size.height,
        }
    }

    fn on_create(&mut self) {
        self.window.request_redraw();
        self.window.set_visible(true);
    }

    fn on_resize(&mut self, window_size: PhysicalSize<u32>) -> Result<(), pixels::TextureError> {
        if window_size.width == 0 || window_size.height == 0 {
            return Ok(());
        }
        self.pixels
            .resize_surface(window_size.width, window_size.height)?;
        self.pixels
            .resize_buffer(window_size.width, window_size.height)?;
        self.buffer_size = window_size;
        self.simulation.push(Self::resize_command(window_size));
        Ok(())
    }

    fn on_command(&mut self, command: Option<Command>) {
        if let Some(command) = command {
            self.simulation.push(command);
        }
    }

    fn on_redraw(&mut self) -> Result<(), pixels::Error> {
        self.simulation.tick(self.epoch.elapsed());
        draw_frame(
            self.pixels.frame_mut(),
            self.buffer_size.width,
            &self.simulation,
        );
        self.pixels.render()?;
        self.window.request_redraw();
        Ok(())
    }
}

struct AppEventHandler {
    config: SimulationConfig,
    app: Option<App>,
}

impl AppEventHandler {
    fn new(config: SimulationConfig) -> Self {
        Self { config, app: None }
    }

    fn on_key(&mut self, event_loop: &ActiveEventLoop, code: KeyCode) {
        let command = match code {
            KeyCode::Escape | KeyCode::KeyQ | KeyCode::KeyX => {
                event_loop.exit();
                None
            }
            KeyCode::Space => Some(Command::TogglePaused),
            KeyCode::KeyR => Some(Command::Randomize {
                density: RANDOM_DENSITY,
            }),
            KeyCode::KeyC => Some(Command::Clear),
            _ => None,
        };
        if let Some(app) = self.app.as_mut() {
            app.on_command(command);
        }
    }
}

impl ApplicationHandler for AppEventHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.app.is_none() {
            match App::new(event_loop, self.config) {
                Some(mut app) => {
                    app.on_create();
                    self.app = Some(app);
                }
                None => event_loop.exit(),
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let WindowEvent::KeyboardInput {
            event:
                KeyEvent {
                    physical_key: PhysicalKey::Code(code),
                    state: ElementState::Released,
                    repeat: false,
                    ..
                },
            ..
        } = event
        {
            self.on_key(event_loop, code);
            return;
        }

        let Some(app) = self.app.as_mut() else {
            return;
        };
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Err(err) = app.on_resize(size) {
                    log_error("on_resize", &err);
                    event_loop.exit();
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let command = app.pointer.moved(position.x, position.y);
                app.on_command(command);
            }
            WindowEvent::CursorLeft { .. } => {
                let command = app.pointer.release_all();
                app.on_command(command);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let command = match state {
                    ElementState::Pressed => app.pointer.pressed(button),
                    ElementState::Released => app.pointer.released(button),
                };
                app.on_command(command);
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = app.on_redraw() {
                    log_error("on_redraw", &err);
                    event_loop.exit();
                }
            }
            _ => (),
        }
    }
}
