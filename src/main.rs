//! Terrainview - procedural tile terrain with seed entry
//!
//! Space rolls a new random world; click the seed box, type digits and press
//! Enter to load a specific one. Escape leaves the box, or quits.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalPosition,
    event::*,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use terrainview::cli::Args;
use terrainview::pacing::{FpsTracker, FramePacer};
use terrainview::rendering::GpuPresenter;
use terrainview::ui::Keystroke;
use terrainview::viewer::{Viewer, ViewerCommand};

/// Main application state
struct App {
    // Window and presentation
    window: Option<Arc<Window>>,
    presenter: Option<GpuPresenter>,

    // World, seed entry and cached rendering
    viewer: Viewer,

    // Frame timing
    pacer: FramePacer,
    fps: FpsTracker,

    cursor: PhysicalPosition<f64>,
    titled_seed: Option<u64>,

    /// Set when the window or GPU could not be brought up
    startup_error: Option<anyhow::Error>,
}

impl App {
    fn new(viewer: Viewer) -> Self {
        let now = Instant::now();
        Self {
            window: None,
            presenter: None,
            pacer: FramePacer::new(viewer.preset().window.target_fps, now),
            fps: FpsTracker::new(now),
            viewer,
            cursor: PhysicalPosition::new(0.0, 0.0),
            titled_seed: None,
            startup_error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let config = &self.viewer.preset().window;
        let layer_size = (config.window_width, config.window_height);

        let window_attributes = Window::default_attributes()
            .with_title("Terrainview")
            .with_inner_size(winit::dpi::PhysicalSize::new(layer_size.0, layer_size.1));

        let window = Arc::new(
            event_loop
                .create_window(window_attributes)
                .context("failed to create window")?,
        );

        let presenter = pollster::block_on(GpuPresenter::new(Arc::clone(&window), layer_size))
            .context("failed to initialize GPU presenter")?;

        self.window = Some(window);
        self.presenter = Some(presenter);
        self.update_title();
        Ok(())
    }

    /// Cursor position in cached-image pixels (the window may have been resized)
    fn cursor_in_layer(&self) -> (f64, f64) {
        let config = &self.viewer.preset().window;
        let Some(presenter) = &self.presenter else {
            return (self.cursor.x, self.cursor.y);
        };
        let (surface_width, surface_height) = presenter.surface_size();
        (
            self.cursor.x * config.window_width as f64 / surface_width.max(1) as f64,
            self.cursor.y * config.window_height as f64 / surface_height.max(1) as f64,
        )
    }

    fn update_title(&mut self) {
        let seed = self.viewer.seed();
        if self.titled_seed == Some(seed) {
            return;
        }
        if let Some(window) = &self.window {
            window.set_title(&format!("Terrainview - seed {}", seed));
            self.titled_seed = Some(seed);
        }
    }

    /// Render a single frame
    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(presenter) = self.presenter.as_mut() else {
            return;
        };

        match self.viewer.draw(presenter) {
            Ok(()) => self.fps.record_frame(Instant::now()),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => presenter.reconfigure(),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                error!("GPU out of memory, exiting");
                event_loop.exit();
            }
            Err(e) => error!("Render error: {:?}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if self.pacer.is_due(now) {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
            self.pacer.advance(now);
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.pacer.next_frame()));
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        if let Err(err) = self.init(event_loop) {
            self.startup_error = Some(err);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(presenter) = &mut self.presenter {
                    presenter.resize(size.width, size.height);
                }
            }
            WindowEvent::CursorMoved { position, .. } => self.cursor = position,
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                let (x, y) = self.cursor_in_layer();
                self.viewer.handle_click(x, y);
            }
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                let Some(key) = keystroke(&event) else {
                    return;
                };
                if self.viewer.handle_key(key) == ViewerCommand::Exit {
                    event_loop.exit();
                    return;
                }
                self.update_title();
            }
            WindowEvent::RedrawRequested => self.render_frame(event_loop),
            _ => {}
        }
    }
}

/// Translate a winit key press into the viewer's key set
fn keystroke(event: &KeyEvent) -> Option<Keystroke> {
    match event.physical_key {
        PhysicalKey::Code(KeyCode::Escape) => return Some(Keystroke::Escape),
        PhysicalKey::Code(KeyCode::Space) => return Some(Keystroke::Space),
        PhysicalKey::Code(KeyCode::Enter | KeyCode::NumpadEnter) => return Some(Keystroke::Enter),
        PhysicalKey::Code(KeyCode::Backspace) => return Some(Keystroke::Backspace),
        _ => {}
    }
    event.text.as_ref()?.chars().next().map(Keystroke::Char)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let preset = args.world_preset();
    preset.validate().context("invalid preset configuration")?;

    let viewer = Viewer::new(preset, args.seed, StdRng::from_entropy())
        .context("failed to generate initial world")?;

    info!("Press SPACE for a new world, click the box to enter a seed, ESC to exit");

    let mut app = App::new(viewer);
    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop.run_app(&mut app).context("event loop failed")?;

    match app.startup_error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
