//! Native window and event loop
//!
//! Frames are paced by waking the event loop at each [`FrameClock`] deadline.
//! The run ends when the clock reaches the movie's duration or the window is
//! closed.

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use super::PlatformError;
use super::input::KeyState;
use crate::movie::{FrameClock, Movie};
use crate::renderer::shapes::tessellate;
use crate::renderer::{RenderState, ShapeList};
use crate::settings::Settings;

/// Open the window and play the movie until it ends
pub fn run(settings: Settings) -> Result<(), PlatformError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(settings);
    event_loop.run_app(&mut app)?;

    log::info!(
        "Movie ended after {} frames ({} log lines dropped)",
        app.movie.frames(),
        app.movie.log().dropped()
    );
    match app.error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

struct Graphics {
    window: Arc<Window>,
    render: RenderState,
}

struct App {
    settings: Settings,
    movie: Movie,
    keys: KeyState,
    shapes: ShapeList,
    clock: Option<FrameClock>,
    gfx: Option<Graphics>,
    error: Option<PlatformError>,
}

impl App {
    fn new(settings: Settings) -> Self {
        let movie = Movie::new(&settings);
        Self {
            settings,
            movie,
            keys: KeyState::new(),
            shapes: ShapeList::new(),
            clock: None,
            gfx: None,
            error: None,
        }
    }

    fn create_graphics(&self, event_loop: &ActiveEventLoop) -> Result<Graphics, PlatformError> {
        let size = PhysicalSize::new(self.settings.width, self.settings.height);
        let attributes = Window::default_attributes()
            .with_title(self.settings.title.clone())
            .with_inner_size(size)
            .with_resizable(false);
        let window = Arc::new(event_loop.create_window(attributes)?);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window.clone())?;
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))?;
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let inner = window.inner_size();
        let render = pollster::block_on(RenderState::new(
            surface,
            &adapter,
            inner.width.max(1),
            inner.height.max(1),
            self.settings.playfield(),
        ))?;

        Ok(Graphics { window, render })
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: PlatformError) {
        log::error!("{}", err);
        self.error = Some(err);
        event_loop.exit();
    }

    fn present(&mut self, event_loop: &ActiveEventLoop) {
        let Some(gfx) = self.gfx.as_mut() else {
            return;
        };
        let vertices = tessellate(self.shapes.shapes());
        match gfx.render.render(&vertices) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gfx.render.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                self.fail(event_loop, PlatformError::OutOfMemory);
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gfx.is_some() {
            return;
        }
        match self.create_graphics(event_loop) {
            Ok(gfx) => {
                log::info!(
                    "Window created: {}x{}, {} fps for {}s",
                    self.settings.width,
                    self.settings.height,
                    self.settings.frame_rate,
                    self.settings.duration_secs
                );
                self.gfx = Some(gfx);
                self.clock = Some(FrameClock::from_settings(Instant::now(), &self.settings));
            }
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting.");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(gfx) = self.gfx.as_mut() {
                    gfx.render.resize(size.width, size.height);
                }
            }
            WindowEvent::Focused(false) => self.keys.clear(),
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.keys.handle(code, event.state);
                }
            }
            WindowEvent::RedrawRequested => self.present(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(clock) = self.clock.as_mut() else {
            return;
        };

        let now = Instant::now();
        if clock.is_finished(now) {
            log::info!("Movie time is up after {:?}", clock.elapsed(now));
            event_loop.exit();
            return;
        }

        if clock.frame_due(now) {
            self.shapes.clear();
            self.movie.frame(self.keys.snapshot(), &mut self.shapes);
            clock.advance(now);
            if let Some(gfx) = &self.gfx {
                gfx.window.request_redraw();
            }
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(clock.next_deadline()));
    }
}
