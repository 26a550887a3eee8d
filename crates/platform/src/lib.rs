use std::sync::Arc;
use std::time::{Duration, Instant};

use app_api::UiApp;
use gfx::{Renderer, RendererError};
use thiserror::Error;
use winit::{
    application::ApplicationHandler,
    error::EventLoopError,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("event loop failed: {0}")]
    EventLoop(#[from] EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error(transparent)]
    Renderer(#[from] RendererError),
}

/// Open a window and run `app` in it until the window closes.
pub fn run(app: Box<dyn UiApp>) -> Result<(), PlatformError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut shell = PlatformApp {
        app,
        window: None,
        renderer: None,
        started: false,
        failure: None,
    };
    event_loop.run_app(&mut shell)?;

    match shell.failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

struct PlatformApp {
    app: Box<dyn UiApp>,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    started: bool,
    failure: Option<PlatformError>,
}

impl PlatformApp {
    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), PlatformError> {
        if self.window.is_none() {
            let attrs = Window::default_attributes().with_title(self.app.title());
            self.window = Some(Arc::new(event_loop.create_window(attrs)?));
        }
        if let (None, Some(window)) = (self.renderer.as_ref(), self.window.as_ref()) {
            let renderer = Renderer::new(Arc::clone(window))?;
            if !self.started {
                self.started = true;
                self.app.on_start(renderer.context());
            }
            self.renderer = Some(renderer);
            window.request_redraw();
        }
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(window), Some(renderer)) = (self.window.as_ref(), self.renderer.as_mut()) else {
            return;
        };
        let app = &mut self.app;
        let Some(delay) = renderer.render(window, |ctx| app.ui(ctx)) else {
            return;
        };

        if delay.is_zero() {
            window.request_redraw();
        } else if delay < Duration::from_secs(3600) {
            event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + delay));
        } else {
            event_loop.set_control_flow(ControlFlow::Wait);
        }
    }
}

impl ApplicationHandler for PlatformApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if let Err(err) = self.init(event_loop) {
            log::error!(target: "platform", "{err}");
            self.failure = Some(err);
            event_loop.exit();
        }
    }

    fn new_events(&mut self, _event_loop: &ActiveEventLoop, cause: winit::event::StartCause) {
        if let winit::event::StartCause::ResumeTimeReached { .. } = cause {
            if let Some(window) = self.window.as_ref() {
                window.request_redraw();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let (Some(window), Some(renderer)) = (self.window.as_ref(), self.renderer.as_mut()) {
            if renderer.on_window_event(window, &event) {
                window.request_redraw();
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                log::debug!(target: "platform", "close requested");
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(new_size);
                }
                if let Some(window) = self.window.as_ref() {
                    window.request_redraw();
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }
}
