use std::sync::Arc;

use log::{debug, error, warn};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::clock::{Clock, FixedHz};
use crate::config::ViewerSettings;
use crate::engine::PreviewEngine;
use crate::input::keycode_to_button;
use crate::presenter::{PresentationContext, TickOutcome};
use crate::surface::WindowSurface;

/// Winit application shell around one presentation context.
///
/// Redraw requests become ticks, geometry changes become resizes and key
/// presses become camera moves; everything else stays in the shell. The
/// event loop stops delivering events before the app and its context are
/// dropped, so no tick can fire into a torn-down context.
pub struct App {
    context: PresentationContext<PreviewEngine>,
    settings: ViewerSettings,
    window: Option<Arc<Window>>,
    surface: Option<WindowSurface>,
    clock: Clock,
    fps_timer: FixedHz,
    frames: u32,
}

impl App {
    pub fn new(context: PresentationContext<PreviewEngine>, settings: ViewerSettings) -> Self {
        Self {
            context,
            settings,
            window: None,
            surface: None,
            clock: Clock::new(),
            fps_timer: FixedHz::new(1.0),
            frames: 0,
        }
    }

    fn redraw(&mut self) {
        let delta = self.clock.tick();

        if let Some(surface) = self.surface.as_ref() {
            let mut published = Ok(());
            match self.context.tick(|snapshot| {
                published = surface.present(snapshot);
            }) {
                Ok(TickOutcome::Rendered) => match published {
                    Ok(()) => self.frames += 1,
                    Err(err) => error!("failed to present frame: {err}"),
                },
                Ok(TickOutcome::Skipped) => {}
                // Stays dirty; the next tick retries.
                Err(err) => error!("{err}"),
            }
        }

        if self.settings.log_fps && self.fps_timer.tick(delta) {
            debug!("presented {} frames in the last second", self.frames);
            self.frames = 0;
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let (width, height) = self.context.dimensions();
        let attributes = Window::default_attributes()
            .with_title(self.settings.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(width, height));

        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                error!("failed to create window: {err}");
                event_loop.exit();
                return;
            }
        };

        let surface = match WindowSurface::new(window.clone()) {
            Ok(surface) => surface,
            Err(err) => {
                error!("failed to create display surface: {err}");
                event_loop.exit();
                return;
            }
        };

        // The actual viewport may differ from the requested logical size;
        // align the framebuffer with it now that it is known.
        let size = window.inner_size();
        self.context.resize(size.width, size.height);

        debug!("window created at {}x{}", size.width, size.height);
        self.window = Some(window);
        self.surface = Some(surface);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(code),
                        ..
                    },
                ..
            } => {
                let consumed = keycode_to_button(code)
                    .map(|button| self.context.dispatch(button))
                    .unwrap_or(false);
                if consumed {
                    if let Some(window) = &self.window {
                        window.request_redraw();
                    }
                }
            }
            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    // Minimized; keep the last buffer until geometry returns.
                    warn!("ignoring resize to {}x{}", size.width, size.height);
                    return;
                }
                if let Some(surface) = self.surface.as_mut() {
                    surface.resize(size.width, size.height);
                }
                self.context.resize(size.width, size.height);
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        // Drive ticks at display cadence; clean ticks skip all work.
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
