//! Windowed explorer: winit events in, pixels framebuffer out.
//!
//! `R` resets the view and `S` saves the frame on screen as a PPM snapshot.

use log::{error, warn};
use thiserror::Error;
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowBuilder},
};

use crate::config::ExplorerConfig;
use crate::controllers::explorer::Explorer;
use crate::controllers::viewport::NavigationEvent;
use crate::core::data::view_rect::ViewRect;
use crate::input::pointer_gestures::{PointerButton, PointerGestures};
use crate::input::screen_mapping::ScreenMapping;
use crate::presenters::file::snapshots::SnapshotDirectory;
use crate::presenters::pixels::presenter::PixelsPresenter;

#[derive(Debug, Error)]
pub enum GuiError {
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("pixels error: {0}")]
    Pixels(#[from] pixels::Error),
}

struct App {
    explorer: Explorer<PixelsPresenter>,
    gestures: PointerGestures,
    snapshots: SnapshotDirectory,
}

impl App {
    /// The view cursor movement is converted with; a pan measures against its snapshot.
    fn drag_view(&self) -> ViewRect {
        let controller = self.explorer.controller();

        controller
            .drag_state()
            .map_or(controller.view(), |state| state.anchor_view())
    }

    /// Returns whether the window needs a redraw.
    fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        // Clicks and scrolls land on what is on screen.
        let view = self.explorer.view();

        let navigation = match event {
            WindowEvent::CursorMoved { position, .. } => {
                let pixel = self
                    .explorer
                    .presenter()
                    .window_pos_to_pixel(position.x, position.y);
                let navigation = self.gestures.cursor_moved(pixel, self.drag_view());

                if self.gestures.selection().is_some() {
                    self.dispatch(navigation);
                    return true;
                }
                navigation
            }
            WindowEvent::CursorLeft { .. } => self.gestures.cursor_moved(None, self.drag_view()),
            WindowEvent::MouseInput { state, button, .. } => {
                let button = match button {
                    MouseButton::Left => PointerButton::Primary,
                    MouseButton::Right => PointerButton::Secondary,
                    _ => return false,
                };

                match state {
                    ElementState::Pressed => self.gestures.button_pressed(button, view),
                    ElementState::Released => {
                        let had_selection = self.gestures.selection().is_some();
                        let navigation = self.gestures.button_released(button, view);

                        if had_selection {
                            self.dispatch(navigation);
                            return true;
                        }
                        navigation
                    }
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => f64::from(*y),
                    MouseScrollDelta::PixelDelta(position) => position.y,
                };
                self.gestures.scrolled(delta, view)
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => match code {
                KeyCode::KeyR => Some(NavigationEvent::Reset),
                KeyCode::KeyS => {
                    self.save_snapshot();
                    None
                }
                _ => None,
            },
            _ => None,
        };

        self.dispatch(navigation)
    }

    fn save_snapshot(&self) {
        let Some(frame) = self.explorer.presenter().last_frame() else {
            warn!("nothing rendered yet, no snapshot saved");
            return;
        };

        if let Err(e) = self.snapshots.save(frame) {
            error!("failed to save snapshot: {e}");
        }
    }

    fn dispatch(&mut self, navigation: Option<NavigationEvent>) -> bool {
        let Some(event) = navigation else {
            return false;
        };

        match self.explorer.handle(event) {
            Ok(rendered) => rendered,
            Err(never) => match never {},
        }
    }
}

/// Opens the explorer window and runs until it is closed.
pub fn run_gui(config: ExplorerConfig, snapshots: SnapshotDirectory) -> Result<(), GuiError> {
    let event_loop = EventLoop::new()?;

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Mandelbrot Explorer")
            .with_inner_size(LogicalSize::new(config.raster.width(), config.raster.height()))
            .with_min_inner_size(LogicalSize::new(200.0, 200.0))
            .build(&event_loop)?,
    ));

    let presenter = PixelsPresenter::new(window, &config.raster)?;
    let mut explorer = Explorer::new(config, presenter);
    if let Err(never) = explorer.render() {
        match never {}
    }

    let mut app = App {
        explorer,
        gestures: PointerGestures::new(ScreenMapping::new(&config.raster)),
        snapshots,
    };

    event_loop.run(move |event, elwt| {
        let Event::WindowEvent { event, window_id } = event else {
            return;
        };
        if window_id != window.id() {
            return;
        }

        match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::RedrawRequested => {
                let selection = app.gestures.selection();
                if let Err(e) = app.explorer.presenter_mut().draw(selection) {
                    error!("render error: {e}");
                    elwt.exit();
                }
            }
            WindowEvent::Resized(size) => {
                if let Err(e) = app
                    .explorer
                    .presenter_mut()
                    .resize_surface(size.width, size.height)
                {
                    error!("failed to resize surface: {e}");
                    elwt.exit();
                }
                window.request_redraw();
            }
            other => {
                if app.handle_window_event(&other) {
                    window.request_redraw();
                }
            }
        }
    })?;

    Ok(())
}
