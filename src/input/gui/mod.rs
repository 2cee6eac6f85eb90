//! GUI input adapter for interactive exploration.
//!
//! Uses winit for the window and event loop and pixels for the framebuffer.

mod app;

pub use app::{GuiError, run_gui};
