mod config;
mod controllers;
mod core;
mod input;
mod presenters;

pub use crate::config::ExplorerConfig;
pub use crate::controllers::data::rendered_frame::RenderedFrame;
pub use crate::controllers::explorer::Explorer;
pub use crate::controllers::ports::frame_presenter::FramePresenterPort;
pub use crate::controllers::viewport::{
    DragState, NavigationEvent, ViewportController, ZoomDirection, ZoomFactors,
};
pub use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
pub use crate::core::actions::render::render_escape_grid::{render, render_cancelable};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::escape_grid::EscapeGrid;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::raster_spec::RasterSpec;
pub use crate::core::data::view_rect::{ViewRect, ViewRectError};
pub use crate::core::errors::configuration::InvalidConfiguration;
pub use crate::core::errors::navigation::NavigationError;
pub use crate::core::fractals::mandelbrot::fire_gradient::FireGradient;
pub use crate::input::cli::args::{RenderArgs, SessionArgs};
pub use crate::input::cli::navigation_step::{NavigationStep, NavigationStepError};
#[cfg(feature = "gui")]
pub use crate::input::gui::{GuiError, run_gui};
pub use crate::input::pointer_gestures::{PointerButton, PointerGestures};
pub use crate::input::screen_mapping::ScreenMapping;
pub use crate::presenters::file::ppm::{PpmError, PpmFilePresenter, save_ppm, write_ppm};
pub use crate::presenters::file::snapshots::SnapshotDirectory;
