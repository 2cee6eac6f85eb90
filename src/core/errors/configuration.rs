use crate::core::data::view_rect::ViewRectError;
use thiserror::Error;

/// A session parameter that makes rendering impossible.
///
/// Raised at construction time only; nothing is rendered once this is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidConfiguration {
    #[error("raster must be at least 1x1 pixels: {width}x{height}")]
    ZeroRasterSize { width: u32, height: u32 },
    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,
    #[error("invalid initial view: {0}")]
    InvalidView(#[from] ViewRectError),
    #[error("zoom factor must be positive and finite: {0}")]
    InvalidZoomFactor(f64),
}
