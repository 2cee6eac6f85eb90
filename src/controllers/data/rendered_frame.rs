use std::time::Duration;

use crate::core::data::escape_grid::EscapeGrid;
use crate::core::data::view_rect::ViewRect;

/// One render result, handed to a presenter by value.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedFrame {
    /// Bounds the grid was sampled over, for axis labelling.
    pub view: ViewRect,
    pub grid: EscapeGrid,
    pub render_duration: Duration,
}
