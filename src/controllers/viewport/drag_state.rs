use crate::core::data::complex::Complex;
use crate::core::data::view_rect::ViewRect;

/// Snapshot taken when a pan starts; every pan update is computed from it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DragState {
    anchor: Complex,
    anchor_view: ViewRect,
}

impl DragState {
    pub(crate) fn new(anchor: Complex, anchor_view: ViewRect) -> Self {
        Self {
            anchor,
            anchor_view,
        }
    }

    #[must_use]
    pub fn anchor(&self) -> Complex {
        self.anchor
    }

    /// The view as it was when the pan started, or when a zoom last changed it
    /// mid-drag.
    #[must_use]
    pub fn anchor_view(&self) -> ViewRect {
        self.anchor_view
    }
}
