//! Navigation events as delivered by a display collaborator.
//!
//! Coordinates are already in the complex plane. `None` means the pointer was
//! outside the plotting area when the event fired.

use crate::core::data::complex::Complex;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum NavigationEvent {
    /// Drag-to-zoom finished with the two opposite corners of the selection.
    RectangleSelected {
        start: Option<Complex>,
        end: Option<Complex>,
    },
    /// One scroll tick over `anchor`.
    ScrollZoom {
        anchor: Option<Complex>,
        direction: ZoomDirection,
    },
    PanStart { anchor: Option<Complex> },
    PanMove { current: Option<Complex> },
    PanEnd,
    /// Back to the view the session started with; also ends any pan.
    Reset,
}
