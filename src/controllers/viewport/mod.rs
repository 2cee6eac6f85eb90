//! Bounds arithmetic for interactive navigation.
//!
//! The [`ViewportController`] owns the current view rectangle and replaces it
//! in response to [`NavigationEvent`]s. It never renders; callers re-render
//! whenever [`ViewportController::handle`] reports a new view.

mod controller;
pub mod drag_state;
pub mod events;
pub mod zoom_factors;

pub use controller::ViewportController;
pub use drag_state::DragState;
pub use events::{NavigationEvent, ZoomDirection};
pub use zoom_factors::ZoomFactors;
