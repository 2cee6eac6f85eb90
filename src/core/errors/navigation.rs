use thiserror::Error;

/// Reasons a navigation event leaves the view unchanged.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("selection does not describe a usable view rectangle")]
    DegenerateSelection,
    #[error("pointer is outside the render surface")]
    OutOfBoundsPointer,
}
