//! Cooperative cancellation for long renders.

use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;

/// Pixels computed between two polls within a row.
pub const CANCEL_CHECK_INTERVAL_PIXELS: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("render cancelled")]
pub struct Cancelled;

/// Polled by the renderer at the start of every row and every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels along it. Rows run on rayon's
/// pool, so a token is shared between threads.
pub trait CancelToken: Sync {
    fn is_cancelled(&self) -> bool;

    fn checkpoint(&self) -> Result<(), Cancelled> {
        if self.is_cancelled() {
            return Err(Cancelled);
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// A flag another thread raises to abandon the render.
impl CancelToken for AtomicBool {
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> bool + Sync,
{
    fn is_cancelled(&self) -> bool {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::render::render_escape_grid::{render, render_cancelable};
    use crate::core::data::raster_spec::RasterSpec;
    use crate::core::data::view_rect::ViewRect;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_checkpoint_follows_token() {
        let cancelled = || true;

        assert_eq!(NeverCancel.checkpoint(), Ok(()));
        assert_eq!(cancelled.checkpoint(), Err(Cancelled));
    }

    #[test]
    fn test_raised_flag_abandons_render() {
        let flag = AtomicBool::new(true);
        let raster = RasterSpec::new(12, 9, 40).unwrap();

        assert_eq!(render_cancelable(ViewRect::default(), raster, &flag), Err(Cancelled));
    }

    #[test]
    fn test_lowered_flag_renders_whole_grid() {
        let flag = AtomicBool::new(false);
        let view = ViewRect::default();
        let raster = RasterSpec::new(12, 9, 40).unwrap();

        assert_eq!(render_cancelable(view, raster, &flag), Ok(render(view, raster)));
    }

    #[test]
    fn test_long_row_is_polled_every_interval() {
        let polls = AtomicUsize::new(0);
        let counting = || {
            polls.fetch_add(1, Ordering::Relaxed);
            false
        };
        let width = 2 * CANCEL_CHECK_INTERVAL_PIXELS + 1;
        let raster = RasterSpec::new(width as u32, 1, 5).unwrap();

        render_cancelable(ViewRect::default(), raster, &counting).unwrap();

        // Pixels 0, 1024 and 2048.
        assert_eq!(polls.load(Ordering::Relaxed), 3);
    }
}
