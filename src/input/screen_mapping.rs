use crate::core::data::complex::Complex;
use crate::core::data::raster_spec::RasterSpec;
use crate::core::data::view_rect::ViewRect;

/// Converts raster pixel positions to plane coordinates.
///
/// Positions use the renderer's sampling: pixel `(i, j)` is centred on
/// `(i, j)`, column `i` samples `re_min + i / (width - 1) * (re_max - re_min)`
/// and screen row 0 is `im_max`. The surface covers half a pixel beyond the
/// outer centres; positions in that margin clamp to the view edge.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScreenMapping {
    last_column: f64,
    last_row: f64,
}

impl ScreenMapping {
    #[must_use]
    pub fn new(raster: &RasterSpec) -> Self {
        Self {
            last_column: f64::from(raster.width() - 1),
            last_row: f64::from(raster.height() - 1),
        }
    }

    /// Plane coordinate under `(x, y)`, or `None` if the position is off the surface.
    #[must_use]
    pub fn to_plane(&self, view: ViewRect, x: f64, y: f64) -> Option<Complex> {
        if !(-0.5..=self.last_column + 0.5).contains(&x) || !(-0.5..=self.last_row + 0.5).contains(&y) {
            return None;
        }

        // The bottom screen row is grid row 0, so a single row samples im_min.
        Some(Complex {
            real: view.re_min() + sample_fraction(x, self.last_column) * view.width(),
            imag: view.im_min() + sample_fraction(self.last_row - y, self.last_row) * view.height(),
        })
    }
}

fn sample_fraction(position: f64, last: f64) -> f64 {
    if last == 0.0 {
        return 0.0;
    }

    (position / last).clamp(0.0, 1.0)
}
