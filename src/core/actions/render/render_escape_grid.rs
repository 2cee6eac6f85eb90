use rayon::prelude::*;

use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::actions::render::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::escape_grid::EscapeGrid;
use crate::core::data::raster_spec::RasterSpec;
use crate::core::data::view_rect::ViewRect;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::util::axis_samples::axis_samples;

/// Computes the Mandelbrot escape grid for `view` at the resolution of `raster`.
///
/// Rows are spread over rayon's pool; the result is identical to a sequential
/// row-major pass.
#[must_use]
pub fn render(view: ViewRect, raster: RasterSpec) -> EscapeGrid {
    match render_cancelable(view, raster, &NeverCancel) {
        Ok(grid) => grid,
        Err(Cancelled) => unreachable!("NeverCancel token should never signal cancellation"),
    }
}

/// Like [`render`], but gives up once `cancel` reports cancellation.
///
/// The token is checked at the start of each row and every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels within a row.
pub fn render_cancelable<C: CancelToken>(
    view: ViewRect,
    raster: RasterSpec,
    cancel: &C,
) -> Result<EscapeGrid, Cancelled> {
    let algorithm = MandelbrotAlgorithm::new(&raster);
    let cells = generate_escape_cells(view, raster, &algorithm, cancel)?;

    Ok(EscapeGrid::from_cells(raster, cells))
}

pub(crate) fn generate_escape_cells<Alg, C>(
    view: ViewRect,
    raster: RasterSpec,
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<u32>, Cancelled>
where
    Alg: FractalAlgorithm + Sync,
    C: CancelToken,
{
    let reals = axis_samples(view.re_min(), view.re_max(), raster.width() as usize);
    let imags = axis_samples(view.im_min(), view.im_max(), raster.height() as usize);

    let rows: Vec<Vec<u32>> = imags
        .par_iter()
        .map(|&imag| {
            let mut row = Vec::with_capacity(reals.len());

            for (i, &real) in reals.iter().enumerate() {
                if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 {
                    cancel.checkpoint()?;
                }

                row.push(algorithm.compute(Complex { real, imag }));
            }

            Ok(row)
        })
        .collect::<Result<_, _>>()?;

    Ok(rows.into_iter().flatten().collect())
}
