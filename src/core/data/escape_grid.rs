use crate::core::data::raster_spec::RasterSpec;

/// Escape iteration counts for one render, stored row-major.
///
/// Row 0 holds the samples at `im_min`; flipping for display is left to the presenter.
/// A cell equal to [`EscapeGrid::max_iterations`] did not escape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapeGrid {
    width: usize,
    height: usize,
    max_iterations: u32,
    cells: Vec<u32>,
}

impl EscapeGrid {
    pub(crate) fn from_cells(raster: RasterSpec, cells: Vec<u32>) -> Self {
        debug_assert_eq!(cells.len(), raster.pixel_count());

        Self {
            width: raster.width() as usize,
            height: raster.height() as usize,
            max_iterations: raster.max_iterations(),
            cells,
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        if row >= self.height || col >= self.width {
            return None;
        }

        Some(self.cells[row * self.width + col])
    }

    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[u32]> + ExactSizeIterator {
        self.cells.chunks_exact(self.width)
    }

    #[must_use]
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }
}
