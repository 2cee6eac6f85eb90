use crate::controllers::viewport::ZoomFactors;
use crate::core::data::raster_spec::RasterSpec;
use crate::core::data::view_rect::ViewRect;
use crate::core::errors::configuration::InvalidConfiguration;

/// Construction-time settings of an exploration session.
///
/// Defaults to the classic view `re [-2, 1]`, `im [-1.5, 1.5]` at 800x800
/// with 200 iterations and zoom factors 0.9 / 1.1.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct ExplorerConfig {
    pub view: ViewRect,
    pub raster: RasterSpec,
    pub zoom: ZoomFactors,
}

impl ExplorerConfig {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        re_min: f64,
        re_max: f64,
        im_min: f64,
        im_max: f64,
        width: u32,
        height: u32,
        max_iterations: u32,
        zoom_in: f64,
        zoom_out: f64,
    ) -> Result<Self, InvalidConfiguration> {
        Ok(Self {
            view: ViewRect::new(re_min, re_max, im_min, im_max)?,
            raster: RasterSpec::new(width, height, max_iterations)?,
            zoom: ZoomFactors::new(zoom_in, zoom_out)?,
        })
    }
}
