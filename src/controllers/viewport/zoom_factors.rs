use crate::controllers::viewport::events::ZoomDirection;
use crate::core::errors::configuration::InvalidConfiguration;

const DEFAULT_ZOOM_IN: f64 = 0.9;
const DEFAULT_ZOOM_OUT: f64 = 1.1;

/// Extent multipliers applied per scroll tick.
///
/// The defaults are not reciprocal, so zooming in then out shrinks the view by 1%.
/// Use [`ZoomFactors::reciprocal`] when an exact round trip matters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ZoomFactors {
    zoom_in: f64,
    zoom_out: f64,
}

impl Default for ZoomFactors {
    fn default() -> Self {
        Self {
            zoom_in: DEFAULT_ZOOM_IN,
            zoom_out: DEFAULT_ZOOM_OUT,
        }
    }
}

impl ZoomFactors {
    pub fn new(zoom_in: f64, zoom_out: f64) -> Result<Self, InvalidConfiguration> {
        for factor in [zoom_in, zoom_out] {
            if !(factor.is_finite() && factor > 0.0) {
                return Err(InvalidConfiguration::InvalidZoomFactor(factor));
            }
        }

        Ok(Self { zoom_in, zoom_out })
    }

    /// Zoom-out factor is `1 / zoom_in`, making in-then-out an identity.
    pub fn reciprocal(zoom_in: f64) -> Result<Self, InvalidConfiguration> {
        Self::new(zoom_in, 1.0 / zoom_in)
    }

    #[must_use]
    pub fn zoom_in(&self) -> f64 {
        self.zoom_in
    }

    #[must_use]
    pub fn zoom_out(&self) -> f64 {
        self.zoom_out
    }

    #[must_use]
    pub fn factor(&self, direction: ZoomDirection) -> f64 {
        match direction {
            ZoomDirection::In => self.zoom_in,
            ZoomDirection::Out => self.zoom_out,
        }
    }
}
