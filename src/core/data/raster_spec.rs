use crate::core::errors::configuration::InvalidConfiguration;

const DEFAULT_WIDTH: u32 = 800;
const DEFAULT_HEIGHT: u32 = 800;
const DEFAULT_MAX_ITERATIONS: u32 = 200;

/// Output resolution and iteration budget, fixed for a session.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RasterSpec {
    width: u32,
    height: u32,
    max_iterations: u32,
}

impl Default for RasterSpec {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl RasterSpec {
    pub fn new(width: u32, height: u32, max_iterations: u32) -> Result<Self, InvalidConfiguration> {
        if width == 0 || height == 0 {
            return Err(InvalidConfiguration::ZeroRasterSize { width, height });
        }

        if max_iterations == 0 {
            return Err(InvalidConfiguration::ZeroMaxIterations);
        }

        Ok(Self {
            width,
            height,
            max_iterations,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
