use crate::core::actions::render::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::raster_spec::RasterSpec;

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Escape-time iteration of `z ← z² + c` from `z = 0`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    /// Smallest `i < max_iterations` with `|z_i| ≥ 2`, or `max_iterations` if none.
    fn compute(&self, c: Complex) -> u32 {
        let mut z = Complex::ZERO;

        for iteration in 0..self.max_iterations {
            // An overflowed magnitude is infinite and still compares as escaped.
            if z.magnitude_squared() >= ESCAPE_RADIUS_SQUARED {
                return iteration;
            }
            z = z * z + c;
        }

        self.max_iterations
    }
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(raster: &RasterSpec) -> Self {
        Self {
            max_iterations: raster.max_iterations(),
        }
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}
