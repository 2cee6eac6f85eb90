use crate::core::data::complex::Complex;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewRectError {
    #[error(
        "view bounds must be finite with positive extent: re [{re_min}, {re_max}], im [{im_min}, {im_max}]"
    )]
    InvalidBounds {
        re_min: f64,
        re_max: f64,
        im_min: f64,
        im_max: f64,
    },
}

/// Axis-aligned region of the complex plane.
///
/// Always satisfies `re_min < re_max` and `im_min < im_max` with finite bounds,
/// so every operation that produces a new rectangle goes through [`ViewRect::new`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewRect {
    re_min: f64,
    re_max: f64,
    im_min: f64,
    im_max: f64,
}

impl Default for ViewRect {
    fn default() -> Self {
        Self {
            re_min: -2.0,
            re_max: 1.0,
            im_min: -1.5,
            im_max: 1.5,
        }
    }
}

impl ViewRect {
    pub fn new(re_min: f64, re_max: f64, im_min: f64, im_max: f64) -> Result<Self, ViewRectError> {
        let finite = [re_min, re_max, im_min, im_max]
            .iter()
            .all(|bound| bound.is_finite());

        // Subtracting also catches extents that overflow to infinity.
        let width = re_max - re_min;
        let height = im_max - im_min;

        if !finite || !(width > 0.0 && width.is_finite()) || !(height > 0.0 && height.is_finite()) {
            return Err(ViewRectError::InvalidBounds {
                re_min,
                re_max,
                im_min,
                im_max,
            });
        }

        Ok(Self {
            re_min,
            re_max,
            im_min,
            im_max,
        })
    }

    /// Bounding box of two opposite corners given in any order.
    pub fn from_corners(a: Complex, b: Complex) -> Result<Self, ViewRectError> {
        Self::new(
            a.real.min(b.real),
            a.real.max(b.real),
            a.imag.min(b.imag),
            a.imag.max(b.imag),
        )
    }

    #[must_use]
    pub fn re_min(&self) -> f64 {
        self.re_min
    }

    #[must_use]
    pub fn re_max(&self) -> f64 {
        self.re_max
    }

    #[must_use]
    pub fn im_min(&self) -> f64 {
        self.im_min
    }

    #[must_use]
    pub fn im_max(&self) -> f64 {
        self.im_max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.re_max - self.re_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.im_max - self.im_min
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex {
            real: self.re_min + self.width() / 2.0,
            imag: self.im_min + self.height() / 2.0,
        }
    }

    #[must_use]
    pub fn contains_point(&self, point: Complex) -> bool {
        self.re_min <= point.real
            && self.im_min <= point.imag
            && self.re_max >= point.real
            && self.im_max >= point.imag
    }

    /// Position of `point` as a fraction of the extent on each axis.
    ///
    /// `(0, 0)` is `(re_min, im_min)` and `(1, 1)` is `(re_max, im_max)`;
    /// points outside the rectangle give values outside `[0, 1]`.
    #[must_use]
    pub fn relative_position(&self, point: Complex) -> (f64, f64) {
        (
            (point.real - self.re_min) / self.width(),
            (point.imag - self.im_min) / self.height(),
        )
    }

    /// Point at a relative position; the inverse of [`ViewRect::relative_position`].
    #[must_use]
    pub fn point_at(&self, (x_rel, y_rel): (f64, f64)) -> Complex {
        Complex {
            real: self.re_min + x_rel * self.width(),
            imag: self.im_min + y_rel * self.height(),
        }
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Result<Self, ViewRectError> {
        Self::new(
            self.re_min + dx,
            self.re_max + dx,
            self.im_min + dy,
            self.im_max + dy,
        )
    }

    /// Rescales the extent by `factor` while `anchor` keeps its relative position.
    pub fn scaled_about(&self, anchor: Complex, factor: f64) -> Result<Self, ViewRectError> {
        let (x_rel, y_rel) = self.relative_position(anchor);
        let width = self.width() * factor;
        let height = self.height() * factor;

        Self::new(
            anchor.real - width * x_rel,
            anchor.real + width * (1.0 - x_rel),
            anchor.imag - height * y_rel,
            anchor.imag + height * (1.0 - y_rel),
        )
    }
}
