use thiserror::Error;

const BYTES_PER_PIXEL: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelBufferError {
    #[error("expected {expected} bytes for the buffer dimensions, got {actual}")]
    BoundsMismatch { expected: usize, actual: usize },
}

pub type PixelBufferData = Vec<u8>;

/// Packed RGB image, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    pub fn from_data(
        width: usize,
        height: usize,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let expected = width * height * BYTES_PER_PIXEL;

        if expected != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected,
                actual: buffer.len(),
            });
        }

        Ok(Self {
            width,
            height,
            buffer,
        })
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
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Writes the buffer as RGBA with opaque alpha into `dst`.
    ///
    /// # Panics
    /// Panics if `dst` is not exactly `width * height * 4` bytes.
    pub fn copy_to_rgba(&self, dst: &mut [u8]) {
        let expected = self.width * self.height * 4;
        assert_eq!(
            dst.len(),
            expected,
            "rgba frame length {} does not match expected {} for {}x{}",
            dst.len(),
            expected,
            self.width,
            self.height
        );

        for (src_pixel, dst_pixel) in self
            .buffer
            .chunks_exact(BYTES_PER_PIXEL)
            .zip(dst.chunks_exact_mut(4))
        {
            dst_pixel[..3].copy_from_slice(src_pixel);
            dst_pixel[3] = 255;
        }
    }
}
