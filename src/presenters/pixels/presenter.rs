use std::convert::Infallible;

use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

use crate::controllers::data::rendered_frame::RenderedFrame;
use crate::controllers::ports::frame_presenter::FramePresenterPort;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::raster_spec::RasterSpec;
use crate::core::fractals::mandelbrot::fire_gradient::FireGradient;
use crate::presenters::pixels::overlay::draw_selection_outline;

/// Shows frames in a window through a `pixels` framebuffer of the raster's size.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    width: usize,
    height: usize,
    /// Last presented frame as RGBA, kept so overlays can be redrawn over it.
    base: Vec<u8>,
    last_frame: Option<PixelBuffer>,
}

impl std::fmt::Debug for PixelsPresenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelsPresenter")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("has_frame", &self.last_frame.is_some())
            .finish_non_exhaustive()
    }
}

impl FramePresenterPort for PixelsPresenter {
    type Failure = Infallible;

    fn present(&mut self, frame: RenderedFrame) -> Result<(), Self::Failure> {
        let colour_map = FireGradient::new(frame.grid.max_iterations());
        let buffer = generate_pixel_buffer(&frame.grid, &colour_map);

        buffer.copy_to_rgba(&mut self.base);
        self.last_frame = Some(buffer);

        Ok(())
    }
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, raster: &RasterSpec) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(raster.width(), raster.height(), surface_texture)?;

        Ok(Self {
            pixels,
            width: raster.width() as usize,
            height: raster.height() as usize,
            base: vec![0; raster.pixel_count() * 4],
            last_frame: None,
        })
    }

    /// The colours of the last presented frame, without overlays.
    #[must_use]
    pub fn last_frame(&self) -> Option<&PixelBuffer> {
        self.last_frame.as_ref()
    }

    /// Raster pixel under a physical window position, or `None` outside the frame.
    #[must_use]
    pub fn window_pos_to_pixel(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        self.pixels
            .window_pos_to_pixel((x as f32, y as f32))
            .ok()
            .map(|(px, py)| (px as f64, py as f64))
    }

    pub fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)
    }

    /// Blits the last frame, with the selection rubber band if one is active.
    pub fn draw(&mut self, selection: Option<((f64, f64), (f64, f64))>) -> Result<(), pixels::Error> {
        let frame = self.pixels.frame_mut();

        if self.last_frame.is_some() {
            frame.copy_from_slice(&self.base);
        } else {
            for pixel in frame.chunks_exact_mut(4) {
                pixel.copy_from_slice(&[0, 0, 0, 255]);
            }
        }

        if let Some((a, b)) = selection {
            let to_pixel = |(x, y): (f64, f64)| (x.round() as usize, y.round() as usize);
            draw_selection_outline(frame, self.width, self.height, to_pixel(a), to_pixel(b));
        }

        self.pixels.render()
    }
}
