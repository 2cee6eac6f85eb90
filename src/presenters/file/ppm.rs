use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;
use thiserror::Error;

use crate::controllers::data::rendered_frame::RenderedFrame;
use crate::controllers::ports::frame_presenter::FramePresenterPort;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::mandelbrot::fire_gradient::FireGradient;

#[derive(Debug, Error)]
pub enum PpmError {
    #[error("failed to write '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Writes every presented frame to the same binary PPM file, overwriting it.
#[derive(Debug)]
pub struct PpmFilePresenter {
    filepath: PathBuf,
    frames_written: usize,
}

impl FramePresenterPort for PpmFilePresenter {
    type Failure = PpmError;

    fn present(&mut self, frame: RenderedFrame) -> Result<(), Self::Failure> {
        let colour_map = FireGradient::new(frame.grid.max_iterations());
        let buffer = generate_pixel_buffer(&frame.grid, &colour_map);

        save_ppm(&buffer, &self.filepath)?;

        self.frames_written += 1;
        info!(
            "saved re [{}, {}] im [{}, {}] to {}",
            frame.view.re_min(),
            frame.view.re_max(),
            frame.view.im_min(),
            frame.view.im_max(),
            self.filepath.display()
        );

        Ok(())
    }
}

impl PpmFilePresenter {
    pub fn new(filepath: impl AsRef<Path>) -> Self {
        Self {
            filepath: filepath.as_ref().to_path_buf(),
            frames_written: 0,
        }
    }

    #[must_use]
    pub fn frames_written(&self) -> usize {
        self.frames_written
    }
}

/// Writes `buffer` to a new file at `path`, replacing any existing one.
pub fn save_ppm(buffer: &PixelBuffer, path: &Path) -> Result<(), PpmError> {
    let io_error = |source| PpmError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    write_ppm(buffer, &mut writer)
        .and_then(|()| writer.flush())
        .map_err(io_error)
}

pub fn write_ppm<W: Write>(buffer: &PixelBuffer, out: &mut W) -> std::io::Result<()> {
    // PPM header: P6 means binary RGB, then width, height and max_colour
    writeln!(out, "P6")?;
    writeln!(out, "{} {}", buffer.width(), buffer.height())?;
    writeln!(out, "255")?;
    out.write_all(buffer.buffer())
}
