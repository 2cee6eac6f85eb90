use std::path::{Path, PathBuf};

use log::info;

use crate::core::data::pixel_buffer::PixelBuffer;
use crate::presenters::file::ppm::{PpmError, save_ppm};

/// Numbered PPM snapshots in one directory: `mandelbrot_001.ppm`,
/// `mandelbrot_002.ppm` and so on. Existing files are never overwritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotDirectory {
    dir: PathBuf,
}

impl SnapshotDirectory {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// First numbered path that does not exist yet.
    #[must_use]
    pub fn next_path(&self) -> PathBuf {
        let mut index = 1;

        loop {
            let path = self.dir.join(format!("mandelbrot_{index:03}.ppm"));
            if !path.exists() {
                return path;
            }
            index += 1;
        }
    }

    /// Writes `buffer` to the next free path, creating the directory if needed.
    pub fn save(&self, buffer: &PixelBuffer) -> Result<PathBuf, PpmError> {
        std::fs::create_dir_all(&self.dir).map_err(|source| PpmError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.next_path();
        save_ppm(buffer, &path)?;
        info!("saved {}x{} snapshot to {}", buffer.width(), buffer.height(), path.display());

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "mandelbrot_explorer_{name}_{}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_save_numbers_snapshots_in_order() {
        let dir = scratch_dir("snapshots_order");
        let snapshots = SnapshotDirectory::new(dir.join("nested"));
        let buffer = PixelBuffer::from_data(1, 1, vec![7, 8, 9]).unwrap();

        let first = snapshots.save(&buffer).unwrap();
        let second = snapshots.save(&buffer).unwrap();
        let written = std::fs::read(&second).unwrap();
        std::fs::remove_dir_all(&dir).unwrap();

        assert_eq!(first, dir.join("nested").join("mandelbrot_001.ppm"));
        assert_eq!(second, dir.join("nested").join("mandelbrot_002.ppm"));
        assert_eq!(written, b"P6\n1 1\n255\n\x07\x08\x09".to_vec());
    }

    #[test]
    fn test_next_path_skips_existing_files() {
        let dir = scratch_dir("snapshots_skip");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("mandelbrot_001.ppm"), b"taken").unwrap();

        let next = SnapshotDirectory::new(&dir).next_path();
        std::fs::remove_dir_all(&dir).unwrap();

        assert_eq!(next, dir.join("mandelbrot_002.ppm"));
    }
}
