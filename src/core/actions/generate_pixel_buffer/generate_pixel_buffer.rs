use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::escape_grid::EscapeGrid;
use crate::core::data::pixel_buffer::PixelBuffer;
use rayon::prelude::*;

/// Colours an escape grid for display, putting the `im_max` row at the top.
#[must_use]
pub fn generate_pixel_buffer<CMap>(grid: &EscapeGrid, mapper: &CMap) -> PixelBuffer
where
    CMap: ColourMap + Sync,
{
    let data: Vec<u8> = grid
        .rows()
        .rev()
        .collect::<Vec<_>>()
        .into_par_iter()
        .flat_map_iter(|row| {
            row.iter().flat_map(|&iterations| {
                let colour = mapper.map(iterations);
                [colour.r, colour.g, colour.b]
            })
        })
        .collect();

    match PixelBuffer::from_data(grid.width(), grid.height(), data) {
        Ok(buffer) => buffer,
        Err(err) => unreachable!("grid rows always fill the buffer: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::raster_spec::RasterSpec;

    #[derive(Debug)]
    struct StubGreyColourMap {}

    impl ColourMap for StubGreyColourMap {
        fn map(&self, iterations: u32) -> Colour {
            let level = iterations as u8;
            Colour {
                r: level,
                g: level,
                b: level,
            }
        }
    }

    #[test]
    fn test_rows_are_flipped_for_display() {
        let raster = RasterSpec::new(2, 2, 9).unwrap();
        let grid = EscapeGrid::from_cells(raster, vec![1, 2, 3, 4]);

        let buffer = generate_pixel_buffer(&grid, &StubGreyColourMap {});

        assert_eq!(buffer.width(), 2);
        assert_eq!(buffer.height(), 2);
        assert_eq!(
            buffer.buffer(),
            &[3, 3, 3, 4, 4, 4, 1, 1, 1, 2, 2, 2][..]
        );
    }

    #[test]
    fn test_buffer_size_matches_grid() {
        let raster = RasterSpec::new(7, 3, 9).unwrap();
        let grid = EscapeGrid::from_cells(raster, vec![0; 21]);

        let buffer = generate_pixel_buffer(&grid, &StubGreyColourMap {});

        assert_eq!(buffer.buffer().len(), 63);
    }
}
