pub mod colour;
pub mod complex;
pub mod escape_grid;
pub mod pixel_buffer;
pub mod raster_spec;
pub mod view_rect;
