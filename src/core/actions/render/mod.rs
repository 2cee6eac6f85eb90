pub mod ports;
pub mod render_escape_grid;
