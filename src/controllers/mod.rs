pub mod data;
pub mod explorer;
pub mod ports;
pub mod viewport;
