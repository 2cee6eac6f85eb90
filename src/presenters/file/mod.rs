pub mod ppm;
pub mod snapshots;
