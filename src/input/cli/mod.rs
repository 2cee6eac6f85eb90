pub mod args;
pub mod navigation_step;
