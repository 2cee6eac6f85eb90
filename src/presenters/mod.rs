//! Presentation adapters that turn rendered frames into output.

pub mod file;
pub mod pixels;
