pub mod configuration;
pub mod navigation;
