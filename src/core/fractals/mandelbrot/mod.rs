pub mod algorithm;
pub mod fire_gradient;
