use crate::core::data::complex::Complex;

pub trait FractalAlgorithm {
    fn compute(&self, c: Complex) -> u32;
}
