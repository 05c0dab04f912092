use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::fractals::errors::FractalAlgorithmError;
use crate::core::fractals::escape_time::{IterationResult, escape_time};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    fn iterate(&self, point: Complex) -> IterationResult {
        escape_time(Complex::ZERO, point, self.max_iterations)
    }

    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl MandelbrotAlgorithm {
    pub fn new(max_iterations: u32) -> Result<Self, FractalAlgorithmError> {
        if max_iterations == 0 {
            return Err(FractalAlgorithmError::ZeroMaxIterations);
        }

        Ok(Self { max_iterations })
    }
}
