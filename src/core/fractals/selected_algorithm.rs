use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::fractals::errors::FractalAlgorithmError;
use crate::core::fractals::escape_time::IterationResult;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;

/// The algorithm for whichever fractal is currently selected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectedAlgorithm {
    Mandelbrot(MandelbrotAlgorithm),
    Julia(JuliaAlgorithm),
}

impl SelectedAlgorithm {
    pub fn new(
        kind: FractalKinds,
        julia_constant: Complex,
        max_iterations: u32,
    ) -> Result<Self, FractalAlgorithmError> {
        Ok(match kind {
            FractalKinds::Mandelbrot => Self::Mandelbrot(MandelbrotAlgorithm::new(max_iterations)?),
            FractalKinds::Julia => Self::Julia(JuliaAlgorithm::new(julia_constant, max_iterations)?),
        })
    }

    #[must_use]
    pub fn kind(&self) -> FractalKinds {
        match self {
            Self::Mandelbrot(_) => FractalKinds::Mandelbrot,
            Self::Julia(_) => FractalKinds::Julia,
        }
    }
}

impl FractalAlgorithm for SelectedAlgorithm {
    fn iterate(&self, point: Complex) -> IterationResult {
        match self {
            Self::Mandelbrot(algorithm) => algorithm.iterate(point),
            Self::Julia(algorithm) => algorithm.iterate(point),
        }
    }

    fn max_iterations(&self) -> u32 {
        match self {
            Self::Mandelbrot(algorithm) => algorithm.max_iterations(),
            Self::Julia(algorithm) => algorithm.max_iterations(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::escape_time::{MAX_ITERATIONS, iterate};

    #[test]
    fn test_builds_variant_for_kind() {
        for &kind in FractalKinds::ALL {
            let algorithm = SelectedAlgorithm::new(kind, Complex::new(0.355, 0.355), 50).unwrap();

            assert_eq!(algorithm.kind(), kind);
            assert_eq!(algorithm.max_iterations(), 50);
        }
    }

    #[test]
    fn test_matches_free_iterate() {
        let constant = Complex::new(0.355, 0.355);
        let points = [
            Complex::ZERO,
            Complex::new(-0.5, 0.0),
            Complex::new(0.4, 0.4),
            Complex::new(-1.2, 0.3),
        ];

        for &kind in FractalKinds::ALL {
            let algorithm = SelectedAlgorithm::new(kind, constant, MAX_ITERATIONS).unwrap();

            for &point in &points {
                assert_eq!(
                    algorithm.iterate(point),
                    iterate(point, kind, constant, MAX_ITERATIONS)
                );
            }
        }
    }

    #[test]
    fn test_zero_cap_is_rejected_for_both_kinds() {
        for &kind in FractalKinds::ALL {
            assert_eq!(
                SelectedAlgorithm::new(kind, Complex::ZERO, 0),
                Err(FractalAlgorithmError::ZeroMaxIterations)
            );
        }
    }
}
