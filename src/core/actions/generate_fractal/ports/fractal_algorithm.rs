use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::IterationResult;

/// A per-point escape-time evaluation.
///
/// Implementations must be pure: the same point always yields the same
/// result, and evaluating one point never affects another. That is what lets
/// the generators hand rows to separate worker threads.
pub trait FractalAlgorithm {
    fn iterate(&self, point: Complex) -> IterationResult;

    fn max_iterations(&self) -> u32;
}
