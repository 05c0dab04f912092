//! The escape-time recurrence shared by the Mandelbrot and Julia sets.

use crate::core::data::complex::Complex;
use crate::core::fractals::fractal_kinds::FractalKinds;

/// Iteration cap used by every frame.
pub const MAX_ITERATIONS: u32 = 200;

/// Squared escape radius (radius 2).
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Outcome of running the recurrence for one point.
///
/// `escaped` is always `count < max_iterations` for the cap the result was
/// computed with.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct IterationResult {
    pub count: u32,
    pub escaped: bool,
}

impl IterationResult {
    /// The orbit left the escape radius during step `count` (0-indexed).
    #[must_use]
    pub const fn escaped_at(count: u32) -> Self {
        Self {
            count,
            escaped: true,
        }
    }

    /// The orbit stayed bounded for the whole cap; the point is in the set.
    #[must_use]
    pub const fn bounded(max_iterations: u32) -> Self {
        Self {
            count: max_iterations,
            escaped: false,
        }
    }
}

/// Iterates `z ← z² + c` from `z0`, testing `|z|² > 4` after each step.
#[must_use]
pub fn escape_time(z0: Complex, c: Complex, max_iterations: u32) -> IterationResult {
    let mut z = z0;

    for iteration in 0..max_iterations {
        z = z * z + c;

        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return IterationResult::escaped_at(iteration);
        }
    }

    IterationResult::bounded(max_iterations)
}

/// Evaluates `point` under the recurrence selected by `kind`.
///
/// Mandelbrot seeds `z = 0` and uses the point as `c`; Julia seeds `z` with
/// the point and uses `julia_constant` as `c`. `julia_constant` is ignored
/// for Mandelbrot.
#[must_use]
pub fn iterate(
    point: Complex,
    kind: FractalKinds,
    julia_constant: Complex,
    max_iterations: u32,
) -> IterationResult {
    match kind {
        FractalKinds::Mandelbrot => escape_time(Complex::ZERO, point, max_iterations),
        FractalKinds::Julia => escape_time(point, julia_constant, max_iterations),
    }
}
