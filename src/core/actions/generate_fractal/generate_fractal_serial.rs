use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::escape_time::IterationResult;

/// Evaluates every pixel of the viewport on the calling thread, row-major
/// from the top-left.
pub fn generate_fractal_serial<Alg: FractalAlgorithm>(
    viewport: &Viewport,
    algorithm: &Alg,
) -> Vec<IterationResult> {
    let resolution = viewport.resolution();

    (0..resolution.height)
        .flat_map(|y| (0..resolution.width).map(move |x| Point { x, y }))
        .map(|pixel| evaluate_pixel(viewport, algorithm, pixel))
        .collect()
}

pub(crate) fn evaluate_pixel<Alg: FractalAlgorithm + ?Sized>(
    viewport: &Viewport,
    algorithm: &Alg,
    pixel: Point,
) -> IterationResult {
    algorithm.iterate(viewport.uv_to_fractal(viewport.uv_for_pixel(pixel)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::data::resolution::Resolution;

    #[derive(Debug)]
    struct StubAlgorithm {}

    impl FractalAlgorithm for StubAlgorithm {
        fn iterate(&self, point: Complex) -> IterationResult {
            // Encode which quadrant the point fell in
            let quadrant = u32::from(point.real > 0.0) + 2 * u32::from(point.imag > 0.0);
            IterationResult::escaped_at(quadrant)
        }

        fn max_iterations(&self) -> u32 {
            10
        }
    }

    #[test]
    fn test_results_are_row_major_from_top_left() {
        let viewport = Viewport::new(Resolution::new(2, 2), Complex::ZERO, 1.0).unwrap();
        let counts: Vec<u32> = generate_fractal_serial(&viewport, &StubAlgorithm {})
            .into_iter()
            .map(|result| result.count)
            .collect();

        // top-left, top-right, bottom-left, bottom-right
        assert_eq!(counts, vec![2, 3, 0, 1]);
    }

    #[test]
    fn test_one_result_per_pixel() {
        let viewport = Viewport::new(Resolution::new(7, 3), Complex::ZERO, 1.0).unwrap();
        let results = generate_fractal_serial(&viewport, &StubAlgorithm {});

        assert_eq!(results.len(), 21);
    }
}
