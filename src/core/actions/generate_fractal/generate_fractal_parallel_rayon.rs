use rayon::prelude::*;

use crate::core::actions::generate_fractal::generate_fractal_serial::evaluate_pixel;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::escape_time::IterationResult;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// Rows are distributed across the pool; every pixel is evaluated
/// independently from the same immutable viewport and algorithm. Output
/// order matches [`generate_fractal_serial`](super::generate_fractal_serial::generate_fractal_serial).
pub fn generate_fractal_parallel_rayon<Alg>(
    viewport: &Viewport,
    algorithm: &Alg,
) -> Vec<IterationResult>
where
    Alg: FractalAlgorithm + Sync,
{
    let resolution = viewport.resolution();
    let row_width = resolution.width as usize;

    let rows: Vec<Vec<IterationResult>> = (0..resolution.height)
        .into_par_iter()
        .map(|y| {
            let mut row = Vec::with_capacity(row_width);

            for x in 0..resolution.width {
                row.push(evaluate_pixel(viewport, algorithm, Point { x, y }));
            }

            row
        })
        .collect();

    rows.into_iter().flatten().collect()
}
