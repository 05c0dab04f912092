use std::time::Instant;

use crate::controllers::interactive::data::fractal_config::FractalConfig;
use crate::controllers::interactive::data::frame::Frame;
use crate::controllers::interactive::errors::render::RenderError;
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::view_parameters::ViewParameters;
use crate::core::fractals::escape_time::MAX_ITERATIONS;

/// Evaluates and colours every pixel of `config`, rows in parallel.
pub fn render_pixel_buffer(config: &FractalConfig) -> Result<PixelBuffer, RenderError> {
    let viewport = config.viewport();
    let fractal = generate_fractal_parallel_rayon(viewport, config.algorithm());

    Ok(generate_pixel_buffer(
        fractal,
        config.colour_map(),
        viewport.resolution(),
    )?)
}

/// Re-renders the whole frame from the current parameters on every tick.
#[derive(Debug)]
pub struct FrameDriver {
    start: Instant,
    frames_rendered: u64,
    max_iterations: u32,
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameDriver {
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_iterations(MAX_ITERATIONS)
    }

    #[must_use]
    pub fn with_max_iterations(max_iterations: u32) -> Self {
        Self {
            start: Instant::now(),
            frames_rendered: 0,
            max_iterations,
        }
    }

    /// Seconds since the driver was created.
    #[must_use]
    pub fn elapsed_seconds(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Renders one frame from a snapshot of `params`.
    ///
    /// Returns `Ok(None)` without rendering when either dimension of the
    /// resolution is zero.
    pub fn render_frame(&mut self, params: &ViewParameters) -> Result<Option<Frame>, RenderError> {
        if params.resolution.is_degenerate() {
            log::trace!(
                "skipping frame for {}x{} resolution",
                params.resolution.width,
                params.resolution.height
            );
            return Ok(None);
        }

        let time_seconds = self.elapsed_seconds();
        let config = FractalConfig::new(params, self.max_iterations)?;

        let start = Instant::now();
        let pixel_buffer = render_pixel_buffer(&config)?;
        let render_duration = start.elapsed();

        self.frames_rendered += 1;

        log::trace!(
            "frame {} rendered in {:?} ({}x{})",
            self.frames_rendered,
            render_duration,
            params.resolution.width,
            params.resolution.height
        );

        Ok(Some(Frame {
            number: self.frames_rendered,
            time_seconds,
            pixel_buffer,
            render_duration,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
    use crate::core::data::colour::Colour;
    use crate::core::data::complex::Complex;
    use crate::core::data::point::Point;
    use crate::core::data::resolution::Resolution;
    use crate::core::data::uv::Uv;
    use crate::core::fractals::errors::FractalAlgorithmError;
    use crate::core::fractals::escape_time::IterationResult;
    use crate::core::fractals::fractal_kinds::FractalKinds;

    #[test]
    fn test_zero_resolution_skips_frame() {
        let mut driver = FrameDriver::new();

        for resolution in [
            Resolution::new(0, 0),
            Resolution::new(0, 600),
            Resolution::new(800, 0),
        ] {
            let frame = driver
                .render_frame(&ViewParameters::with_resolution(resolution))
                .unwrap();

            assert!(frame.is_none());
        }

        assert_eq!(driver.frames_rendered(), 0);
    }

    #[test]
    fn test_default_view_renders_full_frame() {
        let mut driver = FrameDriver::new();
        let params = ViewParameters::with_resolution(Resolution::new(800, 600));

        let frame = driver.render_frame(&params).unwrap().unwrap();
        let buffer = &frame.pixel_buffer;

        assert_eq!(frame.number, 1);
        assert!(frame.time_seconds >= 0.0);
        assert_eq!(buffer.resolution(), Resolution::new(800, 600));
        assert_eq!(buffer.buffer_size(), 800 * 600 * 3);

        // Centre sits inside the main cardioid.
        assert_eq!(buffer.pixel(Point { x: 400, y: 300 }), Ok(Colour::BLACK));
        // Top-left corner escapes on the first step.
        assert_eq!(
            buffer.pixel(Point { x: 0, y: 0 }),
            Ok(Colour {
                r: 1,
                g: 196,
                b: 164
            })
        );
    }

    #[test]
    fn test_frame_center_maps_to_view_center_in_set() {
        let params = ViewParameters::with_resolution(Resolution::new(800, 600));
        let config = FractalConfig::from_params(&params).unwrap();

        let point = config.viewport().uv_to_fractal(Uv::CENTER);

        assert_eq!(point, Complex::new(-0.5, 0.0));
        assert_eq!(
            config.algorithm().iterate(point),
            IterationResult::bounded(MAX_ITERATIONS)
        );
    }

    #[test]
    fn test_frames_are_numbered_and_recomputed() {
        let mut driver = FrameDriver::new();
        let params = ViewParameters::with_resolution(Resolution::new(16, 12));

        let first = driver.render_frame(&params).unwrap().unwrap();
        let second = driver.render_frame(&params).unwrap().unwrap();

        assert_eq!(first.number, 1);
        assert_eq!(second.number, 2);
        assert_eq!(first.pixel_buffer, second.pixel_buffer);
        assert!(second.time_seconds >= first.time_seconds);
    }

    #[test]
    fn test_parameters_change_output() {
        let mut driver = FrameDriver::new();
        let mandelbrot = ViewParameters::with_resolution(Resolution::new(16, 12));
        let julia = ViewParameters {
            fractal_type: FractalKinds::Julia,
            center: Complex::ZERO,
            ..mandelbrot
        };

        let a = driver.render_frame(&mandelbrot).unwrap().unwrap();
        let b = driver.render_frame(&julia).unwrap().unwrap();

        assert_ne!(a.pixel_buffer, b.pixel_buffer);
    }

    #[test]
    fn test_zero_iteration_cap_is_an_error() {
        let mut driver = FrameDriver::with_max_iterations(0);
        let params = ViewParameters::with_resolution(Resolution::new(4, 4));

        assert_eq!(
            driver.render_frame(&params),
            Err(RenderError::Algorithm(FractalAlgorithmError::ZeroMaxIterations))
        );
    }
}
