use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use crate::core::data::uv::Uv;
use crate::core::util::map_to_fractal_space::map_with_aspect;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    ZeroResolution { width: u32, height: u32 },
    PixelOutsideViewport { pixel: Point, resolution: Resolution },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroResolution { width, height } => {
                write!(f, "viewport resolution must be non-zero: {}x{}", width, height)
            }
            Self::PixelOutsideViewport { pixel, resolution } => {
                write!(
                    f,
                    "pixel (x: {}, y: {}) is outside the {}x{} viewport",
                    pixel.x, pixel.y, resolution.width, resolution.height
                )
            }
        }
    }
}

impl Error for ViewportError {}

/// The part of fractal space visible in a frame of a given size.
///
/// Only constructible for a non-degenerate resolution, so the aspect ratio is
/// always finite.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    resolution: Resolution,
    center: Complex,
    zoom: f64,
    aspect: f64,
}

impl Viewport {
    pub fn new(resolution: Resolution, center: Complex, zoom: f64) -> Result<Self, ViewportError> {
        if resolution.is_degenerate() {
            return Err(ViewportError::ZeroResolution {
                width: resolution.width,
                height: resolution.height,
            });
        }

        Ok(Self {
            resolution,
            center,
            zoom,
            aspect: resolution.aspect_ratio(),
        })
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn uv_to_fractal(&self, uv: Uv) -> Complex {
        map_with_aspect(uv, self.aspect, self.center, self.zoom)
    }

    /// UV of the pixel's centre. Not bounds-checked.
    #[must_use]
    pub fn uv_for_pixel(&self, pixel: Point) -> Uv {
        Uv::from_pixel_center(pixel, self.resolution)
    }

    pub fn pixel_to_fractal(&self, pixel: Point) -> Result<Complex, ViewportError> {
        if !self.resolution.contains_point(pixel) {
            return Err(ViewportError::PixelOutsideViewport {
                pixel,
                resolution: self.resolution,
            });
        }

        Ok(self.uv_to_fractal(self.uv_for_pixel(pixel)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::util::map_to_fractal_space::map_to_fractal_space;

    #[test]
    fn test_zero_resolution_is_rejected() {
        let result = Viewport::new(Resolution::new(0, 600), Complex::ZERO, 1.0);

        assert_eq!(
            result,
            Err(ViewportError::ZeroResolution {
                width: 0,
                height: 600
            })
        );
    }

    #[test]
    fn test_uv_to_fractal_matches_free_function() {
        let resolution = Resolution::new(800, 600);
        let center = Complex::new(-0.5, 0.25);
        let viewport = Viewport::new(resolution, center, 3.0).unwrap();
        let uv = Uv::new(0.2, 0.8);

        assert_eq!(
            viewport.uv_to_fractal(uv),
            map_to_fractal_space(uv, resolution, center, 3.0)
        );
    }

    #[test]
    fn test_top_row_maps_above_center() {
        let viewport = Viewport::new(Resolution::new(4, 4), Complex::ZERO, 1.0).unwrap();
        let top = viewport.pixel_to_fractal(Point { x: 0, y: 0 }).unwrap();
        let bottom = viewport.pixel_to_fractal(Point { x: 0, y: 3 }).unwrap();

        assert!(top.imag > 0.0);
        assert!(bottom.imag < 0.0);
        assert_eq!(top.imag, -bottom.imag);
    }

    #[test]
    fn test_pixel_outside_viewport_fails() {
        let resolution = Resolution::new(10, 10);
        let viewport = Viewport::new(resolution, Complex::ZERO, 1.0).unwrap();
        let pixel = Point { x: 10, y: 3 };

        assert_eq!(
            viewport.pixel_to_fractal(pixel),
            Err(ViewportError::PixelOutsideViewport { pixel, resolution })
        );
    }
}
