use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;

/// Normalised image coordinates. `(0, 0)` is the bottom-left corner of the
/// frame and `(1, 1)` the top-right, as with fragment coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Uv {
    pub u: f64,
    pub v: f64,
}

impl Uv {
    pub const CENTER: Self = Self { u: 0.5, v: 0.5 };

    #[must_use]
    pub const fn new(u: f64, v: f64) -> Self {
        Self { u, v }
    }

    /// Fragment coordinate (bottom-left origin, in pixels) divided by the resolution.
    #[must_use]
    pub fn from_frag_coord(x: f64, y: f64, resolution: Resolution) -> Self {
        Self {
            u: x / f64::from(resolution.width),
            v: y / f64::from(resolution.height),
        }
    }

    /// Centre of a raster pixel. Rows count down from the top of the frame.
    #[must_use]
    pub fn from_pixel_center(pixel: Point, resolution: Resolution) -> Self {
        let frag_x = f64::from(pixel.x) + 0.5;
        let frag_y = f64::from(resolution.height) - f64::from(pixel.y) - 0.5;

        Self::from_frag_coord(frag_x, frag_y, resolution)
    }
}
