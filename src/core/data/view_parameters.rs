use crate::core::colour_mapping::cosine_palette::ColourOffset;
use crate::core::data::complex::Complex;
use crate::core::data::resolution::Resolution;
use crate::core::fractals::fractal_kinds::FractalKinds;

pub const DEFAULT_CENTER: Complex = Complex::new(-0.5, 0.0);
pub const DEFAULT_ZOOM: f64 = 1.0;
pub const DEFAULT_JULIA_CONSTANT: Complex = Complex::new(0.355, 0.355);
pub const DEFAULT_COLOUR_OFFSET: ColourOffset = ColourOffset::new(3.0, 1.0, 5.0);
pub const DEFAULT_COLOUR_FREQUENCY: f64 = 6.28;

/// Everything a frame is rendered from.
///
/// `zoom` stays positive as long as it is only ever multiplied or divided by
/// positive factors. `julia_constant` is kept while the Mandelbrot set is shown.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewParameters {
    pub center: Complex,
    pub zoom: f64,
    pub fractal_type: FractalKinds,
    pub julia_constant: Complex,
    pub colour_offset: ColourOffset,
    pub colour_frequency: f64,
    pub resolution: Resolution,
}

impl Default for ViewParameters {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            fractal_type: FractalKinds::default(),
            julia_constant: DEFAULT_JULIA_CONSTANT,
            colour_offset: DEFAULT_COLOUR_OFFSET,
            colour_frequency: DEFAULT_COLOUR_FREQUENCY,
            resolution: Resolution::default(),
        }
    }
}

impl ViewParameters {
    #[must_use]
    pub fn with_resolution(resolution: Resolution) -> Self {
        Self {
            resolution,
            ..Self::default()
        }
    }
}
