//! Periodic cosine palette: each channel is `0.5 + 0.5 * cos(frequency * t + offset)`.

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::{Colour, UnitColour};
use crate::core::fractals::escape_time::IterationResult;

/// Per-channel phase shift. Conventionally within `[0, 10]`, never clamped.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColourOffset {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl ColourOffset {
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

/// The continuous palette, with period `2π / frequency` in `t`.
#[must_use]
pub fn cosine_palette(t: f64, offset: ColourOffset, frequency: f64) -> UnitColour {
    let channel = |phase: f64| 0.5 + 0.5 * (frequency * t + phase).cos();

    UnitColour {
        r: channel(offset.r),
        g: channel(offset.g),
        b: channel(offset.b),
    }
}

/// Colours an iteration result. Points that never escaped are black; the rest
/// sample the palette at `count / max_iterations`.
#[must_use]
pub fn colorize(
    result: IterationResult,
    offset: ColourOffset,
    frequency: f64,
    max_iterations: u32,
) -> UnitColour {
    if !result.escaped {
        return UnitColour::BLACK;
    }

    let t = f64::from(result.count) / f64::from(max_iterations);
    cosine_palette(t, offset, frequency)
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CosinePalette {
    offset: ColourOffset,
    frequency: f64,
    max_iterations: u32,
}

impl ColourMap<IterationResult> for CosinePalette {
    fn map(&self, value: IterationResult) -> Colour {
        self.colorize(value).to_colour()
    }
}

impl CosinePalette {
    #[must_use]
    pub fn new(offset: ColourOffset, frequency: f64, max_iterations: u32) -> Self {
        Self {
            offset,
            frequency,
            max_iterations,
        }
    }

    #[must_use]
    pub fn colorize(&self, result: IterationResult) -> UnitColour {
        colorize(result, self.offset, self.frequency, self.max_iterations)
    }
}
