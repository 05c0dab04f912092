/// An 8-bit RGB colour as stored in a [`PixelBuffer`](super::pixel_buffer::PixelBuffer).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
}

/// A colour with each channel in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct UnitColour {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl UnitColour {
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Quantises to 8 bits per channel, clamping anything outside `[0, 1]`.
    #[must_use]
    pub fn to_colour(self) -> Colour {
        Colour {
            r: channel_to_u8(self.r),
            g: channel_to_u8(self.g),
            b: channel_to_u8(self.b),
        }
    }
}

fn channel_to_u8(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
