use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};
use crate::core::data::resolution::Resolution;

/// Generates a pixel buffer by mapping input values to colours.
///
/// Streams RGB bytes into a buffer preallocated to `resolution.pixel_count() * 3`.
/// Fails only when `input` does not hold exactly one value per pixel.
pub fn generate_pixel_buffer<T, CMap: ColourMap<T>>(
    input: Vec<T>,
    mapper: &CMap,
    resolution: Resolution,
) -> Result<PixelBuffer, PixelBufferError> {
    let mut buffer: PixelBufferData = Vec::with_capacity(resolution.pixel_count() * 3);

    for value in input {
        let Colour { r, g, b } = mapper.map(value);

        buffer.push(r);
        buffer.push(g);
        buffer.push(b);
    }

    PixelBuffer::from_data(resolution, buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct StubColourMap {}

    impl ColourMap<u8> for StubColourMap {
        fn map(&self, value: u8) -> Colour {
            Colour {
                r: value,
                g: value,
                b: value,
            }
        }
    }

    #[test]
    fn test_generates_pixel_buffer_correctly() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let resolution = Resolution::new(3, 2);
        let expected_buffer: PixelBufferData =
            vec![1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 6, 6, 6];

        let results = generate_pixel_buffer(input, &StubColourMap {}, resolution).unwrap();

        assert_eq!(results.buffer(), &expected_buffer);
        assert_eq!(results.resolution(), resolution);
        assert_eq!(results.buffer_size(), 18);
    }

    #[test]
    fn test_resolution_input_size_mismatch_returns_err() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let results = generate_pixel_buffer(input, &StubColourMap {}, Resolution::new(2, 2));

        assert_eq!(
            results,
            Err(PixelBufferError::BoundsMismatch {
                resolution_size: 12,
                buffer_size: 18
            })
        );
    }

    #[test]
    fn test_empty_input_for_empty_resolution() {
        let results = generate_pixel_buffer(Vec::<u8>::new(), &StubColourMap {}, Resolution::new(0, 0));

        assert_eq!(results.map(|buffer| buffer.buffer_size()), Ok(0));
    }
}
