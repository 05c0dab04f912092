//! Conversion from the renderer's packed RGB to the RGBA framebuffers expect.

use std::error::Error;
use std::fmt;

use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelFormatError {
    SourceNotRgb { src_len: usize },
    SizeMismatch { expected_len: usize, dst_len: usize },
}

impl fmt::Display for PixelFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceNotRgb { src_len } => {
                write!(f, "source length {} is not a multiple of 3", src_len)
            }
            Self::SizeMismatch {
                expected_len,
                dst_len,
            } => write!(
                f,
                "destination length {} does not match expected {}",
                dst_len, expected_len
            ),
        }
    }
}

impl Error for PixelFormatError {}

/// Copies RGB pixels into an RGBA destination with alpha fixed at 255.
///
/// `dst` must hold exactly four bytes for every three in `src`. Nothing is
/// written when the sizes disagree.
pub fn copy_rgb_to_rgba(src: &[u8], dst: &mut [u8]) -> Result<(), PixelFormatError> {
    if src.len() % 3 != 0 {
        return Err(PixelFormatError::SourceNotRgb { src_len: src.len() });
    }

    let expected_len = src.len() / 3 * 4;

    if dst.len() != expected_len {
        return Err(PixelFormatError::SizeMismatch {
            expected_len,
            dst_len: dst.len(),
        });
    }

    for (rgb, rgba) in src.chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
        rgba[..3].copy_from_slice(rgb);
        rgba[3] = u8::MAX;
    }

    Ok(())
}

pub fn copy_pixel_buffer_to_rgba(
    buffer: &PixelBuffer,
    dst: &mut [u8],
) -> Result<(), PixelFormatError> {
    copy_rgb_to_rgba(buffer.buffer(), dst)
}
