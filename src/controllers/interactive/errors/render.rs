use std::error::Error;
use std::fmt;

use crate::core::data::pixel_buffer::PixelBufferError;
use crate::core::data::viewport::ViewportError;
use crate::core::fractals::errors::FractalAlgorithmError;

#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    Viewport(ViewportError),
    Algorithm(FractalAlgorithmError),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Viewport(err) => write!(f, "invalid viewport: {}", err),
            Self::Algorithm(err) => write!(f, "failed to set up fractal algorithm: {}", err),
            Self::PixelBuffer(err) => write!(f, "failed to build pixel buffer: {}", err),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Viewport(err) => Some(err),
            Self::Algorithm(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<ViewportError> for RenderError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

impl From<FractalAlgorithmError> for RenderError {
    fn from(err: FractalAlgorithmError) -> Self {
        Self::Algorithm(err)
    }
}

impl From<PixelBufferError> for RenderError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}
