use std::time::Duration;

use crate::core::data::pixel_buffer::PixelBuffer;

/// One rendered frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Counts rendered frames from 1.
    pub number: u64,
    /// Seconds since the driver started. Not used by evaluation.
    pub time_seconds: f64,
    pub pixel_buffer: PixelBuffer,
    pub render_duration: Duration,
}
