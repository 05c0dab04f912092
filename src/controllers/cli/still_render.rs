use std::path::Path;
use std::time::Instant;

use crate::controllers::interactive::data::fractal_config::FractalConfig;
use crate::controllers::interactive::errors::render::RenderError;
use crate::controllers::interactive::frame_driver::render_pixel_buffer;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::view_parameters::ViewParameters;

/// Renders single frames without a window and hands them to a file presenter.
pub struct StillRenderController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> StillRenderController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn generate(&mut self, params: &ViewParameters) -> Result<(), RenderError> {
        log::info!(
            "rendering {} at {}x{}, center ({}, {}), zoom {}",
            params.fractal_type,
            params.resolution.width,
            params.resolution.height,
            params.center.real,
            params.center.imag,
            params.zoom
        );

        let config = FractalConfig::from_params(params)?;
        let start = Instant::now();
        let buffer = render_pixel_buffer(&config)?;

        log::info!("rendered in {:?}", start.elapsed());

        self.buffer = Some(buffer);

        Ok(())
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    /// Writes the last generated image. Does nothing before the first `generate`.
    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let Some(buffer) = &self.buffer else {
            log::warn!("nothing rendered yet, skipping {}", filepath.as_ref().display());
            return Ok(());
        };

        self.presenter.present(buffer, filepath.as_ref())?;
        log::info!("saved to {}", filepath.as_ref().display());

        Ok(())
    }
}
