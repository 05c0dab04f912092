use crate::controllers::interactive::errors::render::RenderError;
use crate::core::colour_mapping::cosine_palette::CosinePalette;
use crate::core::data::view_parameters::ViewParameters;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::escape_time::MAX_ITERATIONS;
use crate::core::fractals::selected_algorithm::SelectedAlgorithm;

/// Immutable render setup built from a parameter snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractalConfig {
    viewport: Viewport,
    algorithm: SelectedAlgorithm,
    colour_map: CosinePalette,
}

impl FractalConfig {
    pub fn new(params: &ViewParameters, max_iterations: u32) -> Result<Self, RenderError> {
        let viewport = Viewport::new(params.resolution, params.center, params.zoom)?;
        let algorithm =
            SelectedAlgorithm::new(params.fractal_type, params.julia_constant, max_iterations)?;
        let colour_map = CosinePalette::new(
            params.colour_offset,
            params.colour_frequency,
            max_iterations,
        );

        Ok(Self {
            viewport,
            algorithm,
            colour_map,
        })
    }

    pub fn from_params(params: &ViewParameters) -> Result<Self, RenderError> {
        Self::new(params, MAX_ITERATIONS)
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn algorithm(&self) -> &SelectedAlgorithm {
        &self.algorithm
    }

    #[must_use]
    pub fn colour_map(&self) -> &CosinePalette {
        &self.colour_map
    }
}
