mod adapters;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use adapters::pixel_format::{PixelFormatError, copy_pixel_buffer_to_rgba, copy_rgb_to_rgba};
pub use controllers::cli::still_render::StillRenderController;
pub use controllers::interactive::data::fractal_config::FractalConfig;
pub use controllers::interactive::errors::render::RenderError;
pub use controllers::interactive::frame_driver::render_pixel_buffer;
pub use controllers::interactive::interaction::{DRAG_SCALE, JULIA_NUDGE, ZOOM_STEP};
pub use controllers::interactive::panel::PanelEditError;
pub use controllers::interactive::{
    Frame, FrameDriver, InputEvent, InteractionState, Key, PANEL_TABLE, PanelEntry, PanelKind,
    PanelParam, PanelValue, WheelDirection,
};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use presenters::file::ppm::PpmFilePresenter;

// `core` shadows the built-in crate here, so these go through `crate::`.
pub use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
pub use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
pub use crate::core::colour_mapping::cosine_palette::{
    ColourOffset, CosinePalette, colorize, cosine_palette,
};
pub use crate::core::data::colour::{Colour, UnitColour};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::data::resolution::Resolution;
pub use crate::core::data::uv::Uv;
pub use crate::core::data::view_parameters::ViewParameters;
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::errors::FractalAlgorithmError;
pub use crate::core::fractals::escape_time::{
    ESCAPE_RADIUS_SQUARED, IterationResult, MAX_ITERATIONS, escape_time, iterate,
};
pub use crate::core::fractals::fractal_kinds::FractalKinds;
pub use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
pub use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
pub use crate::core::fractals::selected_algorithm::SelectedAlgorithm;
pub use crate::core::util::map_to_fractal_space::{fractal_to_uv, map_to_fractal_space};

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
