pub mod fractal_config;
pub mod frame;
