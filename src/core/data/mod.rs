pub mod colour;
pub mod complex;
pub mod pixel_buffer;
pub mod point;
pub mod resolution;
pub mod uv;
pub mod view_parameters;
pub mod viewport;
