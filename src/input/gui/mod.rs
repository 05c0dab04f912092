//! Windowed front end: winit event loop, pixels framebuffer and an egui
//! parameter panel.

pub mod app;
pub mod commands;
