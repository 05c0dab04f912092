//! Interactive fractal viewing.
//!
//! [`InteractionState`] owns the live view parameters and applies input
//! events to them. [`FrameDriver`] renders a full frame from a snapshot of
//! those parameters on every display tick.

pub mod data;
pub mod errors;
pub mod events;
pub mod frame_driver;
pub mod interaction;
pub mod panel;

pub use data::frame::Frame;
pub use events::input::{InputEvent, Key, WheelDirection};
pub use frame_driver::FrameDriver;
pub use interaction::InteractionState;
pub use panel::{PANEL_TABLE, PanelEntry, PanelKind, PanelParam, PanelValue};
