use crate::controllers::interactive::panel::{PanelParam, PanelValue};
use crate::core::data::resolution::Resolution;

/// Scroll direction, relative to the user.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WheelDirection {
    /// Scrolling up, away from the user. Zooms in.
    Away,
    /// Scrolling down, toward the user. Zooms out.
    Toward,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Key {
    Character(char),
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Other,
}

/// Discrete input delivered by the windowing layer or the parameter panel.
///
/// Pointer positions are in physical pixels, origin top-left.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    Resize(Resolution),
    Wheel(WheelDirection),
    MouseDown { x: f64, y: f64 },
    MouseMove { x: f64, y: f64 },
    MouseUp,
    KeyDown(Key),
    PanelChange(PanelParam, PanelValue),
    ResetView,
}
