use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{Key as WinitKey, NamedKey};

use crate::controllers::interactive::events::input::{InputEvent, Key, WheelDirection};
use crate::core::data::resolution::Resolution;

/// Translates winit window events into interaction events.
///
/// winit reports button presses without a position, so the last cursor
/// position is remembered here. Positions are emitted in logical pixels so
/// drag speed does not depend on the display's scale factor.
#[derive(Debug)]
pub struct PointerInput {
    cursor: Option<(f64, f64)>,
    pressed: bool,
    scale_factor: f64,
}

impl Default for PointerInput {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl PointerInput {
    #[must_use]
    pub fn new(scale_factor: f64) -> Self {
        Self {
            cursor: None,
            pressed: false,
            scale_factor,
        }
    }

    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.scale_factor = scale_factor;
    }

    /// `egui_consumed` is true when the panel already used the event. Those
    /// events are dropped, except releases that end a drag.
    pub fn translate(&mut self, event: &WindowEvent, egui_consumed: bool) -> Option<InputEvent> {
        match event {
            WindowEvent::Resized(size) => {
                Some(InputEvent::Resize(Resolution::new(size.width, size.height)))
            }
            WindowEvent::CursorMoved { position, .. } => self.cursor_moved(position.x, position.y),
            WindowEvent::MouseInput { state, button, .. } => {
                self.mouse_button(*state, *button, egui_consumed)
            }
            WindowEvent::MouseWheel { delta, .. } if !egui_consumed => {
                Some(InputEvent::Wheel(wheel_direction(*delta)))
            }
            WindowEvent::KeyboardInput { event, .. } if !egui_consumed => {
                key_down(&event.logical_key, event.state)
            }
            _ => None,
        }
    }

    /// Takes the cursor position in physical pixels.
    pub fn cursor_moved(&mut self, x: f64, y: f64) -> Option<InputEvent> {
        let (x, y) = (x / self.scale_factor, y / self.scale_factor);
        self.cursor = Some((x, y));

        self.pressed.then_some(InputEvent::MouseMove { x, y })
    }

    pub fn mouse_button(
        &mut self,
        state: ElementState,
        button: MouseButton,
        egui_consumed: bool,
    ) -> Option<InputEvent> {
        if button != MouseButton::Left {
            return None;
        }

        match state {
            ElementState::Pressed if !egui_consumed => {
                let (x, y) = self.cursor?;
                self.pressed = true;
                Some(InputEvent::MouseDown { x, y })
            }
            ElementState::Pressed => None,
            ElementState::Released => {
                let was_pressed = std::mem::replace(&mut self.pressed, false);
                was_pressed.then_some(InputEvent::MouseUp)
            }
        }
    }
}

/// Positive vertical scroll (wheel pushed away from the user) zooms in.
/// Anything else, including a purely horizontal scroll, zooms out.
#[must_use]
pub fn wheel_direction(delta: MouseScrollDelta) -> WheelDirection {
    let y = match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
        MouseScrollDelta::PixelDelta(position) => position.y,
    };

    if y > 0.0 {
        WheelDirection::Away
    } else {
        WheelDirection::Toward
    }
}

#[must_use]
pub fn key_down(key: &WinitKey, state: ElementState) -> Option<InputEvent> {
    if state != ElementState::Pressed {
        return None;
    }

    let key = match key {
        WinitKey::Named(NamedKey::ArrowLeft) => Key::ArrowLeft,
        WinitKey::Named(NamedKey::ArrowRight) => Key::ArrowRight,
        WinitKey::Named(NamedKey::ArrowUp) => Key::ArrowUp,
        WinitKey::Named(NamedKey::ArrowDown) => Key::ArrowDown,
        WinitKey::Character(text) => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Key::Character(c),
                _ => Key::Other,
            }
        }
        _ => Key::Other,
    };

    Some(InputEvent::KeyDown(key))
}
