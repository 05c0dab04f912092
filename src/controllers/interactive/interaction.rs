use crate::controllers::interactive::events::input::{InputEvent, Key, WheelDirection};
use crate::controllers::interactive::panel::{PanelEditError, PanelParam, PanelValue};
use crate::core::data::complex::Complex;
use crate::core::data::resolution::Resolution;
use crate::core::data::view_parameters::{DEFAULT_CENTER, DEFAULT_ZOOM, ViewParameters};
use crate::core::fractals::fractal_kinds::FractalKinds;

/// Multiplier applied to zoom per wheel notch.
pub const ZOOM_STEP: f64 = 1.1;
/// Fractal units per screen pixel of drag, at zoom 1.
pub const DRAG_SCALE: f64 = 0.002;
/// Julia constant change per arrow key press.
pub const JULIA_NUDGE: f64 = 0.01;

/// Past this zoom the spacing between neighbouring f64 coordinates is larger
/// than a pixel and the image breaks up.
const PRECISION_ZOOM_LIMIT: f64 = 1e13;

/// Pointer anchor while a drag is in progress.
#[derive(Debug, Copy, Clone, PartialEq)]
struct DragAnchor {
    x: f64,
    y: f64,
}

/// Owns the live [`ViewParameters`] and applies input events to them.
///
/// Every event is accepted at any time; a mouse move outside a drag does nothing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InteractionState {
    params: ViewParameters,
    drag: Option<DragAnchor>,
}

impl InteractionState {
    #[must_use]
    pub fn new(params: ViewParameters) -> Self {
        Self { params, drag: None }
    }

    /// Copy of the parameters as they stand now.
    #[must_use]
    pub fn snapshot(&self) -> ViewParameters {
        self.params
    }

    #[must_use]
    pub fn params(&self) -> &ViewParameters {
        &self.params
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn handle_event(&mut self, event: InputEvent) -> Result<(), PanelEditError> {
        match event {
            InputEvent::Resize(resolution) => self.on_resize(resolution),
            InputEvent::Wheel(direction) => self.on_wheel(direction),
            InputEvent::MouseDown { x, y } => self.on_mouse_down(x, y),
            InputEvent::MouseMove { x, y } => self.on_mouse_move(x, y),
            InputEvent::MouseUp => self.on_mouse_up(),
            InputEvent::KeyDown(key) => self.on_key_down(key),
            InputEvent::PanelChange(param, value) => return self.apply_panel_edit(param, value),
            InputEvent::ResetView => self.reset_view(),
        }

        Ok(())
    }

    pub fn on_wheel(&mut self, direction: WheelDirection) {
        match direction {
            WheelDirection::Away => self.params.zoom *= ZOOM_STEP,
            WheelDirection::Toward => self.params.zoom /= ZOOM_STEP,
        }

        log::debug!("zoom {:?} -> {}", direction, self.params.zoom);
        self.check_zoom();
    }

    pub fn on_mouse_down(&mut self, x: f64, y: f64) {
        self.drag = Some(DragAnchor { x, y });
    }

    pub fn on_mouse_move(&mut self, x: f64, y: f64) {
        let Some(anchor) = self.drag.as_mut() else {
            return;
        };

        let dx = x - anchor.x;
        let dy = y - anchor.y;
        let factor = (1.0 / self.params.zoom) * DRAG_SCALE;

        // Screen y grows downward, fractal y upward.
        self.params.center.real -= dx * factor;
        self.params.center.imag += dy * factor;

        anchor.x = x;
        anchor.y = y;
    }

    pub fn on_mouse_up(&mut self) {
        if self.drag.take().is_some() {
            log::debug!("drag ended, center {:?}", self.params.center);
        }
    }

    pub fn on_key_down(&mut self, key: Key) {
        match key {
            Key::Character(c) if c.eq_ignore_ascii_case(&'j') => {
                self.params.fractal_type = self.params.fractal_type.toggled();
                log::debug!("fractal type -> {}", self.params.fractal_type);
            }
            Key::ArrowLeft => self.nudge_julia_constant(-JULIA_NUDGE, 0.0),
            Key::ArrowRight => self.nudge_julia_constant(JULIA_NUDGE, 0.0),
            Key::ArrowUp => self.nudge_julia_constant(0.0, JULIA_NUDGE),
            Key::ArrowDown => self.nudge_julia_constant(0.0, -JULIA_NUDGE),
            Key::Character(_) | Key::Other => {}
        }
    }

    pub fn on_resize(&mut self, resolution: Resolution) {
        log::debug!("resize {}x{}", resolution.width, resolution.height);
        self.params.resolution = resolution;
    }

    /// Direct assignment from the parameter panel. Values outside the panel's
    /// suggested range are accepted as given.
    pub fn apply_panel_edit(
        &mut self,
        param: PanelParam,
        value: PanelValue,
    ) -> Result<(), PanelEditError> {
        let entry = param.entry();
        entry.write(&mut self.params, value)?;

        log::debug!("panel {} = {:?}", entry.name, value);

        if param == PanelParam::Zoom {
            self.check_zoom();
        }

        Ok(())
    }

    /// Restores center and zoom. Fractal, Julia constant, colours and
    /// resolution are kept.
    pub fn reset_view(&mut self) {
        self.params.center = DEFAULT_CENTER;
        self.params.zoom = DEFAULT_ZOOM;
        log::debug!("view reset");
    }

    fn nudge_julia_constant(&mut self, d_real: f64, d_imag: f64) {
        if self.params.fractal_type != FractalKinds::Julia {
            return;
        }

        self.params.julia_constant = self.params.julia_constant + Complex::new(d_real, d_imag);
        log::debug!("julia constant -> {:?}", self.params.julia_constant);
    }

    fn check_zoom(&self) {
        let zoom = self.params.zoom;

        if !zoom.is_normal() || zoom <= 0.0 || zoom > PRECISION_ZOOM_LIMIT {
            log::warn!("zoom {} is outside the range f64 coordinates can resolve", zoom);
        }
    }
}
