use std::time::Duration;

use egui::Context;
use egui_winit::State as EguiWinitState;
use winit::{event::WindowEvent, event_loop::EventLoop, window::Window};

use crate::controllers::interactive::events::input::InputEvent;
use crate::controllers::interactive::frame_driver::FrameDriver;
use crate::controllers::interactive::interaction::InteractionState;
use crate::controllers::interactive::panel::{PANEL_TABLE, PanelEntry, PanelKind, PanelValue};
use crate::core::data::resolution::Resolution;
use crate::core::data::view_parameters::ViewParameters;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::input::gui::app::pointer_input::PointerInput;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;

#[derive(Debug, Clone, Copy)]
struct FrameStats {
    number: u64,
    time_seconds: f64,
    render_duration: Duration,
}

pub struct GuiApp<T: GuiPresenterPort> {
    window: &'static Window,
    presenter: T,
    interaction: InteractionState,
    frame_driver: FrameDriver,
    pointer: PointerInput,
    last_frame: Option<FrameStats>,
    last_error_message: Option<String>,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(window: &'static Window, event_loop: &EventLoop<()>, presenter: T) -> Self {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None,
        );

        Self {
            window,
            presenter,
            interaction: InteractionState::new(ViewParameters::with_resolution(Resolution::new(
                size.width,
                size.height,
            ))),
            frame_driver: FrameDriver::new(),
            pointer: PointerInput::new(scale_factor),
            last_frame: None,
            last_error_message: None,
            egui_ctx,
            egui_state,
        }
    }

    /// Lets egui see the event first, then feeds whatever it left to the
    /// interaction state.
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        let response = self.egui_state.on_window_event(self.window, event);

        if let WindowEvent::ScaleFactorChanged { scale_factor, .. } = event {
            self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
            self.pointer.set_scale_factor(*scale_factor);
            let size = self.window.inner_size();
            self.dispatch(InputEvent::Resize(Resolution::new(size.width, size.height)));
            return;
        }

        if let Some(input) = self.pointer.translate(event, response.consumed) {
            self.dispatch(input);
        }
    }

    /// Renders the fractal and the panel for one display tick.
    pub fn redraw(&mut self) -> Result<(), pixels::Error> {
        self.render_fractal();

        let mut egui_output = self.update_ui();
        let platform_output = std::mem::take(&mut egui_output.platform_output);
        self.egui_state
            .handle_platform_output(self.window, platform_output);

        self.presenter.render(egui_output, &self.egui_ctx)
    }

    fn dispatch(&mut self, event: InputEvent) {
        if let InputEvent::Resize(resolution) = event {
            self.resize_presenter(resolution);
        }

        if let Err(err) = self.interaction.handle_event(event) {
            log::warn!("ignored panel edit: {}", err);
        }
    }

    fn resize_presenter(&mut self, resolution: Resolution) {
        if resolution.is_degenerate() {
            return;
        }

        if let Err(err) = self.presenter.resize(resolution) {
            log::error!(
                "failed to resize framebuffer to {}x{}: {}",
                resolution.width,
                resolution.height,
                err
            );
        }
    }

    fn render_fractal(&mut self) {
        match self.frame_driver.render_frame(self.interaction.params()) {
            Ok(Some(frame)) => {
                if let Err(err) = self.presenter.present(&frame) {
                    log::error!("failed to present frame {}: {}", frame.number, err);
                }

                self.last_frame = Some(FrameStats {
                    number: frame.number,
                    time_seconds: frame.time_seconds,
                    render_duration: frame.render_duration,
                });
                self.last_error_message = None;
            }
            Ok(None) => {}
            Err(err) => {
                log::error!("render failed: {}", err);
                self.last_error_message = Some(err.to_string());
            }
        }
    }

    fn update_ui(&mut self) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(self.window);
        let params = self.interaction.snapshot();
        let last_frame = self.last_frame;
        let last_error_message = self.last_error_message.as_deref();
        let mut edits = Vec::new();

        let output = self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Parameters")
                .default_pos([10.0, 10.0])
                .default_width(280.0)
                .show(ctx, |ui| {
                    draw_panel(ui, &params, &mut edits);

                    ui.separator();
                    if ui.button("Reset view").clicked() {
                        edits.push(InputEvent::ResetView);
                    }

                    ui.separator();
                    ui.label(format!(
                        "Window size: {}x{}",
                        params.resolution.width, params.resolution.height
                    ));
                    if let Some(stats) = last_frame {
                        ui.label(format!("Frame: {}", stats.number));
                        ui.label(format!("Last render: {} ms", stats.render_duration.as_millis()));
                        ui.label(format!("Time: {:.1} s", stats.time_seconds));
                    }
                    if let Some(message) = last_error_message {
                        ui.separator();
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }
                });
        });

        for edit in edits {
            self.dispatch(edit);
        }

        output
    }
}

fn draw_panel(ui: &mut egui::Ui, params: &ViewParameters, edits: &mut Vec<InputEvent>) {
    let mut current_group = None;

    for entry in &PANEL_TABLE {
        if entry.group != current_group {
            if let Some(group) = entry.group {
                ui.separator();
                ui.strong(group);
            }
            current_group = entry.group;
        }

        if let Some(value) = panel_widget(ui, entry, entry.read(params)) {
            edits.push(InputEvent::PanelChange(entry.param, value));
        }
    }
}

/// Draws one control. Returns the new value when the user changed it.
fn panel_widget(ui: &mut egui::Ui, entry: &PanelEntry, current: PanelValue) -> Option<PanelValue> {
    match (entry.kind, current) {
        (PanelKind::Choice, PanelValue::Fractal(before)) => {
            let mut selected = before;

            egui::ComboBox::from_label(entry.name)
                .selected_text(selected.display_name())
                .show_ui(ui, |ui| {
                    for &kind in FractalKinds::ALL {
                        ui.selectable_value(&mut selected, kind, kind.display_name());
                    }
                });

            (selected != before).then_some(PanelValue::Fractal(selected))
        }
        (PanelKind::Slider, PanelValue::Scalar(mut value)) => {
            let range = entry.range.clone().unwrap_or(value..=value);
            let response = ui.add(
                egui::Slider::new(&mut value, range)
                    .text(entry.name)
                    .clamp_to_range(false),
            );

            response.changed().then_some(PanelValue::Scalar(value))
        }
        _ => None,
    }
}
