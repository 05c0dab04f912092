use egui::Context as EguiContext;

use crate::adapters::pixel_format::PixelFormatError;
use crate::controllers::interactive::data::frame::Frame;
use crate::core::data::resolution::Resolution;

/// Puts rendered frames and the egui overlay on screen.
pub trait GuiPresenterPort {
    /// Replaces the framebuffer contents with `frame`.
    fn present(&mut self, frame: &Frame) -> Result<(), PixelFormatError>;
    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error>;
    fn resize(&mut self, resolution: Resolution) -> Result<(), pixels::TextureError>;
}
