use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::wgpu;
use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

use crate::adapters::pixel_format::{PixelFormatError, copy_pixel_buffer_to_rgba};
use crate::controllers::interactive::data::frame::Frame;
use crate::core::data::resolution::Resolution;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;

/// Draws frames through a `pixels` framebuffer sized to the window, with the
/// egui overlay rendered in the same pass.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    resolution: Resolution,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None,
            1,
        );

        Ok(Self {
            pixels,
            egui_renderer,
            resolution: Resolution::new(size.width, size.height),
        })
    }
}

impl GuiPresenterPort for PixelsPresenter {
    fn present(&mut self, frame: &Frame) -> Result<(), PixelFormatError> {
        // A frame rendered before the latest resize is simply dropped.
        if frame.pixel_buffer.resolution() != self.resolution {
            log::trace!("dropping stale frame {}", frame.number);
            return Ok(());
        }

        copy_pixel_buffer_to_rgba(&frame.pixel_buffer, self.pixels.frame_mut())
    }

    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        if self.resolution.is_degenerate() {
            return Ok(());
        }

        let pixels_per_point = egui_ctx.pixels_per_point();
        let clipped_primitives = egui_ctx.tessellate(egui_output.shapes, pixels_per_point);
        let textures_delta = egui_output.textures_delta;
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.resolution.width, self.resolution.height],
            pixels_per_point,
        };
        let egui_renderer = &mut self.egui_renderer;

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            for (id, delta) in &textures_delta.set {
                egui_renderer.update_texture(&context.device, &context.queue, *id, delta);
            }

            egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            // Keep the fractal underneath.
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                egui_renderer.render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    fn resize(&mut self, resolution: Resolution) -> Result<(), pixels::TextureError> {
        self.pixels
            .resize_surface(resolution.width, resolution.height)?;
        self.pixels
            .resize_buffer(resolution.width, resolution.height)?;
        self.resolution = resolution;

        log::debug!(
            "framebuffer resized to {}x{}",
            resolution.width,
            resolution.height
        );

        Ok(())
    }
}
