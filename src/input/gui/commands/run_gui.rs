use std::error::Error;
use std::marker::PhantomData;

use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;

pub const WINDOW_TITLE: &str = "Fractal Viewer";
pub const WINDOW_WIDTH: f64 = 1200.0;
pub const WINDOW_HEIGHT: f64 = 800.0;
pub const WINDOW_MIN_SIZE: f64 = 200.0;

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F) -> Self {
        Self {
            presenter_factory,
            _phantom: PhantomData,
        }
    }

    /// Opens the window and runs until it is closed.
    pub fn execute(&self) -> Result<(), Box<dyn Error>> {
        let event_loop = EventLoop::new()?;

        // pixels borrows the window for the life of the surface
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(WINDOW_TITLE)
                .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
                .with_min_inner_size(LogicalSize::new(WINDOW_MIN_SIZE, WINDOW_MIN_SIZE))
                .build(&event_loop)?,
        ));

        let size = window.inner_size();
        log::info!("window created ({}x{} physical)", size.width, size.height);

        let presenter: P = self.presenter_factory.build(window)?;
        let mut app = GuiApp::new(window, &event_loop, presenter);

        event_loop.run(move |event, elwt| match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => {
                    log::info!("close requested, exiting");
                    elwt.exit();
                }
                WindowEvent::RedrawRequested => {
                    if let Err(err) = app.redraw() {
                        log::error!("render error: {}", err);
                        elwt.exit();
                    }
                }
                _ => app.handle_window_event(event),
            },
            // Every tick re-renders the whole frame.
            Event::AboutToWait => window.request_redraw(),
            _ => {}
        })?;

        Ok(())
    }
}
