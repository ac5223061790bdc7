use std::error::Error;
use std::marker::PhantomData;

use log::{error, info};
use winit::dpi::PhysicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

use crate::controllers::spiral::ports::presenter::FramePresenterPort;
use crate::controllers::spiral::{SpiralPanController, SpiralPanError};
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;

const WINDOW_TITLE: &str = "Mandelbrot Spiral";

pub struct RunGuiCommand<F, P>
where
    P: FramePresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: MandelbrotConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: FramePresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, config: MandelbrotConfig) -> Self {
        Self {
            presenter_factory,
            config,
            _phantom: PhantomData,
        }
    }

    /// Opens the window and pans until it is closed or a frame fails.
    pub fn execute(&self) -> Result<(), Box<dyn Error>> {
        self.config.validate()?;

        let event_loop = EventLoop::new()?;

        // pixels needs the window for 'static
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(WINDOW_TITLE)
                .with_inner_size(PhysicalSize::new(self.config.width, self.config.height))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        let presenter = self
            .presenter_factory
            .build(window, self.config.width, self.config.height)?;
        let mut controller = SpiralPanController::new(self.config, presenter)?;
        controller.start()?;

        let mut failure: Option<SpiralPanError> = None;

        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run(|event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                window_id,
            } if window_id == window.id() => {
                info!("window closed after {} frames", controller.frames());
                elwt.exit();
            }
            Event::AboutToWait if failure.is_none() => {
                if let Err(err) = controller.step() {
                    error!("stopping at frame {}: {}", controller.frames(), err);
                    failure = Some(err);
                    elwt.exit();
                }
            }
            _ => {}
        })?;

        match failure {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }
}
