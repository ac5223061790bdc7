pub mod adapters;
pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
pub mod input;
pub mod presenters;

pub use crate::controllers::spiral::{FramePresenterPort, SpiralPanController, SpiralPanError};
pub use crate::core::actions::render_line::render_line::LineRenderer;
pub use crate::core::actions::scroll_and_redraw::scroll_and_redraw::scroll_and_redraw;
pub use crate::core::data::fixed::Fixed;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::plane_coordinate::PlaneCoordinate;
pub use crate::core::fractals::mandelbrot::algorithm::{FixedPointMandelbrot, escape_time};
pub use crate::core::fractals::mandelbrot::colour_map::GreyscaleColourMap;
pub use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
pub use crate::core::spiral::direction::{Direction, select_direction};
pub use crate::core::spiral::pan_state::{GridOffset, PanState};
pub use crate::presenters::headless::presenter::HeadlessPresenter;

#[cfg(feature = "gui")]
pub use crate::input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::factory::PixelsPresenterFactory;
