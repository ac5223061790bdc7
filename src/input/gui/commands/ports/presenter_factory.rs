use std::error::Error;

use winit::window::Window;

use crate::controllers::spiral::ports::presenter::FramePresenterPort;

pub trait GuiPresenterFactoryPort<T: FramePresenterPort> {
    /// Builds a presenter drawing `width`×`height` frames into `window`.
    fn build(&self, window: &'static Window, width: u32, height: u32) -> Result<T, Box<dyn Error>>;
}
