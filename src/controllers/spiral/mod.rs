//! Real-time spiral pan controller.
//!
//! Owns the pixel buffer and the pan state and drives one frame per call:
//! choose a direction, scroll the buffer, redraw the exposed edge, present.
//! Everything runs on the caller's thread.

mod controller;
pub mod errors;
pub mod ports;

pub use controller::SpiralPanController;
pub use errors::SpiralPanError;
pub use ports::presenter::FramePresenterPort;
