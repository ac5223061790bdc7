use std::error::Error;
use std::fmt;

use crate::core::actions::render_line::render_line::RenderLineError;
use crate::core::actions::scroll_and_redraw::scroll_and_redraw::ScrollAndRedrawError;
use crate::core::data::pixel_buffer::PixelBufferError;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::errors::MandelbrotConfigError;

#[derive(Debug)]
pub enum SpiralPanError {
    Config(MandelbrotConfigError),
    PixelBuffer(PixelBufferError),
    Render(RenderLineError),
    Scroll(ScrollAndRedrawError),
    Present(Box<dyn Error + Send + Sync>),
    IncrementalMismatch { frame: u64, pixel: Point },
}

impl fmt::Display for SpiralPanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid configuration: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
            Self::Render(err) => write!(f, "full render failed: {}", err),
            Self::Scroll(err) => write!(f, "frame update failed: {}", err),
            Self::Present(err) => write!(f, "present failed: {}", err),
            Self::IncrementalMismatch { frame, pixel } => write!(
                f,
                "incremental buffer differs from full render at frame {} pixel x:{}, y:{}",
                frame, pixel.x, pixel.y
            ),
        }
    }
}

impl Error for SpiralPanError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
            Self::Render(err) => Some(err),
            Self::Scroll(err) => Some(err),
            Self::Present(err) => Some(err.as_ref()),
            Self::IncrementalMismatch { .. } => None,
        }
    }
}

impl From<MandelbrotConfigError> for SpiralPanError {
    fn from(err: MandelbrotConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<PixelBufferError> for SpiralPanError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

impl From<RenderLineError> for SpiralPanError {
    fn from(err: RenderLineError) -> Self {
        Self::Render(err)
    }
}

impl From<ScrollAndRedrawError> for SpiralPanError {
    fn from(err: ScrollAndRedrawError) -> Self {
        Self::Scroll(err)
    }
}
