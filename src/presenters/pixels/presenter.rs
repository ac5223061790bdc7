use std::error::Error;
use std::fmt;

use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

use crate::adapters::pixel_format::{PixelFormatError, blit_rgb_to_rgba};
use crate::controllers::spiral::ports::presenter::FramePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug)]
pub enum PixelsPresenterError {
    SizeMismatch {
        surface: (u32, u32),
        frame: (u32, u32),
    },
    Format(PixelFormatError),
    Surface(pixels::Error),
}

impl fmt::Display for PixelsPresenterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { surface, frame } => write!(
                f,
                "frame of {}x{} does not fit the {}x{} surface",
                frame.0, frame.1, surface.0, surface.1
            ),
            Self::Format(err) => write!(f, "pixel format error: {}", err),
            Self::Surface(err) => write!(f, "pixels surface error: {}", err),
        }
    }
}

impl Error for PixelsPresenterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::SizeMismatch { .. } => None,
            Self::Format(err) => Some(err),
            Self::Surface(err) => Some(err),
        }
    }
}

impl From<PixelFormatError> for PixelsPresenterError {
    fn from(err: PixelFormatError) -> Self {
        Self::Format(err)
    }
}

impl From<pixels::Error> for PixelsPresenterError {
    fn from(err: pixels::Error) -> Self {
        Self::Surface(err)
    }
}

/// Shows each frame in a window through a `pixels` RGBA surface.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    width: u32,
    height: u32,
}

impl PixelsPresenter {
    /// Creates a `width`×`height` frame scaled onto the window's surface.
    pub fn new(window: &'static Window, width: u32, height: u32) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(width, height, surface_texture)?;

        Ok(Self {
            pixels,
            width,
            height,
        })
    }
}

impl FramePresenterPort for PixelsPresenter {
    type Error = PixelsPresenterError;

    fn present(&mut self, buffer: &PixelBuffer) -> Result<(), PixelsPresenterError> {
        if buffer.width() != self.width || buffer.height() != self.height {
            return Err(PixelsPresenterError::SizeMismatch {
                surface: (self.width, self.height),
                frame: (buffer.width(), buffer.height()),
            });
        }

        blit_rgb_to_rgba(buffer.buffer(), self.pixels.frame_mut())?;
        self.pixels.render()?;

        Ok(())
    }
}
