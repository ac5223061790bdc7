use std::error::Error;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Presentation surface: makes the buffer's current contents visible.
pub trait FramePresenterPort {
    type Error: Error + Send + Sync + 'static;

    fn present(&mut self, buffer: &PixelBuffer) -> Result<(), Self::Error>;
}
