use std::convert::Infallible;

use crate::controllers::spiral::ports::presenter::FramePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Presenter without a display surface; only counts frames.
#[derive(Debug, Default)]
pub struct HeadlessPresenter {
    frames_presented: u64,
    last_frame_bytes: usize,
}

impl HeadlessPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    pub fn last_frame_bytes(&self) -> usize {
        self.last_frame_bytes
    }
}

impl FramePresenterPort for HeadlessPresenter {
    type Error = Infallible;

    fn present(&mut self, buffer: &PixelBuffer) -> Result<(), Infallible> {
        self.frames_presented += 1;
        self.last_frame_bytes = buffer.buffer_size();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_frames() {
        let buffer = PixelBuffer::new(4, 3).unwrap();
        let mut presenter = HeadlessPresenter::new();

        presenter.present(&buffer).unwrap();
        presenter.present(&buffer).unwrap();

        assert_eq!(presenter.frames_presented(), 2);
        assert_eq!(presenter.last_frame_bytes(), 36);
    }
}
