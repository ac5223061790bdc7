//! Pixel format conversion for presentation surfaces.

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelFormatError {
    NotRgb { len: usize },
    FrameLengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for PixelFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotRgb { len } => {
                write!(f, "source length {} is not a multiple of 3", len)
            }
            Self::FrameLengthMismatch { expected, actual } => write!(
                f,
                "RGBA frame length {} does not match expected {}",
                actual, expected
            ),
        }
    }
}

impl Error for PixelFormatError {}

/// Copies RGB pixel data into an RGBA frame, setting alpha to 255.
///
/// `dst` must hold exactly four bytes for every three in `src`.
pub fn blit_rgb_to_rgba(src: &[u8], dst: &mut [u8]) -> Result<(), PixelFormatError> {
    if src.len() % 3 != 0 {
        return Err(PixelFormatError::NotRgb { len: src.len() });
    }

    let expected = (src.len() / 3) * 4;
    if dst.len() != expected {
        return Err(PixelFormatError::FrameLengthMismatch {
            expected,
            actual: dst.len(),
        });
    }

    for (src_pixel, dst_pixel) in src.chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
        dst_pixel[..3].copy_from_slice(src_pixel);
        dst_pixel[3] = 255;
    }

    Ok(())
}
