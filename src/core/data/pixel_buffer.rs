use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 3;

fn buffer_size_for(width: u32, height: u32) -> usize {
    width as usize * height as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    InvalidSize {
        width: u32,
        height: u32,
    },
    PixelOutsideBounds {
        pixel: Point,
        width: u32,
        height: u32,
    },
    BoundsMismatch {
        expected_size: usize,
        buffer_size: usize,
    },
    ScrollOutOfRange {
        dx: i32,
        dy: i32,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "pixel buffer size must be positive: {}x{}", width, height)
            }
            Self::PixelOutsideBounds {
                pixel,
                width,
                height,
            } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} buffer",
                    pixel.x, pixel.y, width, height
                )
            }
            Self::BoundsMismatch {
                expected_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "expected buffer size {} does not match buffer size {}",
                    expected_size, buffer_size
                )
            }
            Self::ScrollOutOfRange { dx, dy } => {
                write!(f, "scroll by dx:{}, dy:{} exceeds buffer size", dx, dy)
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGB buffer, three bytes per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Result<Self, PixelBufferError> {
        if width == 0 || height == 0 {
            return Err(PixelBufferError::InvalidSize { width, height });
        }

        Ok(Self {
            width,
            height,
            buffer: vec![0; buffer_size_for(width, height)],
        })
    }

    pub fn from_data(
        width: u32,
        height: u32,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        if width == 0 || height == 0 {
            return Err(PixelBufferError::InvalidSize { width, height });
        }

        let expected_size = buffer_size_for(width, height);

        if expected_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self {
            width,
            height,
            buffer,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn contains_point(&self, pixel: Point) -> bool {
        pixel.x >= 0
            && pixel.y >= 0
            && (pixel.x as u32) < self.width
            && (pixel.y as u32) < self.height
    }

    fn index_of(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        if !self.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                width: self.width,
                height: self.height,
            });
        }

        Ok((pixel.y as usize * self.width as usize + pixel.x as usize) * BYTES_PER_PIXEL)
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.index_of(pixel)?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        let index = self.index_of(pixel)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    /// Moves the contents by (`dx`, `dy`) pixels in place.
    ///
    /// Pixel (x, y) receives the old value of (x - dx, y - dy). Rows are
    /// visited from the destination side toward the source side so no
    /// source row is overwritten before it is read. The exposed edge keeps
    /// stale values until the caller redraws it.
    pub fn scroll(&mut self, dx: i32, dy: i32) -> Result<(), PixelBufferError> {
        let width = self.width as i32;
        let height = self.height as i32;

        if dx.abs() >= width || dy.abs() >= height {
            return Err(PixelBufferError::ScrollOutOfRange { dx, dy });
        }

        let (src_x, dst_x) = if dx >= 0 { (0, dx) } else { (-dx, 0) };
        let span = (width - dx.abs()) as usize * BYTES_PER_PIXEL;

        if dy > 0 {
            for dst_y in (dy..height).rev() {
                self.copy_span(src_x, dst_y - dy, dst_x, dst_y, span);
            }
        } else {
            for dst_y in 0..(height + dy) {
                self.copy_span(src_x, dst_y - dy, dst_x, dst_y, span);
            }
        }

        Ok(())
    }

    fn copy_span(&mut self, src_x: i32, src_y: i32, dst_x: i32, dst_y: i32, span: usize) {
        let row_stride = self.width as usize;
        let src = (src_y as usize * row_stride + src_x as usize) * BYTES_PER_PIXEL;
        let dst = (dst_y as usize * row_stride + dst_x as usize) * BYTES_PER_PIXEL;

        // copy_within is a memmove, so a same-row horizontal shift is safe
        self.buffer.copy_within(src..src + span, dst);
    }

    /// First pixel, in row-major order, where the two buffers differ.
    #[must_use]
    pub fn first_mismatch(&self, other: &PixelBuffer) -> Option<Point> {
        if self.width != other.width || self.height != other.height {
            return Some(Point { x: 0, y: 0 });
        }

        self.buffer
            .chunks_exact(BYTES_PER_PIXEL)
            .zip(other.buffer.chunks_exact(BYTES_PER_PIXEL))
            .position(|(a, b)| a != b)
            .map(|index| Point {
                x: (index % self.width as usize) as i32,
                y: (index / self.width as usize) as i32,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered_buffer(width: u32, height: u32) -> PixelBuffer {
        let mut buffer = PixelBuffer::new(width, height).unwrap();

        for y in 0..height as i32 {
            for x in 0..width as i32 {
                let value = (y * 10 + x) as u8;
                buffer.set_pixel(Point { x, y }, Colour::grey(value)).unwrap();
            }
        }

        buffer
    }

    fn value_at(buffer: &PixelBuffer, x: i32, y: i32) -> u8 {
        buffer.pixel(Point { x, y }).unwrap().r
    }

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let buffer = PixelBuffer::new(10, 10).unwrap();

        assert_eq!(buffer.width(), 10);
        assert_eq!(buffer.height(), 10);
        assert_eq!(buffer.buffer_size(), 300); // 10 * 10 * 3
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_new_rejects_empty_size() {
        assert_eq!(
            PixelBuffer::new(0, 5).unwrap_err(),
            PixelBufferError::InvalidSize {
                width: 0,
                height: 5
            }
        );
    }

    #[test]
    fn test_from_data_valid() {
        let data: Vec<u8> = vec![
            255, 0, 0, // pixel (0,0) - red
            0, 255, 0, // pixel (1,0) - green
            0, 0, 255, // pixel (0,1) - blue
            255, 255, 0, // pixel (1,1) - yellow
        ];

        let buffer = PixelBuffer::from_data(2, 2, data.clone()).unwrap();

        assert_eq!(buffer.buffer(), &data);
        assert_eq!(
            buffer.pixel(Point { x: 1, y: 1 }).unwrap(),
            Colour {
                r: 255,
                g: 255,
                b: 0
            }
        );
    }

    #[test]
    fn test_from_data_buffer_too_small() {
        let result = PixelBuffer::from_data(2, 2, vec![255, 0, 0]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                expected_size: 12,
                buffer_size: 3
            }
        );
    }

    #[test]
    fn test_set_pixel_valid() {
        let mut buffer = PixelBuffer::new(3, 3).unwrap();
        let red = Colour { r: 255, g: 0, b: 0 };

        buffer.set_pixel(Point { x: 1, y: 1 }, red).unwrap();

        assert_eq!(buffer.buffer()[12], 255);
        assert_eq!(buffer.buffer()[13], 0);
        assert_eq!(buffer.buffer()[14], 0);
    }

    #[test]
    fn test_set_pixel_outside_bounds() {
        let mut buffer = PixelBuffer::new(3, 3).unwrap();

        for pixel in [Point { x: 3, y: 1 }, Point { x: 1, y: 3 }, Point { x: -1, y: 0 }] {
            assert_eq!(
                buffer.set_pixel(pixel, Colour::BLACK),
                Err(PixelBufferError::PixelOutsideBounds {
                    pixel,
                    width: 3,
                    height: 3
                })
            );
        }
    }

    #[test]
    fn test_scroll_left_moves_columns_toward_zero() {
        let mut buffer = numbered_buffer(4, 3);

        buffer.scroll(-1, 0).unwrap();

        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(value_at(&buffer, x, y), (y * 10 + x + 1) as u8);
            }
            // exposed column keeps its stale value
            assert_eq!(value_at(&buffer, 3, y), (y * 10 + 3) as u8);
        }
    }

    #[test]
    fn test_scroll_right_moves_columns_away_from_zero() {
        let mut buffer = numbered_buffer(4, 3);

        buffer.scroll(1, 0).unwrap();

        for y in 0..3 {
            for x in 1..4 {
                assert_eq!(value_at(&buffer, x, y), (y * 10 + x - 1) as u8);
            }
        }
    }

    #[test]
    fn test_scroll_down_does_not_smear_rows() {
        let mut buffer = numbered_buffer(3, 4);

        buffer.scroll(0, 1).unwrap();

        for y in 1..4 {
            for x in 0..3 {
                assert_eq!(value_at(&buffer, x, y), ((y - 1) * 10 + x) as u8);
            }
        }
    }

    #[test]
    fn test_scroll_diagonal() {
        let mut buffer = numbered_buffer(4, 4);

        buffer.scroll(-1, 1).unwrap();

        for y in 1..4 {
            for x in 0..3 {
                assert_eq!(value_at(&buffer, x, y), ((y - 1) * 10 + x + 1) as u8);
            }
        }
    }

    #[test]
    fn test_scroll_up_left() {
        let mut buffer = numbered_buffer(4, 4);

        buffer.scroll(-1, -1).unwrap();

        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(value_at(&buffer, x, y), ((y + 1) * 10 + x + 1) as u8);
            }
        }
    }

    #[test]
    fn test_scroll_rejects_shift_larger_than_buffer() {
        let mut buffer = numbered_buffer(2, 2);

        assert_eq!(
            buffer.scroll(2, 0),
            Err(PixelBufferError::ScrollOutOfRange { dx: 2, dy: 0 })
        );
    }

    #[test]
    fn test_first_mismatch() {
        let a = numbered_buffer(3, 3);
        let mut b = a.clone();

        assert_eq!(a.first_mismatch(&b), None);

        b.set_pixel(Point { x: 2, y: 1 }, Colour::grey(200)).unwrap();

        assert_eq!(a.first_mismatch(&b), Some(Point { x: 2, y: 1 }));
    }
}
