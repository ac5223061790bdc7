use std::error::Error;
use std::fmt;

use crate::core::actions::render_line::ports::colour_map::ColourMap;
use crate::core::actions::render_line::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::fixed::Fixed;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::plane_coordinate::PlaneCoordinate;
use crate::core::data::point::Point;

#[derive(Debug)]
pub enum RenderLineError {
    Algorithm(Box<dyn Error + Send + Sync>),
    ColourMap(Box<dyn Error + Send + Sync>),
    PixelBuffer(PixelBufferError),
    CoordinateOutOfRange { pixel: Point },
}

impl fmt::Display for RenderLineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Algorithm(err) => write!(f, "fractal algorithm error: {}", err),
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
            Self::CoordinateOutOfRange { pixel } => write!(
                f,
                "plane coordinate of pixel x:{}, y:{} is outside the fixed-point range",
                pixel.x, pixel.y
            ),
        }
    }
}

impl Error for RenderLineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Algorithm(err) | Self::ColourMap(err) => Some(err.as_ref()),
            Self::PixelBuffer(err) => Some(err),
            Self::CoordinateOutOfRange { .. } => None,
        }
    }
}

impl From<PixelBufferError> for RenderLineError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Fills single rows or columns of a [`PixelBuffer`] from a view's
/// upper-left corner.
///
/// Pixel (x, y) samples `upper_left + (x·step, −y·step)`, so a row keeps
/// the imaginary part fixed and a column keeps the real part fixed.
#[derive(Debug, Clone)]
pub struct LineRenderer<Alg, CMap> {
    algorithm: Alg,
    colour_map: CMap,
    pixel_size: Fixed,
}

impl<Alg, CMap> LineRenderer<Alg, CMap>
where
    Alg: FractalAlgorithm,
    Alg::Failure: Send + Sync + 'static,
    CMap: ColourMap<T = Alg::Success>,
    CMap::Failure: Send + Sync + 'static,
{
    pub fn new(algorithm: Alg, colour_map: CMap, pixel_size: Fixed) -> Self {
        Self {
            algorithm,
            colour_map,
            pixel_size,
        }
    }

    #[must_use]
    pub fn pixel_size(&self) -> Fixed {
        self.pixel_size
    }

    pub fn render_row(
        &self,
        buffer: &mut PixelBuffer,
        upper_left: PlaneCoordinate,
        y: u32,
    ) -> Result<(), RenderLineError> {
        let y = y as i32;

        for x in 0..buffer.width() as i32 {
            self.render_pixel(buffer, upper_left, Point { x, y })?;
        }

        Ok(())
    }

    pub fn render_column(
        &self,
        buffer: &mut PixelBuffer,
        upper_left: PlaneCoordinate,
        x: u32,
    ) -> Result<(), RenderLineError> {
        let x = x as i32;

        for y in 0..buffer.height() as i32 {
            self.render_pixel(buffer, upper_left, Point { x, y })?;
        }

        Ok(())
    }

    /// Renders every row; the reference the incremental path must match.
    pub fn render_frame(
        &self,
        buffer: &mut PixelBuffer,
        upper_left: PlaneCoordinate,
    ) -> Result<(), RenderLineError> {
        for y in 0..buffer.height() {
            self.render_row(buffer, upper_left, y)?;
        }

        Ok(())
    }

    fn render_pixel(
        &self,
        buffer: &mut PixelBuffer,
        upper_left: PlaneCoordinate,
        pixel: Point,
    ) -> Result<(), RenderLineError> {
        if !buffer.contains_point(pixel) {
            return Err(RenderLineError::PixelBuffer(
                PixelBufferError::PixelOutsideBounds {
                    pixel,
                    width: buffer.width(),
                    height: buffer.height(),
                },
            ));
        }

        let c = upper_left
            .pixel_offset(self.pixel_size, pixel.x, pixel.y)
            .ok_or(RenderLineError::CoordinateOutOfRange { pixel })?;

        let value = self
            .algorithm
            .compute(c)
            .map_err(|err| RenderLineError::Algorithm(Box::new(err)))?;

        let colour = self
            .colour_map
            .map(value)
            .map_err(|err| RenderLineError::ColourMap(Box::new(err)))?;

        buffer.set_pixel(pixel, colour)?;

        Ok(())
    }
}
