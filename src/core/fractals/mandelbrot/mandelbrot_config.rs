use crate::core::data::fixed::Fixed;
use crate::core::data::plane_coordinate::PlaneCoordinate;
use crate::core::fractals::mandelbrot::errors::MandelbrotConfigError;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_UPPER_LEFT: PlaneCoordinate = PlaneCoordinate::from_f64(-1.4, 0.2);
pub const DEFAULT_PIXEL_SIZE: Fixed = Fixed::from_f64(0.55 / DEFAULT_WIDTH as f64);

/// Spiral radius in pixel steps.
pub const DEFAULT_RADIUS: u32 = 1750;

/// Extra steps allowed beyond the radius when checking the sweep range.
const RADIUS_SLACK: i64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MandelbrotConfig {
    pub width: u32,
    pub height: u32,
    /// Upper-left corner of the first frame.
    pub upper_left: PlaneCoordinate,
    /// Plane units per pixel.
    pub pixel_size: Fixed,
    pub radius: u32,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            upper_left: DEFAULT_UPPER_LEFT,
            pixel_size: DEFAULT_PIXEL_SIZE,
            radius: DEFAULT_RADIUS,
        }
    }
}

impl MandelbrotConfig {
    /// Checks that every coordinate the spiral can visit fits the `i16` storage.
    ///
    /// The walk starts `radius` steps left of the point of interest and stays
    /// within `radius + 2` steps of it on both axes.
    pub fn validate(&self) -> Result<(), MandelbrotConfigError> {
        if self.width < 2 || self.height < 2 {
            return Err(MandelbrotConfigError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }

        let step = i64::from(self.pixel_size.raw());
        if step <= 0 {
            return Err(MandelbrotConfigError::NonPositivePixelSize {
                raw: self.pixel_size.raw(),
            });
        }

        if self.radius == 0 {
            return Err(MandelbrotConfigError::ZeroRadius);
        }

        let radius = i64::from(self.radius);
        let reach = (radius + RADIUS_SLACK) * step;
        let centre_real = i64::from(self.upper_left.real.raw()) + radius * step;
        let centre_imag = i64::from(self.upper_left.imag.raw());

        let min = (centre_real - reach).min(centre_imag - reach - i64::from(self.height - 1) * step);
        let max = (centre_real + reach + i64::from(self.width - 1) * step).max(centre_imag + reach);

        if min < i64::from(i16::MIN) || max > i64::from(i16::MAX) {
            return Err(MandelbrotConfigError::ViewOutOfRange { min, max });
        }

        Ok(())
    }

    /// The fixed plane location the exploration circles around.
    #[must_use]
    pub fn point_of_interest(&self) -> Option<PlaneCoordinate> {
        let radius = i32::try_from(self.radius).ok()?;

        self.upper_left.panned(self.pixel_size, radius, 0)
    }
}
