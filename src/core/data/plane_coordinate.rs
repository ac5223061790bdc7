use std::fmt;

use crate::core::data::fixed::Fixed;

/// A point in the complex plane in fixed-point representation.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct PlaneCoordinate {
    pub real: Fixed,
    pub imag: Fixed,
}

impl PlaneCoordinate {
    #[must_use]
    pub const fn new(real: Fixed, imag: Fixed) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub const fn from_f64(real: f64, imag: f64) -> Self {
        Self {
            real: Fixed::from_f64(real),
            imag: Fixed::from_f64(imag),
        }
    }

    /// Plane coordinate of pixel (`x`, `y`) when `self` is the upper-left corner.
    ///
    /// Columns grow the real part, rows shrink the imaginary part.
    #[must_use]
    pub fn pixel_offset(self, pixel_size: Fixed, x: i32, y: i32) -> Option<Self> {
        Some(Self {
            real: self.real.checked_offset(pixel_size, x)?,
            imag: self.imag.checked_offset(pixel_size, -y)?,
        })
    }

    /// Moves the coordinate by whole grid steps, `dy` positive meaning up.
    #[must_use]
    pub fn panned(self, pixel_size: Fixed, dx: i32, dy: i32) -> Option<Self> {
        Some(Self {
            real: self.real.checked_offset(pixel_size, dx)?,
            imag: self.imag.checked_offset(pixel_size, dy)?,
        })
    }
}

impl fmt::Display for PlaneCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}i)", self.real, self.imag)
    }
}
