use crate::core::actions::render_line::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::algorithm::INTERIOR;
use crate::core::fractals::mandelbrot::errors::MandelbrotColourMapError;

/// Linear grey ramp: `iterations * 255 / (MAX_ITERATIONS + 1)` on every channel.
///
/// Interior points come out white.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct GreyscaleColourMap;

impl ColourMap for GreyscaleColourMap {
    type T = u8;
    type Failure = MandelbrotColourMapError;

    fn map(&self, iterations: u8) -> Result<Colour, Self::Failure> {
        if iterations > INTERIOR {
            return Err(MandelbrotColourMapError::IterationsExceedMax {
                iterations,
                max_iterations: INTERIOR,
            });
        }

        let intensity = u32::from(iterations) * 255 / u32::from(INTERIOR);

        Ok(Colour::grey(intensity as u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_black() {
        assert_eq!(GreyscaleColourMap.map(0).unwrap(), Colour::BLACK);
    }

    #[test]
    fn test_interior_is_white() {
        assert_eq!(GreyscaleColourMap.map(INTERIOR).unwrap(), Colour::grey(255));
    }

    #[test]
    fn test_scaling_truncates() {
        assert_eq!(GreyscaleColourMap.map(5).unwrap(), Colour::grey(41));
        assert_eq!(GreyscaleColourMap.map(11).unwrap(), Colour::grey(90));
        assert_eq!(GreyscaleColourMap.map(30).unwrap(), Colour::grey(246));
    }

    #[test]
    fn test_rejects_counts_above_interior() {
        let result = GreyscaleColourMap.map(INTERIOR + 1);

        assert!(matches!(
            result,
            Err(MandelbrotColourMapError::IterationsExceedMax {
                iterations: 32,
                max_iterations: 31
            })
        ));
    }
}
