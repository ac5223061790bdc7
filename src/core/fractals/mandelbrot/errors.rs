use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MandelbrotColourMapError {
    IterationsExceedMax { iterations: u8, max_iterations: u8 },
}

impl fmt::Display for MandelbrotColourMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IterationsExceedMax {
                iterations,
                max_iterations,
            } => {
                write!(
                    f,
                    "iterations {} exceeds maximum {}",
                    iterations, max_iterations
                )
            }
        }
    }
}

impl Error for MandelbrotColourMapError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MandelbrotConfigError {
    InvalidSize { width: u32, height: u32 },
    NonPositivePixelSize { raw: i16 },
    ZeroRadius,
    ViewOutOfRange { min: i64, max: i64 },
}

impl fmt::Display for MandelbrotConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "window must be at least 2x2 pixels, got {}x{}", width, height)
            }
            Self::NonPositivePixelSize { raw } => {
                write!(f, "pixel size must be positive, got raw value {}", raw)
            }
            Self::ZeroRadius => write!(f, "spiral radius must be greater than zero"),
            Self::ViewOutOfRange { min, max } => {
                write!(
                    f,
                    "spiral sweep spans raw coordinates {}..={}, outside the 16-bit range",
                    min, max
                )
            }
        }
    }
}

impl Error for MandelbrotConfigError {}
