use std::error::Error;
use std::fmt;

use crate::core::actions::render_line::ports::colour_map::ColourMap;
use crate::core::actions::render_line::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::render_line::render_line::{LineRenderer, RenderLineError};
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::spiral::direction::Direction;
use crate::core::spiral::pan_state::PanState;

#[derive(Debug)]
pub enum ScrollAndRedrawError {
    ViewOutOfRange { direction: Direction },
    PixelBuffer(PixelBufferError),
    RenderLine(RenderLineError),
}

impl fmt::Display for ScrollAndRedrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ViewOutOfRange { direction } => {
                write!(f, "panning {} leaves the fixed-point coordinate range", direction)
            }
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
            Self::RenderLine(err) => write!(f, "render error: {}", err),
        }
    }
}

impl Error for ScrollAndRedrawError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ViewOutOfRange { .. } => None,
            Self::PixelBuffer(err) => Some(err),
            Self::RenderLine(err) => Some(err),
        }
    }
}

impl From<PixelBufferError> for ScrollAndRedrawError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

impl From<RenderLineError> for ScrollAndRedrawError {
    fn from(err: RenderLineError) -> Self {
        Self::RenderLine(err)
    }
}

/// Pans the view one pixel in `direction`, reusing every pixel that stays
/// visible and recomputing only the exposed edge.
///
/// Panning right exposes the last column, panning up exposes the first
/// row. Diagonals expose an L-shaped edge drawn as one column and one row,
/// so the shared corner is evaluated twice with the same result.
pub fn scroll_and_redraw<Alg, CMap>(
    buffer: &mut PixelBuffer,
    state: &mut PanState,
    direction: Direction,
    renderer: &LineRenderer<Alg, CMap>,
) -> Result<(), ScrollAndRedrawError>
where
    Alg: FractalAlgorithm,
    Alg::Failure: Send + Sync + 'static,
    CMap: ColourMap<T = Alg::Success>,
    CMap::Failure: Send + Sync + 'static,
{
    let upper_left = state
        .advance(direction, renderer.pixel_size())
        .ok_or(ScrollAndRedrawError::ViewOutOfRange { direction })?;

    let (dx, dy) = direction.delta();

    // screen rows grow downward while the imaginary axis grows upward
    buffer.scroll(-dx, dy)?;

    if dx != 0 {
        let x = if dx > 0 { buffer.width() - 1 } else { 0 };
        renderer.render_column(buffer, upper_left, x)?;
    }

    if dy != 0 {
        let y = if dy > 0 { 0 } else { buffer.height() - 1 };
        renderer.render_row(buffer, upper_left, y)?;
    }

    Ok(())
}
