use crate::core::data::fixed::Fixed;
use crate::core::data::plane_coordinate::PlaneCoordinate;
use crate::core::spiral::direction::Direction;

/// Integer grid offset from the point of interest, in pixel steps.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct GridOffset {
    pub cx: i32,
    pub cy: i32,
}

impl GridOffset {
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();

        Self {
            cx: self.cx + dx,
            cy: self.cy + dy,
        }
    }

    #[must_use]
    pub fn distance_sqr(self) -> i64 {
        let (cx, cy) = (i64::from(self.cx), i64::from(self.cy));
        cx * cx + cy * cy
    }
}

/// Mutable exploration state, advanced once per frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PanState {
    pub offset: GridOffset,
    pub previous: Direction,
    pub upper_left: PlaneCoordinate,
}

impl PanState {
    /// Walk start: `radius` steps left of the point of interest, heading down.
    #[must_use]
    pub fn new(upper_left: PlaneCoordinate, radius: u32) -> Self {
        Self {
            offset: GridOffset {
                cx: -(radius as i32),
                cy: 0,
            },
            previous: Direction::Down,
            upper_left,
        }
    }

    /// Moves the offset and the view one grid step.
    ///
    /// Returns `None`, leaving the state untouched, if the new corner would
    /// leave the fixed-point range.
    #[must_use]
    pub fn advance(&mut self, direction: Direction, pixel_size: Fixed) -> Option<PlaneCoordinate> {
        let (dx, dy) = direction.delta();
        let upper_left = self.upper_left.panned(pixel_size, dx, dy)?;

        self.upper_left = upper_left;
        self.offset = self.offset.stepped(direction);
        self.previous = direction;

        Some(upper_left)
    }
}
