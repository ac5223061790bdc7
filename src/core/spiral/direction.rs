//! Pan direction selection for the spiral walk.
//!
//! Each frame the walk takes one grid step. Of the eight neighbours of the
//! current offset, the one whose squared distance from the point of
//! interest lands closest to the target radius² wins, except that the walk
//! may never double straight back on itself.

use std::fmt;

use crate::core::spiral::pan_state::GridOffset;

/// Compass directions in canonical scan order.
///
/// "Up" increases the imaginary part, "Right" the real part. Opposite
/// directions are four positions apart.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    UpRight,
    Up,
    UpLeft,
    Left,
    DownLeft,
    Down,
    DownRight,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::UpRight,
        Direction::Up,
        Direction::UpLeft,
        Direction::Left,
        Direction::DownLeft,
        Direction::Down,
        Direction::DownRight,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        Self::ALL[self.index() ^ 4]
    }

    /// Unit grid step as (dx, dy), dy positive meaning up.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Right => (1, 0),
            Self::UpRight => (1, 1),
            Self::Up => (0, 1),
            Self::UpLeft => (-1, 1),
            Self::Left => (-1, 0),
            Self::DownLeft => (-1, -1),
            Self::Down => (0, -1),
            Self::DownRight => (1, -1),
        }
    }

    #[must_use]
    pub const fn is_diagonal(self) -> bool {
        let (dx, dy) = self.delta();
        dx != 0 && dy != 0
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Right => "right",
            Self::UpRight => "up-right",
            Self::Up => "up",
            Self::UpLeft => "up-left",
            Self::Left => "left",
            Self::DownLeft => "down-left",
            Self::Down => "down",
            Self::DownRight => "down-right",
        };
        f.write_str(name)
    }
}

/// Deviation from the target radius² for a step in each direction, indexed
/// by [`Direction::index`].
fn radius_deviations(offset: GridOffset, radius_sqr: i64) -> [u64; 8] {
    let (cx, cy) = (i64::from(offset.cx), i64::from(offset.cy));

    Direction::ALL.map(|direction| {
        let (dx, dy) = direction.delta();
        let (nx, ny) = (cx + i64::from(dx), cy + i64::from(dy));

        (nx * nx + ny * ny).abs_diff(radius_sqr)
    })
}

/// Picks the next step of the walk around the point of interest.
///
/// The reverse of `previous` is never returned. Ties resolve to the
/// direction scanned first, with `UpRight` replacing `Right` as the
/// starting candidate whenever `Right` is the forbidden reversal or
/// strictly worse.
#[must_use]
pub fn select_direction(offset: GridOffset, previous: Direction, radius: u32) -> Direction {
    let radius = i64::from(radius);
    let deviations = radius_deviations(offset, radius * radius);
    let score = |direction: Direction| deviations[direction.index()];
    let forbidden = previous.opposite();

    let mut best = if forbidden == Direction::Right {
        Direction::UpRight
    } else if forbidden != Direction::UpRight && score(Direction::UpRight) < score(Direction::Right) {
        Direction::UpRight
    } else {
        Direction::Right
    };

    for &candidate in &Direction::ALL[Direction::Up.index()..] {
        if candidate != forbidden && score(candidate) < score(best) {
            best = candidate;
        }
    }

    best
}
