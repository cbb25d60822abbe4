use std::iter;

use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::position::{Position, PositionDelta};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    #[serde(rename = "standing")]
    Standing,
    /// Covers the anchor cell and the cell to its right.
    #[serde(rename = "lyingH")]
    LyingHorizontal,
    /// Covers the anchor cell and the cell below it.
    #[serde(rename = "lyingV")]
    LyingVertical,
}

impl Orientation {
    /// Offset of the second footprint cell from the anchor, if any.
    fn extension(self) -> Option<PositionDelta> {
        match self {
            Self::Standing => None,
            Self::LyingHorizontal => Some(Direction::Right.delta()),
            Self::LyingVertical => Some(Direction::Down.delta()),
        }
    }

    /// Number of cells the anchor travels and the orientation after tipping
    /// the block over one of its edges.
    fn roll(self, dir: Direction) -> (i32, Orientation) {
        use Direction::*;
        use Orientation::*;

        match (self, dir) {
            (Standing, Up) => (2, LyingVertical),
            (Standing, Down) => (1, LyingVertical),
            (Standing, Left) => (2, LyingHorizontal),
            (Standing, Right) => (1, LyingHorizontal),
            (LyingHorizontal, Up | Down) => (1, LyingHorizontal),
            (LyingHorizontal, Left) => (1, Standing),
            (LyingHorizontal, Right) => (2, Standing),
            (LyingVertical, Up) => (1, Standing),
            (LyingVertical, Down) => (2, Standing),
            (LyingVertical, Left | Right) => (1, LyingVertical),
        }
    }
}

/// Where the block is and which way up.
///
/// The anchor is the top-left cell of the footprint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pose {
    pub row: i32,
    pub col: i32,
    pub orientation: Orientation,
}

impl Pose {
    pub fn new(row: i32, col: i32, orientation: Orientation) -> Self {
        Self {
            row,
            col,
            orientation,
        }
    }

    pub fn anchor(self) -> Position {
        Position::new(self.row, self.col)
    }

    pub fn is_standing(self) -> bool {
        self.orientation == Orientation::Standing
    }

    /// Cells covered by the block: one when standing, two when lying.
    pub fn cells(self) -> impl Iterator<Item = Position> {
        let anchor = self.anchor();
        iter::once(anchor).chain(self.orientation.extension().map(|d| anchor + d))
    }

    /// The pose after rolling once in `dir`. Says nothing about whether the
    /// block is still supported.
    pub fn rolled(self, dir: Direction) -> Pose {
        let (steps, orientation) = self.orientation.roll(dir);
        let anchor = self.anchor() + dir.delta() * steps;
        Pose::new(anchor.row, anchor.col, orientation)
    }
}
