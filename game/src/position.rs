use std::ops::{Add, Mul, Sub};

/// A grid cell address. Signed so that candidate cells may lie off the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub(crate) fn from_indices(row: usize, col: usize) -> Self {
        Self {
            row: row.try_into().unwrap(),
            col: col.try_into().unwrap(),
        }
    }

    /// `bounds` is `(width, height)`.
    pub fn in_bounds(self, bounds: (usize, usize)) -> bool {
        let (width, height) = bounds;
        let row_in_bounds = self.row >= 0 && (self.row as usize) < height;
        let col_in_bounds = self.col >= 0 && (self.col as usize) < width;
        row_in_bounds && col_in_bounds
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PositionDelta {
    pub drow: i32,
    pub dcol: i32,
}

impl PositionDelta {
    pub fn new(drow: i32, dcol: i32) -> Self {
        Self { drow, dcol }
    }
}

impl Add<PositionDelta> for Position {
    type Output = Position;

    fn add(self, delta: PositionDelta) -> Position {
        let row = self.row + delta.drow;
        let col = self.col + delta.dcol;
        Position { row, col }
    }
}

impl Sub for Position {
    type Output = PositionDelta;

    fn sub(self, other: Position) -> PositionDelta {
        PositionDelta {
            drow: self.row - other.row,
            dcol: self.col - other.col,
        }
    }
}

impl Mul<i32> for PositionDelta {
    type Output = PositionDelta;

    fn mul(self, k: i32) -> PositionDelta {
        PositionDelta::new(self.drow * k, self.dcol * k)
    }
}
