use crate::position::PositionDelta;

/// A requested roll of the block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn all() -> [Self; 4] {
        [Self::Up, Self::Down, Self::Left, Self::Right]
    }

    /// Unit step on the grid. Rows grow downwards.
    pub fn delta(self) -> PositionDelta {
        match self {
            Self::Up => PositionDelta::new(-1, 0),
            Self::Down => PositionDelta::new(1, 0),
            Self::Left => PositionDelta::new(0, -1),
            Self::Right => PositionDelta::new(0, 1),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}
