use crate::block::Pose;
use crate::position::Position;

mod parse;
pub(crate) use parse::LevelMetadata;

/// What a cell of the board is made of.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileKind {
    Empty,
    Floor,
    Goal,
    /// Holds a standing block but gives way under a lying one.
    Fragile,
}

impl TileKind {
    /// Decodes the integer tile codes used by level files.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Empty),
            1 => Some(Self::Floor),
            2 => Some(Self::Goal),
            3 => Some(Self::Fragile),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Floor => 1,
            Self::Goal => 2,
            Self::Fragile => 3,
        }
    }

    pub fn supports_block(self) -> bool {
        !matches!(self, Self::Empty)
    }
}

/// A rectangular board of tiles.
///
/// Levels keep a pristine copy; each play session works on its own clone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    tiles: Vec<Vec<TileKind>>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Fits `rows` to `width` x `height`, padding with `Empty` and dropping
    /// anything beyond.
    pub(crate) fn fitted(width: usize, height: usize, mut rows: Vec<Vec<TileKind>>) -> Self {
        rows.resize_with(height, Vec::new);
        for row in &mut rows {
            row.resize(width, TileKind::Empty);
        }
        Self {
            tiles: rows,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn bounds(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Cells off the board read as `Empty`.
    pub fn at(&self, pos: Position) -> TileKind {
        if pos.in_bounds(self.bounds()) {
            self.tiles[pos.row as usize][pos.col as usize]
        } else {
            TileKind::Empty
        }
    }

    pub(crate) fn at_mut(&mut self, pos: Position) -> &mut TileKind {
        &mut self.tiles[pos.row as usize][pos.col as usize]
    }

    pub fn entries(&self) -> impl Iterator<Item = (Position, TileKind)> + '_ {
        self.tiles.iter().enumerate().flat_map(move |(row, tiles)| {
            tiles
                .iter()
                .enumerate()
                .map(move |(col, &tile)| (Position::from_indices(row, col), tile))
        })
    }

    /// True when every cell under `pose` is on the board and not a hole.
    pub fn supports(&self, pose: Pose) -> bool {
        pose.cells().all(|cell| self.at(cell).supports_block())
    }
}
