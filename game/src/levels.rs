use std::sync::LazyLock;

use crate::block::Pose;
use crate::error::LevelError;
use crate::grid::{Grid, LevelMetadata};

include!(concat!(env!("OUT_DIR"), "/levels.rs"));

/// An immutable level template.
#[derive(Clone, Debug)]
pub struct Level {
    name: String,
    display_name: String,
    grid: Grid,
    start: Pose,
}

impl Level {
    /// Parses a level from its tile csv and its json metadata.
    pub fn parse(name: &str, csv: &str, json: &str) -> Result<Self, LevelError> {
        let metadata = LevelMetadata::parse(json)?;
        let grid = Grid::from_csv_and_metadata(csv, &metadata)?;
        Ok(Self {
            name: name.to_string(),
            display_name: metadata.name,
            grid,
            start: metadata.start,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Pose {
        self.start
    }
}

static LEVELS: LazyLock<Vec<Level>> = LazyLock::new(|| {
    LEVEL_DATA
        .iter()
        .map(|(name, csv, json)| {
            Level::parse(name, csv, json)
                .unwrap_or_else(|e| panic!("Built-in level {name} is invalid: {e}"))
        })
        .collect()
});

/// The ordered set of levels a session can load.
#[derive(Clone, Debug)]
pub struct LevelStore {
    levels: Vec<Level>,
}

impl LevelStore {
    pub fn new(levels: Vec<Level>) -> Self {
        assert!(!levels.is_empty(), "a level store needs at least one level");
        Self { levels }
    }

    /// The levels shipped in the `levels/` directory, in file name order.
    pub fn builtin() -> Self {
        Self::new(LEVELS.clone())
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Out-of-range indices snap to the first or last level.
    pub fn clamp_index(&self, index: isize) -> usize {
        let last = self.levels.len() - 1;
        usize::try_from(index).map_or(0, |i| i.min(last))
    }

    pub fn get(&self, index: usize) -> &Level {
        &self.levels[index]
    }

    pub fn levels(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter()
    }
}
