use crate::block::Pose;
use crate::grid::Grid;
use crate::levels::{Level, LevelStore};

mod roll;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayState {
    Playing,
    Lost,
    Won,
}

/// Everything that changes while a level is being played.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub(crate) grid: Grid,
    pub(crate) pose: Pose,
    pub(crate) play_state: PlayState,
}

impl GameState {
    pub fn new(grid: Grid, pose: Pose) -> Self {
        Self {
            grid,
            pose,
            play_state: PlayState::Playing,
        }
    }

    /// A fresh attempt at `level`, on a private copy of its tiles.
    pub fn from_level(level: &Level) -> Self {
        Self::new(level.grid().clone(), level.start())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn play_state(&self) -> PlayState {
        self.play_state
    }
}

/// A play session over a set of levels.
#[derive(Clone, Debug)]
pub struct Game {
    store: LevelStore,
    current_level: usize,
    pub(crate) state: GameState,
}

impl Game {
    /// A session on the built-in levels, starting at the first one.
    pub fn new() -> Self {
        Self::with_store(LevelStore::builtin())
    }

    pub fn with_store(store: LevelStore) -> Self {
        let state = GameState::from_level(store.get(0));
        Self {
            store,
            current_level: 0,
            state,
        }
    }

    /// Replaces the session with a fresh attempt at `index`, clamped to the
    /// available levels.
    pub fn load_level(&mut self, index: isize) {
        self.current_level = self.store.clamp_index(index);
        let level = self.store.get(self.current_level);
        self.state = GameState::from_level(level);
        log::debug!(
            "Loaded level {} ({:?}, {}x{})",
            self.current_level,
            level.display_name(),
            level.grid().width(),
            level.grid().height()
        );
    }

    pub fn restart(&mut self) {
        self.load_level(self.current_index() as isize);
    }

    pub fn next_level(&mut self) {
        self.load_level(self.current_index() as isize + 1);
    }

    pub fn prev_level(&mut self) {
        self.load_level(self.current_index() as isize - 1);
    }

    pub fn current_index(&self) -> usize {
        self.current_level
    }

    pub fn level_count(&self) -> usize {
        self.store.level_count()
    }

    pub fn level_name(&self) -> &str {
        self.store.get(self.current_level).display_name()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn grid(&self) -> &Grid {
        self.state.grid()
    }

    pub fn pose(&self) -> Pose {
        self.state.pose()
    }

    pub fn play_state(&self) -> PlayState {
        self.state.play_state()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
