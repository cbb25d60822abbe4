use crate::block::Pose;
use crate::direction::Direction;
use crate::grid::TileKind;
use crate::position::Position;

use super::{Game, GameState, PlayState};

impl GameState {
    /// Rolls the block once and resolves what it lands on.
    ///
    /// Does nothing once the attempt is over.
    pub fn apply_move(&mut self, dir: Direction) -> PlayState {
        if self.play_state != PlayState::Playing {
            return self.play_state;
        }

        let candidate = self.pose.rolled(dir);
        if !self.grid.supports(candidate) {
            // The block keeps its last supported pose.
            log::info!("Block fell rolling {dir:?} from {:?}", self.pose);
            self.play_state = PlayState::Lost;
            return self.play_state;
        }

        self.pose = candidate;
        log::debug!("Rolled {dir:?} to {candidate:?}");

        if let Some(cell) = self.fragile_under(candidate) {
            *self.grid.at_mut(cell) = TileKind::Empty;
            log::info!("Fragile tile at {cell:?} gave way");
            self.play_state = PlayState::Lost;
            return self.play_state;
        }

        if candidate.is_standing() && self.grid.at(candidate.anchor()) == TileKind::Goal {
            log::info!("Reached the goal at {:?}", candidate.anchor());
            self.play_state = PlayState::Won;
        }

        self.play_state
    }

    /// The first fragile cell that a lying block rests on.
    fn fragile_under(&self, pose: Pose) -> Option<Position> {
        if pose.is_standing() {
            return None;
        }
        pose.cells().find(|&cell| self.grid.at(cell) == TileKind::Fragile)
    }
}

impl Game {
    pub fn apply_move(&mut self, dir: Direction) -> PlayState {
        self.state.apply_move(dir)
    }
}
