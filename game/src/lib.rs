//! Rules engine for a rolling-block puzzle.
//!
//! A 1x1x2 block stands on one cell or lies across two. Each move tips it
//! over an edge; it must stay fully supported by tiles, may not lie on a
//! fragile tile, and wins by standing on the goal. Drawing and input are left
//! to the caller, which reads [`Game`] after every [`Game::apply_move`] or
//! [`Game::load_level`].

pub(crate) mod block;
pub(crate) mod direction;
pub(crate) mod error;
pub(crate) mod game;
pub(crate) mod grid;
pub(crate) mod levels;
pub(crate) mod position;

pub use block::{Orientation, Pose};
pub use direction::Direction;
pub use error::LevelError;
pub use game::{Game, GameState, PlayState};
pub use grid::{Grid, TileKind};
pub use levels::{Level, LevelStore};
pub use position::{Position, PositionDelta};
