use super::*;
use crate::block::Orientation::{self, *};
use crate::direction::Direction::{self, *};
use crate::grid::TileKind;
use crate::position::Position;

fn state_from_csv(csv: &str, row: i32, col: i32, orientation: Orientation) -> GameState {
    GameState::new(Grid::from_csv(csv), Pose::new(row, col, orientation))
}

fn tile(state: &GameState, row: i32, col: i32) -> TileKind {
    state.grid.at(Position::new(row, col))
}

#[test]
fn standing_block_tips_over() {
    let mut state = state_from_csv("1,1,1\n1,1,1\n1,1,1", 0, 0, Standing);
    assert_eq!(state.apply_move(Right), PlayState::Playing);
    assert_eq!(state.pose, Pose::new(0, 1, LyingHorizontal));
}

#[test]
fn right_then_left_stands_back_up() {
    let mut state = state_from_csv("1,1,1\n1,1,1\n1,1,1", 1, 0, Standing);
    state.apply_move(Right);
    state.apply_move(Left);
    assert_eq!(state.pose, Pose::new(1, 0, Standing));
    assert_eq!(state.play_state, PlayState::Playing);
}

#[test]
fn falling_off_the_edge_keeps_last_pose() {
    let mut state = state_from_csv("1,1,1", 0, 0, Standing);
    assert_eq!(state.apply_move(Left), PlayState::Lost);
    assert_eq!(state.pose, Pose::new(0, 0, Standing));
}

#[test]
fn falling_into_a_hole() {
    // Lying across (0,0),(0,1); rolling down puts half the block over the hole.
    let mut state = state_from_csv("1,1\n1,0", 0, 0, LyingHorizontal);
    assert_eq!(state.apply_move(Down), PlayState::Lost);
    assert_eq!(state.pose, Pose::new(0, 0, LyingHorizontal));
}

#[test]
fn lying_on_fragile_tile_breaks_it() {
    let mut state = state_from_csv("1,3,1", 0, 0, Standing);
    assert_eq!(state.apply_move(Right), PlayState::Lost);
    // The move itself was valid, so the block is committed before it falls.
    assert_eq!(state.pose, Pose::new(0, 1, LyingHorizontal));
    assert_eq!(tile(&state, 0, 1), TileKind::Empty);
    assert_eq!(tile(&state, 0, 2), TileKind::Floor);
}

#[test]
fn standing_on_fragile_tile_is_safe() {
    let mut state = state_from_csv("1,1,3", 0, 0, LyingHorizontal);
    assert_eq!(state.apply_move(Right), PlayState::Playing);
    assert_eq!(state.pose, Pose::new(0, 2, Standing));
    assert_eq!(tile(&state, 0, 2), TileKind::Fragile);
}

#[test]
fn only_first_fragile_tile_breaks() {
    let mut state = state_from_csv("1\n3\n3", 0, 0, Standing);
    assert_eq!(state.apply_move(Down), PlayState::Lost);
    assert_eq!(tile(&state, 1, 0), TileKind::Empty);
    assert_eq!(tile(&state, 2, 0), TileKind::Fragile);
}

#[test]
fn standing_on_goal_wins() {
    let mut state = state_from_csv("2,1,1", 0, 1, LyingHorizontal);
    assert_eq!(state.apply_move(Left), PlayState::Won);
    assert_eq!(state.pose, Pose::new(0, 0, Standing));
}

#[test]
fn lying_across_goal_does_not_win() {
    let mut state = state_from_csv("1,1,1\n1,2,1\n1,1,1", 0, 1, Standing);
    assert_eq!(state.apply_move(Down), PlayState::Playing);
    assert_eq!(state.pose, Pose::new(1, 1, LyingVertical));
}

#[test]
fn starting_on_goal_is_not_a_win() {
    let state = state_from_csv("1,2", 0, 1, Standing);
    assert_eq!(state.play_state, PlayState::Playing);
}

#[test]
fn goal_next_to_fragile_tiles() {
    // Rolling up lands standing on the goal; the fragile column is never touched.
    let mut state = state_from_csv("2,3\n1,3\n1,3", 1, 0, LyingVertical);
    assert_eq!(state.apply_move(Up), PlayState::Won);
    assert_eq!(tile(&state, 0, 1), TileKind::Fragile);
}

#[test]
fn no_moves_after_losing() {
    let mut state = state_from_csv("1,3,1", 0, 0, Standing);
    state.apply_move(Right);
    let before = state.clone();
    for dir in Direction::all() {
        assert_eq!(state.apply_move(dir), PlayState::Lost);
    }
    assert_eq!(state, before);
}

#[test]
fn no_moves_after_winning() {
    let mut state = state_from_csv("1,2,1,1", 0, 2, LyingHorizontal);
    assert_eq!(state.apply_move(Left), PlayState::Won);
    let before = state.clone();
    for dir in Direction::all() {
        assert_eq!(state.apply_move(dir), PlayState::Won);
    }
    assert_eq!(state, before);
}

fn game() -> Game {
    Game::new()
}

#[test]
fn new_game_starts_on_first_level() {
    let game = game();
    assert_eq!(game.current_index(), 0);
    assert_eq!(game.level_count(), 3);
    assert_eq!(game.level_name(), "Basic");
    assert_eq!(game.pose(), Pose::new(1, 2, LyingHorizontal));
    assert_eq!(game.play_state(), PlayState::Playing);
}

#[test]
fn load_level_clamps_index() {
    let mut game = game();
    game.load_level(9999);
    assert_eq!(game.current_index(), 2);
    game.load_level(-5);
    assert_eq!(game.current_index(), 0);
}

#[test]
fn next_and_prev_stop_at_ends() {
    let mut game = game();
    game.prev_level();
    assert_eq!(game.current_index(), 0);
    game.next_level();
    game.next_level();
    game.next_level();
    assert_eq!(game.current_index(), 2);
    assert_eq!(game.level_name(), "Narrow Path");
    game.prev_level();
    assert_eq!(game.current_index(), 1);
}

#[test]
fn first_level_can_be_solved() {
    let mut game = game();
    assert_eq!(game.apply_move(Up), PlayState::Playing);
    assert_eq!(game.pose(), Pose::new(0, 2, LyingHorizontal));
    assert_eq!(game.apply_move(Right), PlayState::Playing);
    assert_eq!(game.pose(), Pose::new(0, 4, Standing));
    assert_eq!(game.apply_move(Down), PlayState::Playing);
    assert_eq!(game.pose(), Pose::new(1, 4, LyingVertical));
    assert_eq!(game.apply_move(Left), PlayState::Playing);
    assert_eq!(game.pose(), Pose::new(1, 3, LyingVertical));
    assert_eq!(game.apply_move(Down), PlayState::Won);
    assert_eq!(game.pose(), Pose::new(3, 3, Standing));
}

#[test]
fn every_builtin_level_can_be_solved() {
    let solutions: [&[Direction]; 3] = [
        &[Up, Right, Down, Left, Down],
        &[Down, Right, Right, Down, Down, Right, Right, Up],
        &[Right, Right, Down, Down, Right, Down, Left, Up, Right, Down, Left],
    ];
    let mut game = game();
    for (index, moves) in solutions.into_iter().enumerate() {
        game.load_level(index as isize);
        let (last, rest) = moves.split_last().unwrap();
        for &dir in rest {
            assert_eq!(game.apply_move(dir), PlayState::Playing, "level {index}");
        }
        assert_eq!(game.apply_move(*last), PlayState::Won, "level {index}");
    }
}

#[test]
fn restart_restores_broken_tiles() {
    let level = Level::parse(
        "fragile",
        "1,3,1",
        r#"{"name": "Fragile", "width": 3, "height": 1,
            "start": {"row": 0, "col": 0, "orientation": "standing"}}"#,
    )
    .unwrap();
    let mut game = Game::with_store(LevelStore::new(vec![level]));
    assert_eq!(game.apply_move(Right), PlayState::Lost);
    assert_eq!(game.grid().at(Position::new(0, 1)), TileKind::Empty);

    game.restart();
    assert_eq!(game.play_state(), PlayState::Playing);
    assert_eq!(game.pose(), Pose::new(0, 0, Standing));
    assert_eq!(game.grid().at(Position::new(0, 1)), TileKind::Fragile);
}

#[test]
fn breaking_a_tile_leaves_the_template_intact() {
    let level = Level::parse(
        "fragile",
        "1,3,1",
        r#"{"name": "Fragile", "width": 3, "height": 1,
            "start": {"row": 0, "col": 0, "orientation": "standing"}}"#,
    )
    .unwrap();
    let mut game = Game::with_store(LevelStore::new(vec![level]));
    game.apply_move(Right);
    assert_eq!(game.grid().at(Position::new(0, 1)), TileKind::Empty);
    assert_eq!(
        game.store.get(0).grid().at(Position::new(0, 1)),
        TileKind::Fragile
    );
}
