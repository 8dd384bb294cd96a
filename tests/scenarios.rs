use std::collections::HashSet;

use baguette_snake::game::{GameState, GameStatus, OverReason, TickOutcome};
use baguette_snake::grid::{Cell, GridSize, MIN_GRID_EDGE};
use baguette_snake::input::Direction;
use baguette_snake::snake::Snake;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn grid(cols: u16, rows: u16) -> GridSize {
    GridSize::new(cols, rows).expect("test grid is valid")
}

fn segments(state: &GameState) -> Vec<Cell> {
    state.snake().segments().copied().collect()
}

fn assert_body_is_connected(state: &GameState) {
    let body = segments(state);
    for pair in body.windows(2) {
        assert!(
            pair[0].is_adjacent_to(pair[1]),
            "segments {:?} and {:?} are not adjacent",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn body_stays_connected_under_random_play() {
    let mut input_rng = StdRng::seed_from_u64(2024);

    for seed in 0..20 {
        let mut state = GameState::new_with_seed(grid(10, 8), seed);

        for _ in 0..300 {
            if input_rng.gen_bool(0.3) {
                let direction = Direction::ALL[input_rng.gen_range(0..Direction::ALL.len())];
                state.set_direction(direction);
            }
            state.tick();
            assert_body_is_connected(&state);

            let unique: HashSet<Cell> = state.snake().occupied_cells();
            assert_eq!(unique.len(), state.snake().len(), "body overlaps itself");
            if let Some(food) = state.food() {
                assert!(!state.snake().occupies(food));
            }

            if !state.is_running() {
                break;
            }
        }
    }
}

#[test]
fn reversal_request_never_changes_the_committed_direction() {
    let mut state = GameState::new_with_seed(grid(24, 18), 3);

    state.set_direction(Direction::Left);
    state.tick();

    assert_eq!(state.snake().direction(), Direction::Right);
    assert_eq!(state.snake().head(), Cell::new(13, 9));
}

#[test]
fn reversal_of_a_freshly_committed_turn_is_ignored() {
    let mut state = GameState::new_with_seed(grid(24, 18), 4);

    state.set_direction(Direction::Up);
    state.tick();
    state.set_direction(Direction::Down);
    state.tick();

    assert_eq!(state.snake().direction(), Direction::Up);
    assert_eq!(state.snake().head(), Cell::new(12, 7));
}

#[test]
fn growing_tick_adds_one_segment_and_one_point() {
    let snake = Snake::new(Cell::new(5, 5), Direction::Right, 3);
    let mut state = GameState::from_layout(grid(24, 18), snake, Some(Cell::new(6, 5)), 5);
    let tail = state.snake().tail();

    assert_eq!(state.tick(), TickOutcome::Ate);

    assert_eq!(state.snake().len(), 4);
    assert_eq!(state.score(), 1);
    assert_eq!(state.snake().tail(), tail);
    let food = state.food().expect("board has room for more food");
    assert!(!state.snake().occupies(food));
}

#[test]
fn non_growing_tick_frees_the_old_tail() {
    let snake = Snake::new(Cell::new(5, 5), Direction::Right, 3);
    let mut state = GameState::from_layout(grid(24, 18), snake, Some(Cell::new(0, 0)), 6);
    let tail = state.snake().tail();

    assert_eq!(state.tick(), TickOutcome::Moved);

    assert_eq!(state.snake().len(), 3);
    assert_eq!(state.score(), 0);
    assert!(!state.snake().occupies(tail));
    assert_eq!(state.food(), Some(Cell::new(0, 0)));
}

#[test]
fn straight_run_never_self_collides() {
    let snake = Snake::from_segments(
        vec![Cell::new(5, 5), Cell::new(4, 5), Cell::new(3, 5)],
        Direction::Right,
    );
    let mut state = GameState::from_layout(grid(24, 18), snake, Some(Cell::new(0, 0)), 7);

    for _ in 0..10 {
        assert_eq!(state.tick(), TickOutcome::Moved);
    }

    assert_eq!(state.snake().head(), Cell::new(15, 5));
}

#[test]
fn snake_may_chase_its_own_tail() {
    // Four segments around a 2x2 square: the head always steps onto the
    // cell the tail is leaving.
    let snake = Snake::from_segments(
        vec![
            Cell::new(1, 0),
            Cell::new(0, 0),
            Cell::new(0, 1),
            Cell::new(1, 1),
        ],
        Direction::Right,
    );
    let mut state = GameState::from_layout(grid(6, 6), snake, Some(Cell::new(5, 5)), 8);
    let loop_turns = [
        Direction::Down,
        Direction::Left,
        Direction::Up,
        Direction::Right,
    ];

    for direction in loop_turns.iter().cycle().take(16) {
        state.set_direction(*direction);
        assert_eq!(state.tick(), TickOutcome::Moved);
        assert_body_is_connected(&state);
    }

    assert_eq!(state.status(), GameStatus::Running);
    assert_eq!(state.snake().len(), 4);
}

#[test]
fn wall_collision_rolls_back_the_tick() {
    let cols = 24;
    let snake = Snake::new(Cell::new(i32::from(cols) - 1, 5), Direction::Right, 3);
    let mut state = GameState::from_layout(grid(cols, 18), snake, Some(Cell::new(0, 0)), 9);
    let before = segments(&state);

    state.tick();

    assert_eq!(state.status(), GameStatus::Over(OverReason::WallCollision));
    assert_eq!(state.reason(), Some("wall collision"));
    assert_eq!(segments(&state), before);
    assert_eq!(state.food(), Some(Cell::new(0, 0)));
}

#[test]
fn running_into_the_body_ends_the_game() {
    // Head at (2,2) moving up; turning right hits (3,2), which is not the tail.
    let snake = Snake::from_segments(
        vec![
            Cell::new(2, 2),
            Cell::new(2, 3),
            Cell::new(3, 3),
            Cell::new(3, 2),
            Cell::new(3, 1),
        ],
        Direction::Up,
    );
    let mut state = GameState::from_layout(grid(8, 8), snake, Some(Cell::new(7, 7)), 10);
    let before = segments(&state);

    state.set_direction(Direction::Right);
    assert_eq!(state.tick(), TickOutcome::Ended(OverReason::SelfCollision));

    assert_eq!(state.status(), GameStatus::Over(OverReason::SelfCollision));
    assert_eq!(state.reason(), Some("self collision"));
    assert_eq!(segments(&state), before);
}

#[test]
fn filling_the_last_free_cell_wins() {
    // Serpentine over a 3x3 board leaving only (2,2) free.
    let snake = Snake::from_segments(
        vec![
            Cell::new(1, 2),
            Cell::new(0, 2),
            Cell::new(0, 1),
            Cell::new(1, 1),
            Cell::new(2, 1),
            Cell::new(2, 0),
            Cell::new(1, 0),
            Cell::new(0, 0),
        ],
        Direction::Right,
    );
    let mut state = GameState::from_layout(grid(3, 3), snake, Some(Cell::new(2, 2)), 11);

    assert_eq!(state.tick(), TickOutcome::Ended(OverReason::BoardFull));

    assert_eq!(state.score(), 1);
    assert_eq!(state.food(), None);
    assert_eq!(state.snake().len(), 9);
    assert_eq!(state.status(), GameStatus::Over(OverReason::BoardFull));
    assert_eq!(state.reason(), Some("board full / win"));
}

#[test]
fn pause_freezes_the_simulation() {
    let mut state = GameState::new_with_seed(grid(24, 18), 12);
    let before = segments(&state);
    let food = state.food();

    state.toggle_pause();
    assert_eq!(state.status(), GameStatus::Paused);

    for _ in 0..10 {
        assert_eq!(state.tick(), TickOutcome::Idle);
    }

    state.toggle_pause();
    assert_eq!(state.status(), GameStatus::Running);
    assert_eq!(segments(&state), before);
    assert_eq!(state.food(), food);
    assert_eq!(state.score(), 0);
    assert_eq!(state.tick_count(), 0);
}

#[test]
fn direction_requests_while_paused_apply_after_resume() {
    let mut state = GameState::new_with_seed(grid(24, 18), 13);

    state.toggle_pause();
    state.set_direction(Direction::Down);
    state.tick();
    assert_eq!(state.snake().head(), Cell::new(12, 9));

    state.toggle_pause();
    state.tick();
    assert_eq!(state.snake().head(), Cell::new(12, 10));
}

#[test]
fn over_is_terminal_until_reset() {
    let snake = Snake::new(Cell::new(2, 1), Direction::Right, 3);
    let mut state = GameState::from_layout(grid(3, 3), snake, Some(Cell::new(0, 0)), 14);
    state.tick();
    assert_eq!(state.status(), GameStatus::Over(OverReason::WallCollision));

    let before = segments(&state);
    state.toggle_pause();
    state.set_direction(Direction::Down);
    assert_eq!(state.tick(), TickOutcome::Idle);

    assert_eq!(state.status(), GameStatus::Over(OverReason::WallCollision));
    assert_eq!(segments(&state), before);
}

#[test]
fn smallest_boards_start_on_the_board() {
    let edge = MIN_GRID_EDGE;
    let boards = [grid(edge, edge), grid(edge, 18), grid(24, edge), grid(edge + 1, edge)];

    for board in boards {
        for seed in 0..5 {
            let mut state = GameState::new_with_seed(board, seed);
            assert_start_is_valid(&state, board);

            state.tick();
            state.reset();
            assert_start_is_valid(&state, board);
        }
    }
}

fn assert_start_is_valid(state: &GameState, board: GridSize) {
    assert_eq!(state.snake().len(), 3);
    for segment in state.snake().segments() {
        assert!(
            board.is_in_bounds(*segment),
            "segment {segment:?} is off the {}x{} board",
            board.cols(),
            board.rows()
        );
    }
    assert_body_is_connected(state);
    assert_eq!(state.snake().occupied_cells().len(), state.snake().len());
    let food = state.food().expect("a fresh board has room for food");
    assert!(board.is_in_bounds(food));
    assert!(!state.snake().occupies(food));
}

#[test]
fn reset_restores_a_fresh_game_from_any_status() {
    let board = grid(24, 18);
    let expected = vec![Cell::new(12, 9), Cell::new(11, 9), Cell::new(10, 9)];

    let mut running = GameState::new_with_seed(board, 15);
    running.set_direction(Direction::Down);
    running.tick();

    let mut paused = GameState::new_with_seed(board, 16);
    paused.toggle_pause();

    let snake = Snake::new(Cell::new(23, 4), Direction::Right, 3);
    let mut over = GameState::from_layout(board, snake, Some(Cell::new(0, 0)), 17);
    over.tick();
    assert!(matches!(over.status(), GameStatus::Over(_)));

    for state in [&mut running, &mut paused, &mut over] {
        state.reset();

        assert_eq!(state.status(), GameStatus::Running);
        assert_eq!(state.reason(), None);
        assert_eq!(state.score(), 0);
        assert_eq!(state.tick_count(), 0);
        assert_eq!(segments(state), expected);
        assert_eq!(state.snake().direction(), Direction::Right);
        let food = state.food().expect("fresh board has room for food");
        assert!(!state.snake().occupies(food));
    }
}
