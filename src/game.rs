use std::fmt;

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::START_LENGTH;
use crate::food::spawn_food;
use crate::grid::{Cell, GridSize};
use crate::input::Direction;
use crate::snake::Snake;

/// Why a session ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OverReason {
    WallCollision,
    SelfCollision,
    BoardFull,
}

impl OverReason {
    /// Returns the status text shown for this outcome.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WallCollision => "wall collision",
            Self::SelfCollision => "self collision",
            Self::BoardFull => "board full / win",
        }
    }

    /// Returns true for the only winning outcome.
    #[must_use]
    pub fn is_win(self) -> bool {
        self == Self::BoardFull
    }
}

impl fmt::Display for OverReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    Paused,
    Over(OverReason),
}

/// What a single call to [`GameState::tick`] did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// The game was not running; nothing changed.
    Idle,
    /// The snake moved one cell without eating.
    Moved,
    /// The snake ate and grew by one segment.
    Ate,
    /// The tick ended the game.
    Ended(OverReason),
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    snake: Snake,
    food: Option<Cell>,
    score: u32,
    tick_count: u64,
    status: GameStatus,
    grid: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh session seeded from system entropy.
    #[must_use]
    pub fn new(grid: GridSize) -> Self {
        Self::with_rng(grid, StdRng::from_entropy())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(grid: GridSize, seed: u64) -> Self {
        Self::with_rng(grid, StdRng::seed_from_u64(seed))
    }

    /// Creates a running session around an explicit snake layout.
    ///
    /// Every segment must lie on the board and `food` must be off the snake;
    /// both are checked in debug builds only.
    #[must_use]
    pub fn from_layout(grid: GridSize, snake: Snake, food: Option<Cell>, seed: u64) -> Self {
        debug_assert!(
            snake.segments().all(|segment| grid.is_in_bounds(*segment)),
            "snake layout leaves the board"
        );
        debug_assert!(
            food.is_none_or(|cell| grid.is_in_bounds(cell) && !snake.occupies(cell)),
            "food must be on the board and off the snake"
        );

        Self {
            snake,
            food,
            score: 0,
            tick_count: 0,
            status: GameStatus::Running,
            grid,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn with_rng(grid: GridSize, mut rng: StdRng) -> Self {
        let snake = starting_snake(grid);
        let food = spawn_food(&mut rng, grid, &snake.occupied_cells());

        Self {
            snake,
            food,
            score: 0,
            tick_count: 0,
            status: GameStatus::Running,
            grid,
            rng,
        }
    }

    /// Discards the session and starts over; the random stream carries on.
    pub fn reset(&mut self) {
        self.snake = starting_snake(self.grid);
        self.food = spawn_food(&mut self.rng, self.grid, &self.snake.occupied_cells());
        self.score = 0;
        self.tick_count = 0;
        self.status = GameStatus::Running;
        info!("game reset on {}x{} grid", self.grid.cols(), self.grid.rows());
    }

    /// Requests a heading for the next tick.
    ///
    /// Reversals of the committed heading and requests after game over are
    /// dropped.
    pub fn set_direction(&mut self, requested: Direction) {
        if matches!(self.status, GameStatus::Over(_)) {
            return;
        }

        if Snake::would_reverse(requested, self.snake.direction()) {
            return;
        }

        self.snake.set_pending_direction(requested);
    }

    /// Flips between running and paused. Has no effect once the game is over.
    pub fn toggle_pause(&mut self) {
        self.status = match self.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            other => other,
        };
    }

    /// Advances simulation by one gameplay tick.
    ///
    /// A tick either commits a full step or ends the game before touching
    /// the snake, food or score.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != GameStatus::Running {
            return TickOutcome::Idle;
        }

        self.tick_count += 1;
        let direction = self.snake.commit_direction();
        let new_head = self.snake.head().step(direction);

        if !self.grid.is_in_bounds(new_head) {
            return self.finish(OverReason::WallCollision);
        }

        let grows = self.food == Some(new_head);

        // The tail vacates its cell this tick unless the snake grows.
        let collides = if grows {
            self.snake.occupies(new_head)
        } else {
            self.snake.occupies_excluding_tail(new_head)
        };
        if collides {
            return self.finish(OverReason::SelfCollision);
        }

        self.snake.advance(new_head, grows);

        if !grows {
            return TickOutcome::Moved;
        }

        self.score += 1;
        self.food = spawn_food(&mut self.rng, self.grid, &self.snake.occupied_cells());
        debug!("ate at ({}, {}), score {}", new_head.x, new_head.y, self.score);

        if self.food.is_none() {
            return self.finish(OverReason::BoardFull);
        }

        TickOutcome::Ate
    }

    fn finish(&mut self, reason: OverReason) -> TickOutcome {
        self.status = GameStatus::Over(reason);
        info!(
            "game over after {} ticks: {reason}, score {}",
            self.tick_count, self.score
        );
        TickOutcome::Ended(reason)
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[must_use]
    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the terminal reason text; `None` unless the game is over.
    #[must_use]
    pub fn reason(&self) -> Option<&'static str> {
        match self.status {
            GameStatus::Over(reason) => Some(reason.as_str()),
            _ => None,
        }
    }

    /// Number of ticks executed since the last reset.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }
}

/// Leftmost head column that keeps the trailing body on the board.
const START_HEAD_MIN_X: i32 = START_LENGTH as i32 - 1;

/// Centres the snake, nudging the head right on narrow boards.
fn starting_snake(grid: GridSize) -> Snake {
    let center = grid.center();
    let head = Cell::new(center.x.max(START_HEAD_MIN_X), center.y);
    Snake::new(head, Direction::Right, START_LENGTH)
}
