use crate::input::Direction;
use crate::settings::SettingsError;

/// Smallest board edge that still leaves room for a starting snake.
pub const MIN_GRID_EDGE: u16 = 3;

/// Grid cell in logical board coordinates (column, row).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring cell one step towards `direction`.
    ///
    /// The result may lie outside the board; bounds are the caller's concern.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns true when `other` is exactly one unit step away.
    #[must_use]
    pub fn is_adjacent_to(self, other: Self) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

/// Fixed board dimensions for one session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    cols: u16,
    rows: u16,
}

impl GridSize {
    /// Creates a board of `cols` x `rows` cells.
    ///
    /// Both edges must be at least [`MIN_GRID_EDGE`].
    pub fn new(cols: u16, rows: u16) -> Result<Self, SettingsError> {
        if cols < MIN_GRID_EDGE || rows < MIN_GRID_EDGE {
            return Err(SettingsError::GridTooSmall { cols, rows });
        }

        Ok(Self { cols, rows })
    }

    #[must_use]
    pub fn cols(self) -> u16 {
        self.cols
    }

    #[must_use]
    pub fn rows(self) -> u16 {
        self.rows
    }

    /// Returns true when `cell` lies on the board.
    #[must_use]
    pub fn is_in_bounds(self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < i32::from(self.cols) && cell.y < i32::from(self.rows)
    }

    /// Returns the total number of cells on the board.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.cols) * usize::from(self.rows)
    }

    /// Returns the centre cell, rounding down on even edges.
    #[must_use]
    pub fn center(self) -> Cell {
        Cell::new(i32::from(self.cols / 2), i32::from(self.rows / 2))
    }

    /// Iterates over every cell in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        let cols = i32::from(self.cols);
        (0..i32::from(self.rows)).flat_map(move |y| (0..cols).map(move |x| Cell::new(x, y)))
    }
}
