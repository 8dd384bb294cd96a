use std::collections::{HashSet, VecDeque};

use crate::grid::Cell;
use crate::input::Direction;

/// Ordered snake body plus its committed and pending headings.
///
/// This type only mutates structure. Bounds and collision rules live in
/// [`crate::game::GameState`].
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    pending_direction: Direction,
}

impl Snake {
    /// Creates a straight snake of `length` cells with its head at `head`,
    /// trailing away from `direction`.
    #[must_use]
    pub fn new(head: Cell, direction: Direction, length: usize) -> Self {
        let trailing = direction.opposite();
        let mut body = VecDeque::with_capacity(length.max(1));
        let mut cell = head;

        for _ in 0..length.max(1) {
            body.push_back(cell);
            cell = cell.step(trailing);
        }

        Self {
            body,
            direction,
            pending_direction: direction,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// Meant for laying out scenarios in tests; games start from
    /// [`Snake::new`].
    ///
    /// # Panics
    ///
    /// Panics if `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>, direction: Direction) -> Self {
        assert!(!segments.is_empty(), "snake needs at least one segment");

        Self {
            body: VecDeque::from(segments),
            direction,
            pending_direction: direction,
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Returns the current tail position.
    #[must_use]
    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    /// Returns true when `requested` is the exact inverse of `current`.
    #[must_use]
    pub fn would_reverse(requested: Direction, current: Direction) -> bool {
        requested == current.opposite()
    }

    /// Stores `direction` as the heading for the next tick, replacing any
    /// earlier pending heading.
    pub fn set_pending_direction(&mut self, direction: Direction) {
        self.pending_direction = direction;
    }

    /// Promotes the pending heading to the committed one and returns it.
    pub fn commit_direction(&mut self) -> Direction {
        self.direction = self.pending_direction;
        self.direction
    }

    /// Prepends `new_head`; the tail is dropped unless the snake `grows`.
    pub fn advance(&mut self, new_head: Cell, grows: bool) {
        self.body.push_front(new_head);
        if !grows {
            let _ = self.body.pop_back();
        }
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Returns true if a segment other than the tail occupies `cell`.
    #[must_use]
    pub fn occupies_excluding_tail(&self, cell: Cell) -> bool {
        self.body
            .iter()
            .take(self.body.len() - 1)
            .any(|segment| *segment == cell)
    }

    /// Collects every occupied cell into a set for membership tests.
    #[must_use]
    pub fn occupied_cells(&self) -> HashSet<Cell> {
        self.body.iter().copied().collect()
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake keeps at least one segment.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the heading used by the most recent tick.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the heading the next tick will commit.
    #[must_use]
    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}
