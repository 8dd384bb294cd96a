use std::collections::HashSet;

use rand::Rng;

use crate::grid::{Cell, GridSize};

/// Picks a free cell uniformly at random.
///
/// Free cells are enumerated in row-major order before sampling, so the
/// running time is bounded by the board size even when it is almost full.
/// Returns `None` when every cell is occupied.
#[must_use]
pub fn spawn_food<R: Rng + ?Sized>(
    rng: &mut R,
    grid: GridSize,
    occupied: &HashSet<Cell>,
) -> Option<Cell> {
    let candidates: Vec<Cell> = grid.cells().filter(|cell| !occupied.contains(cell)).collect();

    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}
