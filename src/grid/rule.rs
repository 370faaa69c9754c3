//! Conway step rule and whole-grid evolution
//!
//! Uses rayon to evaluate rows in parallel on large grids.

use rayon::prelude::*;

use super::neighbors::live_neighbors;
use super::CellGrid;
use crate::core::types::Cell;

/// Next state of a cell given its current state and live-neighbour count
///
/// The four rules are applied in order; a later rule overrides an earlier
/// one on the same cell, and a cell no rule touches keeps its state.
#[inline]
pub fn next_state(current: Cell, neighbors: u8) -> Cell {
    let mut next = current;

    // Underpopulation
    if current == Cell::Alive && neighbors < 2 {
        next = Cell::Dead;
    }
    // Survival
    if current == Cell::Alive && (neighbors == 2 || neighbors == 3) {
        next = Cell::Alive;
    }
    // Overpopulation
    if current == Cell::Alive && neighbors > 3 {
        next = Cell::Dead;
    }
    // Birth
    if current == Cell::Dead && neighbors == 3 {
        next = Cell::Alive;
    }

    next
}

/// Write the successor of `current` into `scratch`
///
/// `scratch` is fully overwritten; it must have the same dimensions as
/// `current`. Every cell reads only `current`, so rows are independent.
pub fn evolve_into(current: &CellGrid, scratch: &mut CellGrid, parallel_threshold: usize) {
    debug_assert_eq!(current.width, scratch.width);
    debug_assert_eq!(current.height, scratch.height);

    let width = current.width.max(1);
    let evolve_row = |(row, cells): (usize, &mut [Cell])| {
        for (col, cell) in cells.iter_mut().enumerate() {
            let state = current.get(row, col).copied().unwrap_or_default();
            *cell = next_state(state, live_neighbors(current, row, col));
        }
    };

    if current.len() >= parallel_threshold {
        scratch
            .as_mut_slice()
            .par_chunks_mut(width)
            .enumerate()
            .for_each(evolve_row);
    } else {
        scratch
            .as_mut_slice()
            .chunks_mut(width)
            .enumerate()
            .for_each(evolve_row);
    }
}
