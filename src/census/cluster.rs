//! Connected-component counting for live cells no form claimed

use std::collections::VecDeque;

use crate::grid::neighbors::MOORE_OFFSETS;
use crate::grid::{CellGrid, VisitedMask};

/// Flood-fill the 8-connected live component containing `(row, col)`,
/// marking every reached cell visited. Returns the component size.
fn flood_fill(grid: &CellGrid, visited: &mut VisitedMask, row: usize, col: usize) -> usize {
    let mut queue = VecDeque::new();
    visited.set(row, col, true);
    queue.push_back((row, col));
    let mut size = 0;

    while let Some((r, c)) = queue.pop_front() {
        size += 1;
        for &(dr, dc) in &MOORE_OFFSETS {
            let Some((nr, nc)) = grid.offset(r, c, dr, dc) else {
                continue;
            };
            if grid.is_alive(nr, nc) && visited.get(nr, nc) == Some(&false) {
                visited.set(nr, nc, true);
                queue.push_back((nr, nc));
            }
        }
    }

    size
}

/// Count the live clusters still unvisited after classification
///
/// Every live cell ends visited; each unvisited 8-connected component
/// counts once whatever its size.
pub fn count_others(grid: &CellGrid, visited: &mut VisitedMask) -> u32 {
    let mut clusters = 0;

    for row in 0..grid.height {
        for col in 0..grid.width {
            if grid.is_alive(row, col) && visited.get(row, col) == Some(&false) {
                let size = flood_fill(grid, visited, row, col);
                tracing::trace!("Unclassified cluster of {} cells at ({}, {})", size, row, col);
                clusters += 1;
            }
        }
    }

    clusters
}
