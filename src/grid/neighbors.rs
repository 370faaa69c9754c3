//! Moore-neighbourhood counting on a bounded grid

use super::CellGrid;

/// The 8 Moore-neighbourhood offsets, row-major
#[rustfmt::skip]
pub const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Live neighbours of `(row, col)`, in `0..=8`
///
/// Neighbours past the grid edge count as dead.
#[inline]
pub fn live_neighbors(grid: &CellGrid, row: usize, col: usize) -> u8 {
    MOORE_OFFSETS
        .iter()
        .filter_map(|&(dr, dc)| grid.offset(row, col, dr, dc))
        .filter(|&(r, c)| grid.is_alive(r, c))
        .count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Cell;
    use crate::grid::Grid;

    #[test]
    fn test_corner_has_three_neighbours_at_most() {
        let mut grid: CellGrid = Grid::square(3);
        for row in 0..3 {
            for col in 0..3 {
                grid.set(row, col, Cell::Alive);
            }
        }
        assert_eq!(live_neighbors(&grid, 0, 0), 3);
        assert_eq!(live_neighbors(&grid, 0, 1), 5);
        assert_eq!(live_neighbors(&grid, 1, 1), 8);
    }

    #[test]
    fn test_cell_does_not_count_itself() {
        let mut grid: CellGrid = Grid::square(3);
        grid.set(1, 1, Cell::Alive);
        assert_eq!(live_neighbors(&grid, 1, 1), 0);
        assert_eq!(live_neighbors(&grid, 0, 0), 1);
    }

    #[test]
    fn test_no_wraparound() {
        let mut grid: CellGrid = Grid::square(5);
        grid.set(0, 4, Cell::Alive);
        grid.set(4, 0, Cell::Alive);
        assert_eq!(live_neighbors(&grid, 0, 0), 0);
        assert_eq!(live_neighbors(&grid, 4, 4), 0);
    }
}
