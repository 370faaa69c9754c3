//! Bounded 2D grids: the cell universe and the per-generation visited mask

pub mod loader;
pub mod neighbors;
pub mod rule;

use std::fmt;

use crate::catalogue::Pattern;
use crate::core::types::Cell;

pub use loader::{load_seed_file, parse_seed, parse_seed_bytes, random_grid, SeedLoad};
pub use neighbors::live_neighbors;
pub use rule::{evolve_into, next_state};

/// Generic row-major 2D grid with a hard boundary (no wraparound)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T: Clone + Default> {
    pub width: usize,
    pub height: usize,
    data: Vec<T>,
}

/// The cell universe
pub type CellGrid = Grid<Cell>;

/// Cells already claimed by a classified form or an "other" cluster
pub type VisitedMask = Grid<bool>;

impl<T: Clone + Default> Grid<T> {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![T::default(); width * height],
        }
    }

    pub fn square(size: usize) -> Self {
        Self::new(size, size)
    }

    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if self.contains(row, col) {
            Some(&self.data[row * self.width + col])
        } else {
            None
        }
    }

    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if self.contains(row, col) {
            Some(&mut self.data[row * self.width + col])
        } else {
            None
        }
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        if self.contains(row, col) {
            self.data[row * self.width + col] = value;
        }
    }

    /// Coordinate reached by moving `(dr, dc)` from `(row, col)`, if it is on the grid
    #[inline]
    pub fn offset(&self, row: usize, col: usize, dr: isize, dc: isize) -> Option<(usize, usize)> {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        self.contains(r, c).then_some((r, c))
    }

    /// Reset every cell to its default value
    pub fn clear(&mut self) {
        self.data.fill(T::default());
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Rows as slices, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.data.chunks(self.width.max(1))
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl Grid<Cell> {
    #[inline]
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(|cell| cell.is_alive())
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.data.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Coordinates of every live cell in row-major order
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        self.data
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(i, _)| (i / self.width, i % self.width))
            .collect()
    }

    /// Stamp a pattern with its top-left corner at `(row, col)`
    ///
    /// Mask cells that would land outside the grid are dropped.
    pub fn place(&mut self, pattern: &Pattern, row: usize, col: usize) {
        for r in 0..pattern.height() {
            for c in 0..pattern.width() {
                self.set(row + r, col + c, pattern.get(r, c));
            }
        }
    }
}

impl fmt::Display for Grid<Cell> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                f.write_str(if cell.is_alive() { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_out_of_bounds_is_none() {
        let grid: CellGrid = Grid::square(4);
        assert!(grid.get(3, 3).is_some());
        assert!(grid.get(4, 0).is_none());
        assert!(grid.get(0, 4).is_none());
    }

    #[test]
    fn test_set_ignores_out_of_bounds() {
        let mut grid: CellGrid = Grid::square(3);
        grid.set(5, 5, Cell::Alive);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_offset_respects_boundary() {
        let grid: VisitedMask = Grid::square(3);
        assert_eq!(grid.offset(0, 0, -1, 0), None);
        assert_eq!(grid.offset(0, 0, 1, 1), Some((1, 1)));
        assert_eq!(grid.offset(2, 2, 0, 1), None);
    }

    #[test]
    fn test_live_cells_row_major() {
        let mut grid: CellGrid = Grid::square(3);
        grid.set(2, 0, Cell::Alive);
        grid.set(0, 2, Cell::Alive);
        assert_eq!(grid.live_cells(), vec![(0, 2), (2, 0)]);
    }

    #[test]
    fn test_place_clips_at_edge() {
        let pattern = Pattern::parse("test", &["OO", "OO"]).unwrap();
        let mut grid: CellGrid = Grid::square(3);
        grid.place(&pattern, 2, 2);
        assert_eq!(grid.live_cells(), vec![(2, 2)]);
    }

    #[test]
    fn test_display_renders_rows() {
        let mut grid: CellGrid = Grid::new(3, 2);
        grid.set(0, 1, Cell::Alive);
        assert_eq!(grid.to_string(), ".#.\n...\n");
    }
}
