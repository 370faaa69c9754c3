//! Per-generation census of the grid
//!
//! Classification runs first over every cell in row-major order, then
//! the remaining live cells are grouped into "other" clusters. Both
//! passes share one visited mask, so every live cell is attributed
//! exactly once.

pub mod classifier;
pub mod cluster;

use crate::catalogue::Catalogue;
use crate::grid::{CellGrid, Grid, VisitedMask};

pub use classifier::{matches_at, Classification, Classifier};
pub use cluster::count_others;

/// Result of a census over one grid snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Census {
    /// Recognised forms in anchor order
    pub classified: Vec<Classification>,
    /// Live clusters no form claimed
    pub unclassified: u32,
}

impl Census {
    pub fn total(&self) -> usize {
        self.classified.len() + self.unclassified as usize
    }
}

/// Classify and count every being in `grid`
pub fn take_census(grid: &CellGrid, catalogue: &Catalogue) -> Census {
    let mut visited: VisitedMask = Grid::new(grid.width, grid.height);

    let classified = Classifier::new(catalogue).classify_all(grid, &mut visited);
    let unclassified = count_others(grid, &mut visited);

    Census {
        classified,
        unclassified,
    }
}
