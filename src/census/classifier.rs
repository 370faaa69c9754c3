//! Exact template matching of catalogue variants against the grid

use serde::{Deserialize, Serialize};

use crate::catalogue::{Catalogue, Orientation, Pattern, Variant};
use crate::core::types::FormId;
use crate::grid::{live_neighbors, CellGrid, VisitedMask};

/// A life form recognised at an anchor cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub form: FormId,
    /// Top-left corner of the matched variant's bounding box
    pub row: usize,
    pub col: usize,
    pub phase: usize,
    pub orientation: Orientation,
}

/// Whether `pattern` matches the grid cell-for-cell with its top-left at `(row, col)`
///
/// A mask that runs past the grid edge never matches.
pub fn matches_at(grid: &CellGrid, pattern: &Pattern, row: usize, col: usize) -> bool {
    if row + pattern.height() > grid.height || col + pattern.width() > grid.width {
        return false;
    }

    (0..pattern.height()).all(|r| {
        (0..pattern.width()).all(|c| {
            grid.get(row + r, col + c).copied().unwrap_or_default() == pattern.get(r, c)
        })
    })
}

/// Claim the whole bounding box of a matched pattern, dead mask cells included
fn claim(visited: &mut VisitedMask, pattern: &Pattern, row: usize, col: usize) {
    for r in 0..pattern.height() {
        for c in 0..pattern.width() {
            visited.set(row + r, col + c, true);
        }
    }
}

/// Scans a catalogue for the first variant matching at an anchor
pub struct Classifier<'a> {
    catalogue: &'a Catalogue,
}

impl<'a> Classifier<'a> {
    pub fn new(catalogue: &'a Catalogue) -> Self {
        Self { catalogue }
    }

    /// Try to classify the form anchored at `(row, col)`
    ///
    /// An anchor with zero live neighbours only scans the isolated subset.
    /// On a match the variant's bounding box is marked visited. On a miss
    /// `visited` is left untouched.
    pub fn classify_at(
        &self,
        grid: &CellGrid,
        visited: &mut VisitedMask,
        row: usize,
        col: usize,
    ) -> Option<Classification> {
        if visited.get(row, col).copied().unwrap_or(true) {
            return None;
        }

        let found = if live_neighbors(grid, row, col) == 0 {
            Self::first_match(self.catalogue.isolated_variants(), grid, row, col)
        } else {
            Self::first_match(self.catalogue.variants(), grid, row, col)
        };
        let found = found?;

        claim(visited, &found.pattern, row, col);
        Some(Classification {
            form: found.form,
            row,
            col,
            phase: found.phase,
            orientation: found.orientation,
        })
    }

    fn first_match<'v>(
        mut variants: impl Iterator<Item = &'v Variant>,
        grid: &CellGrid,
        row: usize,
        col: usize,
    ) -> Option<&'v Variant> {
        variants.find(|variant| matches_at(grid, &variant.pattern, row, col))
    }

    /// Classify every unvisited cell in row-major order
    pub fn classify_all(&self, grid: &CellGrid, visited: &mut VisitedMask) -> Vec<Classification> {
        let mut found = Vec::new();
        for row in 0..grid.height {
            for col in 0..grid.width {
                if let Some(classification) = self.classify_at(grid, visited, row, col) {
                    found.push(classification);
                }
            }
        }
        found
    }
}
