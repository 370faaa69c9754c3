//! Immutable rectangular cell masks and their orientations

use serde::{Deserialize, Serialize};

use crate::core::error::{CensusError, Result};
use crate::core::types::Cell;

/// One orientation of a phase mask, in the order variants are generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Canonical,
    Clockwise90,
    Clockwise180,
    Clockwise270,
    /// Fourth successive rotation, geometrically the canonical mask again
    FullTurn,
    /// Transpose of the canonical mask
    Transpose,
}

impl Orientation {
    pub const ALL: [Orientation; 6] = [
        Orientation::Canonical,
        Orientation::Clockwise90,
        Orientation::Clockwise180,
        Orientation::Clockwise270,
        Orientation::FullTurn,
        Orientation::Transpose,
    ];
}

/// Rectangular mask of exact cell states (no "don't care" cells)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pattern {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Pattern {
    /// Parse text rows where `O` is alive and `.` is dead
    pub fn parse(form: &str, rows: &[&str]) -> Result<Self> {
        let malformed = |reason: String| CensusError::MalformedPattern {
            form: form.to_string(),
            reason,
        };

        let width = rows.first().map(|row| row.chars().count()).unwrap_or(0);
        if rows.is_empty() || width == 0 {
            return Err(malformed("mask is empty".into()));
        }

        let mut cells = Vec::with_capacity(rows.len() * width);
        for (r, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(malformed(format!(
                    "row {} has {} cells, expected {}",
                    r,
                    row.chars().count(),
                    width
                )));
            }
            for glyph in row.chars() {
                cells.push(match glyph {
                    'O' => Cell::Alive,
                    '.' => Cell::Dead,
                    other => {
                        return Err(malformed(format!(
                            "unexpected glyph {:?} in row {}",
                            other, r
                        )))
                    }
                });
            }
        }

        Ok(Self {
            height: rows.len(),
            width,
            cells,
        })
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Cell at `(row, col)`; positions outside the mask read as dead
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        if row < self.height && col < self.width {
            self.cells[row * self.width + col]
        } else {
            Cell::Dead
        }
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Bounding-box area
    pub fn area(&self) -> usize {
        self.height * self.width
    }

    /// Rotate 90 degrees clockwise: `(r, c)` of an h×w mask lands on
    /// `(c, h - 1 - r)` of the w×h result
    pub fn rotate_clockwise(&self) -> Self {
        let (h, w) = (self.height, self.width);
        let mut cells = vec![Cell::Dead; h * w];
        for r in 0..h {
            for c in 0..w {
                cells[c * h + (h - 1 - r)] = self.get(r, c);
            }
        }
        Self {
            height: w,
            width: h,
            cells,
        }
    }

    pub fn transpose(&self) -> Self {
        let (h, w) = (self.height, self.width);
        let mut cells = vec![Cell::Dead; h * w];
        for r in 0..h {
            for c in 0..w {
                cells[c * h + r] = self.get(r, c);
            }
        }
        Self {
            height: w,
            width: h,
            cells,
        }
    }

    /// The six orientation variants, in generation order
    pub fn orientations(&self) -> Vec<(Orientation, Pattern)> {
        let mut variants = Vec::with_capacity(Orientation::ALL.len());
        variants.push((Orientation::Canonical, self.clone()));

        let mut rotated = self.clone();
        for orientation in [
            Orientation::Clockwise90,
            Orientation::Clockwise180,
            Orientation::Clockwise270,
            Orientation::FullTurn,
        ] {
            rotated = rotated.rotate_clockwise();
            variants.push((orientation, rotated.clone()));
        }

        variants.push((Orientation::Transpose, self.transpose()));
        variants
    }

    /// Whether this mask can match at an anchor with zero live neighbours:
    /// the 2×2 block at the origin is dead apart from the origin itself
    pub fn qualifies_isolated(&self) -> bool {
        [(0, 1), (1, 0), (1, 1)]
            .iter()
            .all(|&(r, c)| self.get(r, c) == Cell::Dead)
    }
}
