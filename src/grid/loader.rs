//! Initial-state input: seed coordinate files and random fills
//!
//! A seed file lists one live cell per line as `x,y` (column, row).
//! Bad lines are skipped with a warning rather than failing the run.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::path::Path;

use super::{CellGrid, Grid};
use crate::core::error::Result;
use crate::core::types::Cell;

/// Result of parsing a seed file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedLoad {
    /// Live cells as `(row, col)`, in file order
    pub cells: Vec<(usize, usize)>,
    /// Lines that were malformed or out of range
    pub skipped: usize,
}

impl SeedLoad {
    /// Build an N×N grid with every loaded cell alive
    pub fn into_grid(self, size: usize) -> CellGrid {
        let mut grid = Grid::square(size);
        for (row, col) in self.cells {
            grid.set(row, col, Cell::Alive);
        }
        grid
    }
}

fn parse_coordinate(line: &str) -> Option<(usize, usize)> {
    let parts: Vec<&str> = if line.contains(',') {
        line.split(',').map(str::trim).collect()
    } else {
        line.split_whitespace().collect()
    };
    let mut parts = parts.into_iter();

    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((x, y))
}

/// Parse seed text for an N×N universe
///
/// Accepts `x,y` and the whitespace-separated `x y` form. Blank lines and
/// `#` comments are ignored.
pub fn parse_seed(text: &str, size: usize) -> SeedLoad {
    parse_seed_bytes(text.as_bytes(), size)
}

/// Parse raw seed bytes, decoding each line on its own
///
/// A line that is not valid UTF-8 is skipped like any other malformed line.
pub fn parse_seed_bytes(bytes: &[u8], size: usize) -> SeedLoad {
    let mut load = SeedLoad::default();

    for (line_no, raw) in bytes.split(|&b| b == b'\n').enumerate() {
        let line = match std::str::from_utf8(raw) {
            Ok(line) => line.trim(),
            Err(_) => {
                tracing::warn!("Seed line {}: not valid UTF-8, skipping", line_no + 1);
                load.skipped += 1;
                continue;
            }
        };
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match parse_coordinate(line) {
            Some((x, y)) if x < size && y < size => load.cells.push((y, x)),
            Some((x, y)) => {
                tracing::warn!(
                    "Seed line {}: ({}, {}) is outside the {}x{} grid, skipping",
                    line_no + 1,
                    x,
                    y,
                    size,
                    size
                );
                load.skipped += 1;
            }
            None => {
                tracing::warn!("Seed line {}: cannot parse {:?}, skipping", line_no + 1, line);
                load.skipped += 1;
            }
        }
    }

    load
}

/// Load a seed file from disk into an N×N grid
pub fn load_seed_file(path: &Path, size: usize) -> Result<CellGrid> {
    let bytes = std::fs::read(path)?;
    let load = parse_seed_bytes(&bytes, size);
    tracing::info!(
        "Loaded {} live cells from {} ({} lines skipped)",
        load.cells.len(),
        path.display(),
        load.skipped
    );
    Ok(load.into_grid(size))
}

/// N×N grid where each cell is alive with `alive_probability`
pub fn random_grid(size: usize, alive_probability: f64, seed: u64) -> CellGrid {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut grid = Grid::square(size);
    for row in 0..size {
        for col in 0..size {
            if rng.gen_bool(alive_probability.clamp(0.0, 1.0)) {
                grid.set(row, col, Cell::Alive);
            }
        }
    }
    grid
}
