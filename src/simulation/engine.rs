//! Generation engine - orchestrates one simulation step
//!
//! Each step:
//! snapshot -> next grid into scratch -> census of the snapshot ->
//! report + cumulative stats -> swap grids
//!
//! Rule evaluation and the census both read only the pre-step grid, so
//! no read ever observes a partially updated generation.

use serde::{Deserialize, Serialize};

use crate::catalogue::Catalogue;
use crate::census::take_census;
use crate::core::error::{CensusError, Result};
use crate::core::types::Generation;
use crate::grid::{evolve_into, CellGrid, Grid};
use crate::simulation::report::GenerationReport;
use crate::simulation::stats::{CumulativeStats, StatsAggregator};

/// Minimum cell count before rows are evaluated in parallel
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    /// Constructed, no generation processed yet
    Idle,
    Running,
    /// The generation budget is spent; further steps are rejected
    Finished,
}

pub struct GenerationEngine {
    current: CellGrid,
    scratch: CellGrid,
    catalogue: Catalogue,
    stats: StatsAggregator,
    state: EngineState,
    next_generation: Generation,
    total_generations: u32,
    parallel_threshold: usize,
}

impl GenerationEngine {
    /// Create an engine over a square grid for `total_generations` steps
    pub fn new(grid: CellGrid, catalogue: Catalogue, total_generations: u32) -> Result<Self> {
        if grid.is_empty() || grid.width != grid.height {
            return Err(CensusError::InvalidConfig(format!(
                "grid must be square and non-empty, got {}x{}",
                grid.height, grid.width
            )));
        }
        if total_generations == 0 {
            return Err(CensusError::InvalidConfig("generations must be at least 1".into()));
        }

        let scratch = Grid::new(grid.width, grid.height);
        let stats = StatsAggregator::new(catalogue.len());

        Ok(Self {
            current: grid,
            scratch,
            catalogue,
            stats,
            state: EngineState::Idle,
            next_generation: 0,
            total_generations,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        })
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Process one generation and return its report
    ///
    /// The returned report describes the grid as it was before the step;
    /// afterwards [`grid`](Self::grid) holds the next generation. The
    /// report of the last generation carries the run's incidence block.
    pub fn step(&mut self) -> Result<GenerationReport> {
        if self.state == EngineState::Finished {
            return Err(CensusError::RunFinished(self.total_generations));
        }
        self.state = EngineState::Running;
        let generation = self.next_generation;

        evolve_into(&self.current, &mut self.scratch, self.parallel_threshold);

        let census = take_census(&self.current, &self.catalogue);
        let mut report = GenerationReport::from_census(generation, &self.catalogue, &census);
        self.stats.record(&report);

        tracing::debug!(
            "Generation {}: {} classified, {} unclassified, population {} -> {}",
            generation,
            report.classified_count(),
            report.unclassified,
            self.current.population(),
            self.scratch.population()
        );

        std::mem::swap(&mut self.current, &mut self.scratch);
        self.next_generation += 1;

        if generation + 1 >= self.total_generations {
            self.state = EngineState::Finished;
            report.incidence = Some(self.stats.incidence(&self.catalogue));
            tracing::info!(
                "Run finished after {} generations: {} classified, {} unclassified",
                self.total_generations,
                self.stats.stats().classified,
                self.stats.stats().unclassified
            );
        }

        Ok(report)
    }

    /// Step until the generation budget is spent
    pub fn run(&mut self) -> Result<Vec<GenerationReport>> {
        let mut reports = Vec::with_capacity(self.remaining() as usize);
        while self.state != EngineState::Finished {
            reports.push(self.step()?);
        }
        Ok(reports)
    }

    /// Current grid (the next generation once a step has completed)
    pub fn grid(&self) -> &CellGrid {
        &self.current
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Index of the next generation `step` will process
    pub fn generation(&self) -> Generation {
        self.next_generation
    }

    pub fn total_generations(&self) -> u32 {
        self.total_generations
    }

    pub fn remaining(&self) -> u32 {
        self.total_generations.saturating_sub(self.next_generation)
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn stats(&self) -> &CumulativeStats {
        self.stats.stats()
    }

    pub fn into_stats(self) -> CumulativeStats {
        self.stats.into_stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Cell;

    fn engine_with(size: usize, cells: &[(usize, usize)], generations: u32) -> GenerationEngine {
        let mut grid: CellGrid = Grid::square(size);
        for &(r, c) in cells {
            grid.set(r, c, Cell::Alive);
        }
        GenerationEngine::new(grid, Catalogue::standard().unwrap(), generations).unwrap()
    }

    #[test]
    fn test_state_transitions() {
        let mut engine = engine_with(8, &[], 2);
        assert_eq!(engine.state(), EngineState::Idle);

        engine.step().unwrap();
        assert_eq!(engine.state(), EngineState::Running);
        assert_eq!(engine.generation(), 1);

        let last = engine.step().unwrap();
        assert_eq!(engine.state(), EngineState::Finished);
        assert!(last.is_final());
    }

    #[test]
    fn test_step_after_finish_is_error() {
        let mut engine = engine_with(8, &[], 1);
        engine.step().unwrap();
        assert!(matches!(engine.step(), Err(CensusError::RunFinished(1))));
    }

    #[test]
    fn test_rejects_non_square_grid() {
        let grid: CellGrid = Grid::new(4, 5);
        let result = GenerationEngine::new(grid, Catalogue::standard().unwrap(), 3);
        assert!(matches!(result, Err(CensusError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_zero_generations() {
        let result = GenerationEngine::new(Grid::square(4), Catalogue::standard().unwrap(), 0);
        assert!(result.is_err());
    }

    #[test]
    fn test_report_describes_pre_step_grid() {
        // Isolated cell: counted in generation 0, gone by generation 1
        let mut engine = engine_with(6, &[(3, 3)], 2);

        let first = engine.step().unwrap();
        assert_eq!(first.unclassified, 1);
        assert_eq!(engine.grid().population(), 0);

        let second = engine.step().unwrap();
        assert_eq!(second.total_beings(), 0);
    }

    #[test]
    fn test_run_returns_every_generation() {
        let mut engine = engine_with(10, &[(4, 3), (4, 4), (4, 5)], 5);
        let reports = engine.run().unwrap();
        assert_eq!(reports.len(), 5);
        assert!(reports.iter().all(|r| r.count_of("blinker") == 1));
        assert!(reports[4].is_final());
        assert!(reports[..4].iter().all(|r| !r.is_final()));
        assert_eq!(engine.stats().generations, 5);
        assert_eq!(engine.remaining(), 0);
    }

    #[test]
    fn test_parallel_threshold_does_not_change_results() {
        let cells = [
            (1, 2),
            (2, 3),
            (3, 1),
            (3, 2),
            (3, 3),
            (10, 10),
            (10, 11),
            (11, 10),
            (11, 11),
        ];
        let mut sequential = engine_with(16, &cells, 6).with_parallel_threshold(usize::MAX);
        let mut parallel = engine_with(16, &cells, 6).with_parallel_threshold(0);

        let a = sequential.run().unwrap();
        let b = parallel.run().unwrap();
        assert_eq!(a, b);
        assert_eq!(sequential.grid(), parallel.grid());
    }
}
