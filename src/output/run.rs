//! Complete run output and serialization

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::core::error::Result;
use crate::simulation::{CumulativeStats, GenerationReport, IncidenceReport};

/// Every generation report of a run plus the final totals
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunOutput {
    pub catalogue_version: u32,
    pub grid_size: usize,
    pub reports: Vec<GenerationReport>,
    pub statistics: RunStats,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunStats {
    pub generations_simulated: u32,
    pub simulation_time_ms: u64,
    pub final_population: usize,
    pub totals: CumulativeStats,
}

impl RunOutput {
    pub fn new(
        catalogue_version: u32,
        grid_size: usize,
        reports: Vec<GenerationReport>,
        totals: CumulativeStats,
        final_population: usize,
        elapsed: Duration,
    ) -> Self {
        Self {
            catalogue_version,
            grid_size,
            statistics: RunStats {
                generations_simulated: totals.generations,
                simulation_time_ms: elapsed.as_millis() as u64,
                final_population,
                totals,
            },
            reports,
        }
    }

    /// Incidence block of the final generation, if the run finished
    pub fn incidence(&self) -> Option<&IncidenceReport> {
        self.reports.last().and_then(|report| report.incidence.as_ref())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self)?)
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn summary(&self) -> String {
        format!(
            "Simulated {} generations on a {}x{} grid in {}ms\n\
             {} classified, {} unclassified, {} cells alive at the end",
            self.statistics.generations_simulated,
            self.grid_size,
            self.grid_size,
            self.statistics.simulation_time_ms,
            self.statistics.totals.classified,
            self.statistics.totals.unclassified,
            self.statistics.final_population,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::Catalogue;
    use crate::core::types::Cell;
    use crate::grid::Grid;
    use crate::simulation::GenerationEngine;

    fn finished_run() -> RunOutput {
        let mut grid = Grid::square(10);
        for (r, c) in [(4, 3), (4, 4), (4, 5)] {
            grid.set(r, c, Cell::Alive);
        }
        let mut engine = GenerationEngine::new(grid, Catalogue::standard().unwrap(), 3).unwrap();
        let reports = engine.run().unwrap();
        let population = engine.grid().population();
        let version = engine.catalogue().version;
        RunOutput::new(
            version,
            10,
            reports,
            engine.into_stats(),
            population,
            Duration::from_millis(5),
        )
    }

    #[test]
    fn test_json_round_trip_keeps_incidence() {
        let output = finished_run();
        let json = output.to_json().unwrap();
        let parsed: RunOutput = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.reports.len(), 3);
        let incidence = parsed.incidence().unwrap();
        let blinker = incidence.per_form.iter().find(|f| f.name == "blinker").unwrap();
        assert_eq!(blinker.percent, 100.0);
    }

    #[test]
    fn test_summary_mentions_totals() {
        let summary = finished_run().summary();
        assert!(summary.contains("Simulated 3 generations"));
        assert!(summary.contains("3 classified, 0 unclassified"));
    }
}
