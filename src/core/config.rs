//! Run configuration with documented defaults
//!
//! Loaded from TOML; every field falls back to its default so a config
//! file only needs to name what it changes.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::catalogue::forms::DEFAULT_FORMS;
use crate::core::error::{CensusError, Result};

/// A named life form stamped into the initial grid (phase 0, canonical orientation)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub form: String,
    pub row: usize,
    pub col: usize,
}

/// Configuration for a census run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CensusConfig {
    /// Side length N of the N×N universe
    pub grid_size: usize,

    /// Number of generations to step before the run finishes
    pub generations: u32,

    /// Chance that a cell starts alive when the grid is randomly filled
    ///
    /// At 0.2 roughly one cell in five is seeded, which leaves enough
    /// room for small forms to settle out of the initial soup.
    pub alive_probability: f64,

    /// Seed for the random fill (deterministic runs)
    pub seed: u64,

    /// Minimum cell count before rule evaluation runs rows in parallel
    ///
    /// Below this, thread overhead exceeds the benefit. 4096 cells is a
    /// 64×64 grid.
    pub parallel_threshold: usize,

    /// Names of the recognised life forms, in catalogue priority order
    pub forms: Vec<String>,

    /// Forms stamped into the initial grid
    pub placements: Vec<Placement>,
}

impl Default for CensusConfig {
    fn default() -> Self {
        Self {
            grid_size: 100,
            generations: 50,
            alive_probability: 0.2,
            seed: 12345,
            parallel_threshold: 4096,
            forms: DEFAULT_FORMS.iter().map(|name| name.to_string()).collect(),
            placements: Vec::new(),
        }
    }
}

impl CensusConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text and validate it
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: CensusConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(CensusError::InvalidConfig("grid_size must be at least 1".into()));
        }

        if self.generations == 0 {
            return Err(CensusError::InvalidConfig("generations must be at least 1".into()));
        }

        if !(0.0..=1.0).contains(&self.alive_probability) {
            return Err(CensusError::InvalidConfig(format!(
                "alive_probability ({}) must be within [0, 1]",
                self.alive_probability
            )));
        }

        Ok(())
    }
}
