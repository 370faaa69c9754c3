//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// State of a single grid cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

/// Generation counter (simulation time unit)
pub type Generation = u32;

/// Index of a life form inside a catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormId(pub usize);

impl FormId {
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Broad family a life form belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormKind {
    /// Unchanged by the step rule
    StillLife,
    /// Cycles through a fixed sequence of phases
    Oscillator,
    /// Reproduces itself translated after a fixed period
    Spaceship,
}
