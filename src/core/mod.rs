pub mod config;
pub mod error;
pub mod types;

pub use config::{CensusConfig, Placement};
pub use error::{CensusError, Result};
pub use types::{Cell, FormId, FormKind, Generation};
