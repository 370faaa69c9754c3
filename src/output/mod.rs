//! Run output: the historical text report and JSON serialization

pub mod run;
pub mod text;

pub use run::{RunOutput, RunStats};
pub use text::ReportWriter;
