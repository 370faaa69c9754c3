//! Plain-text census report
//!
//! Buffers one block per generation in memory and writes the whole report
//! once, at the end of the run.

use std::path::Path;

use crate::core::error::Result;
use crate::simulation::{GenerationReport, IncidenceReport};

const RULE: &str = "------------------------";

#[derive(Debug, Clone, Default)]
pub struct ReportWriter {
    buffer: String,
}

impl ReportWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one generation's block (and the incidence block on the final generation)
    pub fn push(&mut self, report: &GenerationReport) {
        let out = &mut self.buffer;
        out.push_str(&format!("++++ Generation {} ++++\n", report.generation));
        out.push_str(&format!("Total Living Beings: {}\n", report.classified_count()));
        out.push_str(&format!("Unclassified Beings: {}\n", report.unclassified));
        out.push_str(&format!("{}\n", RULE));
        for slot in &report.per_form {
            out.push_str(&format!("{}: {}\n", slot.name, slot.count));
        }
        out.push_str(&format!("{}\n", RULE));
        for being in &report.classified {
            out.push_str(&format!(
                "{}. {} at {}, {}\n",
                being.index, being.name, being.row, being.col
            ));
        }

        if let Some(incidence) = &report.incidence {
            self.push_incidence(incidence);
        }
    }

    fn push_incidence(&mut self, incidence: &IncidenceReport) {
        let out = &mut self.buffer;
        out.push_str("==== Incidence ====\n");
        for form in &incidence.per_form {
            out.push_str(&format!("{}: {:.2}%\n", form.name, form.percent));
        }
        out.push_str(&format!("others: {:.2}%\n", incidence.others));
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, &self.buffer)?;
        tracing::info!("Report written to {}", path.display());
        Ok(())
    }
}
