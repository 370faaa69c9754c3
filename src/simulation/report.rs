//! Per-generation census report handed to the report writer

use serde::{Deserialize, Serialize};

use crate::catalogue::Catalogue;
use crate::census::Census;
use crate::core::types::{FormId, Generation};
use crate::simulation::stats::IncidenceReport;

/// One recognised being, in the order it was found
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedBeing {
    pub index: usize,
    pub form: FormId,
    pub name: String,
    pub row: usize,
    pub col: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormCount {
    pub name: String,
    pub count: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationReport {
    pub generation: Generation,
    pub classified: Vec<ClassifiedBeing>,
    /// One entry per catalogue form, in catalogue order
    pub per_form: Vec<FormCount>,
    pub unclassified: u32,
    /// Present only on the final generation of a run
    pub incidence: Option<IncidenceReport>,
}

impl GenerationReport {
    pub fn from_census(generation: Generation, catalogue: &Catalogue, census: &Census) -> Self {
        let mut per_form: Vec<FormCount> = catalogue
            .entries()
            .iter()
            .map(|entry| FormCount {
                name: entry.name.clone(),
                count: 0,
            })
            .collect();

        let classified = census
            .classified
            .iter()
            .enumerate()
            .map(|(index, found)| {
                if let Some(slot) = per_form.get_mut(found.form.index()) {
                    slot.count += 1;
                }
                ClassifiedBeing {
                    index,
                    form: found.form,
                    name: catalogue.name(found.form).to_string(),
                    row: found.row,
                    col: found.col,
                }
            })
            .collect();

        Self {
            generation,
            classified,
            per_form,
            unclassified: census.unclassified,
            incidence: None,
        }
    }

    pub fn classified_count(&self) -> usize {
        self.classified.len()
    }

    /// Classified plus unclassified beings this generation
    pub fn total_beings(&self) -> usize {
        self.classified.len() + self.unclassified as usize
    }

    /// Count for a form by name (0 if the catalogue does not know it)
    pub fn count_of(&self, name: &str) -> u32 {
        self.per_form
            .iter()
            .find(|slot| slot.name.eq_ignore_ascii_case(name))
            .map(|slot| slot.count)
            .unwrap_or(0)
    }

    pub fn is_final(&self) -> bool {
        self.incidence.is_some()
    }
}
