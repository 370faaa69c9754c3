//! Running census totals across generations and final incidence

use serde::{Deserialize, Serialize};

use crate::catalogue::Catalogue;
use crate::simulation::report::GenerationReport;

/// Running totals since the start of a run
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CumulativeStats {
    /// Beings seen per form, indexed like the catalogue
    pub per_form: Vec<u64>,
    pub classified: u64,
    pub unclassified: u64,
    pub generations: u32,
}

impl CumulativeStats {
    pub fn total_beings(&self) -> u64 {
        self.classified + self.unclassified
    }
}

/// Share of all beings ever seen that were one form
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FormIncidence {
    pub name: String,
    pub count: u64,
    pub percent: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IncidenceReport {
    pub per_form: Vec<FormIncidence>,
    /// Share of unclassified clusters
    pub others: f64,
    /// Classified plus unclassified, or 1 when nothing was ever seen
    pub denominator: u64,
}

impl IncidenceReport {
    /// Sum of every form's share plus the others share
    pub fn total_percent(&self) -> f64 {
        self.per_form.iter().map(|form| form.percent).sum::<f64>() + self.others
    }
}

fn percent_of(count: u64, denominator: u64) -> f64 {
    let raw = count as f64 / denominator as f64 * 100.0;
    (raw * 100.0).round() / 100.0
}

/// Accumulates generation reports into cumulative stats
#[derive(Clone, Debug, Default)]
pub struct StatsAggregator {
    stats: CumulativeStats,
}

impl StatsAggregator {
    pub fn new(form_count: usize) -> Self {
        Self {
            stats: CumulativeStats {
                per_form: vec![0; form_count],
                ..CumulativeStats::default()
            },
        }
    }

    pub fn record(&mut self, report: &GenerationReport) {
        if self.stats.per_form.len() < report.per_form.len() {
            self.stats.per_form.resize(report.per_form.len(), 0);
        }
        for (total, slot) in self.stats.per_form.iter_mut().zip(&report.per_form) {
            *total += u64::from(slot.count);
        }
        self.stats.classified += report.classified.len() as u64;
        self.stats.unclassified += u64::from(report.unclassified);
        self.stats.generations += 1;
    }

    pub fn stats(&self) -> &CumulativeStats {
        &self.stats
    }

    pub fn into_stats(self) -> CumulativeStats {
        self.stats
    }

    /// Each form's share of every being ever seen, as a percentage
    /// rounded to two decimals
    pub fn incidence(&self, catalogue: &Catalogue) -> IncidenceReport {
        let denominator = match self.stats.total_beings() {
            0 => 1,
            total => total,
        };

        let per_form = catalogue
            .entries()
            .iter()
            .map(|entry| {
                let count = self.stats.per_form.get(entry.id.index()).copied().unwrap_or(0);
                FormIncidence {
                    name: entry.name.clone(),
                    count,
                    percent: percent_of(count, denominator),
                }
            })
            .collect();

        IncidenceReport {
            per_form,
            others: percent_of(self.stats.unclassified, denominator),
            denominator,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::report::FormCount;

    fn report(
        catalogue: &Catalogue,
        counts: &[(&str, u32)],
        unclassified: u32,
    ) -> GenerationReport {
        let per_form = catalogue
            .entries()
            .iter()
            .map(|entry| FormCount {
                name: entry.name.clone(),
                count: counts
                    .iter()
                    .find(|(name, _)| *name == entry.name)
                    .map(|(_, n)| *n)
                    .unwrap_or(0),
            })
            .collect::<Vec<_>>();
        let classified = per_form
            .iter()
            .enumerate()
            .flat_map(|(i, slot)| {
                (0..slot.count).map(move |_| crate::simulation::report::ClassifiedBeing {
                    index: 0,
                    form: crate::core::types::FormId(i),
                    name: String::new(),
                    row: 0,
                    col: 0,
                })
            })
            .collect();
        GenerationReport {
            generation: 0,
            classified,
            per_form,
            unclassified,
            incidence: None,
        }
    }

    #[test]
    fn test_record_accumulates() {
        let catalogue = Catalogue::standard().unwrap();
        let mut stats = StatsAggregator::new(catalogue.len());
        stats.record(&report(&catalogue, &[("glider", 2)], 1));
        stats.record(&report(&catalogue, &[("glider", 1), ("block", 3)], 0));

        let totals = stats.stats();
        assert_eq!(totals.generations, 2);
        assert_eq!(totals.classified, 6);
        assert_eq!(totals.unclassified, 1);
        assert_eq!(totals.per_form[catalogue.form_index("glider").unwrap().index()], 3);
        assert_eq!(totals.per_form[catalogue.form_index("block").unwrap().index()], 3);
        assert_eq!(totals.total_beings(), 7);
    }

    #[test]
    fn test_incidence_percentages() {
        let catalogue = Catalogue::standard().unwrap();
        let mut stats = StatsAggregator::new(catalogue.len());
        stats.record(&report(&catalogue, &[("glider", 1), ("block", 1)], 1));

        let incidence = stats.incidence(&catalogue);
        assert_eq!(incidence.denominator, 3);
        let glider = incidence.per_form.iter().find(|f| f.name == "glider").unwrap();
        assert_eq!(glider.percent, 33.33);
        assert_eq!(incidence.others, 33.33);
        assert!((incidence.total_percent() - 100.0).abs() < 0.05);
    }

    #[test]
    fn test_incidence_with_nothing_seen() {
        let catalogue = Catalogue::standard().unwrap();
        let mut stats = StatsAggregator::new(catalogue.len());
        stats.record(&report(&catalogue, &[], 0));

        let incidence = stats.incidence(&catalogue);
        assert_eq!(incidence.denominator, 1);
        assert!(incidence.per_form.iter().all(|f| f.percent == 0.0));
        assert_eq!(incidence.others, 0.0);
    }
}
