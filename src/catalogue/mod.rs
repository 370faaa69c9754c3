//! Pattern catalogue
//!
//! Holds the recognised life forms and, for every phase of every form,
//! the six orientation variants the classifier scans. Also derives the
//! subset of variants that may match at an anchor with no live
//! neighbours.
//!
//! Scan order is entry, then phase, then variant, all in build order.
//! The first variant that matches wins, so the table order of
//! [`forms::STANDARD_FORMS`] doubles as the tie-break priority.

pub mod forms;
pub mod pattern;

use ahash::AHashMap;

use crate::core::error::{CensusError, Result};
use crate::core::types::{FormId, FormKind};

pub use forms::{FormSpec, CATALOGUE_VERSION, DEFAULT_FORMS, STANDARD_FORMS};
pub use pattern::{Orientation, Pattern};

/// One orientation of one phase of a life form
#[derive(Debug, Clone)]
pub struct Variant {
    pub form: FormId,
    pub phase: usize,
    pub orientation: Orientation,
    pub pattern: Pattern,
}

/// All orientation variants of a single phase
#[derive(Debug, Clone)]
pub struct Phase {
    /// Canonical mask as written in the table
    pub canonical: Pattern,
    pub variants: Vec<Variant>,
}

/// A named life form with its phases
#[derive(Debug, Clone)]
pub struct CatalogueEntry {
    pub id: FormId,
    pub name: String,
    pub kind: FormKind,
    pub phases: Vec<Phase>,
}

impl CatalogueEntry {
    pub fn variants(&self) -> impl Iterator<Item = &Variant> + '_ {
        self.phases.iter().flat_map(|phase| phase.variants.iter())
    }
}

/// Address of a variant inside the catalogue: (entry, phase, variant)
type VariantSlot = (usize, usize, usize);

#[derive(Debug, Clone)]
pub struct Catalogue {
    pub version: u32,
    entries: Vec<CatalogueEntry>,
    isolated: Vec<VariantSlot>,
    by_name: AHashMap<String, FormId>,
}

impl Catalogue {
    /// Build a catalogue from form specs, in the order given
    pub fn build<'a>(specs: impl IntoIterator<Item = &'a FormSpec>) -> Result<Self> {
        let mut entries = Vec::new();
        let mut isolated = Vec::new();
        let mut by_name = AHashMap::new();

        for (e, spec) in specs.into_iter().enumerate() {
            let id = FormId(e);
            let mut phases = Vec::with_capacity(spec.phases.len());

            for (p, rows) in spec.phases.iter().enumerate() {
                let canonical = Pattern::parse(spec.name, rows)?;
                let variants: Vec<Variant> = canonical
                    .orientations()
                    .into_iter()
                    .map(|(orientation, pattern)| Variant {
                        form: id,
                        phase: p,
                        orientation,
                        pattern,
                    })
                    .collect();

                for (v, variant) in variants.iter().enumerate() {
                    if variant.pattern.qualifies_isolated() {
                        isolated.push((e, p, v));
                    }
                }

                phases.push(Phase { canonical, variants });
            }

            if phases.is_empty() {
                return Err(CensusError::MalformedPattern {
                    form: spec.name.to_string(),
                    reason: "form has no phases".into(),
                });
            }

            by_name.insert(spec.name.to_ascii_lowercase(), id);
            for alias in spec.aliases {
                by_name.insert(alias.to_ascii_lowercase(), id);
            }

            entries.push(CatalogueEntry {
                id,
                name: spec.name.to_string(),
                kind: spec.kind,
                phases,
            });
        }

        let catalogue = Self {
            version: CATALOGUE_VERSION,
            entries,
            isolated,
            by_name,
        };

        tracing::info!(
            "Built catalogue v{}: {} forms, {} variants ({} isolated)",
            catalogue.version,
            catalogue.len(),
            catalogue.variant_count(),
            catalogue.isolated.len()
        );

        Ok(catalogue)
    }

    /// Catalogue of the default recognised forms
    pub fn standard() -> Result<Self> {
        Self::select(DEFAULT_FORMS)
    }

    /// Catalogue of every compiled-in form
    pub fn full() -> Result<Self> {
        Self::build(STANDARD_FORMS)
    }

    /// Catalogue restricted to the named forms
    ///
    /// Selected forms keep their table order regardless of the order the
    /// names are given in, so priority never depends on configuration.
    pub fn select<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        let mut indices = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref().trim();
            let index = forms::find_spec(name)
                .ok_or_else(|| CensusError::UnknownForm(name.to_string()))?;
            indices.push(index);
        }
        indices.sort_unstable();
        indices.dedup();

        Self::build(indices.into_iter().map(|i| &STANDARD_FORMS[i]))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CatalogueEntry] {
        &self.entries
    }

    pub fn entry(&self, id: FormId) -> Option<&CatalogueEntry> {
        self.entries.get(id.index())
    }

    pub fn name(&self, id: FormId) -> &str {
        self.entry(id).map(|entry| entry.name.as_str()).unwrap_or("unknown")
    }

    /// Look a form up by name or alias (case-insensitive)
    pub fn form_index(&self, name: &str) -> Option<FormId> {
        self.by_name.get(&name.trim().to_ascii_lowercase()).copied()
    }

    /// Every variant in scan order
    pub fn variants(&self) -> impl Iterator<Item = &Variant> + '_ {
        self.entries.iter().flat_map(|entry| entry.variants())
    }

    /// Variants legal at an anchor with zero live neighbours, in scan order
    pub fn isolated_variants(&self) -> impl Iterator<Item = &Variant> + '_ {
        self.isolated
            .iter()
            .map(|&(e, p, v)| &self.entries[e].phases[p].variants[v])
    }

    pub fn variant_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.phases.len() * Orientation::ALL.len()).sum()
    }

    /// Canonical mask of a form's first phase, used to seed grids
    ///
    /// Any form in the compiled-in table can be seeded, whether or not a
    /// given catalogue recognises it.
    pub fn seed_pattern(name: &str) -> Result<Pattern> {
        let spec = forms::find_spec(name.trim())
            .map(|index| &STANDARD_FORMS[index])
            .ok_or_else(|| CensusError::UnknownForm(name.to_string()))?;
        let rows = spec.phases.first().ok_or_else(|| CensusError::MalformedPattern {
            form: spec.name.to_string(),
            reason: "form has no phases".into(),
        })?;
        Pattern::parse(spec.name, rows)
    }
}
