//! Suggestions built on top of resolution.
//!
//! The advisor answers two questions about a sound hypothesis:
//! - which single concepts could still be asserted without contradiction
//!   and without knocking out any rule that currently holds
//! - which unsatisfied rules could be made to hold by adding concepts only,
//!   and what the hypothesis would look like afterwards
//!
//! Every candidate is evaluated against a fresh value built from the original
//! hypothesis, so candidates are independent of each other.

use std::collections::HashSet;

use taxon_foundation::{ConceptContext, ConceptId, ConceptRelations, QualificationId};

use crate::config::EngineConfig;
use crate::consistency::compatible;
use crate::repair::Repairer;
use crate::resolver::{ContextResult, resolve};

/// A rule that can be made to hold, with the repaired hypothesis.
#[derive(Clone, Debug)]
pub struct Suggestion {
    /// The rule the repair satisfies.
    pub qualification: QualificationId,
    /// The hypothesis after repair.
    pub relations: ConceptRelations,
    /// Resolution of the repaired hypothesis.
    pub result: ContextResult,
}

/// Proposes further facts and repairs for a hypothesis.
#[derive(Clone, Debug)]
pub struct Advisor<'a> {
    relations: ConceptRelations,
    context: &'a ConceptContext,
    overridable: HashSet<QualificationId>,
    excluded_concepts: HashSet<ConceptId>,
    excluded_qualifications: HashSet<QualificationId>,
    config: EngineConfig,
}

impl<'a> Advisor<'a> {
    /// Creates an advisor with no filters and the default configuration.
    #[must_use]
    pub fn new(relations: ConceptRelations, context: &'a ConceptContext) -> Self {
        Self {
            relations,
            context,
            overridable: HashSet::new(),
            excluded_concepts: HashSet::new(),
            excluded_qualifications: HashSet::new(),
            config: EngineConfig::default(),
        }
    }

    /// Rules that a suggested concept may knock out.
    #[must_use]
    pub fn with_overridable(mut self, ids: impl IntoIterator<Item = QualificationId>) -> Self {
        self.overridable.extend(ids);
        self
    }

    /// Concepts never suggested.
    #[must_use]
    pub fn with_excluded_concepts(mut self, ids: impl IntoIterator<Item = ConceptId>) -> Self {
        self.excluded_concepts.extend(ids);
        self
    }

    /// Rules recorded as excluded. Carried for callers; suggestions are not
    /// filtered by it.
    #[must_use]
    pub fn with_excluded_qualifications(
        mut self,
        ids: impl IntoIterator<Item = QualificationId>,
    ) -> Self {
        self.excluded_qualifications.extend(ids);
        self
    }

    /// Sets the engine configuration.
    #[must_use]
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the hypothesis under advice.
    #[must_use]
    pub fn relations(&self) -> &ConceptRelations {
        &self.relations
    }

    /// Returns the excluded qualification set.
    #[must_use]
    pub fn excluded_qualifications(&self) -> &HashSet<QualificationId> {
        &self.excluded_qualifications
    }

    /// Concepts that can be added to `is` on their own without contradiction
    /// and without dropping a non-overridable qualified rule.
    ///
    /// Empty when the hypothesis itself is unsound.
    #[must_use]
    pub fn further_concepts(&self) -> Vec<ConceptId> {
        let current = resolve(&self.relations, self.context);
        if !current.is_compatible() {
            return Vec::new();
        }
        let required: Vec<QualificationId> = current
            .qualified
            .iter()
            .copied()
            .filter(|id| !self.overridable.contains(id))
            .collect();

        self.context
            .concepts()
            .map(|concept| concept.id)
            .filter(|&id| {
                !self.relations.is.contains(id)
                    && !self.relations.isnt.contains(id)
                    && !current.resolved.is.contains(id)
                    && !self.excluded_concepts.contains(&id)
            })
            .filter(|&id| {
                let mut candidate = self.relations.clone();
                candidate.is.insert(id);
                let next = resolve(&candidate, self.context);
                let keeps = next.is_compatible()
                    && required.iter().all(|q| next.is_qualified(*q));
                tracing::trace!(concept = %id, accepted = keeps, "candidate concept");
                keeps
            })
            .collect()
    }

    /// Unsatisfied rules that can be made to hold by adding concepts only,
    /// each with its repaired hypothesis and that hypothesis' resolution.
    ///
    /// Empty when the hypothesis itself is unsound.
    #[must_use]
    pub fn further_qualifications(&self) -> Vec<Suggestion> {
        let current = resolve(&self.relations, self.context);
        if !current.is_compatible() {
            return Vec::new();
        }
        let repairer = Repairer::new(&self.config);

        let mut suggestions = Vec::new();
        for (id, verdict) in &current.unqualified {
            if !verdict.redundant.is_empty() {
                continue;
            }
            let attempt = match repairer.repair_in(&self.relations, self.context, *id) {
                Ok(attempt) => attempt,
                Err(e) => {
                    tracing::warn!(qualification = %id, error = %e, "repair abandoned");
                    continue;
                }
            };
            if !compatible(&self.relations, &attempt).is_ok() {
                continue;
            }
            let result = resolve(&attempt, self.context);
            if result.is_compatible() {
                suggestions.push(Suggestion {
                    qualification: *id,
                    relations: attempt,
                    result,
                });
            }
        }
        suggestions
    }
}
