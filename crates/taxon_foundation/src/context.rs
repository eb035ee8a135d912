//! The read-only universe of concepts and qualifications.

use std::collections::HashMap;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::collections::ConceptSet;
use crate::concept::{Concept, ConceptId};
use crate::error::Error;
use crate::qualification::{Qualification, QualificationId};
use crate::relations::ConceptRelations;
use crate::Result;

/// Something noteworthy found while a context was built.
///
/// Construction keeps going past these; callers decide whether they matter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ContextDiagnostic {
    /// Closing a concept hit a qualification whose consequence contradicts it.
    Incompatible {
        /// The concept being closed.
        concept: ConceptId,
        /// The offending qualification.
        qualification: QualificationId,
        /// Closure `is` concepts the consequence says `isn't`.
        conflict_is: ConceptSet,
        /// Closure `isn't` concepts the consequence says `is`.
        conflict_isnt: ConceptSet,
    },
    /// A self-inconsistent qualification was dropped in lenient mode.
    Rejected {
        /// Position of the qualification in submission order.
        position: usize,
        /// Consequence `is` concepts in conflict with the trigger.
        conflict_is: ConceptSet,
        /// Consequence `isn't` concepts in conflict with the trigger.
        conflict_isnt: ConceptSet,
    },
}

/// Concepts plus the ordered rule list.
///
/// Built once, then shared read-only by every resolution. Rule order is
/// significant: the resolver admits qualifications in list order.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConceptContext {
    concepts: Vec<Concept>,
    by_name: HashMap<Arc<str>, ConceptId>,
    qualifications: Vec<Qualification>,
    diagnostics: Vec<ContextDiagnostic>,
}

impl ConceptContext {
    /// Assembles a context from concepts (indexed by id) and rules (in order).
    ///
    /// # Errors
    /// Returns an error if a concept's id does not match its position.
    pub fn new(concepts: Vec<Concept>, qualifications: Vec<Qualification>) -> Result<Self> {
        let mut by_name = HashMap::with_capacity(concepts.len());
        for (slot, concept) in concepts.iter().enumerate() {
            if concept.id.slot() != slot {
                return Err(Error::unknown_concept(concept.id));
            }
            by_name.insert(Arc::clone(&concept.name), concept.id);
        }
        Ok(Self {
            concepts,
            by_name,
            qualifications,
            diagnostics: Vec::new(),
        })
    }

    /// Attaches construction diagnostics.
    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: Vec<ContextDiagnostic>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Returns the number of concepts.
    #[must_use]
    pub fn concept_count(&self) -> usize {
        self.concepts.len()
    }

    /// Returns the number of qualifications.
    #[must_use]
    pub fn qualification_count(&self) -> usize {
        self.qualifications.len()
    }

    /// Looks up a concept by id.
    #[must_use]
    pub fn concept(&self, id: ConceptId) -> Option<&Concept> {
        self.concepts.get(id.slot())
    }

    /// Looks up a concept by name.
    #[must_use]
    pub fn concept_by_name(&self, name: &str) -> Option<&Concept> {
        self.by_name.get(name).and_then(|id| self.concept(*id))
    }

    /// Returns the id for a name.
    #[must_use]
    pub fn id_of(&self, name: &str) -> Option<ConceptId> {
        self.by_name.get(name).copied()
    }

    /// Returns the name of a concept, or `"?"` for a foreign id.
    #[must_use]
    pub fn name_of(&self, id: ConceptId) -> &str {
        self.concept(id).map_or("?", |c| c.name.as_ref())
    }

    /// Returns the names of a set's concepts, in set order.
    #[must_use]
    pub fn names(&self, set: &ConceptSet) -> Vec<String> {
        set.iter().map(|id| self.name_of(id).to_string()).collect()
    }

    /// Iterates concepts in definition order.
    pub fn concepts(&self) -> impl Iterator<Item = &Concept> {
        self.concepts.iter()
    }

    /// Looks up a qualification by id.
    #[must_use]
    pub fn qualification(&self, id: QualificationId) -> Option<&Qualification> {
        self.qualifications.get(id.slot())
    }

    /// Iterates qualifications in list order, with their ids.
    pub fn qualifications(&self) -> impl Iterator<Item = (QualificationId, &Qualification)> {
        self.qualifications
            .iter()
            .enumerate()
            .map(|(slot, q)| (qualification_id(slot), q))
    }

    /// Returns the raw qualification list.
    #[must_use]
    pub fn qualification_list(&self) -> &[Qualification] {
        &self.qualifications
    }

    /// Returns construction diagnostics.
    #[must_use]
    pub fn diagnostics(&self) -> &[ContextDiagnostic] {
        &self.diagnostics
    }

    /// Builds a hypothesis asserting `is` for each named concept.
    ///
    /// # Errors
    /// Returns an error naming the first unknown concept.
    pub fn relations_with(&self, names: &[&str]) -> Result<ConceptRelations> {
        let ids = names
            .iter()
            .map(|name| self.id_of(name).ok_or_else(|| Error::unknown_name(*name)))
            .collect::<Result<Vec<_>>>()?;
        Ok(ConceptRelations::with_is(ids))
    }
}

/// Converts a list position into a qualification id.
///
/// # Panics
/// Panics if the list holds more than `u32::MAX` rules.
#[must_use]
pub fn qualification_id(slot: usize) -> QualificationId {
    QualificationId::new(u32::try_from(slot).expect("too many qualifications"))
}

/// Converts an arena position into a concept id.
///
/// # Panics
/// Panics if the arena holds more than `u32::MAX` concepts.
#[must_use]
pub fn concept_id(slot: usize) -> ConceptId {
    ConceptId::new(u32::try_from(slot).expect("too many concepts"))
}
