//! One-hop explanations of resolved facts.

use taxon_foundation::{ConceptContext, ConceptId, QualificationId, Verb};

use crate::resolver::ContextResult;

/// Why a fact does or does not hold in a resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Why {
    /// The verb asked about.
    pub verb: Verb,
    /// The concept asked about.
    pub concept: ConceptId,
    /// The fact was part of the base hypothesis.
    pub asserted: bool,
    /// Qualified rules whose consequence states the fact, in admission order.
    pub supporters: Vec<QualificationId>,
}

impl Why {
    /// Returns true if the fact holds at all.
    #[must_use]
    pub fn holds(&self) -> bool {
        self.asserted || !self.supporters.is_empty()
    }
}

impl ContextResult {
    /// Explains `verb concept` against this resolution.
    ///
    /// `context` must be the one the resolution ran against.
    #[must_use]
    pub fn why(&self, context: &ConceptContext, verb: Verb, concept: ConceptId) -> Why {
        let supporters = self
            .qualified
            .iter()
            .copied()
            .filter(|id| {
                context
                    .qualification(*id)
                    .is_some_and(|q| q.resolved().holds(verb, concept))
            })
            .collect();
        Why {
            verb,
            concept,
            asserted: self.base.holds(verb, concept),
            supporters,
        }
    }
}
