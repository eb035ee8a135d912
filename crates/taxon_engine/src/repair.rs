//! Greedy single-rule repair.
//!
//! Edits a hypothesis one concept at a time until a chosen rule's trigger
//! holds: add the first missing concept if any, otherwise drop the first
//! redundant one. Each edit shrinks the trigger's discrepancy, so a
//! well-formed matcher converges within its member count; the step budget is
//! a kill switch, not part of the algorithm.

use taxon_foundation::{
    ConceptContext, ConceptRelations, Error, ErrorKind, Qualification, QualificationId, Result,
    SemanticLimit,
};

use crate::config::EngineConfig;
use crate::matching::matches;

/// Performs greedy repairs under a step budget.
#[derive(Clone, Debug)]
pub struct Repairer {
    max_steps: usize,
}

impl Default for Repairer {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl Repairer {
    /// Creates a repairer from the engine configuration.
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            max_steps: config.max_repair_steps,
        }
    }

    /// Returns a copy of `relations` edited until `qualification`'s trigger holds.
    ///
    /// # Errors
    /// Returns an error if the step budget runs out, or if the trigger can
    /// never hold (an empty group).
    pub fn repair(
        &self,
        relations: &ConceptRelations,
        qualification: &Qualification,
    ) -> Result<ConceptRelations> {
        self.run(relations, qualification, None)
    }

    /// Like [`repair`](Self::repair), looking the rule up in `context`.
    ///
    /// # Errors
    /// Returns an error if `id` is not in `context`, or as [`repair`](Self::repair).
    pub fn repair_in(
        &self,
        relations: &ConceptRelations,
        context: &ConceptContext,
        id: QualificationId,
    ) -> Result<ConceptRelations> {
        let qualification = context
            .qualification(id)
            .ok_or_else(|| Error::unknown_qualification(id))?;
        self.run(relations, qualification, Some(id))
    }

    fn run(
        &self,
        relations: &ConceptRelations,
        qualification: &Qualification,
        id: Option<QualificationId>,
    ) -> Result<ConceptRelations> {
        let mut attempt = relations.clone();
        let mut steps = 0;
        loop {
            let verdict = matches(&attempt, qualification);
            if verdict.is_ok() {
                return Ok(attempt);
            }
            if steps == self.max_steps {
                return Err(Error::limit_exceeded(SemanticLimit::MaxRepairSteps {
                    limit: self.max_steps,
                    qualification: id,
                }));
            }
            if let Some(&concept) = verdict.missing.first() {
                attempt.is.insert(concept);
            } else if let Some(&concept) = verdict.redundant.first() {
                attempt.is.remove(concept);
            } else {
                return Err(Error::new(ErrorKind::EmptyGroup));
            }
            steps += 1;
        }
    }
}

/// Repairs `relations` for `qualification` with the default budget.
///
/// # Errors
/// See [`Repairer::repair`].
pub fn assert_till_verified(
    relations: &ConceptRelations,
    qualification: &Qualification,
) -> Result<ConceptRelations> {
    Repairer::default().repair(relations, qualification)
}
