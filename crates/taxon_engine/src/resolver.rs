//! The context resolver.
//!
//! Closes a hypothesis under the qualification list:
//! 1. Admit every undetermined rule whose trigger holds and whose consequence
//!    is compatible with the facts so far, evaluated against one snapshot
//! 2. Rebuild the closure as `base` plus every admitted consequence
//! 3. Retract admitted rules that no longer match or no longer fit, repeating
//!    until stable (a retraction can knock out the trigger of another rule)
//! 4. Stop after a round that admits nothing
//!
//! Retraction is permanent within one call, so admission order (list order)
//! decides which of several mutually exclusive rules wins.

use taxon_foundation::{
    ConceptContext, ConceptRelations, Qualification, QualificationId, qualification_id,
};

use crate::consistency::{ConsistencyResult, compatible};
use crate::matching::{MatchResult, matches};

// =============================================================================
// Context Result
// =============================================================================

/// The outcome of one resolution.
#[derive(Clone, Debug, Default)]
pub struct ContextResult {
    /// The hypothesis that was resolved.
    pub base: ConceptRelations,
    /// `base` plus every qualified consequence.
    pub resolved: ConceptRelations,
    /// Rules standing at the end, in admission order.
    pub qualified: Vec<QualificationId>,
    /// Last failed trigger evaluation of each rule that did not end qualified,
    /// in list order.
    pub unqualified: Vec<(QualificationId, MatchResult)>,
    /// Rules whose trigger held but whose consequence contradicted the facts,
    /// as seen in the final round only.
    pub incompatible: Vec<(QualificationId, ConsistencyResult)>,
    /// Rules admitted and later withdrawn.
    pub retracted: Vec<QualificationId>,
    /// Number of admission rounds run.
    pub rounds: usize,
}

impl ContextResult {
    /// Returns true if no rule contradicts the resolved facts.
    #[must_use]
    pub fn is_compatible(&self) -> bool {
        self.incompatible.is_empty()
    }

    /// Returns true if the rule ended qualified.
    #[must_use]
    pub fn is_qualified(&self, id: QualificationId) -> bool {
        self.qualified.contains(&id)
    }

    /// Returns the trigger diagnostic for an unqualified rule.
    #[must_use]
    pub fn unqualified_result(&self, id: QualificationId) -> Option<&MatchResult> {
        self.unqualified
            .iter()
            .find_map(|(q, res)| (*q == id).then_some(res))
    }
}

// =============================================================================
// Resolution
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RuleState {
    Undetermined,
    MaybeQualified,
    NotQualified,
}

/// Working state of a single resolution.
struct Resolution<'a> {
    base: &'a ConceptRelations,
    rules: &'a [Qualification],
    resolved: ConceptRelations,
    states: Vec<RuleState>,
    admitted: Vec<QualificationId>,
    unmatched: Vec<Option<MatchResult>>,
    retracted: Vec<QualificationId>,
}

impl<'a> Resolution<'a> {
    fn new(base: &'a ConceptRelations, rules: &'a [Qualification]) -> Self {
        Self {
            base,
            rules,
            resolved: base.clone(),
            states: vec![RuleState::Undetermined; rules.len()],
            admitted: Vec::new(),
            unmatched: vec![None; rules.len()],
            retracted: Vec::new(),
        }
    }

    fn rule(&self, id: QualificationId) -> &'a Qualification {
        &self.rules[id.slot()]
    }

    /// `resolved := base ∪ every admitted consequence`
    fn rebuild(&mut self) {
        let mut resolved = self.base.clone();
        for id in &self.admitted {
            resolved.merge(self.rules[id.slot()].resolved());
        }
        self.resolved = resolved;
    }

    fn run(mut self) -> ContextResult {
        let mut rounds = 0;
        let incompatible = loop {
            rounds += 1;
            let mut incompatible = Vec::new();
            let mut newly = Vec::new();

            let rules = self.rules;
            for (slot, rule) in rules.iter().enumerate() {
                if self.states[slot] != RuleState::Undetermined {
                    continue;
                }
                let id = qualification_id(slot);
                let matched = matches(&self.resolved, rule);
                if !matched.is_ok() {
                    self.unmatched[slot] = Some(matched);
                    continue;
                }
                let fit = compatible(&self.resolved, rule.resolved());
                if !fit.is_ok() {
                    tracing::trace!(qualification = %id, "incompatible with current facts");
                    incompatible.push((id, fit));
                    continue;
                }
                newly.push(id);
            }

            tracing::debug!(
                round = rounds,
                admitted = newly.len(),
                incompatible = incompatible.len(),
                "resolution round"
            );

            if !newly.is_empty() {
                for id in &newly {
                    self.states[id.slot()] = RuleState::MaybeQualified;
                }
                self.admitted.extend_from_slice(&newly);
                self.rebuild();
            }
            if !self.admitted.is_empty() {
                self.retract_conflicts();
            }
            if newly.is_empty() {
                break incompatible;
            }
        };

        let states = &self.states;
        let unqualified = std::mem::take(&mut self.unmatched)
            .into_iter()
            .enumerate()
            .filter(|(slot, _)| states[*slot] != RuleState::MaybeQualified)
            .filter_map(|(slot, res)| res.map(|res| (qualification_id(slot), res)))
            .collect();

        ContextResult {
            base: self.base.clone(),
            resolved: self.resolved,
            qualified: self.admitted,
            unqualified,
            incompatible,
            retracted: self.retracted,
            rounds,
        }
    }

    /// Withdraws admitted rules invalidated by the current closure, until none are.
    fn retract_conflicts(&mut self) {
        loop {
            let mut stale = Vec::new();
            for &id in &self.admitted {
                let rule = self.rule(id);
                let matched = matches(&self.resolved, rule);
                if !matched.is_ok() {
                    self.unmatched[id.slot()] = Some(matched);
                    stale.push(id);
                } else if !compatible(&self.resolved, rule.resolved()).is_ok() {
                    stale.push(id);
                }
            }
            if stale.is_empty() {
                return;
            }

            tracing::debug!(retracted = stale.len(), "retraction pass");
            for id in &stale {
                tracing::trace!(qualification = %id, "retracted");
                self.states[id.slot()] = RuleState::NotQualified;
            }
            self.admitted
                .retain(|id| self.states[id.slot()] == RuleState::MaybeQualified);
            self.retracted.extend(stale);
            self.rebuild();
        }
    }
}

/// Resolves `base` against every qualification of `context`.
#[must_use]
pub fn resolve(base: &ConceptRelations, context: &ConceptContext) -> ContextResult {
    resolve_rules(base, context.qualification_list())
}

/// Resolves `base` against an ordered rule list.
#[must_use]
pub fn resolve_rules(base: &ConceptRelations, rules: &[Qualification]) -> ContextResult {
    Resolution::new(base, rules).run()
}

// =============================================================================
// Tests
// =============================================================================
