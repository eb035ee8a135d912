//! Trigger evaluation.
//!
//! A qualification's trigger is read against the `is` set only. When it does
//! not hold, the result says which concepts would have to be added
//! (`missing`) or dropped (`redundant`) for it to hold. Both lists are
//! candidate sets in matcher order; a caller wanting one edit takes the
//! first element.
//!
//! | kind       | holds when        | fails, not negated                  | fails, negated                     |
//! |------------|-------------------|-------------------------------------|------------------------------------|
//! | concept c  | c ∈ is            | missing = {c}                       | redundant = {c}                    |
//! | And(G)     | G ⊆ is            | missing = G ∖ is                    | redundant = G                      |
//! | Or(G)      | G ∩ is ≠ ∅        | missing = G                         | redundant = G ∩ is                 |
//! | OneOf(G)   | \|G ∩ is\| = 1    | none: missing = G; else redundant = G ∩ is | redundant = G ∩ is, missing = G ∖ is |

use taxon_foundation::{ConceptId, ConceptRelations, GroupKind, Matcher, Qualification};

/// The outcome of evaluating a trigger.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchResult {
    ok: bool,
    /// Concepts whose presence in `is` is still required.
    pub missing: Vec<ConceptId>,
    /// Concepts whose presence in `is` prevents the trigger.
    pub redundant: Vec<ConceptId>,
}

impl MatchResult {
    fn holds() -> Self {
        Self {
            ok: true,
            ..Self::default()
        }
    }

    /// Returns true if the trigger holds with the required polarity.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.ok
    }

    /// Returns true if only additions are needed.
    #[must_use]
    pub fn only_missing(&self) -> bool {
        !self.ok && self.redundant.is_empty()
    }
}

/// Evaluates `qualification`'s trigger against `relations.is`.
#[must_use]
pub fn matches(relations: &ConceptRelations, qualification: &Qualification) -> MatchResult {
    let is = &relations.is;
    let negated = qualification.negated();

    match qualification.matcher() {
        Matcher::Concept(id) => {
            if negated != is.contains(*id) {
                return MatchResult::holds();
            }
            let mut result = MatchResult::default();
            if negated {
                result.redundant.push(*id);
            } else {
                result.missing.push(*id);
            }
            result
        }
        Matcher::Group(group) => {
            let members = group.members();
            let (present, absent): (Vec<ConceptId>, Vec<ConceptId>) =
                members.iter().copied().partition(|id| is.contains(*id));

            let truth = match group.kind() {
                GroupKind::And => absent.is_empty(),
                GroupKind::Or => !present.is_empty(),
                GroupKind::OneOf => present.len() == 1,
            };
            if truth != negated {
                return MatchResult::holds();
            }

            let mut result = MatchResult::default();
            match (group.kind(), negated) {
                (GroupKind::And, true) => result.redundant = members.to_vec(),
                (GroupKind::And, false) => result.missing = absent,
                (GroupKind::Or, true) => result.redundant = present,
                (GroupKind::Or, false) => result.missing = members.to_vec(),
                (GroupKind::OneOf, true) => {
                    result.redundant = present;
                    result.missing = absent;
                }
                (GroupKind::OneOf, false) => {
                    if present.is_empty() {
                        result.missing = members.to_vec();
                    } else {
                        result.redundant = present;
                    }
                }
            }
            result
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
