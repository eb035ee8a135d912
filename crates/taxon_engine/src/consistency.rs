//! Contradiction detection.
//!
//! Two relation sets contradict when one says `is` where the other says
//! `isn't`. That overlap is the central failure signal of the whole engine;
//! it is reported as data, never raised.

use taxon_foundation::{ConceptRelations, ConceptSet, GroupKind, Matcher, Qualification};

// =============================================================================
// Consistency Result
// =============================================================================

/// The outcome of a consistency check.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConsistencyResult {
    /// `is` concepts that the other side says `isn't`.
    pub conflict_is: ConceptSet,
    /// `isn't` concepts that the other side says `is`.
    pub conflict_isnt: ConceptSet,
}

impl ConsistencyResult {
    /// Returns true if nothing conflicts.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.conflict_is.is_empty() && self.conflict_isnt.is_empty()
    }
}

// =============================================================================
// Checks
// =============================================================================

/// Checks two relation sets against each other.
///
/// Pass the accumulated facts first and the candidate second: `conflict_is`
/// then lists the base's `is` concepts the candidate denies. Whether the
/// result is ok does not depend on argument order.
#[must_use]
pub fn compatible(base: &ConceptRelations, candidate: &ConceptRelations) -> ConsistencyResult {
    ConsistencyResult {
        conflict_is: base.is.intersection(&candidate.isnt),
        conflict_isnt: base.isnt.intersection(&candidate.is),
    }
}

/// Checks whether firing a qualification would contradict its own trigger.
///
/// The conflict sets name consequence concepts: `conflict_is` holds concepts
/// the consequence asserts that the trigger needs absent, `conflict_isnt`
/// holds concepts the consequence denies that the trigger needs present. A
/// consequence that both asserts and denies a concept lands in both sets.
#[must_use]
pub fn self_consistent(qualification: &Qualification) -> ConsistencyResult {
    let consequence = qualification.resolved();
    let mut result = compatible(consequence, consequence);
    let (is, isnt) = (&consequence.is, &consequence.isnt);
    let negated = qualification.negated();

    match qualification.matcher() {
        Matcher::Concept(id) => {
            if negated && is.contains(*id) {
                result.conflict_is.insert(*id);
            } else if !negated && isnt.contains(*id) {
                result.conflict_isnt.insert(*id);
            }
        }
        Matcher::Group(group) => {
            let members = group.members();
            let asserted: Vec<_> = members.iter().copied().filter(|id| is.contains(*id)).collect();
            let denied: Vec<_> = members.iter().copied().filter(|id| isnt.contains(*id)).collect();

            match (group.kind(), negated) {
                // "not all of G" but the consequence makes all of G true
                (GroupKind::And, true) if asserted.len() == members.len() => {
                    result.conflict_is.extend(asserted);
                }
                // "all of G" but the consequence denies some of G
                (GroupKind::And, false) => result.conflict_isnt.extend(denied),
                // "none of G" but the consequence asserts some of G
                (GroupKind::Or, true) => result.conflict_is.extend(asserted),
                // "some of G" but the consequence denies all of G
                (GroupKind::Or, false) if denied.len() == members.len() => {
                    result.conflict_isnt.extend(denied);
                }
                // "not exactly one" but the consequence pins exactly one
                (GroupKind::OneOf, true)
                    if asserted.len() == 1 && denied.len() + 1 == members.len() =>
                {
                    result.conflict_is.extend(asserted);
                    result.conflict_isnt.extend(denied);
                }
                (GroupKind::OneOf, false) => {
                    if asserted.len() > 1 {
                        result.conflict_is.extend(asserted);
                    } else if denied.len() == members.len() {
                        result.conflict_isnt.extend(denied);
                    }
                }
                _ => {}
            }
        }
    }
    result
}

// =============================================================================
// Tests
// =============================================================================
