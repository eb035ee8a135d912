//! The `is` / `isn't` / `can-be` relation triple and its algebra.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::collections::ConceptSet;
use crate::concept::ConceptId;

/// The three verbs relating a subject to a concept.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Verb {
    /// The subject is the concept.
    Is,
    /// The subject is not the concept.
    Isnt,
    /// The subject may be the concept.
    CanBe,
}

impl Verb {
    /// All verbs, in canonical order.
    pub const ALL: [Verb; 3] = [Verb::Is, Verb::Isnt, Verb::CanBe];
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Is => write!(f, "is"),
            Self::Isnt => write!(f, "isn't"),
            Self::CanBe => write!(f, "can-be"),
        }
    }
}

/// What is known or asserted about a subject.
///
/// Used for a concept's own closure, for a qualification's consequence, and
/// for working hypotheses. Nothing here stops `is` and `isnt` from
/// overlapping; detecting that overlap is the consistency checker's job.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConceptRelations {
    /// Concepts the subject is.
    pub is: ConceptSet,
    /// Concepts the subject is not.
    pub isnt: ConceptSet,
    /// Concepts the subject may be.
    pub can_be: ConceptSet,
}

impl ConceptRelations {
    /// Creates empty relations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates relations asserting `is` for each concept.
    #[must_use]
    pub fn with_is(ids: impl IntoIterator<Item = ConceptId>) -> Self {
        Self {
            is: ids.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Returns true if all three sets are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.is.is_empty() && self.isnt.is_empty() && self.can_be.is_empty()
    }

    /// Selects the set belonging to `verb`.
    #[must_use]
    pub fn pick(&self, verb: Verb) -> &ConceptSet {
        match verb {
            Verb::Is => &self.is,
            Verb::Isnt => &self.isnt,
            Verb::CanBe => &self.can_be,
        }
    }

    /// Selects the set belonging to `verb`, mutably.
    pub fn pick_mut(&mut self, verb: Verb) -> &mut ConceptSet {
        match verb {
            Verb::Is => &mut self.is,
            Verb::Isnt => &mut self.isnt,
            Verb::CanBe => &mut self.can_be,
        }
    }

    /// Returns true if `verb` holds for `id`.
    #[must_use]
    pub fn holds(&self, verb: Verb, id: ConceptId) -> bool {
        self.pick(verb).contains(id)
    }

    /// Unions each of `src`'s sets into the matching set of `self`.
    pub fn merge(&mut self, src: &Self) {
        self.is.union_with(&src.is);
        self.isnt.union_with(&src.isnt);
        self.can_be.union_with(&src.can_be);
    }

    /// Merges every source in order.
    pub fn merge_all<'a>(&mut self, srcs: impl IntoIterator<Item = &'a ConceptRelations>) {
        for src in srcs {
            self.merge(src);
        }
    }

    /// Returns true if `id` is mentioned by any verb.
    #[must_use]
    pub fn mentions(&self, id: ConceptId) -> bool {
        Verb::ALL.iter().any(|verb| self.holds(*verb, id))
    }
}
