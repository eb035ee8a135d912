//! Qualifications: conditional rules over concepts.
//!
//! A qualification reads "when the subject is (or, if negated, is not)
//! `matcher`, then `declared`". The trigger is evaluated against the `is` set
//! of a hypothesis only; the consequence is a relation triple.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::concept::ConceptId;
use crate::relations::{ConceptRelations, Verb};

// =============================================================================
// Identity
// =============================================================================

/// Qualification identifier: the rule's position in its context's list.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QualificationId(u32);

impl QualificationId {
    /// Creates a qualification ID from a raw list index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw index of this qualification.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }

    /// Returns the index as a `usize`, for slice access.
    #[must_use]
    pub const fn slot(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for QualificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QualificationId({})", self.0)
    }
}

impl fmt::Display for QualificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

// =============================================================================
// Matchers
// =============================================================================

/// How a group's members combine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GroupKind {
    /// Every member is present.
    And,
    /// At least one member is present.
    Or,
    /// Exactly one member is present.
    OneOf,
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And => write!(f, "and"),
            Self::Or => write!(f, "or"),
            Self::OneOf => write!(f, "one-of"),
        }
    }
}

/// A multi-concept predicate over an `is` set.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConceptGroup {
    kind: GroupKind,
    members: Vec<ConceptId>,
}

impl ConceptGroup {
    /// Creates a group. Repeated members are dropped, first occurrence wins.
    #[must_use]
    pub fn new(kind: GroupKind, members: impl IntoIterator<Item = ConceptId>) -> Self {
        let mut unique: Vec<ConceptId> = Vec::new();
        for id in members {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }
        Self {
            kind,
            members: unique,
        }
    }

    /// Returns the group kind.
    #[must_use]
    pub fn kind(&self) -> GroupKind {
        self.kind
    }

    /// Returns the members in declaration order.
    #[must_use]
    pub fn members(&self) -> &[ConceptId] {
        &self.members
    }
}

/// The trigger subject of a qualification.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Matcher {
    /// A single concept.
    Concept(ConceptId),
    /// A logical group of concepts.
    Group(ConceptGroup),
}

impl Matcher {
    /// Shorthand for a group matcher.
    #[must_use]
    pub fn group(kind: GroupKind, members: impl IntoIterator<Item = ConceptId>) -> Self {
        Self::Group(ConceptGroup::new(kind, members))
    }

    /// Returns every concept the matcher reads, in order.
    #[must_use]
    pub fn concepts(&self) -> &[ConceptId] {
        match self {
            Self::Concept(id) => std::slice::from_ref(id),
            Self::Group(group) => group.members(),
        }
    }
}

impl From<ConceptId> for Matcher {
    fn from(id: ConceptId) -> Self {
        Self::Concept(id)
    }
}

impl From<ConceptGroup> for Matcher {
    fn from(group: ConceptGroup) -> Self {
        Self::Group(group)
    }
}

// =============================================================================
// Declarations
// =============================================================================

/// A single `(verb, concept)` consequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Declaration {
    /// The verb.
    pub verb: Verb,
    /// The concept the verb applies to.
    pub concept: ConceptId,
}

impl Declaration {
    /// Creates a declaration.
    #[must_use]
    pub const fn new(verb: Verb, concept: ConceptId) -> Self {
        Self { verb, concept }
    }

    /// `is concept`
    #[must_use]
    pub const fn is(concept: ConceptId) -> Self {
        Self::new(Verb::Is, concept)
    }

    /// `isn't concept`
    #[must_use]
    pub const fn isnt(concept: ConceptId) -> Self {
        Self::new(Verb::Isnt, concept)
    }

    /// `can-be concept`
    #[must_use]
    pub const fn can_be(concept: ConceptId) -> Self {
        Self::new(Verb::CanBe, concept)
    }
}

// =============================================================================
// Qualification
// =============================================================================

/// A conditional rule: trigger (matcher + polarity) implies consequence.
///
/// `resolved` is always the fold of `declared` by verb. Both are fixed at
/// construction, which is why the fields are private.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Qualification {
    negated: bool,
    matcher: Matcher,
    declared: Vec<Declaration>,
    resolved: ConceptRelations,
}

impl Qualification {
    /// Creates a qualification, materializing the consequence triple.
    #[must_use]
    pub fn new(negated: bool, matcher: impl Into<Matcher>, declared: Vec<Declaration>) -> Self {
        let mut resolved = ConceptRelations::new();
        for decl in &declared {
            resolved.pick_mut(decl.verb).insert(decl.concept);
        }
        Self {
            negated,
            matcher: matcher.into(),
            declared,
            resolved,
        }
    }

    /// Rule firing when the matcher holds.
    #[must_use]
    pub fn when(matcher: impl Into<Matcher>, declared: Vec<Declaration>) -> Self {
        Self::new(false, matcher, declared)
    }

    /// Rule firing when the matcher does not hold.
    #[must_use]
    pub fn unless(matcher: impl Into<Matcher>, declared: Vec<Declaration>) -> Self {
        Self::new(true, matcher, declared)
    }

    /// Whether the matcher must be absent rather than present.
    #[must_use]
    pub fn negated(&self) -> bool {
        self.negated
    }

    /// The trigger.
    #[must_use]
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// The consequence as stated.
    #[must_use]
    pub fn declared(&self) -> &[Declaration] {
        &self.declared
    }

    /// The consequence as a relation triple.
    #[must_use]
    pub fn resolved(&self) -> &ConceptRelations {
        &self.resolved
    }

    /// Every concept the rule mentions, trigger first.
    pub fn concepts(&self) -> impl Iterator<Item = ConceptId> + '_ {
        self.matcher
            .concepts()
            .iter()
            .copied()
            .chain(self.declared.iter().map(|d| d.concept))
    }
}
