//! Concept identifiers and concept entities.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::qualification::QualificationId;
use crate::relations::ConceptRelations;

/// Concept identifier.
///
/// A concept is identified by its arena index inside a [`ConceptContext`],
/// never by its name. Two concepts that happen to share a name in different
/// contexts are unrelated.
///
/// [`ConceptContext`]: crate::ConceptContext
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConceptId(u32);

impl ConceptId {
    /// Creates a concept ID from a raw arena index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw index of this concept.
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

impl fmt::Debug for ConceptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ConceptId({})", self.0)
    }
}

impl fmt::Display for ConceptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Assumed truth value of facts a source never mentions about a concept.
///
/// Carried for front ends; the resolver never consults it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DefaultMode {
    /// Anything not stated may still hold.
    #[default]
    CanBeAnything,
    /// Anything not stated is assumed false.
    IsNothing,
}

impl fmt::Display for DefaultMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CanBeAnything => write!(f, "can-be-anything"),
            Self::IsNothing => write!(f, "is-nothing"),
        }
    }
}

/// A named node in the taxonomy.
///
/// `resolved` and `qualified` are filled in once, when the owning context is
/// built; afterwards a concept is read-only.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Concept {
    /// Arena identity.
    pub id: ConceptId,
    /// Unique name within the owning context.
    pub name: Arc<str>,
    /// Metadata for front ends.
    pub default_mode: DefaultMode,
    /// The concept's own closure. Always contains `id` in `is`.
    pub resolved: ConceptRelations,
    /// Qualifications admitted while computing `resolved`.
    pub qualified: Vec<QualificationId>,
}

impl Concept {
    /// Creates a concept whose closure holds only itself.
    #[must_use]
    pub fn new(id: ConceptId, name: impl Into<Arc<str>>, default_mode: DefaultMode) -> Self {
        let mut resolved = ConceptRelations::new();
        resolved.is.insert(id);
        Self {
            id,
            name: name.into(),
            default_mode,
            resolved,
            qualified: Vec::new(),
        }
    }
}

impl PartialEq for Concept {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Concept {}

impl fmt::Display for Concept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
