//! Persistent concept sets with structural sharing.
//!
//! A thin wrapper around `im::OrdSet`. Cloning is O(1), which keeps the
//! resolver's "clone the base, merge the consequences" loop cheap, and
//! iteration follows concept definition order so every result is reproducible.

use std::fmt;
use std::iter::FromIterator;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::concept::ConceptId;

/// Ordered persistent set of concepts.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConceptSet(im::OrdSet<ConceptId>);

impl ConceptSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self(im::OrdSet::new())
    }

    /// Creates a set holding a single concept.
    #[must_use]
    pub fn unit(id: ConceptId) -> Self {
        Self(im::OrdSet::unit(id))
    }

    /// Returns the number of concepts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if the set contains the concept.
    #[must_use]
    pub fn contains(&self, id: ConceptId) -> bool {
        self.0.contains(&id)
    }

    /// Inserts a concept in place. Returns true if it was not present.
    pub fn insert(&mut self, id: ConceptId) -> bool {
        self.0.insert(id).is_none()
    }

    /// Removes a concept in place. Returns true if it was present.
    pub fn remove(&mut self, id: ConceptId) -> bool {
        self.0.remove(&id).is_some()
    }

    /// Returns the earliest-defined concept in the set.
    #[must_use]
    pub fn first(&self) -> Option<ConceptId> {
        self.0.get_min().copied()
    }

    /// Returns an iterator over the concepts in definition order.
    pub fn iter(&self) -> impl Iterator<Item = ConceptId> + '_ {
        self.0.iter().copied()
    }

    /// Adds every concept of `other` to this set.
    pub fn union_with(&mut self, other: &Self) {
        if other.is_empty() {
            return;
        }
        let lhs = std::mem::take(&mut self.0);
        self.0 = lhs.union(other.0.clone());
    }

    /// Returns the concepts present in both sets.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.iter().filter(|id| large.contains(*id)).collect()
    }

    /// Returns true if the sets share no concept.
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        !small.iter().any(|id| large.contains(id))
    }

    /// Returns true if every concept of this set is in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.iter().all(|id| other.contains(id))
    }
}

impl fmt::Debug for ConceptSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.iter()).finish()
    }
}

impl FromIterator<ConceptId> for ConceptSet {
    fn from_iter<I: IntoIterator<Item = ConceptId>>(iter: I) -> Self {
        Self(im::OrdSet::from_iter(iter))
    }
}

impl Extend<ConceptId> for ConceptSet {
    fn extend<I: IntoIterator<Item = ConceptId>>(&mut self, iter: I) {
        for id in iter {
            self.0.insert(id);
        }
    }
}

impl<'a> IntoIterator for &'a ConceptSet {
    type Item = &'a ConceptId;
    type IntoIter = im::ordset::Iter<'a, ConceptId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
