//! Integration tests for concept sets
//!
//! Tests `ConceptSet` ordering, set algebra, and clone independence.

use taxon_foundation::{ConceptId, ConceptSet};

fn set(ids: &[u32]) -> ConceptSet {
    ids.iter().copied().map(ConceptId::new).collect()
}

// =============================================================================
// Basics
// =============================================================================

#[test]
fn empty_set() {
    let s = ConceptSet::new();
    assert!(s.is_empty());
    assert_eq!(s.len(), 0);
    assert_eq!(s.first(), None);
}

#[test]
fn insert_and_remove_report_changes() {
    let mut s = ConceptSet::unit(ConceptId::new(2));
    assert!(!s.insert(ConceptId::new(2)));
    assert!(s.insert(ConceptId::new(1)));
    assert!(s.remove(ConceptId::new(2)));
    assert!(!s.remove(ConceptId::new(2)));
    assert_eq!(s, set(&[1]));
}

#[test]
fn iteration_follows_definition_order() {
    let s = set(&[9, 3, 5, 3]);
    let ids: Vec<u32> = s.iter().map(ConceptId::index).collect();
    assert_eq!(ids, vec![3, 5, 9]);
    assert_eq!(s.first(), Some(ConceptId::new(3)));
}

// =============================================================================
// Set Algebra
// =============================================================================

#[test]
fn union_intersection_disjoint() {
    let mut a = set(&[1, 2, 3]);
    let b = set(&[3, 4]);
    assert_eq!(a.intersection(&b), set(&[3]));
    assert!(!a.is_disjoint(&b));
    assert!(a.is_disjoint(&set(&[7])));

    a.union_with(&b);
    assert_eq!(a, set(&[1, 2, 3, 4]));
    assert!(b.is_subset(&a));
    assert!(!a.is_subset(&b));
}

#[test]
fn clones_are_independent() {
    let a = set(&[1, 2]);
    let mut b = a.clone();
    b.insert(ConceptId::new(3));
    assert_eq!(a.len(), 2);
    assert_eq!(b.len(), 3);
}
