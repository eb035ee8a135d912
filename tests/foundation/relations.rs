//! Integration tests for relation triples and qualifications

use taxon_foundation::{
    ConceptId, ConceptRelations, Declaration, GroupKind, Matcher, Qualification, Verb,
};

fn c(i: u32) -> ConceptId {
    ConceptId::new(i)
}

#[test]
fn merge_unions_each_verb() {
    let mut a = ConceptRelations::with_is([c(1)]);
    let mut b = ConceptRelations::new();
    b.isnt.insert(c(2));
    b.can_be.insert(c(3));
    a.merge(&b);

    assert!(a.holds(Verb::Is, c(1)));
    assert!(a.holds(Verb::Isnt, c(2)));
    assert!(a.holds(Verb::CanBe, c(3)));
    assert!(a.mentions(c(3)));
    assert!(!a.mentions(c(4)));
}

#[test]
fn qualification_folds_declarations_by_verb() {
    let q = Qualification::when(
        c(0),
        vec![Declaration::is(c(1)), Declaration::isnt(c(2)), Declaration::can_be(c(3))],
    );
    let consequence = q.resolved();
    assert!(consequence.is.contains(c(1)));
    assert!(consequence.isnt.contains(c(2)));
    assert!(consequence.can_be.contains(c(3)));
    assert_eq!(q.declared().len(), 3);
    assert!(!q.negated());
}

#[test]
fn group_members_are_deduplicated_in_order() {
    let m = Matcher::group(GroupKind::Or, [c(3), c(1), c(3), c(2)]);
    assert_eq!(m.concepts(), &[c(3), c(1), c(2)]);
}

#[test]
fn qualification_mentions_trigger_then_consequence() {
    let q = Qualification::unless(
        Matcher::group(GroupKind::And, [c(4), c(5)]),
        vec![Declaration::is(c(6))],
    );
    assert!(q.negated());
    let all: Vec<_> = q.concepts().collect();
    assert_eq!(all, vec![c(4), c(5), c(6)]);
}

#[test]
fn verbs_display_like_the_surface_syntax() {
    let shown: Vec<String> = Verb::ALL.iter().map(ToString::to_string).collect();
    assert_eq!(shown, vec!["is", "isn't", "can-be"]);
}
