//! Integration tests for the advisor
//!
//! Tests candidate independence, the overridable filter, and repair guards.

use taxon_engine::{Advisor, ContextBuilder, resolve};
use taxon_foundation::{ConceptContext, Declaration, GroupKind, Matcher, QualificationId};

/// A vehicle is a car, a boat, or neither; each kind carries a label, and
/// the "neither" rule is q1.
fn vehicles() -> ConceptContext {
    let mut b = ContextBuilder::new();
    let [car, boat, kind, no_kind, wheels, hull] =
        ["car", "boat", "_kind", "_no_kind", "wheels", "hull"].map(|n| b.concept(n));
    b.add_qualification(
        false,
        Matcher::group(GroupKind::OneOf, [car, boat]),
        vec![Declaration::is(kind)],
    )
    .unwrap();
    b.add_qualification(
        true,
        Matcher::group(GroupKind::Or, [car, boat]),
        vec![Declaration::is(no_kind)],
    )
    .unwrap();
    b.add_qualification(false, car, vec![Declaration::is(wheels), Declaration::isnt(hull)])
        .unwrap();
    b.add_qualification(false, boat, vec![Declaration::is(hull), Declaration::isnt(wheels)])
        .unwrap();
    b.build().unwrap()
}

fn helpers(ctx: &ConceptContext) -> Vec<taxon_foundation::ConceptId> {
    ctx.concepts()
        .filter(|c| c.name.starts_with('_'))
        .map(|c| c.id)
        .collect()
}

#[test]
fn qualified_rules_block_suggestions_unless_overridable() {
    let ctx = vehicles();
    let rel = ctx.relations_with(&["wheels"]).unwrap();
    let car = ctx.id_of("car").unwrap();

    // Adding car knocks out the "neither" rule
    let strict = Advisor::new(rel.clone(), &ctx)
        .with_excluded_concepts(helpers(&ctx))
        .further_concepts();
    assert!(!strict.contains(&car));

    let relaxed = Advisor::new(rel, &ctx)
        .with_excluded_concepts(helpers(&ctx))
        .with_overridable([QualificationId::new(1)])
        .further_concepts();
    assert!(relaxed.contains(&car));
}

#[test]
fn candidates_are_independent() {
    let ctx = vehicles();
    let rel = ctx.relations_with(&["_no_kind"]).unwrap();
    let found = Advisor::new(rel.clone(), &ctx)
        .with_overridable([QualificationId::new(1)])
        .further_concepts();
    // car and boat exclude each other, yet both are offered on their own
    assert!(found.contains(&ctx.id_of("car").unwrap()));
    assert!(found.contains(&ctx.id_of("boat").unwrap()));

    for id in found {
        let mut with = rel.clone();
        with.is.insert(id);
        assert!(resolve(&with, &ctx).is_compatible());
    }
}

#[test]
fn further_qualifications_offer_each_kind() {
    let ctx = vehicles();
    let rel = ctx.relations_with(&["_kind"]).unwrap();
    let suggestions = Advisor::new(rel, &ctx).further_qualifications();

    let offered: Vec<_> = suggestions.iter().map(|s| s.qualification).collect();
    assert!(offered.contains(&QualificationId::new(0)));
    assert!(offered.contains(&QualificationId::new(2)));
    assert!(offered.contains(&QualificationId::new(3)));
    for s in &suggestions {
        assert!(s.result.is_compatible());
        assert!(s.result.base == s.relations);
    }
}

#[test]
fn repairs_respect_facts_already_known() {
    let ctx = vehicles();
    let rel = ctx.relations_with(&["hull"]).unwrap();
    let car = ctx.id_of("car").unwrap();
    let suggestions = Advisor::new(rel, &ctx).further_qualifications();

    // Making the car rule hold would deny the hull
    assert!(suggestions.iter().all(|s| !s.relations.is.contains(car)));
}

#[test]
fn excluded_qualifications_are_carried() {
    let ctx = vehicles();
    let advisor = Advisor::new(ctx.relations_with(&["car"]).unwrap(), &ctx)
        .with_excluded_qualifications([QualificationId::new(3)]);
    assert!(advisor.excluded_qualifications().contains(&QualificationId::new(3)));
    assert_eq!(advisor.relations().is.len(), 1);
}
