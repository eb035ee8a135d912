//! Integration tests for greedy repair

use taxon_engine::{ContextBuilder, EngineConfig, Repairer, assert_till_verified, matches};
use taxon_foundation::{
    ConceptId, ConceptRelations, Declaration, ErrorKind, GroupKind, Matcher, Qualification,
    QualificationId, SemanticLimit,
};

#[test]
fn repair_in_context_uses_the_listed_rule() {
    let mut b = ContextBuilder::new();
    let [fish, fins, gills] = ["fish", "fins", "gills"].map(|n| b.concept(n));
    b.add_qualification(
        false,
        Matcher::group(GroupKind::And, [fins, gills]),
        vec![Declaration::is(fish)],
    )
    .unwrap();
    let ctx = b.build().unwrap();

    let rel = ctx.relations_with(&["fins"]).unwrap();
    let fixed = Repairer::default()
        .repair_in(&rel, &ctx, QualificationId::new(0))
        .unwrap();
    assert!(fixed.is.contains(gills));
    assert!(matches(&fixed, ctx.qualification(QualificationId::new(0)).unwrap()).is_ok());
}

#[test]
fn repair_in_rejects_foreign_rules() {
    let ctx = ContextBuilder::new().build().unwrap();
    let err = Repairer::default()
        .repair_in(&ConceptRelations::new(), &ctx, QualificationId::new(3))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownQualification(_)));
}

#[test]
fn limit_reports_the_rule() {
    let mut b = ContextBuilder::new();
    let ids = b.concepts(&["a", "b", "c", "d"]);
    b.add_qualification(
        false,
        Matcher::group(GroupKind::And, ids[..3].iter().copied()),
        vec![Declaration::is(ids[3])],
    )
    .unwrap();
    let ctx = b.build().unwrap();

    let repairer = Repairer::new(&EngineConfig::new().with_max_repair_steps(1));
    let err = repairer
        .repair_in(&ConceptRelations::new(), &ctx, QualificationId::new(0))
        .unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::LimitExceeded(SemanticLimit::MaxRepairSteps {
            limit: 1,
            qualification: Some(_),
        })
    ));
}

#[test]
fn other_verbs_are_left_alone() {
    let (a, x) = (ConceptId::new(0), ConceptId::new(1));
    let q = Qualification::when(a, vec![Declaration::is(x)]);

    let mut rel = ConceptRelations::new();
    rel.isnt.insert(x);
    rel.can_be.insert(a);
    let fixed = assert_till_verified(&rel, &q).unwrap();
    assert_eq!(fixed.isnt, rel.isnt);
    assert_eq!(fixed.can_be, rel.can_be);
    assert!(fixed.is.contains(a));
}
