//! Integration tests for `ConceptContext`

use taxon_foundation::{
    Concept, ConceptContext, DefaultMode, Declaration, ErrorKind, Qualification, concept_id,
    qualification_id,
};

fn forest() -> ConceptContext {
    let concepts = ["plant", "tree", "oak"]
        .iter()
        .enumerate()
        .map(|(slot, name)| Concept::new(concept_id(slot), *name, DefaultMode::CanBeAnything))
        .collect();
    let rules = vec![
        Qualification::when(concept_id(2), vec![Declaration::is(concept_id(1))]),
        Qualification::when(concept_id(1), vec![Declaration::is(concept_id(0))]),
    ];
    ConceptContext::new(concepts, rules).unwrap()
}

#[test]
fn concepts_iterate_in_definition_order() {
    let ctx = forest();
    let names: Vec<&str> = ctx.concepts().map(|c| c.name.as_ref()).collect();
    assert_eq!(names, vec!["plant", "tree", "oak"]);
}

#[test]
fn fresh_concepts_hold_only_themselves() {
    let ctx = forest();
    let oak = ctx.concept_by_name("oak").unwrap();
    assert_eq!(oak.resolved.is.len(), 1);
    assert!(oak.resolved.is.contains(oak.id));
    assert!(oak.qualified.is_empty());
}

#[test]
fn qualification_ids_are_list_positions() {
    let ctx = forest();
    assert_eq!(ctx.qualification_count(), 2);
    let first = ctx.qualification(qualification_id(0)).unwrap();
    assert_eq!(first.matcher().concepts(), &[concept_id(2)]);
}

#[test]
fn names_render_sets() {
    let ctx = forest();
    let rel = ctx.relations_with(&["oak", "plant"]).unwrap();
    assert_eq!(ctx.names(&rel.is), vec!["plant".to_string(), "oak".to_string()]);
}

#[test]
fn unknown_names_are_errors() {
    let ctx = forest();
    let err = ctx.relations_with(&["fern"]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownConceptName(_)));
    assert!(format!("{err}").contains("fern"));
}
