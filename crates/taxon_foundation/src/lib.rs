//! Concept taxonomy data model and relation algebra for Taxon.
//!
//! This crate provides:
//! - [`ConceptId`] / [`Concept`] - Named taxonomy nodes, keyed by arena index
//! - [`ConceptSet`] - Persistent ordered sets of concepts
//! - [`ConceptRelations`] - The `is` / `isn't` / `can-be` triple
//! - [`Qualification`] - Conditional rules with a trigger and a consequence
//! - [`ConceptContext`] - The read-only concept + rule universe
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod concept;
pub mod context;
pub mod error;
pub mod qualification;
pub mod relations;

pub use collections::ConceptSet;
pub use concept::{Concept, ConceptId, DefaultMode};
pub use context::{ConceptContext, ContextDiagnostic, concept_id, qualification_id};
pub use error::{Error, ErrorContext, ErrorKind, SemanticLimit};
pub use qualification::{
    ConceptGroup, Declaration, GroupKind, Matcher, Qualification, QualificationId,
};
pub use relations::{ConceptRelations, Verb};

/// Result type alias using Taxon's error type.
pub type Result<T> = std::result::Result<T, Error>;
