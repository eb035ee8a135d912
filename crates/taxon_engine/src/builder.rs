//! Programmatic construction of a [`ConceptContext`].
//!
//! Concepts are defined on first mention. Qualifications are validated as
//! they are added: every referenced concept must exist, groups must have
//! members, and the rule must not contradict its own trigger. `build` then
//! closes every concept under the finished rule list.

use std::collections::HashMap;
use std::sync::Arc;

use taxon_foundation::{
    Concept, ConceptContext, ConceptId, ContextDiagnostic, DefaultMode, Declaration, Error,
    ErrorContext, ErrorKind, Matcher, Qualification, QualificationId, Result, concept_id,
    qualification_id,
};

use crate::consistency::self_consistent;
use crate::resolver::resolve_rules;

/// Accumulates concepts and rules, then freezes them into a context.
#[derive(Clone, Debug)]
pub struct ContextBuilder {
    concepts: Vec<Concept>,
    by_name: HashMap<Arc<str>, ConceptId>,
    qualifications: Vec<Qualification>,
    diagnostics: Vec<ContextDiagnostic>,
    default_mode: DefaultMode,
    strict: bool,
    submitted: usize,
}

impl Default for ContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextBuilder {
    /// Creates an empty strict builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            concepts: Vec::new(),
            by_name: HashMap::new(),
            qualifications: Vec::new(),
            diagnostics: Vec::new(),
            default_mode: DefaultMode::default(),
            strict: true,
            submitted: 0,
        }
    }

    /// In strict mode a self-inconsistent rule is an error; otherwise it is
    /// dropped and recorded as a diagnostic.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Sets the mode given to concepts defined from now on.
    pub fn set_default_mode(&mut self, mode: DefaultMode) {
        self.default_mode = mode;
    }

    /// Returns the id for `name`, defining the concept if needed.
    pub fn concept(&mut self, name: &str) -> ConceptId {
        if let Some(id) = self.by_name.get(name) {
            return *id;
        }
        let id = concept_id(self.concepts.len());
        let concept = Concept::new(id, name, self.default_mode);
        self.by_name.insert(Arc::clone(&concept.name), id);
        self.concepts.push(concept);
        id
    }

    /// Defines several concepts at once.
    pub fn concepts(&mut self, names: &[&str]) -> Vec<ConceptId> {
        names.iter().map(|name| self.concept(name)).collect()
    }

    /// Appends a rule to the ordered list.
    ///
    /// Returns the rule's id, or `None` if a lenient builder dropped it.
    ///
    /// # Errors
    /// Returns an error for a foreign concept id, an empty group, or (in
    /// strict mode) a self-inconsistent rule.
    pub fn add_qualification(
        &mut self,
        negated: bool,
        matcher: impl Into<Matcher>,
        declared: Vec<Declaration>,
    ) -> Result<Option<QualificationId>> {
        let position = self.submitted;
        self.submitted += 1;
        let qualification = Qualification::new(negated, matcher, declared);

        for id in qualification.concepts() {
            if id.slot() >= self.concepts.len() {
                return Err(Error::unknown_concept(id).with_context(
                    ErrorContext::new().with_source(format!("qualification #{position}")),
                ));
            }
        }
        if qualification.matcher().concepts().is_empty() {
            return Err(Error::new(ErrorKind::EmptyGroup).with_context(
                ErrorContext::new().with_source(format!("qualification #{position}")),
            ));
        }

        let check = self_consistent(&qualification);
        if !check.is_ok() {
            if self.strict {
                return Err(Error::new(ErrorKind::InconsistentQualification {
                    conflict_is: self.names(check.conflict_is.iter()),
                    conflict_isnt: self.names(check.conflict_isnt.iter()),
                }));
            }
            tracing::warn!(position, "dropping self-inconsistent qualification");
            self.diagnostics.push(ContextDiagnostic::Rejected {
                position,
                conflict_is: check.conflict_is,
                conflict_isnt: check.conflict_isnt,
            });
            return Ok(None);
        }

        let id = qualification_id(self.qualifications.len());
        self.qualifications.push(qualification);
        Ok(Some(id))
    }

    fn names(&self, ids: impl Iterator<Item = ConceptId>) -> Vec<String> {
        ids.map(|id| self.concepts[id.slot()].name.to_string()).collect()
    }

    /// Closes every concept under the rules and freezes the context.
    ///
    /// # Errors
    /// Returns an error if the concept arena is malformed.
    pub fn build(self) -> Result<ConceptContext> {
        let Self {
            mut concepts,
            qualifications,
            mut diagnostics,
            ..
        } = self;

        for concept in &mut concepts {
            let closure = resolve_rules(&concept.resolved, &qualifications);
            for (qualification, fit) in closure.incompatible {
                tracing::warn!(
                    concept = %concept.name,
                    qualification = %qualification,
                    "qualification contradicts concept closure"
                );
                diagnostics.push(ContextDiagnostic::Incompatible {
                    concept: concept.id,
                    qualification,
                    conflict_is: fit.conflict_is,
                    conflict_isnt: fit.conflict_isnt,
                });
            }
            concept.resolved = closure.resolved;
            concept.qualified = closure.qualified;
        }

        Ok(ConceptContext::new(concepts, qualifications)?.with_diagnostics(diagnostics))
    }
}
