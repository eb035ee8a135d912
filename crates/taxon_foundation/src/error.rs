//! Error types for the Taxon system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Resolution never fails; these errors come from building a context and
//! from the repair kill switch.

use std::fmt;

use thiserror::Error;

use crate::concept::ConceptId;
use crate::qualification::QualificationId;

/// The main error type for Taxon operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an unknown concept error.
    #[must_use]
    pub fn unknown_concept(id: ConceptId) -> Self {
        Self::new(ErrorKind::UnknownConcept(id))
    }

    /// Creates an unknown concept name error.
    #[must_use]
    pub fn unknown_name(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownConceptName(name.into()))
    }

    /// Creates an unknown qualification error.
    #[must_use]
    pub fn unknown_qualification(id: QualificationId) -> Self {
        Self::new(ErrorKind::UnknownQualification(id))
    }

    /// Creates a semantic limit exceeded error.
    #[must_use]
    pub fn limit_exceeded(limit: SemanticLimit) -> Self {
        Self::new(ErrorKind::LimitExceeded(limit))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A concept id does not belong to the context being built.
    #[error("unknown concept: {0:?}")]
    UnknownConcept(ConceptId),

    /// No concept carries this name.
    #[error("unknown concept name: {0}")]
    UnknownConceptName(String),

    /// A qualification id does not belong to the context.
    #[error("unknown qualification: {0:?}")]
    UnknownQualification(QualificationId),

    /// A group matcher with no members.
    #[error("group matcher has no members")]
    EmptyGroup,

    /// Firing the qualification would contradict its own trigger.
    #[error(
        "inconsistent qualification: is {{{}}}, isn't {{{}}}",
        .conflict_is.join(", "),
        .conflict_isnt.join(", ")
    )]
    InconsistentQualification {
        /// Names of consequence `is` concepts in conflict.
        conflict_is: Vec<String>,
        /// Names of consequence `isn't` concepts in conflict.
        conflict_isnt: Vec<String>,
    },

    /// Semantic limit exceeded (kill switch triggered).
    #[error("limit exceeded: {0}")]
    LimitExceeded(SemanticLimit),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Semantic limits (kill switches) that can be exceeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemanticLimit {
    /// Greedy repair did not converge within the step budget.
    MaxRepairSteps {
        /// The configured limit.
        limit: usize,
        /// The qualification being repaired.
        qualification: Option<QualificationId>,
    },
}

impl fmt::Display for SemanticLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxRepairSteps {
                limit,
                qualification,
            } => {
                write!(f, "max repair steps ({limit}) exceeded")?;
                if let Some(q) = qualification {
                    write!(f, " for qualification {q}")?;
                }
                Ok(())
            }
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source label (file, rule name, builder position).
    pub source: Option<String>,
    /// Enclosing operations, innermost last.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source label.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
