//! Rule resolution and advice for Taxon.
//!
//! This crate provides:
//! - [`compatible`] / [`self_consistent`] - Contradiction detection
//! - [`matches`] - Trigger evaluation with missing/redundant diagnostics
//! - [`resolve`] - The fixpoint that closes a hypothesis under the rules
//! - [`Repairer`] - Greedy single-rule repair
//! - [`Advisor`] - Safe further facts and rule-satisfying repairs
//! - [`ContextBuilder`] - Programmatic construction of a [`ConceptContext`]
//!
//! [`ConceptContext`]: taxon_foundation::ConceptContext

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod advisor;
pub mod builder;
pub mod config;
pub mod consistency;
pub mod explain;
pub mod matching;
pub mod repair;
pub mod resolver;

pub use advisor::{Advisor, Suggestion};
pub use builder::ContextBuilder;
pub use config::EngineConfig;
pub use consistency::{ConsistencyResult, compatible, self_consistent};
pub use explain::Why;
pub use matching::{MatchResult, matches};
pub use repair::{Repairer, assert_till_verified};
pub use resolver::{ContextResult, resolve, resolve_rules};
