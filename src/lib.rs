//! Taxon - Rule-based inference over a concept taxonomy
//!
//! This crate re-exports all layers of the Taxon system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: taxon_engine     - Consistency, matching, resolution, repair, advice
//! Layer 0: taxon_foundation - Concepts, qualifications, relation sets, errors
//! ```

pub use taxon_engine as engine;
pub use taxon_foundation as foundation;
