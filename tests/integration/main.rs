//! Cross-layer integration tests for Taxon
//!
//! Replays scenarios over a realistic map-item taxonomy.

mod taxonomy;
