//! Hanyu - Mandarin surface realiser
//!
//! This crate re-exports all layers of the Hanyu system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: hanyu_runtime     — Sentence aggregation, serialization, CLI
//! Layer 3: hanyu_syntax      — Clause, phrase, and coordination realisers
//! Layer 2: hanyu_morphology  — Word inflection, pronoun and determiner tables
//! Layer 1: hanyu_tree        — Node arena, lexicon, tree factory
//! Layer 0: hanyu_foundation  — Core types (NodeId, Feature, Error)
//! ```

pub use hanyu_foundation as foundation;
pub use hanyu_morphology as morphology;
pub use hanyu_runtime as runtime;
pub use hanyu_syntax as syntax;
pub use hanyu_tree as tree;
