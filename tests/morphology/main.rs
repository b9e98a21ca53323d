//! Integration tests for Layer 2: Morphology
//!
//! Tests word inflection against the standard lexicon, the pronoun table,
//! and determiner forms.

mod pronouns;
