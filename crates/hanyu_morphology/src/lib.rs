//! Word-level inflection for Hanyu.
//!
//! Mandarin marks tense, aspect, voice, and modality with separate words,
//! so inflection is limited to:
//! - the plural marker 们 on nouns that accept it
//! - the possessive particle 的
//! - the personal pronoun table ([`pronouns`])
//! - number-selected demonstrative and indefinite forms ([`determiners`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod determiners;
pub mod inflect;
pub mod pronouns;

pub use config::MorphologyConfig;
pub use determiners::{DeterminerForms, DeterminerTable};
pub use inflect::Inflector;
pub use pronouns::{PronounRole, is_wh_pronoun, pronoun_form, pronoun_slot};
