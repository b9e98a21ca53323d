//! Phrase and clause realisers for Hanyu.
//!
//! This crate provides:
//! - [`Realiser`] - Dispatches any tree node to the realiser for its category
//! - [`RealiserConfig`] - The closed-class words the realisers insert
//! - [`sort_modifiers`] - Position-band premodifier ordering
//! - [`resolve_modal`] - The modal and negation word a verb phrase resolves to
//!
//! Every realiser returns a realised node appended to the same tree. Output
//! is a pure function of the input tree; realisation never fails.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod ordering;
pub mod realiser;
pub mod verb_group;

mod adjective_phrase;
mod clause;
mod coordination;
mod interrogative;
mod noun_phrase;
mod phrase;
mod specifiers;
mod verb_phrase;


pub use config::RealiserConfig;
pub use ordering::{Bands, sort_modifiers};
pub use realiser::Realiser;
pub use verb_group::{ModalResolution, Voice, resolve_modal};
