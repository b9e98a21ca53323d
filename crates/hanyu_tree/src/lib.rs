//! Syntax tree arena, lexicon, and tree-building operations for Hanyu.
//!
//! This crate provides:
//! - [`Tree`] - Arena of nodes addressed by [`NodeId`](hanyu_foundation::NodeId)
//! - [`Node`] - Words, inflected words, literals, phrases, coordinations,
//!   and realised lists
//! - [`Lexicon`] - Static defaults for closed-class and flagged words
//! - Factory operations on [`Tree`] that set the default features the
//!   realisers rely on

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod factory;
pub mod lexicon;
pub mod node;
pub mod tree;

pub use factory::DEFAULT_CONJUNCTION;
pub use lexicon::Lexicon;
pub use node::{Coordination, InflectedWord, Literal, Node, Phrase, RealizedList, Word};
pub use tree::Tree;
