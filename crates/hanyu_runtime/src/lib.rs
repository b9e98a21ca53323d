//! Sentence aggregation, serialization, and CLI support for Hanyu.
//!
//! This crate provides:
//! - [`realise_sentence`] - Realises a tree and punctuates the result
//! - [`Document`] - A tree and its root, saved and loaded as `MessagePack`
//! - [`DEMOS`] - Built-in example sentences for the `hanyu` binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod aggregate;
pub mod demos;
pub mod serialize;

pub use aggregate::{Sentence, aggregate, realise_sentence, realise_sentence_with};
pub use demos::{DEMOS, Demo};
pub use serialize::{Document, from_bytes, load_from_file, save_to_file, to_bytes};
