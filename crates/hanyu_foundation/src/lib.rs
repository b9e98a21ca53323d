//! Core types shared by every layer of Hanyu.
//!
//! This crate provides:
//! - [`NodeId`] - Handles into the syntax tree arena
//! - [`Category`] - Lexical and phrasal categories
//! - [`Feature`], [`FeatureValue`], [`FeatureSet`] - Grammatical feature bags
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod category;
pub mod error;
pub mod feature;
pub mod node;

pub use category::{Category, LexicalCategory, PhraseCategory};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use feature::{
    ClauseStatus, DiscourseFunction, Feature, FeatureSet, FeatureValue, Form, Gender,
    InterrogativeType, Number, Person, Tense,
};
pub use node::NodeId;
