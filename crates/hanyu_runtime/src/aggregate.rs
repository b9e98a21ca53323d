//! Sentence aggregation.
//!
//! Flattens a realised tree into tokens, applies determiner allomorphy
//! across token boundaries, and punctuates the result.

use std::fmt;

use hanyu_foundation::{FeatureSet, LexicalCategory, NodeId};
use hanyu_morphology::Inflector;
use hanyu_syntax::{Realiser, RealiserConfig};
use hanyu_tree::{Node, Tree};
use tracing::debug;

/// Appended to declarative sentences.
pub const FULL_STOP: &str = "。";

/// Appended to questions.
pub const QUESTION_MARK: &str = "？";

/// A realised sentence.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Sentence {
    /// Surface tokens in order, empty tokens dropped.
    pub tokens: Vec<String>,
    /// Whether the root was a question.
    pub interrogative: bool,
}

impl Sentence {
    /// Joins the tokens with single spaces and adds final punctuation.
    ///
    /// An empty sentence has no punctuation either.
    #[must_use]
    pub fn text(&self) -> String {
        if self.tokens.is_empty() {
            return String::new();
        }
        let mut text = self.tokens.join(" ");
        text.push_str(if self.interrogative {
            QUESTION_MARK
        } else {
            FULL_STOP
        });
        text
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// Realises `root` with the default configuration.
pub fn realise_sentence(tree: &mut Tree, root: NodeId) -> Sentence {
    realise_sentence_with(tree, root, &RealiserConfig::default())
}

/// Realises `root` and aggregates the output into a sentence.
pub fn realise_sentence_with(tree: &mut Tree, root: NodeId, config: &RealiserConfig) -> Sentence {
    let interrogative = is_interrogative(tree, root);
    let realised = Realiser::new(tree)
        .with_config(config.clone())
        .realise(root);
    let inflector = Inflector::new(config.morphology.clone());
    let tokens = aggregate(tree, realised, &inflector);
    debug!(%root, tokens = tokens.len(), interrogative, "sentence realised");
    Sentence {
        tokens,
        interrogative,
    }
}

/// Flattens a realised node into its non-empty tokens.
///
/// A determiner or numeral token takes its pre-vowel allomorph when the
/// next token calls for one.
#[must_use]
pub fn aggregate(tree: &Tree, realised: NodeId, inflector: &Inflector) -> Vec<String> {
    let leaves: Vec<(&str, Option<LexicalCategory>)> = tree
        .leaves(realised)
        .into_iter()
        .filter_map(|id| match tree.get(id) {
            Some(Node::Literal(l)) if !l.text.is_empty() => Some((l.text.as_str(), l.category)),
            _ => None,
        })
        .collect();

    leaves
        .iter()
        .enumerate()
        .map(|(index, &(text, category))| {
            let next = leaves.get(index + 1).map(|&(next, _)| next);
            match (category, next) {
                (
                    Some(LexicalCategory::Demonstrative | LexicalCategory::Numeral),
                    Some(next),
                ) => inflector
                    .determiner_before(text, next)
                    .unwrap_or(text)
                    .to_string(),
                _ => text.to_string(),
            }
        })
        .collect()
}

/// A clause asks a question when it or its verb phrase carries an
/// interrogative type.
fn is_interrogative(tree: &Tree, root: NodeId) -> bool {
    let asks = |id: NodeId| {
        tree.features(id)
            .and_then(FeatureSet::interrogative)
            .is_some()
    };
    asks(root) || tree.verb_phrase_of_clause(root).is_some_and(asks)
}
