//! Tree node variants.

use hanyu_foundation::{FeatureSet, LexicalCategory, NodeId, PhraseCategory};

/// A lexical item with its static defaults.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Word {
    /// Citation form. `None` realises as empty text.
    pub base_form: Option<String>,
    /// Part of speech.
    pub category: LexicalCategory,
    /// Lexicon defaults plus any features set by the caller.
    pub features: FeatureSet,
}

/// A use of a [`Word`] with per-use override features.
///
/// The overrides start as a copy of the word's features, so reading them
/// never needs to consult the word.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InflectedWord {
    /// The word being inflected.
    pub word: NodeId,
    /// Override features.
    pub features: FeatureSet,
}

/// Opaque text. Also the type of every realised token.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Literal {
    /// Surface text, possibly empty.
    pub text: String,
    /// Category of the word this token was realised from, if any.
    pub category: Option<LexicalCategory>,
    /// Token features.
    pub features: FeatureSet,
}

/// A phrase or clause.
///
/// Clause-only slots (`subjects`, `front_modifiers`, `verb_phrase`) stay
/// empty for other categories.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Phrase {
    /// Phrase category.
    pub category: PhraseCategory,
    /// Head word or phrase.
    pub head: Option<NodeId>,
    /// Determiner-like constituents.
    pub specifiers: Vec<NodeId>,
    /// Modifiers before the head.
    pub pre_modifiers: Vec<NodeId>,
    /// Complements, including verb objects.
    pub complements: Vec<NodeId>,
    /// Modifiers after the head.
    pub post_modifiers: Vec<NodeId>,
    /// Clause-initial modifiers.
    pub front_modifiers: Vec<NodeId>,
    /// Clause subjects.
    pub subjects: Vec<NodeId>,
    /// The clause's verb phrase.
    pub verb_phrase: Option<NodeId>,
    /// Phrase features.
    pub features: FeatureSet,
}

impl Phrase {
    /// Creates an empty phrase of the given category.
    #[must_use]
    pub fn new(category: PhraseCategory) -> Self {
        Self {
            category,
            head: None,
            specifiers: Vec::new(),
            pre_modifiers: Vec::new(),
            complements: Vec::new(),
            post_modifiers: Vec::new(),
            front_modifiers: Vec::new(),
            subjects: Vec::new(),
            verb_phrase: None,
            features: FeatureSet::new(),
        }
    }
}

/// Sibling constituents joined by a conjunction.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordination {
    /// Coordinated constituents, in order.
    pub children: Vec<NodeId>,
    /// Conjunction text; empty means juxtaposition.
    pub conjunction: String,
    /// Specifiers shared by every child.
    pub specifiers: Vec<NodeId>,
    /// Modifiers before the coordination.
    pub pre_modifiers: Vec<NodeId>,
    /// Modifiers after the coordination.
    pub post_modifiers: Vec<NodeId>,
    /// Complements of the whole coordination.
    pub complements: Vec<NodeId>,
    /// Coordination features.
    pub features: FeatureSet,
}

impl Coordination {
    /// Creates a coordination of `children` joined by `conjunction`.
    #[must_use]
    pub fn new(children: Vec<NodeId>, conjunction: impl Into<String>) -> Self {
        Self {
            children,
            conjunction: conjunction.into(),
            specifiers: Vec::new(),
            pre_modifiers: Vec::new(),
            post_modifiers: Vec::new(),
            complements: Vec::new(),
            features: FeatureSet::new(),
        }
    }
}

/// Realised output: an ordered list of tokens and nested lists.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RealizedList {
    /// Realised items, in surface order.
    pub items: Vec<NodeId>,
    /// List features.
    pub features: FeatureSet,
}

/// A tree node.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node {
    /// Lexical item.
    Word(Word),
    /// Word use with overrides.
    Inflected(InflectedWord),
    /// Opaque or realised text.
    Literal(Literal),
    /// Phrase or clause.
    Phrase(Phrase),
    /// Coordination.
    Coordination(Coordination),
    /// Realised list.
    Realized(RealizedList),
}

impl Node {
    /// Returns the node's features.
    #[must_use]
    pub fn features(&self) -> &FeatureSet {
        match self {
            Self::Word(w) => &w.features,
            Self::Inflected(w) => &w.features,
            Self::Literal(l) => &l.features,
            Self::Phrase(p) => &p.features,
            Self::Coordination(c) => &c.features,
            Self::Realized(r) => &r.features,
        }
    }

    /// Returns the node's features mutably.
    pub fn features_mut(&mut self) -> &mut FeatureSet {
        match self {
            Self::Word(w) => &mut w.features,
            Self::Inflected(w) => &mut w.features,
            Self::Literal(l) => &mut l.features,
            Self::Phrase(p) => &mut p.features,
            Self::Coordination(c) => &mut c.features,
            Self::Realized(r) => &mut r.features,
        }
    }

    /// Returns true for output nodes, which realise to themselves.
    #[must_use]
    pub fn is_realized(&self) -> bool {
        matches!(self, Self::Literal(_) | Self::Realized(_))
    }

    /// Returns every handle this node follows when it is read: its children
    /// plus the word behind an inflected word.
    #[must_use]
    pub fn references(&self) -> Vec<NodeId> {
        match self {
            Self::Word(_) | Self::Literal(_) => Vec::new(),
            Self::Inflected(i) => vec![i.word],
            Self::Phrase(p) => p
                .head
                .into_iter()
                .chain(p.verb_phrase)
                .chain(p.specifiers.iter().copied())
                .chain(p.pre_modifiers.iter().copied())
                .chain(p.complements.iter().copied())
                .chain(p.post_modifiers.iter().copied())
                .chain(p.front_modifiers.iter().copied())
                .chain(p.subjects.iter().copied())
                .collect(),
            Self::Coordination(c) => c
                .children
                .iter()
                .chain(&c.specifiers)
                .chain(&c.pre_modifiers)
                .chain(&c.post_modifiers)
                .chain(&c.complements)
                .copied()
                .collect(),
            Self::Realized(r) => r.items.clone(),
        }
    }

    /// Rewrites every owned child handle through `map`.
    ///
    /// Node-valued features and the word behind an inflected word are
    /// references, not children, and are left alone.
    pub(crate) fn map_children(&mut self, mut map: impl FnMut(NodeId) -> NodeId) {
        fn remap(ids: &mut [NodeId], map: &mut impl FnMut(NodeId) -> NodeId) {
            for id in ids.iter_mut() {
                *id = map(*id);
            }
        }
        match self {
            Self::Word(_) | Self::Inflected(_) | Self::Literal(_) => {}
            Self::Phrase(p) => {
                p.head = p.head.map(&mut map);
                p.verb_phrase = p.verb_phrase.map(&mut map);
                remap(&mut p.specifiers, &mut map);
                remap(&mut p.pre_modifiers, &mut map);
                remap(&mut p.complements, &mut map);
                remap(&mut p.post_modifiers, &mut map);
                remap(&mut p.front_modifiers, &mut map);
                remap(&mut p.subjects, &mut map);
            }
            Self::Coordination(c) => {
                remap(&mut c.children, &mut map);
                remap(&mut c.specifiers, &mut map);
                remap(&mut c.pre_modifiers, &mut map);
                remap(&mut c.post_modifiers, &mut map);
                remap(&mut c.complements, &mut map);
            }
            Self::Realized(r) => remap(&mut r.items, &mut map),
        }
    }
}
