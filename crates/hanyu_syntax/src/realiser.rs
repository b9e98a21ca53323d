//! The dispatcher: routes each node to the realiser for its category.

use hanyu_foundation::{
    Category, DiscourseFunction, Feature, FeatureSet, FeatureValue, LexicalCategory, NodeId,
    PhraseCategory,
};
use hanyu_morphology::Inflector;
use hanyu_tree::{Node, Tree};
use tracing::trace;

use crate::config::RealiserConfig;
use crate::{adjective_phrase, clause, coordination, noun_phrase, phrase, verb_phrase};

/// Realises nodes of a [`Tree`] into ordered token lists.
///
/// Realisation never fails. Output nodes are appended to the same tree: each
/// call returns either a literal token or a realised list, and both realise
/// to themselves.
pub struct Realiser<'t> {
    tree: &'t mut Tree,
    config: RealiserConfig,
    inflector: Inflector,
}

impl<'t> Realiser<'t> {
    /// Creates a realiser with the default configuration.
    pub fn new(tree: &'t mut Tree) -> Self {
        Self {
            tree,
            config: RealiserConfig::default(),
            inflector: Inflector::default(),
        }
    }

    /// Sets the configuration.
    #[must_use]
    pub fn with_config(mut self, config: RealiserConfig) -> Self {
        self.inflector = Inflector::new(config.morphology.clone());
        self.config = config;
        self
    }

    /// Returns the tree.
    #[must_use]
    pub fn tree(&self) -> &Tree {
        self.tree
    }

    /// Returns the tree mutably.
    pub fn tree_mut(&mut self) -> &mut Tree {
        self.tree
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &RealiserConfig {
        &self.config
    }

    /// Realises a node.
    ///
    /// Literal tokens and realised lists are returned unchanged. Unknown
    /// handles realise to an empty list.
    pub fn realise(&mut self, id: NodeId) -> NodeId {
        let Some(node) = self.tree.get(id) else {
            return self.tree.realized(Vec::new());
        };
        match node {
            Node::Literal(_) | Node::Realized(_) => id,
            Node::Word(_) | Node::Inflected(_) => self.realise_leaf(id),
            Node::Phrase(p) => {
                let category = p.category;
                trace!(%id, %category, "realise phrase");
                match category {
                    PhraseCategory::Clause => clause::realise(self, id),
                    PhraseCategory::NounPhrase => noun_phrase::realise(self, id),
                    PhraseCategory::VerbPhrase => verb_phrase::realise(self, id),
                    PhraseCategory::AdjectivePhrase => adjective_phrase::realise(self, id),
                    PhraseCategory::AdverbPhrase
                    | PhraseCategory::PrepositionalPhrase
                    | PhraseCategory::CannedText => phrase::realise(self, id),
                }
            }
            Node::Coordination(_) => {
                trace!(%id, "realise coordination");
                coordination::realise(self, id)
            }
        }
    }

    /// Realises a node and stamps the output with a discourse function.
    pub fn realise_as(&mut self, id: NodeId, function: DiscourseFunction) -> NodeId {
        let out = self.realise(id);
        self.tree.set_feature(out, Feature::DiscourseFunction, function);
        out
    }

    fn realise_leaf(&mut self, id: NodeId) -> NodeId {
        let (word, overrides) = match self.tree.get(id) {
            Some(Node::Word(w)) => (Some(w.clone()), w.features.clone()),
            Some(Node::Inflected(i)) => {
                let word = match self.tree.get(i.word) {
                    Some(Node::Word(w)) => Some(w.clone()),
                    _ => None,
                };
                (word, i.features.clone())
            }
            _ => (None, FeatureSet::new()),
        };
        let category = word.as_ref().map(|w| w.category);
        let text = match &word {
            Some(_) if overrides.flag(Feature::Elided) => String::new(),
            Some(w) => self.inflector.inflect(w, &overrides),
            None => String::new(),
        };
        trace!(%id, %text, "realise leaf");
        self.tree.token(text, category, overrides)
    }

    // =========================================================================
    // Closed-class helpers
    // =========================================================================

    /// Adds an unrealised closed-class word, taking lexicon defaults.
    pub(crate) fn closed_word(&mut self, base: &str, category: LexicalCategory) -> NodeId {
        self.tree.word(base, category)
    }

    /// Adds a realised closed-class token.
    pub(crate) fn closed_token(
        &mut self,
        text: &str,
        category: LexicalCategory,
        function: Option<DiscourseFunction>,
    ) -> NodeId {
        let mut features = FeatureSet::new();
        features.set_opt(Feature::DiscourseFunction, function);
        self.tree.token(text, Some(category), features)
    }

    /// Adds a linking particle token.
    pub(crate) fn particle(&mut self, text: &str) -> NodeId {
        self.closed_token(text, LexicalCategory::Particle, None)
    }

    /// Realises a particle given either as text or as a node.
    pub(crate) fn realise_particle(&mut self, value: &FeatureValue) -> Option<NodeId> {
        match value {
            FeatureValue::Text(text) => Some(self.particle(text)),
            FeatureValue::Node(id) => Some(self.realise(*id)),
            _ => None,
        }
    }

    // =========================================================================
    // Feature helpers
    // =========================================================================

    /// Returns a node's features, or an empty set.
    pub(crate) fn features(&self, id: NodeId) -> FeatureSet {
        self.tree.features(id).cloned().unwrap_or_default()
    }

    /// Returns true if the node or its head has the flag.
    pub(crate) fn head_flag(&self, id: NodeId, key: Feature) -> bool {
        self.tree.head_flag(id, key)
    }

    /// Returns the node's category.
    pub(crate) fn category(&self, id: NodeId) -> Option<Category> {
        self.tree.category(id)
    }

    /// Sets a feature inherited from a parent. Verbal features on a clause
    /// go to its verb phrase.
    pub(crate) fn inherit_feature(&mut self, child: NodeId, key: Feature, value: FeatureValue) {
        let is_clause = self.category(child) == Some(Category::Phrase(PhraseCategory::Clause));
        let target = if key.is_verbal() && is_clause {
            self.tree.verb_phrase_of_clause(child).unwrap_or(child)
        } else {
            child
        };
        self.tree.set_feature(target, key, value);
    }
}
