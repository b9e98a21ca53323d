//! The node arena.

use hanyu_foundation::{
    Category, Error, Feature, FeatureSet, FeatureValue, LexicalCategory, NodeId, Result,
};

use crate::lexicon::Lexicon;
use crate::node::{Coordination, Literal, Node, Phrase, RealizedList};

/// An arena of syntax tree nodes.
///
/// Nodes are addressed by [`NodeId`] and never removed, so a node may be
/// referenced from several parents. Realisation appends its output nodes to
/// the same arena.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tree {
    nodes: Vec<Node>,
    #[cfg_attr(feature = "serde", serde(skip))]
    lexicon: Lexicon,
}

impl Tree {
    /// Creates an empty tree backed by the standard lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty tree backed by the given lexicon.
    #[must_use]
    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self {
            nodes: Vec::new(),
            lexicon,
        }
    }

    /// Returns the lexicon.
    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Returns the lexicon mutably.
    pub fn lexicon_mut(&mut self) -> &mut Lexicon {
        &mut self.lexicon
    }

    /// Adds a node and returns its handle.
    pub fn insert(&mut self, node: Node) -> NodeId {
        let index = u32::try_from(self.nodes.len()).unwrap_or(u32::MAX);
        self.nodes.push(node);
        NodeId::new(index)
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the arena holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns a node.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Returns a node mutably.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Returns a node, or an error for a foreign handle.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::UnknownNode`](hanyu_foundation::ErrorKind::UnknownNode)
    /// if `id` was not issued by this tree.
    pub fn node(&self, id: NodeId) -> Result<&Node> {
        self.get(id).ok_or_else(|| Error::unknown_node(id))
    }

    /// Checks that every node reachable from `root` exists and that no node
    /// reaches itself. Shared subtrees are allowed.
    ///
    /// # Errors
    ///
    /// Returns `UnknownNode` for a dangling handle and `InvalidArgument`
    /// naming the first node found on a cycle.
    pub fn validate(&self, root: NodeId) -> Result<()> {
        #[derive(Copy, Clone, PartialEq)]
        enum Mark {
            Unseen,
            Open,
            Done,
        }

        let cycle = |id: NodeId| Error::invalid_argument(format!("cycle through node {id}"));
        let mut marks = vec![Mark::Unseen; self.nodes.len()];
        let mut stack = vec![(root, false)];
        while let Some((id, leaving)) = stack.pop() {
            let node = self.node(id)?;
            let index = id.index();
            if leaving {
                marks[index] = Mark::Done;
                continue;
            }
            match marks[index] {
                Mark::Done => continue,
                Mark::Open => return Err(cycle(id)),
                Mark::Unseen => {}
            }
            marks[index] = Mark::Open;
            stack.push((id, true));
            for child in node.references() {
                match marks.get(child.index()) {
                    None => return Err(Error::unknown_node(child)),
                    Some(Mark::Open) => return Err(cycle(child)),
                    Some(Mark::Done) => {}
                    Some(Mark::Unseen) => stack.push((child, false)),
                }
            }
        }
        Ok(())
    }

    // =========================================================================
    // Categories
    // =========================================================================

    /// Returns a node's category. Inflected words report their word's category.
    #[must_use]
    pub fn category(&self, id: NodeId) -> Option<Category> {
        Some(match self.get(id)? {
            Node::Word(w) => Category::Lexical(w.category),
            Node::Inflected(i) => Category::Lexical(self.lexical_category(i.word)?),
            Node::Literal(_) => Category::Literal,
            Node::Phrase(p) => Category::Phrase(p.category),
            Node::Coordination(_) => Category::Coordination,
            Node::Realized(_) => Category::Realized,
        })
    }

    /// Returns the part of speech of a word-like node.
    #[must_use]
    pub fn lexical_category(&self, id: NodeId) -> Option<LexicalCategory> {
        match self.get(id)? {
            Node::Word(w) => Some(w.category),
            Node::Inflected(i) => self.lexical_category(i.word),
            Node::Literal(l) => l.category,
            _ => None,
        }
    }

    /// Returns true if the node has exactly this category.
    #[must_use]
    pub fn is(&self, id: NodeId, category: Category) -> bool {
        self.category(id) == Some(category)
    }

    /// Returns the base form of a word-like node, or a literal's text.
    #[must_use]
    pub fn base_form(&self, id: NodeId) -> Option<&str> {
        match self.get(id)? {
            Node::Word(w) => w.base_form.as_deref(),
            Node::Inflected(i) => self.base_form(i.word),
            Node::Literal(l) => Some(l.text.as_str()),
            _ => None,
        }
    }

    // =========================================================================
    // Features
    // =========================================================================

    /// Returns a node's features.
    #[must_use]
    pub fn features(&self, id: NodeId) -> Option<&FeatureSet> {
        self.get(id).map(Node::features)
    }

    /// Returns a node's features mutably.
    pub fn features_mut(&mut self, id: NodeId) -> Option<&mut FeatureSet> {
        self.get_mut(id).map(Node::features_mut)
    }

    /// Returns true if a boolean feature is set on the node.
    #[must_use]
    pub fn flag(&self, id: NodeId, key: Feature) -> bool {
        self.features(id).is_some_and(|f| f.flag(key))
    }

    /// Sets a feature. Unknown handles are ignored.
    pub fn set_feature(&mut self, id: NodeId, key: Feature, value: impl Into<FeatureValue>) {
        if let Some(features) = self.features_mut(id) {
            features.set(key, value);
        }
    }

    /// Removes a feature. Unknown handles are ignored.
    pub fn remove_feature(&mut self, id: NodeId, key: Feature) {
        if let Some(features) = self.features_mut(id) {
            features.remove(key);
        }
    }

    /// Copies a feature from one node to another, removing it from the
    /// target when the source lacks it.
    pub fn copy_feature(&mut self, from: NodeId, to: NodeId, key: Feature) {
        let value = self.features(from).and_then(|f| f.get(key)).cloned();
        if let Some(features) = self.features_mut(to) {
            features.set_opt(key, value);
        }
    }

    // =========================================================================
    // Typed views
    // =========================================================================

    /// Returns a phrase.
    #[must_use]
    pub fn phrase(&self, id: NodeId) -> Option<&Phrase> {
        match self.get(id)? {
            Node::Phrase(p) => Some(p),
            _ => None,
        }
    }

    /// Returns a phrase mutably.
    pub fn phrase_mut(&mut self, id: NodeId) -> Option<&mut Phrase> {
        match self.get_mut(id)? {
            Node::Phrase(p) => Some(p),
            _ => None,
        }
    }

    /// Returns a coordination.
    #[must_use]
    pub fn coordination_node(&self, id: NodeId) -> Option<&Coordination> {
        match self.get(id)? {
            Node::Coordination(c) => Some(c),
            _ => None,
        }
    }

    /// Returns a coordination mutably.
    pub fn coordination_mut(&mut self, id: NodeId) -> Option<&mut Coordination> {
        match self.get_mut(id)? {
            Node::Coordination(c) => Some(c),
            _ => None,
        }
    }

    /// Returns a phrase or an error naming what the node actually is.
    ///
    /// # Errors
    ///
    /// Fails for foreign handles and for nodes that are not phrases.
    pub fn expect_phrase_mut(&mut self, id: NodeId) -> Result<&mut Phrase> {
        let category = self.category(id).ok_or_else(|| Error::unknown_node(id))?;
        self.phrase_mut(id)
            .ok_or_else(|| Error::not_a_phrase(id, category))
    }

    /// Returns a coordination or an error naming what the node actually is.
    ///
    /// # Errors
    ///
    /// Fails for foreign handles and for nodes that are not coordinations.
    pub fn expect_coordination_mut(&mut self, id: NodeId) -> Result<&mut Coordination> {
        let category = self.category(id).ok_or_else(|| Error::unknown_node(id))?;
        self.coordination_mut(id)
            .ok_or_else(|| Error::not_a_coordination(id, category))
    }

    // =========================================================================
    // Output
    // =========================================================================

    /// Adds a realised token.
    pub fn token(
        &mut self,
        text: impl Into<String>,
        category: Option<LexicalCategory>,
        features: FeatureSet,
    ) -> NodeId {
        self.insert(Node::Literal(Literal {
            text: text.into(),
            category,
            features,
        }))
    }

    /// Adds a realised list.
    pub fn realized(&mut self, items: Vec<NodeId>) -> NodeId {
        self.insert(Node::Realized(RealizedList {
            items,
            features: FeatureSet::new(),
        }))
    }

    /// Flattens a realised subtree into its non-empty token texts.
    ///
    /// Unrealised nodes contribute nothing.
    #[must_use]
    pub fn tokens(&self, id: NodeId) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_tokens(id, &mut out);
        out
    }

    fn collect_tokens<'a>(&'a self, id: NodeId, out: &mut Vec<&'a str>) {
        match self.get(id) {
            Some(Node::Literal(l)) if !l.text.is_empty() => out.push(l.text.as_str()),
            Some(Node::Realized(r)) => {
                for item in &r.items {
                    self.collect_tokens(*item, out);
                }
            }
            _ => {}
        }
    }

    /// Flattens a realised subtree into its token nodes, empty ones included.
    #[must_use]
    pub fn leaves(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_leaves(id, &mut out);
        out
    }

    fn collect_leaves(&self, id: NodeId, out: &mut Vec<NodeId>) {
        match self.get(id) {
            Some(Node::Literal(_)) => out.push(id),
            Some(Node::Realized(r)) => {
                for item in &r.items {
                    self.collect_leaves(*item, out);
                }
            }
            _ => {}
        }
    }

    // =========================================================================
    // Forking
    // =========================================================================

    /// Deep-copies the subtree rooted at `id` and returns the copy.
    ///
    /// Node-valued features and the word behind an inflected word stay
    /// shared. Unknown handles are returned unchanged.
    pub fn fork(&mut self, id: NodeId) -> NodeId {
        let Some(mut node) = self.get(id).cloned() else {
            return id;
        };
        node.map_children(|child| self.fork(child));
        self.insert(node)
    }
}
