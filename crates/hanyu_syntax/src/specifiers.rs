//! Noun phrase specifier ordering.
//!
//! Specifiers are keyed by category (the last one of each category wins)
//! and emitted by a priority cascade. Any specifier the cascade leaves
//! behind is elided and appended, so nothing is silently dropped.

use std::collections::{BTreeMap, BTreeSet};

use hanyu_foundation::{
    Category, DiscourseFunction, Feature, FeatureValue, LexicalCategory, NodeId, Number,
    PhraseCategory,
};
use hanyu_tree::Tree;
use tracing::warn;

/// Pronoun that questions a quantity and always leads.
const HOW_MANY: &str = "多少";

/// The category slot a specifier occupies.
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub(crate) enum SpecifierSlot {
    NounPhrase,
    Pronoun,
    Demonstrative,
    Numeral,
    Classifier,
    Noun,
    Other(Category),
}

impl SpecifierSlot {
    fn of(category: Category) -> Self {
        match category {
            Category::Phrase(PhraseCategory::NounPhrase) => Self::NounPhrase,
            Category::Lexical(LexicalCategory::Pronoun) => Self::Pronoun,
            Category::Lexical(LexicalCategory::Demonstrative) => Self::Demonstrative,
            Category::Lexical(LexicalCategory::Numeral) => Self::Numeral,
            Category::Lexical(LexicalCategory::Classifier) => Self::Classifier,
            Category::Lexical(LexicalCategory::Noun) => Self::Noun,
            other => Self::Other(other),
        }
    }
}

/// The ordered specifiers of one noun phrase.
#[derive(Debug, Default)]
pub(crate) struct SpecifierOrder {
    /// Specifiers to realise, in order. Entries may be forks of the
    /// original specifiers carrying elision or plural marking.
    pub ordered: Vec<NodeId>,
    /// A numeral was emitted, so the head noun drops its plural marker.
    pub suppress_plural_marker: bool,
}

struct Cascade<'a> {
    tree: &'a mut Tree,
    slots: BTreeMap<SpecifierSlot, NodeId>,
    proper_name: Option<NodeId>,
    consumed: BTreeSet<NodeId>,
    order: SpecifierOrder,
}

impl Cascade<'_> {
    fn has(&self, slot: SpecifierSlot) -> bool {
        self.slots.contains_key(&slot)
    }

    fn get(&self, slot: SpecifierSlot) -> Option<NodeId> {
        self.slots.get(&slot).copied()
    }

    fn emit(&mut self, id: NodeId) {
        self.consumed.insert(id);
        self.order.ordered.push(id);
    }

    fn emit_slot(&mut self, slot: SpecifierSlot) {
        if let Some(id) = self.get(slot) {
            self.emit(id);
        }
    }

    /// Emits a copy of `id` with one feature changed, leaving the shared
    /// original untouched.
    fn emit_marked(&mut self, id: NodeId, key: Feature, value: impl Into<FeatureValue>) {
        let copy = self.tree.fork(id);
        self.tree.set_feature(copy, key, value);
        self.consumed.insert(id);
        self.order.ordered.push(copy);
    }

    fn possessive(&self, slot: SpecifierSlot) -> Option<NodeId> {
        self.get(slot).filter(|id| self.tree.flag(*id, Feature::Possessive))
    }
}

/// Orders the specifiers of noun phrase `np`.
pub(crate) fn order(tree: &mut Tree, np: NodeId, specifiers: &[NodeId]) -> SpecifierOrder {
    use SpecifierSlot::{Classifier, Demonstrative, Noun, NounPhrase, Numeral, Pronoun};

    let features = tree.features(np).cloned().unwrap_or_default();
    let plural = features.is_plural();
    let fronted = features.function() == Some(DiscourseFunction::Subject)
        || features.flag(Feature::Topic);

    let mut slots = BTreeMap::new();
    let mut proper_name = None;
    for &specifier in specifiers {
        if tree.flag(specifier, Feature::Proper) {
            proper_name = Some(specifier);
        } else if let Some(category) = tree.category(specifier) {
            slots.insert(SpecifierSlot::of(category), specifier);
        }
    }

    let mut c = Cascade {
        tree,
        slots,
        proper_name,
        consumed: BTreeSet::new(),
        order: SpecifierOrder::default(),
    };

    let how_many = c
        .get(Pronoun)
        .filter(|id| c.tree.base_form(*id) == Some(HOW_MANY));
    let full_determiner = (c.has(Pronoun) || c.has(Demonstrative))
        && (c.has(Numeral) || c.has(Demonstrative))
        && c.has(Classifier);

    if let Some(possessor) = c.possessive(NounPhrase) {
        c.emit(possessor);
    } else if let Some(how_many) = how_many {
        c.emit(how_many);
        c.slots.remove(&Pronoun);
    } else if full_determiner {
        if c.has(NounPhrase) {
            c.emit_slot(NounPhrase);
        } else if let Some(name) = c.proper_name {
            if plural {
                c.emit_marked(name, Feature::Number, Number::Plural);
            } else {
                c.emit(name);
            }
        }
    } else if let Some(name) = c.proper_name {
        // Kept as an elided placeholder so agreement can still see it.
        c.emit_marked(name, Feature::Elided, true);
    }

    if plural && c.has(Pronoun) {
        if let Some(pronoun) = c.get(Pronoun) {
            c.emit_marked(pronoun, Feature::Number, Number::Plural);
        }
    } else if c.has(Classifier) && c.has(Pronoun) && (c.has(Demonstrative) || c.has(Numeral)) {
        c.emit_slot(Pronoun);
    }

    if c.has(Classifier) && c.has(Demonstrative) {
        c.emit_slot(Demonstrative);
    }

    if c.order.ordered.is_empty() && fronted {
        // A bare "numeral classifier" in subject or topic position is covert.
        for slot in [Classifier, Numeral] {
            if let Some(id) = c.get(slot) {
                c.emit_marked(id, Feature::Elided, true);
            }
        }
    } else if (c.has(Demonstrative) || c.has(Numeral)) && c.has(Classifier) {
        if c.has(Numeral) {
            c.emit_slot(Numeral);
            c.order.suppress_plural_marker = true;
        }
        c.emit_slot(Classifier);
    }

    if let Some(possessor) = c.possessive(Noun) {
        c.emit(possessor);
    }

    let leftovers: Vec<(SpecifierSlot, NodeId)> = c
        .slots
        .iter()
        .filter(|(_, id)| !c.consumed.contains(id))
        .map(|(slot, id)| (*slot, *id))
        .collect();
    for (slot, id) in leftovers {
        warn!(%np, specifier = %id, ?slot, "unordered specifier elided");
        c.emit_marked(id, Feature::Elided, true);
    }

    c.order
}
