//! Premodifier ordering by position bands.
//!
//! Each modifier gets a band range `[min, max]`. A bubble sort swaps
//! neighbours whenever the left one must come strictly after the right one
//! (`min(left) > max(right)`) and repeats until nothing moves. Every range
//! has `min <= max`, so "must follow" is a strict partial order: a swap
//! removes exactly one inverted pair and never creates another, and the
//! sort terminates after at most `n * (n - 1) / 2` swaps.

use hanyu_foundation::{Category, Feature, NodeId};
use hanyu_tree::Tree;

/// Band scheme to sort by.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Bands {
    /// Noun phrase premodifiers: localiser 1, verbal 2, associative
    /// adjective 3, plain adjective 4, non-predicate adjective 5, noun 6
    /// (3 when associative).
    NounPhrase,
    /// Adjective phrase premodifiers: prepositional 1, adverbial 2.
    AdjectivePhrase,
}

impl Bands {
    /// Lowest band the modifier may occupy.
    #[must_use]
    pub fn min_position(self, tree: &Tree, id: NodeId) -> u8 {
        let Some(category) = tree.category(id) else {
            return 1;
        };
        match self {
            Self::NounPhrase => {
                let associative = tree.flag(id, Feature::Associative);
                if category.is_verbal() {
                    2
                } else if category.is_adjectival() {
                    let no_de = tree.head_flag(id, Feature::NoLinkingParticle);
                    let non_predicate = tree.head_flag(id, Feature::NonPredicate);
                    if !no_de && !non_predicate {
                        3
                    } else if !non_predicate {
                        4
                    } else {
                        5
                    }
                } else if is_noun_or_plain_noun_phrase(tree, id, category) {
                    if associative { 3 } else { 6 }
                } else {
                    1
                }
            }
            Self::AdjectivePhrase => {
                if category.is_adverbial() {
                    2
                } else {
                    1
                }
            }
        }
    }

    /// Highest band the modifier may occupy.
    #[must_use]
    pub fn max_position(self, tree: &Tree, id: NodeId) -> u8 {
        let Some(category) = tree.category(id) else {
            return match self {
                Self::NounPhrase => 6,
                Self::AdjectivePhrase => 2,
            };
        };
        match self {
            Self::NounPhrase => {
                let associative = tree.flag(id, Feature::Associative);
                // Localiser phrases are associative too; their band wins.
                if category == Category::Phrase(hanyu_foundation::PhraseCategory::NounPhrase)
                    && tree.flag(id, Feature::Locative)
                {
                    1
                } else if category.is_adjectival() {
                    if tree.head_flag(id, Feature::NonPredicate) {
                        5
                    } else if tree.head_flag(id, Feature::NoLinkingParticle) || !associative {
                        4
                    } else {
                        3
                    }
                } else if category.is_verbal() {
                    2
                } else if category.is_nominal() && associative {
                    3
                } else {
                    6
                }
            }
            Self::AdjectivePhrase => {
                if category.is_prepositional() {
                    1
                } else {
                    2
                }
            }
        }
    }

    /// Returns true if `left` must follow `right`.
    #[must_use]
    pub fn must_swap(self, tree: &Tree, left: NodeId, right: NodeId) -> bool {
        self.min_position(tree, left) > self.max_position(tree, right)
    }
}

fn is_noun_or_plain_noun_phrase(tree: &Tree, id: NodeId, category: Category) -> bool {
    match category {
        Category::Lexical(hanyu_foundation::LexicalCategory::Noun) => true,
        Category::Phrase(hanyu_foundation::PhraseCategory::NounPhrase) => {
            !tree.flag(id, Feature::Locative)
        }
        _ => false,
    }
}

/// Sorts modifiers in place. Returns the number of swaps made.
pub fn sort_modifiers(tree: &Tree, modifiers: &mut [NodeId], bands: Bands) -> usize {
    let mut swaps = 0;
    loop {
        let mut changed = false;
        for i in 1..modifiers.len() {
            if bands.must_swap(tree, modifiers[i - 1], modifiers[i]) {
                modifiers.swap(i - 1, i);
                swaps += 1;
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
    swaps
}
