//! Property tests over the public realiser.

use proptest::prelude::*;

use hanyu_foundation::{Feature, LexicalCategory, NodeId, Number, Tense};
use hanyu_syntax::Realiser;
use hanyu_tree::Tree;

use crate::{he_hits_ming, realise};

// =============================================================================
// Generators
// =============================================================================

const SPECIFIERS: [(&str, LexicalCategory); 4] = [
    ("他", LexicalCategory::Pronoun),
    ("这", LexicalCategory::Demonstrative),
    ("三", LexicalCategory::Numeral),
    ("本", LexicalCategory::Classifier),
];

const HEADS: [&str; 4] = ["书", "狗", "朋友", "学生"];

#[derive(Clone, Debug)]
struct NounCase {
    head: usize,
    specifiers: Vec<bool>,
    plural: bool,
}

fn noun_case() -> impl Strategy<Value = NounCase> {
    (
        0..HEADS.len(),
        prop::collection::vec(any::<bool>(), SPECIFIERS.len()),
        any::<bool>(),
    )
        .prop_map(|(head, specifiers, plural)| NounCase {
            head,
            specifiers,
            plural,
        })
}

fn build_noun(tree: &mut Tree, case: &NounCase) -> NodeId {
    let np = tree.noun_phrase(HEADS[case.head]);
    for (present, (base, category)) in case.specifiers.iter().zip(SPECIFIERS) {
        if *present {
            let word = tree.word(base, category);
            tree.add_specifier(np, word).unwrap();
        }
    }
    if case.plural {
        tree.set_feature(np, Feature::Number, Number::Plural);
    }
    np
}

#[derive(Copy, Clone, Debug)]
struct PassiveCase {
    negated: bool,
    modal: bool,
    future: bool,
}

fn passive_case() -> impl Strategy<Value = PassiveCase> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(negated, modal, future)| {
        PassiveCase {
            negated,
            modal,
            future,
        }
    })
}

// =============================================================================
// Noun Phrases
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The same construction always realises the same way.
    #[test]
    fn noun_phrase_realisation_is_deterministic(case in noun_case()) {
        let mut first = Tree::new();
        let a = build_noun(&mut first, &case);
        let mut second = Tree::new();
        let b = build_noun(&mut second, &case);
        prop_assert_eq!(realise(&mut first, a), realise(&mut second, b));
    }

    /// Realising a noun phrase twice gives the same tokens: realisation
    /// marks copies, never the phrase's own specifiers.
    #[test]
    fn noun_phrase_can_be_realised_again(case in noun_case()) {
        let mut tree = Tree::new();
        let np = build_noun(&mut tree, &case);
        let once = realise(&mut tree, np);
        prop_assert_eq!(realise(&mut tree, np), once);
    }

    /// Realised output is a fixed point of realisation.
    #[test]
    fn realised_noun_phrase_is_unchanged(case in noun_case()) {
        let mut tree = Tree::new();
        let np = build_noun(&mut tree, &case);
        let mut realiser = Realiser::new(&mut tree);
        let out = realiser.realise(np);
        prop_assert_eq!(realiser.realise(out), out);
    }

    /// The head noun always comes last.
    #[test]
    fn head_is_last(case in noun_case()) {
        let mut tree = Tree::new();
        let np = build_noun(&mut tree, &case);
        let text = realise(&mut tree, np);
        let last = text.rsplit(' ').next().unwrap_or_default();
        prop_assert!(last.starts_with(HEADS[case.head]), "{}", text);
    }
}

// =============================================================================
// Coordination
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// n coordinates take n - 1 conjunctions.
    #[test]
    fn conjunction_between_each_pair(heads in prop::collection::vec(0..HEADS.len(), 1..6)) {
        let mut tree = Tree::new();
        let children: Vec<NodeId> = heads.iter().map(|h| tree.noun_phrase(HEADS[*h])).collect();
        let all = tree.coordination(&children);
        let text = realise(&mut tree, all);
        let tokens: Vec<&str> = text.split(' ').collect();
        prop_assert_eq!(tokens.len(), 2 * heads.len() - 1);
        prop_assert_eq!(tokens.iter().filter(|t| **t == "和").count(), heads.len() - 1);
    }
}

// =============================================================================
// Passive Voice
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// One 被, after the fronted object and any modal or negation, and
    /// no object after the verb.
    #[test]
    fn passive_marker_is_placed_once(case in passive_case()) {
        let mut tree = Tree::new();
        let clause = he_hits_ming(&mut tree);
        tree.set_clause_feature(clause, Feature::Passive, true).unwrap();
        if case.negated {
            tree.set_clause_feature(clause, Feature::Negated, true).unwrap();
        }
        if case.modal {
            tree.set_clause_feature(clause, Feature::Modal, "会").unwrap();
        }
        if case.future {
            tree.set_clause_feature(clause, Feature::Tense, Tense::Future).unwrap();
        }
        let text = realise(&mut tree, clause);
        let tokens: Vec<&str> = text.split(' ').collect();

        prop_assert_eq!(tokens.iter().filter(|t| **t == "被").count(), 1, "{}", text);
        prop_assert_eq!(tokens.iter().filter(|t| **t == "小明").count(), 1, "{}", text);
        let marker = tokens.iter().position(|t| *t == "被").unwrap();
        prop_assert_eq!(tokens[0], "小明");
        for word in ["不", "会", "将"] {
            if let Some(at) = tokens.iter().position(|t| *t == word) {
                prop_assert!(at < marker, "{}", text);
            }
        }
        prop_assert_eq!(tokens.last().copied(), Some("打"));
    }
}
