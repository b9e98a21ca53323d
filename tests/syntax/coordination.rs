//! Integration tests for coordination realisation

use hanyu_foundation::{Feature, LexicalCategory, NodeId, Number};
use hanyu_tree::Tree;

use crate::realise;

fn owned_by_laoshi(tree: &mut Tree, head: &str) -> NodeId {
    let np = tree.noun_phrase(head);
    let laoshi = tree.word("老师", LexicalCategory::Noun);
    tree.set_feature(laoshi, Feature::Possessive, true);
    tree.add_specifier(np, laoshi).unwrap();
    np
}

fn one_of(tree: &mut Tree, head: &str) -> NodeId {
    let np = tree.noun_phrase(head);
    for (base, category) in [
        ("一", LexicalCategory::Numeral),
        ("个", LexicalCategory::Classifier),
    ] {
        let word = tree.word(base, category);
        tree.add_specifier(np, word).unwrap();
    }
    np
}

// =============================================================================
// Conjunctions
// =============================================================================

#[test]
fn test_conjunction_between_every_pair() {
    let mut tree = Tree::new();
    let dog = tree.noun_phrase("狗");
    let cat = tree.noun_phrase("猫");
    let bird = tree.noun_phrase("鸟");
    let all = tree.coordination(&[dog, cat, bird]);
    assert_eq!(realise(&mut tree, all), "狗 和 猫 和 鸟");
}

#[test]
fn test_custom_conjunction() {
    let mut tree = Tree::new();
    let dog = tree.noun_phrase("狗");
    let cat = tree.noun_phrase("猫");
    let either = tree.coordination(&[dog, cat]);
    tree.set_conjunction(either, "或者").unwrap();
    assert_eq!(realise(&mut tree, either), "狗 或者 猫");
}

#[test]
fn test_empty_conjunction() {
    let mut tree = Tree::new();
    let dog = tree.noun_phrase("狗");
    let cat = tree.noun_phrase("猫");
    let both = tree.coordination(&[dog, cat]);
    tree.set_conjunction(both, "").unwrap();
    assert_eq!(realise(&mut tree, both), "狗 猫");
}

#[test]
fn test_single_child() {
    let mut tree = Tree::new();
    let dog = tree.noun_phrase("狗");
    let only = tree.coordination(&[dog]);
    assert_eq!(realise(&mut tree, only), "狗");
}

#[test]
fn test_added_child() {
    let mut tree = Tree::new();
    let dog = tree.noun_phrase("狗");
    let cat = tree.noun_phrase("猫");
    let both = tree.coordination(&[dog]);
    tree.add_child(both, cat).unwrap();
    assert_eq!(realise(&mut tree, both), "狗 和 猫");
}

// =============================================================================
// Feature Inheritance
// =============================================================================

#[test]
fn test_possessive_marks_only_the_last_child() {
    let mut tree = Tree::new();
    let dog = tree.noun_phrase("狗");
    let cat = tree.noun_phrase("猫");
    let both = tree.coordination(&[dog, cat]);
    tree.set_feature(both, Feature::Possessive, true);
    assert_eq!(realise(&mut tree, both), "狗 和 猫 的");
}

#[test]
fn test_number_reaches_every_child() {
    let mut tree = Tree::new();
    let children = tree.noun_phrase("孩子");
    let friends = tree.noun_phrase("朋友");
    let both = tree.coordination(&[children, friends]);
    tree.set_feature(both, Feature::Number, Number::Plural);
    assert_eq!(realise(&mut tree, both), "孩子们 和 朋友们");
}

#[test]
fn test_negation_reaches_every_verb_phrase() {
    let mut tree = Tree::new();
    let eat = tree.verb_phrase("吃");
    let drink = tree.verb_phrase("喝");
    let both = tree.coordination(&[eat, drink]);
    tree.set_feature(both, Feature::Negated, true);
    assert_eq!(realise(&mut tree, both), "不 吃 和 不 喝");
}

#[test]
fn test_aggregated_auxiliary_appears_once() {
    let mut tree = Tree::new();
    let eat = tree.verb_phrase("吃");
    let drink = tree.verb_phrase("喝");
    let both = tree.coordination(&[eat, drink]);
    tree.set_feature(both, Feature::AggregateAuxiliary, true);
    tree.set_feature(both, Feature::Modal, "会");
    assert_eq!(realise(&mut tree, both), "会 吃 和 喝");
}

#[test]
fn test_modal_without_aggregation_repeats() {
    let mut tree = Tree::new();
    let eat = tree.verb_phrase("吃");
    let drink = tree.verb_phrase("喝");
    let both = tree.coordination(&[eat, drink]);
    tree.set_feature(both, Feature::Modal, "会");
    assert_eq!(realise(&mut tree, both), "会 吃 和 会 喝");
}

// =============================================================================
// Specifier Raising
// =============================================================================

#[test]
fn test_matching_possessors_are_raised() {
    let mut tree = Tree::new();
    let dog = owned_by_laoshi(&mut tree, "狗");
    let cat = owned_by_laoshi(&mut tree, "猫");
    let both = tree.coordination(&[dog, cat]);
    tree.set_feature(both, Feature::RaiseSpecifier, true);
    assert_eq!(realise(&mut tree, both), "老师 的 狗 和 猫");
}

#[test]
fn test_coordination_specifier_is_shared_then_raised() {
    let mut tree = Tree::new();
    let dog = tree.noun_phrase("狗");
    let cat = tree.noun_phrase("猫");
    let both = tree.coordination(&[dog, cat]);
    let laoshi = tree.word("老师", LexicalCategory::Noun);
    tree.set_feature(laoshi, Feature::Possessive, true);
    tree.add_specifier(both, laoshi).unwrap();
    assert_eq!(realise(&mut tree, both), "老师 的 狗 和 猫");
}

#[test]
fn test_mismatched_specifiers_stay() {
    let mut tree = Tree::new();
    let dog = owned_by_laoshi(&mut tree, "狗");
    let cat = tree.noun_phrase("猫");
    let both = tree.coordination(&[dog, cat]);
    tree.set_feature(both, Feature::RaiseSpecifier, true);
    realise(&mut tree, both);
    assert!(!tree.flag(cat, Feature::Raised));
}

#[test]
fn test_classifier_blocks_raising() {
    let mut tree = Tree::new();
    let man = one_of(&mut tree, "男人");
    let woman = one_of(&mut tree, "女人");
    let both = tree.coordination(&[man, woman]);
    tree.set_feature(both, Feature::RaiseSpecifier, true);
    assert_eq!(realise(&mut tree, both), "一 个 男人 和 一 个 女人");
}
