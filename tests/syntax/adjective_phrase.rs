//! Integration tests for adjective phrase realisation

use hanyu_foundation::{Feature, LexicalCategory};
use hanyu_tree::Tree;

use crate::realise;

#[test]
fn degree_adverb_before_adjective() {
    let mut tree = Tree::new();
    let tall = tree.adjective_phrase("高");
    let very = tree.adverb_phrase("很");
    tree.add_pre_modifier(tall, very).unwrap();
    assert_eq!(realise(&mut tree, tall), "很 高");
}

#[test]
fn prepositional_modifier_moves_before_adverbs() {
    let mut tree = Tree::new();
    let kind = tree.adjective_phrase("好");
    let very = tree.word("很", LexicalCategory::Adverb);
    let him = tree.noun_phrase("他");
    let to_him = tree.preposition_phrase("对", Some(him));
    tree.add_pre_modifier(kind, very).unwrap();
    tree.add_pre_modifier(kind, to_him).unwrap();
    assert_eq!(realise(&mut tree, kind), "对 他 很 好");
}

#[test]
fn already_ordered_modifiers_stay() {
    let mut tree = Tree::new();
    let kind = tree.adjective_phrase("好");
    let him = tree.noun_phrase("他");
    let to_him = tree.preposition_phrase("对", Some(him));
    let very = tree.adverb_phrase("很");
    tree.add_pre_modifier(kind, to_him).unwrap();
    tree.add_pre_modifier(kind, very).unwrap();
    assert_eq!(realise(&mut tree, kind), "对 他 很 好");
}

#[test]
fn adjective_phrase_inside_noun_phrase() {
    let mut tree = Tree::new();
    let man = tree.noun_phrase("男人");
    let lecherous = tree.adjective_phrase("好色");
    let very = tree.adverb_phrase("很");
    tree.add_pre_modifier(lecherous, very).unwrap();
    tree.add_pre_modifier(man, lecherous).unwrap();
    assert_eq!(realise(&mut tree, man), "很 好色 的 男人");
}

#[test]
fn elided_adjective_phrase() {
    let mut tree = Tree::new();
    let tall = tree.adjective_phrase("高");
    let very = tree.adverb_phrase("很");
    tree.add_pre_modifier(tall, very).unwrap();
    tree.set_feature(tall, Feature::Elided, true);
    assert_eq!(realise(&mut tree, tall), "");
}
