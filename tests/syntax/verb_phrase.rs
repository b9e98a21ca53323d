//! Integration tests for verb phrase realisation

use hanyu_foundation::{DiscourseFunction, Feature, Form, LexicalCategory, Tense};
use hanyu_syntax::{Realiser, RealiserConfig};
use hanyu_tree::Tree;

use crate::realise;

// =============================================================================
// Verb Group
// =============================================================================

#[test]
fn bare_verb() {
    let mut tree = Tree::new();
    let vp = tree.verb_phrase("走");
    assert_eq!(realise(&mut tree, vp), "走");
}

#[test]
fn verb_particle_follows_the_verb() {
    let mut tree = Tree::new();
    let vp = tree.verb_phrase("打 了");
    assert_eq!(realise(&mut tree, vp), "打 了");
}

#[test]
fn future_takes_the_future_modal() {
    let mut tree = Tree::new();
    let vp = tree.verb_phrase("走");
    tree.set_feature(vp, Feature::Tense, Tense::Future);
    assert_eq!(realise(&mut tree, vp), "将 走");
}

#[test]
fn explicit_modal_overrides_the_future_modal() {
    let mut tree = Tree::new();
    let vp = tree.verb_phrase("走");
    tree.set_feature(vp, Feature::Tense, Tense::Future);
    tree.set_feature(vp, Feature::Modal, "会");
    assert_eq!(realise(&mut tree, vp), "会 走");
}

#[test]
fn perfect_fronts_the_auxiliary() {
    let mut tree = Tree::new();
    let vp = tree.verb_phrase("走");
    tree.set_feature(vp, Feature::Perfect, true);
    assert_eq!(realise(&mut tree, vp), "已经 走");
}

#[test]
fn negation_precedes_the_verb() {
    let mut tree = Tree::new();
    let vp = tree.verb_phrase("走");
    tree.set_feature(vp, Feature::Negated, true);
    assert_eq!(realise(&mut tree, vp), "不 走");
}

#[test]
fn negation_word_override() {
    let mut tree = Tree::new();
    let vp = tree.verb_phrase("走");
    tree.set_feature(vp, Feature::Negated, true);
    tree.set_feature(vp, Feature::NegationWord, "没");
    assert_eq!(realise(&mut tree, vp), "没 走");
}

#[test]
fn modal_precedes_negation() {
    let mut tree = Tree::new();
    let vp = tree.verb_phrase("走");
    tree.set_feature(vp, Feature::Negated, true);
    tree.set_feature(vp, Feature::Modal, "会");
    assert_eq!(realise(&mut tree, vp), "会 不 走");
}

#[test]
fn ignored_modal_is_dropped() {
    let mut tree = Tree::new();
    let vp = tree.verb_phrase("走");
    tree.set_feature(vp, Feature::Modal, "会");
    tree.set_feature(vp, Feature::IgnoreModal, true);
    assert_eq!(realise(&mut tree, vp), "走");
}

#[test]
fn infinitive_resolves_no_modal() {
    let mut tree = Tree::new();
    let vp = tree.verb_phrase("走");
    tree.set_feature(vp, Feature::Tense, Tense::Future);
    tree.set_feature(vp, Feature::Form, Form::Infinitive);
    assert_eq!(realise(&mut tree, vp), "走");
}

#[test]
fn passive_defers_negation_to_the_clause() {
    let mut tree = Tree::new();
    let vp = tree.verb_phrase("打");
    tree.set_feature(vp, Feature::Passive, true);
    tree.set_feature(vp, Feature::Negated, true);
    assert_eq!(realise(&mut tree, vp), "打");
    assert_eq!(
        tree.features(vp).unwrap().text(Feature::NegationWord),
        Some("不")
    );
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn configured_negation_word() {
    let mut tree = Tree::new();
    let vp = tree.verb_phrase("走");
    tree.set_feature(vp, Feature::Negated, true);
    let config = RealiserConfig::default().with_negation_word("没");
    let out = Realiser::new(&mut tree).with_config(config).realise(vp);
    assert_eq!(tree.tokens(out), vec!["没", "走"]);
}

#[test]
fn no_future_modal_configured() {
    let mut tree = Tree::new();
    let vp = tree.verb_phrase("走");
    tree.set_feature(vp, Feature::Tense, Tense::Future);
    let config = RealiserConfig::default().with_future_modal(None);
    let out = Realiser::new(&mut tree).with_config(config).realise(vp);
    assert_eq!(tree.tokens(out), vec!["走"]);
}

// =============================================================================
// Modifiers and Complements
// =============================================================================

#[test]
fn adverbial_particle_after_associative_adjective() {
    let mut tree = Tree::new();
    let vp = tree.verb_phrase("跑");
    let happy = tree.word("高兴", LexicalCategory::Adjective);
    tree.add_pre_modifier(vp, happy).unwrap();
    assert_eq!(realise(&mut tree, vp), "高兴 地 跑");
}

#[test]
fn bare_monosyllabic_adjective_phrase_takes_no_particle() {
    let mut tree = Tree::new();
    let vp = tree.verb_phrase("跑");
    let fast = tree.adjective_phrase("快");
    tree.add_pre_modifier(vp, fast).unwrap();
    assert_eq!(realise(&mut tree, vp), "快 跑");
}

#[test]
fn modified_adjective_phrase_takes_the_particle() {
    let mut tree = Tree::new();
    let vp = tree.verb_phrase("跑");
    let fast = tree.adjective_phrase("快");
    let very = tree.adverb_phrase("很");
    tree.add_pre_modifier(fast, very).unwrap();
    tree.add_pre_modifier(vp, fast).unwrap();
    assert_eq!(realise(&mut tree, vp), "很 快 地 跑");
}

#[test]
fn complement_of_degree() {
    let mut tree = Tree::new();
    let vp = tree.verb_phrase("跑");
    let fast = tree.adjective_phrase("快");
    let very = tree.adverb_phrase("特别");
    tree.add_pre_modifier(fast, very).unwrap();
    tree.add_post_modifier(vp, fast).unwrap();
    assert_eq!(realise(&mut tree, vp), "跑 得 特别 快");
}

#[test]
fn indirect_object_before_direct_object() {
    let mut tree = Tree::new();
    let vp = tree.verb_phrase("给");
    let book = tree.noun_phrase("书");
    let laoshi = tree.noun_phrase("老师");
    tree.add_complement(vp, book).unwrap();
    tree.set_feature(
        laoshi,
        Feature::DiscourseFunction,
        DiscourseFunction::IndirectObject,
    );
    tree.add_complement(vp, laoshi).unwrap();
    assert_eq!(realise(&mut tree, vp), "给 老师 书");
}

#[test]
fn ba_keeps_only_the_indirect_object() {
    let mut tree = Tree::new();
    let vp = tree.verb_phrase("给");
    let book = tree.noun_phrase("书");
    let laoshi = tree.noun_phrase("老师");
    tree.add_complement(vp, book).unwrap();
    tree.set_feature(
        laoshi,
        Feature::DiscourseFunction,
        DiscourseFunction::IndirectObject,
    );
    tree.add_complement(vp, laoshi).unwrap();
    tree.set_feature(vp, Feature::Ba, true);
    assert_eq!(realise(&mut tree, vp), "给 老师");
}
