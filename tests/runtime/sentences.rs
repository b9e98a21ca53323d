//! Sentence aggregation tests

use hanyu_foundation::{Feature, InterrogativeType, LexicalCategory, Tense};
use hanyu_morphology::{DeterminerForms, DeterminerTable, MorphologyConfig};
use hanyu_runtime::{Sentence, realise_sentence, realise_sentence_with};
use hanyu_syntax::RealiserConfig;
use hanyu_tree::Tree;

fn he_hits_ming(tree: &mut Tree) -> hanyu_foundation::NodeId {
    let he = tree.noun_phrase("他");
    let hit = tree.verb_phrase("打");
    let ming = tree.noun_phrase("小明");
    tree.clause(Some(he), Some(hit), Some(ming)).unwrap()
}

// =============================================================================
// Punctuation
// =============================================================================

#[test]
fn declarative_ends_with_full_stop() {
    let mut tree = Tree::new();
    let clause = he_hits_ming(&mut tree);
    assert_eq!(realise_sentence(&mut tree, clause).text(), "他 打 小明。");
}

#[test]
fn every_question_ends_with_question_mark() {
    for (kind, expected) in [
        (InterrogativeType::YesNo, "他 打 小明 吗？"),
        (InterrogativeType::WhoObject, "他 打 谁？"),
        (InterrogativeType::How, "他 怎么 打 小明？"),
    ] {
        let mut tree = Tree::new();
        let clause = he_hits_ming(&mut tree);
        tree.set_clause_feature(clause, Feature::InterrogativeType, kind)
            .unwrap();
        let sentence = realise_sentence(&mut tree, clause);
        assert!(sentence.interrogative, "{kind:?}");
        assert_eq!(sentence.text(), expected);
    }
}

#[test]
fn question_flag_on_the_clause_itself() {
    let mut tree = Tree::new();
    let clause = he_hits_ming(&mut tree);
    tree.set_feature(clause, Feature::InterrogativeType, InterrogativeType::YesNo);
    assert!(realise_sentence(&mut tree, clause).interrogative);
}

#[test]
fn noun_phrase_sentence() {
    let mut tree = Tree::new();
    let dog = tree.noun_phrase("狗");
    let sentence = realise_sentence(&mut tree, dog);
    assert_eq!(sentence.tokens, vec!["狗"]);
    assert_eq!(sentence.to_string(), "狗。");
}

#[test]
fn empty_sentence() {
    let sentence = Sentence::default();
    assert_eq!(sentence.text(), "");
    assert_eq!(sentence.to_string(), "");
}

// =============================================================================
// Tokens
// =============================================================================

#[test]
fn elided_constituents_leave_no_tokens() {
    let mut tree = Tree::new();
    let clause = he_hits_ming(&mut tree);
    let dog = tree.noun_phrase("狗");
    tree.set_feature(dog, Feature::Elided, true);
    tree.add_front_modifier(clause, dog).unwrap();
    let sentence = realise_sentence(&mut tree, clause);
    assert!(sentence.tokens.iter().all(|t| !t.is_empty()));
    assert_eq!(sentence.tokens, vec!["他", "打", "小明"]);
}

#[test]
fn tokens_follow_realisation_order() {
    let mut tree = Tree::new();
    let clause = he_hits_ming(&mut tree);
    tree.set_clause_feature(clause, Feature::Tense, Tense::Future)
        .unwrap();
    tree.set_clause_feature(clause, Feature::Passive, true).unwrap();
    let sentence = realise_sentence(&mut tree, clause);
    assert_eq!(sentence.tokens, vec!["小明", "将", "被", "他", "打"]);
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn configured_markers_reach_the_sentence() {
    let mut tree = Tree::new();
    let clause = he_hits_ming(&mut tree);
    tree.set_clause_feature(clause, Feature::Negated, true).unwrap();
    tree.set_clause_feature(clause, Feature::Passive, true).unwrap();
    let mut config = RealiserConfig::default().with_negation_word("没");
    config.passive_marker = "叫".to_string();
    let sentence = realise_sentence_with(&mut tree, clause, &config);
    assert_eq!(sentence.text(), "小明 没 叫 他 打。");
}

#[test]
fn configured_determiner_allomorph() {
    let table = DeterminerTable::default()
        .with_entry(DeterminerForms::new("a", "some").with_vowel_allomorph("an"));
    let config = RealiserConfig::default()
        .with_morphology(MorphologyConfig::default().with_determiners(table));

    let mut tree = Tree::new();
    let np = tree.noun_phrase("apple");
    let a = tree.word("a", LexicalCategory::Demonstrative);
    let unit = tree.word("unit", LexicalCategory::Classifier);
    tree.add_specifier(np, a).unwrap();
    tree.add_specifier(np, unit).unwrap();
    let sentence = realise_sentence_with(&mut tree, np, &config);
    assert_eq!(sentence.tokens, vec!["an", "unit", "apple"]);
}

#[test]
fn allomorph_needs_a_vowel() {
    let table = DeterminerTable::default()
        .with_entry(DeterminerForms::new("a", "some").with_vowel_allomorph("an"));
    let config = RealiserConfig::default()
        .with_morphology(MorphologyConfig::default().with_determiners(table));

    let mut tree = Tree::new();
    let np = tree.noun_phrase("pear");
    let a = tree.word("a", LexicalCategory::Demonstrative);
    let piece = tree.word("piece", LexicalCategory::Classifier);
    tree.add_specifier(np, a).unwrap();
    tree.add_specifier(np, piece).unwrap();
    let sentence = realise_sentence_with(&mut tree, np, &config);
    assert_eq!(sentence.tokens, vec!["a", "piece", "pear"]);
}
