//! Integration tests for noun phrase realisation

use hanyu_foundation::{DiscourseFunction, Feature, Gender, LexicalCategory, NodeId, Number};
use hanyu_tree::Tree;

use crate::realise;

fn with_specifiers(tree: &mut Tree, head: &str, specifiers: &[(&str, LexicalCategory)]) -> NodeId {
    let np = tree.noun_phrase(head);
    for (base, category) in specifiers {
        let word = tree.word(base, *category);
        tree.add_specifier(np, word).unwrap();
    }
    np
}

// =============================================================================
// Specifiers
// =============================================================================

#[test]
fn plural_pronoun_demonstrative_numeral_classifier() {
    let mut tree = Tree::new();
    let np = with_specifiers(
        &mut tree,
        "学生",
        &[
            ("个", LexicalCategory::Classifier),
            ("他", LexicalCategory::Pronoun),
            ("两", LexicalCategory::Numeral),
            ("那", LexicalCategory::Demonstrative),
        ],
    );
    tree.set_feature(np, Feature::Number, Number::Plural);
    assert_eq!(realise(&mut tree, np), "他们 那 两 个 学生");
}

#[test]
fn singular_pronoun_with_full_determiner() {
    let mut tree = Tree::new();
    let np = with_specifiers(
        &mut tree,
        "学生",
        &[
            ("他", LexicalCategory::Pronoun),
            ("那", LexicalCategory::Demonstrative),
            ("个", LexicalCategory::Classifier),
        ],
    );
    assert_eq!(realise(&mut tree, np), "他 那 个 学生");
}

#[test]
fn numeral_and_classifier() {
    let mut tree = Tree::new();
    let np = with_specifiers(
        &mut tree,
        "狗",
        &[("三", LexicalCategory::Numeral), ("条", LexicalCategory::Classifier)],
    );
    assert_eq!(realise(&mut tree, np), "三 条 狗");
}

#[test]
fn numeral_suppresses_the_plural_marker() {
    let mut tree = Tree::new();
    let np = with_specifiers(
        &mut tree,
        "朋友",
        &[("两", LexicalCategory::Numeral), ("个", LexicalCategory::Classifier)],
    );
    tree.set_feature(np, Feature::Number, Number::Plural);
    assert_eq!(realise(&mut tree, np), "两 个 朋友");
}

#[test]
fn covert_numeral_classifier_in_subject_position() {
    let mut tree = Tree::new();
    let np = with_specifiers(
        &mut tree,
        "狗",
        &[("一", LexicalCategory::Numeral), ("条", LexicalCategory::Classifier)],
    );
    tree.set_feature(np, Feature::DiscourseFunction, DiscourseFunction::Subject);
    assert_eq!(realise(&mut tree, np), "狗");
}

#[test]
fn possessive_noun_specifier_comes_last() {
    let mut tree = Tree::new();
    let np = tree.noun_phrase("书");
    let laoshi = tree.word("老师", LexicalCategory::Noun);
    tree.set_feature(laoshi, Feature::Possessive, true);
    tree.add_specifier(np, laoshi).unwrap();
    assert_eq!(realise(&mut tree, np), "老师 的 书");
}

#[test]
fn possessive_noun_phrase_leads() {
    let mut tree = Tree::new();
    let np = with_specifiers(
        &mut tree,
        "狗",
        &[("那", LexicalCategory::Demonstrative), ("条", LexicalCategory::Classifier)],
    );
    let owner = tree.noun_phrase("老师");
    tree.set_feature(owner, Feature::Possessive, true);
    tree.add_specifier(np, owner).unwrap();
    assert_eq!(realise(&mut tree, np), "老师 的 那 条 狗");
}

#[test]
fn shared_specifier_is_not_marked_by_realisation() {
    let mut tree = Tree::new();
    let he = tree.word("他", LexicalCategory::Pronoun);
    let np = tree.noun_phrase("学生");
    tree.add_specifier(np, he).unwrap();
    realise(&mut tree, np);
    assert!(!tree.flag(he, Feature::Elided));
}

// =============================================================================
// Modifiers
// =============================================================================

#[test]
fn associative_adjective_then_plain_noun() {
    let mut tree = Tree::new();
    let np = tree.noun_phrase("教育");
    let university = tree.word("大学", LexicalCategory::Noun);
    let stupid = tree.word("愚蠢", LexicalCategory::Adjective);
    tree.add_pre_modifier(np, university).unwrap();
    tree.add_pre_modifier(np, stupid).unwrap();
    assert_eq!(realise(&mut tree, np), "愚蠢 的 大学 教育");
}

#[test]
fn monosyllabic_adjective_has_no_particle() {
    let mut tree = Tree::new();
    let np = tree.noun_phrase("朋友");
    let good = tree.word("好", LexicalCategory::Adjective);
    tree.add_pre_modifier(np, good).unwrap();
    assert_eq!(realise(&mut tree, np), "好 朋友");
}

#[test]
fn non_predicate_adjective_is_not_associative() {
    let mut tree = Tree::new();
    let np = tree.noun_phrase("老师");
    let male = tree.word("男", LexicalCategory::Adjective);
    tree.add_pre_modifier(np, male).unwrap();
    assert_eq!(realise(&mut tree, np), "男 老师");
}

#[test]
fn long_localiser_is_pre_associative() {
    let mut tree = Tree::new();
    let room = tree.noun_phrase("房间");
    let inside = tree.word("里面", LexicalCategory::Noun);
    tree.add_post_modifier(room, inside).unwrap();
    assert!(tree.flag(room, Feature::Locative));
    assert_eq!(realise(&mut tree, room), "房间 的 里面");
}

#[test]
fn short_localiser_attaches_directly() {
    let mut tree = Tree::new();
    let room = tree.noun_phrase("房间");
    let inside = tree.word("里", LexicalCategory::Noun);
    tree.add_post_modifier(room, inside).unwrap();
    assert_eq!(realise(&mut tree, room), "房间 里");
}

#[test]
fn localiser_phrase_precedes_verbal_modifier() {
    let mut tree = Tree::new();
    let book = tree.noun_phrase("书");
    let buy = tree.word("买", LexicalCategory::Verb);
    let table = tree.noun_phrase("桌子");
    let on = tree.word("上", LexicalCategory::Noun);
    tree.add_complement(table, on).unwrap();
    tree.add_pre_modifier(book, buy).unwrap();
    tree.add_pre_modifier(book, table).unwrap();
    assert_eq!(realise(&mut tree, book), "桌子 上 的 买 的 书");
}

// =============================================================================
// Head and Pronominalisation
// =============================================================================

#[test]
fn plural_person_noun() {
    let mut tree = Tree::new();
    let np = tree.noun_phrase("孩子");
    tree.set_feature(np, Feature::Number, Number::Plural);
    assert_eq!(realise(&mut tree, np), "孩子们");
}

#[test]
fn possessive_phrase_marks_the_head() {
    let mut tree = Tree::new();
    let np = tree.noun_phrase("狗");
    tree.set_feature(np, Feature::Possessive, true);
    assert_eq!(realise(&mut tree, np), "狗 的");
}

#[test]
fn pronominal_phrase_by_gender() {
    for (gender, expected) in [
        (Gender::Masculine, "他"),
        (Gender::Feminine, "她"),
        (Gender::Neuter, "它"),
    ] {
        let mut tree = Tree::new();
        let np = tree.noun_phrase("人");
        tree.set_feature(np, Feature::Gender, gender);
        tree.set_feature(np, Feature::Pronominal, true);
        assert_eq!(realise(&mut tree, np), expected);
    }
}

#[test]
fn pronominal_plural_possessive() {
    let mut tree = Tree::new();
    let np = tree.noun_phrase("女人");
    tree.set_feature(np, Feature::Gender, Gender::Feminine);
    tree.set_feature(np, Feature::Number, Number::Plural);
    tree.set_feature(np, Feature::Possessive, true);
    tree.set_feature(np, Feature::Pronominal, true);
    assert_eq!(realise(&mut tree, np), "她们 的");
}

#[test]
fn elided_phrase_keeps_no_text() {
    let mut tree = Tree::new();
    let np = with_specifiers(&mut tree, "狗", &[("那", LexicalCategory::Demonstrative)]);
    tree.set_feature(np, Feature::Elided, true);
    assert_eq!(realise(&mut tree, np), "");
}
