//! Document persistence tests

use hanyu_foundation::{ErrorKind, Feature, FeatureSet, InterrogativeType, NodeId};
use hanyu_runtime::{
    Document, from_bytes, load_from_file, realise_sentence, save_to_file, to_bytes,
};
use hanyu_tree::{InflectedWord, Node, Tree};

fn passive_question() -> Document {
    let mut tree = Tree::new();
    let ming = tree.noun_phrase("小明");
    let kiss = tree.verb_phrase("亲 了");
    let meili = tree.noun_phrase("王美丽");
    let clause = tree.clause(Some(ming), Some(kiss), Some(meili)).unwrap();
    tree.set_clause_feature(clause, Feature::Passive, true).unwrap();
    tree.set_clause_feature(
        clause,
        Feature::InterrogativeType,
        InterrogativeType::WhoSubject,
    )
    .unwrap();
    Document::new(tree, clause)
}

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("hanyu_{name}_{}.msgpack", std::process::id()))
}

#[test]
fn saved_document_realises_the_same() {
    let path = temp_path("saved_document");
    let mut document = passive_question();
    save_to_file(&document, &path).unwrap();
    let mut loaded = load_from_file(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    let expected = realise_sentence(&mut document.tree, document.root);
    let actual = realise_sentence(&mut loaded.tree, loaded.root);
    assert_eq!(actual.text(), "王美丽 被 谁 亲 了？");
    assert_eq!(actual, expected);
}

#[test]
fn features_survive_the_round_trip() {
    let document = passive_question();
    let loaded = from_bytes(&to_bytes(&document).unwrap()).unwrap();
    let vp = loaded.tree.verb_phrase_of_clause(loaded.root).unwrap();
    assert!(loaded.tree.flag(vp, Feature::Passive));
    assert_eq!(
        loaded.tree.features(vp).unwrap().text(Feature::Particle),
        Some("了")
    );
}

#[test]
fn realisation_before_saving_is_kept() {
    let mut document = passive_question();
    realise_sentence(&mut document.tree, document.root);
    let loaded = from_bytes(&to_bytes(&document).unwrap()).unwrap();
    assert_eq!(loaded.tree.len(), document.tree.len());
}

#[test]
fn overwriting_a_file() {
    let path = temp_path("overwrite");
    save_to_file(&passive_question(), &path).unwrap();

    let mut tree = Tree::new();
    let dog = tree.noun_phrase("狗");
    save_to_file(&Document::new(tree, dog), &path).unwrap();

    let mut loaded = load_from_file(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(realise_sentence(&mut loaded.tree, loaded.root).text(), "狗。");
}

#[test]
fn root_outside_the_tree_is_rejected() {
    let document = Document::new(Tree::new(), NodeId::new(0));
    assert!(document.validate().is_err());
    let err = from_bytes(&to_bytes(&document).unwrap()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownNode(_)));
}

#[test]
fn self_referencing_word_is_rejected() {
    let mut tree = Tree::new();
    let looped = tree.insert(Node::Inflected(InflectedWord {
        word: NodeId::new(0),
        features: FeatureSet::new(),
    }));
    let document = Document::new(tree, looped);
    let err = from_bytes(&to_bytes(&document).unwrap()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidArgument(_)));
}

#[test]
fn dangling_child_is_rejected() {
    let mut tree = Tree::new();
    let np = tree.noun_phrase("狗");
    tree.phrase_mut(np).unwrap().specifiers.push(NodeId::new(99));
    let document = Document::new(tree, np);
    let err = from_bytes(&to_bytes(&document).unwrap()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownNode(id) if id == NodeId::new(99)));
}

#[test]
fn corrupt_file_names_its_path() {
    let path = temp_path("corrupt");
    std::fs::write(&path, [0xc1u8, 0xc1, 0xc1]).unwrap();
    let err = load_from_file(&path).unwrap_err();
    let _ = std::fs::remove_file(&path);
    assert!(matches!(err.kind, ErrorKind::SerializationError(_)));
    let source = err.context.and_then(|c| c.source).unwrap_or_default();
    assert!(source.contains("hanyu_corrupt"), "{source}");
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_from_file(temp_path("never_written")).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::IoError(_)));
}
