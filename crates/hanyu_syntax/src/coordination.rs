//! Coordination realisation.

use hanyu_foundation::{
    Category, DiscourseFunction, Feature, FeatureSet, LexicalCategory, NodeId, PhraseCategory,
};
use tracing::debug;

use crate::realiser::Realiser;

/// Features every coordinate takes from its coordination.
const INHERITED: [Feature; 11] = [
    Feature::Progressive,
    Feature::Perfect,
    Feature::Gender,
    Feature::Number,
    Feature::Tense,
    Feature::Person,
    Feature::Negated,
    Feature::Modal,
    Feature::DiscourseFunction,
    Feature::Form,
    Feature::ClauseStatus,
];

pub(crate) fn realise(r: &mut Realiser, id: NodeId) -> NodeId {
    let Some(coordination) = r.tree().coordination_node(id).cloned() else {
        return r.tree_mut().realized(Vec::new());
    };
    let features = coordination.features.clone();
    let children = coordination.children.clone();

    let mut items = Vec::new();
    for &modifier in &coordination.pre_modifiers {
        items.push(r.realise_as(modifier, DiscourseFunction::PreModifier));
    }

    if !children.is_empty() {
        if !coordination.specifiers.is_empty() {
            share_specifiers(r, &coordination.specifiers, &children);
        }
        if features.flag(Feature::RaiseSpecifier) || !coordination.specifiers.is_empty() {
            raise_specifiers(r, &children);
        }
        if let Some(&last) = children.last() {
            r.tree_mut().copy_feature(id, last, Feature::Possessive);
        }
    }

    for (index, &child) in children.iter().enumerate() {
        inherit(r, &features, child);
        if index > 0 {
            if features.flag(Feature::AggregateAuxiliary) {
                r.inherit_feature(child, Feature::RealiseAuxiliary, false.into());
            }
            if r.category(child) == Some(Category::Phrase(PhraseCategory::Clause)) {
                r.tree_mut()
                    .copy_feature(id, child, Feature::SuppressedComplementiser);
            }
            if !coordination.conjunction.is_empty() {
                items.push(r.closed_token(
                    &coordination.conjunction,
                    LexicalCategory::Conjunction,
                    Some(DiscourseFunction::Conjunction),
                ));
            }
        }
        items.push(r.realise(child));
    }

    for &modifier in &coordination.post_modifiers {
        items.push(r.realise_as(modifier, DiscourseFunction::PostModifier));
    }
    for &complement in &coordination.complements {
        items.push(r.realise_as(complement, DiscourseFunction::Complement));
    }

    r.tree_mut().realized(items)
}

fn inherit(r: &mut Realiser, features: &FeatureSet, child: NodeId) {
    for key in INHERITED {
        if let Some(value) = features.get(key) {
            r.inherit_feature(child, key, value.clone());
        }
    }
    if features.interrogative().is_some() {
        let target = r.tree().verb_phrase_of_clause(child).unwrap_or(child);
        r.tree_mut().set_feature(target, Feature::IgnoreModal, true);
    }
}

/// Gives each coordinate phrase the coordination's own specifiers.
fn share_specifiers(r: &mut Realiser, specifiers: &[NodeId], children: &[NodeId]) {
    for &child in children {
        if let Some(phrase) = r.tree_mut().phrase_mut(child) {
            for &specifier in specifiers {
                if !phrase.specifiers.contains(&specifier) {
                    phrase.specifiers.push(specifier);
                }
            }
        }
    }
}

/// The sorted base forms of a coordinate's specifiers.
fn specifier_forms(r: &Realiser, child: NodeId) -> Option<Vec<Option<String>>> {
    let phrase = r.tree().phrase(child)?;
    let mut forms: Vec<Option<String>> = phrase
        .specifiers
        .iter()
        .map(|s| r.tree().base_form(*s).map(str::to_string))
        .collect();
    forms.sort();
    Some(forms)
}

/// Realises a shared specifier set once, on the first coordinate.
///
/// Raising needs every coordinate to carry the same specifiers as the
/// first, and the first to have no classifier: "一 条 狗 和 一 个 女人"
/// keeps both.
fn raise_specifiers(r: &mut Realiser, children: &[NodeId]) {
    let Some((&first, rest)) = children.split_first() else {
        return;
    };
    let Some(expected) = specifier_forms(r, first).filter(|f| !f.is_empty()) else {
        return;
    };
    let has_classifier = r.tree().phrase(first).is_some_and(|p| {
        p.specifiers
            .iter()
            .any(|s| r.category(*s) == Some(Category::Lexical(LexicalCategory::Classifier)))
    });
    let all_match = !has_classifier
        && rest
            .iter()
            .all(|child| specifier_forms(r, *child).as_ref() == Some(&expected));
    debug!(coordinates = children.len(), all_match, "specifier raising");
    if all_match {
        for &child in rest {
            r.tree_mut().set_feature(child, Feature::Raised, true);
        }
    }
}
