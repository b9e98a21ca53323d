//! Noun phrase realisation.
//!
//! Order: specifiers, premodifiers (band-sorted, associative ones followed
//! by 的), head, complements and postmodifiers (pre-associative ones
//! preceded by 的).

use hanyu_foundation::{
    DiscourseFunction, Feature, FeatureSet, Gender, LexicalCategory, NodeId, Number, Person,
};
use hanyu_tree::Node;

use crate::ordering::{Bands, sort_modifiers};
use crate::realiser::Realiser;
use crate::specifiers;

/// Features a noun phrase hands down to its head.
const HEAD_AGREEMENT: [Feature; 7] = [
    Feature::Elided,
    Feature::Gender,
    Feature::Acronym,
    Feature::Number,
    Feature::Person,
    Feature::Possessive,
    Feature::Passive,
];

pub(crate) fn realise(r: &mut Realiser, id: NodeId) -> NodeId {
    let features = r.features(id);
    if features.flag(Feature::Elided) {
        return r.tree_mut().realized(Vec::new());
    }
    if features.flag(Feature::Pronominal) {
        let pronoun = pronoun(r, &features);
        let out = r.realise(pronoun);
        return r.tree_mut().realized(vec![out]);
    }
    let Some(phrase) = r.tree().phrase(id).cloned() else {
        return r.tree_mut().realized(Vec::new());
    };

    let mut items = Vec::new();

    let mut suppress_plural_marker = false;
    if !features.flag(Feature::Raised) && !phrase.specifiers.is_empty() {
        let order = specifiers::order(r.tree_mut(), id, &phrase.specifiers);
        suppress_plural_marker = order.suppress_plural_marker;
        for specifier in order.ordered {
            items.push(r.realise_as(specifier, DiscourseFunction::Specifier));
        }
    }

    let mut pre_modifiers = phrase.pre_modifiers.clone();
    sort_modifiers(r.tree(), &mut pre_modifiers, Bands::NounPhrase);
    for modifier in pre_modifiers {
        items.push(r.realise_as(modifier, DiscourseFunction::PreModifier));
        if r.tree().flag(modifier, Feature::Associative)
            && !r.tree().flag(modifier, Feature::NoLinkingParticle)
        {
            let de = r.config().attributive_particle.clone();
            items.push(r.particle(&de));
        }
    }

    if let Some(head) = phrase.head {
        let head = agreeing_head(r, id, head, suppress_plural_marker);
        items.push(r.realise_as(head, DiscourseFunction::Head));
    }

    for (list, function) in [
        (&phrase.complements, DiscourseFunction::Complement),
        (&phrase.post_modifiers, DiscourseFunction::PostModifier),
    ] {
        for &element in list {
            if r.tree().flag(element, Feature::PreAssociative)
                && !r.tree().flag(element, Feature::NoLinkingParticle)
            {
                let de = r.config().attributive_particle.clone();
                items.push(r.particle(&de));
            }
            items.push(r.realise_as(element, function));
        }
    }

    r.tree_mut().realized(items)
}

/// Returns the head to realise, carrying the phrase's agreement.
///
/// A word head is wrapped in a fresh inflected use so the shared word is
/// not marked; other heads take the features directly.
fn agreeing_head(
    r: &mut Realiser,
    np: NodeId,
    head: NodeId,
    suppress_plural_marker: bool,
) -> NodeId {
    let target = match r.tree().get(head) {
        Some(Node::Word(_)) => r.tree_mut().inflected(head),
        _ => head,
    };
    for key in HEAD_AGREEMENT {
        r.tree_mut().copy_feature(np, target, key);
    }
    if suppress_plural_marker {
        r.tree_mut().set_feature(target, Feature::PluralMarker, false);
    }
    target
}

/// Synthesises the personal pronoun standing for a pronominal phrase.
fn pronoun(r: &mut Realiser, phrase: &FeatureSet) -> NodeId {
    let mut mixed = false;
    let base = match phrase.person() {
        Some(Person::First) => "我",
        Some(Person::Second) => "你",
        _ => match phrase.gender() {
            Some(Gender::Feminine) => "她",
            Some(Gender::Masculine) => "他",
            Some(Gender::Mixed) => {
                mixed = true;
                "他们"
            }
            _ => "它",
        },
    };
    let word = r.closed_word(base, LexicalCategory::Pronoun);
    let pronoun = r.tree_mut().inflected(word);
    let tree = r.tree_mut();
    if let Some(features) = tree.features_mut(pronoun) {
        features.copy_from(phrase, Feature::Possessive);
        if mixed {
            // Mixed company only has a plural form.
            features.set(Feature::Gender, Gender::Mixed);
            features.set(Feature::Number, Number::Plural);
        } else if phrase.has(Feature::Number) {
            features.copy_from(phrase, Feature::Number);
        }
        features.set(
            Feature::DiscourseFunction,
            phrase.function().unwrap_or(DiscourseFunction::Specifier),
        );
    }
    pronoun
}
