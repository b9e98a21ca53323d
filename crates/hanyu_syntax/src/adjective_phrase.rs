//! Adjective phrase realisation.

use hanyu_foundation::{DiscourseFunction, Feature, NodeId};
use hanyu_tree::Node;

use crate::ordering::{Bands, sort_modifiers};
use crate::realiser::Realiser;

pub(crate) fn realise(r: &mut Realiser, id: NodeId) -> NodeId {
    if r.tree().flag(id, Feature::Elided) {
        return r.tree_mut().realized(Vec::new());
    }
    let Some(phrase) = r.tree().phrase(id).cloned() else {
        return r.tree_mut().realized(Vec::new());
    };

    let mut items = Vec::new();
    let mut pre_modifiers = phrase.pre_modifiers.clone();
    sort_modifiers(r.tree(), &mut pre_modifiers, Bands::AdjectivePhrase);
    for modifier in pre_modifiers {
        items.push(r.realise_as(modifier, DiscourseFunction::PreModifier));
    }

    if let Some(head) = phrase.head {
        let head = match r.tree().get(head) {
            Some(Node::Word(_)) => r.tree_mut().inflected(head),
            _ => head,
        };
        r.tree_mut().copy_feature(id, head, Feature::Elided);
        items.push(r.realise_as(head, DiscourseFunction::Head));
    }

    r.tree_mut().realized(items)
}
