//! Realisation of adverb, prepositional and canned-text phrases.

use hanyu_foundation::{DiscourseFunction, NodeId};

use crate::realiser::Realiser;

pub(crate) fn realise(r: &mut Realiser, id: NodeId) -> NodeId {
    let Some(phrase) = r.tree().phrase(id).cloned() else {
        return r.tree_mut().realized(Vec::new());
    };
    let mut items = Vec::new();
    for &modifier in &phrase.pre_modifiers {
        items.push(r.realise_as(modifier, DiscourseFunction::PreModifier));
    }
    if let Some(head) = phrase.head {
        items.push(r.realise_as(head, DiscourseFunction::Head));
    }
    for &complement in &phrase.complements {
        items.push(r.realise_as(complement, DiscourseFunction::Complement));
    }
    for &modifier in &phrase.post_modifiers {
        items.push(r.realise_as(modifier, DiscourseFunction::PostModifier));
    }
    r.tree_mut().realized(items)
}
