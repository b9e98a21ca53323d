//! Verb phrase realisation.

use hanyu_foundation::{DiscourseFunction, Feature, InterrogativeType, NodeId};

use crate::realiser::Realiser;
use crate::verb_group::{self, VerbGroupContext, Voice};

pub(crate) fn realise(r: &mut Realiser, id: NodeId) -> NodeId {
    let Some(phrase) = r.tree().phrase(id).cloned() else {
        return r.tree_mut().realized(Vec::new());
    };
    let ctx = VerbGroupContext::capture(r, id);
    let (auxiliary, main) = verb_group::build(r, id, &ctx).into_segments();

    let mut items = Vec::new();

    if phrase.features.explicit_flag(Feature::RealiseAuxiliary) != Some(false) {
        for element in auxiliary {
            items.push(r.realise_as(element, DiscourseFunction::Auxiliary));
        }
    }

    for &modifier in &phrase.pre_modifiers {
        items.push(r.realise_as(modifier, DiscourseFunction::PreModifier));
        if r.tree().flag(modifier, Feature::Associative)
            && !r.tree().flag(modifier, Feature::NoLinkingParticle)
        {
            let de = r.config().adverbial_particle.clone();
            items.push(r.particle(&de));
        }
    }

    for element in main {
        items.push(r.realise(element));
    }

    items.extend(complements(r, &phrase.complements, &ctx));

    for &modifier in &phrase.post_modifiers {
        // 得 introduces every complement of degree, monosyllables included.
        if r.tree().flag(modifier, Feature::PreAssociative) {
            let de = r.config().complement_particle.clone();
            items.push(r.particle(&de));
        }
        items.push(r.realise_as(modifier, DiscourseFunction::PostModifier));
    }

    r.tree_mut().realized(items)
}

/// Realises complements: indirect objects first, then direct objects and
/// the rest. Passive and ba clauses have already placed the logical
/// object, so only indirect objects stay, unless the object is the
/// questioned "what".
fn complements(r: &mut Realiser, complements: &[NodeId], ctx: &VerbGroupContext) -> Vec<NodeId> {
    let mut indirect = Vec::new();
    let mut direct = Vec::new();
    let mut other = Vec::new();
    for &complement in complements {
        let function = r.features(complement).function();
        let out = r.realise_as(complement, DiscourseFunction::Complement);
        match function {
            Some(DiscourseFunction::IndirectObject) => indirect.push(out),
            Some(DiscourseFunction::Object) => direct.push(out),
            _ => other.push(out),
        }
    }
    let keep_objects = ctx.voice == Voice::Active
        || ctx.interrogative == Some(InterrogativeType::WhatObject);
    if keep_objects {
        indirect.extend(direct);
        indirect.extend(other);
    }
    indirect
}
