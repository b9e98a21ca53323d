//! WH-question transformation.
//!
//! Mandarin questions keep declarative word order: the interrogative word
//! takes the place of the constituent it questions. The transform edits
//! the clause it is given before the clause realiser reads its subjects
//! and complements; the clause realiser hands it a fork, so the caller's
//! tree is never rewritten.

use hanyu_foundation::{
    Category, DiscourseFunction, Feature, InterrogativeType, LexicalCategory, NodeId,
    PhraseCategory, Result,
};
use tracing::{debug, warn};

use crate::realiser::Realiser;

/// What the clause realiser needs to know after a transform.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct WhOutcome {
    /// A verb token split off to be realised between the first verb
    /// constituent and the rest. Mandarin never splits its verbs, so this
    /// stays `None`; the clause realiser still honours it.
    pub split_verb: Option<NodeId>,
    /// The question ends in the yes/no particle.
    pub yes_no: bool,
}

/// Applies the transform for `kind` to `clause`, whose verb phrase is `vp`.
pub(crate) fn transform(
    r: &mut Realiser,
    clause: NodeId,
    vp: Option<NodeId>,
    kind: InterrogativeType,
) -> WhOutcome {
    let mut outcome = WhOutcome::default();
    let result = match kind {
        InterrogativeType::YesNo => {
            outcome.yes_no = true;
            Ok(())
        }
        InterrogativeType::Why
        | InterrogativeType::WhoSubject
        | InterrogativeType::WhatSubject
        | InterrogativeType::WhichSubject
        | InterrogativeType::WhereSubject
        | InterrogativeType::WhenSubject => {
            let wh = wh_word(r, kind);
            r.tree_mut().set_subject(clause, wh)
        }
        InterrogativeType::WhoObject
        | InterrogativeType::WhatObject
        | InterrogativeType::WhichObject
        | InterrogativeType::WhereObject
        | InterrogativeType::WhenObject => {
            let wh = wh_word(r, kind);
            r.tree_mut().set_object(clause, wh)
        }
        InterrogativeType::WhoIndirectObject => {
            let wh = wh_word(r, kind);
            r.tree_mut().set_indirect_object(clause, wh)
        }
        InterrogativeType::HowManySubject => {
            let subject = r.tree().phrase(clause).and_then(|p| p.subjects.first().copied());
            quantify(r, subject, kind)
        }
        InterrogativeType::HowManyObject => {
            let object = vp.and_then(|vp| first_object(r, vp));
            quantify(r, object, kind)
        }
        InterrogativeType::How => manner(r, vp, kind),
        InterrogativeType::HowPredicate => how_predicate(r, clause, vp, kind),
    };

    if let Err(error) = result {
        warn!(%clause, ?kind, %error, "interrogative transform skipped");
    } else {
        debug!(%clause, ?kind, "interrogative transform applied");
    }
    outcome
}

/// Adds the interrogative word for `kind` as a pronoun.
fn wh_word(r: &mut Realiser, kind: InterrogativeType) -> Option<NodeId> {
    kind.wh_word().map(|wh| r.closed_word(wh, LexicalCategory::Pronoun))
}

fn first_object(r: &Realiser, vp: NodeId) -> Option<NodeId> {
    r.tree()
        .phrase(vp)?
        .complements
        .iter()
        .copied()
        .find(|c| r.features(*c).function() == Some(DiscourseFunction::Object))
}

/// Puts 多少 in front of a noun phrase. Anything else is left alone.
fn quantify(r: &mut Realiser, target: Option<NodeId>, kind: InterrogativeType) -> Result<()> {
    let Some(target) = target else {
        return Ok(());
    };
    if r.category(target) != Some(Category::Phrase(PhraseCategory::NounPhrase)) {
        debug!(%target, "quantity question needs a noun phrase");
        return Ok(());
    }
    match wh_word(r, kind) {
        Some(how_many) => r.tree_mut().add_specifier(target, how_many),
        None => Ok(()),
    }
}

fn manner(r: &mut Realiser, vp: Option<NodeId>, kind: InterrogativeType) -> Result<()> {
    let (Some(vp), Some(how)) = (vp, wh_word(r, kind)) else {
        return Ok(());
    };
    r.tree_mut().add_pre_modifier(vp, how)
}

/// "How is X": the predicate itself is questioned, leaving 怎么 and the
/// completive particle.
fn how_predicate(
    r: &mut Realiser,
    clause: NodeId,
    vp: Option<NodeId>,
    kind: InterrogativeType,
) -> Result<()> {
    manner(r, vp, kind)?;
    let Some(vp) = vp else {
        return Ok(());
    };
    let completive = r.config().completive_particle.clone();
    r.tree_mut().expect_phrase_mut(vp)?.head = None;
    r.tree_mut().set_feature(vp, Feature::Particle, completive);
    r.tree_mut().set_object(clause, None)
}
