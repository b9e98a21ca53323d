//! Clause realisation.
//!
//! A clause goes through a fixed sequence of stages. The first stages edit
//! the tree: subject agreement onto the verb phrase, form adjustment by
//! discourse function, and infinitive front-modifier movement. A
//! [`ClauseContext`] is then captured once, and the emitting stages read
//! only from it and from the (possibly WH-transformed) clause structure.

use hanyu_foundation::{
    Category, ClauseStatus, DiscourseFunction, Feature, FeatureSet, FeatureValue, Form,
    InterrogativeType, LexicalCategory, NodeId, Number, Person, PhraseCategory,
};
use hanyu_tree::{Node, Phrase};
use tracing::debug;

use crate::interrogative::{self, WhOutcome};
use crate::realiser::Realiser;
use crate::verb_group::{ModalResolution, Voice, resolve_modal};

/// Everything emission reads about a clause, captured after the editing
/// stages have run.
#[derive(Clone, Debug)]
struct ClauseContext {
    form: Option<Form>,
    voice: Voice,
    interrogative: Option<InterrogativeType>,
    negated: bool,
    ignore_modal: bool,
    modal: ModalResolution,
    subordinate: bool,
    suppressed_complementiser: bool,
    suppress_genitive: bool,
    particle: Option<FeatureValue>,
    complementiser: Option<FeatureValue>,
    cue_phrase: Option<FeatureValue>,
}

impl ClauseContext {
    /// Reads the clause's own features overlaid by its verb phrase's.
    /// Particles, complementisers and cue phrases belong to the clause
    /// alone.
    fn capture(r: &Realiser, clause: NodeId, vp: Option<NodeId>) -> Self {
        let own = r.features(clause);
        let merged = merged_features(r, clause, vp);
        let head_is_coordination = vp.is_some_and(|vp| {
            r.category(vp) == Some(Category::Coordination)
                || r.tree()
                    .phrase(vp)
                    .and_then(|p| p.head)
                    .is_some_and(|h| r.category(h) == Some(Category::Coordination))
        });
        Self {
            form: merged.form(),
            voice: Voice::of(&merged),
            interrogative: merged.interrogative(),
            negated: merged.flag(Feature::Negated),
            ignore_modal: merged.flag(Feature::IgnoreModal),
            modal: resolve_modal(r.config(), &merged, head_is_coordination),
            subordinate: own.clause_status() == Some(ClauseStatus::Subordinate),
            suppressed_complementiser: own.flag(Feature::SuppressedComplementiser),
            suppress_genitive: merged.flag(Feature::SuppressGenitiveInGerund),
            particle: own.get(Feature::Particle).cloned(),
            complementiser: own.get(Feature::Complementiser).cloned(),
            cue_phrase: own.get(Feature::CuePhrase).cloned(),
        }
    }

    fn is_gerund(&self) -> bool {
        self.form == Some(Form::Gerund)
    }

    fn is_what_object(&self) -> bool {
        self.interrogative == Some(InterrogativeType::WhatObject)
    }
}

fn merged_features(r: &Realiser, clause: NodeId, vp: Option<NodeId>) -> FeatureSet {
    let mut merged = r.features(clause);
    if let Some(vp) = vp {
        merged.merge(&r.features(vp));
    }
    merged
}

pub(crate) fn realise(r: &mut Realiser, id: NodeId) -> NodeId {
    let Some(vp) = r.tree().phrase(id).map(|p| p.verb_phrase.or(p.head)) else {
        return r.tree_mut().realized(Vec::new());
    };

    // Questions rewrite their constituents, so they realise a copy.
    let id = if merged_features(r, id, vp).interrogative().is_some() {
        let copy = r.tree_mut().fork(id);
        debug!(clause = %id, %copy, "question realised from a fork");
        copy
    } else {
        id
    };
    let Some(phrase) = r.tree().phrase(id).cloned() else {
        return r.tree_mut().realized(Vec::new());
    };
    let vp = phrase.verb_phrase.or(phrase.head);

    if let Some(vp) = vp {
        agree_with_subjects(r, &phrase.subjects, vp);
        copy_post_modifiers(r, &phrase.post_modifiers, vp);
    }
    adjust_form(r, id, &phrase);
    if merged_features(r, id, vp).form() == Some(Form::Infinitive) {
        move_front_modifiers(r, id, vp);
    }

    let ctx = ClauseContext::capture(r, id, vp);
    debug!(
        clause = %id,
        form = ?ctx.form,
        voice = ?ctx.voice,
        interrogative = ?ctx.interrogative,
        negated = ctx.negated,
        "clause context captured"
    );

    let mut items = Vec::new();
    emit_complementiser(r, &ctx, &mut items);

    let outcome = match ctx.interrogative {
        Some(kind) => interrogative::transform(r, id, vp, kind),
        None => {
            let front: Vec<NodeId> = current(r, id, &phrase).front_modifiers;
            for modifier in front {
                items.push(r.realise_as(modifier, DiscourseFunction::FrontModifier));
            }
            WhOutcome::default()
        }
    };
    let phrase = current(r, id, &phrase);

    emit_subjects(r, &ctx, &phrase, &outcome, &mut items);

    match ctx.voice {
        Voice::Ba => emit_ba(r, &ctx, vp, &mut items),
        Voice::Passive => emit_passive(r, &ctx, &phrase, vp, &mut items),
        Voice::Active => {}
    }

    if let Some(vp) = vp {
        emit_verb(r, vp, outcome.split_verb, &mut items);
    }

    if ctx.interrogative.is_some() {
        for &modifier in &phrase.front_modifiers {
            items.push(r.realise_as(modifier, DiscourseFunction::FrontModifier));
        }
    }
    if let Some(particle) = ctx.particle.as_ref().and_then(|p| r.realise_particle(p)) {
        items.push(particle);
    }
    if outcome.yes_no {
        let ma = r.config().yes_no_particle.clone();
        items.push(r.particle(&ma));
    }

    debug!(clause = %id, items = items.len(), "clause realised");
    r.tree_mut().realized(items)
}

/// Returns the clause as it stands now, after any stage edited it.
fn current(r: &Realiser, id: NodeId, fallback: &Phrase) -> Phrase {
    r.tree().phrase(id).cloned().unwrap_or_else(|| fallback.clone())
}

// =============================================================================
// Editing stages
// =============================================================================

/// Carries the subjects' number and person onto the verb phrase.
fn agree_with_subjects(r: &mut Realiser, subjects: &[NodeId], vp: NodeId) {
    let (plural, person) = match subjects {
        [] => return,
        [subject] => single_subject_agreement(r, *subject),
        _ => (true, None),
    };
    if plural {
        r.tree_mut().set_feature(vp, Feature::Number, Number::Plural);
    }
    if let Some(person) = person {
        r.tree_mut().set_feature(vp, Feature::Person, person);
    }
    debug!(%vp, plural, ?person, "subject agreement");
}

fn is_conjoined(r: &Realiser, id: NodeId) -> bool {
    r.tree()
        .coordination_node(id)
        .is_some_and(|c| c.conjunction == r.config().plural_conjunction)
}

/// Number and person carried by a lone subject. Person comes only from a
/// noun phrase that is not already plural by coordination or by its own
/// number.
fn single_subject_agreement(r: &Realiser, subject: NodeId) -> (bool, Option<Person>) {
    if is_conjoined(r, subject) {
        return (true, None);
    }
    let is_clause = r.category(subject) == Some(Category::Phrase(PhraseCategory::Clause));
    if r.features(subject).is_plural() && !is_clause {
        return (true, None);
    }
    let Some(np) = noun_phrase(r, subject) else {
        return (false, None);
    };
    let plural = np.head.is_some_and(|head| {
        r.features(head).is_plural() || matches!(r.tree().get(head), Some(Node::Realized(_)))
    });
    (plural, np.features.person())
}

fn noun_phrase<'a>(r: &'a Realiser, id: NodeId) -> Option<&'a Phrase> {
    r.tree()
        .phrase(id)
        .filter(|p| p.category == PhraseCategory::NounPhrase)
}

/// Embedded clauses take their form from the role they play.
fn adjust_form(r: &mut Realiser, clause: NodeId, phrase: &Phrase) {
    let form = merged_features(r, clause, phrase.verb_phrase.or(phrase.head)).form();
    let (new_form, suppress) = match phrase.features.function() {
        Some(DiscourseFunction::Object | DiscourseFunction::IndirectObject) => match form {
            Some(Form::Imperative) => (Some(Form::Infinitive), true),
            Some(Form::Gerund) => (None, phrase.subjects.is_empty()),
            _ => (None, false),
        },
        Some(DiscourseFunction::Subject) => (Some(Form::Gerund), true),
        _ => (None, false),
    };
    if let Some(form) = new_form {
        r.inherit_feature(clause, Feature::Form, form.into());
    }
    if suppress {
        r.tree_mut()
            .set_feature(clause, Feature::SuppressedComplementiser, true);
    }
    if new_form.is_some() || suppress {
        debug!(%clause, form = ?new_form, suppress, "form adjusted by function");
    }
}

fn copy_post_modifiers(r: &mut Realiser, modifiers: &[NodeId], vp: NodeId) {
    if modifiers.is_empty() {
        return;
    }
    let target = match r.tree_mut().get_mut(vp) {
        Some(Node::Phrase(p)) => &mut p.post_modifiers,
        Some(Node::Coordination(c)) => &mut c.post_modifiers,
        _ => return,
    };
    for &modifier in modifiers {
        if !target.contains(&modifier) {
            target.push(modifier);
        }
    }
}

/// Infinitives carry their front modifiers after the verb.
fn move_front_modifiers(r: &mut Realiser, clause: NodeId, vp: Option<NodeId>) {
    let front = match r.tree_mut().phrase_mut(clause) {
        Some(p) => std::mem::take(&mut p.front_modifiers),
        None => return,
    };
    if let Some(vp) = vp {
        copy_post_modifiers(r, &front, vp);
        r.tree_mut().set_feature(vp, Feature::NonMorph, true);
    }
    r.tree_mut()
        .set_feature(clause, Feature::SuppressedComplementiser, true);
    debug!(%clause, moved = front.len(), "infinitive front modifiers moved");
}

// =============================================================================
// Emitting stages
// =============================================================================

fn emit_value(
    r: &mut Realiser,
    value: &FeatureValue,
    category: LexicalCategory,
    function: DiscourseFunction,
) -> Option<NodeId> {
    match value {
        FeatureValue::Text(text) => Some(r.closed_token(text, category, Some(function))),
        FeatureValue::Node(id) => Some(r.realise_as(*id, function)),
        _ => None,
    }
}

fn emit_complementiser(r: &mut Realiser, ctx: &ClauseContext, items: &mut Vec<NodeId>) {
    if ctx.subordinate && !ctx.suppressed_complementiser {
        if let Some(value) = &ctx.complementiser {
            items.extend(emit_value(
                r,
                value,
                LexicalCategory::Complementiser,
                DiscourseFunction::Complementiser,
            ));
        }
    }
    if let Some(value) = &ctx.cue_phrase {
        items.extend(emit_value(
            r,
            value,
            LexicalCategory::Conjunction,
            DiscourseFunction::CuePhrase,
        ));
    }
}

fn emit_subjects(
    r: &mut Realiser,
    ctx: &ClauseContext,
    phrase: &Phrase,
    outcome: &WhOutcome,
    items: &mut Vec<NodeId>,
) {
    let covert = matches!(ctx.form, Some(Form::Infinitive | Form::Imperative))
        || ctx.voice == Voice::Passive
        || outcome.split_verb.is_some();
    if covert {
        return;
    }
    for &subject in &phrase.subjects {
        mark_participant(r, ctx, subject, DiscourseFunction::Subject, false);
        items.push(r.realise_as(subject, DiscourseFunction::Subject));
    }
}

/// Sets the function of a participant, its passive flag, and the
/// possessive a gerund takes.
fn mark_participant(
    r: &mut Realiser,
    ctx: &ClauseContext,
    id: NodeId,
    function: DiscourseFunction,
    passive: bool,
) {
    let tree = r.tree_mut();
    tree.set_feature(id, Feature::DiscourseFunction, function);
    if passive {
        tree.set_feature(id, Feature::Passive, true);
    }
    if ctx.is_gerund() && !ctx.suppress_genitive {
        tree.set_feature(id, Feature::Possessive, true);
    }
}

/// Modal and negation that passive and ba clauses place before the voice
/// marker.
fn emit_modal_and_negation(r: &mut Realiser, ctx: &ClauseContext, items: &mut Vec<NodeId>) {
    if let Some(modal) = ctx.modal.actual.as_deref().filter(|_| !ctx.ignore_modal) {
        let function = Some(DiscourseFunction::Auxiliary);
        items.push(r.closed_token(modal, LexicalCategory::Modal, function));
    }
    if ctx.negated {
        let word = ctx.modal.negation_word.clone();
        items.push(r.closed_token(&word, LexicalCategory::Adverb, None));
    }
}

fn objects(r: &Realiser, vp: Option<NodeId>) -> Vec<NodeId> {
    let Some(phrase) = vp.and_then(|vp| r.tree().phrase(vp)) else {
        return Vec::new();
    };
    phrase
        .complements
        .iter()
        .copied()
        .filter(|c| r.features(*c).function() == Some(DiscourseFunction::Object))
        .collect()
}

fn emit_ba(r: &mut Realiser, ctx: &ClauseContext, vp: Option<NodeId>, items: &mut Vec<NodeId>) {
    emit_modal_and_negation(r, ctx, items);
    if ctx.is_what_object() {
        return;
    }
    let ba = r.config().ba_marker.clone();
    for object in objects(r, vp) {
        items.push(r.closed_token(&ba, LexicalCategory::Preposition, None));
        items.push(r.realise_as(object, DiscourseFunction::Object));
    }
}

fn emit_passive(
    r: &mut Realiser,
    ctx: &ClauseContext,
    phrase: &Phrase,
    vp: Option<NodeId>,
    items: &mut Vec<NodeId>,
) {
    if !ctx.is_what_object() {
        let objects = objects(r, vp);
        let mut person: Option<Person> = None;
        for &object in &objects {
            mark_participant(r, ctx, object, DiscourseFunction::Object, true);
            items.push(r.realise_as(object, DiscourseFunction::Object));
            // First person beats second, second beats third.
            let p = r.features(object).person().unwrap_or(Person::Third);
            person = Some(person.map_or(p, |q| q.min(p)));
        }
        if let (Some(vp), Some(first)) = (vp, objects.first()) {
            let number = if objects.len() > 1 || objects.iter().any(|o| is_conjoined(r, *o)) {
                Some(Number::Plural)
            } else {
                r.features(*first).number()
            };
            if let Some(number) = number {
                r.tree_mut().set_feature(vp, Feature::Number, number);
            }
            if let Some(person) = person {
                r.tree_mut().set_feature(vp, Feature::Person, person);
            }
            debug!(%vp, objects = objects.len(), ?number, ?person, "passive agreement");
        }
    }

    emit_modal_and_negation(r, ctx, items);
    let bei = r.config().passive_marker.clone();
    items.push(r.closed_token(&bei, LexicalCategory::Preposition, None));

    for &subject in &phrase.subjects {
        let agentive = matches!(
            r.category(subject),
            Some(Category::Phrase(PhraseCategory::NounPhrase) | Category::Coordination)
        );
        if agentive {
            mark_participant(r, ctx, subject, DiscourseFunction::Subject, true);
            items.push(r.realise_as(subject, DiscourseFunction::Subject));
        }
    }
}

fn emit_verb(r: &mut Realiser, vp: NodeId, split_verb: Option<NodeId>, items: &mut Vec<NodeId>) {
    let out = r.realise_as(vp, DiscourseFunction::VerbPhrase);
    let Some(split) = split_verb else {
        items.push(out);
        return;
    };
    let parts = match r.tree().get(out) {
        Some(Node::Realized(list)) => list.items.clone(),
        _ => vec![out],
    };
    let mut parts = parts.into_iter();
    items.extend(parts.next());
    items.push(r.realise(split));
    items.extend(parts);
}
