//! Verb group construction.
//!
//! The verb group is the run of particle, verb, perfect auxiliary,
//! negation and modal that surrounds a verb phrase's head. Tokens are pushed
//! innermost first and land in one of two segments as they arrive: the main
//! segment takes everything up to and including the first token that is not
//! a negation word, the auxiliary segment takes the rest. A verb carrying a
//! particle keeps the whole group in the main segment. Each segment is
//! emitted in reverse push order.

use hanyu_foundation::{
    Category, Feature, FeatureSet, FeatureValue, Form, InterrogativeType, LexicalCategory,
    NodeId, Number, Tense,
};
use hanyu_tree::Node;
use tracing::debug;

use crate::config::RealiserConfig;
use crate::realiser::Realiser;

/// How a clause fronts its logical object.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Voice {
    /// Plain subject-verb-object order.
    Active,
    /// Object first, logical subject after 被.
    Passive,
    /// Object after 把, before the verb.
    Ba,
}

impl Voice {
    /// Reads the voice from a feature set. Passive wins over ba.
    #[must_use]
    pub fn of(features: &FeatureSet) -> Self {
        if features.flag(Feature::Passive) {
            Self::Passive
        } else if features.flag(Feature::Ba) {
            Self::Ba
        } else {
            Self::Active
        }
    }

    /// Returns true for passive and ba voice.
    #[must_use]
    pub fn fronts_object(self) -> bool {
        self != Self::Active
    }
}

/// The modal and negation word a verb phrase resolves to.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ModalResolution {
    /// Tense after form adjustment (gerunds and infinitives are present).
    pub tense: Option<Tense>,
    /// The modal given on the phrase, if any.
    pub explicit: Option<String>,
    /// The modal to realise: the explicit one, the future modal, or the
    /// infinitive marker.
    pub actual: Option<String>,
    /// An explicit modal in the past tense, realised with the perfect
    /// auxiliary.
    pub past: bool,
    /// The word realising negation.
    pub negation_word: String,
}

/// Resolves the modal and negation word for a verb phrase's features.
///
/// Clause realisation calls this too, so passive and ba clauses place the
/// same modal the verb group would have.
#[must_use]
pub fn resolve_modal(
    config: &RealiserConfig,
    features: &FeatureSet,
    head_is_coordination: bool,
) -> ModalResolution {
    let form = features.form();
    let explicit = features.text(Feature::Modal).map(str::to_string);
    let mut tense = features.tense();
    if matches!(form, Some(Form::Gerund | Form::Infinitive)) {
        tense = Some(Tense::Present);
    }

    let mut actual = None;
    let mut past = false;
    if form == Some(Form::Infinitive) {
        actual.clone_from(&config.infinitive_marker);
    } else if matches!(form, None | Some(Form::Normal)) {
        let interrogative = features.interrogative().is_some();
        if tense == Some(Tense::Future)
            && explicit.is_none()
            && (!head_is_coordination || interrogative)
        {
            actual.clone_from(&config.future_modal);
        } else if explicit.is_some() {
            actual.clone_from(&explicit);
            past = tense == Some(Tense::Past);
        }
    }

    ModalResolution {
        tense,
        explicit,
        actual,
        past,
        negation_word: features
            .text(Feature::NegationWord)
            .map_or_else(|| config.negation_word.clone(), str::to_string),
    }
}

/// Everything the verb group reads from its phrase, captured once.
#[derive(Clone, Debug)]
pub(crate) struct VerbGroupContext {
    pub head: Option<NodeId>,
    pub particle: Option<FeatureValue>,
    pub form: Option<Form>,
    pub perfect: bool,
    pub negated: bool,
    pub ignore_modal: bool,
    pub interrogative: Option<InterrogativeType>,
    pub voice: Voice,
    pub modal: ModalResolution,
}

impl VerbGroupContext {
    pub(crate) fn capture(r: &Realiser, vp: NodeId) -> Self {
        let features = r.features(vp);
        let head = r.tree().phrase(vp).and_then(|p| p.head);
        let head_is_coordination =
            head.is_some_and(|h| r.category(h) == Some(Category::Coordination));
        Self {
            head,
            particle: features.get(Feature::Particle).cloned(),
            form: features.form(),
            perfect: features.flag(Feature::Perfect),
            negated: features.flag(Feature::Negated),
            ignore_modal: features.flag(Feature::IgnoreModal),
            interrogative: features.interrogative(),
            voice: Voice::of(&features),
            modal: resolve_modal(r.config(), &features, head_is_coordination),
        }
    }

    fn is_normal_form(&self) -> bool {
        matches!(self.form, None | Some(Form::Normal))
    }
}

#[derive(Copy, Clone, Debug)]
struct Slot {
    id: NodeId,
    negation: bool,
}

/// The two output segments of a verb group.
#[derive(Debug, Default)]
pub(crate) struct VerbGroup {
    main: Vec<Slot>,
    auxiliary: Vec<Slot>,
    main_closed: bool,
    keep_in_main: bool,
}

impl VerbGroup {
    fn new(keep_in_main: bool) -> Self {
        Self {
            keep_in_main,
            ..Self::default()
        }
    }

    fn push_slot(&mut self, slot: Slot) {
        if self.main_closed {
            self.auxiliary.push(slot);
        } else {
            self.main.push(slot);
            if !slot.negation && !self.keep_in_main {
                self.main_closed = true;
            }
        }
    }

    fn push(&mut self, id: NodeId) {
        self.push_slot(Slot { id, negation: false });
    }

    fn push_negation(&mut self, id: NodeId) {
        self.push_slot(Slot { id, negation: true });
    }

    fn is_empty(&self) -> bool {
        self.main.is_empty() && self.auxiliary.is_empty()
    }

    /// Returns the (auxiliary, main) segments in emission order.
    pub(crate) fn into_segments(self) -> (Vec<NodeId>, Vec<NodeId>) {
        fn emit(slots: Vec<Slot>) -> Vec<NodeId> {
            slots.into_iter().rev().map(|s| s.id).collect()
        }
        (emit(self.auxiliary), emit(self.main))
    }
}

/// Builds the verb group of verb phrase `vp`.
///
/// Passive and ba voice keep negation and modal out of the group and
/// record them on the phrase instead; the clause places them before the
/// voice marker.
pub(crate) fn build(r: &mut Realiser, vp: NodeId, ctx: &VerbGroupContext) -> VerbGroup {
    let mut group = VerbGroup::new(ctx.particle.is_some());
    let has_explicit_modal = ctx.modal.explicit.is_some();

    if let Some(token) = ctx.particle.as_ref().and_then(|p| r.realise_particle(p)) {
        group.push(token);
    }

    let mut front = ctx.head.map(|head| front_verb(r, head));
    if let Some(front) = front {
        let tree = r.tree_mut();
        if let Some(tense) = ctx.modal.tense {
            tree.set_feature(front, Feature::Tense, tense);
        }
        if has_explicit_modal {
            tree.set_feature(front, Feature::Negated, false);
        }
        if matches!(
            ctx.form,
            Some(Form::Imperative | Form::Infinitive | Form::BareInfinitive)
        ) {
            tree.set_feature(front, Feature::NonMorph, true);
        }
    }

    if ctx.perfect || ctx.modal.past {
        if let Some(verb) = front {
            r.tree_mut().set_feature(verb, Feature::Form, Form::PastParticiple);
            group.push(verb);
        }
        let auxiliary = r.config().perfect_auxiliary.clone();
        let word = r.closed_word(&auxiliary, LexicalCategory::Auxiliary);
        let have = r.tree_mut().inflected(word);
        if let Some(tense) = ctx.modal.tense {
            r.tree_mut().set_feature(have, Feature::Tense, tense);
        }
        if has_explicit_modal {
            r.tree_mut().set_feature(have, Feature::NonMorph, true);
        }
        front = Some(have);
    }

    if ctx.modal.actual.is_some() && !ctx.ignore_modal {
        if let Some(verb) = front.take() {
            r.tree_mut().set_feature(verb, Feature::NonMorph, true);
            group.push(verb);
        }
    }

    if ctx.negated {
        // With nothing pushed yet the verb itself carries the negation.
        let bare = front.filter(|_| group.is_empty() && !has_explicit_modal);
        if let Some(verb) = bare {
            r.tree_mut().set_feature(verb, Feature::Negated, true);
            group.push(verb);
            front = None;
        }
        negate(r, vp, ctx, &mut group);
    }

    if let Some(verb) = front {
        push_front(r, vp, ctx, &mut group, verb);
    }

    match ctx.voice {
        Voice::Active => {
            if let Some(modal) = ctx.modal.actual.as_deref().filter(|_| !ctx.ignore_modal) {
                let word = r.closed_word(modal, LexicalCategory::Modal);
                r.tree_mut().set_feature(word, Feature::NonMorph, true);
                group.push(word);
            }
        }
        Voice::Passive | Voice::Ba => {
            let implicit = ctx
                .modal
                .actual
                .as_deref()
                .filter(|m| ctx.modal.explicit.as_deref() != Some(*m));
            if let Some(modal) = implicit {
                r.tree_mut().set_feature(vp, Feature::Modal, modal);
            }
        }
    }

    debug!(
        %vp,
        main = group.main.len(),
        auxiliary = group.auxiliary.len(),
        voice = ?ctx.voice,
        "verb group split"
    );
    group
}

/// Returns the element that starts the group: a fresh inflected use of a
/// word head, or the head itself.
fn front_verb(r: &mut Realiser, head: NodeId) -> NodeId {
    match r.tree().get(head) {
        Some(Node::Word(_)) => r.tree_mut().inflected(head),
        _ => head,
    }
}

fn negate(r: &mut Realiser, vp: NodeId, ctx: &VerbGroupContext, group: &mut VerbGroup) {
    let word = ctx.modal.negation_word.as_str();
    if ctx.voice.fronts_object() {
        r.tree_mut().set_feature(vp, Feature::NegationWord, word);
    } else {
        let negation = r.closed_word(word, LexicalCategory::Adverb);
        group.push_negation(negation);
    }
}

fn push_front(
    r: &mut Realiser,
    vp: NodeId,
    ctx: &VerbGroupContext,
    group: &mut VerbGroup,
    verb: NodeId,
) {
    match ctx.form {
        Some(Form::Gerund) => {
            r.tree_mut()
                .set_feature(verb, Feature::Form, Form::PresentParticiple);
            group.push(verb);
        }
        Some(form @ (Form::PastParticiple | Form::PresentParticiple)) => {
            r.tree_mut().set_feature(verb, Feature::Form, form);
            group.push(verb);
        }
        _ if (!ctx.is_normal_form() || ctx.interrogative.is_some()) && group.is_empty() => {
            group.push(verb);
        }
        _ => {
            let number = r.features(vp).number().unwrap_or(Number::Singular);
            let tree = r.tree_mut();
            tree.copy_feature(vp, verb, Feature::Tense);
            tree.copy_feature(vp, verb, Feature::Person);
            tree.set_feature(verb, Feature::Number, number);
            let wh_object = matches!(
                ctx.interrogative,
                Some(InterrogativeType::WhoObject | InterrogativeType::WhatObject)
            );
            if !(ctx.negated && wh_object) {
                group.push(verb);
            }
        }
    }
}
