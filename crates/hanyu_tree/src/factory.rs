//! Tree-building operations.
//!
//! These set the default features the realisers rely on: linking-particle
//! flags on modifiers, agreement copied from a noun phrase's head, the
//! discourse function of every constituent, and verb particles split from
//! verb strings.

use hanyu_foundation::{
    Category, ClauseStatus, DiscourseFunction, Error, Feature, FeatureValue, Gender,
    LexicalCategory, NodeId, Person, PhraseCategory, Result,
};
use tracing::trace;

use crate::node::{Coordination, InflectedWord, Node, Phrase, Word};
use crate::tree::Tree;

/// Conjunction used by [`Tree::coordination`].
pub const DEFAULT_CONJUNCTION: &str = "和";

impl Tree {
    // =========================================================================
    // Leaves
    // =========================================================================

    /// Adds a word with the lexicon's defaults for exactly this category.
    pub fn word(&mut self, base: &str, category: LexicalCategory) -> NodeId {
        let features = self
            .lexicon()
            .lookup(base, category)
            .cloned()
            .unwrap_or_default();
        self.insert(Node::Word(Word {
            base_form: Some(base.to_string()),
            category,
            features,
        }))
    }

    /// Adds a word, taking its category from the lexicon when the word is
    /// only known under another category (so "他" becomes a pronoun).
    pub fn lookup_word(&mut self, base: &str, category: LexicalCategory) -> NodeId {
        let (category, features) = self.lexicon().resolve(base, category);
        self.insert(Node::Word(Word {
            base_form: Some(base.to_string()),
            category,
            features,
        }))
    }

    /// Adds a word with no base form.
    pub fn blank_word(&mut self, category: LexicalCategory) -> NodeId {
        self.insert(Node::Word(Word {
            base_form: None,
            category,
            features: hanyu_foundation::FeatureSet::new(),
        }))
    }

    /// Adds an inflecting use of `word`, starting from the word's features.
    pub fn inflected(&mut self, word: NodeId) -> NodeId {
        let features = self.features(word).cloned().unwrap_or_default();
        self.insert(Node::Inflected(InflectedWord { word, features }))
    }

    /// Adds opaque text.
    pub fn literal(&mut self, text: &str) -> NodeId {
        self.token(text, None, hanyu_foundation::FeatureSet::new())
    }

    // =========================================================================
    // Phrases
    // =========================================================================

    /// Adds an empty phrase.
    pub fn empty_phrase(&mut self, category: PhraseCategory) -> NodeId {
        let mut phrase = Phrase::new(category);
        if category == PhraseCategory::NounPhrase {
            phrase.features.set(Feature::Person, Person::Third);
            phrase.features.set(Feature::Gender, Gender::Neuter);
        }
        self.insert(Node::Phrase(phrase))
    }

    /// Adds a noun phrase headed by `head`.
    pub fn noun_phrase(&mut self, head: &str) -> NodeId {
        let word = self.lookup_word(head, LexicalCategory::Noun);
        self.noun_phrase_of(word)
    }

    /// Adds a noun phrase headed by an existing node.
    pub fn noun_phrase_of(&mut self, head: NodeId) -> NodeId {
        let np = self.empty_phrase(PhraseCategory::NounPhrase);
        self.attach_head(np, head);
        np
    }

    /// Adds a verb phrase. A verb string with a space ("打 了") is split
    /// into the verb and its particle.
    pub fn verb_phrase(&mut self, verb: &str) -> NodeId {
        let vp = self.empty_phrase(PhraseCategory::VerbPhrase);
        let (base, particle) = match verb.split_once(' ') {
            Some((base, particle)) => (base, Some(particle.trim())),
            None => (verb, None),
        };
        let head = self.word(base, LexicalCategory::Verb);
        self.attach_head(vp, head);
        if let Some(particle) = particle.filter(|p| !p.is_empty()) {
            self.set_feature(vp, Feature::Particle, particle);
        }
        vp
    }

    /// Adds a verb phrase headed by an existing node.
    pub fn verb_phrase_of(&mut self, head: NodeId) -> NodeId {
        let vp = self.empty_phrase(PhraseCategory::VerbPhrase);
        self.attach_head(vp, head);
        vp
    }

    /// Adds an adjective phrase.
    pub fn adjective_phrase(&mut self, adjective: &str) -> NodeId {
        let head = self.word(adjective, LexicalCategory::Adjective);
        let ap = self.empty_phrase(PhraseCategory::AdjectivePhrase);
        self.attach_head(ap, head);
        ap
    }

    /// Adds an adverb phrase.
    pub fn adverb_phrase(&mut self, adverb: &str) -> NodeId {
        let head = self.word(adverb, LexicalCategory::Adverb);
        let advp = self.empty_phrase(PhraseCategory::AdverbPhrase);
        self.attach_head(advp, head);
        advp
    }

    /// Adds a prepositional phrase, optionally with its object.
    pub fn preposition_phrase(&mut self, preposition: &str, object: Option<NodeId>) -> NodeId {
        let head = self.word(preposition, LexicalCategory::Preposition);
        let pp = self.empty_phrase(PhraseCategory::PrepositionalPhrase);
        self.attach_head(pp, head);
        if let Some(object) = object {
            let object = self.nominal(object);
            self.set_feature(object, Feature::DiscourseFunction, DiscourseFunction::Object);
            if let Some(phrase) = self.phrase_mut(pp) {
                phrase.complements.push(object);
            }
        }
        pp
    }

    /// Adds a clause. Bare words become noun or verb phrases.
    ///
    /// # Errors
    ///
    /// Fails if a handle is not from this tree.
    pub fn clause(
        &mut self,
        subject: Option<NodeId>,
        verb: Option<NodeId>,
        object: Option<NodeId>,
    ) -> Result<NodeId> {
        let clause = self.empty_phrase(PhraseCategory::Clause);
        if let Some(verb) = verb {
            self.set_verb_phrase(clause, verb)?;
        }
        if let Some(subject) = subject {
            self.add_subject(clause, subject)?;
        }
        if object.is_some() {
            self.set_object(clause, object)?;
        }
        Ok(clause)
    }

    /// Adds a coordination joined by 和.
    pub fn coordination(&mut self, children: &[NodeId]) -> NodeId {
        self.insert(Node::Coordination(Coordination::new(
            children.to_vec(),
            DEFAULT_CONJUNCTION,
        )))
    }

    // =========================================================================
    // Phrase structure
    // =========================================================================

    /// Sets a phrase's head.
    ///
    /// # Errors
    ///
    /// Fails if `phrase` is not a phrase.
    pub fn set_head(&mut self, phrase: NodeId, head: NodeId) -> Result<()> {
        self.expect_phrase_mut(phrase)?;
        self.attach_head(phrase, head);
        Ok(())
    }

    fn attach_head(&mut self, phrase: NodeId, head: NodeId) {
        self.set_feature(head, Feature::DiscourseFunction, DiscourseFunction::Head);
        let is_noun_phrase = match self.phrase_mut(phrase) {
            Some(p) => {
                p.head = Some(head);
                p.category == PhraseCategory::NounPhrase
            }
            None => return,
        };
        if is_noun_phrase {
            let head_features = self.features(head).cloned().unwrap_or_default();
            if let Some(features) = self.features_mut(phrase) {
                features.set(
                    Feature::Gender,
                    head_features.gender().unwrap_or(Gender::Neuter),
                );
                features.set(
                    Feature::Person,
                    head_features.person().unwrap_or(Person::Third),
                );
                if let Some(number) = head_features.number() {
                    features.set(Feature::Number, number);
                }
            }
        }
    }

    /// Adds a specifier to a phrase or coordination.
    ///
    /// # Errors
    ///
    /// Fails if `target` is neither a phrase nor a coordination.
    pub fn add_specifier(&mut self, target: NodeId, specifier: NodeId) -> Result<()> {
        self.set_feature(
            specifier,
            Feature::DiscourseFunction,
            DiscourseFunction::Specifier,
        );
        if let Some(c) = self.coordination_mut(target) {
            c.specifiers.push(specifier);
            return Ok(());
        }
        self.expect_phrase_mut(target)?.specifiers.push(specifier);
        Ok(())
    }

    /// Adds a premodifier to a phrase or coordination, flagging it
    /// associative where a linking particle must follow.
    ///
    /// # Errors
    ///
    /// Fails if `target` is neither a phrase nor a coordination.
    pub fn add_pre_modifier(&mut self, target: NodeId, modifier: NodeId) -> Result<()> {
        self.set_feature(
            modifier,
            Feature::DiscourseFunction,
            DiscourseFunction::PreModifier,
        );
        if let Some(c) = self.coordination_mut(target) {
            c.pre_modifiers.push(modifier);
            return Ok(());
        }
        let category = self.expect_phrase_mut(target)?.category;
        let modifier_category = self.category(modifier);
        match category {
            PhraseCategory::NounPhrase => self.flag_noun_pre_modifier(modifier, modifier_category),
            PhraseCategory::VerbPhrase => self.flag_verb_pre_modifier(modifier, modifier_category),
            _ => {}
        }
        self.expect_phrase_mut(target)?.pre_modifiers.push(modifier);
        Ok(())
    }

    fn flag_noun_pre_modifier(&mut self, modifier: NodeId, category: Option<Category>) {
        let Some(category) = category else { return };
        if category == Category::Phrase(PhraseCategory::Clause) {
            self.set_feature(modifier, Feature::Associative, true);
        } else if category.is_adjectival() || category.is_verbal() {
            if !self.head_flag(modifier, Feature::NonPredicate) {
                self.set_feature(modifier, Feature::Associative, true);
            }
        } else if category == Category::Phrase(PhraseCategory::NounPhrase)
            && self.flag(modifier, Feature::Locative)
        {
            self.set_feature(modifier, Feature::Associative, true);
            let localisers: Vec<NodeId> = self
                .phrase(modifier)
                .map(|p| {
                    p.complements
                        .iter()
                        .chain(&p.post_modifiers)
                        .copied()
                        .collect()
                })
                .unwrap_or_default();
            for localiser in localisers {
                if self.is_localiser(localiser) {
                    self.set_feature(localiser, Feature::PreAssociative, false);
                }
            }
        }
    }

    fn flag_verb_pre_modifier(&mut self, modifier: NodeId, category: Option<Category>) {
        match category {
            Some(Category::Lexical(LexicalCategory::Adjective)) => {
                if !self.flag(modifier, Feature::NoLinkingParticle) {
                    self.set_feature(modifier, Feature::Associative, true);
                }
            }
            Some(Category::Phrase(PhraseCategory::AdjectivePhrase)) => {
                let bare = self
                    .phrase(modifier)
                    .is_some_and(|p| p.pre_modifiers.is_empty());
                if !(bare && self.head_flag(modifier, Feature::NoLinkingParticle)) {
                    self.set_feature(modifier, Feature::Associative, true);
                }
            }
            _ => {}
        }
    }

    /// Adds a complement. Complements default to the object function;
    /// clauses and coordinations become subordinate.
    ///
    /// # Errors
    ///
    /// Fails if `target` is neither a phrase nor a coordination.
    pub fn add_complement(&mut self, target: NodeId, complement: NodeId) -> Result<()> {
        let has_function = self
            .features(complement)
            .is_some_and(|f| f.function().is_some());
        if !has_function {
            self.set_feature(
                complement,
                Feature::DiscourseFunction,
                DiscourseFunction::Object,
            );
        }
        if matches!(
            self.category(complement),
            Some(Category::Phrase(PhraseCategory::Clause) | Category::Coordination)
        ) {
            self.set_feature(complement, Feature::ClauseStatus, ClauseStatus::Subordinate);
        }
        if let Some(c) = self.coordination_mut(target) {
            c.complements.push(complement);
            return Ok(());
        }
        let category = self.expect_phrase_mut(target)?.category;
        if category == PhraseCategory::NounPhrase {
            self.flag_localiser(target, complement);
        }
        self.expect_phrase_mut(target)?.complements.push(complement);
        Ok(())
    }

    /// Adds a postmodifier.
    ///
    /// # Errors
    ///
    /// Fails if `target` is neither a phrase nor a coordination.
    pub fn add_post_modifier(&mut self, target: NodeId, modifier: NodeId) -> Result<()> {
        self.set_feature(
            modifier,
            Feature::DiscourseFunction,
            DiscourseFunction::PostModifier,
        );
        if let Some(c) = self.coordination_mut(target) {
            c.post_modifiers.push(modifier);
            return Ok(());
        }
        let category = self.expect_phrase_mut(target)?.category;
        match category {
            PhraseCategory::NounPhrase => self.flag_localiser(target, modifier),
            PhraseCategory::VerbPhrase => {
                if self.category(modifier).is_some_and(Category::is_adjectival) {
                    self.set_feature(modifier, Feature::PreAssociative, true);
                }
            }
            _ => {}
        }
        self.expect_phrase_mut(target)?.post_modifiers.push(modifier);
        Ok(())
    }

    fn flag_localiser(&mut self, noun_phrase: NodeId, element: NodeId) {
        if !self.is_localiser(element) {
            return;
        }
        self.set_feature(noun_phrase, Feature::Locative, true);
        if self.base_form(element).is_some_and(|b| b.chars().count() > 1) {
            self.set_feature(element, Feature::PreAssociative, true);
        }
    }

    fn is_localiser(&self, id: NodeId) -> bool {
        matches!(self.get(id), Some(Node::Word(_) | Node::Inflected(_)))
            && self.flag(id, Feature::Locative)
    }

    /// Returns true if the node, or the head of a phrase node, has the flag.
    #[must_use]
    pub fn head_flag(&self, id: NodeId, key: Feature) -> bool {
        self.flag(id, key)
            || self
                .phrase(id)
                .and_then(|p| p.head)
                .is_some_and(|head| self.flag(head, key))
    }

    // =========================================================================
    // Clause structure
    // =========================================================================

    /// Adds a clause-initial modifier.
    ///
    /// # Errors
    ///
    /// Fails if `clause` is not a phrase.
    pub fn add_front_modifier(&mut self, clause: NodeId, modifier: NodeId) -> Result<()> {
        self.set_feature(
            modifier,
            Feature::DiscourseFunction,
            DiscourseFunction::FrontModifier,
        );
        self.expect_phrase_mut(clause)?.front_modifiers.push(modifier);
        Ok(())
    }

    /// Adds a subject, wrapping a bare word in a noun phrase.
    ///
    /// # Errors
    ///
    /// Fails if `clause` is not a phrase.
    pub fn add_subject(&mut self, clause: NodeId, subject: NodeId) -> Result<()> {
        self.expect_phrase_mut(clause)?;
        let subject = self.nominal(subject);
        self.set_feature(subject, Feature::DiscourseFunction, DiscourseFunction::Subject);
        self.expect_phrase_mut(clause)?.subjects.push(subject);
        Ok(())
    }

    /// Replaces every subject.
    ///
    /// # Errors
    ///
    /// Fails if `clause` is not a phrase.
    pub fn set_subject(&mut self, clause: NodeId, subject: Option<NodeId>) -> Result<()> {
        self.expect_phrase_mut(clause)?.subjects.clear();
        if let Some(subject) = subject {
            self.add_subject(clause, subject)?;
        }
        Ok(())
    }

    /// Replaces the direct object of a clause or verb phrase. `None` clears it.
    ///
    /// # Errors
    ///
    /// Fails if `target` has no verb phrase.
    pub fn set_object(&mut self, target: NodeId, object: Option<NodeId>) -> Result<()> {
        self.replace_complement(target, object, DiscourseFunction::Object)
    }

    /// Replaces the indirect object of a clause or verb phrase.
    ///
    /// # Errors
    ///
    /// Fails if `target` has no verb phrase.
    pub fn set_indirect_object(&mut self, target: NodeId, object: Option<NodeId>) -> Result<()> {
        self.replace_complement(target, object, DiscourseFunction::IndirectObject)
    }

    fn replace_complement(
        &mut self,
        target: NodeId,
        complement: Option<NodeId>,
        function: DiscourseFunction,
    ) -> Result<()> {
        let vp = self.verb_phrase_of_clause(target).ok_or_else(|| {
            Error::invalid_argument(format!("{target} has no verb phrase to take an object"))
        })?;
        let kept: Vec<NodeId> = self
            .phrase(vp)
            .map(|p| p.complements.clone())
            .unwrap_or_default()
            .into_iter()
            .filter(|c| self.features(*c).and_then(|f| f.function()) != Some(function))
            .collect();
        self.expect_phrase_mut(vp)?.complements = kept;
        if let Some(complement) = complement {
            let complement = self.nominal(complement);
            self.set_feature(complement, Feature::DiscourseFunction, function);
            self.add_complement(vp, complement)?;
        }
        Ok(())
    }

    /// Returns the verb phrase of a clause, or the node itself if it is a
    /// verb phrase.
    #[must_use]
    pub fn verb_phrase_of_clause(&self, id: NodeId) -> Option<NodeId> {
        let phrase = self.phrase(id)?;
        match phrase.category {
            PhraseCategory::VerbPhrase => Some(id),
            PhraseCategory::Clause => phrase
                .verb_phrase
                .or(phrase.head)
                .filter(|vp| self.is(*vp, Category::Phrase(PhraseCategory::VerbPhrase))),
            _ => None,
        }
    }

    /// Sets a clause's verb phrase. Anything other than a verb phrase or a
    /// coordination (a bare verb, an adjective phrase used as predicate)
    /// becomes the head of a new verb phrase.
    ///
    /// # Errors
    ///
    /// Fails if `clause` is not a phrase.
    pub fn set_verb_phrase(&mut self, clause: NodeId, verb: NodeId) -> Result<()> {
        self.expect_phrase_mut(clause)?;
        let vp = match self.category(verb) {
            Some(Category::Phrase(PhraseCategory::VerbPhrase) | Category::Coordination) => verb,
            _ => self.verb_phrase_of(verb),
        };
        self.set_feature(vp, Feature::DiscourseFunction, DiscourseFunction::VerbPhrase);
        self.expect_phrase_mut(clause)?.verb_phrase = Some(vp);
        Ok(())
    }

    /// Sets a clause feature. Verbal features are stored on the clause's
    /// verb phrase when it has one.
    ///
    /// # Errors
    ///
    /// Fails if `clause` is not a phrase.
    pub fn set_clause_feature(
        &mut self,
        clause: NodeId,
        key: Feature,
        value: impl Into<FeatureValue>,
    ) -> Result<()> {
        self.expect_phrase_mut(clause)?;
        let target = if key.is_verbal() {
            self.verb_phrase_of_clause(clause).unwrap_or(clause)
        } else {
            clause
        };
        trace!(%clause, %target, ?key, "set clause feature");
        self.set_feature(target, key, value);
        Ok(())
    }

    // =========================================================================
    // Coordination structure
    // =========================================================================

    /// Appends a coordinate child.
    ///
    /// # Errors
    ///
    /// Fails if `coordination` is not a coordination.
    pub fn add_child(&mut self, coordination: NodeId, child: NodeId) -> Result<()> {
        self.expect_coordination_mut(coordination)?.children.push(child);
        Ok(())
    }

    /// Sets the conjunction; an empty string juxtaposes the children.
    ///
    /// # Errors
    ///
    /// Fails if `coordination` is not a coordination.
    pub fn set_conjunction(&mut self, coordination: NodeId, conjunction: &str) -> Result<()> {
        self.expect_coordination_mut(coordination)?.conjunction = conjunction.to_string();
        Ok(())
    }

    /// Wraps a bare word in a noun phrase; other nodes pass through.
    pub fn nominal(&mut self, id: NodeId) -> NodeId {
        if matches!(self.get(id), Some(Node::Word(_) | Node::Inflected(_))) {
            self.noun_phrase_of(id)
        } else {
            id
        }
    }
}
