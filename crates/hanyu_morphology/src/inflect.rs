//! Inflection of single words.

use hanyu_foundation::{Feature, FeatureSet, LexicalCategory};
use hanyu_tree::Word;
use tracing::trace;

use crate::config::MorphologyConfig;
use crate::pronouns::{PronounRole, is_wh_pronoun, pronoun_form, pronoun_slot};

/// Inflects words according to a [`MorphologyConfig`].
#[derive(Clone, Debug, Default)]
pub struct Inflector {
    config: MorphologyConfig,
}

impl Inflector {
    /// Creates an inflector.
    #[must_use]
    pub fn new(config: MorphologyConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &MorphologyConfig {
        &self.config
    }

    /// Returns the surface text of `word` under `overrides`.
    ///
    /// Overrides are layered over the word's own features. A word without a
    /// base form inflects to the empty string.
    #[must_use]
    pub fn inflect(&self, word: &Word, overrides: &FeatureSet) -> String {
        let Some(base) = word.base_form.as_deref() else {
            return String::new();
        };
        let mut features = word.features.clone();
        features.merge(overrides);

        if features.flag(Feature::NonMorph) {
            return base.to_string();
        }
        let text = match word.category {
            LexicalCategory::Noun => self.noun(base, &features),
            LexicalCategory::Pronoun => Self::pronoun(base, &features),
            LexicalCategory::Demonstrative | LexicalCategory::Numeral => {
                self.determiner(base, &features)
            }
            // Tense, aspect, voice, and modality surface as separate words.
            _ => base.to_string(),
        };
        trace!(base, %text, category = %word.category, "inflect");
        text
    }

    fn noun(&self, base: &str, features: &FeatureSet) -> String {
        let mut text = base.to_string();
        if features.is_plural() && features.flag(Feature::PluralMarker) {
            text.push_str(&self.config.plural_marker);
        }
        if features.flag(Feature::Possessive) {
            text.push(' ');
            text.push_str(&self.config.possessive_particle);
        }
        text
    }

    fn pronoun(base: &str, features: &FeatureSet) -> String {
        if is_wh_pronoun(base) {
            return base.to_string();
        }
        let slot = pronoun_slot(features.person(), features.gender());
        let role = if features.flag(Feature::Reflexive) {
            PronounRole::Reflexive
        } else if features.flag(Feature::Possessive) {
            PronounRole::Possessive
        } else {
            PronounRole::Subjective
        };
        pronoun_form(features.number(), role, slot).to_string()
    }

    fn determiner(&self, base: &str, features: &FeatureSet) -> String {
        match features.number() {
            Some(number) => self
                .config
                .determiners
                .select(base, number == hanyu_foundation::Number::Plural)
                .to_string(),
            None => base.to_string(),
        }
    }

    /// Applies pre-vowel allomorphy to a determiner followed by `following`.
    #[must_use]
    pub fn determiner_before(&self, determiner: &str, following: &str) -> Option<&str> {
        self.config.determiners.allomorph(determiner, following)
    }
}
