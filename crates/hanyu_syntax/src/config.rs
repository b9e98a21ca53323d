//! Configuration for the realisers.

use hanyu_morphology::MorphologyConfig;

/// Closed-class words the realisers insert.
///
/// The defaults produce standard Mandarin.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RealiserConfig {
    /// Linking particle after associative noun modifiers (的).
    pub attributive_particle: String,
    /// Linking particle after associative verb premodifiers (地).
    pub adverbial_particle: String,
    /// Linking particle before pre-associative verb postmodifiers (得).
    pub complement_particle: String,
    /// Default negation word (不).
    pub negation_word: String,
    /// Passive-marking preposition (被).
    pub passive_marker: String,
    /// Ba-construction preposition (把).
    pub ba_marker: String,
    /// Sentence-final yes/no question particle (吗).
    pub yes_no_particle: String,
    /// Completive particle for "how" predicate questions (了).
    pub completive_particle: String,
    /// Auxiliary fronted for perfect aspect and past modals (已经).
    pub perfect_auxiliary: String,
    /// Modal used for future tense without an explicit modal (将).
    pub future_modal: Option<String>,
    /// Modal used for infinitives, if the language has one.
    pub infinitive_marker: Option<String>,
    /// Conjunction that makes a coordinated subject plural (和).
    pub plural_conjunction: String,
    /// Word-level inflection settings.
    pub morphology: MorphologyConfig,
}

impl Default for RealiserConfig {
    fn default() -> Self {
        Self {
            attributive_particle: "的".to_string(),
            adverbial_particle: "地".to_string(),
            complement_particle: "得".to_string(),
            negation_word: "不".to_string(),
            passive_marker: "被".to_string(),
            ba_marker: "把".to_string(),
            yes_no_particle: "吗".to_string(),
            completive_particle: "了".to_string(),
            perfect_auxiliary: "已经".to_string(),
            future_modal: Some("将".to_string()),
            infinitive_marker: None,
            plural_conjunction: "和".to_string(),
            morphology: MorphologyConfig::default(),
        }
    }
}

impl RealiserConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the default negation word.
    #[must_use]
    pub fn with_negation_word(mut self, word: impl Into<String>) -> Self {
        self.negation_word = word.into();
        self
    }

    /// Builder method to set the perfect auxiliary.
    #[must_use]
    pub fn with_perfect_auxiliary(mut self, word: impl Into<String>) -> Self {
        self.perfect_auxiliary = word.into();
        self
    }

    /// Builder method to set or disable the future modal.
    #[must_use]
    pub fn with_future_modal(mut self, modal: Option<String>) -> Self {
        self.future_modal = modal;
        self
    }

    /// Builder method to set the infinitive marker.
    #[must_use]
    pub fn with_infinitive_marker(mut self, marker: Option<String>) -> Self {
        self.infinitive_marker = marker;
        self
    }

    /// Builder method to set the yes/no particle.
    #[must_use]
    pub fn with_yes_no_particle(mut self, particle: impl Into<String>) -> Self {
        self.yes_no_particle = particle.into();
        self
    }

    /// Builder method to set the morphology settings.
    #[must_use]
    pub fn with_morphology(mut self, morphology: MorphologyConfig) -> Self {
        self.morphology = morphology;
        self
    }
}
