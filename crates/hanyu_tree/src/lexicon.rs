//! Static lexical defaults keyed by base form and category.

use std::collections::HashMap;

use hanyu_foundation::{Feature, FeatureSet, Gender, LexicalCategory, Number, Person};

/// Categories searched, in order, when a base form is looked up without a
/// category match.
const LOOKUP_ORDER: [LexicalCategory; 8] = [
    LexicalCategory::Pronoun,
    LexicalCategory::Noun,
    LexicalCategory::Verb,
    LexicalCategory::Adjective,
    LexicalCategory::Adverb,
    LexicalCategory::Demonstrative,
    LexicalCategory::Preposition,
    LexicalCategory::Particle,
];

/// Maps (base form, category) to default features.
///
/// The default lexicon is [`Lexicon::standard`].
#[derive(Clone, Debug)]
pub struct Lexicon {
    entries: HashMap<(String, LexicalCategory), FeatureSet>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::standard()
    }
}

impl Lexicon {
    /// Creates a lexicon with no entries.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Creates the standard lexicon: personal and interrogative pronouns,
    /// demonstratives, localisers, voice prepositions, and the lexical flags
    /// the realiser consults.
    #[must_use]
    pub fn standard() -> Self {
        let mut lexicon = Self::empty();

        let personal = [
            ("我", Person::First, None),
            ("你", Person::Second, None),
            ("他", Person::Third, Some(Gender::Masculine)),
            ("她", Person::Third, Some(Gender::Feminine)),
            ("它", Person::Third, Some(Gender::Neuter)),
        ];
        for (base, person, gender) in personal {
            let mut features = FeatureSet::new()
                .with(Feature::Person, person)
                .with(Feature::Number, Number::Singular);
            features.set_opt(Feature::Gender, gender);
            lexicon.insert(base, LexicalCategory::Pronoun, features.clone());
            features.set(Feature::Number, Number::Plural);
            lexicon.insert(&format!("{base}们"), LexicalCategory::Pronoun, features);
        }

        for wh in ["谁", "什么", "哪个", "哪里", "为什么", "怎么", "多少", "什么 时候"] {
            lexicon.insert(wh, LexicalCategory::Pronoun, FeatureSet::new());
        }

        for dem in ["这", "那", "这些", "那些"] {
            lexicon.insert(dem, LexicalCategory::Demonstrative, FeatureSet::new());
        }

        for localiser in [
            "里", "上", "下", "外", "里面", "外面", "上面", "下面", "前面", "后面", "旁边",
        ] {
            lexicon.insert(
                localiser,
                LexicalCategory::Noun,
                FeatureSet::new().with(Feature::Locative, true),
            );
        }

        for person_noun in ["朋友", "孩子", "老师", "同学", "同事"] {
            lexicon.insert(
                person_noun,
                LexicalCategory::Noun,
                FeatureSet::new().with(Feature::PluralMarker, true),
            );
        }

        for adjective in ["快", "慢", "好", "大", "小", "新", "老"] {
            lexicon.insert(
                adjective,
                LexicalCategory::Adjective,
                FeatureSet::new().with(Feature::NoLinkingParticle, true),
            );
        }

        for adjective in ["男", "女", "大型", "小型"] {
            lexicon.insert(
                adjective,
                LexicalCategory::Adjective,
                FeatureSet::new().with(Feature::NonPredicate, true),
            );
        }

        for negation in ["不", "没"] {
            lexicon.insert(negation, LexicalCategory::Adverb, FeatureSet::new());
        }
        for marker in ["被", "把"] {
            lexicon.insert(marker, LexicalCategory::Preposition, FeatureSet::new());
        }

        lexicon
    }

    /// Adds or replaces an entry.
    pub fn insert(&mut self, base: &str, category: LexicalCategory, features: FeatureSet) {
        self.entries.insert((base.to_string(), category), features);
    }

    /// Adds or replaces an entry, returning the lexicon.
    #[must_use]
    pub fn with_entry(mut self, base: &str, category: LexicalCategory, features: FeatureSet) -> Self {
        self.insert(base, category, features);
        self
    }

    /// Returns the defaults for an exact (base form, category) entry.
    #[must_use]
    pub fn lookup(&self, base: &str, category: LexicalCategory) -> Option<&FeatureSet> {
        self.entries.get(&(base.to_string(), category))
    }

    /// Resolves a base form, preferring `category` and otherwise taking the
    /// first category the lexicon knows the word under.
    #[must_use]
    pub fn resolve(&self, base: &str, category: LexicalCategory) -> (LexicalCategory, FeatureSet) {
        if let Some(features) = self.lookup(base, category) {
            return (category, features.clone());
        }
        LOOKUP_ORDER
            .iter()
            .find_map(|c| self.lookup(base, *c).map(|f| (*c, f.clone())))
            .unwrap_or((category, FeatureSet::new()))
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the lexicon has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
