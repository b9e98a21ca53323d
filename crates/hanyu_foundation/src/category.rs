//! Lexical and phrasal categories.

use std::fmt;

/// Part of speech of a single word.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LexicalCategory {
    /// Common or proper noun (狗, 王美丽).
    Noun,
    /// Verb (打, 喜欢).
    Verb,
    /// Adjective (漂亮, 快).
    Adjective,
    /// Adverb (重重, 特别).
    Adverb,
    /// Personal, reflexive, or interrogative pronoun.
    Pronoun,
    /// Demonstrative (这, 那).
    Demonstrative,
    /// Numeral (一, 两).
    Numeral,
    /// Measure word (个, 条, 些).
    Classifier,
    /// Preposition, including the voice markers 被 and 把.
    Preposition,
    /// Coordinating conjunction (和, 或者).
    Conjunction,
    /// Subordinating complementiser.
    Complementiser,
    /// Modal verb (应该, 能).
    Modal,
    /// Auxiliary verb.
    Auxiliary,
    /// Sentence or aspect particle (了, 吗).
    Particle,
    /// Punctuation or other symbol.
    Symbol,
    /// Unspecified category.
    Any,
}

/// Category of a phrase.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PhraseCategory {
    /// Full clause with subjects and a verb phrase.
    Clause,
    /// Noun phrase.
    NounPhrase,
    /// Verb phrase.
    VerbPhrase,
    /// Adjective phrase.
    AdjectivePhrase,
    /// Adverb phrase.
    AdverbPhrase,
    /// Prepositional phrase.
    PrepositionalPhrase,
    /// Pre-built text wrapped as a phrase.
    CannedText,
}

/// Category of any tree node.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// A word of the given part of speech.
    Lexical(LexicalCategory),
    /// A phrase of the given category.
    Phrase(PhraseCategory),
    /// A coordination of sibling constituents.
    Coordination,
    /// Opaque literal text.
    Literal,
    /// Realised output list.
    Realized,
}

impl Category {
    /// Returns true if this is the given lexical category.
    #[must_use]
    pub fn is_lexical(self, category: LexicalCategory) -> bool {
        self == Self::Lexical(category)
    }

    /// Returns true if this is the given phrase category.
    #[must_use]
    pub fn is_phrase(self, category: PhraseCategory) -> bool {
        self == Self::Phrase(category)
    }

    /// Returns true for verbs, verb phrases, and clauses.
    #[must_use]
    pub fn is_verbal(self) -> bool {
        matches!(
            self,
            Self::Lexical(LexicalCategory::Verb)
                | Self::Phrase(PhraseCategory::VerbPhrase | PhraseCategory::Clause)
        )
    }

    /// Returns true for adjectives and adjective phrases.
    #[must_use]
    pub fn is_adjectival(self) -> bool {
        matches!(
            self,
            Self::Lexical(LexicalCategory::Adjective) | Self::Phrase(PhraseCategory::AdjectivePhrase)
        )
    }

    /// Returns true for adverbs and adverb phrases.
    #[must_use]
    pub fn is_adverbial(self) -> bool {
        matches!(
            self,
            Self::Lexical(LexicalCategory::Adverb) | Self::Phrase(PhraseCategory::AdverbPhrase)
        )
    }

    /// Returns true for nouns and noun phrases.
    #[must_use]
    pub fn is_nominal(self) -> bool {
        matches!(
            self,
            Self::Lexical(LexicalCategory::Noun) | Self::Phrase(PhraseCategory::NounPhrase)
        )
    }

    /// Returns true for prepositions and prepositional phrases.
    #[must_use]
    pub fn is_prepositional(self) -> bool {
        matches!(
            self,
            Self::Lexical(LexicalCategory::Preposition)
                | Self::Phrase(PhraseCategory::PrepositionalPhrase)
        )
    }
}

impl fmt::Display for LexicalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Noun => "noun",
            Self::Verb => "verb",
            Self::Adjective => "adjective",
            Self::Adverb => "adverb",
            Self::Pronoun => "pronoun",
            Self::Demonstrative => "demonstrative",
            Self::Numeral => "numeral",
            Self::Classifier => "classifier",
            Self::Preposition => "preposition",
            Self::Conjunction => "conjunction",
            Self::Complementiser => "complementiser",
            Self::Modal => "modal",
            Self::Auxiliary => "auxiliary",
            Self::Particle => "particle",
            Self::Symbol => "symbol",
            Self::Any => "any",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for PhraseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Clause => "clause",
            Self::NounPhrase => "noun phrase",
            Self::VerbPhrase => "verb phrase",
            Self::AdjectivePhrase => "adjective phrase",
            Self::AdverbPhrase => "adverb phrase",
            Self::PrepositionalPhrase => "prepositional phrase",
            Self::CannedText => "canned text",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lexical(c) => write!(f, "{c}"),
            Self::Phrase(c) => write!(f, "{c}"),
            Self::Coordination => write!(f, "coordination"),
            Self::Literal => write!(f, "literal"),
            Self::Realized => write!(f, "realized list"),
        }
    }
}
