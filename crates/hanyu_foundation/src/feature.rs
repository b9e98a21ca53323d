//! Grammatical features attached to tree nodes.
//!
//! Every node carries a [`FeatureSet`]: a persistent map from a closed set of
//! [`Feature`] keys to [`FeatureValue`]s. Absence of a key means "unset".
//! Typed getters treat a value of the wrong variant as absent, so a
//! malformed tree degrades to default behaviour instead of failing.

use std::fmt;

use im::OrdMap;

use crate::node::NodeId;

/// Grammatical tense.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tense {
    /// Past tense.
    Past,
    /// Present tense.
    Present,
    /// Future tense.
    Future,
}

/// Verb form.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Form {
    /// Finite form.
    Normal,
    /// Imperative.
    Imperative,
    /// Infinitive.
    Infinitive,
    /// Bare infinitive.
    BareInfinitive,
    /// Gerund.
    Gerund,
    /// Past participle.
    PastParticiple,
    /// Present participle.
    PresentParticiple,
}

/// Grammatical person.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Person {
    /// Speaker.
    First,
    /// Addressee.
    Second,
    /// Anyone else.
    Third,
}

/// Grammatical number.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Number {
    /// Singular.
    Singular,
    /// Plural.
    Plural,
    /// Either.
    Both,
}

/// Grammatical gender.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gender {
    /// Masculine.
    Masculine,
    /// Feminine.
    Feminine,
    /// Neuter (the default).
    Neuter,
    /// A group of mixed gender.
    Mixed,
}

/// Grammatical role of a constituent inside its parent.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum DiscourseFunction {
    Subject,
    Object,
    IndirectObject,
    Complement,
    PreModifier,
    PostModifier,
    FrontModifier,
    Specifier,
    Head,
    Conjunction,
    CuePhrase,
    Complementiser,
    Auxiliary,
    VerbPhrase,
}

/// Kind of question a clause asks.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum InterrogativeType {
    YesNo,
    Why,
    How,
    HowPredicate,
    HowManySubject,
    HowManyObject,
    WhoSubject,
    WhoObject,
    WhoIndirectObject,
    WhatSubject,
    WhatObject,
    WhichSubject,
    WhichObject,
    WhereSubject,
    WhereObject,
    WhenSubject,
    WhenObject,
}

impl InterrogativeType {
    /// Every interrogative type, for exhaustive iteration in tests.
    pub const ALL: [Self; 17] = [
        Self::YesNo,
        Self::Why,
        Self::How,
        Self::HowPredicate,
        Self::HowManySubject,
        Self::HowManyObject,
        Self::WhoSubject,
        Self::WhoObject,
        Self::WhoIndirectObject,
        Self::WhatSubject,
        Self::WhatObject,
        Self::WhichSubject,
        Self::WhichObject,
        Self::WhereSubject,
        Self::WhereObject,
        Self::WhenSubject,
        Self::WhenObject,
    ];

    /// The interrogative word substituted or inserted for this question
    /// type, or `None` for yes/no questions.
    #[must_use]
    pub fn wh_word(self) -> Option<&'static str> {
        match self {
            Self::YesNo => None,
            Self::Why => Some("为什么"),
            Self::How | Self::HowPredicate => Some("怎么"),
            Self::HowManySubject | Self::HowManyObject => Some("多少"),
            Self::WhoSubject | Self::WhoObject | Self::WhoIndirectObject => Some("谁"),
            Self::WhatSubject | Self::WhatObject => Some("什么"),
            Self::WhichSubject | Self::WhichObject => Some("哪个"),
            Self::WhereSubject | Self::WhereObject => Some("哪里"),
            Self::WhenSubject | Self::WhenObject => Some("什么 时候"),
        }
    }

    /// Returns true if the interrogative word takes the object position.
    #[must_use]
    pub fn is_object(self) -> bool {
        matches!(
            self,
            Self::WhoObject
                | Self::WhatObject
                | Self::WhichObject
                | Self::WhereObject
                | Self::WhenObject
                | Self::HowManyObject
        )
    }
}

/// Whether a clause is a main clause or embedded.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClauseStatus {
    /// Main clause.
    Matrix,
    /// Embedded clause.
    Subordinate,
}

/// Feature keys.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Feature {
    // Verbal features
    /// [`Tense`] of a verb or clause.
    Tense,
    /// [`Form`] of a verb or clause.
    Form,
    /// Perfect aspect.
    Perfect,
    /// Progressive aspect.
    Progressive,
    /// Passive voice (被).
    Passive,
    /// Ba construction (把).
    Ba,
    /// Negated polarity.
    Negated,
    /// Overrides the default negation word (e.g. 没).
    NegationWord,
    /// Modal verb text.
    Modal,
    /// Suppresses the modal.
    IgnoreModal,
    /// Whether auxiliaries are realised (default true).
    RealiseAuxiliary,
    /// Coordinated verb phrases share the first child's auxiliaries.
    AggregateAuxiliary,
    /// Verb particle, as text or a node.
    Particle,

    // Agreement
    /// [`Person`].
    Person,
    /// [`Number`].
    Number,
    /// [`Gender`].
    Gender,

    // Structure
    /// [`DiscourseFunction`] of a constituent.
    DiscourseFunction,
    /// [`InterrogativeType`] of a clause.
    InterrogativeType,
    /// [`ClauseStatus`] of a clause.
    ClauseStatus,
    /// Complementiser node of a subordinate clause.
    Complementiser,
    /// Cue phrase node of a clause.
    CuePhrase,
    /// Suppresses the complementiser.
    SuppressedComplementiser,
    /// Keeps gerund subjects out of the possessive.
    SuppressGenitiveInGerund,
    /// Coordination raises identical specifiers onto its first child.
    RaiseSpecifier,
    /// Specifiers were raised onto an earlier sibling.
    Raised,

    // Nominal flags
    /// Realise the phrase as a pronoun.
    Pronominal,
    /// Possessive.
    Possessive,
    /// Reflexive pronoun.
    Reflexive,
    /// Renders no surface text.
    Elided,
    /// Followed by a linking particle.
    Associative,
    /// Preceded by a linking particle.
    PreAssociative,
    /// Locative noun phrase or localiser word.
    Locative,
    /// In topic position.
    Topic,
    /// Accepts the plural marker 们.
    PluralMarker,
    /// Proper name.
    Proper,
    /// Never takes a linking particle.
    NoLinkingParticle,
    /// Adjective cannot be used predicatively.
    NonPredicate,
    /// Acronym.
    Acronym,
    /// Bypasses morphology.
    NonMorph,
}

impl Feature {
    /// Returns true for features that a clause stores on its verb phrase.
    #[must_use]
    pub fn is_verbal(self) -> bool {
        matches!(
            self,
            Self::Tense
                | Self::Form
                | Self::Perfect
                | Self::Progressive
                | Self::Passive
                | Self::Ba
                | Self::Negated
                | Self::NegationWord
                | Self::Modal
                | Self::RealiseAuxiliary
                | Self::Person
                | Self::Number
                | Self::InterrogativeType
        )
    }
}

/// A feature value.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum FeatureValue {
    Bool(bool),
    Tense(Tense),
    Form(Form),
    Person(Person),
    Number(Number),
    Gender(Gender),
    Function(DiscourseFunction),
    Interrogative(InterrogativeType),
    ClauseStatus(ClauseStatus),
    Text(String),
    Node(NodeId),
}

macro_rules! impl_from_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for FeatureValue {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from_value! {
    bool => Bool,
    Tense => Tense,
    Form => Form,
    Person => Person,
    Number => Number,
    Gender => Gender,
    DiscourseFunction => Function,
    InterrogativeType => Interrogative,
    ClauseStatus => ClauseStatus,
    String => Text,
    NodeId => Node,
}

impl From<&str> for FeatureValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Tense(v) => write!(f, "{v:?}"),
            Self::Form(v) => write!(f, "{v:?}"),
            Self::Person(v) => write!(f, "{v:?}"),
            Self::Number(v) => write!(f, "{v:?}"),
            Self::Gender(v) => write!(f, "{v:?}"),
            Self::Function(v) => write!(f, "{v:?}"),
            Self::Interrogative(v) => write!(f, "{v:?}"),
            Self::ClauseStatus(v) => write!(f, "{v:?}"),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Node(id) => write!(f, "{id}"),
        }
    }
}

/// A persistent map of features.
///
/// Cloning is O(1) and shares structure, which keeps tree forks cheap.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeatureSet {
    values: OrdMap<Feature, FeatureValue>,
}

macro_rules! typed_getter {
    ($(#[$meta:meta])* $name:ident, $key:ident, $variant:ident, $ty:ty) => {
        $(#[$meta])*
        #[must_use]
        pub fn $name(&self) -> Option<$ty> {
            match self.values.get(&Feature::$key) {
                Some(FeatureValue::$variant(v)) => Some(*v),
                _ => None,
            }
        }
    };
}

impl FeatureSet {
    /// Creates an empty feature set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a feature, returning the updated set.
    #[must_use]
    pub fn with(mut self, key: Feature, value: impl Into<FeatureValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Sets a feature.
    pub fn set(&mut self, key: Feature, value: impl Into<FeatureValue>) {
        self.values.insert(key, value.into());
    }

    /// Sets a feature, or removes it when `value` is `None`.
    pub fn set_opt<V: Into<FeatureValue>>(&mut self, key: Feature, value: Option<V>) {
        match value {
            Some(v) => self.set(key, v),
            None => self.remove(key),
        }
    }

    /// Removes a feature.
    pub fn remove(&mut self, key: Feature) {
        self.values.remove(&key);
    }

    /// Returns the raw value of a feature.
    #[must_use]
    pub fn get(&self, key: Feature) -> Option<&FeatureValue> {
        self.values.get(&key)
    }

    /// Returns true if the feature is set, whatever its value.
    #[must_use]
    pub fn has(&self, key: Feature) -> bool {
        self.values.contains_key(&key)
    }

    /// Returns a boolean feature, `false` if unset or not a boolean.
    #[must_use]
    pub fn flag(&self, key: Feature) -> bool {
        matches!(self.values.get(&key), Some(FeatureValue::Bool(true)))
    }

    /// Returns a boolean feature only if it is explicitly set.
    #[must_use]
    pub fn explicit_flag(&self, key: Feature) -> Option<bool> {
        match self.values.get(&key) {
            Some(FeatureValue::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    /// Returns a text feature.
    #[must_use]
    pub fn text(&self, key: Feature) -> Option<&str> {
        match self.values.get(&key) {
            Some(FeatureValue::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns a node-valued feature.
    #[must_use]
    pub fn node(&self, key: Feature) -> Option<NodeId> {
        match self.values.get(&key) {
            Some(FeatureValue::Node(id)) => Some(*id),
            _ => None,
        }
    }

    typed_getter!(
        /// Returns the tense.
        tense, Tense, Tense, Tense
    );
    typed_getter!(
        /// Returns the verb form.
        form, Form, Form, Form
    );
    typed_getter!(
        /// Returns the person.
        person, Person, Person, Person
    );
    typed_getter!(
        /// Returns the number.
        number, Number, Number, Number
    );
    typed_getter!(
        /// Returns the gender.
        gender, Gender, Gender, Gender
    );
    typed_getter!(
        /// Returns the discourse function.
        function, DiscourseFunction, Function, DiscourseFunction
    );
    typed_getter!(
        /// Returns the interrogative type.
        interrogative, InterrogativeType, Interrogative, InterrogativeType
    );
    typed_getter!(
        /// Returns the clause status.
        clause_status, ClauseStatus, ClauseStatus, ClauseStatus
    );

    /// Returns true if the number is plural.
    #[must_use]
    pub fn is_plural(&self) -> bool {
        self.number() == Some(Number::Plural)
    }

    /// Copies one feature from another set, removing it here if the other
    /// set does not have it.
    pub fn copy_from(&mut self, other: &Self, key: Feature) {
        match other.get(key) {
            Some(value) => self.set(key, value.clone()),
            None => self.remove(key),
        }
    }

    /// Overlays every feature of `other` onto this set.
    pub fn merge(&mut self, other: &Self) {
        for (key, value) in &other.values {
            self.values.insert(*key, value.clone());
        }
    }

    /// Iterates over all features in key order.
    pub fn iter(&self) -> impl Iterator<Item = (Feature, &FeatureValue)> {
        self.values.iter().map(|(k, v)| (*k, v))
    }

    /// Returns the number of features set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no feature is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(Feature, FeatureValue)> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = (Feature, FeatureValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
