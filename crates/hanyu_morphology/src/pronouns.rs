//! The personal pronoun table.
//!
//! Forms are indexed by number × role × slot, where the slot is the person
//! for first and second person and `2 + gender` for third person.

use hanyu_foundation::{Gender, InterrogativeType, Number, Person};

/// Syntactic role of a pronoun.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PronounRole {
    /// Plain form (他).
    Subjective,
    /// Reflexive form (他 自己).
    Reflexive,
    /// Possessive form (他 的).
    Possessive,
}

impl PronounRole {
    /// Every role, in table order.
    pub const ALL: [Self; 3] = [Self::Subjective, Self::Reflexive, Self::Possessive];

    fn index(self) -> usize {
        match self {
            Self::Subjective => 0,
            Self::Reflexive => 1,
            Self::Possessive => 2,
        }
    }
}

/// Number of slots per role: first, second, third masculine, third
/// feminine, third neuter.
pub const SLOTS: usize = 5;

const TABLE: [[[&str; SLOTS]; 3]; 2] = [
    [
        ["我", "你", "他", "她", "它"],
        ["我 自己", "你 自己", "他 自己", "她 自己", "它 自己"],
        ["我 的", "你 的", "他 的", "她 的", "它 的"],
    ],
    [
        ["我们", "你们", "他们", "她们", "它们"],
        ["我们 自己", "你们 自己", "他们 自己", "她们 自己", "它们 自己"],
        ["我们 的", "你们 的", "他们 的", "她们 的", "它们 的"],
    ],
];

/// Computes the table slot for a person and gender.
///
/// Third person (the default) adds the gender index: masculine 0,
/// feminine 1, anything else 2. Mixed gender takes the masculine slot here;
/// the noun phrase realiser tags a synthesised mixed pronoun separately.
#[must_use]
pub fn pronoun_slot(person: Option<Person>, gender: Option<Gender>) -> usize {
    match person {
        Some(Person::First) => 0,
        Some(Person::Second) => 1,
        Some(Person::Third) | None => {
            2 + match gender {
                Some(Gender::Masculine | Gender::Mixed) => 0,
                Some(Gender::Feminine) => 1,
                Some(Gender::Neuter) | None => 2,
            }
        }
    }
}

/// Looks up a pronoun form. Out-of-range slots clamp to the last slot.
#[must_use]
pub fn pronoun_form(number: Option<Number>, role: PronounRole, slot: usize) -> &'static str {
    let number_index = usize::from(number == Some(Number::Plural));
    TABLE[number_index][role.index()][slot.min(SLOTS - 1)]
}

/// Returns true for interrogative pronouns, which never inflect.
#[must_use]
pub fn is_wh_pronoun(base: &str) -> bool {
    InterrogativeType::ALL
        .iter()
        .filter_map(|kind| kind.wh_word())
        .any(|wh| wh == base)
}
