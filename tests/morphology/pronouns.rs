//! Integration tests for the pronoun table

use hanyu_foundation::{Gender, Number, Person};
use hanyu_morphology::pronouns::SLOTS;
use hanyu_morphology::{PronounRole, is_wh_pronoun, pronoun_form, pronoun_slot};
use proptest::prelude::*;

fn person() -> impl Strategy<Value = Option<Person>> {
    prop_oneof![
        Just(None),
        Just(Some(Person::First)),
        Just(Some(Person::Second)),
        Just(Some(Person::Third)),
    ]
}

fn gender() -> impl Strategy<Value = Option<Gender>> {
    prop_oneof![
        Just(None),
        Just(Some(Gender::Masculine)),
        Just(Some(Gender::Feminine)),
        Just(Some(Gender::Neuter)),
        Just(Some(Gender::Mixed)),
    ]
}

fn number() -> impl Strategy<Value = Option<Number>> {
    prop_oneof![
        Just(None),
        Just(Some(Number::Singular)),
        Just(Some(Number::Plural)),
        Just(Some(Number::Both)),
    ]
}

// =============================================================================
// Table Totality
// =============================================================================

#[test]
fn every_cell_is_filled() {
    for number in [Some(Number::Singular), Some(Number::Plural)] {
        for role in PronounRole::ALL {
            for slot in 0..SLOTS {
                assert!(!pronoun_form(number, role, slot).is_empty());
            }
        }
    }
}

proptest! {
    #[test]
    fn any_feature_combination_resolves(
        person in person(),
        gender in gender(),
        number in number(),
        role in prop::sample::select(PronounRole::ALL.to_vec()),
    ) {
        let slot = pronoun_slot(person, gender);
        prop_assert!(slot < SLOTS);
        let form = pronoun_form(number, role, slot);
        prop_assert!(!form.is_empty());
        prop_assert!(!is_wh_pronoun(form));
    }
}

// =============================================================================
// Slot Selection
// =============================================================================

#[test]
fn third_person_slots_follow_gender() {
    let forms: Vec<&str> = [Gender::Masculine, Gender::Feminine, Gender::Neuter]
        .into_iter()
        .map(|g| {
            pronoun_form(
                Some(Number::Plural),
                PronounRole::Subjective,
                pronoun_slot(Some(Person::Third), Some(g)),
            )
        })
        .collect();
    assert_eq!(forms, vec!["他们", "她们", "它们"]);
}

#[test]
fn mixed_gender_reads_the_masculine_row() {
    let slot = pronoun_slot(Some(Person::Third), Some(Gender::Mixed));
    assert_eq!(
        pronoun_form(Some(Number::Plural), PronounRole::Possessive, slot),
        "他们 的"
    );
}

#[test]
fn reflexive_forms() {
    let slot = pronoun_slot(Some(Person::First), None);
    assert_eq!(pronoun_form(None, PronounRole::Reflexive, slot), "我 自己");
}
