//! Number-selected determiner forms.
//!
//! Demonstratives and the indefinite are distinct words in the singular and
//! plural (这/这些, 一/一些), not affixed forms. An entry may also carry an
//! allomorph used in the singular before a vowel-initial word, for
//! Latin-script determiners in code-mixed text.

/// Singular and plural forms of one determiner.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeterminerForms {
    /// Singular form.
    pub singular: String,
    /// Plural form.
    pub plural: String,
    /// Singular form before a vowel-initial word.
    pub vowel_allomorph: Option<String>,
}

impl DeterminerForms {
    /// Creates an entry with no allomorph.
    #[must_use]
    pub fn new(singular: &str, plural: &str) -> Self {
        Self {
            singular: singular.to_string(),
            plural: plural.to_string(),
            vowel_allomorph: None,
        }
    }

    /// Adds a pre-vowel allomorph.
    #[must_use]
    pub fn with_vowel_allomorph(mut self, allomorph: &str) -> Self {
        self.vowel_allomorph = Some(allomorph.to_string());
        self
    }
}

/// The determiner table.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeterminerTable {
    entries: Vec<DeterminerForms>,
}

impl Default for DeterminerTable {
    fn default() -> Self {
        Self {
            entries: vec![
                DeterminerForms::new("这", "这些"),
                DeterminerForms::new("那", "那些"),
                DeterminerForms::new("一", "一些"),
            ],
        }
    }
}

impl DeterminerTable {
    /// Adds an entry, returning the table.
    #[must_use]
    pub fn with_entry(mut self, forms: DeterminerForms) -> Self {
        self.entries.push(forms);
        self
    }

    fn entry(&self, form: &str) -> Option<&DeterminerForms> {
        self.entries.iter().find(|e| {
            e.singular == form || e.plural == form || e.vowel_allomorph.as_deref() == Some(form)
        })
    }

    /// Selects the form for the given number. Unknown words pass through.
    #[must_use]
    pub fn select<'a>(&'a self, form: &'a str, plural: bool) -> &'a str {
        match self.entry(form) {
            Some(e) if plural => &e.plural,
            Some(e) => &e.singular,
            None => form,
        }
    }

    /// Returns the allomorph of a singular determiner when `following`
    /// starts with a vowel.
    #[must_use]
    pub fn allomorph(&self, form: &str, following: &str) -> Option<&str> {
        let entry = self.entries.iter().find(|e| e.singular == form)?;
        let starts_with_vowel = following
            .chars()
            .next()
            .is_some_and(|c| "aeiouAEIOU".contains(c));
        if starts_with_vowel {
            entry.vowel_allomorph.as_deref()
        } else {
            None
        }
    }
}
