//! Morphology configuration.

use crate::determiners::DeterminerTable;

/// Closed-class affixes and tables used by the [`Inflector`](crate::Inflector).
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MorphologyConfig {
    /// Plural marker appended to nouns that accept it.
    pub plural_marker: String,
    /// Possessive particle appended, space-separated, to possessive nouns.
    pub possessive_particle: String,
    /// Demonstrative and indefinite forms.
    pub determiners: DeterminerTable,
}

impl Default for MorphologyConfig {
    fn default() -> Self {
        Self {
            plural_marker: "们".to_string(),
            possessive_particle: "的".to_string(),
            determiners: DeterminerTable::default(),
        }
    }
}

impl MorphologyConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the plural marker.
    #[must_use]
    pub fn with_plural_marker(mut self, marker: impl Into<String>) -> Self {
        self.plural_marker = marker.into();
        self
    }

    /// Sets the possessive particle.
    #[must_use]
    pub fn with_possessive_particle(mut self, particle: impl Into<String>) -> Self {
        self.possessive_particle = particle.into();
        self
    }

    /// Sets the determiner table.
    #[must_use]
    pub fn with_determiners(mut self, determiners: DeterminerTable) -> Self {
        self.determiners = determiners;
        self
    }
}
