//! Symptom normalization and query parsing
//!
//! A symptom is compared as a canonical token: trimmed, lowercased, with
//! internal whitespace runs joined by a single underscore. "Blurred  Vision"
//! and "blurred_vision" are the same symptom. No stemming, no synonyms.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Separator accepted between symptoms in free-text input
pub const SYMPTOM_DELIMITER: char = ',';

/// Normalize one raw symptom into its canonical token.
///
/// Returns `None` when nothing is left after trimming.
pub fn normalize_symptom(raw: &str) -> Option<String> {
    let token = raw
        .split_whitespace()
        .map(|part| part.to_lowercase())
        .collect::<Vec<_>>()
        .join("_");

    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// A normalized set of user-reported symptoms.
///
/// Serialized as a plain list; a deserialized list is normalized like any
/// other input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SymptomQuery {
    symptoms: BTreeSet<String>,
}

impl SymptomQuery {
    /// Build a query from individual raw symptoms
    pub fn from_symptoms<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let symptoms = raw
            .into_iter()
            .filter_map(|s| normalize_symptom(s.as_ref()))
            .collect();
        Self { symptoms }
    }

    /// Parse comma-separated free text ("Fever, Cough")
    pub fn parse(input: &str) -> Self {
        Self::from_symptoms(input.split(SYMPTOM_DELIMITER))
    }

    pub fn is_empty(&self) -> bool {
        self.symptoms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.symptoms.len()
    }

    pub fn contains(&self, symptom: &str) -> bool {
        self.symptoms.contains(symptom)
    }

    /// Symptoms in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.symptoms.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for SymptomQuery {
    fn from(raw: Vec<String>) -> Self {
        Self::from_symptoms(raw)
    }
}

impl From<SymptomQuery> for Vec<String> {
    fn from(query: SymptomQuery) -> Self {
        query.symptoms.into_iter().collect()
    }
}

impl std::fmt::Display for SymptomQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined: Vec<&str> = self.iter().collect();
        write!(f, "{}", joined.join(", "))
    }
}
