//! Knowledge Base - static disease records
//!
//! The built-in table is a literal constructed once at startup. A TOML file
//! can replace it:
//!
//! ```toml
//! [[diseases]]
//! name = "Flu"
//! specialist = "General Physician"
//! symptoms = ["fever", "cough", "body ache", "fatigue"]
//! ```
//!
//! Records are never mutated after construction; callers only ever see
//! shared references.

use crate::error::{MedicError, Result};
use crate::symptom::{normalize_symptom, SymptomQuery};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::Path;
use tracing::info;

/// Specialist shown when a record does not name one
pub const DEFAULT_SPECIALIST: &str = "Consult specialist";

/// Built-in table: (name, symptoms, specialist), in ranking tie-break order
const BUILTIN_DISEASES: &[(&str, &[&str], &str)] = &[
    ("Flu", &["fever", "cough", "body_ache", "fatigue"], "General Physician"),
    ("Common Cold", &["cough", "sore_throat", "runny_nose"], "General Physician"),
    ("Asthma", &["shortness_breath", "wheezing", "cough"], "Pulmonologist"),
    (
        "COVID-19",
        &["fever", "loss_smell", "cough", "sore_throat"],
        "Infectious Disease Specialist",
    ),
    (
        "Pneumonia",
        &["fever", "cough", "shortness_breath", "chest_pain"],
        "Pulmonologist",
    ),
    ("Migraine", &["headache", "blurred_vision", "nausea"], "Neurologist"),
    (
        "Diabetes",
        &["fatigue", "thirst", "frequent_urination", "blurred_vision"],
        "Endocrinologist",
    ),
    ("Hypertension", &["headache", "dizziness", "blurred_vision"], "Cardiologist"),
    ("Arthritis", &["joint_pain", "stiffness", "swelling"], "Rheumatologist"),
    (
        "Appendicitis",
        &["abdominal_pain", "vomiting", "loss_appetite", "fever"],
        "General Surgeon",
    ),
    (
        "Tuberculosis",
        &["chronic_cough", "weight_loss", "night_sweats", "chest_pain"],
        "Pulmonologist",
    ),
    (
        "Depression",
        &["fatigue", "loss_interest", "sadness", "sleep_disturbance"],
        "Psychiatrist",
    ),
    ("Conjunctivitis", &["red_eyes", "itchy_eyes", "eye_discharge"], "Ophthalmologist"),
    (
        "Food Poisoning",
        &["vomiting", "diarrhea", "nausea", "abdominal_pain"],
        "Gastroenterologist",
    ),
];

/// A condition with its associated symptoms and recommended specialist
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiseaseRecord {
    /// Display name (e.g., "Food Poisoning")
    pub name: String,
    /// Canonical symptom tokens
    pub symptoms: BTreeSet<String>,
    /// Who to see about it
    pub specialist: String,
}

impl DiseaseRecord {
    /// Create a record, normalizing every symptom
    pub fn new<I, S>(name: impl Into<String>, symptoms: I, specialist: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            name: name.into().trim().to_string(),
            symptoms: symptoms
                .into_iter()
                .filter_map(|s| normalize_symptom(s.as_ref()))
                .collect(),
            specialist: specialist.into().trim().to_string(),
        }
    }
}

/// On-disk record shape (specialist optional, symptoms not yet normalized)
#[derive(Debug, Clone, Deserialize)]
struct DiseaseEntry {
    name: String,
    #[serde(default)]
    specialist: Option<String>,
    #[serde(default)]
    symptoms: Vec<String>,
}

/// On-disk knowledge base file
#[derive(Debug, Clone, Deserialize)]
struct KnowledgeBaseFile {
    #[serde(default)]
    diseases: Vec<DiseaseEntry>,
}

/// Read-only collection of disease records in insertion order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeBase {
    records: Vec<DiseaseRecord>,
}

impl KnowledgeBase {
    /// The built-in disease table
    pub fn builtin() -> Self {
        let records = BUILTIN_DISEASES
            .iter()
            .map(|(name, symptoms, specialist)| {
                DiseaseRecord::new(*name, symptoms.iter(), *specialist)
            })
            .collect();
        Self { records }
    }

    /// Build from records, rejecting empty names, empty symptom sets,
    /// duplicate names (case-insensitive) and an empty table.
    ///
    /// Fields are public, so every record is normalized again here.
    pub fn from_records(records: Vec<DiseaseRecord>) -> Result<Self> {
        let records: Vec<DiseaseRecord> = records
            .into_iter()
            .map(|r| DiseaseRecord::new(r.name, r.symptoms, r.specialist))
            .collect();

        if records.is_empty() {
            return Err(MedicError::InvalidKnowledgeBase(
                "no diseases defined".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for record in &records {
            if record.name.is_empty() {
                return Err(MedicError::InvalidKnowledgeBase(
                    "disease with empty name".to_string(),
                ));
            }
            if record.symptoms.is_empty() {
                return Err(MedicError::InvalidKnowledgeBase(format!(
                    "disease '{}' has no symptoms",
                    record.name
                )));
            }
            if !seen.insert(record.name.to_lowercase()) {
                return Err(MedicError::InvalidKnowledgeBase(format!(
                    "duplicate disease '{}'",
                    record.name
                )));
            }
        }

        Ok(Self { records })
    }

    /// Parse a TOML knowledge base
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: KnowledgeBaseFile = toml::from_str(contents)?;
        let records = file
            .diseases
            .into_iter()
            .map(|entry| {
                let specialist = entry
                    .specialist
                    .filter(|s| !s.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_SPECIALIST.to_string());
                DiseaseRecord::new(entry.name, entry.symptoms, specialist)
            })
            .collect();
        Self::from_records(records)
    }

    /// Load from a TOML file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let kb = Self::from_toml_str(&contents)?;
        info!(
            "Loaded {} diseases from {}",
            kb.len(),
            path.display()
        );
        Ok(kb)
    }

    /// All records in insertion order
    pub fn records(&self) -> &[DiseaseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every known symptom, sorted
    pub fn vocabulary(&self) -> BTreeSet<&str> {
        self.records
            .iter()
            .flat_map(|r| r.symptoms.iter().map(String::as_str))
            .collect()
    }

    /// Query symptoms that no record mentions
    pub fn unknown_symptoms<'q>(&self, query: &'q SymptomQuery) -> Vec<&'q str> {
        let vocabulary = self.vocabulary();
        query.iter().filter(|s| !vocabulary.contains(s)).collect()
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}
