//! Scripted demo queries, run when stdin is not a terminal

use crate::symptom::SymptomQuery;

/// Each entry is one query's raw symptoms
pub const DEMO_QUERIES: &[&[&str]] = &[
    &["fever", "cough"],
    &["headache", "blurred vision"],
    &["shortness breath", "wheezing"],
    &["abdominal pain", "vomiting"],
    &["loss_interest", "fatigue"],
    &["chronic cough", "weight loss"],
    &["red eyes", "itchy eyes"],
];

/// Demo queries with their display label ("fever, cough")
pub fn demo_queries() -> impl Iterator<Item = (String, SymptomQuery)> {
    DEMO_QUERIES
        .iter()
        .map(|raw| (raw.join(", "), SymptomQuery::from_symptoms(raw.iter())))
}
