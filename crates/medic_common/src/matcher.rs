//! Matcher - symptom overlap scoring
//!
//! Score is the raw intersection count `|query ∩ record.symptoms|`.
//! Records with no overlap are dropped. Results come out in knowledge-base
//! order; ordering by score is the ranker's job.

use crate::knowledge_base::{DiseaseRecord, KnowledgeBase};
use crate::symptom::SymptomQuery;
use serde::Serialize;
use tracing::debug;

/// One disease that shares at least one symptom with the query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult<'kb> {
    /// The matched record
    pub disease: &'kb DiseaseRecord,
    /// Number of query symptoms found in the record
    pub score: usize,
    /// The overlapping symptoms, sorted
    pub matched: Vec<&'kb str>,
}

/// Score a single record against a query
pub fn score_record<'kb>(record: &'kb DiseaseRecord, query: &SymptomQuery) -> MatchResult<'kb> {
    let matched: Vec<&str> = record
        .symptoms
        .iter()
        .filter(|s| query.contains(s))
        .map(String::as_str)
        .collect();

    MatchResult {
        disease: record,
        score: matched.len(),
        matched,
    }
}

/// Match a query against every record in the knowledge base
pub fn match_symptoms<'kb>(kb: &'kb KnowledgeBase, query: &SymptomQuery) -> Vec<MatchResult<'kb>> {
    if query.is_empty() {
        debug!("Empty query, skipping match");
        return Vec::new();
    }

    let results: Vec<MatchResult<'kb>> = kb
        .records()
        .iter()
        .map(|record| score_record(record, query))
        .filter(|m| m.score > 0)
        .collect();

    debug!(
        "Matched {} of {} diseases for [{}]",
        results.len(),
        kb.len(),
        query
    );

    results
}
