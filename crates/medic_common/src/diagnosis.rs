//! Diagnosis - one full query cycle (match, rank, trim)

use crate::knowledge_base::KnowledgeBase;
use crate::matcher::{match_symptoms, MatchResult};
use crate::ranker::{rank, top};
use crate::symptom::SymptomQuery;
use serde::Serialize;

/// Ranked outcome for a single query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnosis<'kb> {
    /// The normalized query
    pub query: SymptomQuery,
    /// Matches, best first
    pub results: Vec<MatchResult<'kb>>,
    /// Query symptoms absent from the knowledge base
    pub unrecognized: Vec<String>,
}

impl<'kb> Diagnosis<'kb> {
    /// Run the query against the knowledge base, keeping at most `limit`
    /// results (0 = no limit)
    pub fn run(kb: &'kb KnowledgeBase, query: SymptomQuery, limit: usize) -> Self {
        let results = top(rank(match_symptoms(kb, &query)), limit);
        let unrecognized = kb
            .unknown_symptoms(&query)
            .into_iter()
            .map(str::to_string)
            .collect();

        Self {
            query,
            results,
            unrecognized,
        }
    }

    /// No condition matched (including the empty query)
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
