//! Ranker - orders matches by score

use crate::matcher::MatchResult;

/// Sort by score descending. `sort_by` is stable, so equal scores keep
/// knowledge-base order.
pub fn rank(mut results: Vec<MatchResult<'_>>) -> Vec<MatchResult<'_>> {
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results
}

/// Keep the first `limit` results; 0 keeps everything
pub fn top(mut ranked: Vec<MatchResult<'_>>, limit: usize) -> Vec<MatchResult<'_>> {
    if limit > 0 {
        ranked.truncate(limit);
    }
    ranked
}
