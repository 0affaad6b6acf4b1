use std::collections::HashSet;

use rayon::prelude::*;
use tracing::info;

use super::criteria::FilterCriteria;
use super::domain::{CandidateId, CandidateRecord};
use super::scoring::{ScoreResult, ScoringEngine};

/// Scores every candidate (or only those named in `id_filter`) and ranks the results.
///
/// Candidates are scored in parallel; the final order is score descending with ties
/// broken by candidate identifier ascending, so the output never depends on scheduling.
pub fn score_batch<'a, I>(
    engine: &ScoringEngine,
    candidates: I,
    criteria: &FilterCriteria,
    id_filter: Option<&[CandidateId]>,
) -> Vec<ScoreResult>
where
    I: IntoIterator<Item = &'a CandidateRecord>,
{
    let wanted: Option<HashSet<&CandidateId>> = id_filter.map(|ids| ids.iter().collect());
    let selected: Vec<&CandidateRecord> = candidates
        .into_iter()
        .filter(|record| {
            wanted
                .as_ref()
                .map_or(true, |wanted| wanted.contains(&record.id))
        })
        .collect();

    let mut results: Vec<ScoreResult> = selected
        .par_iter()
        .map(|record| engine.score(record, criteria))
        .collect();
    rank_results(&mut results);

    info!(
        scored = results.len(),
        passed = results.iter().filter(|result| result.passed).count(),
        mode = %criteria.mode,
        "batch scored"
    );

    results
}

pub fn rank_results(results: &mut [ScoreResult]) {
    results.sort_by(|left, right| {
        right
            .score
            .total_cmp(&left.score)
            .then_with(|| left.candidate_id.cmp(&right.candidate_id))
    });
}
