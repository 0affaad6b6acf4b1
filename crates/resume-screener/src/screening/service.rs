use std::collections::HashMap;
use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use super::batch::score_batch;
use super::criteria::FilterCriteria;
use super::domain::{CandidateId, CandidateRecord, CandidateSubmission};
use super::education::{DegreeClassifier, DegreeMatchPolicy};
use super::export::write_csv;
use super::ingest::{CandidateIngestor, IngestError};
use super::job_description::{analyze_job_description, JobDescriptionProfile};
use super::repository::{CandidateRepository, RepositoryError};
use super::scoring::{ScoreResult, ScoringEngine, ScoringWeights};
use super::text::SentenceSegmenter;
use super::views::CandidateScoreView;
use super::vocabulary::Vocabulary;

const MIN_COMPARE_CANDIDATES: usize = 2;

/// Service composing ingestion, the candidate repository, and the scoring engine.
pub struct ScreeningService<R> {
    repository: Arc<R>,
    ingestor: Arc<CandidateIngestor>,
    engine: Arc<ScoringEngine>,
    sequence: AtomicU64,
}

impl<R> ScreeningService<R>
where
    R: CandidateRepository + 'static,
{
    pub fn new(repository: Arc<R>, vocabulary: Vocabulary, policy: DegreeMatchPolicy) -> Self {
        let ingestor = CandidateIngestor::new(vocabulary);
        Self::with_ingestor(repository, ingestor, policy)
    }

    pub fn with_segmenter(
        repository: Arc<R>,
        vocabulary: Vocabulary,
        policy: DegreeMatchPolicy,
        segmenter: Arc<dyn SentenceSegmenter>,
    ) -> Self {
        let ingestor = CandidateIngestor::with_segmenter(vocabulary, segmenter);
        Self::with_ingestor(repository, ingestor, policy)
    }

    fn with_ingestor(
        repository: Arc<R>,
        ingestor: CandidateIngestor,
        policy: DegreeMatchPolicy,
    ) -> Self {
        let classifier = DegreeClassifier::new(ingestor.vocabulary(), policy);
        let engine = ScoringEngine::new(classifier, ScoringWeights::default());

        Self {
            repository,
            ingestor: Arc::new(ingestor),
            engine: Arc::new(engine),
            sequence: AtomicU64::new(1),
        }
    }

    fn next_candidate_id(&self) -> CandidateId {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed);
        CandidateId(format!("cand-{id:06}"))
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    /// Parse and store one resume, returning the stored record.
    pub fn ingest(
        &self,
        submission: CandidateSubmission,
        now: DateTime<Utc>,
    ) -> Result<CandidateRecord, ScreeningServiceError> {
        let record = self
            .ingestor
            .ingest(submission, self.next_candidate_id(), now)?;
        let stored = self.repository.insert(record)?;
        Ok(stored)
    }

    /// Ingest several resumes, skipping blank ones; fails only when none were accepted.
    pub fn ingest_batch(
        &self,
        submissions: Vec<CandidateSubmission>,
        now: DateTime<Utc>,
    ) -> Result<Vec<CandidateRecord>, ScreeningServiceError> {
        let mut stored = Vec::with_capacity(submissions.len());
        for submission in submissions {
            match self.ingest(submission, now) {
                Ok(record) => stored.push(record),
                Err(ScreeningServiceError::Ingest(error)) => {
                    warn!(%error, "skipping resume");
                }
                Err(other) => return Err(other),
            }
        }

        if stored.is_empty() {
            return Err(ScreeningServiceError::NoValidResumes);
        }
        Ok(stored)
    }

    pub fn get(&self, id: &CandidateId) -> Result<CandidateRecord, ScreeningServiceError> {
        let record = self.repository.fetch(id)?.ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn stored(&self) -> Result<usize, ScreeningServiceError> {
        Ok(self.repository.len()?)
    }

    pub fn clear(&self) -> Result<usize, ScreeningServiceError> {
        let removed = self.repository.clear()?;
        info!(removed, "candidate store cleared");
        Ok(removed)
    }

    /// Score every stored candidate, best first.
    pub fn filter(
        &self,
        criteria: &FilterCriteria,
    ) -> Result<Vec<CandidateScoreView>, ScreeningServiceError> {
        let records = self.repository.all()?;
        let results = score_batch(&self.engine, &records, criteria, None);
        Ok(join_views(&records, results))
    }

    /// Side-by-side scoring of specific candidates; at least two must exist.
    pub fn compare(
        &self,
        ids: &[CandidateId],
        criteria: &FilterCriteria,
    ) -> Result<Vec<CandidateScoreView>, ScreeningServiceError> {
        if ids.len() < MIN_COMPARE_CANDIDATES {
            return Err(ScreeningServiceError::InsufficientCandidates { found: ids.len() });
        }

        let records = self.repository.fetch_many(ids)?;
        if records.len() < MIN_COMPARE_CANDIDATES {
            return Err(ScreeningServiceError::InsufficientCandidates {
                found: records.len(),
            });
        }

        let results = score_batch(&self.engine, &records, criteria, Some(ids));
        Ok(join_views(&records, results))
    }

    /// Run `filter` and write the results as CSV, returning the number of rows.
    pub fn export_csv<W: Write>(
        &self,
        criteria: &FilterCriteria,
        writer: W,
    ) -> Result<usize, ScreeningServiceError> {
        let views = self.filter(criteria)?;
        write_csv(&views, writer)?;
        Ok(views.len())
    }

    pub fn analyze_job_description(&self, text: &str) -> JobDescriptionProfile {
        analyze_job_description(text, self.ingestor.vocabulary(), self.engine.classifier())
    }
}

fn join_views(records: &[CandidateRecord], results: Vec<ScoreResult>) -> Vec<CandidateScoreView> {
    let by_id: HashMap<&CandidateId, &CandidateRecord> =
        records.iter().map(|record| (&record.id, record)).collect();

    results
        .into_iter()
        .filter_map(|result| {
            by_id
                .get(&result.candidate_id)
                .map(|record| CandidateScoreView::new(record, result))
        })
        .collect()
}

/// Error raised by the screening service.
#[derive(Debug, thiserror::Error)]
pub enum ScreeningServiceError {
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("no valid resumes uploaded")]
    NoValidResumes,
    #[error("at least 2 valid candidates required for comparison (found {found})")]
    InsufficientCandidates { found: usize },
    #[error("failed to write CSV export: {0}")]
    Export(#[from] csv::Error),
}
