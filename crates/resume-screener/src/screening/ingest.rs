use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use super::domain::{CandidateId, CandidateRecord, CandidateSubmission};
use super::experience::ExperienceEstimator;
use super::text::{
    detect_skills, education_snippets, extract_emails, extract_phones, RuleBasedSegmenter,
    SentenceSegmenter,
};
use super::vocabulary::Vocabulary;

/// Errors raised while turning extracted text into a candidate record.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("resume '{filename}' contains no extractable text")]
    EmptyText { filename: String },
}

/// Builds immutable `CandidateRecord`s from extracted resume text.
#[derive(Clone)]
pub struct CandidateIngestor {
    vocabulary: Vocabulary,
    segmenter: Arc<dyn SentenceSegmenter>,
    estimator: ExperienceEstimator,
}

impl std::fmt::Debug for CandidateIngestor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CandidateIngestor")
            .field("vocabulary", &self.vocabulary)
            .finish_non_exhaustive()
    }
}

impl CandidateIngestor {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self::with_segmenter(vocabulary, Arc::new(RuleBasedSegmenter))
    }

    pub fn with_segmenter(vocabulary: Vocabulary, segmenter: Arc<dyn SentenceSegmenter>) -> Self {
        let estimator = ExperienceEstimator::new(segmenter.clone());
        Self {
            vocabulary,
            segmenter,
            estimator,
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// `now` stamps the record and resolves open-ended date ranges.
    pub fn ingest(
        &self,
        submission: CandidateSubmission,
        id: CandidateId,
        now: DateTime<Utc>,
    ) -> Result<CandidateRecord, IngestError> {
        let CandidateSubmission { filename, text } = submission;
        let full_text = text.trim().to_string();
        if full_text.is_empty() {
            return Err(IngestError::EmptyText { filename });
        }

        let sentences = self.segmenter.segment(&full_text);
        let estimate = self.estimator.estimate(&full_text, now.date_naive());

        let record = CandidateRecord {
            id,
            filename,
            emails: extract_emails(&full_text),
            phones: extract_phones(&full_text),
            skills_detected: detect_skills(&full_text, &self.vocabulary),
            education: education_snippets(&sentences, &self.vocabulary),
            total_experience_years: estimate.years,
            full_text,
            uploaded_at: now,
        };

        info!(
            candidate = %record.id,
            filename = %record.filename,
            years = record.total_experience_years,
            source = ?estimate.source,
            skills = record.skills_detected.len(),
            "resume ingested"
        );

        Ok(record)
    }
}
