//! Resume screening: ingestion of extracted resume text, experience estimation,
//! degree classification, weighted scoring against recruiter criteria, and the
//! HTTP surface recruiters use to shortlist candidates.
//!
//! Engine functions are pure and never fail; validation happens when a
//! [`FilterRequest`] is converted into [`FilterCriteria`].

pub mod batch;
pub mod criteria;
pub mod domain;
pub mod education;
pub mod experience;
pub mod export;
pub mod ingest;
pub mod job_description;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod text;
pub mod views;
pub mod vocabulary;

#[cfg(test)]
mod tests;

pub use batch::{rank_results, score_batch};
pub use criteria::{CriteriaError, FilterCriteria, FilterRequest};
pub use domain::{
    CandidateId, CandidateRecord, CandidateSubmission, DecisionMode, DegreeLevel,
    UnknownDecisionMode, UnknownDegreeLevel,
};
pub use education::{classify_degree_level, DegreeClassifier, DegreeMatchPolicy, UnknownDegreePolicy};
pub use experience::{
    estimate_experience_years, EstimateSource, ExperienceEstimate, ExperienceEstimator,
};
pub use export::{export_filename, write_csv};
pub use ingest::{CandidateIngestor, IngestError};
pub use job_description::{analyze_job_description, JobDescriptionProfile};
pub use repository::{CandidateRepository, InMemoryCandidateRepository, RepositoryError};
pub use router::screening_router;
pub use scoring::{
    RejectionReason, ScoreBreakdown, ScoreResult, ScoringEngine, ScoringWeights, TermMatch,
};
pub use service::{ScreeningService, ScreeningServiceError};
pub use text::{RuleBasedSegmenter, SentenceSegmenter};
pub use views::{CandidateScoreView, CandidateSummary};
pub use vocabulary::Vocabulary;
