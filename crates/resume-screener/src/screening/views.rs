use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::{CandidateId, CandidateRecord, DecisionMode, DegreeLevel};
use super::scoring::{ScoreBreakdown, ScoreResult};

/// Short record description returned after upload and by id lookups.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateSummary {
    pub id: CandidateId,
    pub filename: String,
    pub email: Vec<String>,
    pub phone: Vec<String>,
    pub skills_detected: Vec<String>,
    pub education_snippets: Vec<String>,
    pub total_experience_years: f64,
    pub uploaded_at: DateTime<Utc>,
}

impl From<&CandidateRecord> for CandidateSummary {
    fn from(record: &CandidateRecord) -> Self {
        Self {
            id: record.id.clone(),
            filename: record.filename.clone(),
            email: record.emails.clone(),
            phone: record.phones.clone(),
            skills_detected: record.skills_detected.clone(),
            education_snippets: record.education.clone(),
            total_experience_years: record.total_experience_years,
            uploaded_at: record.uploaded_at,
        }
    }
}

/// Flattened score result joined with its record, as recruiters see it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateScoreView {
    pub id: CandidateId,
    pub filename: String,
    pub email: Vec<String>,
    pub phone: Vec<String>,
    pub skills_detected: Vec<String>,
    pub skills_required: Vec<String>,
    pub skills_matched: Vec<String>,
    pub skills_missing: Vec<String>,
    pub total_experience_years: f64,
    pub education_snippets: Vec<String>,
    pub education_required: Option<DegreeLevel>,
    pub education_found_level: Option<DegreeLevel>,
    pub keywords_required: Vec<String>,
    pub keywords_matched: Vec<String>,
    pub keywords_missing: Vec<String>,
    pub score: f64,
    pub passed: bool,
    pub reject_reasons: Vec<String>,
    pub mode_used: DecisionMode,
    pub weights: ScoreBreakdown,
}

impl CandidateScoreView {
    pub fn new(record: &CandidateRecord, result: ScoreResult) -> Self {
        let reject_reasons = result.reject_reasons();
        let ScoreResult {
            candidate_id,
            skills,
            keywords,
            experience_years,
            education_required,
            education_found,
            breakdown,
            score,
            passed,
            mode,
            ..
        } = result;

        Self {
            id: candidate_id,
            filename: record.filename.clone(),
            email: record.emails.clone(),
            phone: record.phones.clone(),
            skills_detected: record.skills_detected.clone(),
            skills_required: skills.required,
            skills_matched: skills.matched,
            skills_missing: skills.missing,
            total_experience_years: experience_years,
            education_snippets: record.education.clone(),
            education_required,
            education_found_level: education_found,
            keywords_required: keywords.required,
            keywords_matched: keywords.matched,
            keywords_missing: keywords.missing,
            score,
            passed,
            reject_reasons,
            mode_used: mode,
            weights: breakdown,
        }
    }
}
