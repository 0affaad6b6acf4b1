mod config;
mod policy;
mod rules;

pub use config::ScoringWeights;
pub use policy::RejectionReason;
pub use rules::TermMatch;

use serde::{Deserialize, Serialize};

use super::criteria::FilterCriteria;
use super::domain::{round2, CandidateId, CandidateRecord, DecisionMode, DegreeLevel};
use super::education::DegreeClassifier;
use policy::decide_pass;

/// Deterministic scorer applying filter criteria to one candidate at a time.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    classifier: DegreeClassifier,
    weights: ScoringWeights,
}

impl ScoringEngine {
    pub fn new(classifier: DegreeClassifier, weights: ScoringWeights) -> Self {
        Self {
            classifier,
            weights,
        }
    }

    pub fn classifier(&self) -> &DegreeClassifier {
        &self.classifier
    }

    pub fn score(&self, record: &CandidateRecord, criteria: &FilterCriteria) -> ScoreResult {
        let text_lower = record.full_text.to_lowercase();

        let skills = rules::match_skills(
            &criteria.required_skills,
            &text_lower,
            &record.skills_detected,
        );
        let keywords = rules::match_keywords(&criteria.required_keywords, &text_lower);

        let years = record.total_experience_years;
        let experience_pct = rules::experience_percent(years, criteria.min_experience);

        let education_found = self.classifier.classify(&record.education);
        let education = rules::check_education(education_found, criteria.required_education);

        let skills_pct = skills.percent();
        let keywords_pct = keywords.percent();
        let score = round2(
            skills_pct * self.weights.skills
                + experience_pct * self.weights.experience
                + education.percent * self.weights.education
                + keywords_pct * self.weights.keywords,
        );

        let mut rejections = Vec::new();
        if !skills.missing.is_empty() {
            rejections.push(RejectionReason::MissingSkills {
                skills: skills.missing.clone(),
            });
        }
        if let Some(required) = criteria.min_experience {
            if years < required {
                rejections.push(RejectionReason::InsufficientExperience { years, required });
            }
        }
        if let (false, Some(required)) = (education.meets_requirement, criteria.required_education)
        {
            rejections.push(RejectionReason::EducationBelowRequirement {
                found: education_found,
                required,
            });
        }
        if !keywords.missing.is_empty() {
            rejections.push(RejectionReason::MissingKeywords {
                keywords: keywords.missing.clone(),
            });
        }

        let passed = decide_pass(criteria.mode, &rejections, score, criteria.min_score);

        ScoreResult {
            candidate_id: record.id.clone(),
            skills,
            keywords,
            experience_years: years,
            education_required: criteria.required_education,
            education_found,
            breakdown: ScoreBreakdown {
                skills: round2(skills_pct),
                experience: round2(experience_pct),
                education: round2(education.percent),
                keywords: round2(keywords_pct),
            },
            score,
            passed,
            rejections,
            mode: criteria.mode,
        }
    }
}

/// Per-criterion percentages, each in `[0, 100]` and rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub keywords: f64,
}

/// Scoring output for one candidate; recomputed on every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub candidate_id: CandidateId,
    pub skills: TermMatch,
    pub keywords: TermMatch,
    pub experience_years: f64,
    pub education_required: Option<DegreeLevel>,
    pub education_found: Option<DegreeLevel>,
    pub breakdown: ScoreBreakdown,
    pub score: f64,
    pub passed: bool,
    pub rejections: Vec<RejectionReason>,
    pub mode: DecisionMode,
}

impl ScoreResult {
    pub fn reject_reasons(&self) -> Vec<String> {
        self.rejections.iter().map(RejectionReason::summary).collect()
    }
}
