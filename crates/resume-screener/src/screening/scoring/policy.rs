use serde::{Deserialize, Serialize};

use super::super::domain::{DecisionMode, DegreeLevel};

/// One unmet criterion, reported regardless of the decision mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RejectionReason {
    MissingSkills {
        skills: Vec<String>,
    },
    InsufficientExperience {
        years: f64,
        required: f64,
    },
    EducationBelowRequirement {
        found: Option<DegreeLevel>,
        required: DegreeLevel,
    },
    MissingKeywords {
        keywords: Vec<String>,
    },
}

impl RejectionReason {
    pub fn summary(&self) -> String {
        match self {
            RejectionReason::MissingSkills { skills } => {
                format!("Missing required skills: {}", skills.join(", "))
            }
            RejectionReason::InsufficientExperience { years, required } => {
                format!("Only {years:?} years experience (requires {required:?})")
            }
            RejectionReason::EducationBelowRequirement { found, required } => format!(
                "Candidate education level '{}' does not meet requirement '{}'",
                found.map(DegreeLevel::label).unwrap_or("not found"),
                required
            ),
            RejectionReason::MissingKeywords { keywords } => {
                format!("Missing required keywords: {}", keywords.join(", "))
            }
        }
    }
}

/// Strict mode fails on any rejection reason; ranking mode only looks at the score.
pub(crate) fn decide_pass(
    mode: DecisionMode,
    rejections: &[RejectionReason],
    score: f64,
    min_score: f64,
) -> bool {
    let clears_threshold = score >= min_score;
    match mode {
        DecisionMode::Strict => rejections.is_empty() && clears_threshold,
        DecisionMode::Ranking => clears_threshold,
    }
}
