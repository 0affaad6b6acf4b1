use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for ingested resumes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(pub String);

impl CandidateId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CandidateId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Already-extracted resume text handed over by the upload layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSubmission {
    pub filename: String,
    pub text: String,
}

/// Parsed resume. Immutable once ingested; experience years are computed exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub id: CandidateId,
    pub filename: String,
    pub emails: Vec<String>,
    pub phones: Vec<String>,
    pub skills_detected: Vec<String>,
    pub education: Vec<String>,
    pub total_experience_years: f64,
    pub full_text: String,
    pub uploaded_at: DateTime<Utc>,
}

/// Education levels in ascending order of attainment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DegreeLevel {
    HighSchool,
    Diploma,
    Bachelor,
    Master,
    Phd,
}

impl DegreeLevel {
    pub const fn ordered() -> [DegreeLevel; 5] {
        [
            DegreeLevel::HighSchool,
            DegreeLevel::Diploma,
            DegreeLevel::Bachelor,
            DegreeLevel::Master,
            DegreeLevel::Phd,
        ]
    }

    pub const fn rank(self) -> u8 {
        match self {
            DegreeLevel::HighSchool => 0,
            DegreeLevel::Diploma => 1,
            DegreeLevel::Bachelor => 2,
            DegreeLevel::Master => 3,
            DegreeLevel::Phd => 4,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            DegreeLevel::HighSchool => "highschool",
            DegreeLevel::Diploma => "diploma",
            DegreeLevel::Bachelor => "bachelor",
            DegreeLevel::Master => "master",
            DegreeLevel::Phd => "phd",
        }
    }

    /// True when this level is at least as high as `required`.
    pub fn satisfies(self, required: DegreeLevel) -> bool {
        self.rank() >= required.rank()
    }
}

impl fmt::Display for DegreeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized education level '{0}'")]
pub struct UnknownDegreeLevel(pub String);

impl FromStr for DegreeLevel {
    type Err = UnknownDegreeLevel;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        DegreeLevel::ordered()
            .into_iter()
            .find(|level| level.label() == normalized)
            .ok_or(UnknownDegreeLevel(normalized))
    }
}

/// How a filter run turns sub-scores and rejection reasons into pass/fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionMode {
    /// Any rejection reason fails the candidate.
    #[default]
    Strict,
    /// Only the composite score is compared against the threshold.
    Ranking,
}

impl DecisionMode {
    pub const fn label(self) -> &'static str {
        match self {
            DecisionMode::Strict => "strict",
            DecisionMode::Ranking => "ranking",
        }
    }
}

impl fmt::Display for DecisionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized decision mode '{0}' (expected strict or ranking)")]
pub struct UnknownDecisionMode(pub String);

impl FromStr for DecisionMode {
    type Err = UnknownDecisionMode;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(DecisionMode::Strict),
            "ranking" => Ok(DecisionMode::Ranking),
            other => Err(UnknownDecisionMode(other.to_string())),
        }
    }
}

/// Rounds to two decimals, the precision every reported figure uses.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
