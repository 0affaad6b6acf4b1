use serde::{Deserialize, Serialize};

use super::domain::{DecisionMode, DegreeLevel, UnknownDecisionMode, UnknownDegreeLevel};

const MAX_SCORE: f64 = 100.0;

/// Recruiter filter payload as it arrives over the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterRequest {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub min_experience: Option<f64>,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub min_score: Option<f64>,
    #[serde(default)]
    pub mode: Option<String>,
}

/// Validated, normalized filter criteria consumed by the scoring engine.
///
/// Skills and keywords are lowercase, trimmed, non-empty, and de-duplicated in first-seen
/// order. `None` for experience or education means "no constraint", which is distinct
/// from a zero minimum.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub required_skills: Vec<String>,
    pub min_experience: Option<f64>,
    pub required_education: Option<DegreeLevel>,
    pub required_keywords: Vec<String>,
    pub min_score: f64,
    pub mode: DecisionMode,
}

impl FilterCriteria {
    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.required_skills = normalize_terms(skills);
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.required_keywords = normalize_terms(keywords);
        self
    }

    pub fn with_min_experience(mut self, years: f64) -> Self {
        self.min_experience = Some(years);
        self
    }

    pub fn with_education(mut self, level: DegreeLevel) -> Self {
        self.required_education = Some(level);
        self
    }

    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = min_score;
        self
    }

    pub fn with_mode(mut self, mode: DecisionMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Validation failures raised while turning a `FilterRequest` into criteria.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CriteriaError {
    #[error(
        "{0}; expected one of highschool, diploma, bachelor, master, phd"
    )]
    UnknownEducationLevel(#[from] UnknownDegreeLevel),
    #[error(transparent)]
    UnknownMode(#[from] UnknownDecisionMode),
    #[error("min_experience must be a non-negative number (found {0})")]
    InvalidMinExperience(f64),
    #[error("min_score must be between 0 and 100 (found {0})")]
    InvalidMinScore(f64),
}

impl TryFrom<FilterRequest> for FilterCriteria {
    type Error = CriteriaError;

    fn try_from(request: FilterRequest) -> Result<Self, Self::Error> {
        let min_experience = match request.min_experience {
            Some(years) if !years.is_finite() || years < 0.0 => {
                return Err(CriteriaError::InvalidMinExperience(years));
            }
            other => other,
        };

        let min_score = request.min_score.unwrap_or(0.0);
        if !min_score.is_finite() || !(0.0..=MAX_SCORE).contains(&min_score) {
            return Err(CriteriaError::InvalidMinScore(min_score));
        }

        let required_education = match request.education.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => Some(raw.parse::<DegreeLevel>()?),
            _ => None,
        };

        let mode = match request.mode.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => raw.parse::<DecisionMode>()?,
            _ => DecisionMode::default(),
        };

        Ok(Self {
            required_skills: normalize_terms(&request.skills),
            min_experience,
            required_education,
            required_keywords: normalize_terms(&request.keywords),
            min_score,
            mode,
        })
    }
}

fn normalize_terms<I, S>(terms: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut normalized: Vec<String> = Vec::new();
    for term in terms {
        let term = term.as_ref().trim().to_lowercase();
        if !term.is_empty() && !normalized.contains(&term) {
            normalized.push(term);
        }
    }
    normalized
}
