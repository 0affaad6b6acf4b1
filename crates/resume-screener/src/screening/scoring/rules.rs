use serde::{Deserialize, Serialize};

use super::super::domain::{round2, DegreeLevel};

const FULL_MARKS: f64 = 100.0;

/// Required terms split into those found and those missing, preserving request order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermMatch {
    pub required: Vec<String>,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

impl TermMatch {
    fn partition<F>(required: &[String], mut found: F) -> Self
    where
        F: FnMut(&str) -> bool,
    {
        let mut outcome = TermMatch {
            required: required.to_vec(),
            ..TermMatch::default()
        };
        for term in required {
            let term = term.to_lowercase();
            if found(&term) {
                outcome.matched.push(term);
            } else {
                outcome.missing.push(term);
            }
        }
        outcome
    }

    /// Share of required terms found; an empty requirement is vacuously 100.
    pub fn percent(&self) -> f64 {
        if self.required.is_empty() {
            return FULL_MARKS;
        }
        self.matched.len() as f64 / self.required.len() as f64 * FULL_MARKS
    }
}

/// A skill counts when it appears in the text or among the pre-detected canonical skills.
pub(crate) fn match_skills(required: &[String], text_lower: &str, detected: &[String]) -> TermMatch {
    let detected: Vec<String> = detected.iter().map(|skill| skill.to_lowercase()).collect();
    TermMatch::partition(required, |skill| {
        text_lower.contains(skill) || detected.iter().any(|known| known == skill)
    })
}

pub(crate) fn match_keywords(required: &[String], text_lower: &str) -> TermMatch {
    TermMatch::partition(required, |keyword| text_lower.contains(keyword))
}

/// Capped at 100 for candidates above the minimum; a missing or zero minimum is 100.
pub(crate) fn experience_percent(years: f64, min_experience: Option<f64>) -> f64 {
    match min_experience {
        Some(minimum) if minimum > 0.0 => round2((years / minimum * FULL_MARKS).min(FULL_MARKS)),
        _ => FULL_MARKS,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct EducationCheck {
    pub percent: f64,
    pub meets_requirement: bool,
}

pub(crate) fn check_education(
    found: Option<DegreeLevel>,
    required: Option<DegreeLevel>,
) -> EducationCheck {
    let meets_requirement = match (found, required) {
        (_, None) => true,
        (Some(found), Some(required)) => found.satisfies(required),
        (None, Some(_)) => false,
    };

    EducationCheck {
        percent: if meets_requirement { FULL_MARKS } else { 0.0 },
        meets_requirement,
    }
}
