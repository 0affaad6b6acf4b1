use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::criteria::FilterRequest;
use super::domain::DegreeLevel;
use super::education::DegreeClassifier;
use super::text::detect_skills;
use super::vocabulary::Vocabulary;

const EXCERPT_CHARS: usize = 1000;

static MIN_YEARS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+)\s*\+?\s*(?:years?|yrs?)\b").expect("minimum years pattern compiles")
});

/// Requirements read off a job description, used to pre-fill recruiter filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDescriptionProfile {
    pub skills: Vec<String>,
    pub min_experience: Option<u32>,
    pub education: Option<DegreeLevel>,
    pub keywords: Vec<String>,
    pub excerpt: String,
}

impl JobDescriptionProfile {
    pub fn to_filter_request(&self) -> FilterRequest {
        FilterRequest {
            skills: self.skills.clone(),
            min_experience: self.min_experience.map(f64::from),
            education: self.education.map(|level| level.label().to_string()),
            keywords: self.keywords.clone(),
            ..FilterRequest::default()
        }
    }
}

pub fn analyze_job_description(
    text: &str,
    vocabulary: &Vocabulary,
    classifier: &DegreeClassifier,
) -> JobDescriptionProfile {
    let lowered = text.to_lowercase();

    let min_experience = MIN_YEARS_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|years| years.as_str().parse().ok());

    let keywords = vocabulary
        .common_keywords()
        .iter()
        .filter(|keyword| lowered.contains(&keyword.to_lowercase()))
        .cloned()
        .collect();

    JobDescriptionProfile {
        skills: detect_skills(text, vocabulary),
        min_experience,
        education: classifier.classify(&[text]),
        keywords,
        excerpt: text.chars().take(EXCERPT_CHARS).collect(),
    }
}
