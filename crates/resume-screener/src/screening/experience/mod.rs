//! Years-of-experience estimation from free-form resume text.
//!
//! Three tiers are tried in order and the first one with evidence wins:
//! dated ranges (merged), sentences mentioning "experience", and the spread between the
//! earliest and latest year mentioned. Later tiers never blend into earlier ones.

mod intervals;
mod merge;

pub use intervals::{extract_intervals, DateInterval};
pub use merge::{merge_intervals, total_years};

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::text::{RuleBasedSegmenter, SentenceSegmenter};

pub const MAX_EXPERIENCE_YEARS: f64 = 50.0;
const MAX_SENTENCE_PROXY_YEARS: usize = 40;
const EXPERIENCE_TOKEN: &str = "experience";

static YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").expect("year pattern compiles"));

/// Which tier produced an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimateSource {
    DateRanges,
    ExperienceSentences,
    YearSpan,
    NoEvidence,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEstimate {
    pub years: f64,
    pub source: EstimateSource,
}

/// Stateless estimator; the segmenter backs the sentence-count tier.
#[derive(Clone)]
pub struct ExperienceEstimator {
    segmenter: Arc<dyn SentenceSegmenter>,
}

impl Default for ExperienceEstimator {
    fn default() -> Self {
        Self::new(Arc::new(RuleBasedSegmenter))
    }
}

impl std::fmt::Debug for ExperienceEstimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExperienceEstimator").finish_non_exhaustive()
    }
}

impl ExperienceEstimator {
    pub fn new(segmenter: Arc<dyn SentenceSegmenter>) -> Self {
        Self { segmenter }
    }

    /// `today` resolves "Present"/"Now" and is read once for the whole call.
    pub fn estimate(&self, text: &str, today: NaiveDate) -> ExperienceEstimate {
        let intervals = extract_intervals(text, today);
        if !intervals.is_empty() {
            let merged = merge_intervals(&intervals);
            let years = total_years(&merged);
            debug!(
                found = intervals.len(),
                merged = merged.len(),
                years,
                "experience estimated from dated ranges"
            );
            return ExperienceEstimate {
                years,
                source: EstimateSource::DateRanges,
            };
        }

        let mentions = self
            .segmenter
            .segment(text)
            .iter()
            .filter(|sentence| sentence.to_lowercase().contains(EXPERIENCE_TOKEN))
            .count();
        if mentions > 0 {
            let years = mentions.min(MAX_SENTENCE_PROXY_YEARS) as f64;
            debug!(mentions, years, "experience estimated from sentence mentions");
            return ExperienceEstimate {
                years,
                source: EstimateSource::ExperienceSentences,
            };
        }

        let years_seen: BTreeSet<i32> = YEAR_RE
            .find_iter(text)
            .filter_map(|found| found.as_str().parse().ok())
            .collect();
        if let (Some(first), Some(last)) = (years_seen.first(), years_seen.last()) {
            if years_seen.len() >= 2 {
                let years = f64::from(last - first).min(MAX_EXPERIENCE_YEARS);
                debug!(first, last, years, "experience estimated from year span");
                return ExperienceEstimate {
                    years,
                    source: EstimateSource::YearSpan,
                };
            }
        }

        ExperienceEstimate {
            years: 0.0,
            source: EstimateSource::NoEvidence,
        }
    }
}

/// Convenience entry point using the rule-based segmenter.
pub fn estimate_experience_years(text: &str, today: NaiveDate) -> f64 {
    ExperienceEstimator::default().estimate(text, today).years
}
