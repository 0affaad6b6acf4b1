use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::domain::DegreeLevel;
use super::text::contains_whole_word;
use super::vocabulary::Vocabulary;

/// Resolution rule when snippets mention several degree levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegreeMatchPolicy {
    /// First level in canonical order (highschool → phd) with any keyword hit.
    /// A resume naming both a bachelor and a master reports `bachelor`.
    #[default]
    FirstCanonical,
    /// Highest-ranked level with any keyword hit.
    Highest,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized degree policy '{0}' (expected first or highest)")]
pub struct UnknownDegreePolicy(pub String);

impl FromStr for DegreeMatchPolicy {
    type Err = UnknownDegreePolicy;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "first" | "first_canonical" => Ok(Self::FirstCanonical),
            "highest" => Ok(Self::Highest),
            other => Err(UnknownDegreePolicy(other.to_string())),
        }
    }
}

impl fmt::Display for DegreeMatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegreeMatchPolicy::FirstCanonical => f.write_str("first"),
            DegreeMatchPolicy::Highest => f.write_str("highest"),
        }
    }
}

/// Maps education snippets to a single degree level using whole-word keyword hits.
#[derive(Debug, Clone)]
pub struct DegreeClassifier {
    keywords: Vec<(DegreeLevel, Vec<String>)>,
    policy: DegreeMatchPolicy,
}

impl Default for DegreeClassifier {
    fn default() -> Self {
        Self::new(&Vocabulary::default(), DegreeMatchPolicy::default())
    }
}

impl DegreeClassifier {
    pub fn new(vocabulary: &Vocabulary, policy: DegreeMatchPolicy) -> Self {
        let keywords: Vec<(DegreeLevel, Vec<String>)> = vocabulary
            .degree_keywords()
            .iter()
            .map(|(level, words)| {
                let words: Vec<String> = words
                    .iter()
                    .map(|word| word.trim().to_lowercase())
                    .filter(|word| !word.is_empty())
                    .collect();
                (*level, words)
            })
            .collect();

        Self { keywords, policy }
    }

    pub fn policy(&self) -> DegreeMatchPolicy {
        self.policy
    }

    pub fn classify<S: AsRef<str>>(&self, snippets: &[S]) -> Option<DegreeLevel> {
        let text = snippets
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        let mut matched = self.keywords.iter().filter_map(|(level, words)| {
            words
                .iter()
                .any(|word| contains_whole_word(&text, word))
                .then_some(*level)
        });

        match self.policy {
            DegreeMatchPolicy::FirstCanonical => matched.next(),
            DegreeMatchPolicy::Highest => matched.max(),
        }
    }
}

/// Classifies with the built-in keyword sets and the first-canonical policy.
pub fn classify_degree_level<S: AsRef<str>>(snippets: &[S]) -> Option<DegreeLevel> {
    DegreeClassifier::default().classify(snippets)
}
