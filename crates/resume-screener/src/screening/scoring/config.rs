use serde::{Deserialize, Serialize};

/// Composite weighting of the four sub-scores; the defaults sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub keywords: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 0.55,
            experience: 0.25,
            education: 0.10,
            keywords: 0.10,
        }
    }
}
