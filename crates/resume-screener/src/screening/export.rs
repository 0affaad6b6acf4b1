use std::io::Write;

use chrono::{DateTime, Utc};

use super::domain::DegreeLevel;
use super::views::CandidateScoreView;

const LIST_SEPARATOR: &str = ";";

const HEADER: [&str; 21] = [
    "id",
    "filename",
    "email",
    "phone",
    "score",
    "passed",
    "skills_required",
    "skills_matched",
    "skills_missing",
    "experience_years",
    "education_required",
    "education_found_level",
    "keywords_required",
    "keywords_matched",
    "keywords_missing",
    "reject_reasons",
    "mode_used",
    "skills_pct",
    "experience_pct",
    "education_pct",
    "keywords_pct",
];

/// Writes the shortlist as CSV, one row per candidate in the given order.
pub fn write_csv<W: Write>(views: &[CandidateScoreView], writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADER)?;

    for view in views {
        let row: Vec<String> = vec![
            view.id.to_string(),
            view.filename.clone(),
            view.email.join(LIST_SEPARATOR),
            view.phone.join(LIST_SEPARATOR),
            view.score.to_string(),
            view.passed.to_string(),
            view.skills_required.join(LIST_SEPARATOR),
            view.skills_matched.join(LIST_SEPARATOR),
            view.skills_missing.join(LIST_SEPARATOR),
            view.total_experience_years.to_string(),
            level_cell(view.education_required),
            level_cell(view.education_found_level),
            view.keywords_required.join(LIST_SEPARATOR),
            view.keywords_matched.join(LIST_SEPARATOR),
            view.keywords_missing.join(LIST_SEPARATOR),
            view.reject_reasons.join(LIST_SEPARATOR),
            view.mode_used.to_string(),
            view.weights.skills.to_string(),
            view.weights.experience.to_string(),
            view.weights.education.to_string(),
            view.weights.keywords.to_string(),
        ];
        csv_writer.write_record(&row)?;
    }

    csv_writer.flush()?;
    Ok(())
}

fn level_cell(level: Option<DegreeLevel>) -> String {
    level.map(|level| level.label().to_string()).unwrap_or_default()
}

pub fn export_filename(now: DateTime<Utc>) -> String {
    format!("ats_export_{}.csv", now.format("%Y%m%d_%H%M%S"))
}
