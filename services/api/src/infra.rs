use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use resume_screener::screening::CandidateSubmission;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

const RESUME_EXTENSION: &str = "txt";

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Midnight UTC of `today`, or the current instant when no date is pinned.
pub(crate) fn screening_clock(today: Option<NaiveDate>) -> DateTime<Utc> {
    match today {
        Some(date) => Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)),
        None => Utc::now(),
    }
}

/// Expands directories into their `.txt` files; explicit file paths are kept as given.
pub(crate) fn collect_resume_files(paths: &[PathBuf]) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut found: Vec<PathBuf> = fs::read_dir(path)?
                .filter_map(|entry| entry.ok().map(|entry| entry.path()))
                .filter(|candidate| candidate.is_file() && has_resume_extension(candidate))
                .collect();
            found.sort();
            files.extend(found);
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

fn has_resume_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| extension.eq_ignore_ascii_case(RESUME_EXTENSION))
        .unwrap_or(false)
}

pub(crate) fn read_submission(path: &Path) -> io::Result<CandidateSubmission> {
    let text = fs::read_to_string(path)?;
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(CandidateSubmission { filename, text })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).expect("create scratch dir");
        dir
    }

    #[test]
    fn parse_date_accepts_iso_dates() {
        assert_eq!(
            parse_date(" 2024-01-05 "),
            Ok(NaiveDate::from_ymd_opt(2024, 1, 5).expect("valid date"))
        );
        assert!(parse_date("05/01/2024").is_err());
    }

    #[test]
    fn pinned_clock_starts_at_midnight() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).expect("valid date");
        let now = screening_clock(Some(date));
        assert_eq!(now.date_naive(), date);
        assert_eq!(now.time(), NaiveTime::MIN);
    }

    #[test]
    fn directories_expand_to_sorted_text_files() {
        let dir = scratch_dir("resume-files");
        fs::write(dir.join("b.txt"), "Bravo").expect("write b");
        fs::write(dir.join("a.TXT"), "Alpha").expect("write a");
        fs::write(dir.join("notes.md"), "skip").expect("write notes");

        let files = collect_resume_files(&[dir.clone()]).expect("directory readable");
        let names: Vec<String> = files
            .iter()
            .filter_map(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.TXT".to_string(), "b.txt".to_string()]);

        let submission = read_submission(&files[1]).expect("readable");
        assert_eq!(submission.filename, "b.txt");
        assert_eq!(submission.text, "Bravo");

        let _ = fs::remove_dir_all(&dir);
    }
}
