use crate::infra::{collect_resume_files, read_submission, screening_clock};
use chrono::NaiveDate;
use clap::Args;
use resume_screener::config::AppConfig;
use resume_screener::error::AppError;
use resume_screener::screening::{
    analyze_job_description, write_csv, CandidateScoreView, DegreeClassifier, FilterCriteria,
    FilterRequest, InMemoryCandidateRepository, ScreeningService,
};
use serde_json::json;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ScreenArgs {
    /// Resume text files or directories containing `.txt` resumes
    #[arg(required = true)]
    pub(crate) paths: Vec<PathBuf>,
    /// Required skill (repeat or comma-separate)
    #[arg(long = "skill", value_delimiter = ',')]
    pub(crate) skills: Vec<String>,
    /// Required keyword (repeat or comma-separate)
    #[arg(long = "keyword", value_delimiter = ',')]
    pub(crate) keywords: Vec<String>,
    /// Minimum years of experience
    #[arg(long)]
    pub(crate) min_experience: Option<f64>,
    /// Minimum education level (highschool, diploma, bachelor, master, phd)
    #[arg(long)]
    pub(crate) education: Option<String>,
    /// Minimum composite score between 0 and 100
    #[arg(long)]
    pub(crate) min_score: Option<f64>,
    /// Decision mode: strict or ranking
    #[arg(long)]
    pub(crate) mode: Option<String>,
    /// Date used to resolve "Present" in resumes (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Write the shortlist to this CSV file instead of printing a table
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct AnalyzeJdArgs {
    /// Plain-text job description
    pub(crate) file: PathBuf,
}

pub(crate) fn run_screen(args: ScreenArgs) -> Result<(), AppError> {
    let ScreenArgs {
        paths,
        skills,
        keywords,
        min_experience,
        education,
        min_score,
        mode,
        today,
        csv,
    } = args;

    let config = AppConfig::load()?;
    let criteria = FilterCriteria::try_from(FilterRequest {
        skills,
        min_experience,
        education,
        keywords,
        min_score,
        mode,
    })?;

    let files = collect_resume_files(&paths)?;
    if files.is_empty() {
        return Err(AppError::InvalidInput(
            "no .txt resumes found in the given paths".to_string(),
        ));
    }
    let submissions = files
        .iter()
        .map(|path| read_submission(path))
        .collect::<Result<Vec<_>, _>>()?;
    let submitted = submissions.len();

    let service = ScreeningService::new(
        Arc::new(InMemoryCandidateRepository::default()),
        config.screening.vocabulary(),
        config.screening.degree_policy,
    );
    let stored = service.ingest_batch(submissions, screening_clock(today))?;
    let views = service.filter(&criteria)?;

    if stored.len() < submitted {
        println!(
            "Skipped {} resume(s) without extractable text",
            submitted - stored.len()
        );
    }

    match csv {
        Some(path) => {
            let writer = BufWriter::new(File::create(&path)?);
            write_csv(&views, writer)?;
            println!("Wrote {} candidate(s) to {}", views.len(), path.display());
        }
        None => render_shortlist(&views),
    }

    Ok(())
}

pub(crate) fn run_analyze_jd(args: AnalyzeJdArgs) -> Result<(), AppError> {
    let text = std::fs::read_to_string(&args.file)?;
    if text.trim().is_empty() {
        return Err(AppError::InvalidInput(format!(
            "job description '{}' is empty",
            args.file.display()
        )));
    }

    let config = AppConfig::load()?;
    let vocabulary = config.screening.vocabulary();
    let classifier = DegreeClassifier::new(&vocabulary, config.screening.degree_policy);
    let profile = analyze_job_description(&text, &vocabulary, &classifier);

    let output = json!({
        "filename": args.file.file_name().map(|name| name.to_string_lossy().into_owned()),
        "criteria": profile.to_filter_request(),
        "profile": profile,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn render_shortlist(views: &[CandidateScoreView]) {
    let passed = views.iter().filter(|view| view.passed).count();
    println!("Shortlist: {} of {} candidate(s) passed", passed, views.len());
    println!(
        "{:<4} {:>7} {:<5} {:>6} {:<10} Candidate",
        "Rank", "Score", "Pass", "Years", "Education"
    );

    for (index, view) in views.iter().enumerate() {
        let education = view
            .education_found_level
            .map(|level| level.label())
            .unwrap_or("-");
        println!(
            "{:<4} {:>7.2} {:<5} {:>6.2} {:<10} {} ({})",
            index + 1,
            view.score,
            if view.passed { "yes" } else { "no" },
            view.total_experience_years,
            education,
            view.filename,
            view.id
        );
        for reason in &view.reject_reasons {
            println!("       - {reason}");
        }
    }
}
