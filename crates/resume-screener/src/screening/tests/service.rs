use super::common::*;
use crate::screening::criteria::FilterCriteria;
use crate::screening::domain::{CandidateId, DegreeLevel};
use crate::screening::ingest::IngestError;
use crate::screening::repository::{CandidateRepository, RepositoryError};
use crate::screening::ScreeningServiceError;

fn shortlist_criteria() -> FilterCriteria {
    FilterCriteria::default()
        .with_skills(["Python", "Docker"])
        .with_min_experience(3.0)
        .with_education(DegreeLevel::Bachelor)
        .with_keywords(["leadership"])
}

#[test]
fn ingest_assigns_sequential_identifiers_and_parses_contacts() {
    let (service, repository) = build_service();

    let first = service.ingest(alice(), fixed_now()).expect("alice ingests");
    let second = service.ingest(budi(), fixed_now()).expect("budi ingests");

    assert_eq!(first.id, CandidateId::from("cand-000001"));
    assert_eq!(second.id, CandidateId::from("cand-000002"));
    assert_eq!(first.emails, vec!["alice.tan@example.com".to_string()]);
    assert_eq!(first.phones, vec!["+62 812 3456 7890".to_string()]);
    assert_eq!(
        first.skills_detected,
        vec!["Python", "Django", "SQL", "AWS", "Docker", "Git"]
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>()
    );
    assert_eq!(first.uploaded_at, fixed_now());
    assert_eq!(second.total_experience_years, 1.6);
    assert_eq!(repository.len().expect("len"), 2);
}

#[test]
fn ingest_rejects_blank_text() {
    let (service, _) = build_service();

    match service.ingest(submission("scan.pdf", "  \n "), fixed_now()) {
        Err(ScreeningServiceError::Ingest(IngestError::EmptyText { filename })) => {
            assert_eq!(filename, "scan.pdf");
        }
        other => panic!("expected empty text error, got {other:?}"),
    }
}

#[test]
fn ingest_batch_skips_blank_submissions() {
    let (service, _) = build_service();

    let stored = service
        .ingest_batch(vec![submission("scan.pdf", ""), alice()], fixed_now())
        .expect("one resume accepted");

    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].filename, "alice_tan.pdf");
}

#[test]
fn ingest_batch_without_valid_resumes_fails() {
    let (service, _) = build_service();

    let result = service.ingest_batch(vec![submission("scan.pdf", " ")], fixed_now());
    assert!(matches!(result, Err(ScreeningServiceError::NoValidResumes)));
}

#[test]
fn get_propagates_not_found() {
    let (service, _) = build_service();

    match service.get(&CandidateId::from("cand-999999")) {
        Err(ScreeningServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found error, got {other:?}"),
    }
}

#[test]
fn filter_ranks_every_stored_candidate() {
    let service = seeded_service();

    let views = service.filter(&shortlist_criteria()).expect("filter runs");

    assert_eq!(views.len(), 2);
    let alice = &views[0];
    assert_eq!(alice.filename, "alice_tan.pdf");
    assert_eq!(alice.score, 100.0);
    assert!(alice.passed);
    assert_eq!(alice.education_found_level, Some(DegreeLevel::Bachelor));
    assert!(alice.reject_reasons.is_empty());

    let budi = &views[1];
    assert!(!budi.passed);
    assert_eq!(budi.education_found_level, Some(DegreeLevel::Diploma));
    assert_eq!(budi.reject_reasons.len(), 4);
    assert!(budi.score < alice.score);
}

#[test]
fn filter_on_empty_store_returns_nothing() {
    let (service, _) = build_service();
    let views = service
        .filter(&FilterCriteria::default())
        .expect("filter runs");
    assert!(views.is_empty());
}

#[test]
fn compare_requires_two_identifiers() {
    let service = seeded_service();

    let result = service.compare(&[CandidateId::from("cand-000001")], &shortlist_criteria());
    assert!(matches!(
        result,
        Err(ScreeningServiceError::InsufficientCandidates { found: 1 })
    ));
}

#[test]
fn compare_requires_two_known_candidates() {
    let service = seeded_service();

    let ids = [
        CandidateId::from("cand-000001"),
        CandidateId::from("cand-404404"),
    ];
    let result = service.compare(&ids, &shortlist_criteria());
    assert!(matches!(
        result,
        Err(ScreeningServiceError::InsufficientCandidates { found: 1 })
    ));
}

#[test]
fn compare_scores_requested_candidates_side_by_side() {
    let service = seeded_service();
    service
        .ingest(submission("third.pdf", "Python intern, 2023 - 2023"), fixed_now())
        .expect("third ingests");

    let ids = [
        CandidateId::from("cand-000002"),
        CandidateId::from("cand-000001"),
    ];
    let views = service
        .compare(&ids, &shortlist_criteria())
        .expect("comparison runs");

    let order: Vec<&str> = views.iter().map(|view| view.id.as_str()).collect();
    assert_eq!(order, vec!["cand-000001", "cand-000002"]);
}

#[test]
fn clear_drops_every_record() {
    let service = seeded_service();

    assert_eq!(service.clear().expect("clear"), 2);
    assert_eq!(service.stored().expect("stored"), 0);
}

#[test]
fn export_writes_header_and_one_row_per_candidate() {
    let service = seeded_service();
    let mut buffer = Vec::new();

    let rows = service
        .export_csv(&shortlist_criteria(), &mut buffer)
        .expect("export runs");

    assert_eq!(rows, 2);
    let csv = String::from_utf8(buffer).expect("utf8 csv");
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("id,filename,email,phone,score,passed,"));
    assert!(lines[0].ends_with("skills_pct,experience_pct,education_pct,keywords_pct"));
    assert!(lines[1].starts_with("cand-000001,alice_tan.pdf,alice.tan@example.com,"));
    assert!(lines[1].contains(",python;docker,python;docker,,"));
    assert!(lines[2].contains("diploma"));
}

#[test]
fn repository_failures_surface_as_repository_errors() {
    let service = unavailable_service();

    assert!(matches!(
        service.ingest(alice(), fixed_now()),
        Err(ScreeningServiceError::Repository(RepositoryError::Unavailable(_)))
    ));
    assert!(matches!(
        service.filter(&FilterCriteria::default()),
        Err(ScreeningServiceError::Repository(RepositoryError::Unavailable(_)))
    ));
}

#[test]
fn job_description_prefills_filter_request() {
    let (service, _) = build_service();

    let profile = service.analyze_job_description(
        "We need 3+ years of Python and AWS, a Master degree, and strong teamwork.",
    );

    assert_eq!(profile.skills, vec!["Python".to_string(), "AWS".to_string()]);
    assert_eq!(profile.min_experience, Some(3));
    assert_eq!(profile.education, Some(DegreeLevel::Master));
    assert_eq!(profile.keywords, vec!["teamwork".to_string()]);

    let criteria = FilterCriteria::try_from(profile.to_filter_request()).expect("valid criteria");
    assert_eq!(criteria.required_education, Some(DegreeLevel::Master));
    assert_eq!(criteria.min_experience, Some(3.0));
}
