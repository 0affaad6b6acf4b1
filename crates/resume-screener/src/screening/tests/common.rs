use std::sync::Arc;

use axum::response::Response;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde_json::Value;

use crate::screening::domain::{CandidateId, CandidateRecord, CandidateSubmission};
use crate::screening::repository::{CandidateRepository, RepositoryError};
use crate::screening::{
    screening_router, DegreeMatchPolicy, InMemoryCandidateRepository, ScreeningService, Vocabulary,
};

pub(super) const ALICE_RESUME: &str = "Alice Tan\n\
alice.tan@example.com | +62 812 3456 7890\n\
Senior Backend Engineer at Nusantara Tech, Jan 2018 - Dec 2022\n\
Backend Engineer at Kopi Labs, Mar 2021 - Present\n\
Skills: Python, Django, Docker, AWS, SQL, Git\n\
Bachelor of Computer Science, Universitas Indonesia\n\
Known for leadership and communication across teams.";

pub(super) const BUDI_RESUME: &str = "Budi Santoso\n\
budi@example.com\n\
Junior Developer at Warung Digital, Jun 2022 - Present\n\
Skills: JavaScript, React, HTML, CSS\n\
Diploma in Informatics, Politeknik Bandung";

pub(super) fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 5, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 5).expect("valid date")
}

pub(super) fn submission(filename: &str, text: &str) -> CandidateSubmission {
    CandidateSubmission {
        filename: filename.to_string(),
        text: text.to_string(),
    }
}

pub(super) fn alice() -> CandidateSubmission {
    submission("alice_tan.pdf", ALICE_RESUME)
}

pub(super) fn budi() -> CandidateSubmission {
    submission("budi_santoso.pdf", BUDI_RESUME)
}

/// Hand-built record for scoring tests that bypass ingestion.
pub(super) fn record(id: &str, text: &str, years: f64, education: &[&str]) -> CandidateRecord {
    CandidateRecord {
        id: CandidateId::from(id),
        filename: format!("{id}.pdf"),
        emails: Vec::new(),
        phones: Vec::new(),
        skills_detected: Vec::new(),
        education: education.iter().map(|line| line.to_string()).collect(),
        total_experience_years: years,
        full_text: text.to_string(),
        uploaded_at: fixed_now(),
    }
}

pub(super) type MemoryRepository = InMemoryCandidateRepository;

pub(super) fn build_service() -> (
    ScreeningService<MemoryRepository>,
    Arc<MemoryRepository>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let service = ScreeningService::new(
        repository.clone(),
        Vocabulary::default(),
        DegreeMatchPolicy::default(),
    );
    (service, repository)
}

pub(super) fn seeded_service() -> ScreeningService<MemoryRepository> {
    let (service, _) = build_service();
    service
        .ingest_batch(vec![alice(), budi()], fixed_now())
        .expect("seed resumes ingest");
    service
}

pub(super) struct UnavailableRepository;

impl CandidateRepository for UnavailableRepository {
    fn insert(&self, _record: CandidateRecord) -> Result<CandidateRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &CandidateId) -> Result<Option<CandidateRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch_many(&self, _ids: &[CandidateId]) -> Result<Vec<CandidateRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn all(&self) -> Result<Vec<CandidateRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn clear(&self) -> Result<usize, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn len(&self) -> Result<usize, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn unavailable_service() -> ScreeningService<UnavailableRepository> {
    ScreeningService::new(
        Arc::new(UnavailableRepository),
        Vocabulary::default(),
        DegreeMatchPolicy::default(),
    )
}

pub(super) fn screening_router_with_service<R>(service: ScreeningService<R>) -> axum::Router
where
    R: CandidateRepository + 'static,
{
    screening_router(Arc::new(service))
}

pub(super) async fn read_body(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .expect("read body")
        .to_vec()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = read_body(response).await;
    serde_json::from_slice(&body).expect("json payload")
}
