use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use super::criteria::{CriteriaError, FilterCriteria, FilterRequest};
use super::domain::{CandidateId, CandidateSubmission};
use super::export::export_filename;
use super::job_description::JobDescriptionProfile;
use super::repository::{CandidateRepository, RepositoryError};
use super::service::{ScreeningService, ScreeningServiceError};
use super::views::CandidateSummary;

/// Batch of already-extracted resumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadRequest {
    #[serde(default)]
    pub resumes: Vec<CandidateSubmission>,
}

/// Candidate identifiers plus the same criteria fields `/filter` accepts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompareRequest {
    #[serde(default)]
    pub ids: Vec<CandidateId>,
    #[serde(flatten)]
    pub criteria: FilterRequest,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDescriptionRequest {
    #[serde(default)]
    pub filename: Option<String>,
    pub text: String,
}

#[derive(Debug, Serialize)]
struct JobDescriptionResponse {
    filename: Option<String>,
    #[serde(flatten)]
    profile: JobDescriptionProfile,
    criteria: FilterRequest,
}

/// Router builder exposing the recruiter-facing screening endpoints.
pub fn screening_router<R>(service: Arc<ScreeningService<R>>) -> Router
where
    R: CandidateRepository + 'static,
{
    Router::new()
        .route("/api/v1/resumes", post(upload_handler::<R>))
        .route("/api/v1/resumes/:candidate_id", get(candidate_handler::<R>))
        .route("/api/v1/filter", post(filter_handler::<R>))
        .route("/api/v1/export", post(export_handler::<R>))
        .route("/api/v1/compare", post(compare_handler::<R>))
        .route("/api/v1/job-descriptions", post(job_description_handler::<R>))
        .route("/api/v1/clear", post(clear_handler::<R>))
        .with_state(service)
}

pub(crate) async fn upload_handler<R>(
    State(service): State<Arc<ScreeningService<R>>>,
    axum::Json(request): axum::Json<UploadRequest>,
) -> Response
where
    R: CandidateRepository + 'static,
{
    let stored = match service.ingest_batch(request.resumes, Utc::now()) {
        Ok(stored) => stored,
        Err(error) => return error.into_response(),
    };
    let total_stored = match service.stored() {
        Ok(total) => total,
        Err(error) => return error.into_response(),
    };

    let uploaded: Vec<CandidateSummary> = stored.iter().map(CandidateSummary::from).collect();
    let payload = json!({
        "uploaded": uploaded,
        "total_stored": total_stored,
    });
    (StatusCode::CREATED, axum::Json(payload)).into_response()
}

pub(crate) async fn candidate_handler<R>(
    State(service): State<Arc<ScreeningService<R>>>,
    Path(candidate_id): Path<String>,
) -> Response
where
    R: CandidateRepository + 'static,
{
    let id = CandidateId(candidate_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(CandidateSummary::from(&record))).into_response(),
        Err(ScreeningServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "candidate not found",
                "id": id.0,
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => other.into_response(),
    }
}

pub(crate) async fn filter_handler<R>(
    State(service): State<Arc<ScreeningService<R>>>,
    axum::Json(request): axum::Json<FilterRequest>,
) -> Response
where
    R: CandidateRepository + 'static,
{
    let criteria = match FilterCriteria::try_from(request) {
        Ok(criteria) => criteria,
        Err(error) => return error.into_response(),
    };

    match service.filter(&criteria) {
        Ok(candidates) if candidates.is_empty() => {
            let payload = json!({
                "candidates": candidates,
                "total": 0,
                "message": "No resumes uploaded yet.",
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Ok(candidates) => {
            let payload = json!({
                "total": candidates.len(),
                "candidates": candidates,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error.into_response(),
    }
}

pub(crate) async fn export_handler<R>(
    State(service): State<Arc<ScreeningService<R>>>,
    axum::Json(request): axum::Json<FilterRequest>,
) -> Response
where
    R: CandidateRepository + 'static,
{
    let criteria = match FilterCriteria::try_from(request) {
        Ok(criteria) => criteria,
        Err(error) => return error.into_response(),
    };

    let mut buffer = Vec::new();
    if let Err(error) = service.export_csv(&criteria, &mut buffer) {
        return error.into_response();
    }

    let disposition = format!("attachment; filename={}", export_filename(Utc::now()));
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        buffer,
    )
        .into_response()
}

pub(crate) async fn compare_handler<R>(
    State(service): State<Arc<ScreeningService<R>>>,
    axum::Json(request): axum::Json<CompareRequest>,
) -> Response
where
    R: CandidateRepository + 'static,
{
    let CompareRequest { ids, criteria } = request;
    let criteria = match FilterCriteria::try_from(criteria) {
        Ok(criteria) => criteria,
        Err(error) => return error.into_response(),
    };

    match service.compare(&ids, &criteria) {
        Ok(candidates) => {
            (StatusCode::OK, axum::Json(json!({ "candidates": candidates }))).into_response()
        }
        Err(error) => error.into_response(),
    }
}

pub(crate) async fn job_description_handler<R>(
    State(service): State<Arc<ScreeningService<R>>>,
    axum::Json(request): axum::Json<JobDescriptionRequest>,
) -> Response
where
    R: CandidateRepository + 'static,
{
    if request.text.trim().is_empty() {
        let payload = json!({ "error": "job description contains no text" });
        return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
    }

    let profile = service.analyze_job_description(&request.text);
    let response = JobDescriptionResponse {
        filename: request.filename,
        criteria: profile.to_filter_request(),
        profile,
    };
    (StatusCode::OK, axum::Json(response)).into_response()
}

pub(crate) async fn clear_handler<R>(State(service): State<Arc<ScreeningService<R>>>) -> Response
where
    R: CandidateRepository + 'static,
{
    let result = service.clear().and_then(|_| service.stored());
    match result {
        Ok(total_stored) => {
            let payload = json!({
                "ok": true,
                "total_stored": total_stored,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error.into_response(),
    }
}

impl IntoResponse for CriteriaError {
    fn into_response(self) -> Response {
        let payload = json!({
            "error": self.to_string(),
        });
        (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
    }
}

impl IntoResponse for ScreeningServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            ScreeningServiceError::Ingest(_)
            | ScreeningServiceError::NoValidResumes
            | ScreeningServiceError::InsufficientCandidates { .. } => StatusCode::BAD_REQUEST,
            ScreeningServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
            ScreeningServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
            ScreeningServiceError::Repository(RepositoryError::Unavailable(_))
            | ScreeningServiceError::Export(_) => {
                warn!(error = %self, "screening request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let payload = json!({
            "error": self.to_string(),
        });
        (status, axum::Json(payload)).into_response()
    }
}
