use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_screening_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use resume_screener::config::AppConfig;
use resume_screener::error::AppError;
use resume_screener::screening::{InMemoryCandidateRepository, ScreeningService};
use resume_screener::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let vocabulary = config.screening.vocabulary();
    info!(
        skills = vocabulary.skills().len(),
        degree_policy = %config.screening.degree_policy,
        custom_skills = config.screening.skills_file.is_some(),
        "screening vocabulary loaded"
    );
    let repository = Arc::new(InMemoryCandidateRepository::default());
    let screening_service = Arc::new(ScreeningService::new(
        repository,
        vocabulary,
        config.screening.degree_policy,
    ));

    let app = with_screening_routes(screening_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "resume screening service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
