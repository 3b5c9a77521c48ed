use crate::cli::ServeArgs;
use crate::infra::{
    default_scoring_config, AppState, InMemoryNotificationSink, InMemoryRelationshipRepository,
};
use crate::routes::with_compatibility_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use boundaryspace::compat::CompatibilityService;
use boundaryspace::config::AppConfig;
use boundaryspace::error::AppError;
use boundaryspace::telemetry;
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

    let repository = Arc::new(InMemoryRelationshipRepository::default());
    let sink = Arc::new(InMemoryNotificationSink::default());
    let compatibility_service = Arc::new(
        CompatibilityService::new(repository, sink, default_scoring_config())
            .with_notification_capacity(config.engine.notification_capacity),
    );

    let app = with_compatibility_routes(compatibility_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "compatibility service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
