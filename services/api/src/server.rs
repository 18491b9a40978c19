use crate::cli::ServeArgs;
use crate::infra::{load_model, AppState, ModelSummary};
use crate::routes::with_service_routes;
use axum::{Extension, Router};
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use wildfire_readiness::config::AppConfig;
use wildfire_readiness::error::AppError;
use wildfire_readiness::scoring::{ScoringService, FEATURE_NAMES};
use wildfire_readiness::telemetry;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(model) = args.model.take() {
        config.model.path_override = Some(model);
    }

    telemetry::init(&config.telemetry)?;

    let loaded = load_model(config.model.path_override.clone())?;
    let summary = ModelSummary::from_loaded(&loaded);
    info!(
        model_path = %summary.model_path,
        model_type = %summary.model_type,
        features = ?FEATURE_NAMES,
        "model ready for predictions"
    );

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        model: summary,
    };

    let scoring_service = Arc::new(ScoringService::new(Arc::new(loaded.model)));

    let app = with_service_routes(scoring_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);
    let app = with_http_layers(app, config.telemetry.request_tracing);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "wildfire readiness service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Cross-origin access for the browser client, plus per-request tracing when enabled.
pub(crate) fn with_http_layers(app: Router, request_tracing: bool) -> Router {
    let app = app.layer(CorsLayer::permissive());
    if request_tracing {
        app.layer(TraceLayer::new_for_http())
    } else {
        app
    }
}
