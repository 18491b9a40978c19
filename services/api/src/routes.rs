use crate::infra::{AppState, ModelSummary};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use wildfire_readiness::scenario::{demo_tiles, scenario_router, TileCatalog};
use wildfire_readiness::scoring::{scoring_router, RiskModel, ScoringService};

pub(crate) fn with_service_routes<M>(service: Arc<ScoringService<M>>) -> axum::Router
where
    M: RiskModel + 'static,
{
    scoring_router(service)
        .merge(scenario_router())
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/tiles", axum::routing::get(tiles_endpoint))
}

#[derive(Debug, Serialize)]
pub(crate) struct HealthResponse {
    pub(crate) status: &'static str,
    pub(crate) model_loaded: bool,
    #[serde(flatten)]
    pub(crate) model: ModelSummary,
}

/// Startup fails without a model, so a serving process always reports it loaded.
pub(crate) async fn healthcheck(Extension(state): Extension<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        model_loaded: true,
        model: state.model,
    })
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Acquire);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn tiles_endpoint() -> Json<TileCatalog> {
    Json(demo_tiles())
}
