use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;

use super::features::ValidationError;
use super::model::RiskModel;
use super::service::{DistanceProbe, RiskAssessment, ScoringService};
use crate::error::AppError;

/// Router builder exposing the prediction and diagnostic endpoints.
pub fn scoring_router<M>(service: Arc<ScoringService<M>>) -> Router
where
    M: RiskModel + 'static,
{
    Router::new()
        .route("/predict", post(predict_handler::<M>))
        .route("/test_distance", get(distance_probe_handler::<M>))
        .with_state(service)
}

pub(crate) async fn predict_handler<M>(
    State(service): State<Arc<ScoringService<M>>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<RiskAssessment>, AppError>
where
    M: RiskModel + 'static,
{
    let Json(payload) =
        payload.map_err(|rejection| ValidationError::Malformed(rejection.body_text()))?;
    let assessment = service.score(&payload)?;
    Ok(Json(assessment))
}

pub(crate) async fn distance_probe_handler<M>(
    State(service): State<Arc<ScoringService<M>>>,
) -> Result<Json<DistanceProbe>, AppError>
where
    M: RiskModel + 'static,
{
    let probe = service.distance_probe()?;
    Ok(Json(probe))
}
