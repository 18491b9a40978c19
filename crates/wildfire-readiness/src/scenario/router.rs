use axum::{extract::rejection::JsonRejection, routing::post, Json, Router};
use serde::Deserialize;

use super::estimator::{estimate, ScenarioRecord};
use super::zip::{ScenarioError, ZipCode};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub(crate) struct ScenarioRequest {
    #[serde(default)]
    pub(crate) zip_code: String,
}

/// Router exposing scenario generation. Stateless: every lookup is static.
pub fn scenario_router() -> Router {
    Router::new().route("/scenario", post(scenario_handler))
}

pub(crate) async fn scenario_handler(
    payload: Result<Json<ScenarioRequest>, JsonRejection>,
) -> Result<Json<ScenarioRecord>, AppError> {
    let Json(request) = payload.map_err(|rejection| ScenarioError::InvalidZip {
        input: rejection.body_text(),
    })?;
    let zip = ZipCode::parse(&request.zip_code)?;
    let record = estimate(zip);
    tracing::info!(%zip, scenario = record.scenario, "scenario generated");
    Ok(Json(record))
}
