use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::{json, Value};

use crate::scoring::features::{FeatureVector, FEATURE_COUNT};
use crate::scoring::model::{ModelError, RawPrediction, RiskModel, LABEL_ELEVATED, LABEL_LOW};
use crate::scoring::{scoring_router, ScoringService};

/// Returns the same elevated-risk probability for every input.
pub(super) struct FixedModel {
    pub(super) p_elevated: f64,
}

impl RiskModel for FixedModel {
    fn predict(&self, _features: &[f64; FEATURE_COUNT]) -> Result<RawPrediction, ModelError> {
        let label = if self.p_elevated > 0.5 {
            LABEL_ELEVATED
        } else {
            LABEL_LOW
        };
        Ok(RawPrediction {
            label,
            probabilities: [1.0 - self.p_elevated, self.p_elevated],
        })
    }

    fn model_type(&self) -> &str {
        "FixedModel"
    }
}

/// Captures every vector it is asked to score.
#[derive(Default)]
pub(super) struct RecordingModel {
    pub(super) seen: Mutex<Vec<[f64; FEATURE_COUNT]>>,
}

impl RecordingModel {
    pub(super) fn seen(&self) -> Vec<[f64; FEATURE_COUNT]> {
        self.seen.lock().expect("recording mutex poisoned").clone()
    }
}

impl RiskModel for RecordingModel {
    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> Result<RawPrediction, ModelError> {
        self.seen
            .lock()
            .expect("recording mutex poisoned")
            .push(*features);
        Ok(RawPrediction {
            label: LABEL_LOW,
            probabilities: [0.6, 0.4],
        })
    }

    fn model_type(&self) -> &str {
        "RecordingModel"
    }
}

/// Probability falls off linearly with distance, ignoring weather.
pub(super) struct DistanceDecayModel;

impl RiskModel for DistanceDecayModel {
    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> Result<RawPrediction, ModelError> {
        let p_elevated = (0.9 - features[4] / 250.0).clamp(0.05, 0.95);
        Ok(RawPrediction {
            label: if p_elevated > 0.5 {
                LABEL_ELEVATED
            } else {
                LABEL_LOW
            },
            probabilities: [1.0 - p_elevated, p_elevated],
        })
    }

    fn model_type(&self) -> &str {
        "DistanceDecayModel"
    }
}

pub(super) struct FailingModel;

impl RiskModel for FailingModel {
    fn predict(&self, _features: &[f64; FEATURE_COUNT]) -> Result<RawPrediction, ModelError> {
        Err(ModelError::Inference("estimator unavailable".to_string()))
    }

    fn model_type(&self) -> &str {
        "FailingModel"
    }
}

pub(super) fn service_with<M: RiskModel + 'static>(model: M) -> ScoringService<M> {
    ScoringService::new(Arc::new(model))
}

pub(super) fn router_with<M: RiskModel + 'static>(model: M) -> axum::Router {
    scoring_router(Arc::new(service_with(model)))
}

pub(super) fn features(
    tmax: f64,
    awnd: f64,
    prcp: f64,
    evap: f64,
    distance_to_fire_km: f64,
) -> FeatureVector {
    FeatureVector {
        tmax,
        awnd,
        prcp,
        evap,
        distance_to_fire_km,
    }
}

pub(super) fn summer_payload(distance_km: f64) -> Value {
    json!({
        "TMAX": 28,
        "AWND": 15,
        "PRCP": 0,
        "EVAP": 4.5,
        "DISTANCE_TO_FIRE_KM": distance_km,
    })
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
