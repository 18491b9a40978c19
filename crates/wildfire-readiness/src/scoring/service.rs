use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use super::adjust::adjust_risk;
use super::confidence::{band, ConfidenceLevel};
use super::explain::explain;
use super::features::{FeatureVector, ValidationError, FEATURE_NAMES};
use super::model::{ModelError, RiskModel};

/// Scored response for one feature set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub p_elevated: f64,
    pub risk_level: u8,
    pub confidence: ConfidenceLevel,
    pub features: FeatureVector,
    pub why: Vec<String>,
}

/// Weather held fixed by the distance diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProbeWeather {
    #[serde(rename = "TMAX")]
    pub tmax: f64,
    #[serde(rename = "AWND")]
    pub awnd: f64,
    #[serde(rename = "PRCP")]
    pub prcp: f64,
    #[serde(rename = "EVAP")]
    pub evap: f64,
}

pub const PROBE_WEATHER: ProbeWeather = ProbeWeather {
    tmax: 28.0,
    awnd: 15.0,
    prcp: 0.0,
    evap: 4.5,
};

pub const PROBE_DISTANCES_KM: [f64; 3] = [5.0, 60.0, 200.0];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceProbeResult {
    pub distance_km: f64,
    pub p_elevated: f64,
    pub risk_level: u8,
}

/// Raw model output across distances with weather held constant, used to
/// sanity-check that proximity moves the prediction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceProbe {
    pub test: &'static str,
    pub fixed_weather: ProbeWeather,
    pub results: Vec<DistanceProbeResult>,
    pub expected: &'static str,
}

/// Orchestrates validation, inference, adjustment, banding, and rationale.
pub struct ScoringService<M> {
    model: Arc<M>,
}

impl<M> ScoringService<M>
where
    M: RiskModel + 'static,
{
    pub fn new(model: Arc<M>) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Validate a request body and score it.
    pub fn score(&self, payload: &Value) -> Result<RiskAssessment, ScoringError> {
        let features = FeatureVector::from_payload(payload)?;
        debug!(?features, "validated prediction request");
        Ok(self.assess(features)?)
    }

    /// Score an already-typed feature set.
    pub fn assess(&self, features: FeatureVector) -> Result<RiskAssessment, ModelError> {
        let vector = features.to_array();
        debug!(order = ?FEATURE_NAMES, ?vector, "invoking model");

        let raw = self.model.predict(&vector)?;
        debug!(
            raw_label = raw.label,
            raw_p_elevated = raw.p_elevated(),
            "model output"
        );

        let adjusted = adjust_risk(raw.p_elevated(), features.prcp, features.evap);
        let confidence = band(adjusted.p_elevated);
        let why = explain(&features, adjusted.p_elevated);

        info!(
            risk_level = adjusted.risk_level,
            p_elevated = adjusted.p_elevated,
            confidence = confidence.label(),
            adjustments = adjusted.applied.len(),
            "risk assessed"
        );

        Ok(RiskAssessment {
            p_elevated: adjusted.p_elevated,
            risk_level: adjusted.risk_level,
            confidence,
            features,
            why,
        })
    }

    /// Run the fixed-weather distance diagnostic against the raw model.
    pub fn distance_probe(&self) -> Result<DistanceProbe, ModelError> {
        let mut results = Vec::with_capacity(PROBE_DISTANCES_KM.len());
        for distance_km in PROBE_DISTANCES_KM {
            let features = FeatureVector {
                tmax: PROBE_WEATHER.tmax,
                awnd: PROBE_WEATHER.awnd,
                prcp: PROBE_WEATHER.prcp,
                evap: PROBE_WEATHER.evap,
                distance_to_fire_km: distance_km,
            };
            let raw = self.model.predict(&features.to_array())?;
            results.push(DistanceProbeResult {
                distance_km,
                p_elevated: raw.p_elevated(),
                risk_level: raw.label,
            });
        }

        Ok(DistanceProbe {
            test: "Distance integration test",
            fixed_weather: PROBE_WEATHER,
            results,
            expected: "Probability should decrease as distance increases (5km > 60km > 200km)",
        })
    }
}

/// Error raised while scoring a request.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Prediction failed: {0}")]
    Model(#[from] ModelError),
}
