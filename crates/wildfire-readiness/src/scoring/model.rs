use serde::Serialize;

use super::features::FEATURE_COUNT;

/// Class index of the "low" readiness concern.
pub const LABEL_LOW: u8 = 0;
/// Class index of the "elevated" readiness concern.
pub const LABEL_ELEVATED: u8 = 1;

/// Unadjusted classifier output for one feature vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RawPrediction {
    pub label: u8,
    /// Probability per class, indexed by label.
    pub probabilities: [f64; 2],
}

impl RawPrediction {
    pub fn p_elevated(&self) -> f64 {
        self.probabilities[LABEL_ELEVATED as usize]
    }
}

/// Black-box binary classifier over the five readiness features.
///
/// Implementations receive the vector in training order and must not retain
/// state between calls; the service shares one instance across requests.
pub trait RiskModel: Send + Sync {
    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> Result<RawPrediction, ModelError>;

    /// Short name of the underlying estimator, surfaced by health checks.
    fn model_type(&self) -> &str;
}

/// Inference failure. Terminal for the request that triggered it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    #[error("model contains no estimators")]
    Empty,
    #[error("split references feature {index} but the model accepts {expected} features")]
    FeatureOutOfRange { index: usize, expected: usize },
    #[error("leaf has no training samples")]
    EmptyLeaf,
    #[error("inference failed: {0}")]
    Inference(String),
}
