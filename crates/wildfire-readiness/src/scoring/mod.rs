//! Feature-to-risk scoring pipeline.
//!
//! Requests are validated into a [`FeatureVector`], passed to a [`RiskModel`]
//! in training order, corrected by the precipitation adjustment layer, banded
//! for confidence, and explained in plain language.

pub mod adjust;
pub mod confidence;
pub mod explain;
pub mod features;
pub mod forest;
pub mod loader;
pub mod model;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use adjust::{adjust, adjust_risk, AdjustedRisk, AdjustmentRule};
pub use confidence::{band, ConfidenceLevel};
pub use explain::explain;
pub use features::{FeatureVector, ValidationError, FEATURE_COUNT, FEATURE_NAMES};
pub use forest::{ForestFormatError, ForestModel};
pub use loader::{LoadedModel, ModelLocator, StartupError, MODEL_FILE_NAME};
pub use model::{ModelError, RawPrediction, RiskModel, LABEL_ELEVATED, LABEL_LOW};
pub use router::scoring_router;
pub use service::{
    DistanceProbe, DistanceProbeResult, RiskAssessment, ScoringError, ScoringService,
};
