use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use wildfire_readiness::error::AppError;
use wildfire_readiness::scoring::{LoadedModel, ModelLocator, RiskModel, FEATURE_NAMES};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) model: ModelSummary,
}

/// What the health check reports about the loaded classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct ModelSummary {
    pub(crate) model_type: String,
    pub(crate) model_path: String,
    pub(crate) features: Vec<&'static str>,
}

impl ModelSummary {
    pub(crate) fn from_loaded(loaded: &LoadedModel) -> Self {
        Self {
            model_type: loaded.model.model_type().to_string(),
            model_path: loaded.path.display().to_string(),
            features: FEATURE_NAMES.to_vec(),
        }
    }
}

/// Find and parse the classifier, searching the standard locations relative
/// to this crate after any explicit override.
pub(crate) fn load_model(path_override: Option<PathBuf>) -> Result<LoadedModel, AppError> {
    let locator = ModelLocator::standard(Path::new(env!("CARGO_MANIFEST_DIR")), path_override);
    Ok(locator.load()?)
}
