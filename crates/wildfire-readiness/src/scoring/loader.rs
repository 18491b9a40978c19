use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::forest::{ForestFormatError, ForestModel};

pub const MODEL_FILE_NAME: &str = "wildfire_readiness_rf_model.json";

/// Ordered list of places the serialized classifier may live. The first path
/// that exists wins; later candidates are not inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelLocator {
    candidates: Vec<PathBuf>,
}

impl ModelLocator {
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    /// Service-local `models/`, the workspace root `models/`, then `models/`
    /// under the working directory. An explicit override is tried first.
    pub fn standard(service_dir: &Path, path_override: Option<PathBuf>) -> Self {
        let mut candidates: Vec<PathBuf> = path_override.into_iter().collect();
        candidates.push(service_dir.join("models").join(MODEL_FILE_NAME));
        candidates.push(service_dir.join("../../models").join(MODEL_FILE_NAME));
        candidates.push(Path::new("models").join(MODEL_FILE_NAME));
        Self { candidates }
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    pub fn locate(&self) -> Result<&Path, StartupError> {
        self.candidates
            .iter()
            .find(|candidate| {
                let exists = candidate.is_file();
                debug!(path = %candidate.display(), exists, "checking model candidate");
                exists
            })
            .map(PathBuf::as_path)
            .ok_or_else(|| StartupError::ModelNotFound {
                tried: self.candidates.clone(),
            })
    }

    pub fn load(&self) -> Result<LoadedModel, StartupError> {
        let path = self.locate()?.to_path_buf();
        LoadedModel::from_path(path)
    }
}

/// A classifier together with where it was read from.
#[derive(Debug, Clone)]
pub struct LoadedModel {
    pub model: ForestModel,
    pub path: PathBuf,
}

impl LoadedModel {
    pub fn from_path(path: PathBuf) -> Result<Self, StartupError> {
        let raw = fs::read_to_string(&path).map_err(|source| StartupError::Read {
            path: path.clone(),
            source,
        })?;
        let model = ForestModel::from_json(&raw).map_err(|source| StartupError::ModelInvalid {
            path: path.clone(),
            source,
        })?;

        info!(
            path = %path.display(),
            model_type = %model.model_type,
            trees = model.trees.len(),
            "model loaded"
        );

        Ok(Self { model, path })
    }
}

/// Failures that prevent the service from starting.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("model file not found in any of these locations:\n{}", list_paths(.tried))]
    ModelNotFound { tried: Vec<PathBuf> },
    #[error("failed to read model file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("model file {} is not a usable classifier: {source}", .path.display())]
    ModelInvalid {
        path: PathBuf,
        source: ForestFormatError,
    },
}

fn list_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| format!("  - {}", path.display()))
        .collect::<Vec<_>>()
        .join("\n")
}
