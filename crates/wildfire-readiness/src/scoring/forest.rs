//! Random-forest classifier exported to JSON.
//!
//! Each tree is a recursive split/leaf structure. Samples whose feature value
//! is `<=` the split threshold go left. Leaves carry per-class training
//! counts, and the forest probability is the mean of each tree's normalized
//! leaf distribution, matching how scikit-learn averages `predict_proba`.

use serde::{Deserialize, Serialize};

use super::features::FEATURE_COUNT;
use super::model::{ModelError, RawPrediction, RiskModel, LABEL_ELEVATED, LABEL_LOW};

/// Internal decision node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Split {
    /// Index into the training-order feature vector.
    pub feature: usize,
    pub threshold: f64,
    pub left: Box<TreeNode>,
    pub right: Box<TreeNode>,
}

/// Terminal node holding training sample counts per class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leaf {
    pub counts: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeNode {
    Split(Split),
    Leaf(Leaf),
}

impl TreeNode {
    fn leaf_distribution(&self, features: &[f64; FEATURE_COUNT]) -> Result<[f64; 2], ModelError> {
        let mut node = self;
        loop {
            match node {
                TreeNode::Split(split) => {
                    let Some(value) = features.get(split.feature) else {
                        return Err(ModelError::FeatureOutOfRange {
                            index: split.feature,
                            expected: FEATURE_COUNT,
                        });
                    };
                    node = if *value <= split.threshold {
                        &split.left
                    } else {
                        &split.right
                    };
                }
                TreeNode::Leaf(leaf) => return leaf.distribution(),
            }
        }
    }

    fn validate(&self) -> Result<(), ModelError> {
        match self {
            TreeNode::Split(split) => {
                if split.feature >= FEATURE_COUNT {
                    return Err(ModelError::FeatureOutOfRange {
                        index: split.feature,
                        expected: FEATURE_COUNT,
                    });
                }
                split.left.validate()?;
                split.right.validate()
            }
            TreeNode::Leaf(leaf) => leaf.distribution().map(|_| ()),
        }
    }
}

impl Leaf {
    fn distribution(&self) -> Result<[f64; 2], ModelError> {
        let [low, elevated] = self.counts;
        let total = low + elevated;
        if low < 0.0 || elevated < 0.0 || total.is_nan() || total <= 0.0 {
            return Err(ModelError::EmptyLeaf);
        }
        Ok([low / total, elevated / total])
    }
}

/// Serialized forest as written by the export step of the training pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForestModel {
    #[serde(default = "default_model_type")]
    pub model_type: String,
    pub n_features: usize,
    pub trees: Vec<TreeNode>,
}

fn default_model_type() -> String {
    "RandomForestClassifier".to_string()
}

impl ForestModel {
    pub fn from_json(raw: &str) -> Result<Self, ForestFormatError> {
        let model: Self = serde_json::from_str(raw)?;
        model.validate()?;
        Ok(model)
    }

    /// Structural checks run once at load so inference cannot trip over them.
    pub fn validate(&self) -> Result<(), ForestFormatError> {
        if self.n_features != FEATURE_COUNT {
            return Err(ForestFormatError::FeatureCount {
                found: self.n_features,
                expected: FEATURE_COUNT,
            });
        }
        if self.trees.is_empty() {
            return Err(ModelError::Empty.into());
        }
        for tree in &self.trees {
            tree.validate()?;
        }
        Ok(())
    }

    pub fn predict_proba(&self, features: &[f64; FEATURE_COUNT]) -> Result<[f64; 2], ModelError> {
        if self.trees.is_empty() {
            return Err(ModelError::Empty);
        }

        let mut sum = [0.0; 2];
        for tree in &self.trees {
            let [low, elevated] = tree.leaf_distribution(features)?;
            sum[0] += low;
            sum[1] += elevated;
        }

        let count = self.trees.len() as f64;
        Ok([sum[0] / count, sum[1] / count])
    }
}

impl RiskModel for ForestModel {
    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> Result<RawPrediction, ModelError> {
        let probabilities = self.predict_proba(features)?;
        // argmax with ties resolved toward the first class
        let label = if probabilities[1] > probabilities[0] {
            LABEL_ELEVATED
        } else {
            LABEL_LOW
        };
        Ok(RawPrediction {
            label,
            probabilities,
        })
    }

    fn model_type(&self) -> &str {
        &self.model_type
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ForestFormatError {
    #[error("model JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("model expects {found} features but the service provides {expected}")]
    FeatureCount { found: usize, expected: usize },
    #[error(transparent)]
    Structure(#[from] ModelError),
}
