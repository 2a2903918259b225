use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use supplyrisk_core::ValueObject;

/// Model output after rounding to a whole quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub predicted_quantity: i64,
}

impl ValueObject for PredictionResult {}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read model artifact {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse model artifact {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid model artifact: {0}")]
    InvalidArtifact(String),

    #[error("model was trained on columns {found:?}, expected {expected:?}")]
    FeatureNames {
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("model expects {expected} features, got {got}")]
    FeatureShape { expected: usize, got: usize },

    #[error("model produced a non-finite prediction ({0})")]
    NonFinite(f64),

    #[error("prediction {0} does not fit a whole quantity")]
    OutOfRange(f64),
}

impl ModelError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArtifact(msg.into())
    }
}
