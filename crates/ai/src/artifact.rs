//! Model artifacts on disk.
//!
//! A fitted model is exported once from the training environment into a JSON
//! document and loaded here at startup:
//!
//! ```json
//! {
//!   "kind": "linear",
//!   "feature_names": ["delay_days", "geopolitical_points_bounds", "transport_status"],
//!   "coefficients": [-40.0, 50.0, -80.0],
//!   "intercept": 1010.0,
//!   "metadata": { "name": "material-basic", "trained_at": "2024-05-01T00:00:00Z" }
//! }
//! ```
//!
//! `kind` is either `linear` or `tree_ensemble`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::linear::LinearModel;
use crate::model::RegressionModel;
use crate::result::ModelError;
use crate::tree::TreeEnsemble;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    Linear(LinearModel),
    TreeEnsemble(TreeEnsemble),
}

impl ModelArtifact {
    fn into_model(self) -> Result<Arc<dyn RegressionModel>, ModelError> {
        Ok(match self {
            ModelArtifact::Linear(m) => {
                m.validate()?;
                Arc::new(m)
            }
            ModelArtifact::TreeEnsemble(m) => {
                m.validate()?;
                Arc::new(m)
            }
        })
    }
}

/// Free-form provenance carried alongside the parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    pub name: Option<String>,
    pub description: Option<String>,
    pub trained_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct ArtifactFile {
    #[serde(flatten)]
    model: ModelArtifact,
    #[serde(default)]
    feature_names: Option<Vec<String>>,
    #[serde(default)]
    metadata: ArtifactMetadata,
}

/// A validated model ready to serve, plus what the artifact said about itself.
#[derive(Clone)]
pub struct LoadedModel {
    pub model: Arc<dyn RegressionModel>,
    /// Training column order, when the artifact records it.
    pub feature_names: Option<Vec<String>>,
    pub metadata: ArtifactMetadata,
    pub path: PathBuf,
}

impl core::fmt::Debug for LoadedModel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LoadedModel")
            .field("kind", &self.model.kind())
            .field("n_features", &self.model.n_features())
            .field("feature_names", &self.feature_names)
            .field("metadata", &self.metadata)
            .field("path", &self.path)
            .finish()
    }
}

/// Read, parse and validate a model artifact.
pub fn load_artifact(path: impl AsRef<Path>) -> Result<LoadedModel, ModelError> {
    let path = path.as_ref().to_path_buf();

    let raw = std::fs::read_to_string(&path).map_err(|source| ModelError::Io {
        path: path.clone(),
        source,
    })?;

    let file: ArtifactFile = serde_json::from_str(&raw).map_err(|source| ModelError::Parse {
        path: path.clone(),
        source,
    })?;

    let model = file.model.into_model()?;

    if let Some(names) = &file.feature_names {
        if names.len() != model.n_features() {
            return Err(ModelError::invalid(format!(
                "artifact lists {} feature names for a {}-feature model",
                names.len(),
                model.n_features()
            )));
        }
    }

    tracing::debug!(
        path = %path.display(),
        kind = model.kind(),
        n_features = model.n_features(),
        "model artifact parsed"
    );

    Ok(LoadedModel {
        model,
        feature_names: file.feature_names,
        metadata: file.metadata,
        path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("supplyrisk-artifact-{}.json", uuid::Uuid::now_v7()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_linear_artifact_with_metadata() {
        let path = write_temp(
            r#"{
                "kind": "linear",
                "feature_names": ["a", "b"],
                "coefficients": [2.0, 3.0],
                "intercept": 1.0,
                "metadata": { "name": "demo", "trained_at": "2024-05-01T00:00:00Z" }
            }"#,
        );

        let loaded = load_artifact(&path).unwrap();
        assert_eq!(loaded.model.kind(), "linear");
        assert_eq!(loaded.model.predict(&[1.0, 1.0]).unwrap(), 6.0);
        assert_eq!(loaded.feature_names, Some(vec!["a".to_string(), "b".to_string()]));
        assert_eq!(loaded.metadata.name.as_deref(), Some("demo"));
        assert!(loaded.metadata.trained_at.is_some());

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn loads_tree_ensemble_with_defaults() {
        let path = write_temp(
            r#"{
                "kind": "tree_ensemble",
                "n_features": 1,
                "trees": [
                    { "nodes": [ {"feature": 0, "threshold": 0.5, "left": 1, "right": 2}, {"value": 1.0}, {"value": 3.0} ] },
                    { "nodes": [ {"value": 2.0} ] }
                ]
            }"#,
        );

        let loaded = load_artifact(&path).unwrap();
        assert_eq!(loaded.model.kind(), "tree_ensemble");
        assert_eq!(loaded.model.predict(&[0.0]).unwrap(), 1.5);
        assert_eq!(loaded.model.predict(&[1.0]).unwrap(), 2.5);
        assert_eq!(loaded.feature_names, None);
        assert_eq!(loaded.metadata, ArtifactMetadata::default());

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_artifact("/definitely/not/here/model.json").unwrap_err();
        assert!(matches!(err, ModelError::Io { .. }));
    }

    #[test]
    fn unknown_kind_is_a_parse_error() {
        let path = write_temp(r#"{ "kind": "pickle", "blob": "..." }"#);
        let err = load_artifact(&path).unwrap_err();
        assert!(matches!(err, ModelError::Parse { .. }));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn feature_name_count_must_match_model() {
        let path = write_temp(
            r#"{ "kind": "linear", "feature_names": ["a"], "coefficients": [1.0, 2.0], "intercept": 0.0 }"#,
        );
        let err = load_artifact(&path).unwrap_err();
        assert!(matches!(err, ModelError::InvalidArtifact(_)));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn shipped_artifacts_load() {
        let models = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../models");
        let basic = load_artifact(models.join("model.json")).unwrap();
        assert_eq!(basic.model.n_features(), 3);
        let extended = load_artifact(models.join("body_chain_model.json")).unwrap();
        assert_eq!(extended.model.n_features(), 5);
    }
}
