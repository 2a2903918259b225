//! `supplyrisk-ai`
//!
//! **Responsibility:** the prediction model boundary.
//!
//! Models are opaque regressors: a fixed-order feature vector in, one number out.
//! This crate:
//! - defines the `RegressionModel` capability the pipelines depend on
//! - loads fitted models from JSON artifacts (linear or tree ensemble)
//! - adapts them to the two feature layouts the service predicts with
//!
//! It must not know about risk scoring or recommendation text.

pub mod adapter;
pub mod artifact;
pub mod linear;
pub mod model;
pub mod result;
pub mod tree;

pub use adapter::{BasicFeatures, BasicModel, ExtendedFeatures, ExtendedModel, FeatureVector, ModelAdapter};
pub use artifact::{ArtifactMetadata, LoadedModel, ModelArtifact, load_artifact};
pub use linear::LinearModel;
pub use model::{ConstantModel, RegressionModel};
pub use result::{ModelError, PredictionResult};
pub use tree::{Aggregation, RegressionTree, TreeEnsemble, TreeNode};
