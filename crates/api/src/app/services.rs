use supplyrisk_ai::{BasicModel, ExtendedModel, ModelError};
use supplyrisk_pipeline::{BasicPipeline, ExtendedPipeline};

use crate::config::AppConfig;

/// Everything handlers need: the two pipelines and, through them, the loaded models.
///
/// Built once at startup and shared read-only across requests.
#[derive(Debug, Clone)]
pub struct AppServices {
    pub basic: BasicPipeline,
    pub extended: ExtendedPipeline,
}

impl AppServices {
    pub fn new(basic: BasicModel, extended: ExtendedModel) -> Self {
        Self {
            basic: BasicPipeline::new(basic),
            extended: ExtendedPipeline::new(extended),
        }
    }

    /// Load both model artifacts named by `config`.
    pub fn load(config: &AppConfig) -> Result<Self, ModelError> {
        let basic = BasicModel::load(&config.basic_model_path).inspect_err(|e| {
            tracing::error!(path = %config.basic_model_path.display(), error = %e, "basic model unavailable");
        })?;
        let extended = ExtendedModel::load(&config.extended_model_path).inspect_err(|e| {
            tracing::error!(path = %config.extended_model_path.display(), error = %e, "extended model unavailable");
        })?;
        Ok(Self::new(basic, extended))
    }
}
