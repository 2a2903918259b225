use thiserror::Error;

use supplyrisk_ai::ModelError;
use supplyrisk_core::DomainError;

/// Why a pipeline run produced no response.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The request itself is unusable (caller's fault).
    #[error(transparent)]
    Invalid(#[from] DomainError),

    /// The model could not produce a prediction (service's fault).
    #[error("prediction failed: {0}")]
    Model(#[from] ModelError),
}

impl PipelineError {
    pub fn is_client_error(&self) -> bool {
        matches!(self, PipelineError::Invalid(_))
    }
}
