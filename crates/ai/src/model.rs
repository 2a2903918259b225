use crate::result::ModelError;

/// A fitted regressor.
///
/// Implementations are immutable once built and are shared across request
/// handlers, so `predict` takes `&self` and must not block.
pub trait RegressionModel: Send + Sync + 'static {
    /// Number of features `predict` expects.
    fn n_features(&self) -> usize;

    /// Short description of the model family (for logs).
    fn kind(&self) -> &'static str;

    /// Predict a single value from a feature vector in training column order.
    fn predict(&self, features: &[f64]) -> Result<f64, ModelError>;
}

pub(crate) fn check_shape(expected: usize, features: &[f64]) -> Result<(), ModelError> {
    if features.len() != expected {
        return Err(ModelError::FeatureShape {
            expected,
            got: features.len(),
        });
    }
    Ok(())
}

/// Model that ignores its features and always predicts `value`.
///
/// Useful for wiring checks and for exercising pipelines without a trained artifact.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ConstantModel {
    value: f64,
    n_features: usize,
}

impl ConstantModel {
    pub fn new(value: f64, n_features: usize) -> Self {
        Self { value, n_features }
    }
}

impl RegressionModel for ConstantModel {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn kind(&self) -> &'static str {
        "constant"
    }

    fn predict(&self, features: &[f64]) -> Result<f64, ModelError> {
        check_shape(self.n_features, features)?;
        Ok(self.value)
    }
}
