use serde::{Deserialize, Serialize};

use crate::model::{RegressionModel, check_shape};
use crate::result::ModelError;

/// Ordinary linear regression: `intercept + Σ coefficients[i] * x[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub coefficients: Vec<f64>,
    #[serde(default)]
    pub intercept: f64,
}

impl LinearModel {
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Result<Self, ModelError> {
        let model = Self {
            coefficients,
            intercept,
        };
        model.validate()?;
        Ok(model)
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.coefficients.is_empty() {
            return Err(ModelError::invalid("linear model has no coefficients"));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ModelError::invalid("linear model has non-finite parameters"));
        }
        Ok(())
    }
}

impl RegressionModel for LinearModel {
    fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    fn kind(&self) -> &'static str {
        "linear"
    }

    fn predict(&self, features: &[f64]) -> Result<f64, ModelError> {
        check_shape(self.coefficients.len(), features)?;
        Ok(self.intercept
            + self
                .coefficients
                .iter()
                .zip(features)
                .map(|(c, x)| c * x)
                .sum::<f64>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_product_plus_intercept() {
        let model = LinearModel::new(vec![-40.0, 50.0, -80.0], 1010.0).unwrap();
        // 1010 - 120 + 30 - 80
        assert_eq!(model.predict(&[3.0, 0.6, 1.0]).unwrap(), 840.0);
        assert_eq!(model.n_features(), 3);
    }

    #[test]
    fn rejects_wrong_feature_count() {
        let model = LinearModel::new(vec![1.0, 2.0], 0.0).unwrap();
        let err = model.predict(&[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, ModelError::FeatureShape { expected: 2, got: 3 }));
    }

    #[test]
    fn rejects_empty_or_non_finite_parameters() {
        assert!(LinearModel::new(vec![], 1.0).is_err());
        assert!(LinearModel::new(vec![f64::NAN], 1.0).is_err());
        assert!(LinearModel::new(vec![1.0], f64::INFINITY).is_err());
    }
}
