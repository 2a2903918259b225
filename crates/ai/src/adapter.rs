//! Typed front doors for the two models the service predicts with.
//!
//! Each model was trained on a fixed column order. The adapters own that order:
//! callers hand over named values, the adapter lays them out, calls the model and
//! rounds the output to a whole quantity (ties to even).

use std::marker::PhantomData;
use std::path::Path;
use std::sync::Arc;

use supplyrisk_core::round_half_even;

use crate::artifact::{LoadedModel, load_artifact};
use crate::model::RegressionModel;
use crate::result::{ModelError, PredictionResult};

/// A feature layout a model was trained on.
pub trait FeatureVector: Send + Sync + 'static {
    /// Training column names, in order.
    const COLUMNS: &'static [&'static str];

    fn to_vector(&self) -> Vec<f64>;
}

/// Inputs of the basic material model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasicFeatures {
    pub delay_days: f64,
    pub geo: f64,
    pub transport_status: i64,
}

impl FeatureVector for BasicFeatures {
    const COLUMNS: &'static [&'static str] =
        &["delay_days", "geopolitical_points_bounds", "transport_status"];

    fn to_vector(&self) -> Vec<f64> {
        vec![self.delay_days, self.geo, self.transport_status as f64]
    }
}

/// Inputs of the extended material model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtendedFeatures {
    pub defective_rate: f64,
    pub delay_days: f64,
    pub geo: f64,
    pub transport_status: i64,
    pub supplier_reliability: f64,
}

impl FeatureVector for ExtendedFeatures {
    const COLUMNS: &'static [&'static str] = &[
        "defective_rate",
        "delay_days",
        "geopolitical_points_bounds",
        "transport_status",
        "supplier_reliability",
    ];

    fn to_vector(&self) -> Vec<f64> {
        vec![
            self.defective_rate,
            self.delay_days,
            self.geo,
            self.transport_status as f64,
            self.supplier_reliability,
        ]
    }
}

/// A model bound to a feature layout.
pub struct ModelAdapter<F: FeatureVector> {
    model: Arc<dyn RegressionModel>,
    _features: PhantomData<fn(&F)>,
}

pub type BasicModel = ModelAdapter<BasicFeatures>;
pub type ExtendedModel = ModelAdapter<ExtendedFeatures>;

impl<F: FeatureVector> Clone for ModelAdapter<F> {
    fn clone(&self) -> Self {
        Self {
            model: Arc::clone(&self.model),
            _features: PhantomData,
        }
    }
}

impl<F: FeatureVector> core::fmt::Debug for ModelAdapter<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ModelAdapter")
            .field("columns", &F::COLUMNS)
            .field("kind", &self.model.kind())
            .finish()
    }
}

impl<F: FeatureVector> ModelAdapter<F> {
    /// Bind `model` to this layout; the model must take exactly `F::COLUMNS.len()` features.
    pub fn new(model: Arc<dyn RegressionModel>) -> Result<Self, ModelError> {
        if model.n_features() != F::COLUMNS.len() {
            return Err(ModelError::FeatureShape {
                expected: F::COLUMNS.len(),
                got: model.n_features(),
            });
        }
        Ok(Self {
            model,
            _features: PhantomData,
        })
    }

    /// Bind a loaded artifact, checking its recorded column order when present.
    pub fn from_loaded(loaded: LoadedModel) -> Result<Self, ModelError> {
        if let Some(names) = &loaded.feature_names {
            if !names.iter().map(String::as_str).eq(F::COLUMNS.iter().copied()) {
                return Err(ModelError::FeatureNames {
                    expected: F::COLUMNS.iter().map(|c| c.to_string()).collect(),
                    found: names.clone(),
                });
            }
        }
        Self::new(loaded.model)
    }

    /// Load an artifact from disk and bind it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let loaded = load_artifact(path)?;
        tracing::info!(
            path = %loaded.path.display(),
            kind = loaded.model.kind(),
            n_features = loaded.model.n_features(),
            name = loaded.metadata.name.as_deref().unwrap_or("unnamed"),
            trained_at = ?loaded.metadata.trained_at,
            "model loaded"
        );
        Self::from_loaded(loaded)
    }

    pub fn kind(&self) -> &'static str {
        self.model.kind()
    }

    /// Raw model output for `features`.
    pub fn predict_raw(&self, features: &F) -> Result<f64, ModelError> {
        self.model.predict(&features.to_vector())
    }

    /// Model output rounded to a whole quantity.
    pub fn predict(&self, features: &F) -> Result<PredictionResult, ModelError> {
        let raw = self.predict_raw(features)?;
        if !raw.is_finite() {
            return Err(ModelError::NonFinite(raw));
        }

        let rounded = round_half_even(raw);
        // i64::MAX is not representable in f64; 2^63 is the first value past it.
        if rounded >= 9_223_372_036_854_775_808.0 || rounded < -9_223_372_036_854_775_808.0 {
            return Err(ModelError::OutOfRange(raw));
        }

        Ok(PredictionResult {
            predicted_quantity: rounded as i64,
        })
    }
}
