use supplyrisk_ai::{ExtendedFeatures, ExtendedModel};
use supplyrisk_risk::{RiskInput, StatusVocabulary, select};

use crate::envelope::{ResponseEnvelope, loss};
use crate::error::PipelineError;
use crate::request::ExtendedRequest;

/// Prediction that also accounts for defect rate and supplier reliability.
///
/// Supplier reliability only reaches the model; the risk score ignores it.
#[derive(Debug, Clone)]
pub struct ExtendedPipeline {
    model: ExtendedModel,
}

impl ExtendedPipeline {
    pub fn new(model: ExtendedModel) -> Self {
        Self { model }
    }

    pub fn run(&self, req: &ExtendedRequest) -> Result<ResponseEnvelope, PipelineError> {
        req.validate()?;

        let prediction = self.model.predict(&ExtendedFeatures {
            defective_rate: req.defective_rate,
            delay_days: req.delay_days,
            geo: req.geo,
            transport_status: req.transport_status,
            supplier_reliability: req.supplier_reliability,
        })?;

        let money = loss(prediction, req.required_material);
        let assessment = RiskInput::new(req.delay_days, req.geo, req.transport_status, money)
            .with_defective_rate(req.defective_rate)
            .assess();

        let recommendation = select(
            assessment.risk_pct,
            req.delay_days,
            req.geo,
            StatusVocabulary::Extended.label(req.transport_status),
            prediction.predicted_quantity,
            req.required_material,
        );

        tracing::debug!(
            pipeline = "extended",
            predicted_material = prediction.predicted_quantity,
            risk_pct = assessment.risk_pct,
            tier = recommendation.tier.as_str(),
            "prediction complete"
        );

        Ok(ResponseEnvelope::assemble(
            prediction,
            req.required_material,
            assessment,
            recommendation,
        ))
    }
}
