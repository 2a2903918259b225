use supplyrisk_ai::{BasicFeatures, BasicModel};
use supplyrisk_risk::{RiskInput, StatusVocabulary, select};

use crate::envelope::{ResponseEnvelope, loss};
use crate::error::PipelineError;
use crate::request::BasicRequest;

/// Prediction from delay, geopolitical score and transport status.
///
/// The risk score is computed without defect data.
#[derive(Debug, Clone)]
pub struct BasicPipeline {
    model: BasicModel,
}

impl BasicPipeline {
    pub fn new(model: BasicModel) -> Self {
        Self { model }
    }

    pub fn run(&self, req: &BasicRequest) -> Result<ResponseEnvelope, PipelineError> {
        req.validate()?;

        let prediction = self.model.predict(&BasicFeatures {
            delay_days: req.delay_days,
            geo: req.geo,
            transport_status: req.transport_status,
        })?;

        let money = loss(prediction, req.required_material);
        let assessment = RiskInput::new(req.delay_days, req.geo, req.transport_status, money).assess();

        let recommendation = select(
            assessment.risk_pct,
            req.delay_days,
            req.geo,
            StatusVocabulary::Basic.label(req.transport_status),
            prediction.predicted_quantity,
            req.required_material,
        );

        tracing::debug!(
            pipeline = "basic",
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
