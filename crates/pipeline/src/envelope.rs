use serde::{Serialize, Serializer};

use supplyrisk_ai::PredictionResult;
use supplyrisk_core::ValueObject;
use supplyrisk_risk::{Recommendation, RiskAssessment, RiskTier};

/// The JSON body returned for every successful prediction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseEnvelope {
    pub predicted_material: i64,
    pub risk_pct: f64,
    pub recommendation: String,
    /// Echo of the requested quantity; whole numbers serialize as integers.
    #[serde(serialize_with = "serialize_quantity")]
    pub required_material: f64,
    /// `predicted_material - required_material`, always a float on the wire.
    pub loss: f64,
    #[serde(skip)]
    pub tier: RiskTier,
}

impl ValueObject for ResponseEnvelope {}

impl ResponseEnvelope {
    pub fn assemble(
        prediction: PredictionResult,
        required_material: f64,
        assessment: RiskAssessment,
        recommendation: Recommendation,
    ) -> Self {
        Self {
            predicted_material: prediction.predicted_quantity,
            risk_pct: assessment.risk_pct,
            recommendation: recommendation.message,
            required_material,
            loss: loss(prediction, required_material),
            tier: recommendation.tier,
        }
    }
}

/// Predicted minus required; negative is a shortage.
pub(crate) fn loss(prediction: PredictionResult, required_material: f64) -> f64 {
    prediction.predicted_quantity as f64 - required_material
}

/// Largest magnitude at which every integer is exactly representable in f64.
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

fn serialize_quantity<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() <= MAX_EXACT_INT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(required_material: f64) -> ResponseEnvelope {
        ResponseEnvelope::assemble(
            PredictionResult {
                predicted_quantity: 950,
            },
            required_material,
            RiskAssessment { risk_pct: 12.5 },
            Recommendation {
                tier: RiskTier::Low,
                message: "ok".into(),
            },
        )
    }

    #[test]
    fn serializes_the_public_shape() {
        let value = serde_json::to_value(envelope(1000.0)).unwrap();
        assert_eq!(
            value,
            json!({
                "predicted_material": 950,
                "risk_pct": 12.5,
                "recommendation": "ok",
                "required_material": 1000,
                "loss": -50.0,
            })
        );
    }

    #[test]
    fn loss_is_a_float_and_fractional_quantities_stay_fractional() {
        let text = serde_json::to_string(&envelope(950.0)).unwrap();
        assert!(text.contains(r#""loss":0.0"#), "{text}");
        assert!(text.contains(r#""required_material":950"#), "{text}");

        let text = serde_json::to_string(&envelope(949.5)).unwrap();
        assert!(text.contains(r#""required_material":949.5"#), "{text}");
        assert!(text.contains(r#""loss":0.5"#), "{text}");
    }
}
