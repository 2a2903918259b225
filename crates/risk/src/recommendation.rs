use serde::{Deserialize, Serialize};

use supplyrisk_core::{PyFloat, ValueObject};

/// Risk band a percentage falls into.
///
/// Bands are closed at their lower bound: exactly 60 is `High`, exactly 40 is `Moderate`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    pub const HIGH_THRESHOLD: f64 = 60.0;
    pub const MODERATE_THRESHOLD: f64 = 40.0;

    pub fn from_risk_pct(risk_pct: f64) -> Self {
        if risk_pct >= Self::HIGH_THRESHOLD {
            RiskTier::High
        } else if risk_pct >= Self::MODERATE_THRESHOLD {
            RiskTier::Moderate
        } else {
            RiskTier::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Moderate => "moderate",
            RiskTier::High => "high",
        }
    }
}

/// Facts a recommendation is written from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendationContext<'a> {
    pub risk_pct: f64,
    pub delay_days: f64,
    pub geo: f64,
    pub status_label: &'a str,
    pub predicted_quantity: i64,
    pub required_material: f64,
}

impl RecommendationContext<'_> {
    /// Predicted minus required; negative means a shortage.
    pub fn shortfall(&self) -> f64 {
        self.predicted_quantity as f64 - self.required_material
    }
}

/// Tier plus the text shown to the planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub tier: RiskTier,
    pub message: String,
}

impl ValueObject for Recommendation {}

/// Pick the tier for `risk_pct` and write its message.
pub fn select(
    risk_pct: f64,
    delay_days: f64,
    geo: f64,
    status_label: &str,
    predicted_quantity: i64,
    required_material: f64,
) -> Recommendation {
    let ctx = RecommendationContext {
        risk_pct,
        delay_days,
        geo,
        status_label,
        predicted_quantity,
        required_material,
    };
    let tier = RiskTier::from_risk_pct(risk_pct);

    Recommendation {
        tier,
        message: render_message(tier, &ctx),
    }
}

/// Render the message for an already chosen tier.
///
/// The wording (including its punctuation) is what existing clients display and
/// match on; change it only together with them.
pub fn render_message(tier: RiskTier, ctx: &RecommendationContext<'_>) -> String {
    let loss = ctx.shortfall();
    let delay = PyFloat(ctx.delay_days);
    let geo = PyFloat(ctx.geo);
    let status = ctx.status_label;
    let risk_pct = ctx.risk_pct;

    match tier {
        RiskTier::High => format!(
            "The supply risk is high at {risk_pct:.1}%. The predicted shortage is {} units. \
             This high risk is due to a delivery delay of {delay} days, a geopolitical risk score of {geo}, \
             transport issues with status {status}, \
             It is recommended to consider a backup supplier, increase safety stock, or split orders to mitigate this risk.",
            PyFloat(loss.abs()),
        ),
        RiskTier::Moderate => format!(
            "The supply risk is moderate at {risk_pct:.1}%. The predicted shortage is {} units. \
             This moderate risk arises from a delivery delay of {delay} days, a geopolitical risk score of {geo}, \
             transport issues with status {status} \
             It is advised to monitor the supplier closely and consider partial pre-orders to reduce potential loss.",
            PyFloat(loss.abs()),
        ),
        RiskTier::Low => format!(
            "The supply risk is low at {risk_pct:.1}%. The predicted shortage or surplus is {} units. \
             All key factors, including delivery delay, geopolitical risk, transport status, and supplier reliability, \
             are within acceptable limits. You can proceed with the planned orders as scheduled.",
            PyFloat(loss),
        ),
    }
}
