use serde::{Deserialize, Serialize};

use supplyrisk_core::{ValueObject, round_to_places};

const DELAY_WEIGHT: f64 = 0.5;
const GEO_WEIGHT: f64 = 0.4;
const TRANSPORT_WEIGHT: f64 = 0.1;

/// Defect rates at or above this saturate the defect term.
const DEFECT_CEILING: f64 = 0.5;
const DEFECT_WEIGHT: f64 = 0.3;

/// Money amounts saturate at this magnitude.
const MONEY_SCALE: f64 = 100_000.0;
const LOSS_WEIGHT: f64 = 0.7;
const GAIN_WEIGHT: f64 = 0.3;

/// Normalization denominator (≈ 3.92).
///
/// Derived from the original `(1 - geo)` form of the geo term with delay ≤ 5 and
/// geo ≥ 0.2. The live formula uses `geo` directly, but every published risk
/// percentage was scaled by this value, so it stays as written. The expression
/// is kept in its original evaluation order so the result is bit-identical.
pub const MAX_RAW_SCORE: f64 = 5.0 * 0.5 + (1.0 - 0.2) * 0.4 + 1.0 * 0.1 + 0.7 + 0.3;

/// Inputs to the risk heuristic.
///
/// Values are taken as given: negative delays or out-of-range geo scores are not
/// rejected, they simply flow through the arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskInput {
    /// Delivery delay in days (typically 0–5).
    pub delay_days: f64,
    /// Geopolitical score in \[0, 1\], higher is safer.
    pub geo: f64,
    /// Transport status code (0 normal, 1 disrupted, 2 severely disrupted).
    pub transport_status: i64,
    /// Signed money impact: negative is a loss, positive a gain.
    pub money_loss: f64,
    /// Share of defective pieces (typically 0–0.5).
    pub defective_rate: f64,
}

impl ValueObject for RiskInput {}

impl RiskInput {
    pub fn new(delay_days: f64, geo: f64, transport_status: i64, money_loss: f64) -> Self {
        Self {
            delay_days,
            geo,
            transport_status,
            money_loss,
            defective_rate: 0.0,
        }
    }

    pub fn with_defective_rate(mut self, defective_rate: f64) -> Self {
        self.defective_rate = defective_rate;
        self
    }

    pub fn assess(&self) -> RiskAssessment {
        RiskAssessment {
            risk_pct: percent_from_raw(raw_score(self)),
        }
    }
}

/// Outcome of the heuristic: a percentage in \[0, 100\] with at most two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub risk_pct: f64,
}

impl ValueObject for RiskAssessment {}

/// Unnormalized risk score before scaling by [`MAX_RAW_SCORE`].
pub fn raw_score(input: &RiskInput) -> f64 {
    let mut raw = input.delay_days * DELAY_WEIGHT
        + input.geo * GEO_WEIGHT
        + input.transport_status as f64 * TRANSPORT_WEIGHT;

    raw += (input.defective_rate / DEFECT_CEILING).min(1.0) * DEFECT_WEIGHT;
    raw += money_factor(input.money_loss);
    raw
}

/// Losses raise the score (up to +0.7); gains lower it slightly (down to -0.3).
fn money_factor(money_loss: f64) -> f64 {
    if money_loss < 0.0 {
        (money_loss.abs() / MONEY_SCALE).min(1.0) * LOSS_WEIGHT
    } else {
        -((money_loss / MONEY_SCALE).min(1.0) * GAIN_WEIGHT)
    }
}

fn percent_from_raw(raw: f64) -> f64 {
    let pct = (raw / MAX_RAW_SCORE) * 100.0;
    // NaN and non-positive values both land on 0.
    let clamped = if !(pct > 0.0) {
        0.0
    } else if pct > 100.0 {
        100.0
    } else {
        pct
    };
    round_to_places(clamped, 2)
}

/// Risk percentage for one shipment.
///
/// Pass `0.0` for `defective_rate` when the caller has no defect data.
pub fn compute_risk_percent(
    delay_days: f64,
    geo: f64,
    transport_status: i64,
    money_loss: f64,
    defective_rate: f64,
) -> f64 {
    RiskInput::new(delay_days, geo, transport_status, money_loss)
        .with_defective_rate(defective_rate)
        .assess()
        .risk_pct
}
