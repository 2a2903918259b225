//! `supplyrisk-risk`
//!
//! **Responsibility:** the deterministic half of a prediction.
//!
//! - `scorer`: the heuristic 0–100 supply risk percentage
//! - `transport`: transport status codes and their display vocabularies
//! - `recommendation`: risk tiers and the recommendation text shown to planners
//!
//! Nothing here knows about models or HTTP; every function is pure.

pub mod recommendation;
pub mod scorer;
pub mod transport;

pub use recommendation::{Recommendation, RecommendationContext, RiskTier, render_message, select};
pub use scorer::{MAX_RAW_SCORE, RiskAssessment, RiskInput, compute_risk_percent, raw_score};
pub use transport::StatusVocabulary;
