use serde::{Deserialize, Serialize};

use supplyrisk_core::{DomainError, DomainResult, ValueObject};

/// Values used for fields a caller leaves out.
pub mod defaults {
    pub const DELAY_DAYS: f64 = 0.0;
    pub const GEO: f64 = 0.2;
    pub const TRANSPORT_STATUS: i64 = 0;
    pub const DEFECTIVE_RATE: f64 = 0.0;
    pub const SUPPLIER_RELIABILITY: f64 = 1.0;
    pub const REQUIRED_MATERIAL: f64 = 1000.0;
}

/// Inputs of the basic prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BasicRequest {
    pub delay_days: f64,
    /// Geopolitical score, higher is safer.
    pub geo: f64,
    pub transport_status: i64,
    pub required_material: f64,
}

impl ValueObject for BasicRequest {}

impl Default for BasicRequest {
    fn default() -> Self {
        Self {
            delay_days: defaults::DELAY_DAYS,
            geo: defaults::GEO,
            transport_status: defaults::TRANSPORT_STATUS,
            required_material: defaults::REQUIRED_MATERIAL,
        }
    }
}

impl BasicRequest {
    /// Values only need to be finite; ranges are not enforced.
    pub fn validate(&self) -> DomainResult<()> {
        ensure_finite("delay_days", self.delay_days)?;
        ensure_finite("geopolitical_points_bounds", self.geo)?;
        ensure_finite("required_material", self.required_material)
    }
}

/// Inputs of the extended prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtendedRequest {
    pub defective_rate: f64,
    pub delay_days: f64,
    pub geo: f64,
    pub transport_status: i64,
    /// Fed to the model only; the risk score does not use it.
    pub supplier_reliability: f64,
    pub required_material: f64,
}

impl ValueObject for ExtendedRequest {}

impl Default for ExtendedRequest {
    fn default() -> Self {
        Self {
            defective_rate: defaults::DEFECTIVE_RATE,
            delay_days: defaults::DELAY_DAYS,
            geo: defaults::GEO,
            transport_status: defaults::TRANSPORT_STATUS,
            supplier_reliability: defaults::SUPPLIER_RELIABILITY,
            required_material: defaults::REQUIRED_MATERIAL,
        }
    }
}

impl ExtendedRequest {
    pub fn validate(&self) -> DomainResult<()> {
        ensure_finite("defective_rate", self.defective_rate)?;
        ensure_finite("delay_days", self.delay_days)?;
        ensure_finite("geopolitical_points_bounds", self.geo)?;
        ensure_finite("supplier_reliability", self.supplier_reliability)?;
        ensure_finite("required_material", self.required_material)
    }
}

fn ensure_finite(field: &str, value: f64) -> DomainResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DomainError::validation(format!("{field} must be a finite number")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let b = BasicRequest::default();
        assert_eq!((b.delay_days, b.geo, b.transport_status, b.required_material), (0.0, 0.2, 0, 1000.0));

        let e = ExtendedRequest::default();
        assert_eq!(e.defective_rate, 0.0);
        assert_eq!(e.supplier_reliability, 1.0);
        assert_eq!(e.required_material, 1000.0);
    }

    #[test]
    fn out_of_range_values_pass_validation() {
        let req = BasicRequest {
            delay_days: -3.0,
            geo: 7.5,
            ..BasicRequest::default()
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn non_finite_values_fail_validation() {
        let req = ExtendedRequest {
            supplier_reliability: f64::NAN,
            ..ExtendedRequest::default()
        };
        let err = req.validate().unwrap_err();
        assert_eq!(
            err,
            DomainError::Validation("supplier_reliability must be a finite number".into())
        );
    }
}
