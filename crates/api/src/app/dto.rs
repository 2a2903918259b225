use serde::Deserialize;
use serde::de::DeserializeOwned;

use supplyrisk_pipeline::{BasicRequest, ExtendedRequest, defaults};

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /predict`. Every field is optional.
#[derive(Debug, Deserialize)]
pub struct BasicPredictRequest {
    #[serde(default = "default_delay_days", deserialize_with = "lenient::number")]
    pub delay_days: f64,
    #[serde(default = "default_geo", deserialize_with = "lenient::number")]
    pub geopolitical_points_bounds: f64,
    #[serde(default = "default_transport_status", deserialize_with = "lenient::integer")]
    pub transport_status: i64,
    #[serde(default = "default_required_material", deserialize_with = "lenient::number")]
    pub required_material: f64,
}

impl From<BasicPredictRequest> for BasicRequest {
    fn from(body: BasicPredictRequest) -> Self {
        Self {
            delay_days: body.delay_days,
            geo: body.geopolitical_points_bounds,
            transport_status: body.transport_status,
            required_material: body.required_material,
        }
    }
}

/// Body of `POST /predictBody`. Every field is optional.
#[derive(Debug, Deserialize)]
pub struct ExtendedPredictRequest {
    #[serde(default = "default_defective_rate", deserialize_with = "lenient::number")]
    pub defective_rate: f64,
    #[serde(default = "default_delay_days", deserialize_with = "lenient::number")]
    pub delay_days: f64,
    #[serde(default = "default_geo", deserialize_with = "lenient::number")]
    pub geopolitical_points_bounds: f64,
    #[serde(default = "default_transport_status", deserialize_with = "lenient::integer")]
    pub transport_status: i64,
    #[serde(default = "default_supplier_reliability", deserialize_with = "lenient::number")]
    pub supplier_reliability: f64,
    #[serde(default = "default_required_material", deserialize_with = "lenient::number")]
    pub required_material: f64,
}

impl From<ExtendedPredictRequest> for ExtendedRequest {
    fn from(body: ExtendedPredictRequest) -> Self {
        Self {
            defective_rate: body.defective_rate,
            delay_days: body.delay_days,
            geo: body.geopolitical_points_bounds,
            transport_status: body.transport_status,
            supplier_reliability: body.supplier_reliability,
            required_material: body.required_material,
        }
    }
}

fn default_delay_days() -> f64 {
    defaults::DELAY_DAYS
}

fn default_geo() -> f64 {
    defaults::GEO
}

fn default_transport_status() -> i64 {
    defaults::TRANSPORT_STATUS
}

fn default_defective_rate() -> f64 {
    defaults::DEFECTIVE_RATE
}

fn default_supplier_reliability() -> f64 {
    defaults::SUPPLIER_RELIABILITY
}

fn default_required_material() -> f64 {
    defaults::REQUIRED_MATERIAL
}

/// Parse a request body as a JSON object, whatever its `Content-Type` says.
///
/// Arrays and scalars are rejected even though serde could map an array onto
/// the DTO positionally.
pub fn parse_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_slice(bytes)?;
    if !value.is_object() {
        return Err(<serde_json::Error as serde::de::Error>::custom(
            "request body must be a JSON object",
        ));
    }
    serde_json::from_value(value)
}

/// Field coercion matching what clients have always been allowed to send:
/// numbers or numeric strings, never `null`, booleans or containers.
pub mod lenient {
    use core::fmt;

    use serde::Deserializer;
    use serde::de::{self, Unexpected, Visitor};

    pub fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        deserializer.deserialize_any(NumberVisitor)
    }

    pub fn integer<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        deserializer.deserialize_any(IntegerVisitor)
    }

    struct NumberVisitor;

    impl<'de> Visitor<'de> for NumberVisitor {
        type Value = f64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a finite number or numeric string")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
            if v.is_finite() {
                Ok(v)
            } else {
                Err(E::invalid_value(Unexpected::Float(v), &self))
            }
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
            match v.trim().parse::<f64>() {
                Ok(parsed) if parsed.is_finite() => Ok(parsed),
                _ => Err(E::invalid_value(Unexpected::Str(v), &self)),
            }
        }
    }

    struct IntegerVisitor;

    impl<'de> Visitor<'de> for IntegerVisitor {
        type Value = i64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an integer or integer string")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
            i64::try_from(v).map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
        }

        /// Fractional codes truncate toward zero (`1.9` is `1`).
        fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
            let truncated = v.trunc();
            if truncated.is_finite()
                && truncated >= -9_223_372_036_854_775_808.0
                && truncated < 9_223_372_036_854_775_808.0
            {
                Ok(truncated as i64)
            } else {
                Err(E::invalid_value(Unexpected::Float(v), &self))
            }
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
            v.trim()
                .parse::<i64>()
                .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
        }
    }
}
