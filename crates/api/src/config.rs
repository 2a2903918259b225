//! Process configuration, read once from the environment at startup.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const BIND_ADDR_ENV: &str = "SUPPLYRISK_BIND_ADDR";
pub const BASIC_MODEL_ENV: &str = "SUPPLYRISK_BASIC_MODEL";
pub const EXTENDED_MODEL_ENV: &str = "SUPPLYRISK_EXTENDED_MODEL";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_BASIC_MODEL: &str = "models/model.json";
pub const DEFAULT_EXTENDED_MODEL: &str = "models/body_chain_model.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var}={value:?} is not a socket address: {source}")]
    InvalidBindAddr {
        var: &'static str,
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Artifact of the 3-feature model behind `/predict`.
    pub basic_model_path: PathBuf,
    /// Artifact of the 5-feature model behind `/predictBody`.
    pub extended_model_path: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the environment in production, a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = setting(&lookup, BIND_ADDR_ENV, DEFAULT_BIND_ADDR);
        let bind_addr = raw_addr
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                var: BIND_ADDR_ENV,
                value: raw_addr.clone(),
                source,
            })?;

        Ok(Self {
            bind_addr,
            basic_model_path: setting(&lookup, BASIC_MODEL_ENV, DEFAULT_BASIC_MODEL).into(),
            extended_model_path: setting(&lookup, EXTENDED_MODEL_ENV, DEFAULT_EXTENDED_MODEL).into(),
        })
    }
}

fn setting(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    match lookup(key).filter(|v| !v.trim().is_empty()) {
        Some(v) => v.trim().to_string(),
        None => {
            tracing::info!("{key} not set; using {default}");
            default.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:5000".parse().unwrap());
        assert_eq!(config.basic_model_path, PathBuf::from("models/model.json"));
        assert_eq!(
            config.extended_model_path,
            PathBuf::from("models/body_chain_model.json")
        );
    }

    #[test]
    fn overrides_from_lookup() {
        let config = AppConfig::from_lookup(lookup(&[
            (BIND_ADDR_ENV, "127.0.0.1:8080"),
            (BASIC_MODEL_ENV, "/srv/models/basic.json"),
            (EXTENDED_MODEL_ENV, " /srv/models/extended.json "),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.basic_model_path, PathBuf::from("/srv/models/basic.json"));
        assert_eq!(
            config.extended_model_path,
            PathBuf::from("/srv/models/extended.json")
        );
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = AppConfig::from_lookup(lookup(&[(BASIC_MODEL_ENV, "   ")])).unwrap();
        assert_eq!(config.basic_model_path, PathBuf::from(DEFAULT_BASIC_MODEL));
    }

    #[test]
    fn bad_bind_address_is_an_error() {
        let err = AppConfig::from_lookup(lookup(&[(BIND_ADDR_ENV, "port five thousand")])).unwrap_err();
        assert!(err.to_string().contains(BIND_ADDR_ENV));
    }
}
