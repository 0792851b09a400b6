#![forbid(unsafe_code)]

use std::env;
use std::net::{AddrParseError, SocketAddr};

pub const ENV_HTTP_BIND: &str = "MILKYWAY_HTTP_BIND";
pub const ENV_PORT: &str = "PORT";
pub const ENV_CORS_ENABLED: &str = "MILKYWAY_CORS_ENABLED";

const DEFAULT_PORT: &str = "8080";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid bind address {value:?}: {source}")]
    InvalidBind {
        value: String,
        #[source]
        source: AddrParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterConfig {
    pub bind: SocketAddr,
    pub cors_enabled: bool,
}

impl AdapterConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// `MILKYWAY_HTTP_BIND` wins over `PORT`; with neither set the server binds `0.0.0.0:8080`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind = match lookup(ENV_HTTP_BIND) {
            Some(bind) => bind.trim().to_string(),
            None => {
                let port = lookup(ENV_PORT)
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .unwrap_or_else(|| DEFAULT_PORT.to_string());
                format!("0.0.0.0:{port}")
            }
        };
        let bind = bind
            .parse()
            .map_err(|source| ConfigError::InvalidBind {
                value: bind.clone(),
                source,
            })?;
        Ok(Self {
            bind,
            cors_enabled: parse_enabled(lookup(ENV_CORS_ENABLED)),
        })
    }
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 8080)),
            cors_enabled: true,
        }
    }
}

fn parse_enabled(value: Option<String>) -> bool {
    match value {
        Some(v) => !matches!(
            v.trim().to_ascii_lowercase().as_str(),
            "0" | "false" | "off" | "no"
        ),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: BTreeMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn at_cfg_01_defaults() {
        let cfg = AdapterConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg, AdapterConfig::default());
    }

    #[test]
    fn at_cfg_02_port_used_when_bind_absent() {
        let cfg = AdapterConfig::from_lookup(lookup_from(&[("PORT", "9090")])).unwrap();
        assert_eq!(cfg.bind, "0.0.0.0:9090".parse().unwrap());
    }

    #[test]
    fn at_cfg_03_bind_wins_over_port() {
        let cfg = AdapterConfig::from_lookup(lookup_from(&[
            ("PORT", "9090"),
            ("MILKYWAY_HTTP_BIND", "127.0.0.1:7000"),
        ]))
        .unwrap();
        assert_eq!(cfg.bind, "127.0.0.1:7000".parse().unwrap());
    }

    #[test]
    fn at_cfg_04_invalid_bind_is_rejected() {
        let err = AdapterConfig::from_lookup(lookup_from(&[("PORT", "not-a-port")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBind { .. }));
    }

    #[test]
    fn at_cfg_05_cors_toggle() {
        for off in ["0", "false", "OFF", " no "] {
            let cfg =
                AdapterConfig::from_lookup(lookup_from(&[("MILKYWAY_CORS_ENABLED", off)])).unwrap();
            assert!(!cfg.cors_enabled, "{off}");
        }
        let cfg =
            AdapterConfig::from_lookup(lookup_from(&[("MILKYWAY_CORS_ENABLED", "yes")])).unwrap();
        assert!(cfg.cors_enabled);
    }
}
