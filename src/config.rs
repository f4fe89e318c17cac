//! Server configuration from environment variables
//!
//! - `STUDENT_HOST` - bind address (default `0.0.0.0`)
//! - `STUDENT_PORT` - bind port (default `8000`)
//! - `STUDENT_SEED_DEMO` - start with the two demo records (default `true`)
//! - `STUDENT_STRICT_VALIDATION` - enforce age/grade ranges on add (default `false`)

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

use crate::store::StudentStore;
use crate::validation::ValidationPolicy;

pub const HOST_VAR: &str = "STUDENT_HOST";
pub const PORT_VAR: &str = "STUDENT_PORT";
pub const SEED_VAR: &str = "STUDENT_SEED_DEMO";
pub const STRICT_VAR: &str = "STUDENT_STRICT_VALIDATION";

const DEFAULT_PORT: u16 = 8000;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{var}: '{value}' is not a valid IP address")]
    InvalidHost { var: &'static str, value: String },

    #[error("{var}: '{value}' is not a valid port")]
    InvalidPort { var: &'static str, value: String },

    #[error("{var}: '{value}' is not a boolean (use true/false, 1/0, yes/no)")]
    InvalidBool { var: &'static str, value: String },
}

/// Settings for the HTTP server and the store it hosts
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub seed_demo_data: bool,
    pub validation: ValidationPolicy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            seed_demo_data: true,
            validation: ValidationPolicy::Lenient,
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = match lookup(HOST_VAR) {
            Some(value) => value
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidHost {
                    var: HOST_VAR,
                    value,
                })?,
            None => defaults.host,
        };

        let port = match lookup(PORT_VAR) {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort {
                    var: PORT_VAR,
                    value,
                })?,
            None => defaults.port,
        };

        let seed_demo_data = match lookup(SEED_VAR) {
            Some(value) => parse_bool(SEED_VAR, &value)?,
            None => defaults.seed_demo_data,
        };

        let validation = match lookup(STRICT_VAR) {
            Some(value) if parse_bool(STRICT_VAR, &value)? => ValidationPolicy::Strict,
            _ => defaults.validation,
        };

        Ok(Self {
            host,
            port,
            seed_demo_data,
            validation,
        })
    }

    /// Address to bind the listener to
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Build the store this configuration describes
    pub fn build_store(&self) -> StudentStore {
        if self.seed_demo_data {
            StudentStore::seeded(self.validation)
        } else {
            StudentStore::with_policy(self.validation)
        }
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8000");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            (HOST_VAR, "127.0.0.1"),
            (PORT_VAR, "9090"),
            (SEED_VAR, "false"),
            (STRICT_VAR, "YES"),
        ])
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:9090");
        assert!(!config.seed_demo_data);
        assert_eq!(config.validation, ValidationPolicy::Strict);
    }

    #[test]
    fn test_invalid_port() {
        let err = config_from(&[(PORT_VAR, "eighty")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidPort {
                var: PORT_VAR,
                value: "eighty".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_host_and_bool() {
        assert!(matches!(
            config_from(&[(HOST_VAR, "localhost:80")]),
            Err(ConfigError::InvalidHost { .. })
        ));
        assert!(matches!(
            config_from(&[(SEED_VAR, "maybe")]),
            Err(ConfigError::InvalidBool { .. })
        ));
    }

    #[test]
    fn test_build_store() {
        let seeded = config_from(&[]).unwrap().build_store();
        assert_eq!(seeded.len(), 2);

        let empty = config_from(&[(SEED_VAR, "0"), (STRICT_VAR, "1")])
            .unwrap()
            .build_store();
        assert!(empty.is_empty());
        assert_eq!(empty.policy(), ValidationPolicy::Strict);
    }
}
