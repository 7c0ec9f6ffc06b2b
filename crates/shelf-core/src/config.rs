//! Store configuration.
//!
//! The controller never reads process state itself; a [`StoreConfig`] is
//! built once at the edge (usually from the environment) and handed to the
//! store at construction.

use crate::Result;
use crate::error::InvalidInputError;
use crate::types::StoreUrl;

/// Environment variable holding the store host.
pub const HOST_ENV: &str = "SHELF_API_HOST";

/// Environment variable holding the store port.
pub const PORT_ENV: &str = "SHELF_API_PORT";

/// Host and port of the remote book store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub host: String,
    pub port: u16,
}

impl StoreConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Read the configuration from `SHELF_API_HOST` and `SHELF_API_PORT`.
    ///
    /// Only presence and port syntax are checked. A reachable-but-wrong
    /// host shows up later as a failed fetch.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup(HOST_ENV).ok_or_else(|| InvalidInputError::Other {
            message: format!("{} is not set", HOST_ENV),
        })?;
        let port = lookup(PORT_ENV).ok_or_else(|| InvalidInputError::Other {
            message: format!("{} is not set", PORT_ENV),
        })?;
        let port = port.trim().parse().map_err(|_| InvalidInputError::Other {
            message: format!("{} is not a valid port: '{}'", PORT_ENV, port),
        })?;

        Ok(Self::new(host.trim(), port))
    }

    /// Returns the base URL `http://<host>:<port>`.
    pub fn url(&self) -> Result<StoreUrl> {
        StoreUrl::from_host_port(&self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn reads_host_and_port() {
        let config =
            StoreConfig::from_lookup(lookup(&[(HOST_ENV, "localhost"), (PORT_ENV, "8080")]))
                .unwrap();
        assert_eq!(config, StoreConfig::new("localhost", 8080));
        assert_eq!(config.url().unwrap().as_str(), "http://localhost:8080/");
    }

    #[test]
    fn missing_port_is_an_error() {
        assert!(StoreConfig::from_lookup(lookup(&[(HOST_ENV, "localhost")])).is_err());
    }

    #[test]
    fn non_numeric_port_is_an_error() {
        let result =
            StoreConfig::from_lookup(lookup(&[(HOST_ENV, "localhost"), (PORT_ENV, "http")]));
        assert!(result.is_err());
    }
}
