//! Process configuration, read once from the environment.

use std::net::SocketAddr;

use tracing::warn;

use crate::odpt::{DEFAULT_BASE_URL, OdptConfig};

/// Default listen address.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Error from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {var}={value:?}: {reason}")]
pub struct ConfigError {
    var: &'static str,
    value: String,
    reason: String,
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// ODPT consumer key (`ODPT_API_KEY`). Passed through to the API untouched.
    pub consumer_key: String,
    /// ODPT base URL (`ODPT_BASE_URL`)
    pub base_url: String,
    /// Per-request timeout in seconds (`ODPT_TIMEOUT_SECS`)
    pub timeout_secs: u64,
    /// Listen address (`BIND_ADDR`)
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let consumer_key = get("ODPT_API_KEY").unwrap_or_else(|| {
            warn!("ODPT_API_KEY not set; catalog requests will be rejected");
            String::new()
        });

        let base_url = get("ODPT_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_secs = match get("ODPT_TIMEOUT_SECS") {
            Some(value) => value.parse().map_err(|e: std::num::ParseIntError| ConfigError {
                var: "ODPT_TIMEOUT_SECS",
                value: value.clone(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let bind_value = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_value.parse().map_err(|e: std::net::AddrParseError| ConfigError {
            var: "BIND_ADDR",
            value: bind_value.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            consumer_key,
            base_url,
            timeout_secs,
            bind_addr,
        })
    }

    /// Client configuration for the ODPT API.
    pub fn odpt_config(&self) -> OdptConfig {
        OdptConfig::new(&self.consumer_key)
            .with_base_url(&self.base_url)
            .with_timeout(self.timeout_secs)
    }
}
